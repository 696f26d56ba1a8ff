use crate::{
  constants::{DEFAULT_ALLOWED_SOURCES, DEFAULT_PREFERRED_SOURCE},
  error::ConfigError,
  source::{self, ResolutionSource},
};

/* ---------------------------------------------------------- */
/// Caller-supplied locator configuration.
///
/// Source names are plain strings at this layer, the way they arrive from the
/// outside world; recognition against the closed source set happens when the
/// locator is built. Unset fields take the defaults (`preferred_source = "dns"`,
/// `allowed_sources = ["dns", "env"]`), merged field by field.
#[derive(Debug, Clone, PartialEq, Eq, derive_builder::Builder)]
#[builder(build_fn(error = "ConfigError"))]
pub struct LocatorConfig {
  /// Source used when a lookup names none explicitly.
  /// `None` forces every lookup to pass a source.
  #[builder(default = "Some(DEFAULT_PREFERRED_SOURCE.to_string())")]
  pub preferred_source: Option<String>,

  /// Sources a lookup or a preferred-source assignment may use.
  /// Order is preserved for display only.
  #[builder(default = "default_allowed_sources()")]
  pub allowed_sources: Vec<String>,
}

fn default_allowed_sources() -> Vec<String> {
  DEFAULT_ALLOWED_SOURCES.iter().map(|s| s.to_string()).collect()
}

impl Default for LocatorConfig {
  fn default() -> Self {
    Self {
      preferred_source: Some(DEFAULT_PREFERRED_SOURCE.to_string()),
      allowed_sources: default_allowed_sources(),
    }
  }
}

impl LocatorConfig {
  /// Check the config against the closed source set and produce the typed policy.
  ///
  /// Membership of the preferred source in the allowed set is checked before
  /// recognition of the allowed set itself, so an unrecognized preferred source
  /// that is also absent from the allowed list reports [`ConfigError::PreferredSourceNotAllowed`].
  pub(crate) fn validate(&self) -> Result<SourcePolicy, ConfigError> {
    if let Some(preferred) = &self.preferred_source {
      if !self.allowed_sources.iter().any(|s| s == preferred) {
        return Err(ConfigError::PreferredSourceNotAllowed {
          preferred: preferred.clone(),
          allowed: self.allowed_sources.join(", "),
        });
      }
    }

    let unrecognized = self
      .allowed_sources
      .iter()
      .filter(|s| ResolutionSource::try_from(s.as_str()).is_err())
      .cloned()
      .collect::<Vec<_>>();
    if !unrecognized.is_empty() {
      return Err(ConfigError::UnrecognizedSources(unrecognized.join(", ")));
    }

    let allowed = self
      .allowed_sources
      .iter()
      .map(|s| ResolutionSource::try_from(s.as_str()))
      .collect::<Result<Vec<_>, _>>()?;
    let preferred = self
      .preferred_source
      .as_deref()
      .map(ResolutionSource::try_from)
      .transpose()?;

    Ok(SourcePolicy { preferred, allowed })
  }
}

/* ---------------------------------------------------------- */
/// Validated source policy held by a locator.
///
/// Invariant: a set preferred source is always a member of the allowed set,
/// after construction and after every mutation. Mutations validate fully
/// before applying, so a rejected change leaves the policy untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourcePolicy {
  preferred: Option<ResolutionSource>,
  allowed: Vec<ResolutionSource>,
}

impl SourcePolicy {
  pub(crate) fn preferred(&self) -> Option<ResolutionSource> {
    self.preferred
  }

  pub(crate) fn allowed(&self) -> &[ResolutionSource] {
    &self.allowed
  }

  pub(crate) fn is_allowed(&self, source: ResolutionSource) -> bool {
    self.allowed.contains(&source)
  }

  /// Replace the allowed set wholesale.
  /// Rejected when the current preferred source would fall outside the new set.
  pub(crate) fn set_allowed(&mut self, new_allowed: Vec<ResolutionSource>) -> Result<(), ConfigError> {
    if let Some(preferred) = self.preferred {
      if !new_allowed.contains(&preferred) {
        return Err(ConfigError::preferred_not_allowed(preferred, &new_allowed));
      }
    }
    self.allowed = new_allowed;
    Ok(())
  }

  /// Set or clear the preferred source. Clearing always succeeds; setting is
  /// rejected when the source is not in the current allowed set.
  pub(crate) fn set_preferred(&mut self, new_preferred: Option<ResolutionSource>) -> Result<(), ConfigError> {
    let Some(source) = new_preferred else {
      self.preferred = None;
      return Ok(());
    };
    if !self.allowed.contains(&source) {
      return Err(ConfigError::preferred_not_allowed(source, &self.allowed));
    }
    self.preferred = Some(source);
    Ok(())
  }

  pub(crate) fn display_allowed(&self) -> String {
    source::join(&self.allowed)
  }
}

/* ---------------------------------------------------------- */
#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config() {
    let config = LocatorConfig::default();
    assert_eq!(config.preferred_source.as_deref(), Some("dns"));
    assert_eq!(config.allowed_sources, vec!["dns".to_string(), "env".to_string()]);
  }

  #[test]
  fn test_builder_defaults_match_default_impl() {
    let built = LocatorConfigBuilder::default().build().unwrap();
    assert_eq!(built, LocatorConfig::default());
  }

  #[test]
  fn test_validate_default() {
    let policy = LocatorConfig::default().validate().unwrap();
    assert_eq!(policy.preferred(), Some(ResolutionSource::Dns));
    assert_eq!(policy.allowed(), &[ResolutionSource::Dns, ResolutionSource::Env]);
  }

  #[test]
  fn test_validate_preferred_outside_allowed() {
    let config = LocatorConfigBuilder::default()
      .preferred_source(Some("dns".to_string()))
      .allowed_sources(vec!["env".to_string()])
      .build()
      .unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::PreferredSourceNotAllowed { .. }));
    assert_eq!(
      err.to_string(),
      "The preferred source \"dns\" is not one of the allowed sources. (Allowed: env)"
    );
  }

  #[test]
  fn test_validate_unrecognized_sources_all_named() {
    let config = LocatorConfig {
      preferred_source: Some("dns".to_string()),
      allowed_sources: vec!["dns".to_string(), "weird".to_string(), "bogus".to_string()],
    };
    let err = config.validate().unwrap_err();
    assert_eq!(err.to_string(), "Unrecognized sources \"weird, bogus\" used.");
  }

  #[test]
  fn test_validate_membership_checked_before_recognition() {
    // An unrecognized preferred source missing from the allowed list must report
    // the membership failure, not the recognition failure.
    let config = LocatorConfig {
      preferred_source: Some("weird".to_string()),
      allowed_sources: vec!["dns".to_string()],
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::PreferredSourceNotAllowed { .. }));
  }

  #[test]
  fn test_validate_absent_preferred() {
    let config = LocatorConfig {
      preferred_source: None,
      allowed_sources: vec!["env".to_string()],
    };
    let policy = config.validate().unwrap();
    assert_eq!(policy.preferred(), None);
    assert_eq!(policy.allowed(), &[ResolutionSource::Env]);
  }

  #[test]
  fn test_validate_empty_allowed_with_preferred() {
    // Contradictory: a set preferred source can never be a member of an empty set.
    let config = LocatorConfig {
      preferred_source: Some("dns".to_string()),
      allowed_sources: vec![],
    };
    assert!(matches!(
      config.validate(),
      Err(ConfigError::PreferredSourceNotAllowed { .. })
    ));

    // Without a preferred source an empty allowed set is accepted; every lookup
    // will then fail its membership check.
    let config = LocatorConfig {
      preferred_source: None,
      allowed_sources: vec![],
    };
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_set_allowed_preserves_invariant() {
    let mut policy = LocatorConfig::default().validate().unwrap();
    let before = policy.clone();

    let err = policy.set_allowed(vec![ResolutionSource::Env]).unwrap_err();
    assert!(matches!(err, ConfigError::PreferredSourceNotAllowed { .. }));
    assert_eq!(policy, before);

    policy.set_allowed(vec![ResolutionSource::Dns]).unwrap();
    assert_eq!(policy.allowed(), &[ResolutionSource::Dns]);
  }

  #[test]
  fn test_set_preferred() {
    let mut policy = LocatorConfig::default().validate().unwrap();
    policy.set_preferred(Some(ResolutionSource::Env)).unwrap();
    assert_eq!(policy.preferred(), Some(ResolutionSource::Env));

    policy.set_allowed(vec![ResolutionSource::Env]).unwrap();
    let err = policy.set_preferred(Some(ResolutionSource::Dns)).unwrap_err();
    assert!(matches!(err, ConfigError::PreferredSourceNotAllowed { .. }));
    assert_eq!(policy.preferred(), Some(ResolutionSource::Env));

    // Clearing succeeds regardless of the allowed set
    policy.set_preferred(None).unwrap();
    assert_eq!(policy.preferred(), None);
  }
}
