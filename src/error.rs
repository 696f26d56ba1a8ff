use crate::source::{self, ResolutionSource};

/// Errors that happen while building or reconfiguring a locator
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
  /* --------------------------------------- */
  /// Preferred source is not a member of the allowed-source set
  #[error("The preferred source \"{preferred}\" is not one of the allowed sources. (Allowed: {allowed})")]
  PreferredSourceNotAllowed {
    /// Rejected preferred source
    preferred: String,
    /// Allowed set at the time of rejection, comma-joined
    allowed: String,
  },

  /// One or more configured sources fall outside the recognized set, comma-joined
  #[error("Unrecognized sources \"{0}\" used.")]
  UnrecognizedSources(String),

  /* --------------------------------------- */
  /// Config builder field left unset. Every field carries a default, so this is
  /// unreachable through the public surface.
  #[error("Uninitialized config field: {0}")]
  UninitializedField(&'static str),
}

impl ConfigError {
  pub(crate) fn preferred_not_allowed(preferred: ResolutionSource, allowed: &[ResolutionSource]) -> Self {
    ConfigError::PreferredSourceNotAllowed {
      preferred: preferred.to_string(),
      allowed: source::join(allowed),
    }
  }
}

impl From<derive_builder::UninitializedFieldError> for ConfigError {
  fn from(e: derive_builder::UninitializedFieldError) -> Self {
    ConfigError::UninitializedField(e.field_name())
  }
}

/// Errors that happen during a service-host lookup
#[derive(thiserror::Error, Debug)]
pub enum LookupError {
  /// Lookup named no source and no preferred source is set
  #[error("You have to define a source, when there is no default source set.")]
  NoSourceConfigured,

  /// Explicit or preferred source is not a member of the allowed set
  #[error("The source \"{source}\" is not one of the allowed sources. (Allowed: {allowed})")]
  SourceNotAllowed {
    /// Rejected lookup source
    source: ResolutionSource,
    /// Allowed set at the time of rejection, comma-joined
    allowed: String,
  },
}
