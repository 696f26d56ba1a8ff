use crate::{
  config::{LocatorConfig, SourcePolicy},
  error::{ConfigError, LookupError},
  lookup::{DnsResolver, EnvStore, ProcessEnv, SystemDnsResolver, service_env_key},
  source::ResolutionSource,
};

/* ---------------------------------------------------------- */
/// Resolves logical service names to network hosts via DNS or injected
/// environment variables, honoring a preferred source and an allowed-source set.
///
/// All operations are synchronous; [`ServiceLocator::service_host`] may block on
/// the system resolver when the DNS strategy is used. The locator is a
/// single-owner value: mutators take `&mut self`, so sharing one instance across
/// threads requires an external lock (e.g. `RwLock`) supplied by the caller.
#[derive(Debug, Clone)]
pub struct ServiceLocator<R = SystemDnsResolver, E = ProcessEnv> {
  policy: SourcePolicy,
  resolver: R,
  env: E,
}

impl ServiceLocator {
  /// Build a locator backed by the system DNS resolver and the process environment
  pub fn try_new(config: LocatorConfig) -> Result<Self, ConfigError> {
    Self::with_collaborators(config, SystemDnsResolver, ProcessEnv)
  }
}

impl<R, E> ServiceLocator<R, E>
where
  R: DnsResolver,
  E: EnvStore,
{
  /// Build a locator with explicit collaborators, e.g. mocks in tests or an
  /// alternative resolver backend
  pub fn with_collaborators(config: LocatorConfig, resolver: R, env: E) -> Result<Self, ConfigError> {
    let policy = config.validate()?;
    crate::trace::debug!(
      "Built service locator (preferred: {:?}, allowed: {})",
      policy.preferred().map(|s| s.as_str()),
      policy.display_allowed()
    );
    Ok(Self { policy, resolver, env })
  }

  /// Source used when a lookup names none explicitly
  pub fn preferred_source(&self) -> Option<ResolutionSource> {
    self.policy.preferred()
  }

  /// Sources a lookup or a preferred-source assignment may use
  pub fn allowed_sources(&self) -> &[ResolutionSource] {
    self.policy.allowed()
  }

  /// Replace the allowed-source set entirely.
  ///
  /// Fails with [`ConfigError::PreferredSourceNotAllowed`], leaving the
  /// configuration unchanged, when the current preferred source is set and not a
  /// member of the new set. Returns `&mut Self` on success for call chaining.
  pub fn change_allowed_sources(&mut self, new_allowed: Vec<ResolutionSource>) -> Result<&mut Self, ConfigError> {
    self.policy.set_allowed(new_allowed)?;
    crate::trace::debug!("Allowed sources changed to: {}", self.policy.display_allowed());
    Ok(self)
  }

  /// Set or clear the preferred source.
  ///
  /// Clearing (`None`) always succeeds. Setting fails with
  /// [`ConfigError::PreferredSourceNotAllowed`], leaving the configuration
  /// unchanged, when the source is not in the current allowed set. Returns
  /// `&mut Self` on success for call chaining.
  pub fn change_preferred_source(&mut self, new_preferred: Option<ResolutionSource>) -> Result<&mut Self, ConfigError> {
    self.policy.set_preferred(new_preferred)?;
    crate::trace::debug!(
      "Preferred source changed to: {:?}",
      self.policy.preferred().map(|s| s.as_str())
    );
    Ok(self)
  }

  /// Resolve `service_name` to a host through the given source, or through the
  /// preferred source when `source` is `None`.
  ///
  /// A miss (the service is simply not there) is `Ok(None)`, never an error:
  /// - `dns`: an unresolvable name yields `Ok(None)`; a resolved address is
  ///   returned in its string form.
  /// - `env`: the name is translated to `<NAME>_SERVICE_HOST` (see
  ///   [`service_env_key`](crate::service_env_key)); an unset variable yields `Ok(None)`.
  pub fn service_host(&self, service_name: &str, source: Option<ResolutionSource>) -> Result<Option<String>, LookupError> {
    let Some(effective) = source.or(self.policy.preferred()) else {
      return Err(LookupError::NoSourceConfigured);
    };
    if !self.policy.is_allowed(effective) {
      return Err(LookupError::SourceNotAllowed {
        source: effective,
        allowed: self.policy.display_allowed(),
      });
    }

    match effective {
      ResolutionSource::Dns => {
        let host = self.resolver.lookup(service_name).map(|ip| ip.to_string());
        crate::trace::debug!("DNS lookup for '{}': {:?}", service_name, host);
        Ok(host)
      }
      ResolutionSource::Env => {
        let key = service_env_key(service_name);
        let host = self.env.get(&key);
        crate::trace::debug!("Env lookup for '{}' via '{}': {:?}", service_name, key, host);
        Ok(host)
      }
    }
  }
}

/* ---------------------------------------------------------- */
