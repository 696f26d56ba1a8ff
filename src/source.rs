use crate::{
  constants::{SOURCE_DNS, SOURCE_ENV},
  error::ConfigError,
};
use std::fmt;

/* ---------------------------------------------------------- */
/// Lookup strategy for resolving a service name to a host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
  /// Resolve the service name through the system DNS resolver
  Dns,
  /// Read the host from an injected `*_SERVICE_HOST` environment variable
  Env,
}

impl ResolutionSource {
  /// Canonical lowercase name, as written in caller-supplied configuration
  pub fn as_str(&self) -> &'static str {
    match self {
      ResolutionSource::Dns => SOURCE_DNS,
      ResolutionSource::Env => SOURCE_ENV,
    }
  }
}

impl fmt::Display for ResolutionSource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::error::Error for ResolutionSource {}

impl TryFrom<&str> for ResolutionSource {
  type Error = ConfigError;
  fn try_from(value: &str) -> Result<Self, Self::Error> {
    match value {
      SOURCE_DNS => Ok(ResolutionSource::Dns),
      SOURCE_ENV => Ok(ResolutionSource::Env),
      _ => Err(ConfigError::UnrecognizedSources(value.to_string())),
    }
  }
}

/// Comma-joined display form of a source list, used in error messages
pub(crate) fn join(sources: &[ResolutionSource]) -> String {
  sources.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ")
}

/* ---------------------------------------------------------- */
#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_source() {
    assert_eq!(ResolutionSource::try_from("dns").unwrap(), ResolutionSource::Dns);
    assert_eq!(ResolutionSource::try_from("env").unwrap(), ResolutionSource::Env);
    assert!(ResolutionSource::try_from("DNS").is_err());
    assert!(ResolutionSource::try_from("consul").is_err());
    assert!(ResolutionSource::try_from("").is_err());
  }

  #[test]
  fn test_display_round_trip() {
    for source in [ResolutionSource::Dns, ResolutionSource::Env] {
      assert_eq!(ResolutionSource::try_from(source.to_string().as_str()).unwrap(), source);
    }
  }

  #[test]
  fn test_join() {
    assert_eq!(join(&[ResolutionSource::Dns, ResolutionSource::Env]), "dns, env");
    assert_eq!(join(&[ResolutionSource::Env]), "env");
    assert_eq!(join(&[]), "");
  }
}
