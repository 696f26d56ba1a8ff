//! Environment-variable-backed host lookup.

use crate::constants::ENV_HOST_SUFFIX;
use std::collections::HashMap;

/// Trait for environment-variable stores
pub trait EnvStore {
  /// Read a variable, `None` when unset
  fn get(&self, key: &str) -> Option<String>;
}

/// Process-wide environment as exposed by [`std::env::var`].
/// Unset and non-unicode values are both reported as `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
  fn get(&self, key: &str) -> Option<String> {
    std::env::var(key).ok()
  }
}

/// In-memory environment store for testing
#[derive(Debug, Clone, Default)]
pub struct MockEnvStore {
  vars: HashMap<String, String>,
}

impl MockEnvStore {
  /// Create a new empty store
  pub fn new() -> Self {
    Self::default()
  }

  /// Set a variable
  pub fn set(&mut self, key: &str, value: &str) {
    self.vars.insert(key.to_string(), value.to_string());
  }

  /// Set multiple variables at once
  pub fn with_vars(mut self, vars: HashMap<String, String>) -> Self {
    self.vars = vars;
    self
  }
}

impl EnvStore for MockEnvStore {
  fn get(&self, key: &str) -> Option<String> {
    self.vars.get(key).cloned()
  }
}

/// Translate a service name into the environment key carrying its host:
/// ASCII upper-cased, every `-` replaced by `_`, suffixed with `_SERVICE_HOST`.
/// Other characters pass through untouched.
///
/// ```
/// use kube_svc_locator::service_env_key;
/// assert_eq!(service_env_key("my-service"), "MY_SERVICE_SERVICE_HOST");
/// ```
pub fn service_env_key(service_name: &str) -> String {
  let mut key = service_name.to_ascii_uppercase().replace('-', "_");
  key.push_str(ENV_HOST_SUFFIX);
  key
}
