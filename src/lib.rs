mod config;
mod constants;
mod error;
mod locator;
mod lookup;
mod source;
mod trace;

pub use config::{LocatorConfig, LocatorConfigBuilder};
pub use error::{ConfigError, LookupError};
pub use locator::ServiceLocator;
pub use lookup::{DnsResolver, EnvStore, MockDnsResolver, MockEnvStore, ProcessEnv, SystemDnsResolver, service_env_key};
pub use source::ResolutionSource;
