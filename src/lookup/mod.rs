//! Pluggable lookup strategies backing the service locator.
//!
//! Both the DNS resolver and the environment store are injected collaborators
//! so that lookups stay testable without touching process-wide state.

mod dns;
mod env;

pub use dns::{DnsResolver, MockDnsResolver, SystemDnsResolver};
pub use env::{EnvStore, MockEnvStore, ProcessEnv, service_env_key};
