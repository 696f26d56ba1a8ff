//! DNS-backed host lookup.

use std::{
  collections::HashMap,
  net::{IpAddr, ToSocketAddrs},
};

/// Trait for DNS resolution strategies
pub trait DnsResolver {
  /// Resolve a hostname to an IP address, `None` when the name does not resolve
  fn lookup(&self, hostname: &str) -> Option<IpAddr>;
}

/// Blocking resolver backed by the operating system (`getaddrinfo` via [`ToSocketAddrs`]).
/// Resolver failures and empty answers are both reported as `None`; the
/// distinction is not observable through `getaddrinfo` anyway.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDnsResolver;

impl DnsResolver for SystemDnsResolver {
  fn lookup(&self, hostname: &str) -> Option<IpAddr> {
    // Port 0 satisfies ToSocketAddrs; only the IP part is of interest here.
    let mut addrs = (hostname, 0u16).to_socket_addrs().ok()?;
    addrs.next().map(|addr| addr.ip())
  }
}

/// Mock DNS resolver for testing
#[derive(Debug, Clone, Default)]
pub struct MockDnsResolver {
  responses: HashMap<String, IpAddr>,
}

impl MockDnsResolver {
  /// Create a new mock DNS resolver
  pub fn new() -> Self {
    Self::default()
  }

  /// Add a mock response for a hostname
  pub fn add_response(&mut self, hostname: &str, address: IpAddr) {
    self.responses.insert(hostname.to_string(), address);
  }

  /// Set multiple responses at once
  pub fn with_responses(mut self, responses: HashMap<String, IpAddr>) -> Self {
    self.responses = responses;
    self
  }
}

impl DnsResolver for MockDnsResolver {
  fn lookup(&self, hostname: &str) -> Option<IpAddr> {
    self.responses.get(hostname).copied()
  }
}
