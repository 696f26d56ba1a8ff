/// Canonical name of the DNS lookup source in caller-supplied configuration
pub const SOURCE_DNS: &str = "dns";

/// Canonical name of the environment-variable lookup source in caller-supplied configuration
pub const SOURCE_ENV: &str = "env";

/// Source used when a lookup names none explicitly and the caller did not override it
pub const DEFAULT_PREFERRED_SOURCE: &str = SOURCE_DNS;

/// Sources permitted when the caller did not override the allowed set
pub const DEFAULT_ALLOWED_SOURCES: &[&str] = &[SOURCE_DNS, SOURCE_ENV];

/// Suffix of the environment variable carrying a service host, e.g. `MY_SERVICE_SERVICE_HOST`.
/// Kubernetes injects these per exposed service.
pub const ENV_HOST_SUFFIX: &str = "_SERVICE_HOST";
