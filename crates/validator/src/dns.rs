//! DNS collaborator.
//!
//! DNS predicates never fail: a timeout or a resolver error is logged and
//! reads as "no records". The [`Resolver`] trait is the seam;
//! [`SystemResolver`] queries the configured nameservers and
//! [`StaticResolver`] answers from memory for tests and offline use.

use std::collections::HashMap;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
#[cfg(feature = "dns")]
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use tracing::{trace, warn};

// ============================================================================
// RECORD TYPES
// ============================================================================

/// DNS resource record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Ns,
    Ptr,
    Soa,
    Txt,
    Srv,
    Caa,
    Naptr,
    Hinfo,
    /// Every record the resolver knows for the host.
    Any,
}

impl RecordType {
    /// Upper-case mnemonic.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Ptr => "PTR",
            Self::Soa => "SOA",
            Self::Txt => "TXT",
            Self::Srv => "SRV",
            Self::Caa => "CAA",
            Self::Naptr => "NAPTR",
            Self::Hinfo => "HINFO",
            Self::Any => "ANY",
        }
    }
}

#[cfg(feature = "dns")]
impl RecordType {
    fn to_wire(self) -> hickory_resolver::proto::rr::RecordType {
        use hickory_resolver::proto::rr::RecordType as Wire;

        match self {
            Self::A => Wire::A,
            Self::Aaaa => Wire::AAAA,
            Self::Cname => Wire::CNAME,
            Self::Mx => Wire::MX,
            Self::Ns => Wire::NS,
            Self::Ptr => Wire::PTR,
            Self::Soa => Wire::SOA,
            Self::Txt => Wire::TXT,
            Self::Srv => Wire::SRV,
            Self::Caa => Wire::CAA,
            Self::Naptr => Wire::NAPTR,
            Self::Hinfo => Wire::HINFO,
            Self::Any => Wire::ANY,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record type name that is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown DNS record type '{0}'")]
pub struct UnknownRecordType(pub String);

impl FromStr for RecordType {
    type Err = UnknownRecordType;

    /// Accepts `MX`, `mx` and `DNS_MX` alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let name = upper.strip_prefix("DNS_").unwrap_or(&upper);
        Ok(match name {
            "A" => Self::A,
            "AAAA" => Self::Aaaa,
            "CNAME" => Self::Cname,
            "MX" => Self::Mx,
            "NS" => Self::Ns,
            "PTR" => Self::Ptr,
            "SOA" => Self::Soa,
            "TXT" => Self::Txt,
            "SRV" => Self::Srv,
            "CAA" => Self::Caa,
            "NAPTR" => Self::Naptr,
            "HINFO" => Self::Hinfo,
            "ANY" | "ALL" => Self::Any,
            _ => return Err(UnknownRecordType(s.to_owned())),
        })
    }
}

// ============================================================================
// RESOLVER
// ============================================================================

/// Why a lookup produced no answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DnsError {
    /// The lookup did not finish in time.
    #[error("lookup of '{host}' timed out after {timeout_ms} ms")]
    Timeout {
        /// Queried host.
        host: String,
        /// Configured bound.
        timeout_ms: u64,
    },

    /// The resolver cannot answer this record type.
    #[error("record type {0} is not supported by this resolver")]
    Unsupported(RecordType),

    /// The resolver reported a failure.
    #[error("lookup failed: {0}")]
    Lookup(String),

    /// DNS support is compiled out or switched off.
    #[error("DNS lookups are disabled")]
    Disabled,
}

/// Answers DNS queries.
///
/// Implementations return the record data as strings. An empty list means
/// the name exists but has no records of that type.
pub trait Resolver: Send + Sync + fmt::Debug {
    /// Looks up records of one type for an ASCII host name.
    fn lookup(&self, host: &str, record: RecordType) -> Result<Vec<String>, DnsError>;
}

/// Resolver backed by the system's DNS configuration.
///
/// Queries go to the nameservers in the system configuration (falling back
/// to the resolver defaults when there is none), one attempt per query,
/// each bounded by the timeout. `ANY` is answered by querying the common
/// record types one by one. IP literals answer `A`, `AAAA` and `ANY`
/// locally. The backend is started on the first lookup and shared by clones.
/// It drives its own runtime, so lookups must not run inside an async task.
#[derive(Clone)]
pub struct SystemResolver {
    timeout: Duration,
    #[cfg(feature = "dns")]
    backend: Arc<OnceLock<Option<hickory_resolver::Resolver>>>,
}

/// Record types collected for an `ANY` lookup.
#[cfg(feature = "dns")]
const ANY_TYPES: [RecordType; 7] = [
    RecordType::A,
    RecordType::Aaaa,
    RecordType::Cname,
    RecordType::Mx,
    RecordType::Ns,
    RecordType::Soa,
    RecordType::Txt,
];

impl SystemResolver {
    /// Creates a resolver that waits at most `timeout` per query.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            #[cfg(feature = "dns")]
            backend: Arc::new(OnceLock::new()),
        }
    }

    /// Per-query bound.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    #[cfg(feature = "dns")]
    fn backend(&self) -> Result<&hickory_resolver::Resolver, DnsError> {
        use hickory_resolver::config::{ResolverConfig, ResolverOpts};

        self.backend
            .get_or_init(|| {
                let (config, mut options) = match hickory_resolver::system_conf::read_system_conf() {
                    Ok(conf) => conf,
                    Err(e) => {
                        warn!(error = %e, "no system DNS configuration, using resolver defaults");
                        (ResolverConfig::default(), ResolverOpts::default())
                    }
                };
                options.timeout = self.timeout;
                options.attempts = 1;

                match hickory_resolver::Resolver::new(config, options) {
                    Ok(resolver) => Some(resolver),
                    Err(e) => {
                        warn!(error = %e, "failed to start DNS resolver");
                        None
                    }
                }
            })
            .as_ref()
            .ok_or_else(|| DnsError::Lookup("resolver unavailable".to_owned()))
    }

    #[cfg(feature = "dns")]
    fn query(&self, host: &str, record: RecordType) -> Result<Vec<String>, DnsError> {
        use hickory_resolver::error::ResolveErrorKind;

        if record == RecordType::Any {
            let mut all = Vec::new();
            for kind in ANY_TYPES {
                match self.query(host, kind) {
                    Ok(mut records) => all.append(&mut records),
                    Err(e @ DnsError::Timeout { .. }) if all.is_empty() => return Err(e),
                    Err(DnsError::Timeout { .. }) => break,
                    Err(e) => trace!(host, record = %kind, error = %e, "skipping record type"),
                }
            }
            return Ok(all);
        }

        let wire = record.to_wire();
        match self.backend()?.lookup(host, wire) {
            Ok(answer) => Ok(answer
                .iter()
                .filter(|data| data.record_type() == wire)
                .map(ToString::to_string)
                .collect()),
            Err(e) => match e.kind() {
                ResolveErrorKind::NoRecordsFound { .. } => Ok(Vec::new()),
                ResolveErrorKind::Timeout => Err(DnsError::Timeout {
                    host: host.to_owned(),
                    timeout_ms: self.timeout.as_millis() as u64,
                }),
                _ => Err(DnsError::Lookup(e.to_string())),
            },
        }
    }

    #[cfg(not(feature = "dns"))]
    fn query(&self, _host: &str, _record: RecordType) -> Result<Vec<String>, DnsError> {
        Err(DnsError::Disabled)
    }
}

impl fmt::Debug for SystemResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemResolver")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Default for SystemResolver {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_DNS_TIMEOUT_MS))
    }
}

impl Resolver for SystemResolver {
    fn lookup(&self, host: &str, record: RecordType) -> Result<Vec<String>, DnsError> {
        if let Ok(ip) = host.parse::<IpAddr>() {
            let matches = match record {
                RecordType::A => ip.is_ipv4(),
                RecordType::Aaaa => ip.is_ipv6(),
                RecordType::Any => true,
                _ => false,
            };
            return Ok(if matches { vec![ip.to_string()] } else { Vec::new() });
        }

        let mut records = self.query(host, record)?;
        records.dedup();
        Ok(records)
    }
}

/// In-memory resolver.
///
/// ```
/// use sieve_validator::dns::{RecordType, Resolver, StaticResolver};
///
/// let resolver = StaticResolver::new()
///     .with_record("example.se", RecordType::Mx, "10 mail.example.se.");
/// assert_eq!(resolver.lookup("EXAMPLE.se.", RecordType::Mx).unwrap().len(), 1);
/// assert!(resolver.lookup("example.se", RecordType::A).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    records: HashMap<String, Vec<(RecordType, String)>>,
}

impl StaticResolver {
    /// Creates an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one record.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_record(
        mut self,
        host: impl AsRef<str>,
        record: RecordType,
        data: impl Into<String>,
    ) -> Self {
        self.records
            .entry(Self::key(host.as_ref()))
            .or_default()
            .push((record, data.into()));
        self
    }

    fn key(host: &str) -> String {
        host.trim_end_matches('.').to_ascii_lowercase()
    }
}

impl Resolver for StaticResolver {
    fn lookup(&self, host: &str, record: RecordType) -> Result<Vec<String>, DnsError> {
        Ok(self
            .records
            .get(&Self::key(host))
            .map(|entries| {
                entries
                    .iter()
                    .filter(|(kind, _)| record == RecordType::Any || *kind == record)
                    .map(|(_, data)| data.clone())
                    .collect()
            })
            .unwrap_or_default())
    }
}

// ============================================================================
// HOST NORMALISATION
// ============================================================================

/// Turns a value into the ASCII host a resolver expects.
///
/// Email addresses contribute their domain part, IDN labels are converted
/// to punycode and a trailing dot is dropped. `None` when nothing
/// host-like remains.
///
/// ```
/// use sieve_validator::dns::normalize_host;
///
/// assert_eq!(normalize_host("jane@Example.SE").as_deref(), Some("example.se"));
/// assert_eq!(normalize_host("bücher.de.").as_deref(), Some("xn--bcher-kva.de"));
/// assert_eq!(normalize_host("  "), None);
/// ```
#[must_use]
pub fn normalize_host(value: &str) -> Option<String> {
    let host = value.rsplit_once('@').map_or(value, |(_, domain)| domain);
    let host = host.trim().trim_end_matches('.');
    if host.is_empty() {
        return None;
    }

    match url::Host::parse(host) {
        Ok(url::Host::Domain(domain)) => Some(domain),
        Ok(url::Host::Ipv4(ip)) => Some(ip.to_string()),
        Ok(url::Host::Ipv6(ip)) => Some(ip.to_string()),
        Err(e) => {
            trace!(host, error = %e, "value is not a host name");
            None
        }
    }
}

// ============================================================================
// QUERIES
// ============================================================================

/// DNS questions about one value.
#[derive(Debug, Clone, Copy)]
pub struct DnsQuery<'a> {
    resolver: &'a dyn Resolver,
    enabled: bool,
    host: Option<&'a str>,
}

impl<'a> DnsQuery<'a> {
    /// Creates a query for an already normalised host.
    #[must_use]
    pub fn new(resolver: &'a dyn Resolver, enabled: bool, host: Option<&'a str>) -> Self {
        Self {
            resolver,
            enabled,
            host,
        }
    }

    /// Records of one type; `None` when there are none or the lookup failed.
    #[must_use]
    pub fn records(&self, record: RecordType) -> Option<Vec<String>> {
        if !self.enabled {
            return None;
        }
        let host = self.host?;

        match self.resolver.lookup(host, record) {
            Ok(records) if records.is_empty() => None,
            Ok(records) => Some(records),
            Err(DnsError::Unsupported(kind)) => {
                trace!(host, record = %kind, "record type not supported by resolver");
                None
            }
            Err(e) => {
                warn!(host, record = %record, error = %e, "DNS lookup failed");
                None
            }
        }
    }

    /// At least one record of the type exists.
    #[must_use]
    pub fn has_record(&self, record: RecordType) -> bool {
        self.records(record).is_some()
    }

    /// The host has an MX record.
    #[must_use]
    pub fn is_mx_record(&self) -> bool {
        self.has_record(RecordType::Mx)
    }

    /// The host has an A or AAAA record.
    #[must_use]
    pub fn is_address_record(&self) -> bool {
        self.has_record(RecordType::A) || self.has_record(RecordType::Aaaa)
    }

    /// The host has an MX, A or AAAA record.
    #[must_use]
    pub fn is_resolvable_host(&self) -> bool {
        self.is_mx_record() || self.is_address_record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("MX", RecordType::Mx)]
    #[case("mx", RecordType::Mx)]
    #[case("DNS_AAAA", RecordType::Aaaa)]
    #[case("dns_txt", RecordType::Txt)]
    #[case("ALL", RecordType::Any)]
    fn parses_record_names(#[case] name: &str, #[case] expected: RecordType) {
        assert_eq!(name.parse::<RecordType>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_record_name() {
        assert!("A6X".parse::<RecordType>().is_err());
    }

    #[test]
    fn static_resolver_any_returns_everything() {
        let resolver = StaticResolver::new()
            .with_record("example.se", RecordType::A, "93.184.216.34")
            .with_record("example.se", RecordType::Mx, "10 mx.example.se.");
        assert_eq!(resolver.lookup("example.se", RecordType::Any).unwrap().len(), 2);
        assert!(resolver.lookup("other.se", RecordType::Any).unwrap().is_empty());
    }

    #[test]
    fn system_resolver_answers_ip_literals_locally() {
        let resolver = SystemResolver::default();
        assert_eq!(resolver.lookup("127.0.0.1", RecordType::A).unwrap(), vec!["127.0.0.1"]);
        assert_eq!(resolver.lookup("::1", RecordType::Any).unwrap(), vec!["::1"]);
        assert!(resolver.lookup("127.0.0.1", RecordType::Aaaa).unwrap().is_empty());
        assert!(resolver.lookup("127.0.0.1", RecordType::Mx).unwrap().is_empty());
    }

    #[test]
    fn system_resolver_clones_share_settings() {
        let resolver = SystemResolver::new(Duration::from_millis(750));
        assert_eq!(resolver.clone().timeout(), Duration::from_millis(750));
        assert!(format!("{resolver:?}").starts_with("SystemResolver"));
    }

    #[cfg(feature = "dns")]
    #[test]
    fn every_record_type_has_a_wire_type() {
        let all = [
            RecordType::A,
            RecordType::Aaaa,
            RecordType::Cname,
            RecordType::Mx,
            RecordType::Ns,
            RecordType::Ptr,
            RecordType::Soa,
            RecordType::Txt,
            RecordType::Srv,
            RecordType::Caa,
            RecordType::Naptr,
            RecordType::Hinfo,
            RecordType::Any,
        ];
        for record in all {
            assert_eq!(record.to_wire().to_string(), record.as_str());
        }
    }

    #[cfg(feature = "dns")]
    #[test]
    #[ignore] // Requires network access
    fn system_resolver_finds_mail_exchangers() {
        let resolver = SystemResolver::default();
        assert!(!resolver.lookup("gmail.com", RecordType::Mx).unwrap().is_empty());
        assert!(!resolver.lookup("gmail.com", RecordType::Any).unwrap().is_empty());

        let query = DnsQuery::new(&resolver, true, Some("gmail.com"));
        assert!(query.is_mx_record());
        assert!(query.is_resolvable_host());
    }

    #[cfg(not(feature = "dns"))]
    #[test]
    fn system_resolver_is_disabled_without_dns() {
        let resolver = SystemResolver::default();
        assert_eq!(resolver.lookup("example.se", RecordType::Mx), Err(DnsError::Disabled));
    }

    #[test]
    fn query_folds_failures_to_none() {
        let resolver = StaticResolver::new().with_record("example.se", RecordType::Mx, "10 mx");
        let query = DnsQuery::new(&resolver, true, Some("example.se"));
        assert!(query.is_mx_record());
        assert!(query.is_resolvable_host());
        assert!(!query.is_address_record());

        let disabled = DnsQuery::new(&resolver, false, Some("example.se"));
        assert!(!disabled.is_resolvable_host());

        let hostless = DnsQuery::new(&resolver, true, None);
        assert!(hostless.records(RecordType::Any).is_none());
    }
}
