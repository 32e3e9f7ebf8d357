//! DNS and HTTP predicates.

use serde_json::Value;

use super::Input;
use super::coerce::lenient_int;
use crate::dns::{DnsQuery, RecordType, normalize_host};

/// Registered HTTP status codes.
const HTTP_STATUS_CODES: &[i64] = &[
    100, 101, 102, 103,
    200, 201, 202, 203, 204, 205, 206, 207, 208, 226,
    300, 301, 302, 303, 304, 305, 307, 308,
    400, 401, 402, 403, 404, 405, 406, 407, 408, 409, 410, 411, 412, 413, 414, 415, 416, 417, 418,
    421, 422, 423, 424, 425, 426, 428, 429, 431, 451,
    500, 501, 502, 503, 504, 505, 506, 507, 508, 510, 511,
];

/// Request methods accepted by `isRequestMethod`.
const REQUEST_METHODS: &[&str] = &[
    "GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS", "CONNECT", "TRACE",
];

impl Input {
    // ========================================================================
    // DNS
    // ========================================================================

    /// Runs `f` against a DNS query for the value's host.
    fn with_dns<T>(&self, f: impl FnOnce(&DnsQuery<'_>) -> T) -> T {
        let host = self.string_view().and_then(normalize_host);
        let query = DnsQuery::new(
            self.env.resolver(),
            self.env.config().dns.enabled,
            host.as_deref(),
        );
        f(&query)
    }

    /// The host (or email domain) has an MX, A or AAAA record.
    #[must_use]
    pub fn is_resolvable_host(&self) -> bool {
        self.with_dns(|query| query.is_resolvable_host())
    }

    /// The host has an MX record.
    #[must_use]
    pub fn is_mx_record(&self) -> bool {
        self.with_dns(|query| query.is_mx_record())
    }

    /// The host has an A or AAAA record.
    #[must_use]
    pub fn is_address_record(&self) -> bool {
        self.with_dns(|query| query.is_address_record())
    }

    /// The host has at least one record of `record` type.
    #[must_use]
    pub fn is_dns_record(&self, record: RecordType) -> bool {
        self.with_dns(|query| query.has_record(record))
    }

    /// A syntactically valid email whose domain has an MX record.
    #[must_use]
    pub fn is_deliverable_email(&self) -> bool {
        self.is_email() && self.is_mx_record()
    }

    /// Records of `record` type as a JSON array of strings, `None` when there
    /// are none.
    #[must_use]
    pub fn dns_records(&self, record: RecordType) -> Option<Value> {
        self.with_dns(|query| query.records(record))
            .map(|records| Value::Array(records.into_iter().map(Value::String).collect()))
    }

    // ========================================================================
    // HTTP
    // ========================================================================

    /// A registered HTTP status code.
    #[must_use]
    pub fn is_http_status_code(&self) -> bool {
        HTTP_STATUS_CODES.contains(&lenient_int(&self.raw))
    }

    /// Exactly 200.
    #[must_use]
    pub fn is_http_200(&self) -> bool {
        lenient_int(&self.raw) == 200
    }

    /// In `200..300`.
    #[must_use]
    pub fn is_http_success(&self) -> bool {
        (200..300).contains(&lenient_int(&self.raw))
    }

    /// In `400..500`.
    #[must_use]
    pub fn is_http_client_error(&self) -> bool {
        (400..500).contains(&lenient_int(&self.raw))
    }

    /// In `500..600`.
    #[must_use]
    pub fn is_http_server_error(&self) -> bool {
        (500..600).contains(&lenient_int(&self.raw))
    }

    /// An HTTP request method, any case.
    #[must_use]
    pub fn is_request_method(&self) -> bool {
        self.string_view()
            .is_some_and(|s| REQUEST_METHODS.contains(&s.to_ascii_uppercase().as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Environment, ValidatorConfig};
    use crate::dns::StaticResolver;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn resolver() -> StaticResolver {
        StaticResolver::new()
            .with_record("example.se", RecordType::Mx, "10 mail.example.se")
            .with_record("example.se", RecordType::A, "93.184.216.34")
            .with_record("web.example.se", RecordType::Aaaa, "2001:db8::1")
            .with_record("xn--bcher-kva.de", RecordType::Txt, "v=spf1 -all")
    }

    fn input(value: impl Into<Value>) -> Input {
        Input::with_environment(value, Environment::default().with_resolver(resolver()))
    }

    #[test]
    fn resolvable_hosts() {
        assert!(input("example.se").is_resolvable_host());
        assert!(input("Example.SE.").is_mx_record());
        assert!(input("web.example.se").is_resolvable_host());
        assert!(!input("web.example.se").is_mx_record());
        assert!(input("web.example.se").is_address_record());
        assert!(!input("missing.example.se").is_resolvable_host());
        assert!(!input(json!(["example.se"])).is_resolvable_host());
    }

    #[test]
    fn email_domains() {
        assert!(input("jane@example.se").is_deliverable_email());
        assert!(!input("jane@web.example.se").is_deliverable_email());
        assert!(!input("example.se").is_deliverable_email());
    }

    #[test]
    fn idn_hosts_and_record_lists() {
        assert!(input("bücher.de").is_dns_record(RecordType::Txt));
        assert_eq!(
            input("example.se").dns_records(RecordType::Mx),
            Some(json!(["10 mail.example.se"]))
        );
        assert_eq!(input("example.se").dns_records(RecordType::Ns), None);
    }

    #[test]
    fn disabled_dns_is_always_false() {
        let env = Environment::from_config(ValidatorConfig::offline()).with_resolver(resolver());
        assert!(!Input::with_environment("example.se", env).is_resolvable_host());
    }

    #[rstest]
    #[case(json!(200), true)]
    #[case(json!("404"), true)]
    #[case(json!(299), false)]
    #[case(json!("teapot"), false)]
    #[case(json!(418.0), true)]
    fn status_codes(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(Input::new(value).is_http_status_code(), expected);
    }

    #[test]
    fn status_classes() {
        assert!(Input::new(200).is_http_200());
        assert!(Input::new("204").is_http_success());
        assert!(!Input::new(300).is_http_success());
        assert!(Input::new(404).is_http_client_error());
        assert!(Input::new(503).is_http_server_error());
        assert!(!Input::new(600).is_http_server_error());
    }

    #[test]
    fn request_methods() {
        assert!(Input::new("GET").is_request_method());
        assert!(Input::new("patch").is_request_method());
        assert!(!Input::new("FETCH").is_request_method());
    }
}
