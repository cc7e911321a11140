//! CDN types: domains, DNS, SSL, cache, security, page rules, clusters

#![allow(missing_docs)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ==================== Domains ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    Active,
    Pending,
    Suspended,
    Deleted,
}

/// SSL or nameserver activation state of a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationStatus {
    Active,
    Pending,
    None,
}

/// A domain served through the CDN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: u64,
    pub user_id: u64,
    pub name: String,
    pub status: DomainStatus,
    pub plan_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_status: Option<ActivationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ns_status: Option<ActivationStatus>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateDomainRequest {
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<u64>,
}

impl CreateDomainRequest {
    /// Request for adding `domain` on the default plan.
    #[must_use]
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            plan_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainUsage {
    pub requests: u64,
    pub bandwidth: u64,
    pub cached_requests: u64,
    pub cached_bandwidth: u64,
    pub threats_blocked: u64,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoisData {
    pub domain: String,
    pub registrar: String,
    pub creation_date: String,
    pub expiration_date: String,
    #[serde(default)]
    pub name_servers: Vec<String>,
    #[serde(default)]
    pub status: Vec<String>,
}

/// How `www.` and the apex domain redirect to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedirectMode {
    #[serde(rename = "www")]
    Www,
    #[serde(rename = "non-www")]
    NonWww,
    #[serde(rename = "none")]
    None,
}

// ==================== DNS ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Txt,
    Ns,
    Srv,
    Caa,
    Ptr,
    Tlsa,
    Alias,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub id: u64,
    pub domain_id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    pub value: String,
    pub ttl: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    pub proxied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_https: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDnsRecordRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_https: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl CreateDnsRecordRequest {
    /// Minimal record with default TTL and no proxying options.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        record_type: DnsRecordType,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            value: value.into(),
            ttl: None,
            priority: None,
            proxied: None,
            cloud: None,
            upstream_https: None,
            weight: None,
            port: None,
        }
    }
}

/// Partial update of a DNS record; unset fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateDnsRecordRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<DnsRecordType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_https: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

// ==================== SSL/HTTPS ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SslCertificateType {
    Custom,
    Free,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SslCertificateStatus {
    Active,
    Pending,
    Expired,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslCertificate {
    pub id: u64,
    pub domain_id: u64,
    #[serde(rename = "type")]
    pub certificate_type: SslCertificateType,
    pub status: SslCertificateStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslInfo {
    pub has_ssl: bool,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub certificate_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub san: Option<Vec<String>>,
}

/// Minimum TLS version accepted at the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TlsVersion {
    #[serde(rename = "1.0")]
    V1_0,
    #[serde(rename = "1.1")]
    V1_1,
    #[serde(rename = "1.2")]
    V1_2,
    #[serde(rename = "1.3")]
    V1_3,
}

/// Protocol used between the edge and the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendProtocol {
    Http,
    Https,
    Auto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslConfigs {
    pub tls_version: TlsVersion,
    pub http2_enabled: bool,
    pub http3_enabled: bool,
    pub https_redirect: bool,
    pub hsts_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsts_max_age: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsts_include_subdomains: Option<bool>,
    pub backend_protocol: BackendProtocol,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddSslRequest {
    pub certificate: String,
    pub private_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_bundle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HstsRequest {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_subdomains: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preload: Option<bool>,
}

// ==================== Cache ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheMode {
    Off,
    Standard,
    Aggressive,
    Bypass,
}

/// Asset minification toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MinifySettings {
    #[serde(default)]
    pub html: bool,
    #[serde(default)]
    pub css: bool,
    #[serde(default)]
    pub js: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
    pub mode: CacheMode,
    pub ttl: u64,
    pub browser_mode: String,
    pub browser_ttl: u64,
    pub developer_mode: bool,
    pub always_online: bool,
    pub cache_cookies: bool,
    pub error_cache_ttl: u64,
    pub minify: MinifySettings,
    pub image_optimization: bool,
    pub image_resize: bool,
}

/// What to purge from the edge cache. Empty means nothing unless
/// `purge_all` is set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PurgeCacheRequest {
    #[serde(default)]
    pub purge_all: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefixes: Option<Vec<String>>,
}

impl PurgeCacheRequest {
    /// Purge everything.
    #[must_use]
    pub fn all() -> Self {
        Self {
            purge_all: true,
            ..Self::default()
        }
    }

    /// Purge the given URLs.
    #[must_use]
    pub fn urls(urls: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            urls: Some(urls.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }
}

// ==================== DDoS ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DdosMode {
    Off,
    Low,
    Medium,
    High,
    UnderAttack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptchaModule {
    Recaptcha,
    Hcaptcha,
    Turnstile,
    Arcaptcha,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DdosSettings {
    pub mode: DdosMode,
    pub captcha_module: CaptchaModule,
    pub cookie_challenge_ttl: u64,
    pub js_challenge_ttl: u64,
    pub captcha_challenge_ttl: u64,
}

/// Partial update of the DDoS settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DdosSettingsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<DdosMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captcha_module: Option<CaptchaModule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_challenge_ttl: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js_challenge_ttl: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captcha_challenge_ttl: Option<u64>,
}

// ==================== Firewall ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirewallAction {
    Allow,
    Block,
    Challenge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpRule {
    pub ip: String,
    pub action: FirewallAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRule {
    pub country: String,
    pub action: FirewallAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallConfigs {
    pub enabled: bool,
    pub default_action: FirewallAction,
    #[serde(default)]
    pub ip_rules: Vec<IpRule>,
    #[serde(default)]
    pub country_rules: Vec<CountryRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetFirewallConfigsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_action: Option<FirewallAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetIpConfigsRequest {
    pub ips: Vec<IpRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetCountryConfigsRequest {
    pub countries: Vec<CountryRule>,
}

// ==================== WAF ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WafMode {
    Off,
    Simulate,
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WafSensitivity {
    Low,
    Medium,
    High,
    Paranoid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WafSettings {
    pub enabled: bool,
    pub mode: WafMode,
    pub sensitivity: WafSensitivity,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WafSettingsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<WafMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<WafSensitivity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WafLayer {
    pub id: String,
    pub name: String,
    pub enabled: bool,
    pub rules_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WafRule {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub enabled: bool,
    pub layer_id: String,
}

// ==================== Page Rules ====================

/// Section of the page-rule tree a listing is filtered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageRuleSection {
    Waf,
    Ratelimit,
    Ddos,
    Firewall,
}

impl PageRuleSection {
    /// Path segment of the section.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Waf => "waf",
            Self::Ratelimit => "ratelimit",
            Self::Ddos => "ddos",
            Self::Firewall => "firewall",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CacheRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
}

/// Rule with just an on/off switch and a mode or action string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModeRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RateLimitRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests_per_second: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burst: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RedirectRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeadersRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_headers: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_headers: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClusterRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<u64>,
}

/// Per-path overrides, one optional block per section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageRuleSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ddos: Option<ModeRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratelimit: Option<RateLimitRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall: Option<ModeRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waf: Option<ModeRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<RedirectRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HeadersRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<ClusterRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRulePath {
    pub id: u64,
    pub domain_id: u64,
    pub path: String,
    pub priority: i64,
    pub enabled: bool,
    #[serde(default)]
    pub rules: PageRuleSettings,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreatePageRulePathRequest {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateRuleRequest {
    pub section: String,
    pub settings: Map<String, Value>,
}

// ==================== Clusters ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterMode {
    RoundRobin,
    LeastConnections,
    IpHash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthCheckMethod {
    Get,
    Head,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckConfig {
    pub enabled: bool,
    pub interval: u64,
    pub timeout: u64,
    pub path: String,
    pub method: HealthCheckMethod,
    #[serde(default)]
    pub expected_codes: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthCheckUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<HealthCheckMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_codes: Option<Vec<u16>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterServer {
    pub id: u64,
    pub address: String,
    pub port: u16,
    pub weight: u32,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup: Option<bool>,
}

/// Origin pool used for load balancing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: u64,
    pub domain_id: u64,
    pub name: String,
    pub mode: ClusterMode,
    #[serde(default)]
    pub servers: Vec<ClusterServer>,
    pub health_check: HealthCheckConfig,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateClusterRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ClusterMode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateClusterRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ClusterMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check: Option<HealthCheckUpdate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddClusterServerRequest {
    pub address: String,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup: Option<bool>,
}

// ==================== Log Forwarders ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogForwarderType {
    Http,
    Syslog,
    S3,
    Datadog,
    Splunk,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogForwarder {
    pub id: u64,
    pub domain_id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub forwarder_type: LogForwarderType,
    pub destination: String,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLogForwarderRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub forwarder_type: LogForwarderType,
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateLogForwarderRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub forwarder_type: Option<LogForwarderType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
}

// ==================== Custom Pages ====================

/// HTML bodies of custom error pages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomPages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e403: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e403waf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e403iprestrict: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e429: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e502: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e504: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captcha_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<String>,
}

// ==================== Plans ====================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanLimits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domains: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_rules: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall_rules: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CdnPlan {
    pub id: u64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub limits: PlanLimits,
}

// ==================== Reports ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportGranularity {
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Traffic,
    Requests,
    Threats,
    Cache,
    StatusCodes,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granularity: Option<ReportGranularity>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub report_type: Option<ReportType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficReport {
    pub timestamp: String,
    pub requests: u64,
    pub bandwidth: u64,
    pub cached_requests: u64,
    pub cached_bandwidth: u64,
    pub threats: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_dns_record_type_wire_names() {
        let types: Vec<DnsRecordType> = serde_json::from_value(json!([
            "A", "AAAA", "CNAME", "MX", "TXT", "NS", "SRV", "CAA", "PTR", "TLSA", "ALIAS"
        ]))
        .unwrap();
        assert_eq!(types.len(), 11);
        assert_eq!(types[1], DnsRecordType::Aaaa);
        assert_eq!(serde_json::to_value(DnsRecordType::Cname).unwrap(), json!("CNAME"));
    }

    #[test]
    fn test_decode_dns_record() {
        let record: DnsRecord = serde_json::from_value(json!({
            "id": 1,
            "domain_id": 1,
            "name": "www",
            "type": "A",
            "value": "1.2.3.4",
            "ttl": 3600,
            "proxied": true,
            "created_at": "2024-01-01",
            "updated_at": "2024-01-01",
        }))
        .unwrap();
        assert_eq!(record.record_type, DnsRecordType::A);
        assert!(record.proxied);
        assert!(record.priority.is_none());
    }

    #[test]
    fn test_update_request_serializes_only_set_fields() {
        let update = UpdateDnsRecordRequest {
            ttl: Some(120),
            proxied: Some(false),
            ..UpdateDnsRecordRequest::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"ttl": 120, "proxied": false})
        );
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_value(RedirectMode::NonWww).unwrap(), json!("non-www"));
        assert_eq!(serde_json::to_value(TlsVersion::V1_2).unwrap(), json!("1.2"));
        assert_eq!(serde_json::to_value(DdosMode::UnderAttack).unwrap(), json!("under_attack"));
        assert_eq!(serde_json::to_value(ClusterMode::IpHash).unwrap(), json!("ip_hash"));
        assert_eq!(serde_json::to_value(ReportType::StatusCodes).unwrap(), json!("status_codes"));
    }

    #[test]
    fn test_decode_cluster() {
        let cluster: Cluster = serde_json::from_value(json!({
            "id": 3,
            "domain_id": 1,
            "name": "origin-pool",
            "mode": "least_connections",
            "servers": [{"id": 1, "address": "10.0.0.1", "port": 443, "weight": 1, "enabled": true}],
            "health_check": {
                "enabled": true,
                "interval": 30,
                "timeout": 5,
                "path": "/health",
                "method": "HEAD",
                "expected_codes": [200]
            },
            "enabled": true,
        }))
        .unwrap();
        assert_eq!(cluster.mode, ClusterMode::LeastConnections);
        assert_eq!(cluster.health_check.method, HealthCheckMethod::Head);
        assert_eq!(cluster.servers[0].port, 443);
    }

    #[test]
    fn test_purge_cache_constructors() {
        assert!(PurgeCacheRequest::all().purge_all);
        let request = PurgeCacheRequest::urls(["https://example.com/a"]);
        assert!(!request.purge_all);
        assert_eq!(request.urls, Some(vec!["https://example.com/a".to_string()]));
    }
}
