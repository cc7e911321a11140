//! CDN operations.
//!
//! Every method returns the decoded envelope or a `MizbanError`. Paths are
//! rooted at `/api/v1/cdn/ng`, mostly below `/domains/{id}`.

use std::sync::Arc;

use mizban_domain::types::cdn::{
    AddClusterServerRequest, AddSslRequest, BackendProtocol, CacheMode, CacheSettings,
    CaptchaModule, CdnPlan, Cluster, CreateClusterRequest, CreateDnsRecordRequest,
    CreateDomainRequest, CreateLogForwarderRequest, CreatePageRulePathRequest, CreateRuleRequest,
    CustomPages, DdosSettings, DdosSettingsUpdate, DnsRecord, Domain, DomainUsage,
    FirewallConfigs, HstsRequest, LogForwarder, MinifySettings, PageRulePath, PageRuleSection,
    PurgeCacheRequest, RedirectMode, ReportsRequest, SetFirewallConfigsRequest, SslCertificate,
    SslConfigs, SslInfo, TlsVersion, UpdateClusterRequest, UpdateDnsRecordRequest,
    UpdateLogForwarderRequest, WafLayer, WafRule, WafSettings, WafSettingsUpdate, WhoisData,
};
use mizban_domain::{Empty, HttpMethod, Payload};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use super::{call, flag, form};
use crate::client::{ApiClient, ApiResult};

const PREFIX: &str = "/api/v1/cdn/ng";

/// CDN module.
#[derive(Debug, Clone)]
pub struct CdnModule {
    client: Arc<ApiClient>,
}

#[allow(clippy::missing_errors_doc)]
impl CdnModule {
    /// Creates the module over a shared client.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        call(&self.client, HttpMethod::Get, path, None).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Option<Payload>,
    ) -> ApiResult<T> {
        call(&self.client, method, path, payload).await
    }

    async fn toggle(&self, path: &str, enabled: bool) -> ApiResult<Empty> {
        let payload = form(&json!({ "enabled": flag(enabled) }))?;
        self.send(HttpMethod::Post, path, Some(payload)).await
    }

    async fn set_ttl(&self, path: &str, ttl: u64) -> ApiResult<Empty> {
        self.send(HttpMethod::Post, path, Some(form(&json!({ "ttl": ttl }))?))
            .await
    }

    // ==================== Domains ====================

    /// Lists all domains.
    pub async fn list_domains(&self) -> ApiResult<Vec<Domain>> {
        self.get(&format!("{PREFIX}/domains")).await
    }

    /// Fetches one domain.
    pub async fn get_domain(&self, domain_id: u64) -> ApiResult<Domain> {
        self.get(&domain_path(domain_id, "")).await
    }

    /// Adds a domain.
    pub async fn add_domain(&self, request: &CreateDomainRequest) -> ApiResult<Domain> {
        self.send(
            HttpMethod::Post,
            &format!("{PREFIX}/domains"),
            Some(form(request)?),
        )
        .await
    }

    /// Deletes a domain using the code from [`Self::send_delete_confirm_code`].
    pub async fn delete_domain(&self, domain_id: u64, confirm_code: &str) -> ApiResult<Empty> {
        let payload = form(&json!({ "confirm_code": confirm_code }))?;
        self.send(HttpMethod::Delete, &domain_path(domain_id, ""), Some(payload))
            .await
    }

    /// Sends the confirmation code needed to delete a domain.
    pub async fn send_delete_confirm_code(&self, domain_id: u64) -> ApiResult<Empty> {
        self.get(&domain_path(domain_id, "/send-confirm-code"))
            .await
    }

    /// Traffic usage of a domain.
    pub async fn get_usage(&self, domain_id: u64) -> ApiResult<DomainUsage> {
        self.get(&domain_path(domain_id, "/usage")).await
    }

    /// WHOIS data of a domain.
    pub async fn get_whois(&self, domain_id: u64) -> ApiResult<WhoisData> {
        self.get(&domain_path(domain_id, "/whois")).await
    }

    /// Analytics reports. The report shape depends on the request.
    pub async fn get_reports(
        &self,
        domain_id: u64,
        request: Option<&ReportsRequest>,
    ) -> ApiResult<Value> {
        let payload = request.map(form).transpose()?;
        self.send(HttpMethod::Post, &domain_path(domain_id, "/reports"), payload)
            .await
    }

    /// Sets how `www.` and the apex redirect.
    pub async fn set_redirect_mode(&self, domain_id: u64, mode: RedirectMode) -> ApiResult<Empty> {
        let payload = form(&json!({ "mode": mode }))?;
        self.send(
            HttpMethod::Post,
            &domain_path(domain_id, "/redirect-mode"),
            Some(payload),
        )
        .await
    }

    // ==================== DNS ====================

    /// Lists DNS records.
    pub async fn list_dns_records(&self, domain_id: u64) -> ApiResult<Vec<DnsRecord>> {
        self.get(&domain_path(domain_id, "/dns")).await
    }

    /// Fetches one DNS record.
    pub async fn get_dns_record(&self, domain_id: u64, record_id: u64) -> ApiResult<DnsRecord> {
        self.get(&domain_path(domain_id, &format!("/dns/{record_id}")))
            .await
    }

    /// Adds a DNS record.
    pub async fn add_dns_record(
        &self,
        domain_id: u64,
        request: &CreateDnsRecordRequest,
    ) -> ApiResult<DnsRecord> {
        self.send(
            HttpMethod::Post,
            &domain_path(domain_id, "/dns"),
            Some(form(request)?),
        )
        .await
    }

    /// Updates a DNS record.
    pub async fn update_dns_record(
        &self,
        domain_id: u64,
        record_id: u64,
        request: &UpdateDnsRecordRequest,
    ) -> ApiResult<DnsRecord> {
        self.send(
            HttpMethod::Put,
            &domain_path(domain_id, &format!("/dns/{record_id}")),
            Some(form(request)?),
        )
        .await
    }

    /// Deletes a DNS record.
    pub async fn delete_dns_record(&self, domain_id: u64, record_id: u64) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Delete,
            &domain_path(domain_id, &format!("/dns/{record_id}")),
            None,
        )
        .await
    }

    /// Pulls the existing records from the domain's current nameservers.
    pub async fn fetch_records(&self, domain_id: u64) -> ApiResult<Vec<DnsRecord>> {
        self.send(
            HttpMethod::Post,
            &domain_path(domain_id, "/dns/fetch-records"),
            None,
        )
        .await
    }

    /// Exports the zone as text.
    pub async fn export_dns_records(&self, domain_id: u64) -> ApiResult<String> {
        self.get(&domain_path(domain_id, "/dns/export")).await
    }

    /// Imports records from zone file text.
    pub async fn import_dns_records(
        &self,
        domain_id: u64,
        records: &str,
    ) -> ApiResult<Vec<DnsRecord>> {
        let payload = form(&json!({ "file": records }))?;
        self.send(
            HttpMethod::Post,
            &domain_path(domain_id, "/dns/import"),
            Some(payload),
        )
        .await
    }

    /// Records that can be proxied through the CDN.
    pub async fn get_proxiable_records(&self, domain_id: u64) -> ApiResult<Vec<DnsRecord>> {
        self.get(&domain_path(domain_id, "/dns/proxiable")).await
    }

    /// Sets custom nameservers.
    pub async fn set_custom_nameservers(
        &self,
        domain_id: u64,
        nameservers: &[String],
    ) -> ApiResult<Empty> {
        let payload = form(&json!({ "nameservers": nameservers }))?;
        self.send(
            HttpMethod::Post,
            &domain_path(domain_id, "/dns/custom-ns"),
            Some(payload),
        )
        .await
    }

    /// Turns DNSSEC on or off.
    pub async fn set_dnssec(&self, domain_id: u64, enabled: bool) -> ApiResult<Empty> {
        self.toggle(&domain_path(domain_id, "/dns/dnssec"), enabled)
            .await
    }

    // ==================== SSL/HTTPS ====================

    /// Lists certificates.
    pub async fn list_ssl(&self, domain_id: u64) -> ApiResult<Vec<SslCertificate>> {
        self.get(&https_path(domain_id, "/ssl")).await
    }

    /// Details of the active certificate.
    pub async fn get_ssl_info(&self, domain_id: u64) -> ApiResult<SslInfo> {
        self.get(&https_path(domain_id, "/ssl/get-info")).await
    }

    /// TLS and HTTPS settings.
    pub async fn get_ssl_configs(&self, domain_id: u64) -> ApiResult<SslConfigs> {
        self.get(&https_path(domain_id, "/ssl/get-configs")).await
    }

    /// Uploads a custom certificate.
    pub async fn add_custom_ssl(
        &self,
        domain_id: u64,
        request: &AddSslRequest,
    ) -> ApiResult<SslCertificate> {
        self.send(
            HttpMethod::Post,
            &https_path(domain_id, "/ssl/add"),
            Some(form(request)?),
        )
        .await
    }

    /// Requests a free certificate.
    pub async fn request_free_ssl(&self, domain_id: u64) -> ApiResult<SslCertificate> {
        self.send(HttpMethod::Post, &https_path(domain_id, "/ssl/free"), None)
            .await
    }

    /// Removes a certificate.
    pub async fn remove_ssl(&self, domain_id: u64, ssl_id: u64) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Delete,
            &https_path(domain_id, &format!("/ssl/{ssl_id}")),
            None,
        )
        .await
    }

    /// Attaches a certificate to the domain.
    pub async fn attach_ssl(&self, domain_id: u64, ssl_id: u64) -> ApiResult<Empty> {
        let payload = form(&json!({ "ssl_id": ssl_id }))?;
        self.send(
            HttpMethod::Post,
            &https_path(domain_id, "/attach"),
            Some(payload),
        )
        .await
    }

    /// Detaches the current certificate.
    pub async fn detach_ssl(&self, domain_id: u64) -> ApiResult<Empty> {
        self.send(HttpMethod::Post, &https_path(domain_id, "/detach"), None)
            .await
    }

    /// Attaches the platform default certificate.
    pub async fn attach_default_ssl(&self, domain_id: u64) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Post,
            &https_path(domain_id, "/attach-default"),
            None,
        )
        .await
    }

    /// Detaches the platform default certificate.
    pub async fn detach_default_ssl(&self, domain_id: u64) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Post,
            &https_path(domain_id, "/detach-default"),
            None,
        )
        .await
    }

    /// Sets the minimum TLS version.
    pub async fn set_tls_version(&self, domain_id: u64, version: TlsVersion) -> ApiResult<Empty> {
        let payload = form(&json!({ "version": version }))?;
        self.send(
            HttpMethod::Post,
            &https_path(domain_id, "/ssl/tls-version"),
            Some(payload),
        )
        .await
    }

    /// Configures HSTS.
    pub async fn set_hsts(&self, domain_id: u64, request: &HstsRequest) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Post,
            &https_path(domain_id, "/hsts"),
            Some(form(request)?),
        )
        .await
    }

    /// Turns the HTTP to HTTPS redirect on or off.
    pub async fn set_https_redirect(&self, domain_id: u64, enabled: bool) -> ApiResult<Empty> {
        self.toggle(&https_path(domain_id, "/redirect"), enabled)
            .await
    }

    /// Overrides the Content-Security-Policy header.
    pub async fn set_csp_override(&self, domain_id: u64, csp: &str) -> ApiResult<Empty> {
        let payload = form(&json!({ "csp": csp }))?;
        self.send(
            HttpMethod::Post,
            &https_path(domain_id, "/csp-override"),
            Some(payload),
        )
        .await
    }

    /// Sets the protocol used towards the origin.
    pub async fn set_backend_protocol(
        &self,
        domain_id: u64,
        protocol: BackendProtocol,
    ) -> ApiResult<Empty> {
        let payload = form(&json!({ "protocol": protocol }))?;
        self.send(
            HttpMethod::Post,
            &https_path(domain_id, "/backend-protocol"),
            Some(payload),
        )
        .await
    }

    /// Turns HTTP/3 on or off.
    pub async fn set_http3(&self, domain_id: u64, enabled: bool) -> ApiResult<Empty> {
        self.toggle(&https_path(domain_id, "/h3"), enabled).await
    }

    // ==================== Cache ====================

    /// Current cache settings.
    pub async fn get_cache_settings(&self, domain_id: u64) -> ApiResult<CacheSettings> {
        self.get(&cache_path(domain_id, "")).await
    }

    /// Sets the edge cache mode.
    pub async fn set_cache_mode(&self, domain_id: u64, mode: CacheMode) -> ApiResult<Empty> {
        let payload = form(&json!({ "mode": mode }))?;
        self.send(
            HttpMethod::Post,
            &cache_path(domain_id, "/edge/change-mode"),
            Some(payload),
        )
        .await
    }

    /// Sets the edge cache TTL in seconds.
    pub async fn set_cache_ttl(&self, domain_id: u64, ttl: u64) -> ApiResult<Empty> {
        self.set_ttl(&cache_path(domain_id, "/edge/change-ttl"), ttl)
            .await
    }

    /// Bypasses the cache while developing.
    pub async fn set_developer_mode(&self, domain_id: u64, enabled: bool) -> ApiResult<Empty> {
        self.toggle(&cache_path(domain_id, "/edge/developer-mode"), enabled)
            .await
    }

    /// Serves cached pages while the origin is down.
    pub async fn set_always_online(&self, domain_id: u64, enabled: bool) -> ApiResult<Empty> {
        self.toggle(&cache_path(domain_id, "/edge/always-online"), enabled)
            .await
    }

    /// Includes cookies in the cache key.
    pub async fn set_cache_cookies(&self, domain_id: u64, enabled: bool) -> ApiResult<Empty> {
        self.toggle(&cache_path(domain_id, "/edge/cache-cookies"), enabled)
            .await
    }

    /// Sets the browser cache mode.
    pub async fn set_browser_cache_mode(&self, domain_id: u64, mode: &str) -> ApiResult<Empty> {
        let payload = form(&json!({ "mode": mode }))?;
        self.send(
            HttpMethod::Post,
            &cache_path(domain_id, "/browser/change-mode"),
            Some(payload),
        )
        .await
    }

    /// Sets the browser cache TTL in seconds.
    pub async fn set_browser_cache_ttl(&self, domain_id: u64, ttl: u64) -> ApiResult<Empty> {
        self.set_ttl(&cache_path(domain_id, "/browser/change-ttl"), ttl)
            .await
    }

    /// Sets how long error responses are cached.
    pub async fn set_error_cache_ttl(&self, domain_id: u64, ttl: u64) -> ApiResult<Empty> {
        self.set_ttl(&cache_path(domain_id, "/errors/cache-ttl"), ttl)
            .await
    }

    /// Purges cached content. `None` sends `purge_all=0` and nothing else.
    pub async fn purge_cache(
        &self,
        domain_id: u64,
        request: Option<&PurgeCacheRequest>,
    ) -> ApiResult<Empty> {
        let default = PurgeCacheRequest::default();
        let request = request.unwrap_or(&default);
        let payload = form(&json!({
            "purge_all": flag(request.purge_all),
            "urls": request.urls,
            "tags": request.tags,
            "prefixes": request.prefixes,
        }))?;
        self.send(
            HttpMethod::Post,
            &cache_path(domain_id, "/edge/purge-cache"),
            Some(payload),
        )
        .await
    }

    // ==================== Acceleration ====================

    /// Sets asset minification.
    pub async fn set_minify(&self, domain_id: u64, settings: MinifySettings) -> ApiResult<Empty> {
        let payload = form(&json!({
            "html": flag(settings.html),
            "css": flag(settings.css),
            "js": flag(settings.js),
        }))?;
        self.send(
            HttpMethod::Post,
            &domain_path(domain_id, "/acceleration/assets/minify"),
            Some(payload),
        )
        .await
    }

    /// Turns image optimization on or off.
    pub async fn set_image_optimization(&self, domain_id: u64, enabled: bool) -> ApiResult<Empty> {
        self.toggle(
            &domain_path(domain_id, "/acceleration/images/optimize"),
            enabled,
        )
        .await
    }

    /// Turns image resizing on or off.
    pub async fn set_image_resize(&self, domain_id: u64, enabled: bool) -> ApiResult<Empty> {
        self.toggle(
            &domain_path(domain_id, "/acceleration/images/resize"),
            enabled,
        )
        .await
    }

    // ==================== DDoS ====================

    /// DDoS protection settings.
    pub async fn get_ddos_settings(&self, domain_id: u64) -> ApiResult<DdosSettings> {
        self.get(&domain_path(domain_id, "/ddos")).await
    }

    /// Updates DDoS protection settings.
    pub async fn set_ddos_settings(
        &self,
        domain_id: u64,
        settings: &DdosSettingsUpdate,
    ) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Post,
            &domain_path(domain_id, "/ddos"),
            Some(form(settings)?),
        )
        .await
    }

    /// Chooses the captcha provider.
    pub async fn set_captcha_module(
        &self,
        domain_id: u64,
        module: CaptchaModule,
    ) -> ApiResult<Empty> {
        let payload = form(&json!({ "module": module }))?;
        self.send(
            HttpMethod::Post,
            &domain_path(domain_id, "/ddos/captcha-module"),
            Some(payload),
        )
        .await
    }

    /// Sets how long a solved captcha is trusted.
    pub async fn set_captcha_ttl(&self, domain_id: u64, ttl: u64) -> ApiResult<Empty> {
        self.set_ttl(&domain_path(domain_id, "/ddos/set-ttl/captcha"), ttl)
            .await
    }

    /// Sets how long a passed cookie challenge is trusted.
    pub async fn set_cookie_challenge_ttl(&self, domain_id: u64, ttl: u64) -> ApiResult<Empty> {
        self.set_ttl(&domain_path(domain_id, "/ddos/set-ttl/cookie"), ttl)
            .await
    }

    /// Sets how long a passed JavaScript challenge is trusted.
    pub async fn set_js_challenge_ttl(&self, domain_id: u64, ttl: u64) -> ApiResult<Empty> {
        self.set_ttl(&domain_path(domain_id, "/ddos/set-ttl/js"), ttl)
            .await
    }

    // ==================== Firewall ====================

    /// Firewall configuration.
    pub async fn get_firewall_configs(&self, domain_id: u64) -> ApiResult<FirewallConfigs> {
        self.get(&domain_path(domain_id, "/firewall")).await
    }

    /// Updates the firewall configuration.
    pub async fn set_firewall_configs(
        &self,
        domain_id: u64,
        request: &SetFirewallConfigsRequest,
    ) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Post,
            &domain_path(domain_id, "/firewall"),
            Some(form(request)?),
        )
        .await
    }

    // ==================== WAF ====================

    /// WAF settings.
    pub async fn get_waf_settings(&self, domain_id: u64) -> ApiResult<WafSettings> {
        self.get(&domain_path(domain_id, "/waf")).await
    }

    /// Updates WAF settings.
    pub async fn set_waf_settings(
        &self,
        domain_id: u64,
        settings: &WafSettingsUpdate,
    ) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Put,
            &domain_path(domain_id, "/waf"),
            Some(form(settings)?),
        )
        .await
    }

    /// WAF rule layers.
    pub async fn get_waf_layers(&self, domain_id: u64) -> ApiResult<Vec<WafLayer>> {
        self.get(&domain_path(domain_id, "/waf/layers")).await
    }

    /// WAF rules.
    pub async fn get_waf_rules(&self, domain_id: u64) -> ApiResult<Vec<WafRule>> {
        self.get(&domain_path(domain_id, "/waf/rules")).await
    }

    /// WAF rules that are switched off.
    pub async fn get_disabled_waf_rules(&self, domain_id: u64) -> ApiResult<Vec<WafRule>> {
        self.get(&domain_path(domain_id, "/waf/disabled-rules"))
            .await
    }

    /// Enables or disables a whole WAF rule group.
    pub async fn switch_waf_group(
        &self,
        domain_id: u64,
        group_id: &str,
        enabled: bool,
    ) -> ApiResult<Empty> {
        let payload = form(&json!({ "group_id": group_id, "enabled": flag(enabled) }))?;
        self.send(
            HttpMethod::Put,
            &domain_path(domain_id, "/waf/switch-group"),
            Some(payload),
        )
        .await
    }

    /// Enables or disables a single WAF rule.
    pub async fn switch_waf_rule(
        &self,
        domain_id: u64,
        rule_id: &str,
        enabled: bool,
    ) -> ApiResult<Empty> {
        let payload = form(&json!({ "rule_id": rule_id, "enabled": flag(enabled) }))?;
        self.send(
            HttpMethod::Put,
            &domain_path(domain_id, "/waf/switch-rule"),
            Some(payload),
        )
        .await
    }

    // ==================== Page Rules ====================

    /// All page-rule paths.
    pub async fn get_page_rules(&self, domain_id: u64) -> ApiResult<Vec<PageRulePath>> {
        self.get(&domain_path(domain_id, "/paths")).await
    }

    /// Page-rule paths carrying rules of one section.
    pub async fn get_page_rules_for(
        &self,
        domain_id: u64,
        section: PageRuleSection,
    ) -> ApiResult<Vec<PageRulePath>> {
        self.get(&domain_path(
            domain_id,
            &format!("/paths/{}", section.as_str()),
        ))
        .await
    }

    /// Page rules with WAF overrides.
    pub async fn get_page_rules_waf(&self, domain_id: u64) -> ApiResult<Vec<PageRulePath>> {
        self.get_page_rules_for(domain_id, PageRuleSection::Waf)
            .await
    }

    /// Page rules with rate limits.
    pub async fn get_page_rules_ratelimit(&self, domain_id: u64) -> ApiResult<Vec<PageRulePath>> {
        self.get_page_rules_for(domain_id, PageRuleSection::Ratelimit)
            .await
    }

    /// Page rules with DDoS overrides.
    pub async fn get_page_rules_ddos(&self, domain_id: u64) -> ApiResult<Vec<PageRulePath>> {
        self.get_page_rules_for(domain_id, PageRuleSection::Ddos)
            .await
    }

    /// Page rules with firewall overrides.
    pub async fn get_page_rules_firewall(&self, domain_id: u64) -> ApiResult<Vec<PageRulePath>> {
        self.get_page_rules_for(domain_id, PageRuleSection::Firewall)
            .await
    }

    /// Creates a page-rule path.
    pub async fn create_page_rule_path(
        &self,
        domain_id: u64,
        request: &CreatePageRulePathRequest,
    ) -> ApiResult<PageRulePath> {
        self.send(
            HttpMethod::Post,
            &domain_path(domain_id, "/paths"),
            Some(form(request)?),
        )
        .await
    }

    /// Changes the evaluation order of a path.
    pub async fn set_page_rule_priority(
        &self,
        domain_id: u64,
        path_id: u64,
        priority: i64,
    ) -> ApiResult<Empty> {
        let payload = form(&json!({ "priority": priority }))?;
        self.send(
            HttpMethod::Put,
            &domain_path(domain_id, &format!("/paths/{path_id}")),
            Some(payload),
        )
        .await
    }

    /// Deletes a page-rule path.
    pub async fn delete_page_rule_path(&self, domain_id: u64, path_id: u64) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Delete,
            &domain_path(domain_id, &format!("/paths/{path_id}")),
            None,
        )
        .await
    }

    /// Adds a rule to a path.
    pub async fn create_rule(
        &self,
        domain_id: u64,
        path_id: u64,
        request: &CreateRuleRequest,
    ) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Post,
            &domain_path(domain_id, &format!("/paths/{path_id}/rules")),
            Some(form(request)?),
        )
        .await
    }

    /// Removes a rule of the given type from a path.
    pub async fn delete_rule(
        &self,
        domain_id: u64,
        path_id: u64,
        rule_type: &str,
    ) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Delete,
            &domain_path(domain_id, &format!("/paths/{path_id}/rules/{rule_type}")),
            None,
        )
        .await
    }

    /// Applies rule settings to the whole domain for one section.
    pub async fn set_direct_rule(
        &self,
        domain_id: u64,
        section: &str,
        settings: Map<String, Value>,
    ) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Post,
            &domain_path(domain_id, &format!("/paths/direct-rule/{section}")),
            Some(settings),
        )
        .await
    }

    // ==================== Clusters ====================

    /// Load-balancing clusters.
    pub async fn get_clusters(&self, domain_id: u64) -> ApiResult<Vec<Cluster>> {
        self.get(&domain_path(domain_id, "/cluster")).await
    }

    /// Where each cluster is in use.
    pub async fn get_cluster_assignments(&self, domain_id: u64) -> ApiResult<Vec<Value>> {
        self.get(&domain_path(domain_id, "/cluster/assignments"))
            .await
    }

    /// Creates a cluster.
    pub async fn add_cluster(
        &self,
        domain_id: u64,
        request: &CreateClusterRequest,
    ) -> ApiResult<Cluster> {
        self.send(
            HttpMethod::Post,
            &domain_path(domain_id, "/cluster"),
            Some(form(request)?),
        )
        .await
    }

    /// Updates a cluster.
    pub async fn update_cluster(
        &self,
        domain_id: u64,
        cluster_id: u64,
        request: &UpdateClusterRequest,
    ) -> ApiResult<Cluster> {
        self.send(
            HttpMethod::Put,
            &domain_path(domain_id, &format!("/cluster/{cluster_id}")),
            Some(form(request)?),
        )
        .await
    }

    /// Deletes a cluster.
    pub async fn delete_cluster(&self, domain_id: u64, cluster_id: u64) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Delete,
            &domain_path(domain_id, &format!("/cluster/{cluster_id}")),
            None,
        )
        .await
    }

    /// Adds an origin server to a cluster.
    pub async fn add_server_to_cluster(
        &self,
        domain_id: u64,
        cluster_id: u64,
        request: &AddClusterServerRequest,
    ) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Post,
            &domain_path(domain_id, &format!("/cluster/{cluster_id}/servers")),
            Some(form(request)?),
        )
        .await
    }

    /// Removes an origin server from a cluster.
    pub async fn remove_server_from_cluster(
        &self,
        domain_id: u64,
        cluster_id: u64,
        server_id: u64,
    ) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Delete,
            &domain_path(
                domain_id,
                &format!("/cluster/{cluster_id}/servers/{server_id}"),
            ),
            None,
        )
        .await
    }

    // ==================== Log Forwarders ====================

    /// Log forwarders.
    pub async fn get_log_forwarders(&self, domain_id: u64) -> ApiResult<Vec<LogForwarder>> {
        self.get(&domain_path(domain_id, "/log-forwarders")).await
    }

    /// Creates a log forwarder.
    pub async fn add_log_forwarder(
        &self,
        domain_id: u64,
        request: &CreateLogForwarderRequest,
    ) -> ApiResult<LogForwarder> {
        self.send(
            HttpMethod::Post,
            &domain_path(domain_id, "/log-forwarders"),
            Some(form(request)?),
        )
        .await
    }

    /// Updates a log forwarder.
    pub async fn update_log_forwarder(
        &self,
        domain_id: u64,
        forwarder_id: u64,
        request: &UpdateLogForwarderRequest,
    ) -> ApiResult<LogForwarder> {
        self.send(
            HttpMethod::Put,
            &domain_path(domain_id, &format!("/log-forwarders/{forwarder_id}")),
            Some(form(request)?),
        )
        .await
    }

    /// Deletes a log forwarder.
    pub async fn delete_log_forwarder(
        &self,
        domain_id: u64,
        forwarder_id: u64,
    ) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Delete,
            &domain_path(domain_id, &format!("/log-forwarders/{forwarder_id}")),
            None,
        )
        .await
    }

    // ==================== Custom Pages ====================

    /// Custom error pages.
    pub async fn get_custom_pages(&self, domain_id: u64) -> ApiResult<CustomPages> {
        self.get(&domain_path(domain_id, "/custom-pages")).await
    }

    /// Replaces the custom error pages.
    pub async fn set_custom_pages(&self, domain_id: u64, pages: &CustomPages) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Put,
            &domain_path(domain_id, "/custom-pages"),
            Some(form(pages)?),
        )
        .await
    }

    /// Restores the default error pages.
    pub async fn delete_custom_pages(&self, domain_id: u64) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Delete,
            &domain_path(domain_id, "/custom-pages"),
            None,
        )
        .await
    }

    // ==================== Plans ====================

    /// Available plans, optionally for a specific domain.
    pub async fn get_plans(&self, domain_id: Option<u64>) -> ApiResult<Vec<CdnPlan>> {
        let payload = domain_id
            .map(|id| form(&json!({ "domain_id": id })))
            .transpose()?;
        self.send(HttpMethod::Get, &format!("{PREFIX}/plans"), payload)
            .await
    }

    /// Moves a domain to another plan.
    pub async fn change_plan(&self, domain_id: u64, plan_id: u64) -> ApiResult<Empty> {
        let payload = form(&json!({ "domain_id": domain_id, "plan_id": plan_id }))?;
        self.send(HttpMethod::Post, &format!("{PREFIX}/plans"), Some(payload))
            .await
    }
}

fn domain_path(domain_id: u64, rest: &str) -> String {
    format!("{PREFIX}/domains/{domain_id}{rest}")
}

fn https_path(domain_id: u64, rest: &str) -> String {
    domain_path(domain_id, &format!("/https{rest}"))
}

fn cache_path(domain_id: u64, rest: &str) -> String {
    domain_path(domain_id, &format!("/cache{rest}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fake::Harness;
    use mizban_domain::types::cdn::DnsRecordType;
    use pretty_assertions::assert_eq;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    fn setup() -> (Harness, CdnModule) {
        let h = Harness::new();
        let cdn = CdnModule::new(h.client.clone());
        (h, cdn)
    }

    #[tokio::test]
    async fn test_list_domains_uses_auth_service() {
        let (h, cdn) = setup();
        h.auth.respond_json(
            200,
            &json!({
                "success": true,
                "message": "",
                "data": [{
                    "id": 1,
                    "user_id": 2,
                    "name": "example.com",
                    "status": "active",
                    "plan_id": 1,
                    "created_at": "2024-01-01",
                    "updated_at": "2024-01-01"
                }]
            }),
        );

        let domains = cdn.list_domains().await.unwrap().into_data();

        assert_eq!(domains[0].name, "example.com");
        assert_eq!(h.auth.last().path, "/api/v1/cdn/ng/domains");
        assert!(h.cdn.requests().is_empty());
    }

    #[tokio::test]
    async fn test_add_dns_record_form() {
        let (h, cdn) = setup();
        let mut request = CreateDnsRecordRequest::new("www", DnsRecordType::A, "1.2.3.4");
        request.ttl = Some(3600);
        request.proxied = Some(true);

        let _ = cdn.add_dns_record(7, &request).await;

        let sent = h.auth.last();
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.path, "/api/v1/cdn/ng/domains/7/dns");
        assert_eq!(
            h.last_form(),
            vec![
                pair("name", "www"),
                pair("proxied", "true"),
                pair("ttl", "3600"),
                pair("type", "A"),
                pair("value", "1.2.3.4"),
            ]
        );
    }

    #[tokio::test]
    async fn test_switches_send_numeric_flags() {
        let (h, cdn) = setup();

        cdn.set_dnssec(1, true).await.unwrap();
        assert_eq!(h.last_form(), vec![pair("enabled", "1")]);

        cdn.set_http3(1, false).await.unwrap();
        assert_eq!(h.auth.last().path, "/api/v1/cdn/ng/domains/1/https/h3");
        assert_eq!(h.last_form(), vec![pair("enabled", "0")]);

        cdn.switch_waf_rule(1, "942100", true).await.unwrap();
        assert_eq!(h.auth.last().method, HttpMethod::Put);
        assert_eq!(
            h.last_form(),
            vec![pair("enabled", "1"), pair("rule_id", "942100")]
        );
    }

    #[tokio::test]
    async fn test_purge_cache_payload() {
        let (h, cdn) = setup();

        cdn.purge_cache(3, Some(&PurgeCacheRequest::urls(["https://a.io/x"])))
            .await
            .unwrap();
        assert_eq!(
            h.auth.last().path,
            "/api/v1/cdn/ng/domains/3/cache/edge/purge-cache"
        );
        assert_eq!(
            h.last_form(),
            vec![pair("purge_all", "0"), pair("urls[]", "https://a.io/x")]
        );

        cdn.purge_cache(3, None).await.unwrap();
        assert_eq!(h.last_form(), vec![pair("purge_all", "0")]);

        cdn.purge_cache(3, Some(&PurgeCacheRequest::all()))
            .await
            .unwrap();
        assert_eq!(h.last_form(), vec![pair("purge_all", "1")]);
    }

    #[tokio::test]
    async fn test_minify_flags() {
        let (h, cdn) = setup();
        let settings = MinifySettings {
            html: true,
            css: false,
            js: true,
        };

        cdn.set_minify(2, settings).await.unwrap();

        assert_eq!(
            h.last_form(),
            vec![pair("css", "0"), pair("html", "1"), pair("js", "1")]
        );
    }

    #[tokio::test]
    async fn test_delete_domain_sends_confirm_code() {
        let (h, cdn) = setup();

        cdn.delete_domain(9, "123456").await.unwrap();

        let sent = h.auth.last();
        assert_eq!(sent.method, HttpMethod::Delete);
        assert_eq!(sent.path, "/api/v1/cdn/ng/domains/9");
        assert_eq!(h.last_form(), vec![pair("confirm_code", "123456")]);
    }

    #[tokio::test]
    async fn test_get_plans_query() {
        let (h, cdn) = setup();

        let _ = cdn.get_plans(Some(5)).await;
        let sent = h.auth.last();
        assert_eq!(sent.path, "/api/v1/cdn/ng/plans");
        assert_eq!(sent.query, vec![pair("domain_id", "5")]);
        assert_eq!(sent.body, None);

        let _ = cdn.get_plans(None).await;
        assert!(h.auth.last().query.is_empty());
    }

    #[tokio::test]
    async fn test_enum_payloads() {
        let (h, cdn) = setup();

        cdn.set_redirect_mode(1, RedirectMode::NonWww).await.unwrap();
        assert_eq!(h.last_form(), vec![pair("mode", "non-www")]);

        cdn.set_tls_version(1, TlsVersion::V1_2).await.unwrap();
        assert_eq!(
            h.auth.last().path,
            "/api/v1/cdn/ng/domains/1/https/ssl/tls-version"
        );
        assert_eq!(h.last_form(), vec![pair("version", "1.2")]);

        cdn.set_captcha_module(1, CaptchaModule::Turnstile)
            .await
            .unwrap();
        assert_eq!(h.last_form(), vec![pair("module", "turnstile")]);
    }

    #[tokio::test]
    async fn test_custom_nameservers_array() {
        let (h, cdn) = setup();
        let nameservers = vec!["ns1.example.com".to_string(), "ns2.example.com".to_string()];

        cdn.set_custom_nameservers(4, &nameservers).await.unwrap();

        assert_eq!(
            h.last_form(),
            vec![
                pair("nameservers[]", "ns1.example.com"),
                pair("nameservers[]", "ns2.example.com"),
            ]
        );
    }

    #[tokio::test]
    async fn test_page_rule_sections() {
        let (h, cdn) = setup();

        let _ = cdn.get_page_rules_ratelimit(8).await;
        assert_eq!(h.auth.last().path, "/api/v1/cdn/ng/domains/8/paths/ratelimit");

        cdn.delete_rule(8, 2, "cache").await.unwrap();
        assert_eq!(h.auth.last().path, "/api/v1/cdn/ng/domains/8/paths/2/rules/cache");
    }

    #[tokio::test]
    async fn test_rejection_propagates() {
        let (h, cdn) = setup();
        h.auth.respond_json(
            200,
            &json!({"success": false, "message": "Domain exists", "fields": ["domain"]}),
        );

        let error = cdn
            .add_domain(&CreateDomainRequest::new("example.com"))
            .await
            .unwrap_err();

        assert_eq!(error.status_code(), 200);
        assert_eq!(error.message(), "Domain exists");
        assert_eq!(error.fields(), Some(&["domain".to_string()][..]));
    }
}
