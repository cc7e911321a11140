//! Catalog lookups.

use std::sync::Arc;

use mizban_domain::HttpMethod;
use mizban_domain::types::{CacheTime, Datacenter, OperatingSystem, Slider};

use super::call;
use crate::client::{ApiClient, ApiResult};

/// Static catalog module.
#[derive(Debug, Clone)]
pub struct StaticsModule {
    client: Arc<ApiClient>,
}

impl StaticsModule {
    /// Creates the module over a shared client.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Lists datacenters.
    ///
    /// # Errors
    /// Returns a `MizbanError` if the request fails.
    pub async fn list_datacenters(&self) -> ApiResult<Vec<Datacenter>> {
        call(&self.client, HttpMethod::Get, "/api/v1/static/datacenters", None).await
    }

    /// Lists installable operating systems.
    ///
    /// # Errors
    /// Returns a `MizbanError` if the request fails.
    pub async fn list_operating_systems(&self) -> ApiResult<Vec<OperatingSystem>> {
        call(&self.client, HttpMethod::Get, "/api/v1/static/os-list", None).await
    }

    /// Lists predefined cache TTL options.
    ///
    /// # Errors
    /// Returns a `MizbanError` if the request fails.
    pub async fn get_cache_times(&self) -> ApiResult<Vec<CacheTime>> {
        call(&self.client, HttpMethod::Get, "/api/v1/static/cache-times", None).await
    }

    /// Lists promotional sliders.
    ///
    /// # Errors
    /// Returns a `MizbanError` if the request fails.
    pub async fn get_sliders(&self) -> ApiResult<Vec<Slider>> {
        call(&self.client, HttpMethod::Get, "/api/v1/static/sliders", None).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fake::Harness;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_catalog_paths() {
        let h = Harness::new();
        let statics = StaticsModule::new(h.client.clone());

        let _ = statics.list_datacenters().await;
        let _ = statics.list_operating_systems().await;
        let _ = statics.get_cache_times().await;
        let _ = statics.get_sliders().await;

        let paths: Vec<String> = h.auth.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec![
                "/api/v1/static/datacenters",
                "/api/v1/static/os-list",
                "/api/v1/static/cache-times",
                "/api/v1/static/sliders",
            ]
        );
        assert!(h.cdn.requests().is_empty());
        assert!(h.cloud.requests().is_empty());
    }

    #[tokio::test]
    async fn test_decodes_cache_times() {
        let h = Harness::new();
        h.auth.respond_json(
            200,
            &json!({"success": true, "message": "", "data": [{"label": "1 hour", "value": 3600}]}),
        );
        let statics = StaticsModule::new(h.client.clone());

        let times = statics.get_cache_times().await.unwrap().into_data();
        assert_eq!(times[0].value, 3600);
    }
}
