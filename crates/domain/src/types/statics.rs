//! Catalog data: datacenters, operating systems, cache times, sliders

use serde::{Deserialize, Serialize};

use super::StorageType;

/// Datacenter availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatacenterStatus {
    /// Accepting new resources.
    Active,
    /// Temporarily unavailable.
    Maintenance,
    /// Not available.
    Disabled,
}

/// A datacenter where servers can be created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datacenter {
    /// Datacenter ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Location code.
    pub location: String,
    /// Country name.
    pub country: String,
    /// Availability.
    pub status: DatacenterStatus,
    /// Storage types offered here.
    #[serde(default)]
    pub available_storage_types: Vec<StorageType>,
    /// Actions allowed in this datacenter.
    #[serde(default)]
    pub allowed_actions: Vec<String>,
    /// Feature flags.
    #[serde(default)]
    pub features: Vec<String>,
}

/// Operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    /// Linux distributions.
    Linux,
    /// Microsoft Windows.
    Windows,
    /// BSD variants.
    Bsd,
}

/// An installable operating system image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingSystem {
    /// OS ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Version string.
    pub version: String,
    /// Family.
    pub family: OsFamily,
    /// Minimum RAM.
    pub min_ram: u64,
    /// Minimum storage.
    pub min_storage: u64,
    /// Logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// A predefined cache TTL option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheTime {
    /// Display label.
    pub label: String,
    /// TTL in seconds.
    pub value: u64,
}

/// A promotional banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slider {
    /// Slider ID.
    pub id: u64,
    /// Title.
    pub title: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image URL.
    pub image: String,
    /// Target link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Display order.
    pub order: i64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_decode_datacenter() {
        let dc: Datacenter = serde_json::from_value(json!({
            "id": 1,
            "name": "Tehran",
            "location": "IR",
            "country": "Iran",
            "status": "active",
            "available_storage_types": ["SSD", "NVMe"],
            "allowed_actions": ["create", "delete"],
            "features": ["ipv6"],
        }))
        .unwrap();

        assert_eq!(dc.status, DatacenterStatus::Active);
        assert_eq!(
            dc.available_storage_types,
            vec![StorageType::Ssd, StorageType::Nvme]
        );
    }

    #[test]
    fn test_decode_operating_system() {
        let os: OperatingSystem = serde_json::from_value(json!({
            "id": 1,
            "name": "Ubuntu",
            "version": "22.04",
            "family": "linux",
            "min_ram": 1024,
            "min_storage": 10,
        }))
        .unwrap();

        assert_eq!(os.family, OsFamily::Linux);
        assert!(os.logo.is_none());
    }
}
