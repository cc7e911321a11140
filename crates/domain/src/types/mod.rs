//! Resource data types exchanged with the API

pub mod auth;
pub mod cdn;
pub mod cloud;
pub mod statics;

use serde::{Deserialize, Serialize};

pub use auth::Wallet;
pub use statics::{CacheTime, Datacenter, DatacenterStatus, OperatingSystem, OsFamily, Slider};

/// Disk technology of a server or volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageType {
    /// Solid state disk.
    #[serde(rename = "SSD")]
    Ssd,
    /// Spinning disk.
    #[serde(rename = "HDD")]
    Hdd,
    /// NVMe disk.
    #[serde(rename = "NVMe")]
    Nvme,
}

/// Serializes a boolean flag as `1`/`0`, the form the backend expects.
pub mod flag {
    use serde::Serializer;

    /// Serializer for `bool` fields.
    ///
    /// # Errors
    /// Propagates serializer errors.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    /// Serializer for `Option<bool>` fields.
    pub mod option {
        use serde::Serializer;

        /// # Errors
        /// Propagates serializer errors.
        #[allow(clippy::ref_option)]
        pub fn serialize<S: Serializer>(
            value: &Option<bool>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(flag) => serializer.serialize_u8(u8::from(*flag)),
                None => serializer.serialize_none(),
            }
        }
    }
}
