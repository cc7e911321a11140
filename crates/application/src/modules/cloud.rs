//! Cloud server operations.
//!
//! Paths are rooted at `/api/v1/cloud`. Every method returns the decoded
//! envelope or a `MizbanError`.

use std::sync::Arc;

use mizban_domain::types::cloud::{
    AddSecurityRuleRequest, AttachFirewallRequest, AttachNetworkRequest, AttachVolumeRequest,
    CreatePrivateNetworkRequest, CreateSecurityGroupRequest, CreateServerRequest,
    CreateSnapshotRequest, CreateSshKeyRequest, CreateVolumeRequest, GeneratedSshKey,
    InitialPassword, MetricDataPoint, OsReloadRequest, PrivateNetwork, RescueServerRequest,
    ResetPasswordRequest, ResizeServerRequest, SecurityGroup, Server, ServerChartsRequest,
    ServerLog, Snapshot, SshKey, TrafficUsage, UpdatePrivateNetworkRequest, UpdateVolumeRequest,
    VncAccess, Volume,
};
use mizban_domain::{Empty, HttpMethod, Payload};
use serde::de::DeserializeOwned;
use serde_json::json;

use super::{call, form};
use crate::client::{ApiClient, ApiResult};

const PREFIX: &str = "/api/v1/cloud";

/// Power actions available on a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Power {
    On,
    Off,
    Reboot,
    Restart,
}

impl Power {
    const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Reboot => "reboot",
            Self::Restart => "restart",
        }
    }
}

/// Cloud module.
#[derive(Debug, Clone)]
pub struct CloudModule {
    client: Arc<ApiClient>,
}

#[allow(clippy::missing_errors_doc)]
impl CloudModule {
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

    async fn power(&self, server_id: u64, action: Power) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Put,
            &server_path(server_id, &format!("/power/{}", action.as_str())),
            None,
        )
        .await
    }

    // ==================== Servers ====================

    /// Lists servers.
    pub async fn list_servers(&self) -> ApiResult<Vec<Server>> {
        self.get(&format!("{PREFIX}/servers")).await
    }

    /// Fetches one server.
    pub async fn get_server(&self, server_id: u64) -> ApiResult<Server> {
        self.get(&server_path(server_id, "")).await
    }

    /// Fetches the live state of a server.
    pub async fn poll_server(&self, server_id: u64) -> ApiResult<Server> {
        self.get(&server_path(server_id, "/poll")).await
    }

    /// Creates a server.
    pub async fn create_server(&self, request: &CreateServerRequest) -> ApiResult<Server> {
        self.send(
            HttpMethod::Post,
            &format!("{PREFIX}/servers"),
            Some(form(request)?),
        )
        .await
    }

    /// Deletes a server.
    pub async fn delete_server(&self, server_id: u64) -> ApiResult<Empty> {
        self.send(HttpMethod::Delete, &server_path(server_id, ""), None)
            .await
    }

    /// Renames a server.
    pub async fn rename_server(&self, server_id: u64, name: &str) -> ApiResult<Server> {
        let payload = form(&json!({ "name": name }))?;
        self.send(
            HttpMethod::Post,
            &server_path(server_id, "/rename"),
            Some(payload),
        )
        .await
    }

    /// Changes CPU and RAM.
    pub async fn resize_server(
        &self,
        server_id: u64,
        request: &ResizeServerRequest,
    ) -> ApiResult<Server> {
        self.send(
            HttpMethod::Put,
            &server_path(server_id, "/rebuild/hardware"),
            Some(form(request)?),
        )
        .await
    }

    /// Reinstalls the operating system.
    pub async fn reload_os(&self, server_id: u64, request: &OsReloadRequest) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Put,
            &server_path(server_id, "/rebuild/software"),
            Some(form(request)?),
        )
        .await
    }

    // ==================== Power ====================

    /// Powers a server on.
    pub async fn power_on(&self, server_id: u64) -> ApiResult<Empty> {
        self.power(server_id, Power::On).await
    }

    /// Powers a server off.
    pub async fn power_off(&self, server_id: u64) -> ApiResult<Empty> {
        self.power(server_id, Power::Off).await
    }

    /// Soft reboot.
    pub async fn reboot(&self, server_id: u64) -> ApiResult<Empty> {
        self.power(server_id, Power::Reboot).await
    }

    /// Hard restart.
    pub async fn restart(&self, server_id: u64) -> ApiResult<Empty> {
        self.power(server_id, Power::Restart).await
    }

    // ==================== Access ====================

    /// Opens a VNC console.
    pub async fn get_vnc(&self, server_id: u64) -> ApiResult<VncAccess> {
        self.get(&server_path(server_id, "/access/vnc")).await
    }

    /// Sets a new root password.
    pub async fn reset_password(
        &self,
        server_id: u64,
        request: &ResetPasswordRequest,
    ) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Put,
            &server_path(server_id, "/reset-password"),
            Some(form(request)?),
        )
        .await
    }

    /// Retrieves the password generated at creation.
    pub async fn get_initial_password(&self, server_id: u64) -> ApiResult<InitialPassword> {
        self.send(
            HttpMethod::Post,
            &server_path(server_id, "/get-password"),
            None,
        )
        .await
    }

    // ==================== Rescue ====================

    /// Boots into a rescue image and returns its password.
    pub async fn rescue(
        &self,
        server_id: u64,
        request: &RescueServerRequest,
    ) -> ApiResult<InitialPassword> {
        self.send(
            HttpMethod::Post,
            &server_path(server_id, "/rescue"),
            Some(form(request)?),
        )
        .await
    }

    /// Leaves rescue mode.
    pub async fn unrescue(&self, server_id: u64) -> ApiResult<Empty> {
        self.send(HttpMethod::Post, &server_path(server_id, "/unrescue"), None)
            .await
    }

    // ==================== Autopilot ====================

    /// Turns on high availability.
    pub async fn enable_autopilot(&self, server_id: u64) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Post,
            &server_path(server_id, "/autopilot/enable"),
            None,
        )
        .await
    }

    /// Turns off high availability.
    pub async fn disable_autopilot(&self, server_id: u64) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Delete,
            &server_path(server_id, "/autopilot/disable"),
            None,
        )
        .await
    }

    // ==================== Monitoring ====================

    /// Action log of a server.
    pub async fn get_logs(&self, server_id: u64) -> ApiResult<Vec<ServerLog>> {
        self.get(&server_path(server_id, "/logs")).await
    }

    /// Metric series; the request is sent as query parameters.
    pub async fn get_charts(
        &self,
        server_id: u64,
        request: &ServerChartsRequest,
    ) -> ApiResult<Vec<MetricDataPoint>> {
        self.send(
            HttpMethod::Get,
            &server_path(server_id, "/reports"),
            Some(form(request)?),
        )
        .await
    }

    /// Traffic usage of all servers.
    pub async fn get_traffic_usage(&self) -> ApiResult<Vec<TrafficUsage>> {
        self.get(&format!("{PREFIX}/servers/traffics")).await
    }

    /// Account-wide traffic.
    pub async fn get_traffics(&self) -> ApiResult<Vec<TrafficUsage>> {
        self.get(&format!("{PREFIX}/traffics")).await
    }

    /// Converts a trial server into a regular one.
    pub async fn convert_to_permanent(&self, server_id: u64) -> ApiResult<Server> {
        // The backend route is spelled this way.
        self.send(
            HttpMethod::Post,
            &server_path(server_id, "/permenant"),
            None,
        )
        .await
    }

    // ==================== Firewall ====================

    /// Lists firewall groups.
    pub async fn list_security_groups(&self) -> ApiResult<Vec<SecurityGroup>> {
        self.get(&format!("{PREFIX}/firewall")).await
    }

    /// Creates a firewall group.
    pub async fn create_security_group(
        &self,
        request: &CreateSecurityGroupRequest,
    ) -> ApiResult<SecurityGroup> {
        self.send(
            HttpMethod::Post,
            &format!("{PREFIX}/firewall"),
            Some(form(request)?),
        )
        .await
    }

    /// Deletes a firewall group.
    pub async fn delete_security_group(&self, firewall_id: u64) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Delete,
            &format!("{PREFIX}/firewall/{firewall_id}"),
            None,
        )
        .await
    }

    /// Adds a rule to a firewall group.
    pub async fn add_security_rule(&self, request: &AddSecurityRuleRequest) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Post,
            &format!("{PREFIX}/firewall/rule"),
            Some(form(request)?),
        )
        .await
    }

    /// Removes a firewall rule.
    pub async fn remove_security_rule(&self, rule_id: u64) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Delete,
            &format!("{PREFIX}/firewall/rule/{rule_id}"),
            None,
        )
        .await
    }

    /// Attaches a firewall group to servers.
    pub async fn attach_firewall(&self, request: &AttachFirewallRequest) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Post,
            &format!("{PREFIX}/firewall/attach"),
            Some(form(request)?),
        )
        .await
    }

    /// Detaches a firewall group from servers.
    pub async fn detach_firewall(&self, request: &AttachFirewallRequest) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Post,
            &format!("{PREFIX}/firewall/detach"),
            Some(form(request)?),
        )
        .await
    }

    // ==================== Private Networks ====================

    /// Lists private networks.
    pub async fn list_private_networks(&self) -> ApiResult<Vec<PrivateNetwork>> {
        self.get(&format!("{PREFIX}/private-networks")).await
    }

    /// Creates a private network.
    pub async fn create_private_network(
        &self,
        request: &CreatePrivateNetworkRequest,
    ) -> ApiResult<PrivateNetwork> {
        self.send(
            HttpMethod::Post,
            &format!("{PREFIX}/private-networks"),
            Some(form(request)?),
        )
        .await
    }

    /// Updates a private network.
    pub async fn update_private_network(
        &self,
        network_id: u64,
        request: &UpdatePrivateNetworkRequest,
    ) -> ApiResult<PrivateNetwork> {
        self.send(
            HttpMethod::Put,
            &format!("{PREFIX}/private-networks/{network_id}"),
            Some(form(request)?),
        )
        .await
    }

    /// Deletes a private network.
    pub async fn delete_private_network(&self, network_id: u64) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Delete,
            &format!("{PREFIX}/private-networks/{network_id}"),
            None,
        )
        .await
    }

    /// Attaches a server to a private network.
    pub async fn attach_to_private_network(
        &self,
        request: &AttachNetworkRequest,
    ) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Post,
            &format!("{PREFIX}/private-networks/attach"),
            Some(form(request)?),
        )
        .await
    }

    /// Detaches a server from a private network.
    pub async fn detach_from_private_network(
        &self,
        request: &AttachNetworkRequest,
    ) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Post,
            &format!("{PREFIX}/private-networks/detach"),
            Some(form(request)?),
        )
        .await
    }

    /// Detaches every server from a private network.
    pub async fn purge_network_attachments(&self, network_id: u64) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Post,
            &format!("{PREFIX}/private-networks/{network_id}/purge-attachments"),
            None,
        )
        .await
    }

    // ==================== Public Networks ====================

    /// Attaches the public network to a server.
    pub async fn attach_public_network(&self, server_id: u64) -> ApiResult<Empty> {
        let payload = form(&json!({ "server_id": server_id }))?;
        self.send(
            HttpMethod::Post,
            &format!("{PREFIX}/public-networks/attach"),
            Some(payload),
        )
        .await
    }

    /// Detaches the public network from a server.
    pub async fn detach_public_network(&self, server_id: u64) -> ApiResult<Empty> {
        let payload = form(&json!({ "server_id": server_id }))?;
        self.send(
            HttpMethod::Post,
            &format!("{PREFIX}/public-networks/detach"),
            Some(payload),
        )
        .await
    }

    // ==================== Volumes ====================

    /// Lists volumes.
    pub async fn list_volumes(&self) -> ApiResult<Vec<Volume>> {
        self.get(&format!("{PREFIX}/volumes")).await
    }

    /// Fetches one volume.
    pub async fn get_volume(&self, volume_id: u64) -> ApiResult<Volume> {
        self.get(&format!("{PREFIX}/volumes/{volume_id}")).await
    }

    /// Creates a volume.
    pub async fn create_volume(&self, request: &CreateVolumeRequest) -> ApiResult<Volume> {
        self.send(
            HttpMethod::Post,
            &format!("{PREFIX}/volumes"),
            Some(form(request)?),
        )
        .await
    }

    /// Resizes or renames a volume.
    pub async fn update_volume(
        &self,
        volume_id: u64,
        request: &UpdateVolumeRequest,
    ) -> ApiResult<Volume> {
        self.send(
            HttpMethod::Put,
            &format!("{PREFIX}/volumes/{volume_id}"),
            Some(form(request)?),
        )
        .await
    }

    /// Deletes a volume.
    pub async fn delete_volume(&self, volume_id: u64) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Delete,
            &format!("{PREFIX}/volumes/{volume_id}"),
            None,
        )
        .await
    }

    /// Attaches a volume to a server.
    pub async fn attach_volume(&self, request: &AttachVolumeRequest) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Post,
            &format!("{PREFIX}/volumes/attach"),
            Some(form(request)?),
        )
        .await
    }

    /// Detaches a volume from its server.
    pub async fn detach_volume(&self, volume_id: u64) -> ApiResult<Empty> {
        let payload = form(&json!({ "volume_id": volume_id }))?;
        self.send(
            HttpMethod::Post,
            &format!("{PREFIX}/volumes/detach"),
            Some(payload),
        )
        .await
    }

    /// Refreshes volume state from the underlying platform.
    pub async fn sync_volumes(&self) -> ApiResult<Empty> {
        self.send(HttpMethod::Post, &format!("{PREFIX}/volumes/sync"), None)
            .await
    }

    // ==================== Snapshots ====================

    /// Lists snapshots.
    pub async fn list_snapshots(&self) -> ApiResult<Vec<Snapshot>> {
        self.get(&format!("{PREFIX}/snapshots")).await
    }

    /// Fetches one snapshot.
    pub async fn get_snapshot(&self, snapshot_id: u64) -> ApiResult<Snapshot> {
        self.get(&format!("{PREFIX}/snapshots/{snapshot_id}")).await
    }

    /// Takes a snapshot of a server.
    pub async fn create_snapshot(&self, request: &CreateSnapshotRequest) -> ApiResult<Snapshot> {
        self.send(
            HttpMethod::Post,
            &format!("{PREFIX}/snapshots"),
            Some(form(request)?),
        )
        .await
    }

    /// Deletes a snapshot.
    pub async fn delete_snapshot(&self, snapshot_id: u64) -> ApiResult<Empty> {
        self.send(
            HttpMethod::Delete,
            &format!("{PREFIX}/snapshots/{snapshot_id}"),
            None,
        )
        .await
    }

    /// Refreshes snapshot state from the underlying platform.
    pub async fn sync_snapshots(&self) -> ApiResult<Empty> {
        self.send(HttpMethod::Post, &format!("{PREFIX}/snapshots/sync"), None)
            .await
    }

    // ==================== SSH Keys ====================

    /// Lists SSH keys.
    pub async fn list_ssh_keys(&self) -> ApiResult<Vec<SshKey>> {
        self.get(&format!("{PREFIX}/ssh")).await
    }

    /// Fetches one SSH key.
    pub async fn get_ssh_key(&self, key_id: u64) -> ApiResult<SshKey> {
        self.get(&format!("{PREFIX}/ssh/{key_id}")).await
    }

    /// Uploads an SSH public key.
    pub async fn create_ssh_key(&self, request: &CreateSshKeyRequest) -> ApiResult<SshKey> {
        self.send(
            HttpMethod::Post,
            &format!("{PREFIX}/ssh"),
            Some(form(request)?),
        )
        .await
    }

    /// Deletes an SSH key.
    pub async fn delete_ssh_key(&self, key_id: u64) -> ApiResult<Empty> {
        self.send(HttpMethod::Delete, &format!("{PREFIX}/ssh/{key_id}"), None)
            .await
    }

    /// Generates a key pair without storing it.
    pub async fn generate_random_ssh_key(&self) -> ApiResult<GeneratedSshKey> {
        self.get(&format!("{PREFIX}/ssh/random")).await
    }
}

fn server_path(server_id: u64, rest: &str) -> String {
    format!("{PREFIX}/servers/{server_id}{rest}")
}
