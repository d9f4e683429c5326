//! Asynchronous objects namespace client.

use crate::models::{
    Address, AddressId, CreateAddress, CreateQuarantinedDevice, DeleteAddress,
    DeleteQuarantinedDevice, GetAddress, ListAddresses, ListQuarantinedDevices,
    QuarantinedDevice, QuarantinedDeviceListParams, UpdateAddress,
};
use crate::Result;
use scm_core::host::OBJECTS_PREFIX;
use scm_core::{HostMap, ListQuery, ListResponse, ServiceClient, ServiceClientBuilder, Transport};
use std::sync::Arc;

const NAMESPACE: &str = "objects";

/// Built-in host table for the objects namespace.
#[must_use]
pub fn default_host_map() -> HostMap {
    HostMap::standard(OBJECTS_PREFIX)
}

/// Builder for [`ObjectsClient`].
#[derive(Clone)]
pub struct ObjectsClientBuilder {
    inner: ServiceClientBuilder,
}

impl ObjectsClientBuilder {
    /// Create a builder over a shared transport.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ServiceClientBuilder::new(NAMESPACE, transport, default_host_map()),
        }
    }

    /// Replace the host table.
    #[must_use]
    pub fn with_host_map(mut self, hosts: HostMap) -> Self {
        self.inner = self.inner.with_host_map(hosts);
        self
    }

    /// Build the client.
    #[must_use]
    pub fn build(self) -> ObjectsClient {
        ObjectsClient {
            inner: self.inner.build(),
        }
    }
}

/// Asynchronous objects namespace client.
#[derive(Debug, Clone)]
pub struct ObjectsClient {
    inner: ServiceClient,
}

impl ObjectsClient {
    /// Construct a client with the built-in host table.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        ObjectsClientBuilder::new(transport).build()
    }

    /// Return the underlying service client.
    #[must_use]
    pub const fn service(&self) -> &ServiceClient {
        &self.inner
    }

    /// List address objects.
    pub async fn list_addresses(&self, query: &ListQuery) -> Result<ListResponse<Address>> {
        self.inner.execute(&ListAddresses { query }).await
    }

    /// Create an address object.
    pub async fn create_address(&self, address: &Address) -> Result<Address> {
        self.inner.execute(&CreateAddress { body: address }).await
    }

    /// Fetch a single address object.
    pub async fn get_address(&self, id: AddressId) -> Result<Address> {
        self.inner.execute(&GetAddress { id }).await
    }

    /// Replace an address object.
    pub async fn update_address(&self, id: AddressId, address: &Address) -> Result<Address> {
        self.inner.execute(&UpdateAddress { id, body: address }).await
    }

    /// Delete an address object.
    pub async fn delete_address(&self, id: AddressId) -> Result<()> {
        self.inner.execute(&DeleteAddress { id }).await.map(|_| ())
    }

    /// List quarantined devices.
    pub async fn list_quarantined_devices(
        &self,
        params: &QuarantinedDeviceListParams,
    ) -> Result<ListResponse<QuarantinedDevice>> {
        self.inner.execute(&ListQuarantinedDevices { params }).await
    }

    /// Quarantine a device.
    pub async fn create_quarantined_device(
        &self,
        device: &QuarantinedDevice,
    ) -> Result<QuarantinedDevice> {
        self.inner.execute(&CreateQuarantinedDevice { device }).await
    }

    /// Release a device from quarantine. The reply body is not decoded.
    pub async fn delete_quarantined_device(&self, host_id: &str) -> Result<()> {
        self.inner
            .execute(&DeleteQuarantinedDevice { host_id })
            .await
            .map(|_| ())
    }
}
