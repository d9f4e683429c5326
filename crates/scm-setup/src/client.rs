//! Asynchronous setup namespace client.

use crate::models::{
    CreateFolder, DeleteFolder, Folder, FolderId, FolderMove, GetFolder, ListFolders, MoveFolder,
    UpdateFolder,
};
use crate::Result;
use scm_core::host::SETUP_PREFIX;
use scm_core::{HostMap, ListQuery, ListResponse, ServiceClient, ServiceClientBuilder, Transport};
use std::sync::Arc;

const NAMESPACE: &str = "setup";

/// Built-in host table for the setup namespace.
#[must_use]
pub fn default_host_map() -> HostMap {
    HostMap::standard(SETUP_PREFIX)
}

/// Builder for [`SetupClient`].
#[derive(Clone)]
pub struct SetupClientBuilder {
    inner: ServiceClientBuilder,
}

impl SetupClientBuilder {
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
    pub fn build(self) -> SetupClient {
        SetupClient {
            inner: self.inner.build(),
        }
    }
}

/// Asynchronous setup namespace client.
#[derive(Debug, Clone)]
pub struct SetupClient {
    inner: ServiceClient,
}

impl SetupClient {
    /// Construct a client with the built-in host table.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        SetupClientBuilder::new(transport).build()
    }

    /// Return the underlying service client.
    #[must_use]
    pub const fn service(&self) -> &ServiceClient {
        &self.inner
    }

    /// List folders.
    pub async fn list_folders(&self, query: &ListQuery) -> Result<ListResponse<Folder>> {
        self.inner.execute(&ListFolders { query }).await
    }

    /// Create a folder.
    pub async fn create_folder(&self, folder: &Folder) -> Result<Folder> {
        self.inner.execute(&CreateFolder { body: folder }).await
    }

    /// Fetch a folder by id.
    pub async fn get_folder(&self, id: FolderId) -> Result<Folder> {
        self.inner.execute(&GetFolder { id }).await
    }

    /// Replace a folder.
    pub async fn update_folder(&self, id: FolderId, folder: &Folder) -> Result<Folder> {
        self.inner.execute(&UpdateFolder { id, body: folder }).await
    }

    /// Delete a folder.
    pub async fn delete_folder(&self, id: FolderId) -> Result<()> {
        self.inner.execute(&DeleteFolder { id }).await.map(|_| ())
    }

    /// Move a folder among its siblings.
    pub async fn move_folder(&self, id: FolderId, destination: &FolderMove) -> Result<()> {
        self.inner
            .execute(&MoveFolder { id, destination })
            .await
            .map(|_| ())
    }
}
