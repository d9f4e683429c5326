//! Setup namespace models and operation inputs.

use scm_core::path::PathParams;
use scm_core::{HttpMethod, ListQuery, Operation};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

scm_core::resource_id!(FolderId, "Unique identifier of a folder.");

/// Configuration folder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Folder {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FolderId>,
    /// Folder name.
    pub name: String,
    /// Name of the parent folder.
    pub parent: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Labels attached to the folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// Snippets associated with the folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippets: Option<Vec<String>>,
}

impl Folder {
    /// Create a folder under `parent`.
    pub fn new(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            parent: parent.into(),
            description: None,
            labels: None,
            snippets: None,
        }
    }
}

/// Where to move a folder relative to its siblings.
///
/// `before` and `after` require the reference folder, so a move without one
/// cannot be expressed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "destination", rename_all = "lowercase")]
pub enum FolderMove {
    /// First position.
    Top,
    /// Last position.
    Bottom,
    /// Directly before another folder.
    Before {
        /// Reference folder name.
        destination_folder: String,
    },
    /// Directly after another folder.
    After {
        /// Reference folder name.
        destination_folder: String,
    },
}

scm_core::collection_operations! {
    resource: Folder, id: FolderId, path: "/folders", query: ListQuery;
    list ListFolders;
    create CreateFolder;
    get GetFolder;
    update UpdateFolder;
    delete DeleteFolder;
}

/// `POST /folders/{id}/move`
#[derive(Debug, Clone, Copy)]
pub struct MoveFolder<'a> {
    /// Folder id.
    pub id: FolderId,
    /// Target position.
    pub destination: &'a FolderMove,
}

impl Operation for MoveFolder<'_> {
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/folders/{id}/move";
    type Body = FolderMove;
    type Output = IgnoredAny;

    fn path_params(&self) -> PathParams {
        PathParams::new().with("id", self.id)
    }

    fn body(&self) -> Option<&FolderMove> {
        Some(self.destination)
    }
}
