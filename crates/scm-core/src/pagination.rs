//! List envelopes and common list filters.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::query::QueryParams;

/// Pagination envelope returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Page size the server applied.
    #[serde(default)]
    pub limit: u64,
    /// Offset of the first item.
    #[serde(default)]
    pub offset: u64,
    /// Total number of matching items.
    #[serde(default)]
    pub total: u64,
}

impl<T> ListResponse<T> {
    /// Returns true if more items exist past this page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.page_end() < self.total
    }

    /// Offset of the next page, if any.
    #[must_use]
    pub fn next_offset(&self) -> Option<u64> {
        self.has_more().then(|| self.page_end())
    }

    // Saturates so server-supplied counters cannot overflow.
    fn page_end(&self) -> u64 {
        let len = u64::try_from(self.data.len()).unwrap_or(u64::MAX);
        self.offset.saturating_add(len)
    }
}

impl<T> IntoIterator for ListResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Filters shared by most list endpoints.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Exact object name.
    pub name: Option<String>,
    /// Folder to list from.
    pub folder: Option<String>,
    /// Snippet to list from.
    pub snippet: Option<String>,
    /// Device to list from.
    pub device: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
    /// Offset of the first item.
    pub offset: Option<u32>,
}

impl ListQuery {
    /// Filters for everything in `folder`.
    #[must_use]
    pub fn folder(folder: impl Into<String>) -> Self {
        Self {
            folder: Some(folder.into()),
            ..Self::default()
        }
    }

    /// Filters for everything in `snippet`.
    #[must_use]
    pub fn snippet(snippet: impl Into<String>) -> Self {
        Self {
            snippet: Some(snippet.into()),
            ..Self::default()
        }
    }

    /// Set the name filter.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set page size and offset.
    #[must_use]
    pub fn with_page(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }

    /// Convert to query parameters.
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("name", self.name.as_deref())
            .with_opt("folder", self.folder.as_deref())
            .with_opt("snippet", self.snippet.as_deref())
            .with_opt("device", self.device.as_deref())
            .with_opt("limit", self.limit)
            .with_opt("offset", self.offset)
    }
}

/// Rulebase a policy rule is evaluated in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Evaluated before device-local rules.
    #[default]
    Pre,
    /// Evaluated after device-local rules.
    Post,
}

impl Position {
    /// Wire value of the position.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pre => "pre",
            Self::Post => "post",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// List filters for policy rules.
///
/// The position is always sent; the API defaults it to `pre` otherwise.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RuleListQuery {
    /// Rulebase to list from.
    pub position: Position,
    /// Common filters.
    pub list: ListQuery,
}

impl RuleListQuery {
    /// Filters for rules in `folder` at `position`.
    #[must_use]
    pub fn folder(folder: impl Into<String>, position: Position) -> Self {
        Self {
            position,
            list: ListQuery::folder(folder),
        }
    }

    /// Convert to query parameters.
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("position", self.position)
            .chain(self.list.to_params())
    }
}
