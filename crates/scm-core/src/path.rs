//! Path template expansion.
//!
//! Endpoint paths are declared as fixed templates with `{name}` placeholders,
//! one segment per resource identifier (for example `/folders/{id}/move`).

use crate::error::{Error, Result};

/// Ordered path parameter bindings for a single request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PathParams {
    pairs: Vec<(&'static str, String)>,
}

impl PathParams {
    /// Create an empty set of bindings.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Bind `value` to the `{name}` placeholder.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl ToString) -> Self {
        self.pairs.push((name, value.to_string()));
        self
    }

    /// Value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns true if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Substitute every `{name}` placeholder in `template`.
///
/// Values are inserted verbatim; escaping is left to the transport.
///
/// # Errors
///
/// Returns [`Error::MissingPathParam`] if a placeholder has no binding or is
/// bound to an empty string, and [`Error::InvalidRequest`] if the template
/// has an unterminated placeholder.
pub fn expand_path(template: &str, params: &PathParams) -> Result<String> {
    let mut expanded = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        expanded.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| {
            Error::InvalidRequest(format!("unterminated placeholder in path `{template}`"))
        })?;

        let name = &after[..close];
        match params.get(name) {
            Some(value) if !value.is_empty() => expanded.push_str(value),
            _ => return Err(Error::MissingPathParam(name.to_string())),
        }
        rest = &after[close + 1..];
    }

    expanded.push_str(rest);
    Ok(expanded)
}
