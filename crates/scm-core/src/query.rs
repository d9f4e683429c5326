//! Query parameter assembly.
//!
//! Filters left unset are dropped from the request instead of being sent as
//! empty values. Numbers are written in decimal.

use std::fmt::Display;

/// Ordered query parameters for a single request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Add `key` with `value`.
    #[must_use]
    pub fn with(mut self, key: &'static str, value: impl Display) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Add `key` only when a value is set.
    #[must_use]
    pub fn with_opt(self, key: &'static str, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Add every parameter of `tail` after the current ones.
    #[must_use]
    pub fn chain(mut self, tail: Self) -> Self {
        self.pairs.extend(tail.pairs);
        self
    }

    /// First value given for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find_map(|(name, value)| (*name == key).then_some(value.as_str()))
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no parameter was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Consume into `(key, value)` pairs in insertion order.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::QueryParams;

    #[test]
    fn unset_values_are_dropped() {
        let params = QueryParams::new()
            .with_opt("name", Option::<String>::None)
            .with_opt("folder", Option::<&str>::None);
        assert!(params.is_empty());
        assert_eq!(params.get("name"), None);
    }

    #[test]
    fn numbers_are_decimal() {
        let params = QueryParams::new()
            .with_opt("limit", Some(50u32))
            .with_opt("offset", Some(0u64));
        assert_eq!(
            params.into_pairs(),
            vec![("limit", "50".to_string()), ("offset", "0".to_string())]
        );
    }

    #[test]
    fn chain_keeps_leading_parameters_first() {
        let params = QueryParams::new()
            .with("position", "pre")
            .chain(QueryParams::new().with("folder", "Texas").with("limit", 10));

        assert_eq!(params.len(), 3);
        assert_eq!(params.get("limit"), Some("10"));
        assert_eq!(
            params.into_pairs(),
            vec![
                ("position", "pre".to_string()),
                ("folder", "Texas".to_string()),
                ("limit", "10".to_string())
            ]
        );
    }

    #[test]
    fn repeated_key_reports_first_value() {
        let params = QueryParams::new().with("tag", "a").with("tag", "b");
        assert_eq!(params.get("tag"), Some("a"));
        assert_eq!(params.len(), 2);
    }
}
