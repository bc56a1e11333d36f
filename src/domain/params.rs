//! Multi-valued API parameters built from `OPTION=VALUE` arguments

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{DomainError, DomainResult};

/// Characters stripped from both ends of an argument value.
const VALUE_TRIM: &[char] = &[' ', '"', '\''];

/// Separator used when a parameter carries more than one value on the wire.
const VALUE_SEPARATOR: &str = ",";

/// Mapping from parameter name to a set of distinct values.
///
/// Repeating a key accumulates values; repeating a key/value pair is a no-op.
/// A fresh set is always empty, nothing is shared between invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    values: BTreeMap<String, BTreeSet<String>>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a parameter set from raw `OPTION=VALUE` arguments.
    ///
    /// Fails on the first argument without a `=` separator.
    pub fn from_options<S: AsRef<str>>(options: &[S]) -> DomainResult<Self> {
        let mut params = Self::new();
        for option in options {
            let (key, value) = parse_option(option.as_ref())?;
            params.insert(key, value);
        }
        Ok(params)
    }

    /// Add a value under `key`, trimming surrounding quotes and whitespace.
    pub fn insert(&mut self, key: impl Into<String>, value: impl AsRef<str>) -> &mut Self {
        let value = value.as_ref().trim_matches(VALUE_TRIM).to_string();
        self.values.entry(key.into()).or_default().insert(value);
        self
    }

    /// Builder-style variant of [`ParameterSet::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl AsRef<str>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.values.iter()
    }

    /// One wire value per key: multiple values are joined with `,` in sorted order.
    pub fn to_wire(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|(key, values)| {
                let joined = values
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(VALUE_SEPARATOR);
                (key.clone(), joined)
            })
            .collect()
    }
}

/// Split an `OPTION=VALUE` argument at the first `=`.
///
/// The key is kept verbatim, the value is returned untrimmed.
pub fn parse_option(option: &str) -> DomainResult<(String, String)> {
    option
        .split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| DomainError::MalformedArgument(option.to_string()))
}
