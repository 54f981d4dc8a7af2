//! # Request Context
//!
//! Per-request storage for captured path parameters and scratch values.
//!
//! Parameters are addressable by position (match order, root to leaf) and,
//! when named, by name. Absent positions and names read as the empty string,
//! the same as a parameter that captured nothing; use [`Context::len`] or
//! [`Context::values_at`] when that distinction matters.
//!
//! The scratch map ([`Context::vars`]) belongs to handlers. The router only
//! writes parameters.

use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Param {
    name: String,
    values: Vec<String>,
}

/// Captured parameters and scratch values for one request.
#[derive(Debug, Clone, Default)]
pub struct Context {
    params: Vec<Param>,
    by_name: HashMap<String, usize>,
    vars: HashMap<String, String>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a captured parameter.
    ///
    /// An empty `name` records a positional-only capture. A repeated name
    /// shadows the earlier capture for named lookup; both stay reachable by
    /// position.
    pub fn push_param(&mut self, name: &str, value: impl Into<String>) {
        let index = self.params.len();
        self.params.push(Param {
            name: name.to_string(),
            values: vec![value.into()],
        });
        if !name.is_empty() {
            self.by_name.insert(name.to_string(), index);
        }
    }

    /// Number of captured parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// All values captured at `index`, or an empty slice.
    pub fn values_at(&self, index: usize) -> &[String] {
        self.params
            .get(index)
            .map(|p| p.values.as_slice())
            .unwrap_or_default()
    }

    /// First value captured at `index`, or `""`.
    pub fn value_at(&self, index: usize) -> &str {
        first(self.values_at(index))
    }

    /// All values captured under `name`, or an empty slice.
    pub fn values_by_name(&self, name: &str) -> &[String] {
        self.by_name
            .get(name)
            .and_then(|&i| self.params.get(i))
            .map(|p| p.values.as_slice())
            .unwrap_or_default()
    }

    /// First value captured under `name`, or `""`.
    pub fn value_by_name(&self, name: &str) -> &str {
        first(self.values_by_name(name))
    }

    /// Iterate `(name, value)` pairs in match order.
    ///
    /// Positional-only captures yield an empty name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|p| (p.name.as_str(), first(&p.values)))
    }

    /// Scratch value stored under `key`.
    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Store a scratch value, returning the previous one.
    pub fn set_var(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(key.into(), value.into())
    }

    /// The scratch map.
    pub fn vars(&self) -> &HashMap<String, String> {
        &self.vars
    }

    /// The scratch map, mutably.
    pub fn vars_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.vars
    }
}

fn first(values: &[String]) -> &str {
    values.first().map(String::as_str).unwrap_or("")
}
