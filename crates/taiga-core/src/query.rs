//! Convenience builder for HTTP query parameters.
//!
//! Filter structs describe themselves as ordered key/value pairs through
//! [`QueryString`]. Absent and zero-valued fields are never emitted.

use std::fmt::Display;

/// Types that can be rendered into URL query pairs.
pub trait QueryString {
    /// Convert the value into ordered URL query pairs.
    fn to_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a key/value pair when the value is present and not empty.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: ToString,
    {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.is_empty() {
                self.pairs.push((key, value));
            }
        }
    }

    /// Append a key/value pair unless the value equals its type's default.
    pub fn push_nonzero<T>(&mut self, key: &'static str, value: T)
    where
        T: Default + PartialEq + Display,
    {
        if value != T::default() {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Append a required key/value pair.
    pub fn push<T>(&mut self, key: &'static str, value: T)
    where
        T: Display,
    {
        self.pairs.push((key, value.to_string()));
    }

    /// Return the collected key/value pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl QueryString for QueryParams {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        self.pairs.clone()
    }
}
