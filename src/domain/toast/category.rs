// SPDX-License-Identifier: MPL-2.0
//! Toast category (visual classification).

use std::fmt;

/// Category of a toast, which selects its accent color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Operation completed successfully (green).
    Success,
    /// Operation failed (red).
    Error,
    /// Something needs attention but nothing failed (yellow).
    Warning,
    /// Neutral information (blue). Also the fallback for unknown names.
    #[default]
    Info,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 4] = [
        Category::Success,
        Category::Error,
        Category::Warning,
        Category::Info,
    ];

    /// Parses a category name, ignoring surrounding whitespace and case.
    ///
    /// Returns `None` for names outside the fixed set.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => Some(Category::Success),
            "error" => Some(Category::Error),
            "warning" => Some(Category::Warning),
            "info" => Some(Category::Info),
            _ => None,
        }
    }

    /// Parses a category name, degrading unknown names to [`Category::Info`].
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_default()
    }

    /// Splits `category:message` when the text before the first colon names
    /// a category.
    ///
    /// Returns `None` otherwise, so text such as a URL is never mistaken for
    /// a category prefix.
    #[must_use]
    pub fn split_prefix(raw: &str) -> Option<(Self, &str)> {
        let (prefix, message) = raw.split_once(':')?;
        Self::parse(prefix).map(|category| (category, message))
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Success => "success",
            Category::Error => "error",
            Category::Warning => "warning",
            Category::Info => "info",
        }
    }

    /// Returns the CSS class carrying this category's accent color.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Category::Success => "toast-success",
            Category::Error => "toast-error",
            Category::Warning => "toast-warning",
            Category::Info => "toast-info",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
