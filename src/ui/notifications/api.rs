// SPDX-License-Identifier: MPL-2.0
//! Fire-and-forget toast API.

use crate::domain::toast::{Category, DismissAfter};

/// The application-wide toast surface.
///
/// Callers never consume a result. `None` as duration means the installation
/// default; [`DismissAfter::never`] keeps the toast until clicked.
pub trait ToastApi {
    /// Shows `message` with the given category.
    fn add(&mut self, message: impl Into<String>, category: Category, duration: Option<DismissAfter>);

    /// Shows a success toast (green).
    fn success(&mut self, message: impl Into<String>, duration: Option<DismissAfter>) {
        self.add(message, Category::Success, duration);
    }

    /// Shows an error toast (red).
    fn error(&mut self, message: impl Into<String>, duration: Option<DismissAfter>) {
        self.add(message, Category::Error, duration);
    }

    /// Shows a warning toast (yellow).
    fn warning(&mut self, message: impl Into<String>, duration: Option<DismissAfter>) {
        self.add(message, Category::Warning, duration);
    }

    /// Shows an informational toast (blue).
    fn info(&mut self, message: impl Into<String>, duration: Option<DismissAfter>) {
        self.add(message, Category::Info, duration);
    }
}
