// SPDX-License-Identifier: MPL-2.0
//! Rendering surface abstraction.
//!
//! The notification manager never touches a concrete document. It drives a
//! [`Surface`], a minimal document-like API covering exactly what toasts need:
//! element creation, class manipulation, content, insertion, lookup, detach
//! and click routing.
//!
//! # Components
//!
//! - [`Surface`] - The trait the manager mutates
//! - [`HeadlessDocument`] - In-memory document for tests, benches and the CLI
//! - [`styles`] - Shared style sheet and class names, injected idempotently
//! - [`icons`] - Inline SVG markup per category

mod headless;
pub mod icons;
pub mod styles;

pub use headless::HeadlessDocument;

use crate::ui::notifications::Message;

/// Opaque handle to an element owned by a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(usize);

impl ElementHandle {
    /// Wraps a surface-specific index.
    #[must_use]
    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the surface-specific index.
    #[must_use]
    pub fn raw(self) -> usize {
        self.0
    }
}

/// Document-like rendering surface.
///
/// Lookups (`element_by_id`, `first_by_class`) only see attached elements.
/// Click listeners do not call back into the manager: they carry a
/// [`Message`] the host delivers to `Manager::update` when the click happens.
pub trait Surface {
    /// Creates a detached element.
    fn create_element(&mut self, tag: &str) -> ElementHandle;

    /// Finds the attached element carrying `id`.
    fn element_by_id(&self, id: &str) -> Option<ElementHandle>;

    /// Finds the first attached element, in document order, carrying `class`.
    fn first_by_class(&self, class: &str) -> Option<ElementHandle>;

    fn set_id(&mut self, element: ElementHandle, id: &str);

    /// Replaces the whole class list with the space-separated `class_name`.
    fn set_class_name(&mut self, element: ElementHandle, class_name: &str);

    fn add_class(&mut self, element: ElementHandle, class: &str);

    fn remove_class(&mut self, element: ElementHandle, class: &str);

    fn has_class(&self, element: ElementHandle, class: &str) -> bool;

    /// Sets plain text content. The text is never interpreted as markup.
    fn set_text(&mut self, element: ElementHandle, text: &str);

    /// Sets trusted markup content (static icons only).
    fn set_inner_markup(&mut self, element: ElementHandle, markup: &str);

    /// Moves `child` to the end of `parent`'s children.
    fn append_child(&mut self, parent: ElementHandle, child: ElementHandle);

    /// Moves `child` to the start of `parent`'s children.
    fn prepend_child(&mut self, parent: ElementHandle, child: ElementHandle);

    fn append_to_head(&mut self, element: ElementHandle);

    fn append_to_body(&mut self, element: ElementHandle);

    /// Removes `element` from its parent. Detaching a detached element is a no-op.
    fn detach(&mut self, element: ElementHandle);

    /// Returns the children of `parent` in order.
    fn children(&self, parent: ElementHandle) -> Vec<ElementHandle>;

    /// Registers the message emitted when `element` is clicked.
    fn on_click(&mut self, element: ElementHandle, message: Message);
}
