// SPDX-License-Identifier: MPL-2.0
//! In-memory document implementing [`Surface`].
//!
//! Used by tests, benches and the CLI demo. Elements live in an arena and are
//! never freed; detaching only unlinks them from their parent, as in a real DOM.

use super::{ElementHandle, Surface};
use crate::ui::notifications::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parent {
    Head,
    Body,
    Element(ElementHandle),
}

#[derive(Debug, Clone, Default)]
enum Content {
    #[default]
    Empty,
    Text(String),
    Markup(String),
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    content: Content,
    children: Vec<ElementHandle>,
    parent: Option<Parent>,
    on_click: Option<Message>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            content: Content::Empty,
            children: Vec::new(),
            parent: None,
            on_click: None,
        }
    }
}

/// Headless document with a `head` and a `body`.
///
/// # Example
///
/// ```
/// use toast_rack::ui::surface::{HeadlessDocument, Surface};
///
/// let mut doc = HeadlessDocument::new();
/// let div = doc.create_element("div");
/// doc.set_class_name(div, "panel");
/// doc.set_text(div, "a < b");
/// doc.append_to_body(div);
///
/// assert_eq!(doc.first_by_class("panel"), Some(div));
/// assert_eq!(doc.body_markup(), r#"<div class="panel">a &lt; b</div>"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeadlessDocument {
    nodes: Vec<Node>,
    head: Vec<ElementHandle>,
    body: Vec<ElementHandle>,
}

impl HeadlessDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&self, element: ElementHandle) -> &Node {
        &self.nodes[element.raw()]
    }

    fn node_mut(&mut self, element: ElementHandle) -> &mut Node {
        &mut self.nodes[element.raw()]
    }

    /// Removes `element` from its parent's child list.
    fn unlink(&mut self, element: ElementHandle) {
        let Some(parent) = self.node_mut(element).parent.take() else {
            return;
        };
        let siblings = match parent {
            Parent::Head => &mut self.head,
            Parent::Body => &mut self.body,
            Parent::Element(p) => &mut self.nodes[p.raw()].children,
        };
        siblings.retain(|sibling| *sibling != element);
    }

    /// Returns whether `element` is reachable from the head or the body.
    #[must_use]
    pub fn is_attached(&self, element: ElementHandle) -> bool {
        let mut current = element;
        loop {
            match self.node(current).parent {
                None => return false,
                Some(Parent::Head | Parent::Body) => return true,
                Some(Parent::Element(parent)) => current = parent,
            }
        }
    }

    /// Returns every attached element in document order (head first).
    fn walk(&self) -> Vec<ElementHandle> {
        let mut ordered = Vec::new();
        let mut stack: Vec<ElementHandle> =
            self.head.iter().chain(self.body.iter()).rev().copied().collect();
        while let Some(element) = stack.pop() {
            ordered.push(element);
            stack.extend(self.node(element).children.iter().rev().copied());
        }
        ordered
    }

    /// Simulates a click, returning the registered message if the element is
    /// attached and has a listener.
    #[must_use]
    pub fn click(&self, element: ElementHandle) -> Option<Message> {
        if self.is_attached(element) {
            self.node(element).on_click.clone()
        } else {
            None
        }
    }

    /// Number of attached elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.walk().len()
    }

    /// Number of attached elements carrying `class`.
    #[must_use]
    pub fn count_by_class(&self, class: &str) -> usize {
        self.walk()
            .into_iter()
            .filter(|element| self.has_class(*element, class))
            .count()
    }

    /// Number of attached elements whose id is `id`.
    #[must_use]
    pub fn count_by_id(&self, id: &str) -> usize {
        self.walk()
            .into_iter()
            .filter(|element| self.node(*element).id.as_deref() == Some(id))
            .count()
    }

    /// Returns the space-separated class list of `element`.
    #[must_use]
    pub fn class_name(&self, element: ElementHandle) -> String {
        self.node(element).classes.join(" ")
    }

    /// Concatenated plain text of `element` and its descendants.
    #[must_use]
    pub fn text_content(&self, element: ElementHandle) -> String {
        let node = self.node(element);
        let mut text = match &node.content {
            Content::Text(text) => text.clone(),
            Content::Empty | Content::Markup(_) => String::new(),
        };
        for child in &node.children {
            text.push_str(&self.text_content(*child));
        }
        text
    }

    /// Serializes the body's children.
    #[must_use]
    pub fn body_markup(&self) -> String {
        let mut out = String::new();
        for element in &self.body {
            self.write_node(&mut out, *element);
        }
        out
    }

    /// Serializes the whole document.
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut out = String::from("<head>");
        for element in &self.head {
            self.write_node(&mut out, *element);
        }
        out.push_str("</head><body>");
        out.push_str(&self.body_markup());
        out.push_str("</body>");
        out
    }

    fn write_node(&self, out: &mut String, element: ElementHandle) {
        let node = self.node(element);
        out.push('<');
        out.push_str(&node.tag);
        if let Some(id) = &node.id {
            out.push_str(&format!(r#" id="{}""#, escape(id)));
        }
        if !node.classes.is_empty() {
            out.push_str(&format!(r#" class="{}""#, escape(&node.classes.join(" "))));
        }
        out.push('>');
        match &node.content {
            Content::Empty => {}
            Content::Text(text) => out.push_str(&escape(text)),
            Content::Markup(markup) => out.push_str(markup),
        }
        for child in &node.children {
            self.write_node(out, *child);
        }
        out.push_str("</");
        out.push_str(&node.tag);
        out.push('>');
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

impl Surface for HeadlessDocument {
    fn create_element(&mut self, tag: &str) -> ElementHandle {
        self.nodes.push(Node::new(tag));
        ElementHandle::from_raw(self.nodes.len() - 1)
    }

    fn element_by_id(&self, id: &str) -> Option<ElementHandle> {
        self.walk()
            .into_iter()
            .find(|element| self.node(*element).id.as_deref() == Some(id))
    }

    fn first_by_class(&self, class: &str) -> Option<ElementHandle> {
        self.walk()
            .into_iter()
            .find(|element| self.has_class(*element, class))
    }

    fn set_id(&mut self, element: ElementHandle, id: &str) {
        self.node_mut(element).id = Some(id.to_string());
    }

    fn set_class_name(&mut self, element: ElementHandle, class_name: &str) {
        self.node_mut(element).classes = class_name
            .split_whitespace()
            .map(str::to_string)
            .collect();
    }

    fn add_class(&mut self, element: ElementHandle, class: &str) {
        let classes = &mut self.node_mut(element).classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, element: ElementHandle, class: &str) {
        self.node_mut(element).classes.retain(|c| c != class);
    }

    fn has_class(&self, element: ElementHandle, class: &str) -> bool {
        self.node(element).classes.iter().any(|c| c == class)
    }

    fn set_text(&mut self, element: ElementHandle, text: &str) {
        self.node_mut(element).content = Content::Text(text.to_string());
    }

    fn set_inner_markup(&mut self, element: ElementHandle, markup: &str) {
        self.node_mut(element).content = Content::Markup(markup.to_string());
    }

    fn append_child(&mut self, parent: ElementHandle, child: ElementHandle) {
        self.unlink(child);
        self.node_mut(parent).children.push(child);
        self.node_mut(child).parent = Some(Parent::Element(parent));
    }

    fn prepend_child(&mut self, parent: ElementHandle, child: ElementHandle) {
        self.unlink(child);
        self.node_mut(parent).children.insert(0, child);
        self.node_mut(child).parent = Some(Parent::Element(parent));
    }

    fn append_to_head(&mut self, element: ElementHandle) {
        self.unlink(element);
        self.head.push(element);
        self.node_mut(element).parent = Some(Parent::Head);
    }

    fn append_to_body(&mut self, element: ElementHandle) {
        self.unlink(element);
        self.body.push(element);
        self.node_mut(element).parent = Some(Parent::Body);
    }

    fn detach(&mut self, element: ElementHandle) {
        self.unlink(element);
    }

    fn children(&self, parent: ElementHandle) -> Vec<ElementHandle> {
        self.node(parent).children.clone()
    }

    fn on_click(&mut self, element: ElementHandle, message: Message) {
        self.node_mut(element).on_click = Some(message);
    }
}
