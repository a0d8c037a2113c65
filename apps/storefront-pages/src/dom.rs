//! # Headless Document
//!
//! A minimal stand-in for the browser document the pages were written
//! against. Widgets look elements up by id and mutate text, value, classes,
//! the disabled flag and child lists.
//!
//! ## Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Document                                                               │
//! │    elements: id ──► Element { tag, text, value, classes, disabled,      │
//! │                               children: [Element, ...] }                │
//! │    alerts:   ["Added 3 item(s) to the cart! Total: 3", ...]             │
//! │    mutations: count of structural/content writes                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only elements with an id are addressable. Children are anonymous and
//! are reached through their parent.
//!
//! `set_inner_html` understands flat markup only: a sequence of
//! `<tag>text</tag>` items and bare text. That covers everything the pages
//! write.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex};

use crate::error::{PageError, PageResult};

/// Tag used for bare text produced by `set_inner_html`.
pub const TEXT_NODE: &str = "#text";

// =============================================================================
// Element
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub id: Option<String>,
    pub tag: String,
    pub text: String,
    /// Current value of an input; empty for other tags.
    pub value: String,
    pub classes: Vec<String>,
    pub disabled: bool,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The classes joined by spaces, like `className`.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    /// Own text followed by every descendant's text, like `textContent`.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    /// Serializes the children as markup, like reading `innerHTML`.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_outer_html(&mut out);
        }
        out
    }

    fn write_outer_html(&self, out: &mut String) {
        if self.tag == TEXT_NODE {
            out.push_str(&escape(&self.text));
            return;
        }
        let _ = write!(out, "<{}>{}", self.tag, escape(&self.text));
        for child in &self.children {
            child.write_outer_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

// =============================================================================
// Document
// =============================================================================

#[derive(Debug, Default)]
pub struct Document {
    elements: BTreeMap<String, Element>,
    alerts: Vec<String>,
    mutations: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a document from `(tag, id)` pairs.
    pub fn with_elements(elements: &[(&str, &str)]) -> Self {
        let mut doc = Self::new();
        for (tag, id) in elements {
            doc.insert(Element::new(*tag).with_id(*id));
        }
        doc
    }

    /// Adds an element under its id, replacing any element with that id.
    /// Elements without an id are ignored.
    pub fn insert(&mut self, element: Element) {
        if let Some(id) = element.id.clone() {
            self.elements.insert(id, element);
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Looks an element up, failing with [`PageError::MissingElement`].
    pub fn require(&self, id: &str) -> PageResult<&Element> {
        self.elements.get(id).ok_or_else(|| PageError::missing(id))
    }

    /// Checks that every id is present.
    pub fn require_all(&self, ids: &[&str]) -> PageResult<()> {
        for id in ids {
            self.require(id)?;
        }
        Ok(())
    }

    fn element_mut(&mut self, id: &str) -> PageResult<&mut Element> {
        self.mutations += 1;
        self.elements
            .get_mut(id)
            .ok_or_else(|| PageError::missing(id))
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn text(&self, id: &str) -> PageResult<String> {
        Ok(self.require(id)?.text_content())
    }

    pub fn value(&self, id: &str) -> PageResult<String> {
        Ok(self.require(id)?.value.clone())
    }

    pub fn is_disabled(&self, id: &str) -> PageResult<bool> {
        Ok(self.require(id)?.disabled)
    }

    pub fn has_class(&self, id: &str, class: &str) -> PageResult<bool> {
        Ok(self.require(id)?.has_class(class))
    }

    pub fn children(&self, id: &str) -> PageResult<&[Element]> {
        Ok(&self.require(id)?.children)
    }

    // -------------------------------------------------------------------------
    // Writes
    // -------------------------------------------------------------------------

    /// Replaces the element's content with text, like `textContent = ...`.
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> PageResult<()> {
        let element = self.element_mut(id)?;
        element.text = text.into();
        element.children.clear();
        Ok(())
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> PageResult<()> {
        self.element_mut(id)?.value = value.into();
        Ok(())
    }

    pub fn set_disabled(&mut self, id: &str, disabled: bool) -> PageResult<()> {
        self.element_mut(id)?.disabled = disabled;
        Ok(())
    }

    pub fn add_class(&mut self, id: &str, class: &str) -> PageResult<()> {
        let element = self.element_mut(id)?;
        if !element.has_class(class) {
            element.classes.push(class.to_string());
        }
        Ok(())
    }

    pub fn remove_class(&mut self, id: &str, class: &str) -> PageResult<()> {
        self.element_mut(id)?.classes.retain(|c| c != class);
        Ok(())
    }

    /// Replaces the whole class list, like assigning `className`.
    pub fn set_class_name(&mut self, id: &str, class_name: &str) -> PageResult<()> {
        self.element_mut(id)?.classes = class_name.split_whitespace().map(str::to_string).collect();
        Ok(())
    }

    pub fn append_child(&mut self, id: &str, child: Element) -> PageResult<()> {
        self.element_mut(id)?.children.push(child);
        Ok(())
    }

    pub fn prepend_child(&mut self, id: &str, child: Element) -> PageResult<()> {
        self.element_mut(id)?.children.insert(0, child);
        Ok(())
    }

    /// Replaces the element's content with parsed markup in one write.
    pub fn set_inner_html(&mut self, id: &str, markup: &str) -> PageResult<()> {
        let children = parse_fragment(markup);
        let element = self.element_mut(id)?;
        element.text.clear();
        element.children = children;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Alerts
    // -------------------------------------------------------------------------

    /// Records a modal message for the user.
    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }

    /// Drains the alert log.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    /// Number of writes made through this document so far.
    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }
}

// =============================================================================
// Markup
// =============================================================================

/// Parses flat markup into child elements.
fn parse_fragment(markup: &str) -> Vec<Element> {
    let mut children = Vec::new();
    let mut rest = markup;

    while !rest.is_empty() {
        if let Some(after_lt) = rest.strip_prefix('<') {
            if let Some((element, remaining)) = parse_tagged(after_lt) {
                children.push(element);
                rest = remaining;
                continue;
            }
        }

        // Bare text up to the next tag (always consumes at least one char).
        let skip = rest.chars().next().map_or(0, char::len_utf8);
        let end = rest[skip..].find('<').map_or(rest.len(), |i| i + skip);
        let text = unescape(&rest[..end]);
        if !text.trim().is_empty() {
            children.push(Element::new(TEXT_NODE).with_text(text));
        }
        rest = &rest[end..];
    }

    children
}

/// Parses `tag attrs>text</tag>` following a `<`.
fn parse_tagged(input: &str) -> Option<(Element, &str)> {
    let close = input.find('>')?;
    let open = &input[..close];
    let tag = open.split_whitespace().next()?;
    if tag.starts_with('/') {
        return None;
    }

    let body = &input[close + 1..];
    let end_tag = format!("</{}>", tag);
    let end = body.find(&end_tag)?;

    let element = Element::new(tag).with_text(unescape(&body[..end]));
    Some((element, &body[end + end_tag.len()..]))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

// =============================================================================
// Shared State
// =============================================================================

/// The document, shared between widgets and in-flight handlers.
///
/// ## Usage
/// Never hold the lock across an `.await`: take what you need inside
/// `with_doc`/`with_doc_mut`, release, then await.
#[derive(Debug, Clone, Default)]
pub struct DocumentState {
    doc: Arc<Mutex<Document>>,
}

impl DocumentState {
    pub fn new(doc: Document) -> Self {
        DocumentState {
            doc: Arc::new(Mutex::new(doc)),
        }
    }

    /// Executes a function with read access to the document.
    pub fn with_doc<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Document) -> R,
    {
        let doc = self.doc.lock().unwrap_or_else(|e| e.into_inner());
        f(&doc)
    }

    /// Executes a function with write access to the document.
    pub fn with_doc_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Document) -> R,
    {
        let mut doc = self.doc.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut doc)
    }
}
