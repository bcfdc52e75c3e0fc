//! The host document seam and an in-memory implementation of it.

use std::collections::{BTreeMap, HashMap};

use crate::event::EventKind;
use crate::style::StyleMap;

/// Where a listener is attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListenerTarget {
    Window,
    Element(String),
}

/// Operations the scrollbar and element helpers need from the host document.
pub trait Document {
    /// Whether an element with this id exists.
    fn contains(&self, id: &str) -> bool;

    fn set_style(&mut self, id: &str, name: &str, value: &str);

    fn style(&self, id: &str, name: &str) -> Option<String>;

    fn add_class(&mut self, id: &str, class: &str);

    fn remove_class(&mut self, id: &str, class: &str);

    fn has_class(&self, id: &str, class: &str) -> bool;

    /// Register one listener. Several owners may register the same
    /// target and kind; each registration is released separately.
    fn add_listener(&mut self, target: ListenerTarget, kind: EventKind);

    /// Release one registration made by `add_listener`. The host keeps
    /// delivering the event while other registrations remain.
    fn remove_listener(&mut self, target: &ListenerTarget, kind: EventKind);

    /// Whether `id` is `ancestor` or one of its descendants. Hosts without a
    /// tree only compare ids.
    fn is_within(&self, id: &str, ancestor: &str) -> bool {
        id == ancestor
    }
}

/// Style writes for one element of a document.
pub struct ElementStyle<'a, D: Document + ?Sized> {
    doc: &'a mut D,
    id: &'a str,
}

impl<'a, D: Document + ?Sized> ElementStyle<'a, D> {
    pub fn new(doc: &'a mut D, id: &'a str) -> Self {
        Self { doc, id }
    }
}

impl<D: Document + ?Sized> StyleMap for ElementStyle<'_, D> {
    fn set_property(&mut self, name: &str, value: &str) {
        self.doc.set_style(self.id, name, value);
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    parent: Option<String>,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
}

/// A flat id-addressed document kept in memory.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    nodes: HashMap<String, Node>,
    /// Registration count per target and kind.
    listeners: BTreeMap<(ListenerTarget, EventKind), usize>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root-level element. Re-inserting an id resets it.
    pub fn insert(&mut self, id: impl Into<String>) -> &mut Self {
        self.nodes.insert(id.into(), Node::default());
        self
    }

    /// Add an element nested under `parent`.
    pub fn insert_child(&mut self, parent: impl Into<String>, id: impl Into<String>) -> &mut Self {
        let node = Node {
            parent: Some(parent.into()),
            ..Default::default()
        };
        self.nodes.insert(id.into(), node);
        self
    }

    pub fn with(mut self, id: impl Into<String>) -> Self {
        self.insert(id);
        self
    }

    pub fn with_child(mut self, parent: impl Into<String>, id: impl Into<String>) -> Self {
        self.insert_child(parent, id);
        self
    }

    /// Class list in insertion order.
    pub fn classes(&self, id: &str) -> &[String] {
        self.nodes
            .get(id)
            .map(|node| node.classes.as_slice())
            .unwrap_or_default()
    }

    pub fn styles(&self, id: &str) -> Option<&BTreeMap<String, String>> {
        self.nodes.get(id).map(|node| &node.style)
    }

    pub fn has_listener(&self, target: &ListenerTarget, kind: EventKind) -> bool {
        self.listeners.contains_key(&(target.clone(), kind))
    }

    pub fn listeners(&self) -> impl Iterator<Item = &(ListenerTarget, EventKind)> {
        self.listeners.keys()
    }
}

impl Document for MemoryDocument {
    fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    fn set_style(&mut self, id: &str, name: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.style.set_property(name, value);
        }
    }

    fn style(&self, id: &str, name: &str) -> Option<String> {
        self.nodes.get(id)?.style.get(name).cloned()
    }

    fn add_class(&mut self, id: &str, class: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, id: &str, class: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.classes.retain(|c| c != class);
        }
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.classes(id).iter().any(|c| c == class)
    }

    fn add_listener(&mut self, target: ListenerTarget, kind: EventKind) {
        *self.listeners.entry((target, kind)).or_default() += 1;
    }

    fn remove_listener(&mut self, target: &ListenerTarget, kind: EventKind) {
        let key = (target.clone(), kind);
        if let Some(count) = self.listeners.get_mut(&key) {
            *count -= 1;
            if *count == 0 {
                self.listeners.remove(&key);
            }
        }
    }

    fn is_within(&self, id: &str, ancestor: &str) -> bool {
        // A chain longer than the node count has a cycle in it.
        let mut current = Some(id);
        for _ in 0..=self.nodes.len() {
            let Some(node_id) = current else {
                return false;
            };
            if node_id == ancestor {
                return true;
            }
            current = self.nodes.get(node_id).and_then(|node| node.parent.as_deref());
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_has_no_duplicates() {
        let mut doc = MemoryDocument::new().with("a");
        doc.add_class("a", "x");
        doc.add_class("a", "y");
        doc.add_class("a", "x");
        assert_eq!(doc.classes("a"), ["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_is_within_walks_parents() {
        let doc = MemoryDocument::new()
            .with("root")
            .with_child("root", "mid")
            .with_child("mid", "leaf");
        assert!(doc.is_within("leaf", "root"));
        assert!(doc.is_within("mid", "mid"));
        assert!(!doc.is_within("root", "leaf"));
    }

    #[test]
    fn test_listener_stays_until_every_registration_is_released() {
        let mut doc = MemoryDocument::new();
        doc.add_listener(ListenerTarget::Window, EventKind::MouseMove);
        doc.add_listener(ListenerTarget::Window, EventKind::MouseMove);

        doc.remove_listener(&ListenerTarget::Window, EventKind::MouseMove);
        assert!(doc.has_listener(&ListenerTarget::Window, EventKind::MouseMove));

        doc.remove_listener(&ListenerTarget::Window, EventKind::MouseMove);
        assert!(!doc.has_listener(&ListenerTarget::Window, EventKind::MouseMove));
        assert_eq!(doc.listeners().count(), 0);
    }

    #[test]
    fn test_is_within_stops_on_parent_cycle() {
        let doc = MemoryDocument::new()
            .with("box")
            .with_child("loop", "loop")
            .with_child("b", "a")
            .with_child("a", "b");
        assert!(!doc.is_within("loop", "box"));
        assert!(!doc.is_within("a", "box"));
        assert!(doc.is_within("a", "b"));
    }
}
