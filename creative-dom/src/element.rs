//! Class and style changes over a group of elements addressed by id.

use crate::dom::{Document, ElementStyle};
use crate::error::DomError;
use crate::style::apply_style;

/// A set of existing elements of a document.
///
/// Every id is resolved when the handle is built, so later calls never meet
/// a missing element.
pub struct ElementHandle<'d, D: Document + ?Sized> {
    doc: &'d mut D,
    ids: Vec<String>,
}

impl<'d, D: Document + ?Sized> ElementHandle<'d, D> {
    pub fn new<I, S>(doc: &'d mut D, ids: I) -> Result<Self, DomError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        if let Some(missing) = ids.iter().find(|id| !doc.contains(id)) {
            return Err(DomError::missing(missing.as_str()));
        }
        Ok(Self { doc, ids })
    }

    /// Build a handle from a whitespace separated id list.
    pub fn select(doc: &'d mut D, ids: &str) -> Result<Self, DomError> {
        Self::new(doc, ids.split_whitespace())
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Add every class of a space separated list to every element.
    pub fn add_class(&mut self, classes: &str) -> &mut Self {
        for id in &self.ids {
            for class in classes.split_whitespace() {
                self.doc.add_class(id, class);
            }
        }
        self
    }

    pub fn remove_class(&mut self, classes: &str) -> &mut Self {
        for id in &self.ids {
            for class in classes.split_whitespace() {
                self.doc.remove_class(id, class);
            }
        }
        self
    }

    /// Apply `;` separated properties and values pairwise to every element.
    ///
    /// Nothing is written when the two lists differ in length.
    pub fn change_style(&mut self, properties: &str, values: &str) -> Result<&mut Self, DomError> {
        let properties: Vec<&str> = properties.split(';').map(str::trim).collect();
        let values: Vec<&str> = values.split(';').map(str::trim).collect();

        if properties.len() != values.len() {
            return Err(DomError::MismatchedStyleLists {
                target: self.ids.join(" "),
                properties: properties.len(),
                values: values.len(),
            });
        }

        for id in &self.ids {
            let mut style = ElementStyle::new(&mut *self.doc, id);
            for (property, value) in properties.iter().zip(&values) {
                apply_style(&mut style, property, value);
            }
        }
        Ok(self)
    }
}
