//! Scenario files: a document, a scrollbar and the input to replay.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use creative_dom::{
    DomEvent, ElementHandle, MemoryDocument, ScrollConfig, ScrollController, UserAgent,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

#[derive(Debug, Clone, Deserialize)]
pub struct ElementSpec {
    pub id: String,
    #[serde(default)]
    pub parent: Option<String>,
}

/// Class and style changes applied before the scrollbar is set up.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    AddClass { ids: String, classes: String },
    RemoveClass { ids: String, classes: String },
    ChangeStyle {
        ids: String,
        properties: String,
        values: String,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub user_agent: UserAgent,
    pub elements: Vec<ElementSpec>,
    #[serde(default)]
    pub commands: Vec<Command>,
    pub scroll: Option<ScrollConfig>,
    #[serde(default)]
    pub events: Vec<DomEvent>,
}

#[derive(Debug, Serialize)]
pub struct ElementReport {
    pub classes: Vec<String>,
    pub styles: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub chromium: bool,
    pub firefox: bool,
    pub legacy_ie: bool,
    pub safari_vendor: bool,
    pub mac: bool,
    pub mobile: bool,
    pub thumb_y: Option<f64>,
    pub content_y: Option<f64>,
    pub moved_events: usize,
    pub prevented_events: usize,
    pub elements: BTreeMap<String, ElementReport>,
}

impl Scenario {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Build the element tree. Every parent must be another declared element
    /// and no element may end up as its own ancestor.
    fn document(&self) -> Result<MemoryDocument, CliError> {
        let parents: HashMap<&str, Option<&str>> = self
            .elements
            .iter()
            .map(|element| (element.id.as_str(), element.parent.as_deref()))
            .collect();

        for element in &self.elements {
            let Some(parent) = element.parent.as_deref() else {
                continue;
            };
            let invalid = || CliError::InvalidParent {
                id: element.id.clone(),
                parent: parent.to_string(),
            };
            if !parents.contains_key(parent) {
                return Err(invalid());
            }

            let mut current = Some(parent);
            for _ in 0..=parents.len() {
                match current {
                    Some(id) if id == element.id => return Err(invalid()),
                    Some(id) => current = parents.get(id).copied().flatten(),
                    None => break,
                }
            }
            if current.is_some() {
                return Err(invalid());
            }
        }

        let mut doc = MemoryDocument::new();
        for element in &self.elements {
            match &element.parent {
                Some(parent) => doc.insert_child(parent.as_str(), element.id.as_str()),
                None => doc.insert(element.id.as_str()),
            };
        }
        Ok(doc)
    }

    /// Build the document, run the commands, set up the scrollbar and replay
    /// the events.
    pub fn run(&self) -> Result<Report, CliError> {
        let mut doc = self.document()?;

        for command in &self.commands {
            debug!("command {:?}", command);
            match command {
                Command::AddClass { ids, classes } => {
                    ElementHandle::select(&mut doc, ids)?.add_class(classes);
                }
                Command::RemoveClass { ids, classes } => {
                    ElementHandle::select(&mut doc, ids)?.remove_class(classes);
                }
                Command::ChangeStyle {
                    ids,
                    properties,
                    values,
                } => {
                    ElementHandle::select(&mut doc, ids)?.change_style(properties, values)?;
                }
            }
        }

        let (mut moved_events, mut prevented_events) = (0, 0);
        let mut scroll = None;

        if let Some(config) = &self.scroll {
            let mut controller = ScrollController::new(config.clone(), self.user_agent.clone());
            controller.init(&mut doc)?;

            for event in &self.events {
                let outcome = controller.handle_event(&mut doc, event)?;
                moved_events += usize::from(outcome.moved);
                prevented_events += usize::from(outcome.prevent_default);
            }
            info!(
                "replayed {} events, {} moved the scrollbar",
                self.events.len(),
                moved_events
            );
            scroll = Some(controller);
        }

        let elements = self
            .elements
            .iter()
            .map(|element| {
                let report = ElementReport {
                    classes: doc.classes(&element.id).to_vec(),
                    styles: doc.styles(&element.id).cloned().unwrap_or_default(),
                };
                (element.id.clone(), report)
            })
            .collect();

        let ua = &self.user_agent;
        Ok(Report {
            chromium: ua.is_chromium(),
            firefox: ua.is_firefox(),
            legacy_ie: ua.is_legacy_ie(),
            safari_vendor: ua.is_safari_vendor(),
            mac: ua.is_mac_platform(),
            mobile: ua.is_mobile_device(),
            thumb_y: scroll.as_ref().map(|s| s.state().thumb_y),
            content_y: scroll.as_ref().map(|s| s.state().content_y),
            moved_events,
            prevented_events,
            elements,
        })
    }
}
