// Ports module - the list of serial ports offered to the user
// How ports are enumerated is up to the PortSource implementation

use serde::Serialize;
use std::collections::HashMap;

/// A selectable serial port
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortInfo {
    pub id: String,
    pub description: Option<String>,
}

impl PortInfo {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
        }
    }

    /// "COM3 - USB Serial Device", or just the id without a description
    pub fn label(&self) -> String {
        match self.description.as_deref().filter(|d| !d.is_empty()) {
            Some(desc) => format!("{} - {}", self.id, desc),
            None => self.id.clone(),
        }
    }

    /// Parse `ID` or `ID=DESCRIPTION`
    pub fn parse(entry: &str) -> Self {
        match entry.split_once('=') {
            Some((id, desc)) => Self {
                id: id.trim().to_string(),
                description: Some(desc.trim().to_string()),
            },
            None => Self::new(entry.trim()),
        }
    }
}

/// Producer of available port identifiers
pub trait PortSource {
    fn port_ids(&self) -> Vec<String>;

    /// Human-readable descriptions keyed by port id
    fn descriptions(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}

/// Fixed port list, e.g. from the command line
#[derive(Debug, Clone, Default)]
pub struct StaticPorts {
    ports: Vec<PortInfo>,
}

impl StaticPorts {
    pub fn new(ports: Vec<PortInfo>) -> Self {
        Self { ports }
    }
}

impl PortSource for StaticPorts {
    fn port_ids(&self) -> Vec<String> {
        self.ports.iter().map(|p| p.id.clone()).collect()
    }

    fn descriptions(&self) -> HashMap<String, String> {
        self.ports
            .iter()
            .filter_map(|p| Some((p.id.clone(), p.description.clone()?)))
            .collect()
    }
}

/// Sorted ports with descriptions attached; descriptions for unknown ids are ignored
pub fn port_menu(source: &dyn PortSource) -> Vec<PortInfo> {
    let mut descriptions = source.descriptions();
    let mut ids = source.port_ids();
    ids.sort();
    ids.dedup();

    ids.into_iter()
        .map(|id| {
            let description = descriptions.remove(&id).filter(|d| !d.is_empty());
            PortInfo { id, description }
        })
        .collect()
}
