//! Static lookup lists bundled into the binary.
//!
//! The clients and categories a note can be tagged with come from two JSON
//! documents compiled in at build time. They are loaded once at startup and
//! never change for the process lifetime.

use crate::entity::{Category, Client};
use crate::error::Result;

const CLIENTS_JSON: &str = include_str!("../data/clients.json");
const CATEGORIES_JSON: &str = include_str!("../data/categories.json");

pub struct ReferenceData {
    clients: Vec<Client>,
    categories: Vec<Category>,
}

impl ReferenceData {
    /// Parse the bundled lists. The bundle ships inside the binary, so a
    /// parse failure here means the shipped data itself is broken.
    pub fn load() -> Result<Self> {
        Ok(Self {
            clients: serde_json::from_str(CLIENTS_JSON)?,
            categories: serde_json::from_str(CATEGORIES_JSON)?,
        })
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Resolve a category by name, case-insensitively.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Resolve a client by full name ("First Last"), case-insensitively.
    pub fn client(&self, name: &str) -> Option<&Client> {
        self.clients
            .iter()
            .find(|c| c.full_name().eq_ignore_ascii_case(name))
    }
}
