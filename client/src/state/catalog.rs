#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{GenerationMode, TemplateId};

/// Display metadata for one selectable catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry<Id: 'static> {
    pub id: Id,
    pub name: &'static str,
    pub description: &'static str,
    pub badge: Option<&'static str>,
}

pub type TemplateEntry = CatalogEntry<TemplateId>;
pub type ModeEntry = CatalogEntry<GenerationMode>;

pub const TEMPLATES: &[TemplateEntry] = &[
    CatalogEntry {
        id: TemplateId::Business,
        name: "Business",
        description: "Professional business websites",
        badge: None,
    },
    CatalogEntry {
        id: TemplateId::Ecommerce,
        name: "E-commerce",
        description: "Online stores and shops",
        badge: None,
    },
    CatalogEntry {
        id: TemplateId::Portfolio,
        name: "Portfolio",
        description: "Creative portfolios and showcases",
        badge: None,
    },
    CatalogEntry {
        id: TemplateId::Blog,
        name: "Blog",
        description: "Content-focused websites",
        badge: None,
    },
    CatalogEntry {
        id: TemplateId::Landing,
        name: "Landing Page",
        description: "High-converting landing pages",
        badge: None,
    },
    CatalogEntry {
        id: TemplateId::Restaurant,
        name: "Restaurant",
        description: "Food and dining websites",
        badge: None,
    },
    CatalogEntry {
        id: TemplateId::Saas,
        name: "SaaS",
        description: "Software as a Service websites",
        badge: None,
    },
    CatalogEntry {
        id: TemplateId::Nonprofit,
        name: "Non-profit",
        description: "Charity and organization sites",
        badge: None,
    },
];

pub const MODES: &[ModeEntry] = &[
    CatalogEntry {
        id: GenerationMode::Standard,
        name: "Standard",
        description: "Good quality, fast generation",
        badge: None,
    },
    CatalogEntry {
        id: GenerationMode::Premium,
        name: "Premium",
        description: "Highest quality, advanced features",
        badge: Some("Pro"),
    },
];

/// Catalog entry for a template id.
#[must_use]
pub fn template(id: TemplateId) -> &'static TemplateEntry {
    TEMPLATES
        .iter()
        .find(|t| t.id == id)
        .unwrap_or(&TEMPLATES[0])
}

/// Catalog entry for a generation mode.
#[must_use]
pub fn mode(id: GenerationMode) -> &'static ModeEntry {
    MODES.iter().find(|m| m.id == id).unwrap_or(&MODES[0])
}
