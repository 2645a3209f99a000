//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server depends on this crate (with the `ssr` feature) and reuses these
//! types for its JSON API, so the browser and the Axum handlers can never
//! disagree on field names. Enums serialize as lowercase ids because the
//! upstream generation service expects plain strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Website style category the generator uses to bias its output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Business,
    Portfolio,
    Blog,
    Ecommerce,
    Landing,
    Restaurant,
    Saas,
    Nonprofit,
}

impl TemplateId {
    pub const ALL: [TemplateId; 8] = [
        Self::Business,
        Self::Ecommerce,
        Self::Portfolio,
        Self::Blog,
        Self::Landing,
        Self::Restaurant,
        Self::Saas,
        Self::Nonprofit,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Portfolio => "portfolio",
            Self::Blog => "blog",
            Self::Ecommerce => "ecommerce",
            Self::Landing => "landing",
            Self::Restaurant => "restaurant",
            Self::Saas => "saas",
            Self::Nonprofit => "nonprofit",
        }
    }
}

impl FromStr for TemplateId {
    type Err = UnknownId;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == raw)
            .ok_or_else(|| UnknownId(raw.to_owned()))
    }
}

/// Quality/cost tier for a generation request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Standard,
    Premium,
}

impl GenerationMode {
    pub const ALL: [GenerationMode; 2] = [Self::Standard, Self::Premium];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Premium => "premium",
        }
    }
}

impl FromStr for GenerationMode {
    type Err = UnknownId;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == raw)
            .ok_or_else(|| UnknownId(raw.to_owned()))
    }
}

/// Wire id that names no known template or mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownId(pub String);

impl fmt::Display for UnknownId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown id {:?}", self.0)
    }
}

impl std::error::Error for UnknownId {}

/// Fixed style attributes sent with every generation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customization {
    pub primary_color: String,
    pub font: String,
    pub style: String,
}

impl Default for Customization {
    fn default() -> Self {
        Self { primary_color: "#6366f1".to_owned(), font: "Inter".to_owned(), style: "modern".to_owned() }
    }
}

/// Body of `POST /api/generate`, forwarded verbatim to the generation service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub template: TemplateId,
    pub generation_mode: GenerationMode,
    #[serde(default)]
    pub customization: Customization,
}

impl GenerationRequest {
    /// Build a request with the default customization.
    #[must_use]
    pub fn new(prompt: impl Into<String>, template: TemplateId, generation_mode: GenerationMode) -> Self {
        Self { prompt: prompt.into(), template, generation_mode, customization: Customization::default() }
    }
}

/// Response of a successful generation. Only `name` is guaranteed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Echoed category; unknown values read as `None`.
    #[serde(default, deserialize_with = "lenient")]
    pub template: Option<TemplateId>,
    #[serde(default, deserialize_with = "lenient")]
    pub generation_mode: Option<GenerationMode>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Optional echoed field that never fails the whole response.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| serde_json::from_value(v).ok()))
}

/// Entry in the `websites` list shown by the dashboard and analytics pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteSummary {
    pub id: String,
    pub name: String,
    pub template: TemplateId,
    pub generation_mode: GenerationMode,
    #[serde(default)]
    pub url: Option<String>,
    /// RFC 3339 timestamp assigned by the server.
    pub created_at: String,
}

/// Signed-in operator returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

/// Error body returned by every failing API route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}
