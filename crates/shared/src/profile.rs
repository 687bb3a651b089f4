//! Profile wire types
//!
//! These mirror the JSON the ARMOR server sends and receives. Section
//! payloads are kept as raw `serde_json::Value`s and passed through
//! unchanged; completeness figures are computed server-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::section::Section;

/// Row returned by the profile listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Overall completeness percentage in [0, 100]
    pub completeness: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Completeness of a single section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCompleteness {
    pub section: String,
    pub percentage: f64,
    pub filled: u32,
    pub total: u32,
}

/// Completeness of a whole profile
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileCompleteness {
    pub overall: f64,
    #[serde(default)]
    pub sections: Vec<SectionCompleteness>,
}

impl ProfileCompleteness {
    /// Look up the completeness record for a section
    pub fn section(&self, section: Section) -> Option<&SectionCompleteness> {
        self.sections.iter().find(|s| s.section == section.as_str())
    }
}

/// Full profile with all section payloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mission: Value,
    #[serde(default)]
    pub assets: Value,
    #[serde(default)]
    pub adversaries: Value,
    #[serde(default)]
    pub threats: Value,
    #[serde(default)]
    pub risks: Value,
    #[serde(default)]
    pub mitigations: Value,
    #[serde(default)]
    pub completeness: ProfileCompleteness,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Raw payload of a section (`Value::Null` when never written)
    pub fn section(&self, section: Section) -> &Value {
        match section {
            Section::Mission => &self.mission,
            Section::Assets => &self.assets,
            Section::Adversaries => &self.adversaries,
            Section::Threats => &self.threats,
            Section::Risks => &self.risks,
            Section::Mitigations => &self.mitigations,
        }
    }

    /// Condense into the shape the listing endpoint returns
    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            completeness: self.completeness.overall,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Body of `POST /profiles`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
    pub description: String,
}

/// Body of `GET /profiles/{id}/{section}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionData {
    #[serde(default)]
    pub data: Value,
}

/// Body of `PUT /profiles/{id}/{section}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionUpdate {
    pub success: bool,
    #[serde(default)]
    pub data: Value,
}

/// A single schema violation reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}
