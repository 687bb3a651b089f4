//! Profile sections
//!
//! A profile is split into six independently readable and writable
//! sub-documents. Their payloads stay opaque JSON on the client.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

/// One of the six named sub-documents of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Mission,
    Assets,
    Adversaries,
    Threats,
    Risks,
    Mitigations,
}

impl Section {
    /// All sections, in the order the server reports completeness
    pub const ALL: [Section; 6] = [
        Section::Mission,
        Section::Assets,
        Section::Adversaries,
        Section::Threats,
        Section::Risks,
        Section::Mitigations,
    ];

    /// Path segment / wire name of the section
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Mission => "mission",
            Section::Assets => "assets",
            Section::Adversaries => "adversaries",
            Section::Threats => "threats",
            Section::Risks => "risks",
            Section::Mitigations => "mitigations",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let known: Vec<&str> = Section::ALL.iter().map(|s| s.as_str()).collect();
                ClientError::InvalidInput(format!(
                    "unknown section '{}'. Known sections: {}",
                    s,
                    known.join(", ")
                ))
            })
    }
}
