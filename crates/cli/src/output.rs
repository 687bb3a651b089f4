//! Human-readable rendering of API results

use console::style;
use serde::Serialize;
use shared::{Profile, ProfileSummary, Section, ValidationError};
use std::fmt::Write;

/// Completeness as a whole-number percentage
pub fn format_percentage(value: f64) -> String {
    format!("{:.0}%", value.clamp(0.0, 100.0))
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn render_summaries(profiles: &[ProfileSummary]) -> String {
    if profiles.is_empty() {
        return "No profiles yet. Create one with `armor profile create <name>`.".to_string();
    }

    let id_width = profiles.iter().map(|p| p.id.len()).max().unwrap_or(2).max(2);
    let name_width = profiles.iter().map(|p| p.name.len()).max().unwrap_or(4).max(4);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        style(format!(
            "{:<id_width$}  {:<name_width$}  {:>8}  UPDATED",
            "ID", "NAME", "COMPLETE"
        ))
        .bold()
    );
    for profile in profiles {
        let _ = writeln!(
            out,
            "{:<id_width$}  {:<name_width$}  {:>8}  {}",
            profile.id,
            profile.name,
            format_percentage(profile.completeness),
            profile.updated_at.format("%Y-%m-%d %H:%M"),
        );
    }
    out
}

pub fn render_profile(profile: &Profile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", style(&profile.name).bold(), profile.id);
    if !profile.description.is_empty() {
        let _ = writeln!(out, "{}", profile.description);
    }
    let _ = writeln!(
        out,
        "Completeness: {}",
        format_percentage(profile.completeness.overall)
    );

    for section in Section::ALL {
        let status = match profile.completeness.section(section) {
            Some(c) => format!("{:>5}  ({}/{})", format_percentage(c.percentage), c.filled, c.total),
            None if profile.section(section).is_null() => "empty".to_string(),
            None => "-".to_string(),
        };
        let _ = writeln!(out, "  {:<12} {}", section.as_str(), status);
    }

    let _ = write!(
        out,
        "Created {}  Updated {}",
        profile.created_at.format("%Y-%m-%d %H:%M"),
        profile.updated_at.format("%Y-%m-%d %H:%M")
    );
    out
}

pub fn render_validation_errors(errors: &[ValidationError]) -> String {
    let mut out = String::new();
    for error in errors {
        let path = if error.path.is_empty() { "$" } else { error.path.as_str() };
        let _ = writeln!(out, "  {} {}: {}", style("•").red(), path, error.message);
    }
    out
}
