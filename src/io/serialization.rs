// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation set and label table serialization.
//!
//! This module handles exporting and importing annotation sets and
//! label tables in YAML and JSON formats.

use crate::models::annotation::AnnotationSet;
use crate::models::label::LabelTable;
use anyhow::Result;
use std::path::Path;

/// Export an annotation set to YAML format.
pub fn export_yaml(set: &AnnotationSet, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(set)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export an annotation set to JSON format.
pub fn export_json(set: &AnnotationSet, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(set)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import an annotation set from YAML format.
pub fn import_yaml(path: &Path) -> Result<AnnotationSet> {
    let yaml = std::fs::read_to_string(path)?;
    let set = serde_yaml::from_str(&yaml)?;
    Ok(set)
}

/// Import an annotation set from JSON format.
pub fn import_json(path: &Path) -> Result<AnnotationSet> {
    let json = std::fs::read_to_string(path)?;
    let set = serde_json::from_str(&json)?;
    Ok(set)
}

/// Import a label table, choosing the format by file extension.
pub fn import_labels(path: &Path) -> Result<LabelTable> {
    let text = std::fs::read_to_string(path)?;
    let table = match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)?,
        Some("json") => serde_json::from_str(&text)?,
        other => anyhow::bail!("Unsupported label table extension: {:?}", other),
    };
    Ok(table)
}
