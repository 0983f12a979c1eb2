// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Label table: mapping from label ids to class metadata.
//!
//! The table is supplied by the dataset-access layer and only read here.
//! Class id 0 is reserved for "unclassified" (label id not in the table).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Class id reserved for annotations whose label id is unknown.
pub const UNCLASSIFIED: u32 = 0;

/// Largest class id [`LabelTable::class_names`] will allocate a slot
/// for. Real label tables have at most a few dozen classes; an id past
/// this bound is corrupt data, not a bigger dataset.
pub const MAX_CLASS_ID: u32 = 65_535;

/// Class metadata for one label id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Positive integer class identifier. 0 is reserved for "unclassified".
    pub class_id: u32,
    pub name: String,
}

/// Read-only lookup from label id to class metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelTable {
    labels: HashMap<String, Label>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a label. Replaces any previous entry for the same id.
    pub fn insert(&mut self, label_id: impl Into<String>, label: Label) {
        self.labels.insert(label_id.into(), label);
    }

    pub fn get(&self, label_id: &str) -> Option<&Label> {
        self.labels.get(label_id)
    }

    /// Class id for a label id, or [`UNCLASSIFIED`] when the id is unknown.
    /// An unknown label id is not an error.
    pub fn class_id(&self, label_id: &str) -> u32 {
        self.labels.get(label_id).map_or(UNCLASSIFIED, |l| l.class_id)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Class-name list indexed directly by class id. Slot 0 and any gap
    /// in the id numbering hold "unclassified". Labels with a class id
    /// above [`MAX_CLASS_ID`] are corrupt data and left out; looking
    /// such an id up later fails with `ClassIdOutOfRange`.
    pub fn class_names(&self) -> Vec<String> {
        let max_id = self
            .labels
            .values()
            .map(|l| l.class_id)
            .filter(|&id| id <= MAX_CLASS_ID)
            .max()
            .unwrap_or(0);
        let mut names = vec!["unclassified".to_string(); max_id as usize + 1];
        for label in self.labels.values() {
            if label.class_id > MAX_CLASS_ID {
                log::warn!(
                    "label {:?} has class id {} above the supported maximum {}, skipping",
                    label.name,
                    label.class_id,
                    MAX_CLASS_ID
                );
                continue;
            }
            names[label.class_id as usize] = label.name.clone();
        }
        names
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Look up a class name by class id.
///
/// Class ids index `class_names` directly, with slot 0 holding the
/// "unclassified" name. An out-of-range id means the id numbering and the
/// name list disagree; that is reported as a hard error rather than
/// corrected by shifting the index.
pub fn class_name(class_names: &[String], class_id: u32) -> Result<&str> {
    class_names
        .get(class_id as usize)
        .map(String::as_str)
        .ok_or(Error::ClassIdOutOfRange {
            class_id,
            known: class_names.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: &[&str]) -> Vec<String> {
        n.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unknown_label_id_is_unclassified() {
        let mut table = LabelTable::new();
        table.insert("L_a1", Label { class_id: 1, name: "nodule".into() });

        assert_eq!(table.class_id("L_a1"), 1);
        assert_eq!(table.class_id("L_missing"), UNCLASSIFIED);
    }

    #[test]
    fn test_class_name_direct_indexing() {
        let names = names(&["unclassified", "nodule", "mass"]);
        assert_eq!(class_name(&names, 0).unwrap(), "unclassified");
        assert_eq!(class_name(&names, 2).unwrap(), "mass");
    }

    #[test]
    fn test_class_names_fills_gaps() {
        let mut table = LabelTable::new();
        table.insert("L_a", Label { class_id: 1, name: "nodule".into() });
        table.insert("L_b", Label { class_id: 3, name: "mass".into() });

        let names = table.class_names();
        assert_eq!(names, vec!["unclassified", "nodule", "unclassified", "mass"]);
    }

    #[test]
    fn test_class_names_skips_oversized_class_id() {
        let mut table = LabelTable::new();
        table.insert("L_a", Label { class_id: 1, name: "nodule".into() });
        table.insert("L_bad", Label { class_id: u32::MAX, name: "bogus".into() });

        // No multi-gigabyte allocation; the corrupt id simply has no slot.
        let names = table.class_names();
        assert_eq!(names, vec!["unclassified", "nodule"]);
        assert!(class_name(&names, u32::MAX).is_err());
    }

    #[test]
    fn test_class_name_out_of_range_is_error() {
        let names = names(&["unclassified", "nodule"]);
        let err = class_name(&names, 2).unwrap_err();
        assert!(matches!(
            err,
            Error::ClassIdOutOfRange { class_id: 2, known: 2 }
        ));
    }
}
