use super::visibility::{field_is_visible, stage_is_visible};
use crate::schema::{FieldPath, SchemaModel};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOrigin {
    Explicit,
    Default,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    pub value: serde_json::Value,
    pub origin: ValueOrigin,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueTree {
    entries: BTreeMap<FieldPath, FieldValue>,
}

impl ValueTree {
    pub fn new() -> Self {
        Self::default()
    }

    // The mutation engine: always returns a fresh tree, never touches `self`.
    pub fn with_value(&self, path: FieldPath, value: serde_json::Value) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(
            path,
            FieldValue {
                value,
                origin: ValueOrigin::Explicit,
            },
        );
        Self { entries }
    }

    pub(crate) fn insert(
        &mut self,
        path: FieldPath,
        value: serde_json::Value,
        origin: ValueOrigin,
    ) {
        self.entries.insert(path, FieldValue { value, origin });
    }

    pub fn get(&self, path: &FieldPath) -> Option<&serde_json::Value> {
        self.entries.get(path).map(|entry| &entry.value)
    }

    pub fn entry(&self, path: &FieldPath) -> Option<&FieldValue> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &FieldPath) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &FieldValue)> {
        self.entries.iter()
    }

    // Drops entries whose schema field is currently invisible. Entries that do
    // not resolve to a schema field are kept: they are unknown, not hidden.
    pub fn purge_hidden(&self, schema: &SchemaModel) -> Self {
        let mut hidden = BTreeSet::new();
        for tab in schema.tabs() {
            for stage in &tab.stages {
                let stage_visible = stage_is_visible(stage, self);
                for field in &stage.fields {
                    if !stage_visible || !field_is_visible(field, self) {
                        hidden.insert(field.path.clone());
                    }
                }
            }
        }
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(path, _)| !hidden.contains(*path))
                .map(|(path, entry)| (path.clone(), entry.clone()))
                .collect(),
        }
    }
}
