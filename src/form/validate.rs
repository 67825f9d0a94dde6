use super::value_tree::ValueTree;
use super::visibility::{visible_fields, visible_stages};
use crate::schema::{FieldKind, FieldPath, FieldSpec, SchemaModel, TabSpec, BASIC_TAB};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    errors: BTreeMap<FieldPath, String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn error(&self, path: &FieldPath) -> Option<&str> {
        self.errors.get(path).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &str)> {
        self.errors
            .iter()
            .map(|(path, message)| (path, message.as_str()))
    }

    fn insert(&mut self, path: FieldPath, message: String) {
        self.errors.insert(path, message);
    }

    fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }
}

pub fn value_is_empty(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::String(raw) => raw.trim().is_empty(),
        serde_json::Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

pub fn validate_tab(tab: &TabSpec, tree: &ValueTree) -> ValidationResult {
    let mut result = ValidationResult::default();
    for stage in visible_stages(tab, tree) {
        for field in visible_fields(stage, tree) {
            match tree.get(&field.path) {
                None => {
                    if field.required {
                        result.insert(field.path.clone(), "must not be empty".to_string());
                    }
                }
                Some(value) if value_is_empty(value) => {
                    if field.required {
                        result.insert(field.path.clone(), "must not be empty".to_string());
                    }
                }
                Some(value) => {
                    if !field.kind.accepts(value) {
                        result.insert(field.path.clone(), type_message(field));
                    }
                }
            }
        }
    }
    result
}

// Create mode validates identity only: the entity is created server-side
// first and its behavior configured in a second pass.
pub fn validate_submission(
    schema: &SchemaModel,
    tree: &ValueTree,
    mode: FormMode,
) -> ValidationResult {
    let mut result = ValidationResult::default();
    for tab in schema.tabs() {
        if mode == FormMode::Create && tab.name.as_str() != BASIC_TAB {
            continue;
        }
        result.merge(validate_tab(tab, tree));
    }
    result
}

fn type_message(field: &FieldSpec) -> String {
    match &field.kind {
        FieldKind::String => "must be a string".to_string(),
        FieldKind::Number => "must be a number".to_string(),
        FieldKind::Boolean => "must be a boolean".to_string(),
        FieldKind::Select(options) => {
            let values: Vec<&str> = options.iter().map(|option| option.value.as_str()).collect();
            format!("must be one of: {}", values.join(", "))
        }
        FieldKind::StringSet => "must be a list of strings".to_string(),
        FieldKind::Object => "must be an object".to_string(),
    }
}
