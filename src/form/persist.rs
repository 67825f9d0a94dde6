use super::value_tree::{ValueOrigin, ValueTree};
use super::visibility::{visible_fields, visible_stages};
use crate::schema::{identity_field_path, SchemaModel, BASIC_TAB, DESCRIPTION_FIELD, NAME_FIELD};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("persisted configuration must be a JSON object")]
    NotAnObject,
    #[error("persisted configuration is missing identity field `{field}`")]
    MissingIdentity { field: &'static str },
    #[error("identity field `{field}` must be a string")]
    IdentityNotString { field: &'static str },
    #[error("config section `{section}` must be an object")]
    SectionNotObject { section: String },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PersistedConfig {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub config: Map<String, Value>,
}

impl PersistedConfig {
    pub fn from_json(raw: &Value) -> Result<Self, PersistError> {
        let object = raw.as_object().ok_or(PersistError::NotAnObject)?;
        let name = identity_field(object, NAME_FIELD)?;
        let description = identity_field(object, DESCRIPTION_FIELD)?;
        let config = match object.get("config") {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(map)) => map.clone(),
            Some(_) => {
                return Err(PersistError::SectionNotObject {
                    section: "config".to_string(),
                })
            }
        };
        Ok(Self {
            name,
            description,
            config,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert(NAME_FIELD.to_string(), Value::String(self.name.clone()));
        object.insert(
            DESCRIPTION_FIELD.to_string(),
            Value::String(self.description.clone()),
        );
        object.insert("config".to_string(), Value::Object(self.config.clone()));
        Value::Object(object)
    }
}

fn identity_field(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<String, PersistError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(PersistError::MissingIdentity { field }),
        Some(Value::String(raw)) => Ok(raw.clone()),
        Some(_) => Err(PersistError::IdentityNotString { field }),
    }
}

// Emits only explicitly-held values of currently visible fields; stages and
// tabs that end up empty are omitted. Identity travels at the top level, the
// way the backend stores it.
pub fn serialize(schema: &SchemaModel, tree: &ValueTree) -> PersistedConfig {
    let mut config = Map::new();
    for tab in schema.tabs() {
        if tab.name.as_str() == BASIC_TAB {
            continue;
        }
        let mut tab_object = Map::new();
        for stage in visible_stages(tab, tree) {
            let mut stage_object = Map::new();
            for field in visible_fields(stage, tree) {
                if let Some(entry) = tree.entry(&field.path) {
                    if entry.origin == ValueOrigin::Explicit {
                        stage_object
                            .insert(field.name.as_str().to_string(), entry.value.clone());
                    }
                }
            }
            if !stage_object.is_empty() {
                tab_object.insert(stage.name.as_str().to_string(), Value::Object(stage_object));
            }
        }
        if !tab_object.is_empty() {
            config.insert(tab.name.as_str().to_string(), Value::Object(tab_object));
        }
    }
    PersistedConfig {
        name: identity_value(tree, NAME_FIELD),
        description: identity_value(tree, DESCRIPTION_FIELD),
        config,
    }
}

pub fn hydrate(schema: &SchemaModel, persisted: &PersistedConfig) -> ValueTree {
    let mut tree = ValueTree::new();
    tree.insert(
        identity_field_path(NAME_FIELD),
        Value::String(persisted.name.clone()),
        ValueOrigin::Explicit,
    );
    tree.insert(
        identity_field_path(DESCRIPTION_FIELD),
        Value::String(persisted.description.clone()),
        ValueOrigin::Explicit,
    );
    for tab in schema.tabs() {
        if tab.name.as_str() == BASIC_TAB {
            continue;
        }
        let tab_section = persisted
            .config
            .get(tab.name.as_str())
            .and_then(Value::as_object);
        for stage in &tab.stages {
            let stage_section = tab_section
                .and_then(|section| section.get(stage.name.as_str()))
                .and_then(Value::as_object);
            for field in &stage.fields {
                match stage_section.and_then(|section| section.get(field.name.as_str())) {
                    Some(value) => {
                        tree.insert(field.path.clone(), value.clone(), ValueOrigin::Explicit)
                    }
                    None => {
                        if let Some(default) = &field.default {
                            tree.insert(field.path.clone(), default.clone(), ValueOrigin::Default);
                        }
                    }
                }
            }
        }
    }
    tree
}

fn identity_value(tree: &ValueTree, field: &str) -> String {
    tree.get(&identity_field_path(field))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_requires_string_identity_fields() {
        let err = PersistedConfig::from_json(&json!({"description": "helper"}))
            .expect_err("missing name");
        assert!(matches!(
            err,
            PersistError::MissingIdentity { field: "name" }
        ));

        let err = PersistedConfig::from_json(&json!({"name": 7, "description": "helper"}))
            .expect_err("non-string name");
        assert!(matches!(
            err,
            PersistError::IdentityNotString { field: "name" }
        ));

        let err = PersistedConfig::from_json(&json!({"name": "bot", "description": null}))
            .expect_err("null description");
        assert!(matches!(
            err,
            PersistError::MissingIdentity {
                field: "description"
            }
        ));

        let err = PersistedConfig::from_json(&json!("just a string")).expect_err("non-object");
        assert!(matches!(err, PersistError::NotAnObject));
    }

    #[test]
    fn from_json_tolerates_missing_config_and_rejects_non_object_config() {
        let parsed =
            PersistedConfig::from_json(&json!({"name": "bot", "description": "helper"}))
                .expect("parse without config");
        assert!(parsed.config.is_empty());

        let err = PersistedConfig::from_json(
            &json!({"name": "bot", "description": "helper", "config": [1, 2]}),
        )
        .expect_err("array config");
        assert!(matches!(err, PersistError::SectionNotObject { .. }));
    }

    #[test]
    fn to_json_round_trips_through_from_json() {
        let persisted = PersistedConfig {
            name: "support-bot".to_string(),
            description: "answers tickets".to_string(),
            config: json!({"ai": {"runner": {"runner": "local-agent"}}})
                .as_object()
                .expect("object")
                .clone(),
        };
        let parsed = PersistedConfig::from_json(&persisted.to_json()).expect("parse");
        assert_eq!(parsed, persisted);
    }
}
