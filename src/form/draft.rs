use super::persist::{hydrate, serialize, PersistedConfig};
use super::validate::{validate_submission, validate_tab, FormMode, ValidationResult};
use super::value_tree::{ValueOrigin, ValueTree};
use super::visibility::{visible_fields, visible_stages};
use crate::schema::{
    identity_field_path, FieldPath, FieldSpec, SchemaModel, StageSpec, DESCRIPTION_FIELD,
    NAME_FIELD,
};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    // Values of hidden stages survive for the session so that toggling a
    // selector back restores prior input.
    #[default]
    Retain,
    PurgeOnSubmit,
}

#[derive(Debug, Clone)]
pub struct FormDraft {
    schema: SchemaModel,
    values: ValueTree,
    mode: FormMode,
    stale_policy: StalePolicy,
}

impl FormDraft {
    pub fn open_create(schema: SchemaModel) -> Self {
        let mut values = ValueTree::new();
        for tab in schema.tabs() {
            for stage in &tab.stages {
                for field in &stage.fields {
                    if let Some(default) = &field.default {
                        values.insert(field.path.clone(), default.clone(), ValueOrigin::Default);
                    }
                }
            }
        }
        // Identity starts as explicit empty strings: the create form always
        // submits them, and validation is what blocks blank names.
        values.insert(
            identity_field_path(NAME_FIELD),
            Value::String(String::new()),
            ValueOrigin::Explicit,
        );
        values.insert(
            identity_field_path(DESCRIPTION_FIELD),
            Value::String(String::new()),
            ValueOrigin::Explicit,
        );
        Self {
            schema,
            values,
            mode: FormMode::Create,
            stale_policy: StalePolicy::default(),
        }
    }

    pub fn open_edit(schema: SchemaModel, persisted: &PersistedConfig) -> Self {
        let values = hydrate(&schema, persisted);
        Self {
            schema,
            values,
            mode: FormMode::Edit,
            stale_policy: StalePolicy::default(),
        }
    }

    pub fn with_stale_policy(mut self, stale_policy: StalePolicy) -> Self {
        self.stale_policy = stale_policy;
        self
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn stale_policy(&self) -> StalePolicy {
        self.stale_policy
    }

    pub fn schema(&self) -> &SchemaModel {
        &self.schema
    }

    pub fn values(&self) -> &ValueTree {
        &self.values
    }

    pub fn set_value(&mut self, path: FieldPath, value: Value) {
        self.values = self.values.with_value(path, value);
    }

    pub fn get_value(&self, path: &FieldPath) -> Option<&Value> {
        self.values.get(path)
    }

    pub fn visible_stages(&self, tab: &str) -> Vec<&StageSpec> {
        self.schema
            .tab(tab)
            .map(|tab| visible_stages(tab, &self.values))
            .unwrap_or_default()
    }

    pub fn visible_fields(&self, tab: &str, stage: &str) -> Vec<&FieldSpec> {
        self.schema
            .stage(tab, stage)
            .map(|stage| visible_fields(stage, &self.values))
            .unwrap_or_default()
    }

    pub fn validate(&self) -> ValidationResult {
        validate_submission(&self.schema, &self.values, self.mode)
    }

    pub fn validate_tab(&self, tab: &str) -> ValidationResult {
        self.schema
            .tab(tab)
            .map(|tab| validate_tab(tab, &self.values))
            .unwrap_or_default()
    }

    pub fn serialize(&self) -> PersistedConfig {
        serialize(&self.schema, &self.values)
    }

    pub fn submit(&mut self) -> Result<PersistedConfig, ValidationResult> {
        let result = self.validate();
        if !result.is_valid() {
            return Err(result);
        }
        if self.stale_policy == StalePolicy::PurgeOnSubmit {
            self.values = self.values.purge_hidden(&self.schema);
        }
        Ok(self.serialize())
    }
}
