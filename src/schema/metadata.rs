use super::model::{Comparator, LocalizedText};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawTabMetadata {
    pub name: String,
    pub label: LocalizedText,
    #[serde(default)]
    pub stages: Vec<RawStageMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawStageMetadata {
    pub name: String,
    pub label: LocalizedText,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    #[serde(default)]
    pub visible_when: Option<RawVisibleWhen>,
    #[serde(default)]
    pub config: Vec<RawConfigItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigItem {
    pub name: String,
    pub label: LocalizedText,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default: Option<serde_json::Value>,
    #[serde(default)]
    pub options: Vec<RawSelectOption>,
    #[serde(default)]
    pub visible_when: Option<RawVisibleWhen>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSelectOption {
    pub label: LocalizedText,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawVisibleWhen {
    pub field: String,
    pub operator: Comparator,
    pub value: serde_json::Value,
}
