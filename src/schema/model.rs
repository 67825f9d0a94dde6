use super::typed_fields::{FieldName, FieldPath, StageName, TabName};
use serde::{Deserialize, Serialize};

pub const BASIC_TAB: &str = "basic";
pub const NAME_FIELD: &str = "name";
pub const DESCRIPTION_FIELD: &str = "description";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocalizedText {
    #[serde(rename = "en_US")]
    pub en_us: String,
    #[serde(rename = "zh_Hans", default, skip_serializing_if = "Option::is_none")]
    pub zh_hans: Option<String>,
}

impl LocalizedText {
    pub fn plain(en_us: &str) -> Self {
        Self {
            en_us: en_us.to_string(),
            zh_hans: None,
        }
    }

    pub fn bilingual(en_us: &str, zh_hans: &str) -> Self {
        Self {
            en_us: en_us.to_string(),
            zh_hans: Some(zh_hans.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    Equals,
    In,
    NotEquals,
}

impl Comparator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::In => "in",
            Self::NotEquals => "not_equals",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim() {
            "equals" => Ok(Self::Equals),
            "in" => Ok(Self::In),
            "not_equals" => Ok(Self::NotEquals),
            _ => Err("comparator must be one of: equals, in, not_equals".to_string()),
        }
    }
}

impl std::fmt::Display for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisibleWhen {
    pub depends_on: FieldPath,
    pub comparator: Comparator,
    pub operand: serde_json::Value,
}

impl VisibleWhen {
    // An unset gate never reveals its dependents, regardless of comparator.
    pub fn matches(&self, gate_value: Option<&serde_json::Value>) -> bool {
        let Some(value) = gate_value else {
            return false;
        };
        match self.comparator {
            Comparator::Equals => value == &self.operand,
            Comparator::NotEquals => value != &self.operand,
            Comparator::In => self
                .operand
                .as_array()
                .is_some_and(|options| options.contains(value)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: LocalizedText,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Select(Vec<SelectOption>),
    StringSet,
    Object,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Select(_) => "select",
            Self::StringSet => "tags",
            Self::Object => "object",
        }
    }

    pub fn accepts(&self, value: &serde_json::Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Select(options) => value
                .as_str()
                .is_some_and(|raw| options.iter().any(|option| option.value == raw)),
            Self::StringSet => value
                .as_array()
                .is_some_and(|items| items.iter().all(|item| item.is_string())),
            Self::Object => value.is_object(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub path: FieldPath,
    pub name: FieldName,
    pub label: LocalizedText,
    pub kind: FieldKind,
    pub required: bool,
    pub default: Option<serde_json::Value>,
    pub visible_when: Option<VisibleWhen>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StageSpec {
    pub name: StageName,
    pub label: LocalizedText,
    pub description: Option<LocalizedText>,
    pub visible_when: Option<VisibleWhen>,
    pub fields: Vec<FieldSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabSpec {
    pub name: TabName,
    pub label: LocalizedText,
    pub stages: Vec<StageSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchemaModel {
    tabs: Vec<TabSpec>,
}

impl SchemaModel {
    pub(crate) fn new(tabs: Vec<TabSpec>) -> Self {
        Self { tabs }
    }

    pub fn tabs(&self) -> &[TabSpec] {
        &self.tabs
    }

    pub fn tab(&self, name: &str) -> Option<&TabSpec> {
        self.tabs.iter().find(|tab| tab.name.as_str() == name)
    }

    pub fn stage(&self, tab: &str, stage: &str) -> Option<&StageSpec> {
        self.tab(tab)?
            .stages
            .iter()
            .find(|candidate| candidate.name.as_str() == stage)
    }

    pub fn field(&self, path: &FieldPath) -> Option<&FieldSpec> {
        self.tabs
            .iter()
            .flat_map(|tab| tab.stages.iter())
            .flat_map(|stage| stage.fields.iter())
            .find(|field| &field.path == path)
    }
}

pub fn identity_field_path(field: &str) -> FieldPath {
    FieldPath::from_segments([BASIC_TAB, field]).expect("identity field path is valid")
}
