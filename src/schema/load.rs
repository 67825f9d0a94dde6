use super::error::SchemaError;
use super::metadata::{RawConfigItem, RawStageMetadata, RawTabMetadata, RawVisibleWhen};
use super::model::{
    Comparator, FieldKind, FieldSpec, LocalizedText, SchemaModel, SelectOption, StageSpec, TabSpec,
    VisibleWhen, BASIC_TAB, DESCRIPTION_FIELD, NAME_FIELD,
};
use super::typed_fields::{FieldName, FieldPath, StageName, TabName};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub fn load_tab_metadata(path: &Path) -> Result<RawTabMetadata, SchemaError> {
    let raw = fs::read_to_string(path).map_err(|source| SchemaError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_yaml::from_str(&raw).map_err(|source| SchemaError::Parse {
        path: path.display().to_string(),
        source,
    })
}

pub fn parse_tab_metadata(raw: &str) -> Result<RawTabMetadata, SchemaError> {
    serde_yaml::from_str(raw).map_err(|source| SchemaError::Decode { source })
}

pub fn load_schema(raw_tabs: &[RawTabMetadata]) -> Result<SchemaModel, SchemaError> {
    let mut tabs = vec![basic_tab()];
    let mut seen_tabs = BTreeSet::from([BASIC_TAB.to_string()]);
    for raw_tab in raw_tabs {
        if raw_tab.name == BASIC_TAB {
            return Err(SchemaError::ReservedBasicTab);
        }
        let tab_name = TabName::parse(&raw_tab.name).map_err(|reason| SchemaError::InvalidName {
            kind: "tab name",
            value: raw_tab.name.clone(),
            reason,
        })?;
        if !seen_tabs.insert(tab_name.as_str().to_string()) {
            return Err(SchemaError::DuplicateTab {
                tab: raw_tab.name.clone(),
            });
        }
        tabs.push(load_tab(tab_name, raw_tab)?);
    }
    Ok(SchemaModel::new(tabs))
}

fn load_tab(tab_name: TabName, raw_tab: &RawTabMetadata) -> Result<TabSpec, SchemaError> {
    // Every field path the tab will declare, so that a reference to a
    // later-declared field is reported as forward rather than unknown.
    let mut all_paths = BTreeSet::new();
    for raw_stage in &raw_tab.stages {
        for item in &raw_stage.config {
            all_paths.insert(format!(
                "{}.{}.{}",
                tab_name.as_str(),
                raw_stage.name,
                item.name
            ));
        }
    }

    let mut declared: BTreeSet<String> = BTreeSet::new();
    let mut seen_stages = BTreeSet::new();
    let mut stages = Vec::new();
    for raw_stage in &raw_tab.stages {
        let stage_name =
            StageName::parse(&raw_stage.name).map_err(|reason| SchemaError::InvalidName {
                kind: "stage name",
                value: raw_stage.name.clone(),
                reason,
            })?;
        if !seen_stages.insert(stage_name.as_str().to_string()) {
            return Err(SchemaError::DuplicateStage {
                tab: tab_name.as_str().to_string(),
                stage: raw_stage.name.clone(),
            });
        }
        let stage_subject = format!("{}.{}", tab_name.as_str(), stage_name.as_str());
        let visible_when = raw_stage
            .visible_when
            .as_ref()
            .map(|rule| resolve_visible_when(&tab_name, &stage_subject, rule, &declared, &all_paths))
            .transpose()?;
        let fields = load_stage_fields(&tab_name, &stage_name, raw_stage, &mut declared, &all_paths)?;
        stages.push(StageSpec {
            name: stage_name,
            label: raw_stage.label.clone(),
            description: raw_stage.description.clone(),
            visible_when,
            fields,
        });
    }
    Ok(TabSpec {
        name: tab_name,
        label: raw_tab.label.clone(),
        stages,
    })
}

fn load_stage_fields(
    tab_name: &TabName,
    stage_name: &StageName,
    raw_stage: &RawStageMetadata,
    declared: &mut BTreeSet<String>,
    all_paths: &BTreeSet<String>,
) -> Result<Vec<FieldSpec>, SchemaError> {
    let mut seen_fields = BTreeSet::new();
    let mut fields = Vec::new();
    for item in &raw_stage.config {
        let field_name = FieldName::parse(&item.name).map_err(|reason| SchemaError::InvalidName {
            kind: "field name",
            value: item.name.clone(),
            reason,
        })?;
        if !seen_fields.insert(field_name.as_str().to_string()) {
            return Err(SchemaError::DuplicateField {
                tab: tab_name.as_str().to_string(),
                stage: stage_name.as_str().to_string(),
                field: item.name.clone(),
            });
        }
        let path = FieldPath::for_field(tab_name, stage_name, &field_name);
        let subject = path.to_dotted();
        let visible_when = item
            .visible_when
            .as_ref()
            .map(|rule| resolve_visible_when(tab_name, &subject, rule, declared, all_paths))
            .transpose()?;
        let kind = resolve_field_kind(&subject, item)?;
        if let Some(default) = &item.default {
            if !kind.accepts(default) {
                return Err(SchemaError::DefaultTypeMismatch {
                    path: subject,
                    kind: kind.as_str(),
                });
            }
        }
        fields.push(FieldSpec {
            path,
            name: field_name,
            label: item.label.clone(),
            kind,
            required: item.required,
            default: item.default.clone(),
            visible_when,
        });
        declared.insert(subject);
    }
    Ok(fields)
}

fn resolve_field_kind(subject: &str, item: &RawConfigItem) -> Result<FieldKind, SchemaError> {
    match item.item_type.as_str() {
        "string" => Ok(FieldKind::String),
        "number" => Ok(FieldKind::Number),
        "boolean" => Ok(FieldKind::Boolean),
        "select" => {
            if item.options.is_empty() {
                return Err(SchemaError::EmptySelectOptions {
                    path: subject.to_string(),
                });
            }
            Ok(FieldKind::Select(
                item.options
                    .iter()
                    .map(|option| SelectOption {
                        value: option.value.clone(),
                        label: option.label.clone(),
                    })
                    .collect(),
            ))
        }
        "tags" => Ok(FieldKind::StringSet),
        "object" => Ok(FieldKind::Object),
        other => Err(SchemaError::UnsupportedFieldType {
            path: subject.to_string(),
            item_type: other.to_string(),
        }),
    }
}

fn resolve_visible_when(
    tab: &TabName,
    subject: &str,
    rule: &RawVisibleWhen,
    declared: &BTreeSet<String>,
    all_paths: &BTreeSet<String>,
) -> Result<VisibleWhen, SchemaError> {
    let segments: Vec<&str> = rule.field.split('.').map(str::trim).collect();
    let full = match segments.as_slice() {
        [stage, field] => format!("{}.{}.{}", tab.as_str(), stage, field),
        [ref_tab, stage, field] => {
            if *ref_tab != tab.as_str() {
                return Err(SchemaError::CrossTabDependency {
                    tab: tab.as_str().to_string(),
                    subject: subject.to_string(),
                    dependency: rule.field.clone(),
                });
            }
            format!("{}.{}.{}", ref_tab, stage, field)
        }
        _ => {
            return Err(SchemaError::UnknownDependency {
                subject: subject.to_string(),
                dependency: rule.field.clone(),
            });
        }
    };
    if !declared.contains(&full) {
        if all_paths.contains(&full) {
            return Err(SchemaError::ForwardDependency {
                tab: tab.as_str().to_string(),
                subject: subject.to_string(),
                dependency: full,
            });
        }
        return Err(SchemaError::UnknownDependency {
            subject: subject.to_string(),
            dependency: rule.field.clone(),
        });
    }
    if rule.operator == Comparator::In && !rule.value.is_array() {
        return Err(SchemaError::InOperandNotArray {
            subject: subject.to_string(),
        });
    }
    let depends_on = FieldPath::parse(&full).map_err(|_| SchemaError::UnknownDependency {
        subject: subject.to_string(),
        dependency: rule.field.clone(),
    })?;
    Ok(VisibleWhen {
        depends_on,
        comparator: rule.operator,
        operand: rule.value.clone(),
    })
}

fn basic_tab() -> TabSpec {
    let identity_field = |name: &str, label: LocalizedText| FieldSpec {
        path: FieldPath::from_segments([BASIC_TAB, name]).expect("identity field path is valid"),
        name: FieldName::parse(name).expect("identity field name is valid"),
        label,
        kind: FieldKind::String,
        required: true,
        default: Some(serde_json::Value::String(String::new())),
        visible_when: None,
    };
    TabSpec {
        name: TabName::parse(BASIC_TAB).expect("basic tab name is valid"),
        label: LocalizedText::bilingual("Basic", "基础信息"),
        stages: vec![StageSpec {
            name: StageName::parse("identity").expect("identity stage name is valid"),
            label: LocalizedText::bilingual("Identity", "基础信息"),
            description: None,
            visible_when: None,
            fields: vec![
                identity_field(NAME_FIELD, LocalizedText::bilingual("Name", "名称")),
                identity_field(
                    DESCRIPTION_FIELD,
                    LocalizedText::bilingual("Description", "描述"),
                ),
            ],
        }],
    }
}
