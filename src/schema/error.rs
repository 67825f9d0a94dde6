#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("failed to read metadata file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid yaml in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid metadata: {source}")]
    Decode {
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid {kind} `{value}`: {reason}")]
    InvalidName {
        kind: &'static str,
        value: String,
        reason: String,
    },
    #[error("tab `{tab}` is declared more than once")]
    DuplicateTab { tab: String },
    #[error("tab name `basic` is reserved for identity fields")]
    ReservedBasicTab,
    #[error("stage `{stage}` is declared more than once in tab `{tab}`")]
    DuplicateStage { tab: String, stage: String },
    #[error("field `{field}` is declared more than once in stage `{tab}.{stage}`")]
    DuplicateField {
        tab: String,
        stage: String,
        field: String,
    },
    #[error("unsupported field type `{item_type}` for `{path}`")]
    UnsupportedFieldType { path: String, item_type: String },
    #[error("select field `{path}` must declare at least one option")]
    EmptySelectOptions { path: String },
    #[error("default for `{path}` does not match declared type `{kind}`")]
    DefaultTypeMismatch { path: String, kind: &'static str },
    #[error("visibility rule on `{subject}` references unknown field `{dependency}`")]
    UnknownDependency { subject: String, dependency: String },
    #[error("visibility rule on `{subject}` must reference a field declared earlier in tab `{tab}`; `{dependency}` is declared later")]
    ForwardDependency {
        tab: String,
        subject: String,
        dependency: String,
    },
    #[error("visibility rule on `{subject}` must reference a field inside tab `{tab}`; `{dependency}` resolves outside it")]
    CrossTabDependency {
        tab: String,
        subject: String,
        dependency: String,
    },
    #[error("visibility rule on `{subject}` uses `in` with a non-array operand")]
    InOperandNotArray { subject: String },
}
