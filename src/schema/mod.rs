pub mod error;
pub mod load;
pub mod metadata;
pub mod model;
pub mod typed_fields;

pub use error::SchemaError;
pub use load::{load_schema, load_tab_metadata, parse_tab_metadata};
pub use metadata::{
    RawConfigItem, RawSelectOption, RawStageMetadata, RawTabMetadata, RawVisibleWhen,
};
pub use model::{
    identity_field_path, Comparator, FieldKind, FieldSpec, LocalizedText, SchemaModel,
    SelectOption, StageSpec, TabSpec, VisibleWhen, BASIC_TAB, DESCRIPTION_FIELD, NAME_FIELD,
};
pub use typed_fields::{FieldName, FieldPath, StageName, TabName};
