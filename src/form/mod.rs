pub mod draft;
pub mod navigator;
pub mod persist;
pub mod validate;
pub mod value_tree;
pub mod visibility;

pub use draft::{FormDraft, StalePolicy};
pub use navigator::StageNavigator;
pub use persist::{hydrate, serialize, PersistError, PersistedConfig};
pub use validate::{validate_submission, validate_tab, value_is_empty, FormMode, ValidationResult};
pub use value_tree::{FieldValue, ValueOrigin, ValueTree};
pub use visibility::{
    field_is_visible, stage_is_visible, visible_fields, visible_stages,
};
