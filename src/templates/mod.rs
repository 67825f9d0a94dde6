pub mod bot_metadata;
pub mod pipeline_metadata;

pub use bot_metadata::{bot_schema, bot_tab_metadata, ADAPTER_TAB_METADATA};
pub use pipeline_metadata::{
    pipeline_schema, pipeline_tab_metadata, AI_TAB_METADATA, OUTPUT_TAB_METADATA,
    SAFETY_TAB_METADATA, TRIGGER_TAB_METADATA,
};
