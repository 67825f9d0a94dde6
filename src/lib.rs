pub mod form;
pub mod schema;
pub mod shared;
pub mod templates;
