//! CLI command implementations

pub mod evaluate;
pub mod json_output;
pub mod profiles;
pub mod scene;
pub mod validate;

mod reporting;
