pub mod analytics;
pub mod content;
pub mod fields;
pub mod input;
