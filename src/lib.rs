pub mod config;
pub mod default_colors;
pub mod errors;
pub mod googlebooks;
pub mod googlebooks_schema;
pub mod repository;
pub mod traits;
pub mod types;
pub mod viewmodel;
