// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod headless_backend;
pub mod report_store;
