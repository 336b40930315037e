// Application layer - use cases and dashboard orchestration
pub mod chart_backend;
pub mod chart_lifecycle;
pub mod dashboard_service;
pub mod dataset_builder;
pub mod playback;
pub mod rag_series;
pub mod selection;
