// Domain layer - comparison and chart models
pub mod chart;
pub mod rag;
pub mod report;
