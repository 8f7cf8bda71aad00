pub mod band;
pub mod config;
pub mod report;
pub mod scale;
pub mod scorecard;
pub mod scoring;
