pub mod app;
pub mod chart;
pub mod config;
pub mod fetch;
pub mod process;
pub mod report;
pub mod series;
