pub mod api;
pub mod batch;
pub mod config;
pub mod error;
pub mod metrics;
pub mod planner;
pub mod report;
pub mod units;
pub mod util;
// cmd and reports are binary modules (declared in main.rs); they only render.
