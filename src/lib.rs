pub mod error;
pub mod infra;
pub mod output;
pub mod parser;
pub mod planner;
pub mod services;
pub mod simulator;
pub mod stats;
