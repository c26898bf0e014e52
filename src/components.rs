pub mod config;
pub mod error;
pub mod fault;
pub mod report;
