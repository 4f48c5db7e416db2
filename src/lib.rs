pub mod config;
pub mod download;
pub mod error;
pub mod formula;
pub mod logging;
pub mod platform;
pub mod release;
pub mod report;
pub mod style;
pub mod update;
