//! ipclass library — application logic for the line classifier binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod input;
