//! SeqGen library — application logic for the sequence generator CLI.

pub mod app;
pub mod config;
pub mod errors;
