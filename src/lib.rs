#![forbid(unsafe_code)]

pub mod banner;
pub mod bundle;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod install;
pub mod target;
pub mod utils;
pub mod version;
