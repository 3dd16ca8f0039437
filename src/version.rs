// Compile-time constants from Cargo.toml and build.rs
pub const VERSION: &str = env!("AG_N8N_SKILLS_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
