//! CLI command implementations.

pub mod init;
pub mod run;
pub mod export;
pub mod show;
