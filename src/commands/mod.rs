//! Command implementations. Each command returns a summary for the CLI
//! layer to print; nothing in here writes to the console.

pub mod init;
pub mod update;
