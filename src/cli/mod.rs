pub mod commands;
pub mod init;
pub mod list;
pub mod sheet;
pub mod task;

pub use commands::*;
