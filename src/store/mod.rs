pub mod endpoint;
pub mod sheets;
pub mod tasks;
