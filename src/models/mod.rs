pub mod sheet;
pub mod task;

pub use sheet::*;
pub use task::*;
