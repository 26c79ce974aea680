use serde::{Deserialize, Serialize};

/// A named partition of the task collection (one spreadsheet tab).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
}
