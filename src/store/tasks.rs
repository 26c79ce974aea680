use log::debug;

use crate::error::TaskdeckError;
use crate::models::{Task, TaskFields, TaskId};
use crate::store::endpoint::Endpoint;

/// Fetch the full task collection, scoped to `sheet` when one is selected.
/// A null payload (blank spreadsheet) is an empty collection.
pub fn list_tasks(endpoint: &Endpoint, sheet: Option<&str>) -> Result<Vec<Task>, TaskdeckError> {
    let params: Vec<(&str, &str)> = match sheet {
        Some(name) => vec![("sheet", name)],
        None => Vec::new(),
    };
    let payload = endpoint.get_json("getTasks", &params)?;
    if payload.is_null() {
        return Ok(Vec::new());
    }
    let tasks: Vec<Task> = serde_json::from_value(payload)?;
    debug!("loaded {} tasks", tasks.len());
    Ok(tasks)
}

pub fn create_task(
    endpoint: &Endpoint,
    sheet: Option<&str>,
    fields: &TaskFields,
) -> Result<(), TaskdeckError> {
    let deadline = fields.deadline.as_deref().unwrap_or("");
    let mut form = vec![
        ("title", fields.title.as_str()),
        ("description", fields.description.as_str()),
        ("priority", fields.priority.as_str()),
        ("deadline", deadline),
        ("created", fields.created.as_str()),
    ];
    if let Some(name) = sheet {
        form.push(("sheet", name));
    }
    endpoint.post_form(&form)
}

pub fn update_task(
    endpoint: &Endpoint,
    sheet: Option<&str>,
    id: &TaskId,
    fields: &TaskFields,
) -> Result<(), TaskdeckError> {
    let deadline = fields.deadline.as_deref().unwrap_or("");
    let mut form = vec![
        ("action", "update"),
        ("id", id.as_str()),
        ("title", fields.title.as_str()),
        ("description", fields.description.as_str()),
        ("priority", fields.priority.as_str()),
        ("deadline", deadline),
        ("created", fields.created.as_str()),
    ];
    if let Some(name) = sheet {
        form.push(("sheet", name));
    }
    endpoint.post_form(&form)
}

pub fn delete_task(
    endpoint: &Endpoint,
    sheet: Option<&str>,
    id: &TaskId,
) -> Result<(), TaskdeckError> {
    let mut form = vec![("action", "delete"), ("id", id.as_str())];
    if let Some(name) = sheet {
        form.push(("sheet", name));
    }
    endpoint.post_form(&form)
}
