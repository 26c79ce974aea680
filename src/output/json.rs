use serde_json::{json, Value};

use crate::error::TaskdeckError;
use crate::models::{Sheet, Task};
use crate::view::TaskListViewModel;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &TaskdeckError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn task_json(t: &Task) -> Value {
    json!({
        "id": t.id,
        "title": t.title,
        "description": t.description,
        "priority": t.priority.as_str(),
        "deadline": t.deadline,
        "created": t.created
    })
}

pub fn page_json(vm: &TaskListViewModel) -> Value {
    let tasks: Vec<_> = vm.current_page_items().iter().map(task_json).collect();
    json!({
        "tasks": tasks,
        "page": vm.current_page(),
        "page_count": vm.page_count(),
        "page_size": vm.page_size(),
        "matched": vm.filtered_len()
    })
}

pub fn sheet_json(s: &Sheet) -> Value {
    json!({ "name": s.name })
}
