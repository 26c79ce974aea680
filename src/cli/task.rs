use std::io::{self, BufRead, Write};

use chrono::Local;
use serde_json::json;

use crate::config::{self, Config};
use crate::error::TaskdeckError;
use crate::models::{Priority, Task, TaskFields, TaskId};
use crate::output;
use crate::store::{endpoint::Endpoint, tasks};
use crate::view::TaskListViewModel;

const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct EditArgs<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub priority: Option<&'a str>,
    pub deadline: Option<&'a str>,
}

pub fn run_add(
    title: &str,
    description: &str,
    priority: &str,
    deadline: Option<&str>,
    json_output: bool,
    sheet_flag: Option<&str>,
) -> i32 {
    report(json_output, add_inner(title, description, priority, deadline, sheet_flag))
}

pub fn run_edit(id: &str, args: EditArgs, json_output: bool, sheet_flag: Option<&str>) -> i32 {
    report(json_output, edit_inner(id, args, sheet_flag))
}

pub fn run_delete(id: &str, yes: bool, json_output: bool, sheet_flag: Option<&str>) -> i32 {
    report(json_output, delete_inner(id, yes, json_output, sheet_flag))
}

pub fn run_show(id: &str, json_output: bool, sheet_flag: Option<&str>) -> i32 {
    let result = show_inner(id, sheet_flag);
    match result {
        Ok(task) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(json!({
                        "task": output::json::task_json(&task)
                    })))
                    .unwrap()
                );
            } else {
                output::text::print_task(&task);
            }
            0
        }
        Err(e) => print_error(&e, json_output),
    }
}

fn report(json_output: bool, result: Result<String, TaskdeckError>) -> i32 {
    match result {
        Ok(message) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(json!({
                        "message": message
                    })))
                    .unwrap()
                );
            } else {
                println!("{message}");
            }
            0
        }
        Err(e) => print_error(&e, json_output),
    }
}

fn print_error(e: &TaskdeckError, json_output: bool) -> i32 {
    if json_output {
        println!("{}", serde_json::to_string_pretty(&output::json::error(e)).unwrap());
    } else {
        eprintln!("Error: {}", e.message);
    }
    1
}

fn resolve_sheet(config: &Config, sheet_flag: Option<&str>) -> Option<String> {
    sheet_flag.map(str::to_string).or_else(|| config.sheet.clone())
}

/// Load the collection and resolve one task by id, TaskNotFound if absent.
fn load_and_find(
    endpoint: &Endpoint,
    sheet: Option<&str>,
    page_size: usize,
    id: &TaskId,
) -> Result<Task, TaskdeckError> {
    let mut vm = TaskListViewModel::new(page_size);
    let ticket = vm.begin_load();
    let loaded = tasks::list_tasks(endpoint, sheet)?;
    vm.complete_load(ticket, loaded);
    let task = vm.begin_edit(id)?.clone();
    Ok(task)
}

fn add_inner(
    title: &str,
    description: &str,
    priority: &str,
    deadline: Option<&str>,
    sheet_flag: Option<&str>,
) -> Result<String, TaskdeckError> {
    if title.trim().is_empty() {
        return Err(TaskdeckError::validation("Title must not be empty"));
    }
    let priority = Priority::from_str(priority)
        .ok_or_else(|| TaskdeckError::validation(format!("Unknown priority: {priority}")))?;

    let config = config::load()?;
    let sheet = resolve_sheet(&config, sheet_flag);
    let endpoint = Endpoint::from_config(&config);

    let fields = TaskFields {
        title: title.to_string(),
        description: description.to_string(),
        priority,
        deadline: deadline.map(str::to_string).filter(|d| !d.is_empty()),
        created: Local::now().format(CREATED_FORMAT).to_string(),
    };
    tasks::create_task(&endpoint, sheet.as_deref(), &fields)?;
    Ok(format!("Created task: {title}"))
}

fn edit_inner(id: &str, args: EditArgs, sheet_flag: Option<&str>) -> Result<String, TaskdeckError> {
    if args.title.is_none()
        && args.description.is_none()
        && args.priority.is_none()
        && args.deadline.is_none()
    {
        return Err(TaskdeckError::validation(
            "Nothing to change: pass at least one of --title/--description/--priority/--deadline",
        ));
    }
    if let Some(t) = args.title {
        if t.trim().is_empty() {
            return Err(TaskdeckError::validation("Title must not be empty"));
        }
    }
    let priority = args
        .priority
        .map(|p| {
            Priority::from_str(p)
                .ok_or_else(|| TaskdeckError::validation(format!("Unknown priority: {p}")))
        })
        .transpose()?;

    let config = config::load()?;
    let sheet = resolve_sheet(&config, sheet_flag);
    let endpoint = Endpoint::from_config(&config);

    let id = TaskId::from(id);
    let current = load_and_find(&endpoint, sheet.as_deref(), config.page_size, &id)?;

    // Unspecified fields keep their current value; `created` is never
    // touched by an update.
    let fields = TaskFields {
        title: args.title.map(str::to_string).unwrap_or(current.title),
        description: args
            .description
            .map(str::to_string)
            .unwrap_or(current.description),
        priority: priority.unwrap_or(current.priority),
        deadline: match args.deadline {
            Some("") => None,
            Some(d) => Some(d.to_string()),
            None => current.deadline,
        },
        created: current.created,
    };
    tasks::update_task(&endpoint, sheet.as_deref(), &id, &fields)?;
    Ok(format!("Updated task: {id}"))
}

fn delete_inner(
    id: &str,
    yes: bool,
    json_output: bool,
    sheet_flag: Option<&str>,
) -> Result<String, TaskdeckError> {
    let config = config::load()?;
    let sheet = resolve_sheet(&config, sheet_flag);
    let endpoint = Endpoint::from_config(&config);

    let id = TaskId::from(id);
    let task = load_and_find(&endpoint, sheet.as_deref(), config.page_size, &id)?;

    if !yes {
        if json_output {
            return Err(TaskdeckError::validation(
                "Deleting with --json requires --yes",
            ));
        }
        if !confirm(&format!("Delete task '{}'? [y/N] ", task.title))? {
            return Ok("Aborted.".to_string());
        }
    }

    tasks::delete_task(&endpoint, sheet.as_deref(), &id)?;
    Ok(format!("Deleted task: {id}"))
}

fn show_inner(id: &str, sheet_flag: Option<&str>) -> Result<Task, TaskdeckError> {
    let config = config::load()?;
    let sheet = resolve_sheet(&config, sheet_flag);
    let endpoint = Endpoint::from_config(&config);

    let id = TaskId::from(id);
    let task = load_and_find(&endpoint, sheet.as_deref(), config.page_size, &id)?;
    Ok(task)
}

fn confirm(prompt: &str) -> Result<bool, TaskdeckError> {
    print!("{prompt}");
    io::stdout()
        .flush()
        .map_err(|e| TaskdeckError::validation(e.to_string()))?;
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|e| TaskdeckError::validation(e.to_string()))?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
