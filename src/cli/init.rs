use serde_json::json;

use crate::config::{self, Config};
use crate::error::TaskdeckError;
use crate::output;

pub fn run(url: &str, page_size: usize, json_output: bool) -> i32 {
    match run_inner(url, page_size) {
        Ok(path) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(json!({
                        "path": path
                    })))
                    .unwrap()
                );
            } else {
                println!("Configured taskdeck at {path}");
            }
            0
        }
        Err(e) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&output::json::error(&e)).unwrap());
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}

fn run_inner(url: &str, page_size: usize) -> Result<String, TaskdeckError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(TaskdeckError::validation(
            "Endpoint URL must start with http:// or https://",
        ));
    }
    if page_size == 0 {
        return Err(TaskdeckError::validation("page_size must be at least 1"));
    }
    let path = config::save(&Config::new(url, page_size))?;
    Ok(path.to_string_lossy().into_owned())
}
