use serde_json::json;

use crate::cli::commands::SheetCommands;
use crate::config;
use crate::error::TaskdeckError;
use crate::output;
use crate::store::{endpoint::Endpoint, sheets};

pub fn run(cmd: SheetCommands, json_output: bool) -> i32 {
    let result = match cmd {
        SheetCommands::List => run_list(json_output),
        SheetCommands::Create { name } => run_create(&name, json_output),
        SheetCommands::Use { name } => run_use(&name, json_output),
    };
    match result {
        Ok(code) => code,
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

fn run_list(json_output: bool) -> Result<i32, TaskdeckError> {
    let config = config::load()?;
    let endpoint = Endpoint::from_config(&config);
    let sheets = sheets::list_sheets(&endpoint)?;

    if json_output {
        let sheets_json: Vec<_> = sheets.iter().map(output::json::sheet_json).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "sheets": sheets_json,
                "current": config.sheet
            })))
            .unwrap()
        );
    } else {
        output::text::print_sheet_list(&sheets, config.sheet.as_deref());
    }
    Ok(0)
}

fn run_create(name: &str, json_output: bool) -> Result<i32, TaskdeckError> {
    if name.trim().is_empty() {
        return Err(TaskdeckError::validation("Sheet name must not be empty"));
    }
    let config = config::load()?;
    let endpoint = Endpoint::from_config(&config);
    sheets::create_sheet(&endpoint, name)?;

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "created": { "name": name }
            })))
            .unwrap()
        );
    } else {
        println!("Created sheet: {name}");
    }
    Ok(0)
}

fn run_use(name: &str, json_output: bool) -> Result<i32, TaskdeckError> {
    let mut config = config::load()?;
    let endpoint = Endpoint::from_config(&config);

    // Selecting an unknown sheet would scope every later read to nothing.
    let sheets = sheets::list_sheets(&endpoint)?;
    if !sheets.iter().any(|s| s.name == name) {
        return Err(TaskdeckError::sheet_not_found(name));
    }

    config.sheet = Some(name.to_string());
    config::save(&config)?;

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "sheet": name
            })))
            .unwrap()
        );
    } else {
        println!("Using sheet: {name}");
    }
    Ok(0)
}
