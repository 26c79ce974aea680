use crate::config;
use crate::error::TaskdeckError;
use crate::models::Priority;
use crate::output;
use crate::store::{endpoint::Endpoint, tasks};
use crate::view::TaskListViewModel;

pub fn run(
    search: &str,
    priority: Option<&str>,
    page: usize,
    html: bool,
    json_output: bool,
    sheet_flag: Option<&str>,
) -> i32 {
    match run_inner(search, priority, page, html, json_output, sheet_flag) {
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

fn run_inner(
    search: &str,
    priority: Option<&str>,
    page: usize,
    html: bool,
    json_output: bool,
    sheet_flag: Option<&str>,
) -> Result<i32, TaskdeckError> {
    let priority_filter = priority
        .map(|p| {
            Priority::from_str(p)
                .ok_or_else(|| TaskdeckError::validation(format!("Unknown priority: {p}")))
        })
        .transpose()?;

    let config = config::load()?;
    let sheet = sheet_flag.map(str::to_string).or(config.sheet.clone());
    let endpoint = Endpoint::from_config(&config);

    let mut vm = TaskListViewModel::new(config.page_size);
    let ticket = vm.begin_load();
    let loaded = tasks::list_tasks(&endpoint, sheet.as_deref())?;
    vm.complete_load(ticket, loaded);

    vm.apply_filter(search, priority_filter);
    vm.set_page(page)?;

    if html {
        print!("{}", output::html::render_page(&vm));
    } else if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(output::json::page_json(&vm)))
                .unwrap()
        );
    } else {
        output::text::print_task_list(vm.current_page_items());
        output::text::print_page_footer(&vm);
    }
    Ok(0)
}
