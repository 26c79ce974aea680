use crate::models::{Sheet, Task};
use crate::view::TaskListViewModel;

pub fn print_task(t: &Task) {
    println!("Task: {} ({})", t.title, t.id);
    if !t.description.is_empty() {
        println!("  Description: {}", t.description);
    }
    println!("  Priority: {}", t.priority);
    println!("  Deadline: {}", t.deadline.as_deref().unwrap_or("none"));
    println!("  Created: {}", t.created);
}

pub fn print_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    for t in tasks {
        let deadline = t.deadline.as_deref().unwrap_or("none");
        println!(
            "  [{}] {} ({}) due={} created={}",
            t.priority, t.title, t.id, deadline, t.created
        );
    }
}

pub fn print_page_footer(vm: &TaskListViewModel) {
    if vm.page_count() > 1 {
        println!();
        println!(
            "Page {} of {} ({} tasks)",
            vm.current_page(),
            vm.page_count(),
            vm.filtered_len()
        );
    }
}

pub fn print_sheet_list(sheets: &[Sheet], current: Option<&str>) {
    if sheets.is_empty() {
        println!("No sheets found.");
        return;
    }
    for s in sheets {
        let marker = if Some(s.name.as_str()) == current { " *" } else { "" };
        println!("  {}{}", s.name, marker);
    }
}
