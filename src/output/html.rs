//! HTML fragment renderer for the task list and its page selector.
//!
//! Free-text fields (title, description) pass through [`escape_html`]
//! before being embedded; this is a security contract, not styling.

use crate::models::Task;
use crate::view::TaskListViewModel;

/// Escape `& < > " '` for safe embedding in markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_page(vm: &TaskListViewModel) -> String {
    let mut html = render_task_list(vm.current_page_items());
    html.push_str(&render_pagination(vm.current_page(), vm.page_count()));
    html
}

pub fn render_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "<div class=\"empty-state\"><h3>No tasks found</h3></div>\n".to_string();
    }

    let mut html = String::new();
    for task in tasks {
        html.push_str("<div class=\"task-item\">");
        html.push_str("<div class=\"task-header\">");
        html.push_str(&format!(
            "<div class=\"task-title\">{}</div>",
            escape_html(&task.title)
        ));
        html.push_str(&format!(
            "<span class=\"task-priority priority-{}\">{}</span>",
            task.priority.as_css_class(),
            task.priority
        ));
        html.push_str("</div>");
        if !task.description.is_empty() {
            html.push_str(&format!(
                "<div class=\"task-description\">{}</div>",
                escape_html(&task.description)
            ));
        }
        html.push_str(&format!(
            "<div class=\"task-meta\"><span>Due: {}</span><span>Created: {}</span></div>",
            escape_html(task.deadline.as_deref().unwrap_or("none")),
            escape_html(&task.created)
        ));
        html.push_str("</div>\n");
    }
    html
}

/// Page selector: prev/next plus a window of two pages around the current
/// one, with ellipsis placeholders where the window cuts the range.
pub fn render_pagination(current: usize, total: usize) -> String {
    if total <= 1 {
        return String::new();
    }

    let mut html = String::from("<div class=\"pagination\">");

    if current > 1 {
        html.push_str(&format!("<button data-page=\"{}\">Prev</button>", current - 1));
    } else {
        html.push_str("<button disabled>Prev</button>");
    }

    for i in 1..=total {
        if i == current {
            html.push_str(&format!("<button class=\"active\">{i}</button>"));
        } else if i == 1 || i == total || (i + 2 >= current && i <= current + 2) {
            html.push_str(&format!("<button data-page=\"{i}\">{i}</button>"));
        } else if i + 3 == current || i == current + 3 {
            html.push_str("<button disabled>...</button>");
        }
    }

    if current < total {
        html.push_str(&format!("<button data-page=\"{}\">Next</button>", current + 1));
    } else {
        html.push_str("<button disabled>Next</button>");
    }

    html.push_str("</div>\n");
    html
}
