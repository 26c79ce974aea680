#[allow(deprecated)]
use assert_cmd::Command;
use mockito::{Matcher, Mock, ServerGuard};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

// ─── helpers ───────────────────────────────────────────────────────

struct TestEnv {
    dir: TempDir,
    server: ServerGuard,
}

impl TestEnv {
    fn new() -> Self {
        let dir = TempDir::new().expect("create tempdir");
        let server = mockito::Server::new();
        let env = Self { dir, server };
        let url = env.server.url();
        let v = env.run_json(&["init", "--url", url.as_str()]);
        assert_eq!(v["success"], true, "init failed: {v}");
        env
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("taskdeck").expect("binary");
        cmd.env("TASKDECK_CONFIG_DIR", self.dir.path());
        cmd
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let mut a: Vec<&str> = args.to_vec();
        a.push("--json");
        let output = self.cmd().args(&a).output().expect("run");
        let stdout = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&stdout)
            .unwrap_or_else(|e| panic!("parse JSON failed: {e}\nstdout: {stdout}"))
    }

    fn run_ok(&self, args: &[&str]) -> Value {
        let v = self.run_json(args);
        assert_eq!(v["success"], true, "expected success=true: {v}");
        v
    }

    fn run_err(&self, args: &[&str]) -> Value {
        let v = self.run_json(args);
        assert_eq!(v["success"], false, "expected success=false: {v}");
        v
    }

    fn mock_tasks(&mut self, body_json: &str) -> Mock {
        self.server
            .mock("GET", "/")
            .match_query(Matcher::UrlEncoded("action".into(), "getTasks".into()))
            .with_status(200)
            .with_body(format!("handleResponse({body_json})"))
            .expect_at_least(1)
            .create()
    }

    fn mock_sheets(&mut self, body_json: &str) -> Mock {
        self.server
            .mock("GET", "/")
            .match_query(Matcher::UrlEncoded("action".into(), "getSheets".into()))
            .with_status(200)
            .with_body(format!("handleResponse({body_json})"))
            .expect_at_least(1)
            .create()
    }
}

fn task_json(id: u32, title: &str, description: &str, priority: &str) -> String {
    format!(
        r#"{{"id":{id},"title":"{title}","description":"{description}","priority":"{priority}","deadline":"","created":"2025-01-01 09:00"}}"#
    )
}

fn many_tasks(n: u32) -> String {
    let items: Vec<String> = (1..=n)
        .map(|i| task_json(i, &format!("task {i}"), "", "MEDIUM"))
        .collect();
    format!("[{}]", items.join(","))
}

// ─── init / config ─────────────────────────────────────────────────

#[test]
fn init_writes_config_file() {
    let env = TestEnv::new();
    let config_path = env.dir.path().join("config.json");
    assert!(config_path.exists());
    let raw = std::fs::read_to_string(config_path).unwrap();
    let v: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(v["api_url"], env.server.url());
    assert_eq!(v["page_size"], 10);
}

#[test]
fn init_rejects_non_http_url() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("taskdeck").unwrap();
    cmd.env("TASKDECK_CONFIG_DIR", dir.path());
    cmd.args(["init", "--url", "file:///tmp/x", "--json"]);
    let output = cmd.output().unwrap();
    let v: Value = serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(v["success"], false);
    assert_eq!(v["error"]["code"], "VALIDATION_ERROR");
}

#[test]
fn commands_require_config() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("taskdeck").unwrap();
    cmd.env("TASKDECK_CONFIG_DIR", dir.path());
    cmd.args(["list", "--json"]);
    let output = cmd.output().unwrap();
    let v: Value = serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(v["success"], false);
    assert_eq!(v["error"]["code"], "NOT_CONFIGURED");
}

// ─── list / filter / paginate ──────────────────────────────────────

#[test]
fn list_paginates() {
    let mut env = TestEnv::new();
    let m = env.mock_tasks(&many_tasks(25));

    let v = env.run_ok(&["list"]);
    assert_eq!(v["data"]["page"], 1);
    assert_eq!(v["data"]["page_count"], 3);
    assert_eq!(v["data"]["matched"], 25);
    assert_eq!(v["data"]["tasks"].as_array().unwrap().len(), 10);

    let v = env.run_ok(&["list", "--page", "3"]);
    let tasks = v["data"]["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 5);
    assert_eq!(tasks[0]["title"], "task 21");
    assert_eq!(tasks[4]["title"], "task 25");
    m.assert();
}

#[test]
fn list_rejects_out_of_range_page() {
    let mut env = TestEnv::new();
    env.mock_tasks(&many_tasks(25));

    let v = env.run_err(&["list", "--page", "4"]);
    assert_eq!(v["error"]["code"], "INVALID_PAGE");

    let v = env.run_err(&["list", "--page", "0"]);
    assert_eq!(v["error"]["code"], "INVALID_PAGE");
}

#[test]
fn list_filters_by_search_and_priority() {
    let mut env = TestEnv::new();
    env.mock_tasks(&format!(
        "[{},{}]",
        task_json(1, "Buy milk", "", "LOW"),
        task_json(2, "Fix bug", "", "HIGH")
    ));

    let v = env.run_ok(&["list", "--search", "bug"]);
    let tasks = v["data"]["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Fix bug");

    let v = env.run_ok(&["list", "--priority", "low"]);
    let tasks = v["data"]["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Buy milk");
}

#[test]
fn list_rejects_unknown_priority() {
    let env = TestEnv::new();
    let v = env.run_err(&["list", "--priority", "urgent"]);
    assert_eq!(v["error"]["code"], "VALIDATION_ERROR");
}

#[test]
fn list_accepts_bare_json_and_string_ids() {
    let mut env = TestEnv::new();
    // No JSONP padding, string id, lowercase priority.
    env.server
        .mock("GET", "/")
        .match_query(Matcher::UrlEncoded("action".into(), "getTasks".into()))
        .with_status(200)
        .with_body(r#"[{"id":"a1","title":"Loose wire","priority":"high","created":"x"}]"#)
        .create();

    let v = env.run_ok(&["list"]);
    let tasks = v["data"]["tasks"].as_array().unwrap();
    assert_eq!(tasks[0]["id"], "a1");
    assert_eq!(tasks[0]["priority"], "HIGH");
}

#[test]
fn list_html_escapes_free_text() {
    let mut env = TestEnv::new();
    env.mock_tasks(&format!(
        "[{}]",
        task_json(1, "<script>alert(1)</script>", "a &amp; b", "LOW")
    ));

    env.cmd()
        .args(["list", "--html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("&lt;script&gt;"))
        .stdout(predicate::str::contains("task-item"))
        .stdout(predicate::str::contains("priority-low"));
}

#[test]
fn list_surfaces_transport_errors() {
    let mut env = TestEnv::new();
    env.server
        .mock("GET", "/")
        .match_query(Matcher::UrlEncoded("action".into(), "getTasks".into()))
        .with_status(500)
        .create();

    let v = env.run_err(&["list"]);
    assert_eq!(v["error"]["code"], "TRANSPORT_ERROR");
}

// ─── add / edit / delete ───────────────────────────────────────────

#[test]
fn add_posts_fields_and_confirms() {
    let mut env = TestEnv::new();
    let m = env
        .server
        .mock("POST", "/")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("title".into(), "Buy milk".into()),
            Matcher::UrlEncoded("priority".into(), "HIGH".into()),
            Matcher::UrlEncoded("deadline".into(), "2025-06-01".into()),
        ]))
        .with_status(200)
        .create();

    let v = env.run_ok(&[
        "add",
        "Buy milk",
        "--priority",
        "high",
        "--deadline",
        "2025-06-01",
    ]);
    assert_eq!(v["data"]["message"], "Created task: Buy milk");
    m.assert();
}

#[test]
fn add_failure_is_not_reported_as_success() {
    let mut env = TestEnv::new();
    env.server.mock("POST", "/").with_status(500).create();

    let v = env.run_err(&["add", "Buy milk"]);
    assert_eq!(v["error"]["code"], "TRANSPORT_ERROR");
}

#[test]
fn add_rejects_empty_title() {
    let env = TestEnv::new();
    let v = env.run_err(&["add", "  "]);
    assert_eq!(v["error"]["code"], "VALIDATION_ERROR");
}

#[test]
fn edit_prefills_unchanged_fields_and_keeps_created() {
    let mut env = TestEnv::new();
    env.mock_tasks(&format!(
        "[{}]",
        task_json(7, "Fix bug", "in the parser", "HIGH")
    ));
    let m = env
        .server
        .mock("POST", "/")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("action".into(), "update".into()),
            Matcher::UrlEncoded("id".into(), "7".into()),
            Matcher::UrlEncoded("title".into(), "Fix parser bug".into()),
            // Untouched fields carried through from the current task.
            Matcher::UrlEncoded("description".into(), "in the parser".into()),
            Matcher::UrlEncoded("priority".into(), "HIGH".into()),
            Matcher::UrlEncoded("created".into(), "2025-01-01 09:00".into()),
        ]))
        .with_status(200)
        .create();

    let v = env.run_ok(&["edit", "7", "--title", "Fix parser bug"]);
    assert_eq!(v["data"]["message"], "Updated task: 7");
    m.assert();
}

#[test]
fn edit_missing_task_fails() {
    let mut env = TestEnv::new();
    env.mock_tasks("[]");

    let v = env.run_err(&["edit", "7", "--title", "x"]);
    assert_eq!(v["error"]["code"], "TASK_NOT_FOUND");
}

#[test]
fn edit_requires_a_field() {
    let env = TestEnv::new();
    let v = env.run_err(&["edit", "7"]);
    assert_eq!(v["error"]["code"], "VALIDATION_ERROR");
}

#[test]
fn delete_requires_yes_in_json_mode() {
    let mut env = TestEnv::new();
    env.mock_tasks(&format!("[{}]", task_json(7, "Fix bug", "", "HIGH")));

    let v = env.run_err(&["delete", "7"]);
    assert_eq!(v["error"]["code"], "VALIDATION_ERROR");
}

#[test]
fn delete_posts_action_delete() {
    let mut env = TestEnv::new();
    env.mock_tasks(&format!("[{}]", task_json(7, "Fix bug", "", "HIGH")));
    let m = env
        .server
        .mock("POST", "/")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("action".into(), "delete".into()),
            Matcher::UrlEncoded("id".into(), "7".into()),
        ]))
        .with_status(200)
        .create();

    let v = env.run_ok(&["delete", "7", "--yes"]);
    assert_eq!(v["data"]["message"], "Deleted task: 7");
    m.assert();
}

#[test]
fn delete_prompt_abort_sends_nothing() {
    let mut env = TestEnv::new();
    env.mock_tasks(&format!("[{}]", task_json(7, "Fix bug", "", "HIGH")));
    let m = env.server.mock("POST", "/").expect(0).create();

    env.cmd()
        .args(["delete", "7"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));
    m.assert();
}

#[test]
fn delete_prompt_confirm_sends_delete() {
    let mut env = TestEnv::new();
    env.mock_tasks(&format!("[{}]", task_json(7, "Fix bug", "", "HIGH")));
    let m = env
        .server
        .mock("POST", "/")
        .match_body(Matcher::UrlEncoded("action".into(), "delete".into()))
        .with_status(200)
        .create();

    env.cmd()
        .args(["delete", "7"])
        .write_stdin("y\n")
        .assert()
        .success();
    m.assert();
}

#[test]
fn show_prints_task() {
    let mut env = TestEnv::new();
    env.mock_tasks(&format!(
        "[{}]",
        task_json(7, "Fix bug", "in the parser", "HIGH")
    ));

    let v = env.run_ok(&["show", "7"]);
    assert_eq!(v["data"]["task"]["title"], "Fix bug");
    assert_eq!(v["data"]["task"]["priority"], "HIGH");
}

// ─── sheets ────────────────────────────────────────────────────────

#[test]
fn sheet_list_and_use() {
    let mut env = TestEnv::new();
    env.mock_sheets(r#"[{"name":"Work"},{"name":"Home"}]"#);

    let v = env.run_ok(&["sheet", "list"]);
    let sheets = v["data"]["sheets"].as_array().unwrap();
    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[0]["name"], "Work");

    env.run_ok(&["sheet", "use", "Work"]);

    // Later reads are scoped to the selected sheet.
    let scoped = env
        .server
        .mock("GET", "/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("action".into(), "getTasks".into()),
            Matcher::UrlEncoded("sheet".into(), "Work".into()),
        ]))
        .with_status(200)
        .with_body("handleResponse([])")
        .create();
    env.run_ok(&["list"]);
    scoped.assert();
}

#[test]
fn sheet_use_unknown_name_fails() {
    let mut env = TestEnv::new();
    env.mock_sheets(r#"[{"name":"Work"}]"#);

    let v = env.run_err(&["sheet", "use", "Nope"]);
    assert_eq!(v["error"]["code"], "SHEET_NOT_FOUND");
}

#[test]
fn sheet_create_posts_name() {
    let mut env = TestEnv::new();
    let m = env
        .server
        .mock("POST", "/")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("action".into(), "createSheet".into()),
            Matcher::UrlEncoded("sheetName".into(), "Errands".into()),
        ]))
        .with_status(200)
        .create();

    env.run_ok(&["sheet", "create", "Errands"]);
    m.assert();
}

#[test]
fn sheet_flag_overrides_config_for_one_call() {
    let mut env = TestEnv::new();
    let scoped = env
        .server
        .mock("GET", "/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("action".into(), "getTasks".into()),
            Matcher::UrlEncoded("sheet".into(), "Other".into()),
        ]))
        .with_status(200)
        .with_body("handleResponse([])")
        .create();

    env.run_ok(&["list", "--sheet", "Other"]);
    scoped.assert();
}
