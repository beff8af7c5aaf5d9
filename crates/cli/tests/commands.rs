//! Drive the CLI through parsed arguments against an in-memory context

use clap::Parser;
use cli::commands::Cli;
use cli::context::AppContext;
use cli::output::{ErrorDetail, Outcome};
use shared::AppConfig;

fn exec(context: &AppContext, args: &[&str]) -> anyhow::Result<Outcome> {
    let argv: Vec<&str> = std::iter::once("sicei").chain(args.iter().copied()).collect();
    let cli = Cli::try_parse_from(argv)?;
    cli.command.run(context)
}

fn exec_ok(context: &AppContext, args: &[&str]) -> serde_json::Value {
    exec(context, args).unwrap().body
}

fn enrol(context: &AppContext, name: &str, semester: &str) -> String {
    let body = exec_ok(
        context,
        &[
            "student",
            "create",
            "--name",
            name,
            "--lastname",
            "Test",
            "--email",
            &format!("{}@school.edu", name.to_lowercase()),
            "--semester",
            semester,
        ],
    );
    body["id"].as_str().unwrap().to_string()
}

fn add_subject(context: &AppContext, name: &str) -> String {
    let body = exec_ok(
        context,
        &["subject", "create", "--name", name, "--credits", "6", "--semester", "1"],
    );
    body["id"].as_str().unwrap().to_string()
}

#[test]
fn test_grade_flow_updates_average() {
    let context = AppContext::in_memory(AppConfig::default());
    let alice = enrol(&context, "Alice", "3");
    let math = add_subject(&context, "Math");
    let art = add_subject(&context, "Art");

    let created = exec(
        &context,
        &["grade", "create", "--student-id", &alice, "--subject-id", &math, "--value", "80"],
    )
    .unwrap();
    assert!(created.changed);
    assert_eq!(created.body["id"], 1);

    exec_ok(
        &context,
        &["grade", "create", "--student-id", &alice, "--subject-id", &art, "--value", "100"],
    );

    let student = exec_ok(&context, &["student", "get", &alice]);
    assert_eq!(student["average"], 90.0);

    let report = exec_ok(&context, &["report", "student", &alice]);
    assert_eq!(report["average"], 90.0);
    assert_eq!(report["subjects"].as_array().unwrap().len(), 2);
}

#[test]
fn test_reads_do_not_mark_changes() {
    let context = AppContext::in_memory(AppConfig::default());
    enrol(&context, "Alice", "1");

    let listed = exec(&context, &["student", "list"]).unwrap();
    assert!(!listed.changed);
    assert_eq!(listed.body.as_array().unwrap().len(), 1);
}

#[test]
fn test_list_flags_sort_and_page() {
    let context = AppContext::in_memory(AppConfig::default());
    for name in ["Carol", "Alice", "Bob"] {
        enrol(&context, name, "2");
    }

    let body = exec_ok(
        &context,
        &[
            "student",
            "list",
            "--page-size",
            "2",
            "--page",
            "1",
            "--sort-field",
            "name",
            "--sort-order",
            "DESC",
        ],
    );
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["Carol", "Bob"]);
}

#[test]
fn test_failures_carry_their_kind() {
    let context = AppContext::in_memory(AppConfig::default());

    let err = exec(&context, &["grade", "delete", "7"]).unwrap_err();
    assert_eq!(ErrorDetail::from_error(&err).kind, "ResourceNotFound");

    let err = exec(
        &context,
        &["grade", "create", "--student-id", "", "--subject-id", "x", "--value", "50"],
    )
    .unwrap_err();
    assert_eq!(ErrorDetail::from_error(&err).kind, "NotEnoughArguments");

    let alice = enrol(&context, "Alice", "1");
    let math = add_subject(&context, "Math");
    let err = exec(
        &context,
        &["grade", "create", "--student-id", &alice, "--subject-id", &math, "--value", "-3"],
    )
    .unwrap_err();
    let detail = ErrorDetail::from_error(&err);
    assert_eq!(detail.kind, "Validation");
    assert_eq!(detail.status, 422);
}

#[test]
fn test_dashboard_uses_configured_passing_grade() {
    let config = AppConfig {
        passing_grade: 50.0,
        ..AppConfig::default()
    };
    let context = AppContext::in_memory(config);
    let alice = enrol(&context, "Alice", "1");
    let math = add_subject(&context, "Math");
    exec_ok(
        &context,
        &["grade", "create", "--student-id", &alice, "--subject-id", &math, "--value", "55"],
    );

    let dashboard = exec_ok(&context, &["report", "dashboard"]);
    assert_eq!(dashboard[0]["status"], true);
    assert_eq!(dashboard[0]["average"], 55.0);
}

#[test]
fn test_changes_persist_to_data_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let data_file = dir.path().join("records.json");

    let alice = {
        let context = AppContext::open(AppConfig::default(), &data_file).unwrap();
        let alice = enrol(&context, "Alice", "4");
        context.save().unwrap();
        alice
    };

    let reopened = AppContext::open(AppConfig::default(), &data_file).unwrap();
    let student = exec_ok(&reopened, &["student", "get", &alice]);
    assert_eq!(student["name"], "Alice");
    assert_eq!(student["semester"], 4);
}
