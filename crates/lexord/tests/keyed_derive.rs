//! Tests for `#[derive(Keyed)]`.

#![cfg(feature = "derive")]

use lexord::{by, Chain, Keyed, LexordError, Number, OrderBy, Value};

#[derive(Debug, Clone, Keyed)]
struct Task {
    #[key(String)]
    name: String,
    #[key(Number)]
    priority: u8,
    #[key(Bool, rename = "done")]
    completed: bool,
    #[key(Number, rename = "dueAt")]
    due: i64,
    #[key(skip)]
    #[allow(dead_code)]
    cache: u64,
    #[allow(dead_code)]
    note: String,
}

fn task(name: &str, priority: u8, completed: bool, due: i64) -> Task {
    Task {
        name: name.to_string(),
        priority,
        completed,
        due,
        cache: 0,
        note: String::new(),
    }
}

fn names(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.name.as_str()).collect()
}

#[test]
fn generates_name_constants() {
    assert_eq!(Task::NAME, "name");
    assert_eq!(Task::PRIORITY, "priority");
    assert_eq!(Task::DONE, "done");
    assert_eq!(Task::DUE_AT, "dueAt");
}

#[test]
fn lists_only_keyed_fields() {
    assert_eq!(Task::key_fields(), &["name", "priority", "done", "dueAt"]);
}

#[test]
fn key_value_reads_fields() {
    let t = task("write", 3, true, -5);

    assert_eq!(t.key_value(Task::NAME), Value::Str("write"));
    assert_eq!(t.key_value(Task::PRIORITY), Value::Number(Number::U64(3)));
    assert_eq!(t.key_value(Task::DONE), Value::Bool(true));
    assert_eq!(t.key_value(Task::DUE_AT), Value::Number(Number::I64(-5)));
    assert_eq!(t.key_value("completed"), Value::None);
    assert_eq!(t.key_value("cache"), Value::None);
    assert_eq!(t.key_value("note"), Value::None);
}

#[test]
fn by_names_uses_constants() {
    let chain = Chain::<Task>::by_names(&[OrderBy::asc(Task::DONE), OrderBy::desc(Task::PRIORITY)])
        .unwrap();
    let mut tasks = vec![
        task("a", 9, true, 0),
        task("b", 1, false, 0),
        task("c", 5, false, 0),
    ];

    tasks.sort_by(|l, r| chain.compare(l, r));

    assert_eq!(names(&tasks), ["c", "b", "a"]);
}

#[test]
fn parse_builds_chain_from_text() {
    let chain = Chain::<Task>::parse("-dueAt, name").unwrap();
    let mut tasks = vec![
        task("y", 0, false, 1),
        task("x", 0, false, 1),
        task("z", 0, false, 7),
    ];

    tasks.sort_by(|l, r| chain.compare(l, r));

    assert_eq!(names(&tasks), ["z", "x", "y"]);
}

#[test]
fn parse_rejects_renamed_away_and_skipped_fields() {
    let err = Chain::<Task>::parse("completed").unwrap_err();
    assert_eq!(
        err,
        LexordError::UnknownField {
            field: "completed".to_string(),
            available: "name, priority, done, dueAt".to_string(),
        }
    );

    assert!(Chain::<Task>::parse("cache").is_err());
}

#[test]
fn named_keys_mix_with_typed_keys() {
    let chain: Chain<Task> = Chain::builder()
        .key(OrderBy::desc(Task::DONE))
        .key(by(|t: &Task| t.name.len()))
        .build();

    assert!(chain.precedes(&task("long", 0, true, 0), &task("s", 0, false, 0)));
    assert!(chain.precedes(&task("s", 0, true, 0), &task("long", 0, true, 0)));
}

#[test]
fn derive_supports_generics() {
    #[derive(Keyed)]
    struct Labelled<L: AsRef<str>> {
        #[key(String)]
        label: L,
    }

    let chain = Chain::<Labelled<&'static str>>::parse("label:desc").unwrap();

    assert!(chain.precedes(&Labelled { label: "b" }, &Labelled { label: "a" }));
}
