//! Integration tests for the marks file.

use super::Harness;
use chatmark::marks::{MarkStore, ScopeKey};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;

#[test]
fn test_marks_survive_restart() {
    let mut h = Harness::new();
    h.say("Carol", "!mark add public spawn Spawn point");
    h.say("Alice", "!mark add home My base is here");
    h.say("Alice", "!mark add mine deep");
    h.say("Alice", "!mark add farm wheat");
    h.say("Alice", "!mark rm mine");

    let before: Vec<_> = h
        .service
        .store()
        .scopes()
        .map(|(key, scope)| (key, scope.clone()))
        .collect();

    h.restart();
    let after: Vec<_> = h
        .service
        .store()
        .scopes()
        .map(|(key, scope)| (key, scope.clone()))
        .collect();

    assert_eq!(after, before);
    let names: Vec<_> = h
        .service
        .store()
        .private("Alice")
        .unwrap()
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(names, vec!["home", "farm"]);
}

#[test]
fn test_file_layout() {
    let mut h = Harness::new();
    h.say("Carol", "!mark add public spawn Spawn point");
    h.say("Alice", "!mark add home My base is here");

    let json: Value = serde_json::from_str(&fs::read_to_string(h.marks_path()).unwrap()).unwrap();
    let spawn = &json[".public"]["spawn"];
    assert_eq!(spawn["name"], "spawn");
    assert_eq!(spawn["content"], "Spawn point");
    assert_eq!(spawn["player"], "Carol");
    assert_eq!(spawn["public"], true);

    let home = &json["Alice"]["home"];
    assert_eq!(home["public"], false);
    let time = home["time"].as_str().unwrap();
    assert!(
        chrono::NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M:%S").is_ok(),
        "unexpected timestamp {time:?}"
    );
}

#[test]
fn test_loads_hand_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("marks.json");
    fs::write(
        &path,
        r#"{
  ".public": {
    "spawn": {"name": "spawn", "content": "0 64 0", "player": "Carol", "time": "2024-05-01 12:30:00", "public": true}
  },
  "Alice": {
    "b": {"name": "b", "content": "second", "player": "Alice", "time": "2024-05-02 08:00:00", "public": false},
    "a": {"name": "a", "content": "first", "player": "Alice", "time": "2024-05-02 09:00:00", "public": false}
  }
}"#,
    )
    .unwrap();

    let store = MarkStore::open(&path).unwrap();
    let spawn = store.lookup("Bob", "spawn").unwrap();
    assert_eq!(spawn.timestamp(), "2024-05-01 12:30:00");
    assert_eq!(spawn.scope(), ScopeKey::Public);

    let names: Vec<_> = store.private("Alice").unwrap().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[test]
fn test_corrupt_file_is_backed_up() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("marks.json");
    fs::write(&path, "{ not json").unwrap();

    let store = MarkStore::open(&path).unwrap();
    assert!(store.public().is_empty());
    assert_eq!(
        fs::read_to_string(dir.path().join("marks.json.bak")).unwrap(),
        "{ not json"
    );

    let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(json[".public"].as_object().unwrap().is_empty());
}

#[test]
fn test_failed_save_leaves_disk_and_memory_unchanged() {
    let mut h = Harness::new();
    h.say("Alice", "!mark add home base");
    let before = fs::read_to_string(h.marks_path()).unwrap();

    fs::create_dir(h.dir.path().join("marks.json.tmp")).unwrap();
    assert_eq!(
        h.say("Alice", "!mark rm home"),
        vec!["Mark service internal error raised."]
    );
    assert!(h.service.store().lookup("Alice", "home").is_some());
    assert_eq!(fs::read_to_string(h.marks_path()).unwrap(), before);
}
