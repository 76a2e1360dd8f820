//! Chat sessions from the player's point of view.

use super::Harness;
use chatmark::config::PublicPermission;
use pretty_assertions::assert_eq;

#[test]
fn test_private_mark_is_invisible_to_others() {
    let mut h = Harness::new();

    assert_eq!(
        h.say("Alice", "!mark add home My base is here"),
        vec!["Private mark \"home\" has been successfully saved."]
    );

    let shown = h.say("Alice", "!mark show home");
    assert_eq!(shown.len(), 2);
    assert!(shown[0].starts_with("Private mark \"home\" was marked by Alice at "));
    assert_eq!(shown[1], "My base is here");

    assert_eq!(
        h.say("Bob", "!mark show home"),
        vec!["Cannot find mark \"home\". Make sure the name is correct."]
    );
}

#[test]
fn test_only_operators_publish_by_default() {
    let mut h = Harness::new();

    assert_eq!(
        h.say("Bob", "!mark add public spawn Spawn point"),
        vec!["Only op can make public marks. Permission denied."]
    );
    assert!(h.service.store().public().is_empty());

    assert_eq!(
        h.say("Carol", "!mark add public spawn Spawn point"),
        vec!["Public mark \"spawn\" has been successfully saved."]
    );

    let listed = h.say("Bob", "!mark list public");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0], "Public marks:");
    assert!(listed[1].starts_with("spawn (by Carol at "));
}

#[test]
fn test_duplicate_add_is_rejected() {
    let mut h = Harness::new();
    h.say("Alice", "!mark add home dup1");
    let before = std::fs::read_to_string(h.marks_path()).unwrap();

    assert_eq!(
        h.say("Alice", "!mark add home dup1"),
        vec!["Mark \"home\" already exists. Remove that mark first or use another name."]
    );
    assert_eq!(std::fs::read_to_string(h.marks_path()).unwrap(), before);
}

#[test]
fn test_list_on_empty_store() {
    let mut h = Harness::new();
    assert_eq!(
        h.say("Alice", "!mark list"),
        vec![
            "Public marks:",
            "No public marks yet.",
            "Private marks:",
            "No private marks yet."
        ]
    );
}

#[test]
fn test_help_lists_every_command() {
    let mut h = Harness::new();
    let lines = h.say("Bob", "!mark help");
    assert_eq!(lines[0], "Welcome to chatmark!");
    for verb in ["help", "list", "add", "rm", "show", "search"] {
        assert!(
            lines.iter().any(|l| l.starts_with(&format!("\"!mark {verb}"))),
            "help is missing {verb}"
        );
    }
}

#[test]
fn test_usage_errors() {
    let mut h = Harness::new();
    let unknown = "Unknown command. Type \"!mark help\" for help.";

    for text in ["!mark", "!mark fly", "!mark add home", "!mark show", "!mark rm a b", "!marks list"] {
        assert_eq!(h.say("Alice", text), vec![unknown], "{text:?}");
    }
    assert_eq!(
        h.say("Carol", "!mark add public spawn"),
        vec!["Missing argument <content>."]
    );
}

#[test]
fn test_extra_whitespace_is_collapsed() {
    let mut h = Harness::new();
    h.say("Alice", "  !mark   add  home   My   base  ");
    assert_eq!(h.say("Alice", "!mark show home")[1], "My base");
}

#[test]
fn test_misconfigured_permission_only_blocks_publishing() {
    let mut h = Harness::with_permission(PublicPermission::Invalid("admins".to_string()));

    assert_eq!(
        h.say("Carol", "!mark add public spawn x"),
        vec!["Unacceptable config for public mark permission. Please ask an admin to fix it."]
    );
    assert_eq!(
        h.say("Carol", "!mark add home x"),
        vec!["Private mark \"home\" has been successfully saved."]
    );
}

#[test]
fn test_operator_removes_public_mark() {
    let mut h = Harness::with_permission(PublicPermission::Any);
    h.say("Bob", "!mark add public spawn origin");

    assert_eq!(
        h.say("Bob", "!mark rm spawn"),
        vec!["Only op can remove public marks. Permission denied."]
    );
    assert_eq!(
        h.say("Carol", "!mark rm spawn"),
        vec!["Public mark \"spawn\" has been successfully deleted."]
    );
    assert_eq!(
        h.say("Bob", "!mark show spawn"),
        vec!["Cannot find mark \"spawn\". Make sure the name is correct."]
    );
}

#[test]
fn test_search_session() {
    let mut h = Harness::new();
    h.say("Carol", "!mark add public farm wheat rows");
    h.say("Alice", "!mark add home next to the farm");
    h.say("Bob", "!mark add stash farm loot");

    assert_eq!(
        h.say("Alice", "!mark search farm"),
        vec!["Public marks:", "farm", "Private marks:", "home"]
    );
    assert_eq!(
        h.say("Bob", "!mark search farm"),
        vec!["Public marks:", "farm", "Private marks:", "stash"]
    );
}
