//! Console output in, `/tellraw` commands out.

use chatmark::config::PublicPermission;
use chatmark::host::mock::StaticDirectory;
use chatmark::host::{ChatRelay, TellrawSink};
use chatmark::marks::MarkStore;
use chatmark::service::MarkService;
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use tempfile::tempdir;

/// A writer whose bytes stay readable after the sink takes it.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn lines(&self) -> Vec<String> {
        String::from_utf8(self.0.borrow().clone())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn relay_with_service(out: &SharedBuffer, rich: bool) -> (ChatRelay, tempfile::TempDir) {
    let dir = tempdir().unwrap();
    let service = MarkService::new(
        MarkStore::open(dir.path().join("marks.json")).unwrap(),
        Box::new(TellrawSink::new(out.clone(), rich)),
        Box::new(StaticDirectory::new(["Carol"])),
        PublicPermission::Op,
    );
    let mut relay = ChatRelay::new();
    relay.subscribe(Box::new(service));
    (relay, dir)
}

#[test]
fn test_chat_line_produces_tellraw() {
    let out = SharedBuffer::default();
    let (mut relay, _dir) = relay_with_service(&out, true);

    assert!(relay.feed_console_line(
        "[12:00:01] [Server thread/INFO]: <Alice> !mark add home My base"
    ));
    assert_eq!(
        out.lines(),
        vec![
            r#"/tellraw Alice {"color":"yellow","text":"Private mark \"home\" has been successfully saved."}"#
        ]
    );
}

#[test]
fn test_non_chat_and_ordinary_chat_are_silent() {
    let out = SharedBuffer::default();
    let (mut relay, _dir) = relay_with_service(&out, true);

    assert!(!relay.feed_console_line("[12:00:00] [Server thread/INFO]: Done (3.2s)!"));
    assert!(relay.feed_console_line("[12:00:02] [Server thread/INFO]: <Bob> hello all"));
    assert!(relay.feed_console_line("[12:00:03] [Server thread/INFO]: [Server] !mark help"));
    assert!(out.lines().is_empty());
}

#[test]
fn test_list_entries_carry_affordances() {
    let out = SharedBuffer::default();
    let (mut relay, _dir) = relay_with_service(&out, true);
    relay.feed_console_line("[12:00:01] [Server thread/INFO]: <Alice> !mark add home My base");
    relay.feed_console_line("[12:00:02] [Server thread/INFO]: <Alice> !mark list private");

    let lines = out.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[2].contains(r#""hoverEvent""#));
    assert!(lines[2].contains(r#""value":"My base""#));
}

#[test]
fn test_plain_mode_has_no_affordances() {
    let out = SharedBuffer::default();
    let (mut relay, _dir) = relay_with_service(&out, false);
    relay.feed_console_line("[12:00:01] [Server thread/INFO]: <Alice> !mark add home My base");
    relay.feed_console_line("[12:00:02] [Server thread/INFO]: <Alice> !mark list private");

    let lines = out.lines();
    assert!(lines.iter().all(|l| !l.contains("hoverEvent")));
    assert!(lines[2].contains(r#""text":"home (by Alice at "#));
}

#[test]
fn test_emote_cannot_act_as_operator() {
    let out = SharedBuffer::default();
    let (mut relay, _dir) = relay_with_service(&out, false);
    relay.feed_console_line(
        "[12:00:00] [Server thread/INFO]: <Carol> !mark add public spawn origin",
    );
    let saved = out.lines().len();

    relay.feed_console_line("[12:00:01] [Server thread/INFO]: * Bob <Carol> !mark rm spawn");
    relay.feed_console_line("[12:00:02] [Server thread/INFO]: [Server] <Carol> !mark rm spawn");
    assert_eq!(out.lines().len(), saved);

    relay.feed_console_line("[12:00:03] [Server thread/INFO]: <Bob> !mark show spawn");
    assert!(out.lines().last().unwrap().contains("marked by Carol"));
}
