//! Help text for the `help` verb.

use super::definitions::COMMANDS;

/// Lines shown before the command reference.
pub const HELP_INTRO: &[&str] = &[
    "Welcome to chatmark!",
    "You are able to use the following commands:",
];

/// The full help text, one chat message per line.
pub fn help_lines() -> Vec<String> {
    HELP_INTRO
        .iter()
        .map(|line| line.to_string())
        .chain(
            COMMANDS
                .iter()
                .map(|def| format!("\"{}\": {}", def.usage, def.description)),
        )
        .collect()
}
