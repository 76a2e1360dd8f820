//! Command definitions for declarative command metadata.
//!
//! The verb table drives both verb recognition and the help text.

/// The verbs understood after the command prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Help,
    List,
    Add,
    Rm,
    Show,
    Search,
}

impl Verb {
    /// Resolves a verb token. Matching is exact and case-sensitive.
    pub fn parse(token: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|def| def.verb.as_str() == token)
            .map(|def| def.verb)
    }

    /// The token that selects this verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::List => "list",
            Self::Add => "add",
            Self::Rm => "rm",
            Self::Show => "show",
            Self::Search => "search",
        }
    }
}

/// Definition of a command.
#[derive(Debug, Clone)]
pub struct CommandDef {
    /// The verb this entry describes.
    pub verb: Verb,
    /// Usage line, prefix included.
    pub usage: &'static str,
    /// Short description shown in help.
    pub description: &'static str,
}

/// All command definitions, in help order.
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        verb: Verb::Help,
        usage: "!mark help",
        description: "show this help message.",
    },
    CommandDef {
        verb: Verb::List,
        usage: "!mark list [public | private]",
        description: "list out all the marks. Use argument \"public\" or \"private\" to see public or private marks only.",
    },
    CommandDef {
        verb: Verb::Add,
        usage: "!mark add [public] <name> <content>",
        description: "add a mark. Use argument \"public\" to make it visible to all players.",
    },
    CommandDef {
        verb: Verb::Rm,
        usage: "!mark rm <name>",
        description: "remove a mark.",
    },
    CommandDef {
        verb: Verb::Show,
        usage: "!mark show <name>",
        description: "show details of the mark.",
    },
    CommandDef {
        verb: Verb::Search,
        usage: "!mark search <text>",
        description: "search marks containing the given text.",
    },
];
