//! The mark service: the piece the host talks to.
//!
//! Owns the store and the host collaborators, runs each chat line through
//! the router and turns every outcome, error or not, into replies.

use crate::commands::{CommandContext, CommandResult, CommandRouter, Reply, COMMAND_PREFIX};
use crate::config::{Config, PublicPermission};
use crate::error::Result;
use crate::host::{ChatListener, MessageSink, PlayerDirectory, Sender};
use crate::marks::MarkStore;
use tracing::{debug, error, info, warn};

/// Collaborators the host could provide. Missing ones disable the service.
#[derive(Default)]
pub struct HostHandles {
    pub sink: Option<Box<dyn MessageSink>>,
    pub directory: Option<Box<dyn PlayerDirectory>>,
}

/// Outcome of [`MarkService::start`].
pub enum Startup {
    /// The service is ready to receive chat.
    Ready(MarkService),
    /// A required collaborator is missing; the host should run without it.
    Unavailable { reason: String },
}

/// Handles chat commands for every player.
pub struct MarkService {
    store: MarkStore,
    sink: Box<dyn MessageSink>,
    directory: Box<dyn PlayerDirectory>,
    permission: PublicPermission,
}

impl MarkService {
    pub fn new(
        store: MarkStore,
        sink: Box<dyn MessageSink>,
        directory: Box<dyn PlayerDirectory>,
        permission: PublicPermission,
    ) -> Self {
        if let PublicPermission::Invalid(value) = &permission {
            warn!("Unacceptable public_permission_level {value:?}; public marks are disabled");
        }
        Self {
            store,
            sink,
            directory,
            permission,
        }
    }

    /// Builds the service from config and whatever the host provides.
    ///
    /// Missing collaborators yield [`Startup::Unavailable`]. A store that
    /// cannot be opened is an error.
    pub fn start(config: &Config, host: HostHandles) -> Result<Startup> {
        let HostHandles { sink, directory } = host;
        let (sink, directory) = match (sink, directory) {
            (Some(sink), Some(directory)) => (sink, directory),
            (None, _) => return Ok(unavailable("no message sink")),
            (_, None) => return Ok(unavailable("no player directory")),
        };

        let store = MarkStore::open(config.marks_path())?;
        info!("Mark service ready, marks at {}", store.path().display());
        Ok(Startup::Ready(Self::new(
            store,
            sink,
            directory,
            config.public_permission(),
        )))
    }

    /// Read access to the store.
    pub fn store(&self) -> &MarkStore {
        &self.store
    }

    /// Parses and runs one chat line without delivering anything.
    pub fn execute(&mut self, player: &str, text: &str) -> CommandResult {
        let inv = CommandRouter::parse(player, text)?;
        let mut ctx = CommandContext {
            store: &mut self.store,
            directory: &*self.directory,
            permission: &self.permission,
        };
        CommandRouter::dispatch(&mut ctx, &inv)
    }

    /// Runs one chat line and sends the replies to its sender.
    ///
    /// Console lines are dropped without a reply. Every player line gets at
    /// least one reply.
    pub fn handle_line(&mut self, sender: &Sender, text: &str) {
        let Some(player) = sender.name() else {
            debug!("Ignoring console line: {text}");
            return;
        };

        let replies = match self.execute(player, text) {
            Ok(replies) => replies,
            Err(e) if e.is_internal() => {
                error!(player, command = text, "{}: {e}", e.category());
                vec![Reply::error(e.user_message())]
            }
            Err(e) => {
                warn!(player, command = text, "{}: {e}", e.category());
                vec![Reply::error(e.user_message())]
            }
        };
        self.deliver(player, &replies);
    }

    fn deliver(&self, player: &str, replies: &[Reply]) {
        let rich = self.sink.supports_rich();
        for reply in replies {
            match reply {
                Reply::Entry(entry) if rich => {
                    self.sink.send_rich_message(player, &entry.to_rich())
                }
                other => self.sink.send_message(player, &other.plain_text()),
            }
        }
    }
}

fn unavailable(reason: &str) -> Startup {
    warn!("Mark service unavailable: {reason}");
    Startup::Unavailable {
        reason: reason.to_string(),
    }
}

/// Whether a chat line is meant for the mark service at all.
///
/// Ordinary chat is not a command and gets no reply.
pub fn addresses_marks(text: &str) -> bool {
    text.trim_start().starts_with(COMMAND_PREFIX)
}

impl ChatListener for MarkService {
    fn on_chat(&mut self, sender: &Sender, text: &str) {
        if addresses_marks(text) {
            self.handle_line(sender, text);
        }
    }
}
