//! Slash commands typed into the guess box.

#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub label: &'static str,
    pub description: &'static str,
}

const COMMAND_SPECS: &[CommandSpec] = &[
    CommandSpec {
        label: "/new, /reset",
        description: "Start a new round",
    },
    CommandSpec {
        label: "/help",
        description: "List commands and keys",
    },
    CommandSpec {
        label: "/q, /quit",
        description: "Exit the game",
    },
];

#[must_use]
pub fn command_specs() -> &'static [CommandSpec] {
    COMMAND_SPECS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    NewGame,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Known(CommandKind),
    Unknown(String),
}

impl Command {
    /// Parse a draft beginning with `/`. Returns `None` for anything else.
    pub fn parse(raw: &str) -> Option<Self> {
        let body = raw.trim().strip_prefix('/')?;
        let name = body.split_whitespace().next().unwrap_or("");
        let kind = match name.to_ascii_lowercase().as_str() {
            "new" | "reset" => CommandKind::NewGame,
            "help" | "?" => CommandKind::Help,
            "q" | "quit" | "exit" => CommandKind::Quit,
            _ => return Some(Command::Unknown(format!("/{name}"))),
        };
        Some(Command::Known(kind))
    }
}
