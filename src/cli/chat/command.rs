use crate::error::ChatError;

/// One line of REPL input, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    History,
    Save { path: String },
    Quit,
    /// Anything that is not a slash command goes to the assistant
    Ask { text: String },
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ChatError> {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Ok(Command::Ask {
                text: trimmed.to_string(),
            });
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name {
            "help" => Ok(Command::Help),
            "clear" => Ok(Command::Clear),
            "history" => Ok(Command::History),
            "quit" | "exit" => Ok(Command::Quit),
            "save" if arg.is_empty() => Err(ChatError::InvalidInput(
                "/save needs a file path".to_string(),
            )),
            "save" => Ok(Command::Save {
                path: arg.to_string(),
            }),
            _ => Err(ChatError::UnknownCommand(format!("/{}", name))),
        }
    }
}
