use rustyline::{Config, Editor, Result};

/// Prompt shown before each line. Turn count is included once the chat has started.
pub fn generate_prompt(base: &str, user_turns: usize) -> String {
    if user_turns == 0 {
        base.to_string()
    } else {
        format!("[{}] {}", user_turns, base)
    }
}

pub fn rl() -> Result<Editor<()>> {
    let config = Config::builder()
        .history_ignore_space(true)
        .history_ignore_dups(true)
        .auto_add_history(false)
        .build();
    Editor::with_config(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_shows_turns_after_first_message() {
        assert_eq!(generate_prompt("> ", 0), "> ");
        assert_eq!(generate_prompt("> ", 3), "[3] > ");
    }
}
