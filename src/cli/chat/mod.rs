pub mod command;
pub mod conversation_state;
pub mod paths;
pub mod prompt;

use std::io::Write;
use std::process::ExitCode;

use color_print::cformat;
use command::Command;
use conversation_state::ConversationState;
use eyre::Result;
use prompt::generate_prompt;
use rustyline::error::ReadlineError;
use tracing::{debug, info};

use crate::responder::{Responder, ResponseSelector};

fn welcome_text() -> String {
    cformat!(
        "
<bold>Exercise Health Assistant</bold>

Things to try
• I'm a beginner, where do I start?
• How often should I work out?
• What should I eat before training?

<dim>/help         Show the help dialogue</dim>
<dim>/quit         Quit the application</dim>
"
    )
}

fn help_text() -> String {
    cformat!(
        "
<bold>Exercise Health Assistant</bold>

/clear        Clear the conversation history
/history      Show the conversation so far
/save FILE    Save the conversation as JSON
/help         Show this help dialogue
/quit         Quit the application
"
    )
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct ChatContext {
    output: Box<dyn Write>,
    input: Option<String>,
    prompt: String,
    conversation_state: ConversationState,
    responder: Box<dyn Responder>,
}

impl ChatContext {
    pub fn new(
        output: Box<dyn Write>,
        input: Option<String>,
        prompt: String,
        responder: Box<dyn Responder>,
    ) -> Self {
        Self {
            output,
            input,
            prompt,
            conversation_state: ConversationState::new(),
            responder,
        }
    }

    pub async fn run(&mut self) -> Result<ExitCode> {
        // Single query
        if let Some(input) = self.input.take() {
            self.process_chat_input(input.trim()).await?;
            return Ok(ExitCode::SUCCESS);
        }

        self.print_welcome()?;
        self.run_interactive().await?;

        Ok(ExitCode::SUCCESS)
    }

    fn print_welcome(&mut self) -> Result<()> {
        writeln!(self.output, "{}", welcome_text())?;
        let greeting = ResponseSelector::new().select(self.conversation_state.messages());
        writeln!(self.output, "{}\n", greeting)?;
        Ok(())
    }

    async fn run_interactive(&mut self) -> Result<()> {
        let mut rl = prompt::rl()?;

        loop {
            let user_turns = self
                .conversation_state
                .messages()
                .iter()
                .filter(|m| m.is_from_user())
                .count();
            let prompt_text = generate_prompt(&self.prompt, user_turns);

            match rl.readline(&prompt_text) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }

                    rl.add_history_entry(line.as_str());

                    match self.handle_input(&line).await {
                        Ok(Flow::Quit) => break,
                        Ok(Flow::Continue) => {}
                        Err(e) => writeln!(self.output, "Error: {}", e)?,
                    }
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => {
                    writeln!(self.output, "Error: {}", e)?;
                    break;
                }
            }
        }

        info!(
            "Chat session ended after {} messages",
            self.conversation_state.len()
        );
        Ok(())
    }

    async fn handle_input(&mut self, input: &str) -> Result<Flow> {
        match Command::parse(input)? {
            Command::Help => {
                writeln!(self.output, "{}", help_text())?;
            }
            Command::Clear => {
                self.conversation_state.clear();
                writeln!(self.output, "Conversation cleared.")?;
            }
            Command::History => self.print_history()?,
            Command::Save { path } => {
                let path = paths::sanitize_path(&path);
                self.conversation_state.save(&path)?;
                writeln!(self.output, "Conversation saved to {}", path.display())?;
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Ask { text } => self.process_chat_input(&text).await?,
        }

        Ok(Flow::Continue)
    }

    fn print_history(&mut self) -> Result<()> {
        if self.conversation_state.is_empty() {
            writeln!(self.output, "No messages yet.")?;
            return Ok(());
        }

        for message in self.conversation_state.messages() {
            writeln!(self.output, "[{}] {}", message.sender, message.text)?;
        }
        Ok(())
    }

    async fn process_chat_input(&mut self, input: &str) -> Result<()> {
        self.conversation_state.add_user_message(input);
        debug!("User message #{}: {}", self.conversation_state.len(), input);

        let response = self
            .responder
            .respond(self.conversation_state.messages())
            .await?;

        writeln!(self.output, "{}", response)?;
        self.conversation_state.add_assistant_message(&response);

        Ok(())
    }
}
