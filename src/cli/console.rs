use colored::*;
use std::io::{self, BufRead, Write};

use crate::client::AgentHandle;

/// Console handles all terminal I/O with colored formatting
pub struct Console {
    user_color: Color,
    agent_color: Color,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Create a new Console with default colors
    pub fn new() -> Self {
        Self {
            user_color: Color::Cyan,
            agent_color: Color::Green,
        }
    }

    /// Print an agent reply with colored formatting
    pub fn print_agent(&self, reply: &str) {
        println!(
            "{} {}",
            "Agent:".color(self.agent_color).bold(),
            reply.color(self.agent_color)
        );
    }

    /// Print the identifiers of a handle
    pub fn print_handle(&self, handle: &AgentHandle) {
        println!("{} {}", "agent_id: ".bold(), handle.agent_id());
        println!("{} {}", "thread_id:".bold(), handle.thread_id());
        println!("{} {}", "base_url: ".bold(), handle.base_url().bright_black());
    }

    /// Print a system message (errors, info, etc.)
    pub fn print_system(&self, message: &str) {
        println!("{} {}", "System:".yellow().bold(), message);
    }

    /// Print an error message
    pub fn print_error(&self, error: &str) {
        eprintln!("{} {}", "Error:".red().bold(), error);
    }

    /// Prompt and read one line from `input`, without its line ending
    ///
    /// Returns `None` at end of input.
    pub fn read_input<R: BufRead>(&self, input: &mut R) -> io::Result<Option<String>> {
        print!("{} ", ">".color(self.user_color).bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Print a welcome banner for a chat with `handle`
    pub fn print_banner(&self, handle: &AgentHandle) {
        println!("{}", "=".repeat(60).bright_blue());
        println!(
            "{}",
            format!("  0x Network Agent #{}", handle.agent_id())
                .bright_blue()
                .bold()
        );
        println!("{}", "=".repeat(60).bright_blue());
        println!();
        println!("Type your message and press Enter. Type 'exit' or 'quit' to end the session.");
        println!();
    }

    /// Print a separator line
    pub fn print_separator(&self) {
        println!("{}", "-".repeat(60).bright_black());
    }
}
