//! Interactive chat loop
//!
//! Reads lines, sends each one as a query to a single agent, and prints the
//! reply. The agent keeps conversation context server-side; nothing is
//! remembered here between turns.

use std::io::BufRead;
use std::sync::Arc;

use anyhow::Result;

use super::console::Console;
use crate::client::{AgentApi, AgentHandle};

/// A chat with one agent over any `AgentApi`
pub struct ChatSession {
    api: Arc<dyn AgentApi>,
    handle: AgentHandle,
    console: Console,
}

impl ChatSession {
    pub fn new(api: Arc<dyn AgentApi>, handle: AgentHandle, console: Console) -> Self {
        Self {
            api,
            handle,
            console,
        }
    }

    pub fn handle(&self) -> &AgentHandle {
        &self.handle
    }

    /// Run until `exit`, `quit` or end of input
    ///
    /// Failed queries are reported and the loop continues. Returns the number of
    /// queries answered successfully.
    pub async fn run<R: BufRead>(&self, mut input: R) -> Result<usize> {
        self.console.print_banner(&self.handle);
        let mut answered = 0;

        while let Some(line) = self.console.read_input(&mut input)? {
            match line.trim() {
                "" => continue,
                cmd if cmd.eq_ignore_ascii_case("exit") || cmd.eq_ignore_ascii_case("quit") => break,
                _ => {}
            }

            match self.api.query(&self.handle, &line).await {
                Ok(reply) => {
                    self.console.print_agent(&reply);
                    answered += 1;
                }
                Err(e) => {
                    tracing::warn!(agent_id = self.handle.agent_id(), error = %e, "Chat query failed");
                    self.console.print_error(&e.to_string());
                }
            }
            self.console.print_separator();
        }

        self.console.print_system("Session ended");
        Ok(answered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, AgentResult, RemoteOperationError};
    use async_trait::async_trait;
    use std::io::Cursor;
    use std::sync::Mutex;

    /// Echoes messages back and records what it was asked
    #[derive(Default)]
    struct EchoApi {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AgentApi for EchoApi {
        async fn create(
            &self,
            api_key: &str,
            _name: &str,
            base_url: Option<&str>,
        ) -> AgentResult<AgentHandle> {
            Ok(AgentHandle::new(api_key, 1, "t-1", base_url))
        }

        async fn query(&self, _handle: &AgentHandle, message: &str) -> AgentResult<String> {
            self.seen.lock().unwrap().push(message.to_string());
            if message == "fail" {
                return Err(RemoteOperationError::new(Action::QueryAgent, Some("rejected".into())).into());
            }
            Ok(format!("echo: {}", message))
        }
    }

    #[tokio::test]
    async fn test_chat_stops_at_quit() {
        let api = Arc::new(EchoApi::default());
        let handle = AgentHandle::new("key", 1, "t-1", None);
        let session = ChatSession::new(api.clone(), handle, Console::new());

        let input = Cursor::new("hello\n  \nfail\r\n  indented text \n QUIT \nnever sent\n");
        let answered = session.run(input).await.unwrap();

        assert_eq!(answered, 2);
        assert_eq!(
            *api.seen.lock().unwrap(),
            vec!["hello", "fail", "  indented text "]
        );
    }

    #[tokio::test]
    async fn test_chat_stops_at_end_of_input() {
        let api = Arc::new(EchoApi::default());
        let handle = AgentHandle::new("key", 1, "t-1", None);
        let session = ChatSession::new(api.clone(), handle, Console::new());

        let answered = session.run(Cursor::new("only line")).await.unwrap();

        assert_eq!(answered, 1);
        assert_eq!(session.handle().agent_id(), 1);
    }
}
