//! `oxnetwork` - command line client for 0x Network agents
//!
//! Usage:
//!   oxnetwork create <name>
//!   oxnetwork query <agent_id> <thread_id> <message...>
//!   oxnetwork chat <agent_id> <thread_id>
//!
//! Options:
//!   --json-logs   Emit logs as JSON
//!
//! The API key is read from `OXNETWORK_API_KEY`. `OXNETWORK_BASE_URL` and
//! `OXNETWORK_TIMEOUT_SECS` override the endpoint and request timeout.

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use oxnetwork_sdk::cli::{ChatSession, Console};
use oxnetwork_sdk::client::{AgentApi, AgentClient};
use oxnetwork_sdk::logging::{self, LogFormat};

const USAGE: &str = "usage:
  oxnetwork create <name>
  oxnetwork query <agent_id> <thread_id> <message...>
  oxnetwork chat <agent_id> <thread_id>";

#[tokio::main]
async fn main() -> ExitCode {
    let console = Console::new();

    match run(&console).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            console.print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(console: &Console) -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let json_logs = args.iter().any(|a| a == "--json-logs");
    args.retain(|a| a != "--json-logs");

    let format = if json_logs { LogFormat::Json } else { LogFormat::Pretty };
    logging::init_logging(format)?;

    let Some(command) = args.first().cloned() else {
        bail!("missing command\n{}", USAGE);
    };

    let api_key = env::var("OXNETWORK_API_KEY").context("OXNETWORK_API_KEY environment variable not set")?;
    let client = AgentClient::from_env()?;

    match (command.as_str(), &args[1..]) {
        ("create", [name]) => {
            let handle = client.create(&api_key, name, None).await?;
            console.print_system("Agent created");
            console.print_handle(&handle);
        }
        ("query", [agent_id, thread_id, message @ ..]) if !message.is_empty() => {
            let handle = client.get(&api_key, parse_agent_id(agent_id)?, thread_id, None);
            let reply = client.query(&handle, &message.join(" ")).await?;
            console.print_agent(&reply);
        }
        ("chat", [agent_id, thread_id]) => {
            let handle = client.get(&api_key, parse_agent_id(agent_id)?, thread_id, None);
            let api: Arc<dyn AgentApi> = Arc::new(client);
            let session = ChatSession::new(api, handle, Console::new());
            let answered = session.run(std::io::stdin().lock()).await?;
            tracing::info!(answered, "Chat finished");
        }
        _ => bail!("invalid arguments\n{}", USAGE),
    }

    Ok(())
}

fn parse_agent_id(raw: &str) -> Result<u64> {
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => bail!("agent_id must be a positive integer, got {:?}", raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_agent_id() {
        assert_eq!(parse_agent_id("42").unwrap(), 42);
        assert!(parse_agent_id("0").is_err());
        assert!(parse_agent_id("-3").is_err());
        assert!(parse_agent_id("abc").is_err());
    }
}
