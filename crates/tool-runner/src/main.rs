//! Command-line host for the agent tool sets.
//!
//! Stands in for the dialogue controller: prints what a controller would
//! hand the model (profiles) and executes single tool calls.

mod agents;
mod config;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::agents::{AgentKind, HostedAgent};
use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "tool-runner")]
#[command(about = "Inspect and call the EPP shopper and provider search tools")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List agents and their tools
    List,

    /// Print an agent's profile (instruction, model, tool definitions) as JSON
    Profile {
        #[arg(value_enum)]
        agent: AgentKind,
    },

    /// Execute one tool call
    Call {
        #[arg(value_enum)]
        agent: AgentKind,

        /// Tool name, e.g. find_providers
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,

        /// Wrap the result in {"tool", "success", "content"} JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    match args.command {
        Command::List => {
            for kind in AgentKind::ALL {
                let agent = HostedAgent::new(kind, &config, false);
                println!("{} ({})", kind, agent.profile().name);
                for tool in &agent.profile().tools {
                    println!(
                        "  - {}: {}",
                        tool.function.name,
                        tool.function.description.as_deref().unwrap_or("")
                    );
                }
            }
        }
        Command::Profile { agent } => {
            let agent = HostedAgent::new(agent, &config, false);
            println!("{}", serde_json::to_string_pretty(agent.profile())?);
        }
        Command::Call {
            agent,
            tool,
            args,
            json,
        } => {
            let agent = HostedAgent::new(agent, &config, json);
            let result = agent.call(&tool, &args).await?;
            println!("{}", result.content);
            if !result.success {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
