//! Subcommand execution.

use ca_core::orchestrator::Orchestrator;
use ca_protocol::AgentRequest;
use color_eyre::eyre::WrapErr;
use colored::Colorize;
use serde::Serialize;

use crate::args::Command;

/// Run `command`, printing JSON to stdout and a status line to stderr.
///
/// Returns whether the command succeeded from the caller's point of view.
pub async fn run(orchestrator: &Orchestrator, command: Command) -> color_eyre::Result<bool> {
    match command {
        Command::Agents { category } => {
            let agents = match category {
                Some(category) => orchestrator.list_agents_by_category(category),
                None => orchestrator.list_agents(),
            };
            print_json(&agents)?;
            eprintln!("{} {} agent(s)", "ok".green().bold(), agents.len());
            Ok(true)
        }
        Command::Tools => {
            let tools = orchestrator.list_all_tools();
            print_json(&tools)?;
            eprintln!("{} {} tool(s)", "ok".green().bold(), tools.len());
            Ok(true)
        }
        Command::FindTool { name } => match orchestrator.find_agent_by_tool(&name) {
            Some(agent) => {
                print_json(&agent.descriptor())?;
                Ok(true)
            }
            None => {
                eprintln!("{} no agent provides tool '{name}'", "not found".red().bold());
                Ok(false)
            }
        },
        Command::Route { agent, action, payload } => {
            let payload: serde_json::Value = serde_json::from_str(&payload)
                .wrap_err_with(|| format!("--payload is not valid JSON: {payload}"))?;
            let response = orchestrator
                .route(&agent, &AgentRequest::new(action, payload))
                .await;
            print_json(&response)?;

            let status = if response.success() {
                "success".green().bold()
            } else {
                "failure".red().bold()
            };
            eprintln!(
                "{status} handled by {} in {}ms",
                response.handled_by.cyan(),
                response.duration()
            );
            Ok(response.success())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> color_eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
