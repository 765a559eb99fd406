//! Command-line arguments.

use ca_protocol::AgentCategory;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "classroom-agents", version, about = "Inspect and call classroom agents")]
pub struct Cli {
    /// Project root containing the `.classroom-agents/` directory
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List registered agents
    Agents {
        /// Only show agents in this category
        #[arg(long, value_parser = parse_category)]
        category: Option<AgentCategory>,
    },
    /// List every tool of every registered agent
    Tools,
    /// Show the agent that provides a tool
    FindTool { name: String },
    /// Send a request to an agent
    Route {
        agent: String,
        action: String,
        /// JSON payload passed to the tool
        #[arg(long, default_value = "{}")]
        payload: String,
    },
}

fn parse_category(s: &str) -> Result<AgentCategory, String> {
    s.parse().map_err(|e: ca_protocol::ParseCategoryError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_route() {
        let cli = Cli::parse_from([
            "classroom-agents",
            "route",
            "curriculum-design",
            "create_lesson_plan",
            "--payload",
            r#"{"title":"X"}"#,
        ]);
        match cli.command {
            Command::Route { agent, action, payload } => {
                assert_eq!(agent, "curriculum-design");
                assert_eq!(action, "create_lesson_plan");
                assert_eq!(payload, r#"{"title":"X"}"#);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_category_filter() {
        let cli = Cli::parse_from(["classroom-agents", "agents", "--category", "analytics"]);
        assert!(matches!(
            cli.command,
            Command::Agents { category: Some(AgentCategory::Analytics) }
        ));

        let err = Cli::try_parse_from(["classroom-agents", "agents", "--category", "janitor"]);
        assert!(err.is_err());
    }
}
