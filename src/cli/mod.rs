//
//  confluence-sdk
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # CLI Module
//!
//! Command definitions for the `confluence` binary, using the clap derive API.
//!
//! ## Command Structure
//!
//! ```text
//! confluence
//! ├── space       list | view | create
//! ├── page        list
//! ├── config      path | show | get | set
//! ├── completion  bash | zsh | fish | powershell
//! └── version
//! ```
//!
//! ## Global Options
//!
//! | Option | Description |
//! |--------|-------------|
//! | `--site` | Site URL, overriding config and `CONFLUENCE_URL` |
//! | `--json` | Print the raw API payload instead of tables |

mod completion;
mod config;
mod page;
mod space;

pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use page::PageCommand;
pub use space::SpaceCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::AsyncConfluence;
use crate::config::Config;
use crate::output::{OutputFormat, OutputWriter};

/// Work with Confluence Cloud from the command line
#[derive(Parser, Debug)]
#[command(
    name = "confluence",
    version,
    about = "Work with Confluence Cloud from the command line",
    long_about = "confluence is a CLI for the Confluence Cloud REST API v2.\n\n\
                  It lists and creates spaces and lists pages, printing tables or raw JSON.",
    propagate_version = true,
    after_help = "Use 'confluence <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options accepted by every command.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Confluence site URL, e.g. https://acme.atlassian.net
    #[arg(long, global = true)]
    pub site: Option<String>,

    /// Output the raw API payload as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Output writer for the selected format.
    pub fn output(&self) -> OutputWriter {
        if self.json {
            OutputWriter::new(OutputFormat::Json)
        } else {
            OutputWriter::new(OutputFormat::Table)
        }
    }

    /// Config file, then environment, then `--site`.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load()?.with_env_overrides();
        if let Some(site) = &self.site {
            config.site.url = Some(site.trim_end_matches('/').to_string());
        }
        Ok(config)
    }

    /// Async client for the effective configuration.
    pub fn client(&self) -> Result<AsyncConfluence> {
        let config = self.load_config()?;
        if config.credential().is_none() {
            tracing::debug!("no credentials configured; sending anonymous requests");
        }
        AsyncConfluence::from_config(&config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with spaces
    Space(SpaceCommand),

    /// Work with pages
    Page(PageCommand),

    /// Manage configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Show version information
    Version,
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
    fn test_global_json_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["confluence", "page", "list", "--json"]).unwrap();
        assert!(cli.global.json);
        assert_eq!(cli.global.output().format(), OutputFormat::Json);
    }

    #[test]
    fn test_site_flag() {
        let cli = Cli::try_parse_from([
            "confluence",
            "--site",
            "https://acme.atlassian.net",
            "space",
            "list",
        ])
        .unwrap();
        assert_eq!(cli.global.site.as_deref(), Some("https://acme.atlassian.net"));
    }
}
