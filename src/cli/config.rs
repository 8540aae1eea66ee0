//
//  confluence-sdk
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Configuration commands
//!
//! Read and write the TOML config file by dotted key:
//!
//! ```text
//! confluence config set site.url https://acme.atlassian.net
//! confluence config set site.username me@example.com
//! confluence config set site.token <api-token>
//! confluence config show
//! ```
//!
//! `show` and `get` display the file merged with environment overrides;
//! tokens are always masked.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::config::{env_override_for, Config, CONFIG_KEYS};
use crate::output::{print_header, OutputWriter};

use super::GlobalOptions;

/// Manage configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print the config file location
    Path,

    /// Show the effective configuration
    #[command(visible_alias = "ls")]
    Show,

    /// Print one configuration value
    Get(GetArgs),

    /// Set one configuration value
    Set(SetArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Dotted key, e.g. site.url
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Dotted key, e.g. site.url
    pub key: String,

    /// New value
    pub value: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Path => self.path(global),
            ConfigSubcommand::Show => self.show(global),
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
        }
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let config_path = Config::config_path()?;

        if global.json {
            let result = serde_json::json!({
                "path": config_path.display().to_string(),
                "exists": config_path.exists(),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            OutputWriter::table().write_info(&config_path.display().to_string());
        }

        Ok(())
    }

    fn show(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;

        if global.json {
            let values: serde_json::Map<String, serde_json::Value> = CONFIG_KEYS
                .iter()
                .map(|key| (key.to_string(), serde_json::json!(config.get(key))))
                .collect();
            println!("{}", serde_json::to_string_pretty(&values)?);
            return Ok(());
        }

        println!();
        print_header("Configuration");
        for key in CONFIG_KEYS {
            match config.get(key) {
                Some(value) => println!("{} = {}", style(key).cyan(), value),
                None => println!("{} = {}", style(key).cyan(), style("(not set)").dim()),
            }
        }
        println!();
        Ok(())
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        if !CONFIG_KEYS.contains(&args.key.as_str()) {
            anyhow::bail!(
                "Unknown config key '{}'. Valid keys: {}",
                args.key,
                CONFIG_KEYS.join(", ")
            );
        }
        let config = global.load_config()?;
        let value = config.get(&args.key);

        if global.json {
            let result = serde_json::json!({
                "key": args.key,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if let Some(v) = value {
            println!("{}", v);
        }

        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        // Only the file is rewritten; environment overrides stay out of it.
        let mut config = Config::load()?;
        config.set(&args.key, args.value.clone())?;
        config.save()?;
        tracing::debug!(key = %args.key, "config value saved");

        let shown = config.get(&args.key).unwrap_or_default();
        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
                "value": shown,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            let output = global.output();
            output.write_success(&format!("Set {} = {}", style(&args.key).cyan(), shown));
            if let Some(var) = env_override_for(&args.key) {
                let overridden = std::env::var(var).is_ok_and(|v| !v.trim().is_empty());
                if overridden {
                    output.write_warning(&format!("{var} is set and overrides {}", args.key));
                }
            }
        }

        Ok(())
    }
}
