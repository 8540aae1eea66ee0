//
//  confluence-sdk
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Confluence SDK
//!
//! A typed client for the Confluence Cloud REST API v2, plus the `confluence`
//! command-line tool built on it.
//!
//! ## Overview
//!
//! Each endpoint is a plain request struct whose fields map 1:1 to query or
//! body parameters. Sending one through a client yields a response wrapper
//! whose accessors map 1:1 to JSON keys. Every accessor reports one of three
//! outcomes, plus a fourth for values of an unexpected type:
//!
//! - [`Field::Value`]: the key is present with a value (including `0`, `""`
//!   and `false`)
//! - [`Field::Null`]: the key is present with JSON `null`
//! - [`Field::Absent`]: the key is not in the payload
//! - [`Field::Mismatch`]: the key is present but its JSON type is not the
//!   declared one
//!
//! Nested objects and lists are wrapped on first access and cached.
//!
//! ## Module Structure
//!
//! - [`api`]: request/response protocol, endpoints and HTTP transports
//! - [`auth`]: static credentials (API token or bearer token)
//! - [`config`]: TOML configuration for the CLI
//! - [`cli`]: command-line interface definitions using clap
//! - [`output`]: table and JSON output for the CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use confluence_sdk::api::methods::page::GetPagesRequest;
//! use confluence_sdk::api::model::Request;
//! use confluence_sdk::api::AsyncConfluence;
//! use confluence_sdk::Config;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::load()?.with_env_overrides();
//! let client = AsyncConfluence::from_config(&config)?;
//!
//! let pages = GetPagesRequest {
//!     limit: Some(10),
//!     ..Default::default()
//! }
//! .send(&client)
//! .await?;
//!
//! for page in pages.results().unwrap_or(&[]) {
//!     println!("{} {}", page.id(), page.title());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`Field::Value`]: api::model::Field::Value
//! [`Field::Null`]: api::model::Field::Null
//! [`Field::Absent`]: api::model::Field::Absent
//! [`Field::Mismatch`]: api::model::Field::Mismatch

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap derive API.
pub mod cli;

/// Typed Confluence v2 API.
pub mod api;

/// Static credentials attached to outgoing requests.
pub mod auth;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/confluence/config.toml`
/// - macOS: `~/Library/Application Support/confluence/config.toml`
/// - Windows: `%APPDATA%\confluence\config.toml`
pub mod config;

/// Output formatting for the CLI: tables for people, JSON for scripts.
pub mod output;

pub use api::model::{Field, Request, Response};
pub use api::{ApiError, AsyncConfluence, Confluence};

/// Re-export of the configuration struct.
///
/// # Example
///
/// ```rust,no_run
/// use confluence_sdk::Config;
///
/// let config = Config::load().expect("Failed to load config");
/// if let Some(url) = config.get("site.url") {
///     println!("Site: {}", url);
/// }
/// ```
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and configuration paths.
pub const APP_NAME: &str = "confluence";

/// Application version constant, taken from Cargo.toml at compile time.
///
/// ```rust
/// use confluence_sdk::VERSION;
///
/// println!("confluence version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts
/// to programmatically detect the outcome of CLI operations.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Authentication required or failed (HTTP 401 or 403).
    ///
    /// Set `site.username` and `site.token`, or `CONFLUENCE_USERNAME` and
    /// `CONFLUENCE_API_TOKEN`.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found (HTTP 404).
    pub const NOT_FOUND: i32 = 8;

    /// API rate limit exceeded (HTTP 429).
    pub const RATE_LIMIT: i32 = 32;

    /// Exit code for an error returned by a command.
    ///
    /// API errors anywhere in the chain map to their dedicated code;
    /// everything else is [`ERROR`].
    ///
    /// ```rust
    /// use confluence_sdk::api::ApiError;
    /// use confluence_sdk::exit_codes;
    ///
    /// let err = anyhow::Error::new(ApiError::from_status(404, String::new()));
    /// assert_eq!(exit_codes::for_error(&err), exit_codes::NOT_FOUND);
    /// ```
    pub fn for_error(err: &anyhow::Error) -> i32 {
        let api_error = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<crate::api::ApiError>());
        match api_error {
            Some(e) if e.is_not_found() => NOT_FOUND,
            Some(e) if e.is_unauthorized() => AUTH_ERROR,
            Some(e) if e.is_rate_limited() => RATE_LIMIT,
            _ => ERROR,
        }
    }
}
