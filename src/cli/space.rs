//
//  confluence-sdk
//  cli/space.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Space commands
//!
//! Spaces group pages by team or topic. These commands list spaces, show
//! one space with its expanded collections, and create new spaces.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::methods::space::{
    CreateSpaceRequest, DescriptionFormat, GetSpaceRequest, GetSpaceResponse, GetSpacesRequest,
    GetSpacesResponse, Space, SpaceDescriptionInput, SpaceSort, SpaceStatus, SpaceType,
};
use crate::api::methods::BodyType;
use crate::api::model::{Field, Request};
use crate::output::{
    display_field, format_status, print_field, print_header, truncate, TableBuilder, TableOutput,
};

use super::GlobalOptions;

/// Work with spaces
#[derive(Args, Debug)]
pub struct SpaceCommand {
    #[command(subcommand)]
    pub command: SpaceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SpaceSubcommand {
    /// List spaces
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View one space
    View(ViewArgs),

    /// Create a space
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only spaces with these keys
    #[arg(long, short = 'k', value_delimiter = ',')]
    pub keys: Vec<String>,

    /// Filter by space type (global, collaboration, knowledge_base, personal)
    #[arg(long = "type", short = 't')]
    pub space_type: Option<SpaceType>,

    /// Filter by status (current, archived)
    #[arg(long, short = 's')]
    pub status: Option<SpaceStatus>,

    /// Only spaces with these labels
    #[arg(long, value_delimiter = ',')]
    pub labels: Vec<String>,

    /// Sort order, e.g. name or -name
    #[arg(long, allow_hyphen_values = true)]
    pub sort: Option<SpaceSort>,

    /// Cursor from a previous page
    #[arg(long)]
    pub cursor: Option<String>,

    /// Maximum number of spaces to list
    #[arg(long, short = 'l', default_value = "25")]
    pub limit: u32,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Space ID
    pub id: i64,

    /// Include labels
    #[arg(long)]
    pub labels: bool,

    /// Include content properties
    #[arg(long)]
    pub properties: bool,

    /// Include the caller's permitted operations
    #[arg(long)]
    pub operations: bool,

    /// Include permissions
    #[arg(long)]
    pub permissions: bool,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Space name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Space key
    #[arg(long, short = 'k', required_unless_present = "alias")]
    pub key: Option<String>,

    /// Space alias, used in URLs when no key is given
    #[arg(long)]
    pub alias: Option<String>,

    /// Plain-text description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Make the space visible only to you
    #[arg(long)]
    pub private: bool,

    /// Template to initialize the space from
    #[arg(long)]
    pub template: Option<String>,
}

impl SpaceCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            SpaceSubcommand::List(args) => self.list(args, global).await,
            SpaceSubcommand::View(args) => self.view(args, global).await,
            SpaceSubcommand::Create(args) => self.create(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let response = list_request(args).send(&client).await?;
        global.output().write(&response)
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let response = view_request(args).send(&client).await?;
        global.output().write(&response)
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let space = create_request(args).send(&client).await?;

        let output = global.output();
        if !global.json {
            output.write_success(&format!("Created space {}", display_field(space.key())));
        }
        output.write(&space)
    }
}

fn list_request(args: &ListArgs) -> GetSpacesRequest {
    GetSpacesRequest {
        keys: non_empty(&args.keys),
        space_type: args.space_type,
        status: args.status,
        labels: non_empty(&args.labels),
        sort: args.sort,
        cursor: args.cursor.clone(),
        limit: Some(args.limit),
        ..Default::default()
    }
}

fn view_request(args: &ViewArgs) -> GetSpaceRequest {
    GetSpaceRequest {
        description_format: Some(DescriptionFormat::Plain),
        include_labels: args.labels.then_some(true),
        include_properties: args.properties.then_some(true),
        include_operations: args.operations.then_some(true),
        include_permissions: args.permissions.then_some(true),
        ..GetSpaceRequest::new(args.id)
    }
}

fn create_request(args: &CreateArgs) -> CreateSpaceRequest {
    CreateSpaceRequest {
        name: Some(args.name.clone()),
        key: args.key.clone(),
        alias: args.alias.clone(),
        description: args.description.as_deref().map(SpaceDescriptionInput::plain),
        create_private_space: args.private.then_some(true),
        template_key: args.template.clone(),
        ..Default::default()
    }
}

/// `None` for an empty list so the filter is left out of the query.
fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

impl TableOutput for GetSpacesResponse {
    fn print_table(&self, color: bool) {
        let spaces = self.results().unwrap_or(&[]);
        if spaces.is_empty() {
            println!("No spaces found");
            return;
        }

        let mut table = TableBuilder::new()
            .color(color)
            .headers(["ID", "KEY", "NAME", "TYPE", "STATUS"]);
        for space in spaces {
            table = table.row([
                display_field(space.id()),
                display_field(space.key()),
                truncate(&display_field(space.name()), 40),
                display_field(space.space_type()),
                format_status(&display_field(space.status()), color),
            ]);
        }
        table.print();

        if let Some(cursor) = self.next_cursor() {
            println!();
            println!("More spaces available: --cursor {}", cursor);
        }
    }
}

impl TableOutput for Space {
    fn print_table(&self, color: bool) {
        println!();
        print_header(&display_field(self.name()));
        print_field("ID", &display_field(self.id()), color);
        print_field("Key", &display_field(self.key()), color);
        print_field("Type", &display_field(self.space_type()), color);
        print_field("Status", &format_status(&display_field(self.status()), color), color);
        print_field("Created", &display_field(self.created_at()), color);
        print_field("Homepage", &display_field(self.homepage_id()), color);

        let description = self
            .description()
            .and_then(|d| d.plain())
            .and_then(BodyType::value);
        if let Field::Value(text) = description {
            if !text.is_empty() {
                print_field("Description", text, color);
            }
        }
        if let Field::Value(webui) = self.links().and_then(|l| l.webui()) {
            print_field("Web", webui, color);
        }
        println!();
    }
}

impl TableOutput for GetSpaceResponse {
    fn print_table(&self, color: bool) {
        self.space().print_table(color);

        if let Field::Value(labels) = self.labels() {
            let names: Vec<String> = labels
                .results()
                .unwrap_or(&[])
                .iter()
                .map(|label| display_field(label.name()))
                .collect();
            print_field("Labels", &list_or_none(&names), color);
        }

        if let Field::Value(properties) = self.properties() {
            let keys: Vec<String> = properties
                .results()
                .unwrap_or(&[])
                .iter()
                .map(|property| display_field(property.key()))
                .collect();
            print_field("Properties", &list_or_none(&keys), color);
        }

        if let Field::Value(operations) = self.operations() {
            let allowed: Vec<String> = operations
                .results()
                .unwrap_or(&[])
                .iter()
                .map(|op| {
                    format!(
                        "{} {}",
                        display_field(op.operation()),
                        display_field(op.target_type())
                    )
                })
                .collect();
            print_field("Operations", &list_or_none(&allowed), color);
        }

        if let Field::Value(permissions) = self.permissions() {
            let permissions = permissions.results().unwrap_or(&[]);
            if permissions.is_empty() {
                print_field("Permissions", "none", color);
            } else {
                let mut table = TableBuilder::new()
                    .color(color)
                    .headers(["PRINCIPAL", "TYPE", "OPERATION", "TARGET"]);
                for permission in permissions {
                    let principal = permission.principal();
                    let operation = permission.operation();
                    table = table.row([
                        display_field(principal.and_then(|p| p.id())),
                        display_field(principal.and_then(|p| p.principal_type())),
                        display_field(operation.and_then(|o| o.key())),
                        display_field(operation.and_then(|o| o.target_type())),
                    ]);
                }
                println!("{}", style("Permissions").bold());
                table.print();
            }
        }
        println!();
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
