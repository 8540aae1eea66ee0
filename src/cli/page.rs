//
//  confluence-sdk
//  cli/page.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Page commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::methods::page::{
    BodyFormat, ContentStatus, GetPagesRequest, GetPagesResponse, PageSort,
};
use crate::api::methods::Version;
use crate::api::model::Request;
use crate::output::{display_field, format_status, truncate, TableBuilder, TableOutput};

use super::GlobalOptions;

/// Work with pages
#[derive(Args, Debug)]
pub struct PageCommand {
    #[command(subcommand)]
    pub command: PageSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PageSubcommand {
    /// List pages
    #[command(visible_alias = "ls")]
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only pages in these space IDs
    #[arg(long, short = 's', value_delimiter = ',')]
    pub space_id: Vec<i64>,

    /// Only pages with these IDs
    #[arg(long, value_delimiter = ',')]
    pub id: Vec<i64>,

    /// Exact page title
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// Only pages with these statuses
    #[arg(long, value_delimiter = ',')]
    pub status: Vec<ContentStatus>,

    /// Sort order, e.g. title or -modified-date
    #[arg(long, allow_hyphen_values = true)]
    pub sort: Option<PageSort>,

    /// Include bodies in this representation (storage, atlas_doc_format)
    #[arg(long)]
    pub body_format: Option<BodyFormat>,

    /// Cursor from a previous page
    #[arg(long)]
    pub cursor: Option<String>,

    /// Maximum number of pages to list
    #[arg(long, short = 'l', default_value = "25")]
    pub limit: u32,
}

impl PageCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            PageSubcommand::List(args) => self.list(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let response = list_request(args).send(&client).await?;
        global.output().write(&response)
    }
}

fn list_request(args: &ListArgs) -> GetPagesRequest {
    GetPagesRequest {
        id: (!args.id.is_empty()).then(|| args.id.clone()),
        space_id: (!args.space_id.is_empty()).then(|| args.space_id.clone()),
        sort: args.sort,
        status: (!args.status.is_empty()).then(|| args.status.clone()),
        title: args.title.clone(),
        body_format: args.body_format,
        subtype: None,
        cursor: args.cursor.clone(),
        limit: Some(args.limit),
    }
}

impl TableOutput for GetPagesResponse {
    fn print_table(&self, color: bool) {
        let pages = self.results().unwrap_or(&[]);
        if pages.is_empty() {
            println!("No pages found");
            return;
        }

        let mut table = TableBuilder::new()
            .color(color)
            .headers(["ID", "TITLE", "SPACE", "STATUS", "VERSION"]);
        for page in pages {
            table = table.row([
                display_field(page.id()),
                truncate(&display_field(page.title()), 50),
                display_field(page.space_id()),
                format_status(&display_field(page.status()), color),
                display_field(page.version().and_then(Version::number)),
            ]);
        }
        table.print();

        if let Some(cursor) = self.next_cursor() {
            println!();
            println!("More pages available: --cursor {}", cursor);
        }
    }
}
