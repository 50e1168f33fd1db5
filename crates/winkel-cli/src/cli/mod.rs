//! CLI for the Winkel shopping-list client.

mod commands;
mod prompt;
mod render;
mod shell;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use winkel_core::config;
use winkel_core::model::RowId;
use winkel_core::rest::RestClient;

use commands::{
    run_add, run_create_list, run_delete_list, run_lists, run_remove, run_set_purchased,
    run_show, run_toggle,
};

/// Top-level CLI for Winkel.
#[derive(Debug, Parser)]
#[command(name = "winkel")]
#[command(about = "Winkel: shopping lists on a hosted REST backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show all lists.
    Lists,

    /// Create a new list.
    CreateList {
        /// Name of the list.
        name: String,
    },

    /// Delete a list.
    DeleteList {
        /// List identifier.
        id: RowId,
        /// Do not ask for confirmation.
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show a list and its products.
    Show {
        /// List identifier.
        id: RowId,
    },

    /// Add a product to a list.
    Add {
        /// List identifier.
        list_id: RowId,
        /// Product name.
        name: String,
    },

    /// Flip the purchased flag of a product on a list.
    Toggle {
        /// List identifier.
        list_id: RowId,
        /// Product identifier.
        product_id: RowId,
    },

    /// Mark a product as purchased.
    Check {
        /// Product identifier.
        product_id: RowId,
    },

    /// Mark a product as not purchased.
    Uncheck {
        /// Product identifier.
        product_id: RowId,
    },

    /// Remove a product from a list.
    Remove {
        /// List identifier.
        list_id: RowId,
        /// Product identifier.
        product_id: RowId,
        /// Do not ask for confirmation.
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Interactive session over the lists overview and list detail.
    Shell,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!(
            backend = %cfg.backend_url,
            lists = %cfg.lists_table,
            products = %cfg.products_table,
            "loaded config"
        );
        cfg.ensure_backend()?;
        let client = RestClient::new(&cfg);

        // REST calls and prompts block; keep them off the runtime threads.
        tokio::task::spawn_blocking(move || cli.command.dispatch(&client))
            .await
            .context("command task join")?
    }

    fn dispatch(self, client: &RestClient) -> Result<()> {
        let out = &mut io::stdout();
        match self {
            CliCommand::Lists => run_lists(client, out),
            CliCommand::CreateList { name } => run_create_list(client, &name, out),
            CliCommand::DeleteList { id, yes } => run_delete_list(client, &id, yes, out),
            CliCommand::Show { id } => run_show(client, &id, out),
            CliCommand::Add { list_id, name } => run_add(client, &list_id, &name, out),
            CliCommand::Toggle {
                list_id,
                product_id,
            } => run_toggle(client, &list_id, &product_id, out),
            CliCommand::Check { product_id } => run_set_purchased(client, &product_id, true, out),
            CliCommand::Uncheck { product_id } => {
                run_set_purchased(client, &product_id, false, out)
            }
            CliCommand::Remove {
                list_id,
                product_id,
                yes,
            } => run_remove(client, &list_id, &product_id, yes, out),
            CliCommand::Shell => shell::run_shell(client),
        }
    }
}

#[cfg(test)]
mod tests;
