//! `winkel delete-list <id>` – delete a list after confirmation.

use anyhow::{Context, Result};
use std::io::Write;
use winkel_core::backend::Backend;
use winkel_core::model::RowId;
use winkel_core::views::ListsView;

use crate::cli::prompt;

pub fn run_delete_list<B: Backend, W: Write>(
    backend: B,
    id: &RowId,
    yes: bool,
    out: &mut W,
) -> Result<()> {
    let mut view = ListsView::new(backend);
    if !view.load() {
        anyhow::bail!(view.error.take().unwrap_or_default());
    }
    let name = match view.find(id) {
        Some(list) => list.name.clone(),
        None => anyhow::bail!("list not found"),
    };
    let question = format!("Delete \"{}\"?", name);
    if !prompt::confirm(&question, yes).context("reading confirmation")? {
        writeln!(out, "Cancelled.")?;
        return Ok(());
    }
    view.delete_list(id)?;
    writeln!(out, "Deleted list \"{}\"", name)?;
    if let Some(err) = &view.error {
        // Deleted, but the reload failed.
        writeln!(out, "! {}", err)?;
    }
    Ok(())
}
