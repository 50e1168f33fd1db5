//! `winkel create-list <name>` – create a list and show the refreshed overview.

use anyhow::Result;
use std::io::Write;
use winkel_core::backend::Backend;
use winkel_core::views::ListsView;

use crate::cli::render;

pub fn run_create_list<B: Backend, W: Write>(backend: B, name: &str, out: &mut W) -> Result<()> {
    let mut view = ListsView::new(backend);
    if !view.create_list(name)? {
        writeln!(out, "List name is empty; nothing created.")?;
        return Ok(());
    }
    writeln!(out, "Created list \"{}\"", name.trim())?;
    if let Some(err) = &view.error {
        // Created, but the reload failed.
        writeln!(out, "! {}", err)?;
        return Ok(());
    }
    write!(out, "{}", render::lists_table(&view.lists))?;
    Ok(())
}
