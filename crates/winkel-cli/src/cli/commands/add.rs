//! `winkel add <list-id> <name>` – add a product to a list.

use anyhow::Result;
use std::io::Write;
use winkel_core::backend::Backend;
use winkel_core::model::RowId;
use winkel_core::views::ListsView;

pub fn run_add<B: Backend, W: Write>(
    backend: B,
    list_id: &RowId,
    name: &str,
    out: &mut W,
) -> Result<()> {
    let mut view = ListsView::new(backend);
    if !view.load() {
        anyhow::bail!(view.error.take().unwrap_or_default());
    }
    match view.add_product(list_id, name)? {
        Some(msg) => writeln!(out, "{}", msg)?,
        None => writeln!(out, "Product name is empty; nothing added.")?,
    }
    Ok(())
}
