//! `winkel lists` – show all lists.

use anyhow::Result;
use std::io::Write;
use winkel_core::backend::Backend;
use winkel_core::views::ListsView;

use crate::cli::render;

pub fn run_lists<B: Backend, W: Write>(backend: B, out: &mut W) -> Result<()> {
    let mut view = ListsView::new(backend);
    if !view.load() {
        anyhow::bail!(view.error.take().unwrap_or_default());
    }
    write!(out, "{}", render::lists_table(&view.lists))?;
    Ok(())
}
