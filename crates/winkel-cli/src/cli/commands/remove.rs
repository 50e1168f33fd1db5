//! `winkel remove <list-id> <product-id>` – delete a product after confirmation.

use anyhow::{Context, Result};
use std::io::Write;
use winkel_core::backend::Backend;
use winkel_core::model::RowId;

use super::load_detail;
use crate::cli::{prompt, render};

pub fn run_remove<B: Backend, W: Write>(
    backend: B,
    list_id: &RowId,
    product_id: &RowId,
    yes: bool,
    out: &mut W,
) -> Result<()> {
    let mut view = load_detail(backend, list_id)?;
    let name = match view.find(product_id) {
        Some(p) => p.name.clone(),
        None => anyhow::bail!("product {} is not on this list", product_id),
    };
    if !prompt::confirm("Delete this product?", yes).context("reading confirmation")? {
        writeln!(out, "Cancelled.")?;
        return Ok(());
    }
    view.delete_product(product_id)?;
    writeln!(out, "Removed \"{}\"", name)?;
    if let Some(list) = &view.list {
        write!(out, "{}", render::list_detail(list, &view.products))?;
    }
    Ok(())
}
