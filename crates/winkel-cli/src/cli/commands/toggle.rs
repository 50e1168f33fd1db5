//! `winkel toggle <list-id> <product-id>` – flip the purchased flag.

use anyhow::Result;
use std::io::Write;
use winkel_core::backend::Backend;
use winkel_core::model::RowId;

use super::load_detail;
use crate::cli::render;

pub fn run_toggle<B: Backend, W: Write>(
    backend: B,
    list_id: &RowId,
    product_id: &RowId,
    out: &mut W,
) -> Result<()> {
    let mut view = load_detail(backend, list_id)?;
    let purchased = view.toggle_product(product_id)?;
    let name = view
        .find(product_id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| product_id.to_string());
    writeln!(out, "{}: {}", name, render::purchased_label(purchased))?;
    Ok(())
}
