//! `winkel check|uncheck <product-id>` – set the purchased flag directly.

use anyhow::{Context, Result};
use std::io::Write;
use winkel_core::backend::Backend;
use winkel_core::model::RowId;

use crate::cli::render;

pub fn run_set_purchased<B: Backend, W: Write>(
    backend: B,
    product_id: &RowId,
    purchased: bool,
    out: &mut W,
) -> Result<()> {
    let product = backend
        .get_product(product_id)
        .context("could not update product status")?;
    backend
        .set_purchased(&product.id, purchased)
        .context("could not update product status")?;
    writeln!(out, "{}: {}", product.name, render::purchased_label(purchased))?;
    Ok(())
}
