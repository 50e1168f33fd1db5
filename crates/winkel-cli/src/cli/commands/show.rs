//! `winkel show <list-id>` – a list and its products.

use anyhow::Result;
use std::io::Write;
use winkel_core::backend::Backend;
use winkel_core::model::RowId;

use super::load_detail;
use crate::cli::render;

pub fn run_show<B: Backend, W: Write>(backend: B, list_id: &RowId, out: &mut W) -> Result<()> {
    let view = load_detail(backend, list_id)?;
    if let Some(list) = &view.list {
        write!(out, "{}", render::list_detail(list, &view.products))?;
    }
    Ok(())
}
