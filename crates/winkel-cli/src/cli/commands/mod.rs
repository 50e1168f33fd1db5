//! CLI command handlers. Each runs on the blocking pool and drives one view.

mod add;
mod create_list;
mod delete_list;
mod lists;
mod purchased;
mod remove;
mod show;
mod toggle;

pub use add::run_add;
pub use create_list::run_create_list;
pub use delete_list::run_delete_list;
pub use lists::run_lists;
pub use purchased::run_set_purchased;
pub use remove::run_remove;
pub use show::run_show;
pub use toggle::run_toggle;

use anyhow::Result;
use winkel_core::backend::Backend;
use winkel_core::model::RowId;
use winkel_core::views::ListDetailView;

/// Loads a list detail view, failing with the view's error message.
fn load_detail<B: Backend>(backend: B, list_id: &RowId) -> Result<ListDetailView<B>> {
    let mut view = ListDetailView::new(backend);
    if !view.load(list_id) {
        let msg = view.error.take().unwrap_or_else(|| "could not load list".to_string());
        anyhow::bail!(msg);
    }
    Ok(view)
}
