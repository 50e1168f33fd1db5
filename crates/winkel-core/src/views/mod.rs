//! View state for the two screens: the lists overview and a single list.
//!
//! Views hold what the user sees and translate actions into backend calls.
//! Load failures are kept in `error` for display; failed actions return an
//! [`ActionError`](crate::error::ActionError) to surface to the user. After a
//! mutation the affected collection is reloaded in full.

mod detail;
mod lists;

#[cfg(test)]
mod fake;

pub use detail::ListDetailView;
pub use lists::ListsView;

use crate::error::{ActionError, ApiError};
use crate::model::RowId;

fn not_found(kind: &'static str, id: &RowId) -> ApiError {
    ApiError::NotFound {
        kind,
        id: id.to_string(),
    }
}

fn action(message: &'static str) -> impl FnOnce(ApiError) -> ActionError {
    move |e| {
        tracing::error!("{}: {}", message, e);
        ActionError::new(message, e)
    }
}
