//! Path routing between the two views: `""` is the overview, `lijst/<id>` a list.

use crate::model::RowId;

/// Path prefix of a list detail route.
const DETAIL_PREFIX: &str = "lijst/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Overview,
    Detail(RowId),
}

impl Route {
    /// Resolves a path; unknown paths redirect to the overview.
    pub fn parse(path: &str) -> Route {
        let path = path.trim().trim_matches('/');
        match path.strip_prefix(DETAIL_PREFIX) {
            Some(id) if !id.is_empty() && !id.contains('/') => Route::Detail(RowId::from(id)),
            _ => Route::Overview,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Overview => "/".to_string(),
            Route::Detail(id) => format!("/{}{}", DETAIL_PREFIX, id),
        }
    }
}
