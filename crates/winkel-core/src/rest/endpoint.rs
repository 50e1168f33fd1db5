//! Table endpoint URLs with PostgREST filters.

use url::Url;

use crate::model::RowId;

/// Path of the REST interface below the backend base URL.
const REST_PREFIX: &str = "rest/v1";

/// Builds `<base>/rest/v1/<table>` for the configured backend.
pub(crate) fn table_url(base: &str, table: &str) -> Result<Url, url::ParseError> {
    let base = base.trim().trim_end_matches('/');
    Url::parse(&format!("{}/{}/{}", base, REST_PREFIX, table))
}

/// `?select=*` on the whole table.
pub(crate) fn select_all(mut url: Url) -> Url {
    url.query_pairs_mut().append_pair("select", "*");
    url
}

/// `?<column>=eq.<id>`, the row filter used by PATCH and DELETE.
pub(crate) fn filter_eq(mut url: Url, column: &str, id: &RowId) -> Url {
    url.query_pairs_mut()
        .append_pair(column, &format!("eq.{}", id));
    url
}
