//! Rows of the two backend tables and their identifiers.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Row identifier as delivered by the backend: integer key or text (e.g. UUID).
///
/// Comparison is loose: `Int(5)` equals `Text("5")`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Text(String),
}

impl PartialEq for RowId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RowId::Int(a), RowId::Int(b)) => a == b,
            (RowId::Text(a), RowId::Text(b)) => a == b,
            (RowId::Int(n), RowId::Text(t)) | (RowId::Text(t), RowId::Int(n)) => {
                matches!(t.trim().parse::<i64>(), Ok(m) if m == *n)
            }
        }
    }
}

impl Eq for RowId {}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(n) => write!(f, "{}", n),
            RowId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for RowId {
    type Err = Infallible;

    /// Integers become `Int`, anything else is kept as trimmed text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<i64>() {
            Ok(n) => RowId::Int(n),
            Err(_) => RowId::Text(s.to_string()),
        })
    }
}

impl From<i64> for RowId {
    fn from(n: i64) -> Self {
        RowId::Int(n)
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(id) => id,
            Err(never) => match never {},
        }
    }
}

/// A named shopping list (`Winkelwagens` row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: RowId,
    #[serde(rename = "winkelwagen")]
    pub name: String,
}

/// A product on a list (`Products` row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: RowId,
    #[serde(rename = "product")]
    pub name: String,
    #[serde(rename = "winkelwagen_id")]
    pub list_id: RowId,
    /// Missing or null on the wire means not purchased.
    #[serde(rename = "gekocht", default, deserialize_with = "null_as_false")]
    pub purchased: bool,
}

fn null_as_false<'de, D>(de: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(de)?.unwrap_or(false))
}

/// Insert payload for a new list.
#[derive(Debug, Serialize)]
pub(crate) struct NewList<'a> {
    pub winkelwagen: &'a str,
}

/// Insert payload for a new product; always starts unpurchased.
#[derive(Debug, Serialize)]
pub(crate) struct NewProduct<'a> {
    pub product: &'a str,
    pub winkelwagen_id: &'a RowId,
    pub gekocht: bool,
}

/// Update payload for the purchased flag.
#[derive(Debug, Serialize)]
pub(crate) struct PurchasedPatch {
    pub gekocht: bool,
}
