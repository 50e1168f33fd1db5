//! REST client for the hosted backend (PostgREST dialect, e.g. Supabase).
//!
//! Uses the curl crate (libcurl) for the HTTP exchange. Every request carries
//! the project API key twice (`apikey` and bearer token), a JSON content type
//! and `Prefer: return=representation` so inserts echo the created row.
//! Calls block the current thread; use `spawn_blocking` from async code.

mod endpoint;
mod request;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

use crate::backend::Backend;
use crate::config::WinkelConfig;
use crate::error::ApiError;
use crate::model::{NewList, NewProduct, Product, PurchasedPatch, RowId, ShoppingList};
use request::{Method, Transport};

/// Blocking client for the lists and products tables.
#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    lists_table: String,
    products_table: String,
    transport: Transport,
}

impl RestClient {
    pub fn new(cfg: &WinkelConfig) -> Self {
        let key = cfg.api_key.trim();
        let headers = vec![
            format!("apikey: {}", key),
            format!("Authorization: Bearer {}", key),
            "Content-Type: application/json".to_string(),
            "Prefer: return=representation".to_string(),
        ];
        Self {
            base_url: cfg.backend_url.clone(),
            lists_table: cfg.lists_table.clone(),
            products_table: cfg.products_table.clone(),
            transport: Transport {
                headers,
                connect_timeout: cfg.connect_timeout_secs.map(Duration::from_secs),
                timeout: cfg.timeout_secs.map(Duration::from_secs),
            },
        }
    }

    fn lists_url(&self) -> Result<Url, ApiError> {
        Ok(endpoint::table_url(&self.base_url, &self.lists_table)?)
    }

    fn products_url(&self) -> Result<Url, ApiError> {
        Ok(endpoint::table_url(&self.base_url, &self.products_table)?)
    }

    fn send(&self, method: Method, url: &Url, body: Option<Vec<u8>>) -> Result<Vec<u8>, ApiError> {
        tracing::debug!(method = method.as_str(), url = %url, "backend request");
        match request::perform(&self.transport, method, url, body.as_deref()) {
            Ok(resp) => {
                tracing::debug!(
                    method = method.as_str(),
                    status = resp.status,
                    bytes = resp.body.len(),
                    "backend response"
                );
                Ok(resp.body)
            }
            Err(e) => {
                tracing::warn!(method = method.as_str(), url = %url, "backend request failed: {}", e);
                Err(e)
            }
        }
    }

    fn fetch<T: DeserializeOwned>(&self, url: &Url) -> Result<Vec<T>, ApiError> {
        let body = self.send(Method::Get, url, None)?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// POSTs `row` and returns the first element of the echoed representation.
    fn insert<P: Serialize, T: DeserializeOwned>(
        &self,
        url: &Url,
        row: &P,
        kind: &'static str,
    ) -> Result<T, ApiError> {
        let payload = serde_json::to_vec(row)?;
        let body = self.send(Method::Post, url, Some(payload))?;
        let rows: Vec<T> = serde_json::from_slice(&body)?;
        rows.into_iter()
            .next()
            .ok_or(ApiError::EmptyRepresentation(kind))
    }
}

impl Backend for RestClient {
    fn list_lists(&self) -> Result<Vec<ShoppingList>, ApiError> {
        let url = endpoint::select_all(self.lists_url()?);
        self.fetch(&url)
    }

    fn create_list(&self, name: &str) -> Result<ShoppingList, ApiError> {
        let url = self.lists_url()?;
        let list: ShoppingList = self.insert(&url, &NewList { winkelwagen: name }, "list")?;
        tracing::info!(id = %list.id, name = %list.name, "created list");
        Ok(list)
    }

    fn delete_list(&self, id: &RowId) -> Result<(), ApiError> {
        let url = endpoint::filter_eq(self.lists_url()?, "id", id);
        self.send(Method::Delete, &url, None)?;
        tracing::info!(id = %id, "deleted list");
        Ok(())
    }

    fn list_products(&self, list_id: &RowId) -> Result<Vec<Product>, ApiError> {
        let url = endpoint::filter_eq(self.products_url()?, "winkelwagen_id", list_id);
        self.fetch(&endpoint::select_all(url))
    }

    fn get_product(&self, id: &RowId) -> Result<Product, ApiError> {
        let url = endpoint::select_all(endpoint::filter_eq(self.products_url()?, "id", id));
        let rows: Vec<Product> = self.fetch(&url)?;
        rows.into_iter().next().ok_or_else(|| ApiError::NotFound {
            kind: "product",
            id: id.to_string(),
        })
    }

    fn create_product(&self, name: &str, list_id: &RowId) -> Result<Product, ApiError> {
        let url = self.products_url()?;
        let row = NewProduct {
            product: name,
            winkelwagen_id: list_id,
            gekocht: false,
        };
        let product: Product = self.insert(&url, &row, "product")?;
        tracing::info!(id = %product.id, list = %list_id, "created product");
        Ok(product)
    }

    fn set_purchased(&self, id: &RowId, purchased: bool) -> Result<(), ApiError> {
        let url = endpoint::filter_eq(self.products_url()?, "id", id);
        let payload = serde_json::to_vec(&PurchasedPatch { gekocht: purchased })?;
        self.send(Method::Patch, &url, Some(payload))?;
        tracing::info!(id = %id, purchased, "updated product");
        Ok(())
    }

    fn delete_product(&self, id: &RowId) -> Result<(), ApiError> {
        let url = endpoint::filter_eq(self.products_url()?, "id", id);
        self.send(Method::Delete, &url, None)?;
        tracing::info!(id = %id, "deleted product");
        Ok(())
    }
}
