//! A single list with its products.

use crate::backend::Backend;
use crate::error::ActionError;
use crate::model::{Product, RowId, ShoppingList};
use crate::route::Route;

use super::{action, not_found};

pub struct ListDetailView<B> {
    backend: B,
    pub list: Option<ShoppingList>,
    pub products: Vec<Product>,
    pub error: Option<String>,
}

impl<B: Backend> ListDetailView<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            list: None,
            products: Vec::new(),
            error: None,
        }
    }

    /// Looks the list up among all lists (loose id match), then loads its products.
    pub fn load(&mut self, id: &RowId) -> bool {
        self.error = None;
        tracing::debug!(id = %id, "loading list detail");
        let lists = match self.backend.list_lists() {
            Ok(lists) => lists,
            Err(e) => {
                tracing::error!("error loading list detail: {}", e);
                self.error = Some("could not load list".to_string());
                return false;
            }
        };
        self.list = lists.into_iter().find(|l| &l.id == id);
        if self.list.is_none() {
            self.products.clear();
            self.error = Some("list not found".to_string());
            return false;
        }
        self.load_products()
    }

    /// Reloads the products of the current list. On failure products are cleared.
    pub fn load_products(&mut self) -> bool {
        let Some(list) = &self.list else {
            return false;
        };
        match self.backend.list_products(&list.id) {
            Ok(products) => {
                if products.is_empty() {
                    tracing::debug!(list = %list.id, "no products for this list");
                }
                self.products = products;
                true
            }
            Err(e) => {
                tracing::error!("error loading products: {}", e);
                self.error = Some(format!("could not load products: {}", e));
                self.products.clear();
                false
            }
        }
    }

    pub fn find(&self, product_id: &RowId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == product_id)
    }

    /// Adds a product and reloads. `false` for a blank name or when no list is loaded.
    pub fn add_product(&mut self, name: &str) -> Result<bool, ActionError> {
        let name = name.trim();
        let Some(list) = &self.list else {
            return Ok(false);
        };
        if name.is_empty() {
            return Ok(false);
        }
        self.backend
            .create_product(name, &list.id)
            .map_err(action("could not add product"))?;
        self.load_products();
        Ok(true)
    }

    /// Deletes a product shown on this list and reloads.
    pub fn delete_product(&mut self, product_id: &RowId) -> Result<(), ActionError> {
        self.find(product_id)
            .ok_or_else(|| not_found("product", product_id))
            .map_err(action("could not delete product"))?;
        self.backend
            .delete_product(product_id)
            .map_err(action("could not delete product"))?;
        self.load_products();
        Ok(())
    }

    /// Flips the purchased flag on the server, then locally. Returns the new value.
    ///
    /// Local state changes only after the server accepted the update.
    pub fn toggle_product(&mut self, product_id: &RowId) -> Result<bool, ActionError> {
        let current = self
            .find(product_id)
            .map(|p| p.purchased)
            .ok_or_else(|| not_found("product", product_id))
            .map_err(action("could not update product status"))?;
        self.backend
            .set_purchased(product_id, !current)
            .map_err(action("could not update product status"))?;
        if let Some(p) = self.products.iter_mut().find(|p| &p.id == product_id) {
            p.purchased = !current;
        }
        Ok(!current)
    }

    /// Deletes the loaded list; on success the caller navigates to the returned route.
    pub fn delete_list(&mut self) -> Result<Route, ActionError> {
        let id = self
            .list
            .as_ref()
            .map(|l| l.id.clone())
            .ok_or_else(|| not_found("list", &RowId::Text("(none)".to_string())))
            .map_err(action("could not delete list"))?;
        self.backend
            .delete_list(&id)
            .map_err(action("could not delete list"))?;
        self.list = None;
        self.products.clear();
        Ok(Route::Overview)
    }
}
