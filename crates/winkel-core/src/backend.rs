//! The operations the application needs from its storage backend.
//!
//! [`crate::rest::RestClient`] is the production implementation; the views
//! are generic over this trait.

use crate::error::ApiError;
use crate::model::{Product, RowId, ShoppingList};

/// The CRUD surface over lists and products. Each call is one round trip, no retry.
pub trait Backend {
    fn list_lists(&self) -> Result<Vec<ShoppingList>, ApiError>;

    fn create_list(&self, name: &str) -> Result<ShoppingList, ApiError>;

    fn delete_list(&self, id: &RowId) -> Result<(), ApiError>;

    fn list_products(&self, list_id: &RowId) -> Result<Vec<Product>, ApiError>;

    fn get_product(&self, id: &RowId) -> Result<Product, ApiError>;

    fn create_product(&self, name: &str, list_id: &RowId) -> Result<Product, ApiError>;

    fn set_purchased(&self, id: &RowId, purchased: bool) -> Result<(), ApiError>;

    fn delete_product(&self, id: &RowId) -> Result<(), ApiError>;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn list_lists(&self) -> Result<Vec<ShoppingList>, ApiError> {
        (**self).list_lists()
    }

    fn create_list(&self, name: &str) -> Result<ShoppingList, ApiError> {
        (**self).create_list(name)
    }

    fn delete_list(&self, id: &RowId) -> Result<(), ApiError> {
        (**self).delete_list(id)
    }

    fn list_products(&self, list_id: &RowId) -> Result<Vec<Product>, ApiError> {
        (**self).list_products(list_id)
    }

    fn get_product(&self, id: &RowId) -> Result<Product, ApiError> {
        (**self).get_product(id)
    }

    fn create_product(&self, name: &str, list_id: &RowId) -> Result<Product, ApiError> {
        (**self).create_product(name, list_id)
    }

    fn set_purchased(&self, id: &RowId, purchased: bool) -> Result<(), ApiError> {
        (**self).set_purchased(id, purchased)
    }

    fn delete_product(&self, id: &RowId) -> Result<(), ApiError> {
        (**self).delete_product(id)
    }
}
