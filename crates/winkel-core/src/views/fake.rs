//! In-memory backend for view tests. Operations can be made to fail by name.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::backend::Backend;
use crate::error::ApiError;
use crate::model::{Product, RowId, ShoppingList};

#[derive(Default)]
struct State {
    lists: Vec<ShoppingList>,
    products: Vec<Product>,
    next_id: i64,
    failing: HashSet<&'static str>,
    calls: Vec<String>,
}

#[derive(Default)]
pub(super) struct FakeBackend {
    state: RefCell<State>,
}

fn server_error() -> ApiError {
    ApiError::Http {
        status: 500,
        reason: "Internal Server Error".into(),
        body: String::new(),
    }
}

impl FakeBackend {
    pub fn with_list(self, name: &str) -> Self {
        {
            let mut s = self.state.borrow_mut();
            s.next_id += 1;
            let id = RowId::Int(s.next_id);
            s.lists.push(ShoppingList {
                id,
                name: name.to_string(),
            });
        }
        self
    }

    pub fn with_product(self, list_id: i64, name: &str, purchased: bool) -> Self {
        {
            let mut s = self.state.borrow_mut();
            s.next_id += 1;
            let id = RowId::Int(s.next_id);
            s.products.push(Product {
                id,
                name: name.to_string(),
                list_id: RowId::Int(list_id),
                purchased,
            });
        }
        self
    }

    pub fn fail(&self, op: &'static str) {
        self.state.borrow_mut().failing.insert(op);
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    pub fn purchased(&self, id: i64) -> Option<bool> {
        let id = RowId::Int(id);
        self.state
            .borrow()
            .products
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.purchased)
    }

    pub fn list_count(&self) -> usize {
        self.state.borrow().lists.len()
    }

    fn enter(&self, op: &'static str) -> Result<std::cell::RefMut<'_, State>, ApiError> {
        let mut s = self.state.borrow_mut();
        s.calls.push(op.to_string());
        if s.failing.contains(op) {
            return Err(server_error());
        }
        Ok(s)
    }
}

impl Backend for FakeBackend {
    fn list_lists(&self) -> Result<Vec<ShoppingList>, ApiError> {
        Ok(self.enter("list_lists")?.lists.clone())
    }

    fn create_list(&self, name: &str) -> Result<ShoppingList, ApiError> {
        let mut s = self.enter("create_list")?;
        s.next_id += 1;
        let list = ShoppingList {
            id: RowId::Int(s.next_id),
            name: name.to_string(),
        };
        s.lists.push(list.clone());
        Ok(list)
    }

    fn delete_list(&self, id: &RowId) -> Result<(), ApiError> {
        self.enter("delete_list")?.lists.retain(|l| &l.id != id);
        Ok(())
    }

    fn list_products(&self, list_id: &RowId) -> Result<Vec<Product>, ApiError> {
        let s = self.enter("list_products")?;
        let products = s
            .products
            .iter()
            .filter(|p| &p.list_id == list_id)
            .cloned()
            .collect();
        Ok(products)
    }

    fn get_product(&self, id: &RowId) -> Result<Product, ApiError> {
        let s = self.enter("get_product")?;
        let found = s.products.iter().find(|p| &p.id == id).cloned();
        found.ok_or_else(|| ApiError::NotFound {
            kind: "product",
            id: id.to_string(),
        })
    }

    fn create_product(&self, name: &str, list_id: &RowId) -> Result<Product, ApiError> {
        let mut s = self.enter("create_product")?;
        s.next_id += 1;
        let product = Product {
            id: RowId::Int(s.next_id),
            name: name.to_string(),
            list_id: list_id.clone(),
            purchased: false,
        };
        s.products.push(product.clone());
        Ok(product)
    }

    fn set_purchased(&self, id: &RowId, purchased: bool) -> Result<(), ApiError> {
        let mut s = self.enter("set_purchased")?;
        if let Some(p) = s.products.iter_mut().find(|p| &p.id == id) {
            p.purchased = purchased;
        }
        Ok(())
    }

    fn delete_product(&self, id: &RowId) -> Result<(), ApiError> {
        self.enter("delete_product")?.products.retain(|p| &p.id != id);
        Ok(())
    }
}
