//! Overview of all lists.

use crate::backend::Backend;
use crate::error::ActionError;
use crate::model::{RowId, ShoppingList};

use super::{action, not_found};

pub struct ListsView<B> {
    backend: B,
    pub lists: Vec<ShoppingList>,
    pub error: Option<String>,
}

impl<B: Backend> ListsView<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            lists: Vec::new(),
            error: None,
        }
    }

    /// Fetches all lists. On failure the previous lists stay and `error` is set.
    pub fn load(&mut self) -> bool {
        self.error = None;
        tracing::debug!("fetching lists");
        match self.backend.list_lists() {
            Ok(lists) => {
                if lists.is_empty() {
                    tracing::warn!("no lists returned from backend");
                }
                self.lists = lists;
                true
            }
            Err(e) => {
                tracing::error!("error loading lists: {}", e);
                self.error = Some(format!("could not load lists: {}", e));
                false
            }
        }
    }

    pub fn find(&self, id: &RowId) -> Option<&ShoppingList> {
        self.lists.iter().find(|l| &l.id == id)
    }

    /// Creates a list and reloads. Returns `false` without a call for a blank name.
    pub fn create_list(&mut self, name: &str) -> Result<bool, ActionError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(false);
        }
        self.backend
            .create_list(name)
            .map_err(action("could not create list"))?;
        self.load();
        Ok(true)
    }

    /// Adds a product to one of the loaded lists and returns the confirmation text.
    /// The overview is not reloaded. `None` for a blank name.
    pub fn add_product(
        &mut self,
        list_id: &RowId,
        name: &str,
    ) -> Result<Option<String>, ActionError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        let list = self
            .find(list_id)
            .cloned()
            .ok_or_else(|| not_found("list", list_id))
            .map_err(action("could not add product"))?;
        self.backend
            .create_product(name, &list.id)
            .map_err(action("could not add product"))?;
        Ok(Some(format!("product added to {}", list.name)))
    }

    /// Deletes a list and reloads.
    pub fn delete_list(&mut self, list_id: &RowId) -> Result<(), ActionError> {
        self.backend
            .delete_list(list_id)
            .map_err(action("could not delete list"))?;
        self.load();
        Ok(())
    }
}
