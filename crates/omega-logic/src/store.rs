//! Inventory store — the vault's ordered collection of objects.
//!
//! Insertion order is listing order. Ids are not checked for uniqueness;
//! lookups return the first object whose id matches exactly.

use serde::{Deserialize, Serialize};

use crate::object::InventoryObject;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryStore {
    objects: Vec<InventoryObject>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object; duplicates of an existing id are accepted.
    pub fn add(&mut self, object: InventoryObject) {
        if self.find_by_id(object.id()).is_some() {
            log::warn!("Duplicate id '{}' added; lookups keep the first", object.id());
        }
        self.objects.push(object);
    }

    pub fn find_by_id(&self, id: &str) -> Option<&InventoryObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut InventoryObject> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    /// Objects in insertion order, or `None` when the vault is empty.
    ///
    /// Each call starts a fresh pass over the store.
    pub fn list_all(&self) -> Option<std::slice::Iter<'_, InventoryObject>> {
        if self.objects.is_empty() {
            None
        } else {
            Some(self.objects.iter())
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
