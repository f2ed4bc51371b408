//! Grocery Collection Store
//!
//! Local mirror of the remote item collection, plus the busy flag and
//! notification wiring shared by every mutating action. The mirror is
//! only ever rewritten from server responses.

use leptos::prelude::*;

use crate::api::{ApiError, HttpApi, ItemApi};
use crate::models::Item;
use crate::notify::Notifier;

const CONNECTION_FAILED: &str = "Error connecting to server";

/// Shared client state: the mirrored collection, the busy flag and the
/// notification slot.
#[derive(Clone)]
pub struct GroceryStore<A> {
    api: A,
    pub items: RwSignal<Vec<Item>>,
    pub busy: RwSignal<bool>,
    pub notifier: Notifier,
}

/// Type alias for the store as provided to the component tree
pub type AppStore = GroceryStore<HttpApi>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

impl<A: ItemApi> GroceryStore<A> {
    pub fn new(api: A) -> Self {
        GroceryStore {
            api,
            items: RwSignal::new(Vec::new()),
            busy: RwSignal::new(false),
            notifier: Notifier::new(),
        }
    }

    /// Fetch the full collection and replace the local mirror wholesale.
    /// A failed fetch leaves the previous mirror untouched.
    pub async fn load(&self) {
        match self.api.fetch_items().await {
            Ok(items) => self.items.set(items),
            Err(err) => self.notifier.show(failure_notice(&err, "Failed to fetch items")),
        }
    }

    /// Create an item from a trimmed name. Blank names are rejected
    /// locally, with no request and no notification. Returns true when
    /// the caller should clear its input.
    pub async fn add(&self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }

        let _busy = BusyGuard::acquire(self.busy);
        match self.api.create_item(name).await {
            Ok(item) => {
                let message = format!("{} added successfully", item.name);
                self.items.update(|items| items.push(item));
                self.notifier.show(message);
                true
            }
            Err(err) => {
                self.notifier.show(failure_notice(&err, "Failed to add item"));
                false
            }
        }
    }

    /// Set an item's bought flag. The server's returned item replaces
    /// the local one wholesale, not just the flag.
    pub async fn set_bought(&self, id: &str, bought: bool) {
        let _busy = BusyGuard::acquire(self.busy);
        match self.api.update_bought(id, bought).await {
            Ok(updated) => {
                let message = if updated.bought {
                    format!("{} marked as bought", updated.name)
                } else {
                    format!("{} marked as not bought", updated.name)
                };
                self.items.update(|items| {
                    if let Some(slot) = items.iter_mut().find(|item| item.id == updated.id) {
                        *slot = updated;
                    }
                });
                self.notifier.show(message);
            }
            Err(err) => self.notifier.show(failure_notice(&err, "Failed to update item")),
        }
    }

    /// Delete an item and drop it from the local mirror.
    pub async fn remove(&self, id: &str) {
        let name = self.items.with_untracked(|items| {
            items.iter().find(|item| item.id == id).map(|item| item.name.clone())
        });

        let _busy = BusyGuard::acquire(self.busy);
        match self.api.delete_item(id).await {
            Ok(()) => {
                self.items.update(|items| items.retain(|item| item.id != id));
                let name = name.unwrap_or_else(|| "Item".to_string());
                self.notifier.show(format!("{} deleted successfully", name));
            }
            Err(err) => self.notifier.show(failure_notice(&err, "Failed to delete item")),
        }
    }
}

fn failure_notice(err: &ApiError, server_failure: &str) -> String {
    match err {
        ApiError::Connection => CONNECTION_FAILED.to_string(),
        ApiError::Status(_) => server_failure.to_string(),
    }
}

/// Scoped busy-flag acquisition. The flag is raised before the request
/// is dispatched and drops back to false on every exit path, including
/// early returns and unwinds.
struct BusyGuard {
    flag: RwSignal<bool>,
}

impl BusyGuard {
    fn acquire(flag: RwSignal<bool>) -> Self {
        flag.set(true);
        BusyGuard { flag }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
