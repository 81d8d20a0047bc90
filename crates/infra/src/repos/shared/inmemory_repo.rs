use banking_domain::Entity;
use std::sync::{Mutex, MutexGuard};
use tracing::error;

/// Useful functions for creating inmemory repositories

fn lock<T>(collection: &Mutex<Vec<T>>) -> anyhow::Result<MutexGuard<'_, Vec<T>>> {
    collection.lock().map_err(|_| {
        error!("Inmemory collection lock was poisoned");
        anyhow::Error::msg("Inmemory collection lock was poisoned")
    })
}

fn push_unique<T: Clone + Entity>(val: &T, collection: &mut Vec<T>) -> anyhow::Result<()> {
    if collection.iter().any(|item| item.id() == val.id()) {
        return Err(anyhow::anyhow!(
            "An entity with id: {} already exists",
            val.id()
        ));
    }
    collection.push(val.clone());
    Ok(())
}

/// Inserts `val` unless an entity with the same id is already stored
pub fn insert<T: Clone + Entity>(val: &T, collection: &Mutex<Vec<T>>) -> anyhow::Result<()> {
    let mut collection = lock(collection)?;
    push_unique(val, &mut collection)
}

/// Inserts all of `vals` only when the collection is empty.
/// The check and the inserts happen while holding the same lock.
pub fn insert_many_if_empty<T: Clone + Entity>(
    vals: &[T],
    collection: &Mutex<Vec<T>>,
) -> anyhow::Result<bool> {
    let mut collection = lock(collection)?;
    if !collection.is_empty() {
        return Ok(false);
    }
    let mut inserted = Vec::with_capacity(vals.len());
    for val in vals {
        push_unique(val, &mut inserted)?;
    }
    *collection = inserted;
    Ok(true)
}

pub fn find_all<T: Clone + Entity>(collection: &Mutex<Vec<T>>) -> anyhow::Result<Vec<T>> {
    let collection = lock(collection)?;
    let mut items = collection.clone();
    items.sort_by(|a, b| a.id().cmp(b.id()));
    Ok(items)
}
