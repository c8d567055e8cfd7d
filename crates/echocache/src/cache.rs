//! The instrumented cache facade

use std::sync::Arc;

use echostore::KeyValueStore;
use uuid::Uuid;

use crate::data::{render_tuple, Data};
use crate::error::{Error, Result};
use crate::instrument;

/// Operation identity for [`Cache::store`], the namespace root for its
/// counter and history keys.
pub const STORE_IDENTITY: &str = "Cache.store";

/// Cache facade over a [`KeyValueStore`].
///
/// [`store`](Cache::store) writes scalar values under generated keys
/// and is instrumented: each call bumps a per-operation counter and
/// appends the rendered arguments and result to ordered history lists.
/// The typed getters are plain reads with no instrumentation.
pub struct Cache {
    store: Option<Arc<dyn KeyValueStore>>,
}

impl Cache {
    /// Create a facade bound to `store`.
    ///
    /// Clears every existing key in the store as part of construction —
    /// a new facade always starts from an empty store, including any
    /// counters and history left by a previous instance.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        store.flush_all()?;
        Ok(Self { store: Some(store) })
    }

    /// Create a facade with no bound store.
    ///
    /// Instrumentation and replay degrade to silent no-ops; storage
    /// operations fail with [`Error::NotConnected`].
    pub fn detached() -> Self {
        Self { store: None }
    }

    pub(crate) fn backend(&self) -> Option<&dyn KeyValueStore> {
        self.store.as_deref()
    }

    /// Store a scalar value under a freshly generated key and return
    /// the key.
    ///
    /// The key is a random UUID, unique with overwhelming probability;
    /// stored values are never mutated afterwards. Call-counted and
    /// call-recorded under [`STORE_IDENTITY`]: counter increment and
    /// history appends happen around the write but not atomically with
    /// it, so concurrent callers may interleave the sub-operations.
    pub fn store(&self, data: impl Into<Data>) -> Result<String> {
        let data = data.into();
        let backend = self.backend();
        let args = render_tuple(std::slice::from_ref(&data));

        instrument::recorded(
            backend,
            STORE_IDENTITY,
            &args,
            |key: &String| key.clone().into_bytes(),
            || {
                instrument::counted(backend, STORE_IDENTITY, || {
                    let store = backend.ok_or(Error::NotConnected)?;
                    let key = Uuid::new_v4().to_string();
                    store.set(&key, &data.encode())?;
                    Ok(key)
                })
            },
        )
    }

    /// Read the raw value at `key`, or `None` if absent.
    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let store = self.backend().ok_or(Error::NotConnected)?;
        Ok(store.get(key)?)
    }

    /// Read the value at `key` and apply `transform` to the raw bytes.
    ///
    /// Absence passes through untouched: the transform only runs when
    /// the key holds a value.
    pub fn get_with<T>(
        &self,
        key: &str,
        transform: impl FnOnce(Vec<u8>) -> Result<T>,
    ) -> Result<Option<T>> {
        match self.get(key)? {
            Some(raw) => Ok(Some(transform(raw)?)),
            None => Ok(None),
        }
    }

    /// Read the value at `key` as UTF-8 text.
    ///
    /// Fails with [`Error::Utf8`] if the stored bytes are not valid
    /// UTF-8. An absent key is `Ok(None)`, not an error.
    pub fn get_str(&self, key: &str) -> Result<Option<String>> {
        self.get_with(key, |raw| Ok(String::from_utf8(raw)?))
    }

    /// Read the value at `key` as a base-10 integer.
    ///
    /// Fails with [`Error::NotInteger`] if the stored value is not an
    /// integer literal. An absent key is `Ok(None)`, not an error.
    pub fn get_int(&self, key: &str) -> Result<Option<i64>> {
        self.get_with(key, |raw| {
            std::str::from_utf8(&raw)
                .ok()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| Error::NotInteger(key.to_string()))
        })
    }
}
