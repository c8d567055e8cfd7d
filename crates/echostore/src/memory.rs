//! Embedded in-memory backend

use std::collections::HashMap;

use ahash::RandomState;
use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::store::KeyValueStore;

/// A key holds either a scalar or an ordered list, never both.
enum Slot {
    Value(Vec<u8>),
    List(Vec<Vec<u8>>),
}

/// In-memory `KeyValueStore` backend.
///
/// A single `RwLock` around an AHash-hashed map; every primitive takes
/// the lock once, so each call is atomic with respect to the others.
/// This is the default backend and the one the test suite runs against.
#[derive(Default)]
pub struct MemoryStore {
    map: RwLock<HashMap<String, Slot, RandomState>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held
    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    /// Check whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }
}

/// Map `start`/`stop` (inclusive, negatives from the end) onto concrete
/// bounds for a list of `len` items. `None` means the slice is empty.
fn normalize_range(len: usize, start: i64, stop: i64) -> Option<(usize, usize)> {
    let len = len as i64;
    if len == 0 {
        return None;
    }
    let start = if start < 0 { (len + start).max(0) } else { start };
    let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };
    if start > stop || start >= len || stop < 0 {
        return None;
    }
    Some((start as usize, stop as usize))
}

impl KeyValueStore for MemoryStore {
    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.map
            .write()
            .insert(key.to_string(), Slot::Value(value.to_vec()));
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.map.read().get(key) {
            Some(Slot::Value(v)) => Ok(Some(v.clone())),
            Some(Slot::List(_)) => Err(Error::WrongType(key.to_string())),
            None => Ok(None),
        }
    }

    fn incr(&self, key: &str) -> Result<i64> {
        let mut map = self.map.write();
        match map.get_mut(key) {
            Some(Slot::Value(v)) => {
                let n: i64 = std::str::from_utf8(v)
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .ok_or_else(|| Error::NotInteger(key.to_string()))?;
                let n = n + 1;
                *v = n.to_string().into_bytes();
                Ok(n)
            }
            Some(Slot::List(_)) => Err(Error::WrongType(key.to_string())),
            None => {
                map.insert(key.to_string(), Slot::Value(b"1".to_vec()));
                Ok(1)
            }
        }
    }

    fn rpush(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut map = self.map.write();
        match map
            .entry(key.to_string())
            .or_insert_with(|| Slot::List(Vec::new()))
        {
            Slot::List(items) => {
                items.push(value.to_vec());
                Ok(())
            }
            Slot::Value(_) => Err(Error::WrongType(key.to_string())),
        }
    }

    fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<Vec<u8>>> {
        match self.map.read().get(key) {
            Some(Slot::List(items)) => {
                match normalize_range(items.len(), start, stop) {
                    Some((lo, hi)) => Ok(items[lo..=hi].to_vec()),
                    None => Ok(Vec::new()),
                }
            }
            Some(Slot::Value(_)) => Err(Error::WrongType(key.to_string())),
            None => Ok(Vec::new()),
        }
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.map.read().contains_key(key))
    }

    fn flush_all(&self) -> Result<()> {
        self.map.write().clear();
        Ok(())
    }
}
