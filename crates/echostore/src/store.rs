//! The `KeyValueStore` trait: the primitives EchoKV needs from a backend

use crate::error::Result;

/// Minimal key-value store interface.
///
/// Keys are strings, values are raw bytes. Each method maps to a single
/// backend primitive and is individually atomic; no method spans more
/// than one key. Implementations must be safe to share across threads.
///
/// Absence is represented as `None` from [`get`](Self::get) and an empty
/// sequence from [`lrange`](Self::lrange) — there is no error for a
/// missing key.
pub trait KeyValueStore: Send + Sync {
    /// Store `value` under `key`, overwriting any existing value.
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Read the raw value at `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Add 1 to the integer at `key`, creating it at 1 if absent.
    ///
    /// Returns the value after the increment. Fails with
    /// [`Error::NotInteger`](crate::Error::NotInteger) if the existing
    /// value is not a base-10 integer literal.
    fn incr(&self, key: &str) -> Result<i64>;

    /// Append `value` to the ordered list at `key`, creating an empty
    /// list first if the key is absent.
    fn rpush(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Read an inclusive slice of the list at `key`.
    ///
    /// Redis index semantics: negative indices count from the end
    /// (`stop = -1` means "to the end"), out-of-range indices clamp,
    /// and `start > stop` after normalization yields an empty result.
    /// An absent key yields an empty result.
    fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<Vec<u8>>>;

    /// Test whether `key` holds any value.
    fn exists(&self, key: &str) -> Result<bool>;

    /// Remove every key from the store.
    fn flush_all(&self) -> Result<()>;
}
