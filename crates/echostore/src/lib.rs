//! # echostore
//!
//! Key-value store abstraction for EchoKV.
//!
//! Exposes the small set of primitives the instrumentation layer needs
//! (get/set/incr/rpush/lrange/exists/flush_all) behind the
//! [`KeyValueStore`] trait, with two backends:
//! - [`MemoryStore`]: embedded, lock-protected hash map
//! - [`RedisStore`]: adapter over a live Redis connection

#![warn(missing_docs)]

mod error;
mod memory;
mod redis_backend;
mod store;

pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use redis_backend::RedisStore;
pub use store::KeyValueStore;
