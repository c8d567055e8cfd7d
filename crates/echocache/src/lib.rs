//! # echocache
//!
//! Instrumented cache facade over an [`echostore::KeyValueStore`].
//!
//! ## Architecture
//! - **Cache**: stores scalar values under generated keys, with typed
//!   getters for reading them back
//! - **Instrumentation**: call-counter and call-recorder wrappers,
//!   composable around any storage-mutating operation
//! - **Replay**: reconstructs a readable call log from the recorded
//!   counters and history
//!
//! The counter, input-history, and output-history writes performed by a
//! wrapped call are individually atomic but not transactional as a
//! group; concurrent callers of the same operation may interleave them.

#![warn(missing_docs)]

mod cache;
mod data;
mod error;
pub mod instrument;
mod replay;

pub use cache::{Cache, STORE_IDENTITY};
pub use data::Data;
pub use error::{Error, Result};
pub use replay::{replay, replay_stdout};
