//! Call-counting and call-recording wrappers
//!
//! Both wrappers are higher-order functions composable around any
//! storage-mutating operation. Each is keyed by an explicit operation
//! identity string: the counter lives at the identity itself, the
//! history at `<identity>:inputs` / `<identity>:outputs`.
//!
//! When both apply, the recorder wraps the counter — the observable
//! order per call is: input append, counter increment, the raw
//! operation, output append. The four writes are not transactional;
//! concurrent callers may interleave them.

use echostore::KeyValueStore;
use tracing::debug;

use crate::error::Result;

/// Count an invocation of the operation named by `identity`.
///
/// Increments the counter at `identity` (created at 1 if absent) and
/// then runs `op`, returning its result unchanged. The increment comes
/// first, so it is recorded even when `op` fails. With no bound store
/// the increment is skipped and `op` still runs; a failing increment on
/// a live store propagates without running `op`.
pub fn counted<R>(
    store: Option<&dyn KeyValueStore>,
    identity: &str,
    op: impl FnOnce() -> Result<R>,
) -> Result<R> {
    match store {
        Some(store) => {
            store.incr(identity)?;
        }
        None => debug!("no store bound, skipping call count for {}", identity),
    }
    op()
}

/// Record the inputs and output of an invocation of `identity`.
///
/// Appends `args` (the rendered positional-argument tuple) to
/// `<identity>:inputs`, runs `op`, and on success appends the rendered
/// output to `<identity>:outputs` before returning it unchanged. A
/// failed `op` leaves the input entry with no matching output. With no
/// bound store both appends are skipped and `op` still runs.
pub fn recorded<R>(
    store: Option<&dyn KeyValueStore>,
    identity: &str,
    args: &str,
    render: impl FnOnce(&R) -> Vec<u8>,
    op: impl FnOnce() -> Result<R>,
) -> Result<R> {
    match store {
        Some(store) => {
            store.rpush(&format!("{}:inputs", identity), args.as_bytes())?;
        }
        None => debug!("no store bound, skipping call history for {}", identity),
    }
    let output = op()?;
    if let Some(store) = store {
        store.rpush(&format!("{}:outputs", identity), &render(&output))?;
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use echostore::MemoryStore;

    #[test]
    fn test_counted_increments_before_op() {
        let store = MemoryStore::new();

        let result = counted(Some(&store), "op", || {
            // The increment must already be visible here
            assert_eq!(store.get("op").unwrap(), Some(b"1".to_vec()));
            Ok(7)
        });

        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn test_counted_records_failed_calls() {
        let store = MemoryStore::new();

        let result: Result<()> = counted(Some(&store), "op", || Err(Error::NotConnected));
        assert!(result.is_err());

        // The failure still counts
        assert_eq!(store.get("op").unwrap(), Some(b"1".to_vec()));
    }

    #[test]
    fn test_counted_skips_without_store() {
        let result = counted(None, "op", || Ok(42));
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn test_recorded_appends_input_first() {
        let store = MemoryStore::new();

        recorded(
            Some(&store),
            "op",
            "(1,)",
            |out: &String| out.clone().into_bytes(),
            || {
                // Input is already recorded, output is not
                assert_eq!(store.lrange("op:inputs", 0, -1).unwrap().len(), 1);
                assert!(store.lrange("op:outputs", 0, -1).unwrap().is_empty());
                Ok("ok".to_string())
            },
        )
        .unwrap();

        assert_eq!(
            store.lrange("op:inputs", 0, -1).unwrap(),
            vec![b"(1,)".to_vec()]
        );
        assert_eq!(
            store.lrange("op:outputs", 0, -1).unwrap(),
            vec![b"ok".to_vec()]
        );
    }

    #[test]
    fn test_recorded_skips_output_on_failure() {
        let store = MemoryStore::new();

        let result: Result<String> = recorded(
            Some(&store),
            "op",
            "(1,)",
            |out: &String| out.clone().into_bytes(),
            || Err(Error::NotConnected),
        );
        assert!(result.is_err());

        // Input recorded, output not — the documented transient window
        assert_eq!(store.lrange("op:inputs", 0, -1).unwrap().len(), 1);
        assert!(store.lrange("op:outputs", 0, -1).unwrap().is_empty());
    }

    #[test]
    fn test_recorded_skips_without_store() {
        let result = recorded(None, "op", "()", |out: &i64| out.to_string().into_bytes(), || {
            Ok(5)
        });
        assert_eq!(result.unwrap(), 5);
    }

    #[test]
    fn test_composed_ordering() {
        let store = MemoryStore::new();

        // Recorder outside, counter inside — the facade's composition
        recorded(
            Some(&store),
            "op",
            "(9,)",
            |out: &String| out.clone().into_bytes(),
            || {
                counted(Some(&store), "op", || {
                    assert_eq!(store.get("op").unwrap(), Some(b"1".to_vec()));
                    assert_eq!(store.lrange("op:inputs", 0, -1).unwrap().len(), 1);
                    Ok("done".to_string())
                })
            },
        )
        .unwrap();

        assert_eq!(store.get("op").unwrap(), Some(b"1".to_vec()));
        assert_eq!(store.lrange("op:outputs", 0, -1).unwrap().len(), 1);
    }
}
