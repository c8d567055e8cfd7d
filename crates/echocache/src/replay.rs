//! Replay: reconstruct an operation's call log from stored history

use std::io::{self, Write};

use crate::cache::Cache;
use crate::error::Result;

/// Write a call-log report for the operation named by `identity`.
///
/// The report is one header line followed by one line per recorded
/// call, pairing the Nth input with the Nth output:
///
/// ```text
/// Cache.store was called 2 times:
/// Cache.store(*("a",)) -> 0f8c...
/// Cache.store(*(1,)) -> 61b3...
/// ```
///
/// The count is 0 when the counter key is absent. Inputs and outputs
/// are paired up to the shorter of the two sequences, so a call whose
/// output was never recorded is not shown. A detached cache writes
/// nothing and returns `Ok` — a silent no-op, not an error. Read-only:
/// no key is mutated.
pub fn replay<W: Write>(cache: &Cache, identity: &str, out: &mut W) -> Result<()> {
    let Some(store) = cache.backend() else {
        return Ok(());
    };

    let count = if store.exists(identity)? {
        store
            .get(identity)?
            .and_then(|raw| String::from_utf8(raw).ok())
            .and_then(|s| s.parse::<i64>().ok())
            .unwrap_or(0)
    } else {
        0
    };
    writeln!(out, "{} was called {} times:", identity, count)?;

    let inputs = store.lrange(&format!("{}:inputs", identity), 0, -1)?;
    let outputs = store.lrange(&format!("{}:outputs", identity), 0, -1)?;
    for (input, output) in inputs.iter().zip(outputs.iter()) {
        writeln!(
            out,
            "{}(*{}) -> {}",
            identity,
            String::from_utf8_lossy(input),
            String::from_utf8_lossy(output)
        )?;
    }

    Ok(())
}

/// [`replay`] to standard output.
pub fn replay_stdout(cache: &Cache, identity: &str) -> Result<()> {
    replay(cache, identity, &mut io::stdout().lock())
}
