//! Redis-backed `KeyValueStore`

use parking_lot::Mutex;
use redis::{Client, Commands, Connection};

use crate::error::Result;
use crate::store::KeyValueStore;

/// `KeyValueStore` adapter over a live Redis connection.
///
/// Every trait primitive maps one-to-one onto a Redis command, so the
/// atomicity guarantees are Redis's own. The connection is shared behind
/// a mutex; no retries or timeouts are layered on top — a failed command
/// surfaces as [`Error::Backend`](crate::Error::Backend).
pub struct RedisStore {
    conn: Mutex<Connection>,
}

impl RedisStore {
    /// Connect to a Redis server, e.g. `redis://127.0.0.1:6379`
    pub fn connect(url: &str) -> Result<Self> {
        let client = Client::open(url)?;
        let conn = client.get_connection()?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl KeyValueStore for RedisStore {
    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let _: () = self.conn.lock().set(key, value)?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value: Option<Vec<u8>> = self.conn.lock().get(key)?;
        Ok(value)
    }

    fn incr(&self, key: &str) -> Result<i64> {
        let value: i64 = self.conn.lock().incr(key, 1)?;
        Ok(value)
    }

    fn rpush(&self, key: &str, value: &[u8]) -> Result<()> {
        let _: () = self.conn.lock().rpush(key, value)?;
        Ok(())
    }

    fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<Vec<u8>>> {
        let items: Vec<Vec<u8>> =
            self.conn.lock().lrange(key, start as isize, stop as isize)?;
        Ok(items)
    }

    fn exists(&self, key: &str) -> Result<bool> {
        let found: bool = self.conn.lock().exists(key)?;
        Ok(found)
    }

    fn flush_all(&self) -> Result<()> {
        let mut conn = self.conn.lock();
        redis::cmd("FLUSHALL").query::<()>(&mut conn)?;
        Ok(())
    }
}
