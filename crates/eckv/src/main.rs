//! EchoKV demo CLI - store values, read them back, replay the call log

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use echocache::{replay_stdout, Cache, Data, STORE_IDENTITY};
use echostore::{KeyValueStore, MemoryStore, RedisStore};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Redis URL to use instead of the in-memory backend,
    /// e.g. redis://127.0.0.1:6379
    #[arg(short, long)]
    redis: Option<String>,

    /// Values to store (integers are stored as numbers)
    #[arg(default_values_t = ["hello".to_string(), "world".to_string(), "42".to_string()])]
    values: Vec<String>,
}

/// Integer-looking arguments are stored as numbers, the rest as text.
fn classify(raw: &str) -> Data {
    match raw.parse::<i64>() {
        Ok(n) => Data::Int(n),
        Err(_) => Data::Text(raw.to_string()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let store: Arc<dyn KeyValueStore> = match &args.redis {
        Some(url) => {
            info!("Connecting to Redis at {}", url);
            Arc::new(RedisStore::connect(url)?)
        }
        None => {
            info!("Using in-memory backend");
            Arc::new(MemoryStore::new())
        }
    };

    // Construction flushes the store
    let cache = Cache::new(store)?;

    let mut keys = Vec::new();
    for raw in &args.values {
        let key = cache.store(classify(raw))?;
        info!("Stored {:?} under {}", raw, key);
        keys.push(key);
    }

    for key in &keys {
        match cache.get_int(key) {
            Ok(Some(n)) => println!("{} = {} (int)", key, n),
            _ => match cache.get_str(key)? {
                Some(s) => println!("{} = {:?}", key, s),
                None => println!("{} = <absent>", key),
            },
        }
    }

    println!();
    replay_stdout(&cache, STORE_IDENTITY)?;

    Ok(())
}
