//! docstore Demo Binary
//!
//! Loads a grid of documents with a mixed-kind primary key, exercises the
//! lookup/delete/overwrite path and prints the generation layout.

use std::sync::Arc;

use clap::Parser;
use docstore::generation::FrozenTable;
use docstore::hooks::ChannelSink;
use docstore::model::ScalarKind;
use docstore::{doc, key, Config, DataStore, Key, StoreError};
use tracing_subscriber::{fmt, EnvFilter};

/// docstore demo
#[derive(Parser, Debug)]
#[command(name = "docstore-demo")]
#[command(about = "In-memory document store with memtable rotation")]
#[command(version)]
struct Args {
    /// MemTable capacity in entries before rotation
    #[arg(short, long, default_value = "4")]
    capacity: usize,

    /// Distinct values of the integer key column `a`
    #[arg(long, default_value = "2")]
    ints: i64,

    /// Distinct values of the float key column `b`
    #[arg(long, default_value = "3")]
    floats: i64,

    /// Distinct values of the text key column `c`
    #[arg(long, default_value = "4")]
    texts: i64,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,docstore=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("docstore demo v{}", docstore::VERSION);

    if let Err(e) = run(&args) {
        tracing::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> docstore::Result<()> {
    let config = Config::builder()
        .capacity(args.capacity)
        .primary_key(["a", "b", "c"])
        .key_kinds([ScalarKind::Int, ScalarKind::Float, ScalarKind::Text])
        .build();

    let store = DataStore::open(config)?;
    let (sink, frozen) = ChannelSink::<Arc<FrozenTable>>::unbounded();
    store.subscribe_freeze(sink);

    for i in 0..args.ints {
        for j in 0..args.floats {
            for k in 0..args.texts {
                store.add(doc! {
                    "a" => i,
                    "b" => j as f64,
                    "c" => k.to_string(),
                    "d" => format!("{}-{}-{}", i, j, k),
                })?;
            }
        }
    }

    print_lookup(&store, &key![1, 1.1, "1"])?;
    print_lookup(&store, &key![1, 1.0, "1"])?;

    store.delete(key![1, 1.0, "1"])?;
    print_lookup(&store, &key![1, 1.0, "1"])?;

    store.set(
        key![1, 1.0, "1"],
        doc! { "a" => 1, "b" => 1.0, "c" => "1", "d" => "SOME NEW VALUE" },
    )?;
    print_lookup(&store, &key![1, 1.0, "1"])?;

    println!("{}", "-".repeat(24));
    println!("current (generation {}):", store.current_generation());
    for entry in store.current_entries() {
        println!("  {:?} {} {:?}", entry.flag(), entry.key(), entry.document());
    }

    // Newest first, like the chain itself
    let mut generations: Vec<_> = frozen.try_iter().collect();
    generations.reverse();
    for generation in generations {
        println!("frozen:");
        for entry in generation.iter() {
            println!("  {:?} {} {:?}", entry.flag(), entry.key(), entry.document());
        }
    }

    store.close()
}

fn print_lookup(store: &DataStore, key: &Key) -> docstore::Result<()> {
    match store.get(key) {
        Ok(document) => println!("{} => {:?}", key, document),
        Err(StoreError::NotFound(_)) => println!("{} => not found", key),
        Err(e) => return Err(e),
    }
    Ok(())
}
