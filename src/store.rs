//! Store Module
//!
//! The document store that coordinates the current memtable and the
//! generation chain.
//!
//! ## Responsibilities
//! - Validate keys before they reach a sorted structure
//! - Rotate the current memtable into the chain when it is full
//! - Resolve point lookups newest → oldest across generations
//! - Dispatch freeze and mutation notifications

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::generation::{FrozenTable, Generation, GenerationChain, GenerationId};
use crate::hooks::{FreezeListener, MutationEvent, MutationListener};
use crate::memtable::{Entry, EntryFlag, Lookup, MemTable};
use crate::model::{Document, Key, KeySchema, ScalarKind};

/// The document store
///
/// ## Concurrency Model: Single-Writer / Multiple-Reader (SWMR)
///
/// - **Writes** (set/delete/rotate): take the `state` write lock, so the
///   capacity check, the swap of the current memtable and the push onto the
///   chain happen as one step for every other writer and reader
/// - **Reads** (get/has): take the `state` read lock; many at a time
/// - Frozen generations are shared as `Arc`s and never mutated again
///
/// Listeners are invoked with the write lock held, which keeps mutation
/// notifications in application order.
pub struct DataStore {
    /// Store configuration
    config: Config,

    /// Current memtable, generation chain and key schema
    state: RwLock<StoreState>,

    /// Notified after every rotation
    freeze_listeners: RwLock<Vec<Arc<dyn FreezeListener>>>,

    /// Notified after every applied mutation
    mutation_listeners: RwLock<Vec<Arc<dyn MutationListener>>>,
}

/// Everything a write can change, behind one lock
struct StoreState {
    schema: KeySchema,

    /// Generation id of `current`
    current_id: GenerationId,

    /// The only mutable memtable
    current: MemTable,

    /// Frozen generations, newest first
    chain: GenerationChain,

    /// Mutations applied so far
    sequence: u64,
}

impl DataStore {
    /// Create a store with the given config
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        let state = StoreState {
            schema: KeySchema::from_config(&config),
            current_id: 1,
            current: MemTable::new(),
            chain: GenerationChain::new(),
            sequence: 0,
        };

        tracing::info!(
            capacity = config.capacity,
            primary_key = ?config.primary_key,
            "data store opened"
        );

        Ok(Self {
            config,
            state: RwLock::new(state),
            freeze_listeners: RwLock::new(Vec::new()),
            mutation_listeners: RwLock::new(Vec::new()),
        })
    }

    /// Create a store with default config apart from key columns and capacity
    pub fn with_primary_key<I, S>(columns: I, capacity: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let config = Config::builder()
            .primary_key(columns)
            .capacity(capacity)
            .build();
        Self::open(config)
    }

    // =========================================================================
    // Write Path
    // =========================================================================

    /// Store a document under the key made of its primary key columns
    pub fn add(&self, document: Document) -> Result<()> {
        let key = self.state.read().schema.extract(&document)?;
        self.set(key, document)
    }

    /// Store a document under `key`
    ///
    /// Steps:
    /// 1. Validate the key shape
    /// 2. Rotate if the current memtable is full
    /// 3. Write to the current memtable
    /// 4. Notify mutation listeners
    pub fn set(&self, key: Key, document: Document) -> Result<()> {
        let mut state = self.state.write();

        // Step 1: Reject keys the sorted structures cannot compare
        state.schema.validate(&key)?;

        // Step 2: Pre-check capacity, the write always lands in the new table
        self.rotate_if_full(&mut state);

        // Step 3: Write to MemTable
        state.current.insert(key.clone(), document)?;

        // Step 4: Report the mutation
        self.record_mutation(&mut state, key, EntryFlag::Live);

        Ok(())
    }

    /// Delete the document with the same primary key as `document`
    pub fn remove(&self, document: &Document) -> Result<()> {
        let key = self.state.read().schema.extract(document)?;
        self.delete(key)
    }

    /// Write a tombstone for `key` into the current memtable
    ///
    /// Frozen generations are never touched, so a live value in an older
    /// generation stays reachable through the fallback search.
    pub fn delete(&self, key: Key) -> Result<()> {
        let mut state = self.state.write();

        state.schema.validate(&key)?;

        // Tombstoning a slot the current memtable already holds does not grow
        // it, so only a new slot can trigger rotation
        if !state.current.contains_key(&key)? {
            self.rotate_if_full(&mut state);
        }

        state.current.delete(key.clone())?;

        self.record_mutation(&mut state, key, EntryFlag::Deleted);

        Ok(())
    }

    /// Freeze the current memtable now, regardless of its size
    ///
    /// Returns the id of the frozen generation, or `None` if the current
    /// memtable was empty.
    pub fn rotate(&self) -> Option<GenerationId> {
        let mut state = self.state.write();
        self.rotate_locked(&mut state)
    }

    /// Close the store
    ///
    /// Freezes any remaining entries so freeze listeners have seen every
    /// accepted write.
    pub fn close(self) -> Result<()> {
        self.rotate();

        let state = self.state.read();
        tracing::info!(
            generations = state.chain.len(),
            entries = state.chain.total_entries(),
            mutations = state.sequence,
            "data store closed"
        );

        Ok(())
    }

    // =========================================================================
    // Read Path
    // =========================================================================

    /// Get a document by key
    ///
    /// Search order:
    /// 1. Current memtable
    /// 2. Frozen generations (newest to oldest), first live entry wins
    pub fn get(&self, key: &Key) -> Result<Document> {
        self.search(key)?
            .ok_or_else(|| StoreError::NotFound(key.clone()))
    }

    /// Whether `get` would succeed for `key`
    pub fn has(&self, key: &Key) -> Result<bool> {
        Ok(self.search(key)?.is_some())
    }

    fn search(&self, key: &Key) -> Result<Option<Document>> {
        let state = self.state.read();

        state.schema.check(key)?;

        // Step 1: Check the current memtable first (most recent data)
        match state.current.lookup(key)? {
            Lookup::Live(document) => return Ok(Some(document)),
            // A tombstone here does not end the search
            Lookup::Tombstoned | Lookup::NotFound => {}
        }

        // Step 2: Check frozen generations (newest to oldest)
        state.chain.lookup(key)
    }

    // =========================================================================
    // Extension Points
    // =========================================================================

    /// Register a listener for frozen generations
    pub fn subscribe_freeze(&self, listener: impl FreezeListener + 'static) {
        self.freeze_listeners.write().push(Arc::new(listener));
    }

    /// Register a listener for key mutations
    pub fn subscribe_mutations(&self, listener: impl MutationListener + 'static) {
        self.mutation_listeners.write().push(Arc::new(listener));
    }

    /// Swap a frozen generation for another representation with the same id
    ///
    /// Meant for a persistence layer that has written a frozen generation out
    /// and wants lookups served from its own handle. Must not be called from
    /// inside a listener.
    pub fn replace_generation(&self, handle: Arc<dyn Generation>) -> Result<()> {
        let mut state = self.state.write();
        let previous = state.chain.replace(handle)?;

        tracing::debug!(
            generation = previous.id(),
            entries = previous.len(),
            "generation replaced"
        );

        Ok(())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Primary key kinds, once declared or pinned by the first write
    pub fn key_kinds(&self) -> Option<Vec<ScalarKind>> {
        self.state.read().schema.kinds().map(<[ScalarKind]>::to_vec)
    }

    /// Id of the current memtable's generation
    pub fn current_generation(&self) -> GenerationId {
        self.state.read().current_id
    }

    /// Entry count of the current memtable
    pub fn current_len(&self) -> usize {
        self.state.read().current.len()
    }

    /// Snapshot of the current memtable's entries, in key order
    pub fn current_entries(&self) -> Vec<Entry> {
        self.state.read().current.entries().to_vec()
    }

    /// Number of frozen generations
    pub fn generation_count(&self) -> usize {
        self.state.read().chain.len()
    }

    /// Frozen generation ids, newest first
    pub fn generation_ids(&self) -> Vec<GenerationId> {
        self.state.read().chain.ids()
    }

    /// Frozen generation at `index`, 0 being the newest
    pub fn generation(&self, index: usize) -> Option<Arc<dyn Generation>> {
        self.state.read().chain.get(index).cloned()
    }

    /// Entries across the current memtable and every generation
    pub fn total_entries(&self) -> usize {
        let state = self.state.read();
        state.current.len() + state.chain.total_entries()
    }

    /// Number of mutations applied so far
    pub fn mutation_count(&self) -> u64 {
        self.state.read().sequence
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn rotate_if_full(&self, state: &mut StoreState) {
        if state.current.len() >= self.config.capacity {
            self.rotate_locked(state);
        }
    }

    /// Freeze `current`, push it onto the chain and start a new generation
    /// (called with the write lock held)
    fn rotate_locked(&self, state: &mut StoreState) -> Option<GenerationId> {
        if state.current.is_empty() {
            return None;
        }

        let id = state.current_id;

        // Step 1: Freeze by moving the table out of the current slot
        let table = std::mem::take(&mut state.current);
        let frozen = Arc::new(FrozenTable::new(id, table));

        // Step 2: Publish it as the newest generation
        state.chain.push(Arc::clone(&frozen) as Arc<dyn Generation>);
        state.current_id += 1;

        tracing::debug!(
            generation = id,
            entries = frozen.len(),
            chain_len = state.chain.len(),
            "memtable rotated"
        );

        // Step 3: Hand the frozen entries to persistence collaborators
        for listener in self.freeze_listeners.read().iter() {
            listener.on_freeze(&frozen);
        }

        Some(id)
    }

    fn record_mutation(&self, state: &mut StoreState, key: Key, flag: EntryFlag) {
        state.sequence += 1;

        let event = MutationEvent {
            sequence: state.sequence,
            generation: state.current_id,
            key,
            flag,
        };

        tracing::trace!(
            sequence = event.sequence,
            generation = event.generation,
            key = %event.key,
            flag = ?event.flag,
            "mutation applied"
        );

        for listener in self.mutation_listeners.read().iter() {
            listener.on_mutation(&event);
        }
    }
}
