//! The store: scope-partitioned typed settings over a tabular document.
//!
//! A store holds its records in memory, partitioned by scope. The backing
//! table is read once, lazily, across all scopes; `flush` rewrites it
//! wholesale. Puts are in-memory until flushed.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use cellstash_core::{FromValue, Record, Scope, Value};
use cellstash_doc::{RawRow, TabularDocument};

use crate::error::{Result, StoreError};

/// Per-scope map from key to record. Last write wins per key.
#[derive(Debug, Default)]
pub struct ScopeTable {
    records: BTreeMap<String, Record>,
}

impl ScopeTable {
    /// Insert a record, replacing any existing record with the same key.
    pub fn insert(&mut self, record: Record) {
        self.records.insert(record.key.clone(), record);
    }

    /// True if a record with this key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    /// The record for this key, if present.
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.records.get(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// All records in key order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A scope-partitioned key/value store over a tabular document.
///
/// Each store owns an independent in-memory copy of the settings table.
/// Several stores may share one document handle; there is no cross-instance
/// consistency, and the last flush wins (see crate docs).
pub struct Store<D: TabularDocument> {
    doc: Arc<D>,
    scope: Option<Scope>,
    tables: BTreeMap<Scope, ScopeTable>,
    loaded: bool,
    dirty: bool,
}

impl<D: TabularDocument> Store<D> {
    /// Create a store over the given document, starting in the global scope.
    pub fn new(doc: Arc<D>) -> Self {
        Store {
            doc,
            scope: Some(Scope::global()),
            tables: BTreeMap::new(),
            loaded: false,
            dirty: false,
        }
    }

    /// The backing document handle.
    pub fn document(&self) -> &D {
        &self.doc
    }

    /// The active scope, if one has been established.
    pub fn scope(&self) -> Option<&Scope> {
        self.scope.as_ref()
    }

    /// True if there are puts that have not been flushed.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Select the active scope.
    ///
    /// The empty tag (global scope) is always valid. A non-empty tag must
    /// name an existing sheet; the check runs against the live document
    /// before any internal state changes, so a failed call leaves the
    /// previously active scope in place.
    pub fn set_scope(&mut self, tag: &str) -> Result<()> {
        if !tag.is_empty() && !self.doc.has_sheet(tag) {
            return Err(StoreError::InvalidScope {
                scope: tag.to_string(),
            });
        }
        let scope = Scope::new(tag);
        debug!(scope = %scope, "scope selected");
        self.scope = Some(scope);
        Ok(())
    }

    /// Adopt the document's currently active sheet as the scope.
    pub fn use_active_sheet(&mut self) -> Result<()> {
        let name = self.doc.active_sheet().ok_or(StoreError::NoActiveSheet)?;
        self.set_scope(&name)
    }

    /// Store a value under the active scope. In-memory only until `flush`.
    pub fn put(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        check_key(key)?;
        self.ensure_loaded()?;
        let scope = self.current_scope()?.clone();
        let record = Record::new(scope.clone(), key, value);
        self.tables.entry(scope).or_default().insert(record);
        self.dirty = true;
        Ok(())
    }

    /// Fetch a value from the active scope, coerced to `T`.
    ///
    /// Returns `default` when the key is absent. A present value of the
    /// wrong kind is a [`StoreError::Value`], not a silent default.
    pub fn get<T: FromValue>(&mut self, key: &str, default: T) -> Result<T> {
        check_key(key)?;
        self.ensure_loaded()?;
        match self.lookup(key)? {
            Some(record) => Ok(T::from_value(&record.value)?),
            None => Ok(default),
        }
    }

    /// Integer get with the result clamped into `[min, max]`.
    ///
    /// The clamp applies to whatever value resolves, stored or default, on
    /// every call; it guards against out-of-range persisted cells. Requires
    /// `min <= max`.
    pub fn get_clamped(&mut self, key: &str, default: i64, min: i64, max: i64) -> Result<i64> {
        let value = self.get(key, default)?;
        Ok(value.clamp(min, max))
    }

    /// True if the active scope holds this key.
    pub fn has_key(&mut self, key: &str) -> Result<bool> {
        check_key(key)?;
        self.ensure_loaded()?;
        Ok(self.lookup(key)?.is_some())
    }

    /// Keys stored in the active scope, sorted.
    pub fn keys(&mut self) -> Result<Vec<String>> {
        self.ensure_loaded()?;
        let scope = self.current_scope()?;
        Ok(self
            .tables
            .get(scope)
            .map(|t| t.keys().map(str::to_string).collect())
            .unwrap_or_default())
    }

    /// Store an arbitrary serde value as an opaque blob record.
    pub fn put_object<T: Serialize>(&mut self, key: &str, object: &T) -> Result<()> {
        let value = Value::from_object(object)?;
        self.put(key, value)
    }

    /// Fetch a blob record back as a typed object.
    ///
    /// Returns `None` when the key is absent; a present record that is not
    /// a decodable blob is a [`StoreError::Value`].
    pub fn get_object<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>> {
        check_key(key)?;
        self.ensure_loaded()?;
        match self.lookup(key)? {
            Some(record) => Ok(Some(record.value.to_object()?)),
            None => Ok(None),
        }
    }

    /// Serialize every in-memory scope back to the backing document.
    ///
    /// Full rewrite: the existing table is cleared and one row is written
    /// per record across all scopes. Row order is deterministic here
    /// (scopes, then keys, both sorted) but callers must not depend on it.
    pub fn flush(&mut self) -> Result<()> {
        // A flush that never loaded would erase rows it never saw.
        self.ensure_loaded()?;
        let rows: Vec<RawRow> = self
            .tables
            .iter()
            .flat_map(|(scope, table)| {
                table.records().map(move |record| RawRow {
                    scope: scope.as_str().to_string(),
                    key: record.key.clone(),
                    cell: record.value.render_cell(),
                })
            })
            .collect();
        self.doc.write_rows(&rows)?;
        self.dirty = false;
        debug!(rows = rows.len(), "flushed settings table");
        Ok(())
    }

    /// The active scope, or `UndefinedScope`.
    fn current_scope(&self) -> Result<&Scope> {
        self.scope.as_ref().ok_or(StoreError::UndefinedScope)
    }

    /// One-time load of the entire backing table, across all scopes.
    ///
    /// Runs before the first put, get, has-key, or flush, whichever comes
    /// first, and never again for the lifetime of the store.
    fn ensure_loaded(&mut self) -> Result<()> {
        if self.loaded {
            return Ok(());
        }
        let rows = self.doc.read_rows()?;
        debug!(rows = rows.len(), "loaded settings table");
        for row in rows {
            let scope = Scope::new(row.scope);
            let record = Record::new(scope.clone(), row.key, Value::parse_cell(&row.cell));
            self.tables.entry(scope).or_default().insert(record);
        }
        self.loaded = true;
        Ok(())
    }

    fn lookup(&self, key: &str) -> Result<Option<&Record>> {
        let scope = self.current_scope()?;
        Ok(self.tables.get(scope).and_then(|t| t.get(key)))
    }
}

fn check_key(key: &str) -> Result<()> {
    if key.is_empty() {
        Err(StoreError::EmptyKey)
    } else {
        Ok(())
    }
}
