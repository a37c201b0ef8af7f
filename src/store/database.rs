//! SQLite-backed store
//!
//! Holds a single connection behind `Arc<Mutex<_>>` (rusqlite connections are
//! `Send` but not `Sync`). Every request performs one short locked read.

use crate::store::{OrderConfirmation, SpecialRequest, SpecialRequestOption, StoreError, StoreResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS order_confirmations (
        order_id INTEGER PRIMARY KEY,
        customer_name TEXT NOT NULL,
        customer_email TEXT NOT NULL,
        items TEXT NOT NULL DEFAULT '[]',
        special_requests TEXT NOT NULL DEFAULT '[]',
        total_cents INTEGER NOT NULL DEFAULT 0,
        status TEXT NOT NULL,
        created_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS special_requests (
        id INTEGER PRIMARY KEY,
        label TEXT NOT NULL,
        value TEXT NOT NULL,
        active INTEGER NOT NULL DEFAULT 1,
        sort INTEGER NOT NULL DEFAULT 0
    );

    CREATE INDEX IF NOT EXISTS idx_special_requests_active_sort
        ON special_requests(active, sort, id);
";

/// Relational store for order confirmations and special requests
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
    path: Option<PathBuf>,
}

impl Store {
    /// Open (or create) a database file and apply the schema
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
            ",
        )?;

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
            path: Some(path),
        };
        store.migrate()?;

        tracing::debug!(path = ?store.path, "Opened store");
        Ok(store)
    }

    /// Open a private in-memory database (tests, demos)
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
            path: None,
        };
        store.migrate()?;
        Ok(store)
    }

    /// Database file path, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Create tables and indexes if missing
    pub fn migrate(&self) -> StoreResult<()> {
        self.lock()?.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Readiness check: both tables must be queryable
    pub fn ping(&self) -> StoreResult<()> {
        self.lock()?.query_row(
            "SELECT EXISTS(SELECT 1 FROM order_confirmations)
                  + EXISTS(SELECT 1 FROM special_requests)",
            [],
            |row| row.get::<_, i64>(0),
        )?;
        Ok(())
    }

    /// Drop both tables so later queries fail
    #[cfg(test)]
    pub(crate) fn drop_tables(&self) -> StoreResult<()> {
        self.lock()?.execute_batch(
            "DROP TABLE order_confirmations;
             DROP TABLE special_requests;",
        )?;
        Ok(())
    }

    /// Look up a confirmation by exact order id
    pub fn find_order_confirmation(&self, order_id: i64) -> StoreResult<Option<OrderConfirmation>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(
            "SELECT order_id, customer_name, customer_email, items, special_requests,
                    total_cents, status, created_at
             FROM order_confirmations
             WHERE order_id = ?",
        )?;

        let raw = stmt
            .query_row(params![order_id], RawConfirmation::from_row)
            .optional()?;

        raw.map(RawConfirmation::decode).transpose()
    }

    /// Active special requests, ordered by `sort` then `id`
    pub fn list_active_special_requests(&self) -> StoreResult<Vec<SpecialRequestOption>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(
            "SELECT id, label, value FROM special_requests
             WHERE active = 1
             ORDER BY sort ASC, id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(SpecialRequestOption {
                id: row.get(0)?,
                label: row.get(1)?,
                value: row.get(2)?,
            })
        })?;

        let options = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(options)
    }

    /// Insert or replace a confirmation
    pub fn insert_order_confirmation(&self, order: &OrderConfirmation) -> StoreResult<()> {
        let items = serde_json::to_string(&order.items)?;
        let special_requests = serde_json::to_string(&order.special_requests)?;

        self.lock()?.execute(
            "INSERT OR REPLACE INTO order_confirmations
                (order_id, customer_name, customer_email, items, special_requests,
                 total_cents, status, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                order.order_id,
                order.customer_name,
                order.customer_email,
                items,
                special_requests,
                order.total_cents,
                order.status,
                order.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Insert or replace a special request option
    pub fn insert_special_request(&self, req: &SpecialRequest) -> StoreResult<()> {
        self.lock()?.execute(
            "INSERT OR REPLACE INTO special_requests (id, label, value, active, sort)
             VALUES (?, ?, ?, ?, ?)",
            params![req.id, req.label, req.value, req.active, req.sort],
        )?;
        Ok(())
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))
    }
}

/// Row as read from SQLite, before JSON/timestamp decoding
struct RawConfirmation {
    order_id: i64,
    customer_name: String,
    customer_email: String,
    items: String,
    special_requests: String,
    total_cents: i64,
    status: String,
    created_at: String,
}

impl RawConfirmation {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            order_id: row.get(0)?,
            customer_name: row.get(1)?,
            customer_email: row.get(2)?,
            items: row.get(3)?,
            special_requests: row.get(4)?,
            total_cents: row.get(5)?,
            status: row.get(6)?,
            created_at: row.get(7)?,
        })
    }

    fn decode(self) -> StoreResult<OrderConfirmation> {
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|_| StoreError::InvalidTimestamp(self.created_at.clone()))?
            .with_timezone(&Utc);

        Ok(OrderConfirmation {
            order_id: self.order_id,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            items: serde_json::from_str(&self.items)?,
            special_requests: serde_json::from_str(&self.special_requests)?,
            total_cents: self.total_cents,
            status: self.status,
            created_at,
        })
    }
}
