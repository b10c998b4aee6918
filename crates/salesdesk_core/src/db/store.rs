//! Process-wide storage handle.
//!
//! # Responsibility
//! - Hold the single SQLite connection shared by every DAO.
//! - Open it lazily on first use and close it explicitly or on drop.
//!
//! # Invariants
//! - At most one connection is open per `Store` at any time.
//! - DAOs borrow the connection, so `close_connection` cannot run while any
//!   DAO built from this store is still alive.
//! - Closing an in-memory store discards its data; the next open starts empty.

use super::{open_db, open_db_in_memory, DbError, DbResult};
use crate::config::StoreConfig;
use log::{error, info};
use once_cell::unsync::OnceCell;
use rusqlite::Connection;

/// Explicitly passed storage handle with lazy open and explicit close.
pub struct Store {
    config: StoreConfig,
    conn: OnceCell<Connection>,
}

impl Store {
    /// Creates a store handle. No connection is opened until first use.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            conn: OnceCell::new(),
        }
    }

    /// Creates a store handle backed by a private in-memory database.
    pub fn in_memory() -> Self {
        Self::new(StoreConfig::default())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns whether the underlying connection is currently open.
    pub fn is_open(&self) -> bool {
        self.conn.get().is_some()
    }

    /// Returns the shared connection, opening and migrating it on first call.
    ///
    /// Repeated calls return the same connection.
    pub fn connection(&self) -> DbResult<&Connection> {
        self.conn.get_or_try_init(|| match self.config.path.as_deref() {
            Some(path) => open_db(path),
            None => open_db_in_memory(),
        })
    }

    /// Closes the shared connection if it is open.
    ///
    /// Safe to call repeatedly; closing an already closed store is a no-op.
    pub fn close_connection(&mut self) -> DbResult<()> {
        let Some(conn) = self.conn.take() else {
            return Ok(());
        };

        match conn.close() {
            Ok(()) => {
                info!("event=db_close module=db status=ok");
                Ok(())
            }
            Err((_conn, err)) => {
                error!(
                    "event=db_close module=db status=error error_code=db_close_failed error={}",
                    err
                );
                Err(DbError::Sqlite(err))
            }
        }
    }
}
