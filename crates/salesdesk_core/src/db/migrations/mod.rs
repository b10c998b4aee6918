//! Schema migrations for the sales desk store.
//!
//! # Responsibility
//! - Bring a connection up to the department/seller schema.
//! - Refuse databases written by a newer build.
//!
//! # Invariants
//! - Versions are strictly increasing; the applied version lives in
//!   `PRAGMA user_version`.
//! - All pending steps run in one transaction.
//! - After migrating, every table in [`SCHEMA_TABLES`] exists.

use crate::db::{DbError, DbResult};
use log::{debug, info};
use rusqlite::{Connection, OptionalExtension};

/// Tables the DAOs rely on.
pub const SCHEMA_TABLES: &[&str] = &["department", "seller"];

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "department_and_seller",
    sql: include_str!("0001_init.sql"),
}];

/// Latest schema version this build can write.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Schema version recorded in the database (0 for a fresh file).
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

/// Migrates `conn` to [`latest_version`] and checks the resulting schema.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from = schema_version(conn)?;
    let to = latest_version();

    if from > to {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from,
            latest_supported: to,
        });
    }

    if from < to {
        let tx = conn.transaction()?;
        for migration in MIGRATIONS.iter().filter(|m| m.version > from) {
            tx.execute_batch(migration.sql)?;
            tx.pragma_update(None, "user_version", migration.version)?;
            debug!(
                "event=db_migrate_step module=db version={} name={}",
                migration.version, migration.name
            );
        }
        tx.commit()?;
        info!("event=db_migrate module=db status=ok from={from} to={to}");
    }

    verify_schema(conn)
}

fn verify_schema(conn: &Connection) -> DbResult<()> {
    for &table in SCHEMA_TABLES {
        let found = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1;",
                [table],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        if found.is_none() {
            return Err(DbError::MissingTable(table));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versions_are_strictly_increasing() {
        assert!(MIGRATIONS
            .windows(2)
            .all(|pair| pair[0].version < pair[1].version));
        assert_eq!(latest_version(), 1);
    }

    #[test]
    fn fresh_connection_is_migrated_to_sales_schema() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert_eq!(schema_version(&conn).unwrap(), 0);

        apply_migrations(&mut conn).unwrap();

        assert_eq!(schema_version(&conn).unwrap(), latest_version());
        verify_schema(&conn).unwrap();
        let seller_columns: Vec<String> = conn
            .prepare("SELECT name FROM pragma_table_info('seller') ORDER BY cid;")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            seller_columns,
            ["id", "name", "email", "birth_date", "base_salary", "department_id"]
        );
    }

    #[test]
    fn reapplying_keeps_existing_rows() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();
        conn.execute("INSERT INTO department (name) VALUES ('Books');", [])
            .unwrap();

        apply_migrations(&mut conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM department;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn current_version_without_tables_is_reported_missing() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.pragma_update(None, "user_version", latest_version())
            .unwrap();

        let err = apply_migrations(&mut conn).unwrap_err();
        assert!(matches!(err, DbError::MissingTable("department")));
    }
}
