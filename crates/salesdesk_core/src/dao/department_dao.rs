//! Department DAO backed by the `department` table.
//!
//! # Invariants
//! - `find_all` is ordered by ascending id.
//! - Deleting a department still referenced by sellers fails with
//!   `DaoError::Integrity` and leaves the row in place.

use super::{classify_write_error, require_id, require_transient, Dao, DaoError, DaoResult};
use crate::model::department::Department;
use crate::model::entity::{Entity, EntityId};
use log::debug;
use rusqlite::{params, Connection, Row};

const DEPARTMENT_SELECT_SQL: &str = "SELECT id, name FROM department";

pub struct SqliteDepartmentDao<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentDao<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl Dao for SqliteDepartmentDao<'_> {
    type Entity = Department;

    fn insert(&self, entity: &Department) -> DaoResult<EntityId> {
        require_transient(entity)?;

        self.conn
            .execute(
                "INSERT INTO department (name) VALUES (?1);",
                params![entity.name.as_str()],
            )
            .map_err(|err| classify_write_error(Department::KIND, err))?;

        let id = self.conn.last_insert_rowid();
        debug!("event=dao_insert module=dao kind=department status=ok id={id}");
        Ok(id)
    }

    fn update(&self, entity: &Department) -> DaoResult<()> {
        let id = require_id(entity)?;

        let changed = self
            .conn
            .execute(
                "UPDATE department SET name = ?1 WHERE id = ?2;",
                params![entity.name.as_str(), id],
            )
            .map_err(|err| classify_write_error(Department::KIND, err))?;

        if changed == 0 {
            return Err(DaoError::NotFound {
                kind: Department::KIND,
                id,
            });
        }

        debug!("event=dao_update module=dao kind=department status=ok id={id}");
        Ok(())
    }

    fn delete_by_id(&self, id: EntityId) -> DaoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM department WHERE id = ?1;", [id])
            .map_err(|err| classify_write_error(Department::KIND, err))?;

        if changed == 0 {
            return Err(DaoError::NotFound {
                kind: Department::KIND,
                id,
            });
        }

        debug!("event=dao_delete module=dao kind=department status=ok id={id}");
        Ok(())
    }

    fn find_by_id(&self, id: EntityId) -> DaoResult<Option<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_department_row(row)?));
        }

        Ok(None)
    }

    fn find_all(&self) -> DaoResult<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut departments = Vec::new();
        while let Some(row) = rows.next()? {
            departments.push(parse_department_row(row)?);
        }

        Ok(departments)
    }
}

fn parse_department_row(row: &Row<'_>) -> DaoResult<Department> {
    Ok(Department {
        id: Some(row.get("id")?),
        name: row.get("name")?,
    })
}
