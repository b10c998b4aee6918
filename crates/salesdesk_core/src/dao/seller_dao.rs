//! Seller DAO backed by the `seller` table.
//!
//! # Responsibility
//! - Persist sellers with their department reference (`department_id`).
//! - Rehydrate the referenced department on every read.
//!
//! # Invariants
//! - `find_all` is ordered by `name ASC, id ASC`.
//! - A referenced department must already be persisted; pointing at a missing
//!   department row fails with `DaoError::Integrity`.
//! - Only the department id is written. Reads return the name stored in the
//!   `department` table, not the name carried by the saved value.

use super::{classify_write_error, require_id, require_transient, Dao, DaoError, DaoResult};
use crate::model::department::Department;
use crate::model::entity::{Entity, EntityId};
use crate::model::seller::Seller;
use chrono::NaiveDate;
use log::debug;
use rusqlite::{params, Connection, Row};

const SELLER_SELECT_SQL: &str = "SELECT
    s.id AS id,
    s.name AS name,
    s.email AS email,
    s.birth_date AS birth_date,
    s.base_salary AS base_salary,
    s.department_id AS department_id,
    d.name AS department_name
FROM seller s
LEFT JOIN department d ON d.id = s.department_id";

pub struct SqliteSellerDao<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSellerDao<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl Dao for SqliteSellerDao<'_> {
    type Entity = Seller;

    fn insert(&self, entity: &Seller) -> DaoResult<EntityId> {
        require_transient(entity)?;
        let department_id = department_reference(entity)?;

        self.conn
            .execute(
                "INSERT INTO seller (
                    name,
                    email,
                    birth_date,
                    base_salary,
                    department_id
                ) VALUES (?1, ?2, ?3, ?4, ?5);",
                params![
                    entity.name.as_str(),
                    entity.email.as_str(),
                    entity.birth_date,
                    entity.base_salary,
                    department_id,
                ],
            )
            .map_err(|err| classify_write_error(Seller::KIND, err))?;

        let id = self.conn.last_insert_rowid();
        debug!("event=dao_insert module=dao kind=seller status=ok id={id}");
        Ok(id)
    }

    fn update(&self, entity: &Seller) -> DaoResult<()> {
        let id = require_id(entity)?;
        let department_id = department_reference(entity)?;

        let changed = self
            .conn
            .execute(
                "UPDATE seller
                 SET
                    name = ?1,
                    email = ?2,
                    birth_date = ?3,
                    base_salary = ?4,
                    department_id = ?5
                 WHERE id = ?6;",
                params![
                    entity.name.as_str(),
                    entity.email.as_str(),
                    entity.birth_date,
                    entity.base_salary,
                    department_id,
                    id,
                ],
            )
            .map_err(|err| classify_write_error(Seller::KIND, err))?;

        if changed == 0 {
            return Err(DaoError::NotFound {
                kind: Seller::KIND,
                id,
            });
        }

        debug!("event=dao_update module=dao kind=seller status=ok id={id}");
        Ok(())
    }

    fn delete_by_id(&self, id: EntityId) -> DaoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM seller WHERE id = ?1;", [id])
            .map_err(|err| classify_write_error(Seller::KIND, err))?;

        if changed == 0 {
            return Err(DaoError::NotFound {
                kind: Seller::KIND,
                id,
            });
        }

        debug!("event=dao_delete module=dao kind=seller status=ok id={id}");
        Ok(())
    }

    fn find_by_id(&self, id: EntityId) -> DaoResult<Option<Seller>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELLER_SELECT_SQL} WHERE s.id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_seller_row(row)?));
        }

        Ok(None)
    }

    fn find_all(&self) -> DaoResult<Vec<Seller>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELLER_SELECT_SQL} ORDER BY s.name ASC, s.id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut sellers = Vec::new();
        while let Some(row) = rows.next()? {
            sellers.push(parse_seller_row(row)?);
        }

        Ok(sellers)
    }
}

/// Extracts the department id to store; the department's name is ignored.
fn department_reference(seller: &Seller) -> DaoResult<Option<EntityId>> {
    match &seller.department {
        None => Ok(None),
        Some(Department { id: Some(id), .. }) => Ok(Some(*id)),
        Some(Department { id: None, name }) => Err(DaoError::InvalidData(format!(
            "seller references unsaved department `{name}`"
        ))),
    }
}

fn parse_seller_row(row: &Row<'_>) -> DaoResult<Seller> {
    let id: EntityId = row.get("id")?;
    let department_id: Option<EntityId> = row.get("department_id")?;
    let department_name: Option<String> = row.get("department_name")?;

    let department = match (department_id, department_name) {
        (None, _) => None,
        (Some(department_id), Some(name)) => Some(Department::with_id(department_id, name)),
        (Some(department_id), None) => {
            return Err(DaoError::InvalidData(format!(
                "seller {id} references missing department {department_id}"
            )));
        }
    };

    Ok(Seller {
        id: Some(id),
        name: row.get("name")?,
        email: row.get("email")?,
        birth_date: row.get::<_, Option<NaiveDate>>("birth_date")?,
        base_salary: row.get("base_salary")?,
        department,
    })
}
