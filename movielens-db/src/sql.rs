//! Generic statement execution.
//!
//! Every query in this crate goes through these three helpers so statement
//! failures are logged in one place, at the point where they happen.

use rusqlite::{Connection, OptionalExtension, Params, Row};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Run a query expected to produce at most one row.
///
/// Returns `Ok(None)` when the query matched nothing. Extra rows are ignored.
pub fn select_one_row<T, P, F>(
    conn: &Connection,
    sql: &str,
    params: P,
    map: F,
) -> Result<Option<T>, DbError>
where
    P: Params,
    F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
{
    log::debug!("select_one_row: {}", sql);
    conn.query_row(sql, params, map)
        .optional()
        .map_err(|e| failed("select_one_row", sql, e))
}

/// Run a query and map every resulting row.
pub fn select_n_rows<T, P, F>(
    conn: &Connection,
    sql: &str,
    params: P,
    map: F,
) -> Result<Vec<T>, DbError>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    log::debug!("select_n_rows: {}", sql);
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| failed("select_n_rows", sql, e))?;
    let rows = stmt
        .query_map(params, map)
        .map_err(|e| failed("select_n_rows", sql, e))?;
    let collected = rows.collect::<Result<Vec<_>, _>>();
    collected.map_err(|e| failed("select_n_rows", sql, e))
}

/// Execute an INSERT/UPDATE/DELETE and return the number of affected rows.
pub fn perform_action<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<usize, DbError> {
    log::debug!("perform_action: {}", sql);
    conn.execute(sql, params)
        .map_err(|e| failed("perform_action", sql, e))
}

fn failed(op: &str, sql: &str, err: rusqlite::Error) -> DbError {
    log::error!("{} error: {}", op, err);
    log::debug!("  statement: {}", sql);
    DbError::Sqlite(err)
}
