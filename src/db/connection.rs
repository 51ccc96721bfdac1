use rusqlite::{Connection, OpenFlags};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::db::properties::register_functions;
use crate::errors::ServerError;

// Thread-local connection slot, tagged with the dataset path it was opened for.
thread_local! {
    static DB_CONN: RefCell<Option<(PathBuf, Connection)>> = const { RefCell::new(None) };
}

/// Handle to the read-only record store.
///
/// Built once at startup and shared by every worker. Each worker thread opens
/// its own connection on first use; nothing here is ever written.
#[derive(Clone, Debug)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open or fetch the per-thread read-only connection and run `f(conn)`.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&Connection) -> Result<T, ServerError>,
    {
        DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();
                let reusable = matches!(slot.as_ref(), Some((path, _)) if *path == self.path);
                if !reusable {
                    *slot = Some((self.path.clone(), open_read_only(&self.path)?));
                }
                match slot.as_ref() {
                    Some((_, conn)) => f(conn),
                    None => Err(ServerError::InternalError),
                }
            })
            .map_err(|_| ServerError::InternalError)?
    }
}

fn open_read_only(path: &Path) -> Result<Connection, ServerError> {
    tracing::debug!(path = %path.display(), "opening read-only connection");
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| ServerError::DbError(format!("Open DB failed: {e}")))?;

    register_functions(&conn)
        .map_err(|e| ServerError::DbError(format!("Registering SQL functions failed: {e}")))?;
    Ok(conn)
}

/// Confirm the dataset exists and carries a `properties` table.
/// Returns the number of records so startup can log it.
pub fn check_dataset(db: &Database) -> Result<i64, ServerError> {
    if !db.path().is_file() {
        return Err(ServerError::DbError(format!(
            "dataset not found at {}",
            db.path().display()
        )));
    }

    db.with_conn(|conn| {
        conn.query_row("SELECT COUNT(*) FROM properties", [], |row| row.get(0))
            .map_err(|e| ServerError::DbError(format!("Dataset check failed: {e}")))
    })
}
