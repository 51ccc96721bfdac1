use crate::domain::property::PropertyRecord;
use crate::errors::ServerError;
use crate::search::facets::FacetField;
use crate::search::request::{clean_postal, Filters};
use rusqlite::functions::FunctionFlags;
use rusqlite::types::{Value, ValueRef};
use rusqlite::{params_from_iter, Connection};

const SELECT_PROPERTIES: &str = r#"
    SELECT
        rowid AS id, street_address, city, state, postal_code,
        broker_name, agent_name, list_price, latitude, longitude
    FROM properties
    WHERE 1=1
"#;

/// Register `clean_postal(x)` on `conn` so stored codes are normalized by the
/// same Rust function as the request parameter.
pub fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "clean_postal",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let cleaned = match ctx.get_raw(0) {
                ValueRef::Text(bytes) => Some(clean_postal(&String::from_utf8_lossy(bytes))),
                ValueRef::Integer(i) => Some(i.to_string()),
                ValueRef::Real(f) => Some(clean_postal(&f.to_string())),
                ValueRef::Null | ValueRef::Blob(_) => None,
            };
            Ok(cleaned)
        },
    )
}

/// Row window pushed down into SQL when no in-memory sort is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub limit: usize,
    pub offset: usize,
}

/// Fetch every record matching all active filters, in store (rowid) order.
///
/// Matching uses `instr` rather than `LIKE` so `%` and `_` in user input are
/// compared literally. Case folding goes through SQLite `lower()`, which only
/// folds ASCII letters: `QUÉBEC` does not match `québec`.
///
/// `conn` must have had [`register_functions`] applied.
pub fn search_properties(
    conn: &Connection,
    filters: &Filters,
    window: Option<Window>,
) -> Result<Vec<PropertyRecord>, ServerError> {
    let mut sql = String::from(SELECT_PROPERTIES);
    let mut params: Vec<Value> = Vec::new();

    let mut push = |clause: &str, value: &str| {
        sql.push_str(clause);
        params.push(Value::Text(value.to_string()));
    };

    if let Some(postal) = &filters.postal {
        push(" AND instr(clean_postal(postal_code), ?) = 1", postal);
    }
    if let Some(city) = &filters.city {
        push(" AND instr(lower(city), lower(?)) > 0", city);
    }
    if let Some(agent) = &filters.agent {
        push(" AND instr(lower(agent_name), lower(?)) > 0", agent);
    }
    if let Some(broker) = &filters.broker {
        push(" AND instr(lower(broker_name), lower(?)) > 0", broker);
    }
    if let Some(state) = &filters.state {
        push(" AND lower(state) = lower(?)", state);
    }

    sql.push_str(" ORDER BY rowid");
    if let Some(w) = window {
        sql.push_str(" LIMIT ? OFFSET ?");
        params.push(Value::Integer(to_sql_int(w.limit)));
        params.push(Value::Integer(to_sql_int(w.offset)));
    }

    tracing::debug!(sql = %sql.trim(), params = params.len(), "searching properties");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(params.iter()), PropertyRecord::from_row)?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }
    Ok(results)
}

fn to_sql_int(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Distinct non-blank values of one facet column, sorted ascending.
pub fn distinct_values(conn: &Connection, field: FacetField) -> Result<Vec<String>, ServerError> {
    let column = field.column();
    let sql = format!(
        "SELECT DISTINCT CAST({column} AS TEXT) AS v FROM properties \
         WHERE {column} IS NOT NULL AND TRIM({column}) <> '' ORDER BY 1"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut values = Vec::new();
    for value in rows {
        values.push(value?);
    }
    Ok(values)
}
