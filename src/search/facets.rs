// src/search/facets.rs

use crate::db::connection::Database;
use crate::db::properties::distinct_values;
use crate::errors::ServerError;
use serde::Serialize;

/// Columns that `/distinct` is allowed to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetField {
    City,
    Agent,
    Broker,
    State,
    Postal,
}

impl FacetField {
    pub fn parse(raw: Option<&str>) -> Result<Self, ServerError> {
        match raw.map(str::trim) {
            Some("city") => Ok(FacetField::City),
            Some("agent") => Ok(FacetField::Agent),
            Some("broker") => Ok(FacetField::Broker),
            Some("state") => Ok(FacetField::State),
            Some("postal") => Ok(FacetField::Postal),
            _ => Err(ServerError::BadRequest(
                "field must be one of city, agent, broker, state, postal".into(),
            )),
        }
    }

    /// Only these fixed names are ever interpolated into SQL.
    pub fn column(self) -> &'static str {
        match self {
            FacetField::City => "city",
            FacetField::Agent => "agent_name",
            FacetField::Broker => "broker_name",
            FacetField::State => "state",
            FacetField::Postal => "postal_code",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Facets {
    pub field: FacetField,
    pub values: Vec<String>,
    pub count: usize,
}

pub fn distinct(db: &Database, field: FacetField) -> Result<Facets, ServerError> {
    let values = db.with_conn(|conn| distinct_values(conn, field))?;
    Ok(Facets {
        field,
        count: values.len(),
        values,
    })
}
