// src/domain/property.rs

use rusqlite::types::ValueRef;
use rusqlite::Row;
use serde::{Serialize, Serializer};

/// One row of the `properties` table, as exposed to callers.
///
/// Text columns that are NULL in the store come back as empty strings, while
/// numeric columns that are NULL or unparseable come back as `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRecord {
    pub id: i64,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub broker_name: String,
    pub agent_name: String,
    #[serde(serialize_with = "serialize_price")]
    pub list_price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PropertyRecord {
    /// Column names match the projection in `db::properties`.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let text = |name: &str| -> rusqlite::Result<String> { Ok(text_value(row.get_ref(name)?)) };

        Ok(PropertyRecord {
            id: row.get("id")?,
            street_address: text("street_address")?,
            city: text("city")?,
            state: text("state")?,
            postal_code: text("postal_code")?,
            broker_name: text("broker_name")?,
            agent_name: text("agent_name")?,
            list_price: parse_price(row.get_ref("list_price")?),
            latitude: parse_coordinate(row.get_ref("latitude")?),
            longitude: parse_coordinate(row.get_ref("longitude")?),
        })
    }

    /// Display key: street, city, state and postal code joined by ", ".
    /// Blank parts are skipped.
    pub fn full_address(&self) -> String {
        [
            &self.street_address,
            &self.city,
            &self.state,
            &self.postal_code,
        ]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }

    /// `"<lat>,<lon>"` at two decimals, or `None` when either coordinate is unset.
    pub fn coordinates(&self) -> Option<String> {
        let (lat, lon) = (self.latitude?, self.longitude?);
        Some(format!("{lat:.2},{lon:.2}"))
    }
}

// Postal codes and similar columns are sometimes stored as numbers.
fn text_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Text(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Null | ValueRef::Blob(_) => String::new(),
    }
}

/// Listing prices arrive as numbers or as text like `"$1,250,000"`.
pub fn parse_price(value: ValueRef<'_>) -> Option<f64> {
    match value {
        ValueRef::Text(bytes) => {
            let cleaned: String = std::str::from_utf8(bytes)
                .ok()?
                .chars()
                .filter(|c| *c != '$' && *c != ',')
                .collect();
            parse_finite(&cleaned)
        }
        other => parse_coordinate(other),
    }
}

pub fn parse_coordinate(value: ValueRef<'_>) -> Option<f64> {
    match value {
        ValueRef::Integer(i) => Some(i as f64),
        ValueRef::Real(f) => Some(f).filter(|f| f.is_finite()),
        ValueRef::Text(bytes) => parse_finite(std::str::from_utf8(bytes).ok()?),
        ValueRef::Null | ValueRef::Blob(_) => None,
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}

// Whole-dollar prices serialize as integers rather than `500000.0`.
fn serialize_price<S: Serializer>(price: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
    match price {
        Some(p) if p.fract() == 0.0 && p.abs() < 9.0e15 => s.serialize_i64(*p as i64),
        Some(p) => s.serialize_f64(*p),
        None => s.serialize_none(),
    }
}
