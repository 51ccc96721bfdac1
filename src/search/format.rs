// src/search/format.rs

use crate::domain::property::PropertyRecord;
use crate::search::request::OutputFormat;
use serde::Serialize;
use std::collections::BTreeMap;

/// Rendered body of a `/search` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
    /// `format=json`: records in final order.
    Records(Vec<PropertyRecord>),
    /// `format=map`: full address to `"lat,lon"`.
    AddressMap(BTreeMap<String, String>),
}

pub fn render(records: Vec<PropertyRecord>, format: OutputFormat) -> SearchResponse {
    match format {
        OutputFormat::Json => SearchResponse::Records(records),
        OutputFormat::Map => SearchResponse::AddressMap(address_map(&records)),
    }
}

/// Collapse records into `{ full_address: "lat,lon" }`.
///
/// Records without both coordinates are left out. When two records share an
/// address, the later one overwrites the earlier and the earlier is lost.
pub fn address_map(records: &[PropertyRecord]) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for record in records {
        if let Some(coords) = record.coordinates() {
            if let Some(previous) = out.insert(record.full_address(), coords) {
                tracing::debug!(
                    address = %record.full_address(),
                    dropped = %previous,
                    "address collision in map output"
                );
            }
        }
    }
    out
}
