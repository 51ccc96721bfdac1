// src/search/request.rs

use std::collections::HashMap;

pub const DEFAULT_LIMIT: usize = 200;
pub const MAX_LIMIT: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceSort {
    #[default]
    None,
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Map,
}

/// Active predicates. `None` means no constraint on that field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filters {
    /// Case-insensitive substring.
    pub city: Option<String>,
    pub broker: Option<String>,
    pub agent: Option<String>,
    /// Upper-cased with all whitespace removed; matched as a prefix.
    pub postal: Option<String>,
    /// Case-insensitive exact match.
    pub state: Option<String>,
}

/// The validated, bounded form of one `/search` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub filters: Filters,
    pub sort: PriceSort,
    pub limit: usize,
    pub offset: usize,
    pub format: OutputFormat,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            filters: Filters::default(),
            sort: PriceSort::None,
            limit: DEFAULT_LIMIT,
            offset: 0,
            format: OutputFormat::Json,
        }
    }
}

impl SearchRequest {
    /// Build a request from decoded query parameters.
    ///
    /// Parsing is lenient: malformed `limit`/`offset` fall back to their
    /// defaults and unknown `sort`/`format` values are ignored. Nothing here
    /// fails.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let get = |key: &str| params.get(key).map(String::as_str);

        Self {
            filters: Filters {
                city: non_blank(get("city")),
                broker: non_blank(get("broker")),
                agent: non_blank(get("agent")),
                postal: non_blank(get("postal")).map(|p| clean_postal(&p)),
                state: non_blank(get("state")),
            },
            sort: parse_sort(get("sort")),
            limit: parse_limit(get("limit")),
            offset: parse_offset(get("offset")),
            format: parse_format(get("format")),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Postal codes compare without whitespace and without case.
pub fn clean_postal(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn parse_sort(value: Option<&str>) -> PriceSort {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("price_asc") => PriceSort::Ascending,
        Some("price_desc") => PriceSort::Descending,
        _ => PriceSort::None,
    }
}

fn parse_format(value: Option<&str>) -> OutputFormat {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("map") => OutputFormat::Map,
        _ => OutputFormat::Json,
    }
}

fn parse_int(name: &str, value: Option<&str>) -> Option<i64> {
    let raw = value?;
    match raw.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::debug!(param = name, value = raw, error = %e, "ignoring malformed integer");
            None
        }
    }
}

fn parse_limit(value: Option<&str>) -> usize {
    match parse_int("limit", value) {
        Some(n) => n.clamp(0, MAX_LIMIT as i64) as usize,
        None => DEFAULT_LIMIT,
    }
}

fn parse_offset(value: Option<&str>) -> usize {
    parse_int("offset", value)
        .map(|n| usize::try_from(n.max(0)).unwrap_or(usize::MAX))
        .unwrap_or(0)
}
