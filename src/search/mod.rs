pub mod facets;
pub mod format;
pub mod request;

use crate::db::connection::Database;
use crate::db::properties::{search_properties, Window};
use crate::domain::property::PropertyRecord;
use crate::errors::ServerError;
use self::format::{render, SearchResponse};
use self::request::{PriceSort, SearchRequest};
use std::cmp::Ordering;

/// Run one search: filter in the store, sort, window, render.
///
/// Without a price sort the window is pushed into SQL. With one, every match
/// is loaded so unset prices can be anchored at the end before paging.
pub fn run(db: &Database, request: &SearchRequest) -> Result<SearchResponse, ServerError> {
    let window = Window {
        limit: request.limit,
        offset: request.offset,
    };

    let records = match request.sort {
        PriceSort::None => {
            db.with_conn(|conn| search_properties(conn, &request.filters, Some(window)))?
        }
        sort => {
            let mut records = db.with_conn(|conn| search_properties(conn, &request.filters, None))?;
            sort_by_price(&mut records, sort);
            records
                .into_iter()
                .skip(window.offset)
                .take(window.limit)
                .collect()
        }
    };

    tracing::debug!(
        matched = records.len(),
        limit = request.limit,
        offset = request.offset,
        "search complete"
    );

    Ok(render(records, request.format))
}

/// Order records by list price. Unset prices always go last, in store order.
///
/// Descending is the exact reverse of ascending over the priced records, so
/// equal prices flip too.
pub fn sort_by_price(records: &mut [PropertyRecord], sort: PriceSort) {
    if sort == PriceSort::None {
        return;
    }

    records.sort_by(|a, b| match (a.list_price, b.list_price) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    if sort == PriceSort::Descending {
        let priced = records
            .iter()
            .take_while(|r| r.list_price.is_some())
            .count();
        records[..priced].reverse();
    }
}
