// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Offset-cursor aggregation shared by the fetch-all operations.

use std::future::Future;

use crate::error::{ClientError, Result};
use crate::models::Paginated;

/// Fetch pages until the provider reports offset 0.
///
/// `fetch` is called with the offset to request, starting at
/// `start_offset`. Records are concatenated in page order. Any failure
/// discards what was collected so far and is returned with the operation
/// name and the offset that failed.
///
/// There is no page limit: a provider that never returns offset 0 keeps
/// this loop running.
pub(crate) async fn collect_all<P, F, Fut>(
    operation: &'static str,
    start_offset: u64,
    mut fetch: F,
) -> Result<Vec<P::Record>>
where
    P: Paginated,
    F: FnMut(u64) -> Fut,
    Fut: Future<Output = Result<P>>,
{
    let mut records = Vec::new();
    let mut offset = start_offset;
    let mut pages = 0u32;

    loop {
        let page = fetch(offset)
            .await
            .map_err(|source| ClientError::Paginated {
                operation,
                offset,
                source: Box::new(source),
            })?;

        let (batch, next) = page.into_parts();
        pages += 1;
        tracing::debug!(operation, offset, next, count = batch.len(), "Fetched page");
        records.extend(batch);

        if next == 0 {
            break;
        }
        offset = next;
    }

    tracing::debug!(operation, pages, total = records.len(), "Fetched all pages");
    Ok(records)
}
