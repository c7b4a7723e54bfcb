//! Snapshot assembly: concurrent acquisition, aggregation, cancellation.

use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use tokio::sync::watch;
use tracing::debug;

use super::error::DataSourceError;
use super::model::Row;
use crate::providers::RowSource;

/// The full merged collection of rows from all sources at a point in time.
/// Replaced wholesale on every fetch cycle, never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub rows: Vec<Row>,
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(rows: Vec<Row>) -> Self {
        Snapshot {
            rows,
            fetched_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Concatenates row sequences in caller order into a new snapshot.
pub fn build_snapshot(parts: Vec<Vec<Row>>) -> Snapshot {
    let rows: Vec<Row> = parts.into_iter().flatten().collect();
    debug!("Built snapshot with {} rows", rows.len());
    Snapshot::new(rows)
}

/// Runs every live source concurrently, appends the static parts, and builds
/// the next snapshot.
///
/// Fails fast: if any source errors, no snapshot is produced and the caller's
/// current one stays authoritative. Flipping `cancel` to `true` (or dropping
/// its sender) abandons the in-flight requests.
pub async fn refresh(
    live: &[&dyn RowSource],
    static_parts: Vec<Vec<Row>>,
    mut cancel: watch::Receiver<bool>,
) -> Result<Snapshot, DataSourceError> {
    let fetches = try_join_all(live.iter().map(|source| source.fetch_rows()));

    let mut parts = tokio::select! {
        result = fetches => result?,
        _ = cancelled(&mut cancel) => {
            debug!("Fetch cycle cancelled");
            return Err(DataSourceError::Cancelled);
        }
    };

    parts.extend(static_parts);
    Ok(build_snapshot(parts))
}

async fn cancelled(cancel: &mut watch::Receiver<bool>) {
    while !*cancel.borrow() {
        // A dropped sender means the owning view is gone; treat it the same
        // as an explicit cancel.
        if cancel.changed().await.is_err() {
            return;
        }
    }
}
