//! Error taxonomy for the data-acquisition and export boundaries.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while acquiring rows from a live provider.
///
/// Any variant aborts the whole fetch cycle: the aggregator never merges a
/// partial result into a snapshot, so the caller's previous snapshot stays
/// authoritative.
#[derive(Error, Debug)]
pub enum DataSourceError {
    /// The request never produced a usable response (DNS, connect, body read).
    #[error("{provider}: request failed: {source}")]
    Request {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("{provider}: HTTP {status}")]
    Status {
        provider: &'static str,
        status: reqwest::StatusCode,
    },

    /// The response body did not match the expected payload shape.
    #[error("{provider}: unexpected payload: {message}")]
    Decode {
        provider: &'static str,
        message: String,
    },

    /// The fetch cycle was abandoned before completion.
    #[error("fetch cancelled")]
    Cancelled,
}

/// Errors raised while exporting the visible rows to a document.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Nothing to export: the current view has no rows.
    #[error("nothing to export: the current view is empty")]
    Empty,

    /// The output file could not be written.
    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document backend rejected the data.
    #[error("document rendering failed: {0}")]
    Render(String),
}
