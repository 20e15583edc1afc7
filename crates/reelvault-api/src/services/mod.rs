//! Application services.

pub mod ingest;

pub use ingest::{IngestPipeline, PublishedMedia};
