//! Video metadata store.
//!
//! The store is an external collaborator from the pipeline's point of
//! view: one read (ownership check) and one write (URL persistence) per
//! request, both through the `VideoStore` trait. The in-process
//! `MemoryVideoStore` is the batteries-included implementation; a real
//! database slots in behind the same trait.

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{MemoryVideoStore, VideoStore};
