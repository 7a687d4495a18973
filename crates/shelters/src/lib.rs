//! Weaviate shelter store client.
//!
//! The external store holds one object per shelter under the `Shelter`
//! class; this crate only reads it. Vector-similarity capability is
//! unused — the store serves purely as a geo-radius index.

mod client;
mod error;

pub use client::{ShelterStore, WeaviateShelterStore, SHELTER_CLASS_NAME};
pub use error::StoreError;
