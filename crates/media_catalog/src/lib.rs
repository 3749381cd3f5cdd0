//! Content data model and read-only catalog queries for the media site.
//!
//! The catalog is supplied by an external data collaborator at startup and is
//! never mutated during a session; everything in this crate is a pure
//! function over that snapshot.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod model;
mod queries;

pub use model::{Catalog, CatalogError, Category, Creator, CreatorId, Photo, Video, VideoId};
pub use queries::parse_views;
