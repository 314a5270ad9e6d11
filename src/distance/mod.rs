//! Great-circle distances and the travel-distance matrix.
//!
//! Provides the haversine distance function and a dense matrix over the
//! stops of a tour (depot at index 0).

mod haversine;
mod matrix;

pub use haversine::haversine_km;
pub use matrix::DistanceMatrix;
