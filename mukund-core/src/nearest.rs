//! Nearest Feature Search
//!
//! Linear nearest-neighbour scan over any labelled set of positions.
//! Border vertices and harbors both go through here.
//!
//! Ties resolve to the first candidate in input order: a later candidate
//! replaces the current best only when it is strictly closer.

use serde::{Deserialize, Serialize};

use crate::error::{GeoError, Result};
use crate::geo::{distance_km, Coordinate};

/// Best candidate found by [`nearest`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nearest<T> {
    /// The candidate's label
    pub item: T,
    /// Where the candidate is
    pub position: Coordinate,
    /// Distance from the search origin, never negative
    pub distance_km: f64,
    /// Position of the candidate in the input sequence
    pub index: usize,
}

/// Find the candidate closest to `origin` under `distance`.
///
/// O(n) per call. Fails with [`GeoError::EmptyCandidateSet`] when
/// `candidates` yields nothing.
pub fn nearest<T, I, F>(origin: Coordinate, candidates: I, distance: F) -> Result<Nearest<T>>
where
    I: IntoIterator<Item = (T, Coordinate)>,
    F: Fn(Coordinate, Coordinate) -> f64,
{
    let mut best: Option<Nearest<T>> = None;

    for (index, (item, position)) in candidates.into_iter().enumerate() {
        let d = distance(origin, position);
        let closer = match &best {
            Some(current) => d < current.distance_km,
            None => true,
        };
        if closer {
            best = Some(Nearest {
                item,
                position,
                distance_km: d,
                index,
            });
        }
    }

    let best = best.ok_or(GeoError::EmptyCandidateSet("candidate set"))?;
    log::trace!(
        "Nearest to {} is candidate #{} at {} ({:.3} km)",
        origin,
        best.index,
        best.position,
        best.distance_km
    );
    Ok(best)
}

/// [`nearest`] over bare positions using great-circle distance
pub fn nearest_point<I>(origin: Coordinate, points: I) -> Result<Nearest<Coordinate>>
where
    I: IntoIterator<Item = Coordinate>,
{
    nearest(origin, points.into_iter().map(|p| (p, p)), distance_km)
}
