//! Row-parallel helpers with feature-gated implementations
//!
//! With the `rayon` feature, independent rows/columns are mapped on the rayon
//! pool once there are enough of them to pay for the split; otherwise the
//! sequential fallback is used. Output order always matches index order.

/// Below this many items the sequential path is always taken
pub const PARALLEL_MIN_ITEMS: usize = 64;

/// Check if parallel processing is available
#[cfg(feature = "rayon")]
pub fn is_parallel_available() -> bool {
    true
}

/// Check if parallel processing is available
#[cfg(not(feature = "rayon"))]
pub fn is_parallel_available() -> bool {
    false
}

/// Parallel map with index
#[cfg(feature = "rayon")]
pub fn parallel_map_indexed<U, F>(count: usize, f: F) -> Vec<U>
where
    U: Send,
    F: Fn(usize) -> U + Sync + Send,
{
    use rayon::prelude::*;
    if count < PARALLEL_MIN_ITEMS {
        return (0..count).map(f).collect();
    }
    (0..count).into_par_iter().map(f).collect()
}

/// Sequential map with index (fallback)
#[cfg(not(feature = "rayon"))]
pub fn parallel_map_indexed<U, F>(count: usize, f: F) -> Vec<U>
where
    F: Fn(usize) -> U,
{
    (0..count).map(f).collect()
}

/// Fallible parallel map with index; stops at the first error
#[cfg(feature = "rayon")]
pub fn try_parallel_map_indexed<U, E, F>(count: usize, f: F) -> Result<Vec<U>, E>
where
    U: Send,
    E: Send,
    F: Fn(usize) -> Result<U, E> + Sync + Send,
{
    use rayon::prelude::*;
    if count < PARALLEL_MIN_ITEMS {
        return (0..count).map(f).collect();
    }
    (0..count).into_par_iter().map(f).collect()
}

/// Fallible sequential map with index (fallback)
#[cfg(not(feature = "rayon"))]
pub fn try_parallel_map_indexed<U, E, F>(count: usize, f: F) -> Result<Vec<U>, E>
where
    F: Fn(usize) -> Result<U, E>,
{
    (0..count).map(f).collect()
}
