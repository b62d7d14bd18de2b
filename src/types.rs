//! Global type definitions
//!
//! Stores constants and type aliases used globally by the container.

/// Hash value produced by the hashing functions
pub type HashValue = u64;

/// Default number of buckets for a newly created table
pub const DEFAULT_BUCKET_COUNT: usize = 8;

/// Load factor threshold above which the bucket array is grown
///
/// The trigger is strict: a table sitting exactly at the threshold does not
/// resize.
pub const LOAD_FACTOR_THRESHOLD: f64 = 0.75;

/// Growth factor applied to the bucket count on each resize
pub const GROWTH_FACTOR: usize = 2;
