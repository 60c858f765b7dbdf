//! Hash map used for per-event-kind listener tables.
//!
//! Fx hashing by default; the `std-hash` feature switches to the SipHash
//! map from `std`. Either way, build maps with `HashMap::default()`.

#[cfg(feature = "std-hash")]
pub mod map {
    pub use std::collections::HashMap;
}

#[cfg(not(feature = "std-hash"))]
pub mod map {
    pub use rustc_hash::FxHashMap as HashMap;
}
