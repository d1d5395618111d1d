//! Analysis of generated layouts

/// Shape distribution statistics across seeded runs
pub mod statistics;
