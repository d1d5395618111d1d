//! Core placement algorithm: shape selection policies and the layout driver

/// Placement driver and seeded layout generation
pub mod executor;
/// Weighted shape selection and ordered degradation
pub mod selection;
