//! Analysis of assembled images
//!
//! This module contains the pattern scanner that locates occurrences of a
//! fixed shape across image orientations and derives roughness from them.

/// Pattern matching and roughness measurement
pub mod patterns;
