//! Conversion engine tests
//!
//! Pipeline output for renderer-shaped fragments, plus properties that hold
//! for arbitrary input.

mod pipeline;
mod properties;
