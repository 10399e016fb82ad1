//! Extraction tests over renderer-shaped pages.

mod turns;
