//! Transcript assembly tests.

mod transcript;
