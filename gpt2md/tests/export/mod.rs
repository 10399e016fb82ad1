//! End-to-end export tests with an injected clock.
