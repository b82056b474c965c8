//! End-to-end tests for the crema session lifecycle.
//!
//! The actual tests live under `tests/`; they drive a real session store
//! against an in-memory API fake and cache.
