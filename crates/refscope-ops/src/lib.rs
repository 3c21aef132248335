//! High-level operations wiring CLI commands to the loader and resolver.

pub mod ops_redirects;
pub mod ops_scan;
