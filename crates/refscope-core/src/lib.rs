//! Core data types for refscope.
//!
//! This crate defines the fundamental types that represent scanned .NET
//! assemblies: the 4-part assembly version, assembly identities, and the
//! declared references that attribute a requested version to the assembly
//! that requested it.
//!
//! This crate is intentionally free of file and terminal I/O.

pub mod identity;
pub mod reference;
pub mod version;
