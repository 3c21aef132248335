//! Assembly metadata reading for refscope.
//!
//! Wraps the `dotscope` ECMA-335 parser: finds candidate binaries in a
//! directory, reads each assembly's identity and declared references, and
//! records unreadable files with a typed skip reason instead of failing
//! the scan.

pub mod scan;
pub mod token;
