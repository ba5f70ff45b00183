//! Kernel Primitives
//!
//! Fixed tables and the stateless 32-bit operators every other module builds on.

pub mod constants;
pub mod primitives;
