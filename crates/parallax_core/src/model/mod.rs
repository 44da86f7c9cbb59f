//! Core value primitives for the capability layer.
//!
//! # Responsibility
//! - Define opaque runtime handles, typed identifiers and result codes.
//! - Define the two-sided selection index and plain wire value types.
//!
//! # Invariants
//! - Everything here is a plain value: no I/O, no locking, no lifecycle
//!   beyond ordinary scoping.

pub mod geometry;
pub mod handle;
pub mod ident;
pub mod result;
pub mod side;
