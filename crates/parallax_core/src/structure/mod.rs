//! Tagged extensible-record layer.
//!
//! # Responsibility
//! - Associate every known extensible record type with its wire tag and
//!   display name.
//! - Define the `#[repr(C)]` records exchanged with the runtime.
//!
//! # Invariants
//! - The registry is process-wide `'static` data with no mutation path.
//! - Record field layout beyond the tag header is owned by the runtime
//!   specification and is not validated here.

pub mod records;
pub mod registry;
