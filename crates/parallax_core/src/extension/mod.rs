//! Capability negotiation against the external runtime.
//!
//! # Responsibility
//! - Track which optional extensions were negotiated per instance, and
//!   at what version.
//! - Resolve typed entry points for the optional extension set.
//!
//! # Invariants
//! - Enablement and dispatch tables are built exactly once per runtime
//!   instance and must never outlive it.
//! - Resolution is blind; enablement is the semantic gate for calls.

pub mod dispatch;
pub mod enablement;
pub mod names;
pub mod properties;
