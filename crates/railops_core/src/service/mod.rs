//! Use-case services over repository contracts.
//!
//! # Responsibility
//! - Provide stable entry points for view-layer callers.
//! - Compose multi-step store calls (transition + activity log).
//!
//! # Invariants
//! - Services never bypass repository validation or timestamp bookkeeping.
//! - Compositions are independent store calls; no cross-entity transaction
//!   is implied.

pub mod dashboard_service;
