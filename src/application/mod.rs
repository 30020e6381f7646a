//! Application layer driving the ordering conversation.
//!
//! `flow` holds the pure transition functions, `engine` wraps them around a
//! single owned session, and `checkout` forwards confirmed sessions to an
//! order backend.

pub mod checkout;
pub mod engine;
pub mod flow;
