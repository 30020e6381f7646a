//! Domain types of the ordering conversation: states, the session context,
//! validated inputs, pricing and the descriptors handed to the UI.

pub mod context;
pub mod order;
pub mod payment;
pub mod platform;
pub mod ports;
pub mod pricing;
pub mod quantity;
pub mod response;
pub mod state;
