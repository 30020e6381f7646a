//! In-process implementations of the domain ports.

pub mod in_memory;
