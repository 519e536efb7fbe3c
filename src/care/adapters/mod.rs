//! Adapter implementations for care ports.

pub mod memory;
