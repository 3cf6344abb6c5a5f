//! Adapters layer: event-bus implementations of this subsystem's ports.

pub mod bus;
