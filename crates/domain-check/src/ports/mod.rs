//! Ports layer: trait definitions for this subsystem's boundaries.

pub mod outbound;
