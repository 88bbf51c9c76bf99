// Domain layer: the spec document, lifecycle states, and the ports the core depends on.

pub mod model;
pub mod ports;
