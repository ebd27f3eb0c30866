// Domain layer: registration file model and the ports the registrar talks to.

pub mod model;
pub mod ports;
