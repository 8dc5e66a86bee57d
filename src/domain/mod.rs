// Domain layer: the activity value and the observer/factory ports.

pub mod model;
pub mod ports;
