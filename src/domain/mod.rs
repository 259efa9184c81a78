// Domain layer: participant roster, assignment model and the settings port.

pub mod model;
pub mod ports;
pub mod roster;
