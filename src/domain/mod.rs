// Domain layer: the pokemon model, its errors and the ports (interfaces) the
// orchestrator depends on. No HTTP or wire concerns live here.

pub mod errors;
pub mod model;
pub mod ports;
