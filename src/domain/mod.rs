// Domain layer: models and ports. The accumulator core builds on these; I/O lives in config.

pub mod model;
pub mod ports;
