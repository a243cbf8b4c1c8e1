// Domain layer: plain records for departments and patients. No I/O here.

pub mod model;
