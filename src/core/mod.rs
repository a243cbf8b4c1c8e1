pub mod registry;
pub mod shared;

pub use crate::domain::model::{Department, PatientRecord, ServeOutcome};
pub use crate::utils::error::{RegistryError, Result};
