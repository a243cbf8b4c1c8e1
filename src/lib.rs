pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::AppConfig;

pub use app::form::{Command, FormSession, Reply};
pub use crate::core::{registry::DepartmentRegistry, shared::SharedRegistry};
pub use domain::model::{Department, HospitalSnapshot, PatientRecord, ServeOutcome};
pub use utils::error::{HospitalError, RegistryError, Result};
