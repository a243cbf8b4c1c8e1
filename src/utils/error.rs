use thiserror::Error;

/// Errors produced by the department registry itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Department not found: {name}")]
    DepartmentNotFound { name: String },
}

#[derive(Error, Debug)]
pub enum HospitalError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Department name is required")]
    MissingDepartment,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl HospitalError {
    /// Text shown to the clerk at the form.
    pub fn user_friendly_message(&self) -> String {
        match self {
            HospitalError::Registry(RegistryError::DepartmentNotFound { .. }) => {
                "Department not found!".to_string()
            }
            HospitalError::InvalidInput { field, .. } if field == "age" => {
                "Invalid age!".to_string()
            }
            HospitalError::InvalidInput { field, reason } => format!("Invalid {}: {}", field, reason),
            HospitalError::MissingField { .. } => "Please fill all fields!".to_string(),
            HospitalError::MissingDepartment => "Enter department name!".to_string(),
            HospitalError::ConfigError { message } => format!("Configuration problem: {}", message),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HospitalError>;
