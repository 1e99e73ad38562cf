use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check `infra/.env.example` for the variables the backend reads.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be parsed.
    #[error("Invalid value '{value}' for environment variable {var}")]
    InvalidValue {
        /// Name of the variable
        var: String,
        /// The rejected value
        value: String,
    },
}
