use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::errors::DomainError;

/// Errors that end a command-line run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Output error: {0}")]
    Output(String),
}

impl From<r2d2::Error> for AppError {
    fn from(e: r2d2::Error) -> Self {
        AppError::Domain(e.into())
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Output(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Output(e.to_string())
    }
}

impl AppError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) => 2,
            AppError::Domain(DomainError::DuplicateEmail(_))
            | AppError::Domain(DomainError::NotFound { .. }) => 3,
            AppError::Domain(DomainError::Storage(_)) => 4,
            AppError::Output(_) => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_exits_with_2() {
        let err: AppError = ConfigError::InvalidValue {
            key: "SHOP_POOL_SIZE",
            expected: "a positive integer",
            value: "0".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn not_found_and_duplicate_exit_with_3() {
        let not_found: AppError = DomainError::customer_not_found(7).into();
        let duplicate: AppError = DomainError::DuplicateEmail("a@b.c".to_string()).into();
        assert_eq!(not_found.exit_code(), 3);
        assert_eq!(duplicate.exit_code(), 3);
    }

    #[test]
    fn storage_failure_exits_with_4() {
        let err: AppError = DomainError::Storage("disk I/O error".to_string()).into();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn domain_errors_display_transparently() {
        let err: AppError = DomainError::product_not_found(3).into();
        assert_eq!(err.to_string(), "Product 3 not found");
    }

    #[test]
    fn duplicate_email_display() {
        assert_eq!(
            DomainError::DuplicateEmail("john@example.com".to_string()).to_string(),
            "Customer with email john@example.com already exists"
        );
    }

    #[test]
    fn json_error_maps_to_output() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = json_err.into();
        assert!(matches!(err, AppError::Output(_)));
        assert_eq!(err.exit_code(), 5);
    }
}
