mod error;

pub use error::{ServiceError, ValidationError};

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;
