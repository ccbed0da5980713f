use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// different types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the requested operation completed
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (store I/O error, config error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the sourcing tracker.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
///
/// Vendor fetch failures never appear here: the vendor adapters degrade
/// to sentinel results instead of raising, so a refresh batch cannot fail
/// because of an unreachable vendor.
#[derive(Debug, Error)]
pub enum SourcingError {
    #[error("Project file not found: {path}\n\n💡 Hint: {suggestion}")]
    ProjectFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse project file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a bomsource project (JSON)")]
    ProjectParseError { path: PathBuf, details: String },

    #[error("Failed to write project file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    ProjectWriteError { path: PathBuf, details: String },

    #[error("No component with id matching '{id}'\n\n💡 Hint: Run the 'list' command to see component ids")]
    ComponentNotFound { id: String },

    /// Validation error for user-supplied component fields
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_project_file_not_found_display() {
        let error = SourcingError::ProjectFileNotFound {
            path: PathBuf::from("/test/bom.json"),
            suggestion: "Run 'bomsource init' first".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Project file not found"));
        assert!(display.contains("/test/bom.json"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Run 'bomsource init' first"));
    }

    #[test]
    fn test_project_parse_error_display() {
        let error = SourcingError::ProjectParseError {
            path: PathBuf::from("/test/bom.json"),
            details: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse project file"));
        assert!(display.contains("expected value at line 1"));
    }

    #[test]
    fn test_component_not_found_display() {
        let error = SourcingError::ComponentNotFound {
            id: "deadbeef".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("deadbeef"));
        assert!(display.contains("'list' command"));
    }
}
