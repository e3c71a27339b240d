//! Centralized error types for azship
//!
//! Uses thiserror for typed errors that can be matched on,
//! while still being compatible with anyhow for propagation.

use thiserror::Error;

/// Top-level error type for azship operations
#[derive(Error, Debug)]
pub enum ShipError {
    #[error("Preflight error: {0}")]
    Preflight(#[from] PreflightError),

    #[error("Provisioning error: {0}")]
    Provision(#[from] ProvisionError),

    #[error("Packaging error: {0}")]
    Package(#[from] PackageError),
}

/// Precondition failures, raised before any remote call is made
#[derive(Error, Debug)]
pub enum PreflightError {
    #[error("Not logged in to Azure. Run `az login` and retry")]
    NotLoggedIn,

    #[error("Source path not found: {path}")]
    SourceMissing { path: String },

    #[error("Source path is not a directory: {path}")]
    SourceNotADirectory { path: String },
}

/// Azure control-plane errors surfaced through the az CLI
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Failed to execute `az {command}`: {source}. Is the Azure CLI installed?")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`az {command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Web app name '{name}' is already taken globally. Pick a different --name and retry")]
    NameTaken { name: String },

    #[error("Unexpected output from `az {command}`: {message}")]
    UnexpectedOutput { command: String, message: String },
}

/// Local archive creation errors
#[derive(Error, Debug)]
pub enum PackageError {
    #[error("I/O error while packaging: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Failed to walk source directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Entry {path} is outside the source directory")]
    OutsideSource { path: String },

    #[error("Entry {path} contains non-unicode symbols in its path")]
    NonUnicodePath { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preflight_error_display() {
        let err = PreflightError::NotLoggedIn;
        assert!(err.to_string().contains("az login"));
    }

    #[test]
    fn test_name_taken_mentions_name() {
        let err = ProvisionError::NameTaken {
            name: "shop-abcde".to_string(),
        };
        assert!(err.to_string().contains("shop-abcde"));
    }

    #[test]
    fn test_error_conversion() {
        let preflight_err = PreflightError::NotLoggedIn;
        let ship_err: ShipError = preflight_err.into();
        assert!(matches!(ship_err, ShipError::Preflight(_)));
    }

    #[test]
    fn test_package_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let ship_err: ShipError = PackageError::from(io_err).into();
        assert!(matches!(ship_err, ShipError::Package(PackageError::Io(_))));
    }
}
