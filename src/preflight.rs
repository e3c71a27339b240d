//! Precondition checks run before any mutating remote call
//!
//! Both checks fail the whole run immediately; there is nothing to retry.

use std::path::Path;

use crate::azure::AzCli;
use crate::error::{PreflightError, ProvisionError, ShipError};

/// Verify an authenticated az session exists.
///
/// A failed `az account show` means the operator has to authenticate
/// externally; a spawn failure (az not installed) is reported as such.
pub async fn ensure_logged_in(az: &AzCli) -> Result<(), ShipError> {
    match az.account_show().await {
        Ok(()) => Ok(()),
        Err(err @ ProvisionError::Spawn { .. }) => Err(err.into()),
        Err(_) => Err(PreflightError::NotLoggedIn.into()),
    }
}

/// Verify the source path exists and is a directory
pub fn ensure_source_dir(path: &Path) -> Result<(), PreflightError> {
    if !path.exists() {
        return Err(PreflightError::SourceMissing {
            path: path.display().to_string(),
        });
    }

    if !path.is_dir() {
        return Err(PreflightError::SourceNotADirectory {
            path: path.display().to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_rejected() {
        let err = ensure_source_dir(Path::new("/nonexistent/app/src")).unwrap_err();
        assert!(matches!(err, PreflightError::SourceMissing { .. }));
    }

    #[test]
    fn test_plain_file_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = ensure_source_dir(file.path()).unwrap_err();
        assert!(matches!(err, PreflightError::SourceNotADirectory { .. }));
    }

    #[test]
    fn test_directory_accepted() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ensure_source_dir(dir.path()).is_ok());
    }
}
