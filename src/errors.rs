use std::path::PathBuf;

use thiserror::Error;

/// Startup failures of the host.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Dashboard bundle not found at '{}' (run `trunk build` in frontend/)", path.display())]
    BundleMissing { path: PathBuf },

    #[error("Bundle at '{}' has no index.html", path.display())]
    IndexMissing { path: PathBuf },

    #[error("Invalid bind address '{value}'")]
    InvalidBind { value: String },
}
