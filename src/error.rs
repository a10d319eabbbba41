use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("project.pbxproj not found in {}", bundle.display())]
    MetadataNotFound { bundle: PathBuf },
    #[error("failed to read {}", path.display())]
    MetadataReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
