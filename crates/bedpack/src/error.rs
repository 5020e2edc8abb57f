//! Pack generation error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    /// A builder was finished without one of its mandatory components.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// `save()` needed to write `manifest.json` but none was ever captured.
    #[error("pack `{0}` has no manifest: call manifest() before save()")]
    MissingManifest(String),

    /// `save()` needed to write `skins.json` but none was ever captured.
    #[error("skin pack `{0}` has no skins.json: call skins() before save()")]
    MissingSkins(String),

    /// A script entry was supplied for a module type that cannot carry one.
    #[error("module type `{0}` cannot carry a script entry")]
    EntryOnNonScriptModule(&'static str),

    #[error("tried to set license `{0}`, but one was already present")]
    LicenseAlreadySet(String),

    /// Filesystem failure, surfaced under the fail-fast I/O policy.
    #[error("failed to {} `{}`: {}", .action, .path.display(), .source)]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json serialization: {0}")]
    Json(#[from] serde_json::Error),
}
