//! Layered ingestion of ore descriptor documents.
//!
//! Load order is a strict total order: built-in listings in index order,
//! then user overlay documents in natural file name order. All documents
//! after the first decode in reuse mode, so later layers patch earlier
//! entries by state identity.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::alphanum;
use crate::builtin;
use crate::codec::{self, DecodeMode};
use crate::descriptor::OreDescriptor;

/// Mod identifier; names the user configuration subdirectory.
pub const MOD_ID: &str = "bedrockores";

/// Errors that abort configuration loading.
///
/// Per-document read and parse failures are not here: those are logged and
/// the document skipped.
#[derive(Debug, Error)]
pub enum OreConfigError {
    /// An embedded resource the distribution must ship is missing.
    #[error("missing embedded config resource '{0}'")]
    MissingResource(String),
    /// The embedded index document does not parse.
    #[error("invalid embedded config resource '{name}': {source}")]
    InvalidResource {
        /// Resource file name.
        name: String,
        /// Underlying parse error.
        source: serde_json::Error,
    },
    /// Reading or creating part of the user configuration directory failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// Path the operation touched.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Load every descriptor layer into one flat, ordered list.
///
/// `config_dir` is the host's configuration directory; the mod-scoped
/// subdirectory `config_dir/bedrockores` is created if missing, and seeded
/// with an example overlay when it contains no documents yet.
pub(crate) fn load_descriptors(config_dir: &Path) -> Result<Vec<OreDescriptor>, OreConfigError> {
    let mut all_ores = Vec::new();

    load_builtin_ores(&mut all_ores)?;

    let user_dir = config_dir.join(MOD_ID);
    fs::create_dir_all(&user_dir).map_err(|source| OreConfigError::Io {
        path: user_dir.clone(),
        source,
    })?;

    extract_example(&user_dir)?;
    load_user_ores(&user_dir, &mut all_ores)?;

    Ok(all_ores)
}

fn load_builtin_ores(all_ores: &mut Vec<OreDescriptor>) -> Result<(), OreConfigError> {
    let index_json = builtin::read(builtin::INDEX_FILE)
        .ok_or_else(|| OreConfigError::MissingResource(builtin::INDEX_FILE.to_string()))?;
    let file_names: Vec<String> =
        serde_json::from_str(index_json).map_err(|source| OreConfigError::InvalidResource {
            name: builtin::INDEX_FILE.to_string(),
            source,
        })?;

    for name in &file_names {
        let Some(json) = builtin::read(name) else {
            warn!("Missing built-in ore listing '{name}'. Skipping.");
            continue;
        };
        if let Err(err) = codec::decode_into(json, DecodeMode::Reuse, all_ores) {
            warn!("Failed reading built-in ore listing '{name}': {err}. Skipping.");
        }
    }

    Ok(())
}

/// Write the example overlay into `user_dir` when it holds no documents.
///
/// The check runs before the write, so once extracted the example counts as
/// a user document and is never extracted again. Write failures are logged
/// and ignored; only listing the directory is fatal.
fn extract_example(user_dir: &Path) -> Result<(), OreConfigError> {
    if !list_json_files(user_dir)?.is_empty() {
        info!("Found ore config files, skipping extraction of example file.");
        return Ok(());
    }

    info!("No ore config files found, extracting example file.");
    let Some(json) = builtin::read(builtin::EXAMPLE_FILE) else {
        warn!("Missing built-in example listing '{}'.", builtin::EXAMPLE_FILE);
        return Ok(());
    };

    // Fresh mode: the example must not patch already-loaded entries. It is
    // re-read as an ordinary user document right after this.
    match codec::decode(json).and_then(|ores| codec::encode(&ores)) {
        Ok(text) => {
            let path = user_dir.join(builtin::EXAMPLE_FILE);
            if let Err(err) = fs::write(&path, text) {
                warn!("Failed writing '{}': {err}.", path.display());
            }
        }
        Err(err) => {
            warn!(
                "Built-in example listing '{}' is invalid: {err}.",
                builtin::EXAMPLE_FILE
            );
        }
    }

    Ok(())
}

fn load_user_ores(
    user_dir: &Path,
    all_ores: &mut Vec<OreDescriptor>,
) -> Result<(), OreConfigError> {
    let mut files = list_json_files(user_dir)?;
    files.sort_by(|a, b| alphanum::compare(&file_name(a), &file_name(b)));

    for path in files {
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(err) => {
                warn!("Failed reading '{}': {err}. Skipping.", path.display());
                continue;
            }
        };
        if let Err(err) = codec::decode_into(&json, DecodeMode::Reuse, all_ores) {
            warn!("Failed parsing '{}': {err}. Skipping.", path.display());
        }
    }

    Ok(())
}

fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>, OreConfigError> {
    let entries = fs::read_dir(dir).map_err(|source| OreConfigError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| OreConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
