//! Provenance sidecars: `draws.csv` gets `draws.provenance.json` next to it,
//! recording the build, the subcommand and its parameters.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Which code produced an artifact. Also printed by `report`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildInfo {
    /// `GIT_COMMIT` baked in at build time, `unknown` otherwise.
    pub code_rev: String,
    pub surfclass_version: String,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            code_rev: option_env!("GIT_COMMIT")
                .filter(|rev| !rev.is_empty())
                .unwrap_or("unknown")
                .to_string(),
            surfclass_version: surfclass::VERSION.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Sidecar {
    pub build: BuildInfo,
    pub command: String,
    pub params: Value,
    pub output: PathBuf,
}

/// Write the sidecar for `artifact` and return its path.
pub fn write_sidecar(artifact: &Path, command: &str, params: Value) -> Result<PathBuf> {
    let doc = Sidecar {
        build: BuildInfo::current(),
        command: command.to_string(),
        params,
        output: artifact.to_path_buf(),
    };
    let path = sidecar_path(artifact);
    std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), command, "provenance");
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "artifact".into(), |s| s.to_string_lossy().into_owned());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_artifact() {
        assert_eq!(
            sidecar_path(Path::new("runs/seed7/draws.parquet")),
            Path::new("runs/seed7/draws.provenance.json")
        );
    }

    #[test]
    fn sidecar_reads_back() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("torus.json");
        std::fs::write(&artifact, "{}").unwrap();
        let params = json!({ "handle_choice": "last", "crosscap_choice": "first" });
        let path = write_sidecar(&artifact, "classify", params.clone()).unwrap();

        let doc: Sidecar = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(doc.command, "classify");
        assert_eq!(doc.params, params);
        assert_eq!(doc.output, artifact);
        assert_eq!(doc.build, BuildInfo::current());
    }
}
