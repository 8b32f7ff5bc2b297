//! Cross-target merging of raw server entries.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::schema::RawEntry;
use super::store;
use super::targets::ConfigTarget;
use crate::error::ConfigError;
use crate::mcp::ServerSource;

/// One raw entry after merging, with enough context to normalize it.
#[derive(Debug, Clone)]
pub struct MergedEntry {
    pub raw: RawEntry,
    /// Directory containing the file that defined this entry.
    pub base_dir: PathBuf,
    pub source: ServerSource,
}

/// Fold the targets, in order, into a name-keyed map.
///
/// Targets are applied strictly in resolver order: the skip-if-exists and
/// overwrite semantics are order-dependent. Later non-skip targets overwrite
/// earlier entries for the same name; skip-if-exists targets never replace an
/// existing name. A malformed file fails the whole merge.
pub fn merge_targets(
    targets: &[ConfigTarget],
) -> Result<BTreeMap<String, MergedEntry>, ConfigError> {
    let mut merged = BTreeMap::new();

    for target in targets {
        let Some(config) = store::read_config(&target.path, target.optional)? else {
            debug!(path = %target.path.display(), "config target absent, skipping");
            continue;
        };

        let base_dir = target
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        for (name, raw) in config.mcp_servers {
            if target.skip_if_exists && merged.contains_key(&name) {
                debug!(
                    server = %name,
                    path = %target.path.display(),
                    "name already defined by a higher-precedence source"
                );
                continue;
            }
            merged.insert(
                name,
                MergedEntry {
                    raw,
                    base_dir: base_dir.clone(),
                    source: ServerSource::local(target.path.clone()),
                },
            );
        }
    }

    Ok(merged)
}
