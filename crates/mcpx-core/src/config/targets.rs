//! Config target resolution: which files to examine, in which order.

use std::path::{Path, PathBuf};

/// One candidate configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigTarget {
    pub path: PathBuf,
    /// A missing file is skipped instead of failing the load.
    pub optional: bool,
    /// Entries apply only for names not already defined by an earlier target.
    pub skip_if_exists: bool,
}

/// Decide the ordered list of files to read.
///
/// An explicit path yields exactly that one required target. Otherwise the
/// project-level `mcp.json` is read first and the user-level
/// `~/.mcpx/mcp.json` underlays it: the skip-if-exists flag on the user
/// target is what makes project configuration win at merge time.
pub fn resolve_config_targets(
    config_path: Option<&Path>,
    root_dir: &Path,
    home_dir: &Path,
) -> Vec<ConfigTarget> {
    if let Some(path) = config_path {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            root_dir.join(path)
        };
        return vec![ConfigTarget {
            path,
            optional: false,
            skip_if_exists: false,
        }];
    }

    vec![
        ConfigTarget {
            path: root_dir.join("mcp.json"),
            optional: true,
            skip_if_exists: false,
        },
        ConfigTarget {
            path: home_dir.join(".mcpx").join("mcp.json"),
            optional: true,
            skip_if_exists: true,
        },
    ]
}

/// Existence probe over the resolver's output, checked before any parsing.
pub fn has_existing_config(targets: &[ConfigTarget]) -> bool {
    targets.iter().any(|target| target.path.exists())
}
