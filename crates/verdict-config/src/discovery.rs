//! Configuration file discovery.
//!
//! Walks from a working directory towards the filesystem root looking for
//! `.verdict.toml` files, then appends the global `~/.verdict.toml`.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".verdict.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, global last. A file that sets
/// `root = true` ends the walk and suppresses the global file.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let stop = is_root_config(&candidate);
        configs.push(candidate);
        if stop {
            return configs;
        }
    }

    if let Some(global) = global_config_path()
        && global.is_file()
        && !configs.contains(&global)
    {
        configs.push(global);
    }

    configs
}

/// Returns the path to the global configuration file (`~/.verdict.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::TestDir;

    /// Drops the global config, which depends on the machine running the tests.
    fn local_only(configs: Vec<PathBuf>) -> Vec<PathBuf> {
        configs.into_iter().filter(|p| !is_global_config(p)).collect()
    }

    #[test]
    fn finds_nothing_in_empty_tree() {
        let dir = TestDir::new();
        let work = dir.create_dir("shop/reviews");
        assert!(local_only(discover_config_files(&work)).is_empty());
    }

    #[test]
    fn closest_config_comes_first() {
        let dir = TestDir::new();
        let outer = dir.create_config_at_root();
        let inner = dir.create_config("shop");
        let work = dir.create_dir("shop/reviews/2024");

        let configs = local_only(discover_config_files(&work));
        assert_eq!(configs, vec![inner, outer]);
    }

    #[test]
    fn directory_named_like_config_is_ignored() {
        let dir = TestDir::new();
        fs::create_dir_all(dir.path().join(CONFIG_FILENAME)).unwrap();
        let work = dir.create_dir("shop");
        assert!(local_only(discover_config_files(&work)).is_empty());
    }

    #[test]
    fn root_config_stops_walk_and_skips_global() {
        let dir = TestDir::new();
        dir.create_config_at_root();
        let root = dir.create_root_config("shop");
        let child = dir.create_config("shop/electronics");
        let work = dir.create_dir("shop/electronics/phones");

        let configs = discover_config_files(&work);
        assert_eq!(configs, vec![child, root]);
    }

    #[test]
    fn root_false_keeps_walking() {
        let dir = TestDir::new();
        let outer = dir.create_config_at_root();
        let inner = dir.create_config_with_content("shop", "root = false\n");
        let work = dir.create_dir("shop/reviews");

        let configs = local_only(discover_config_files(&work));
        assert_eq!(configs, vec![inner, outer]);
    }

    #[test]
    fn global_path_uses_config_filename() {
        let path = global_config_path().unwrap();
        assert!(path.ends_with(CONFIG_FILENAME));
        assert!(is_global_config(&path));
        assert!(!is_global_config(Path::new("/tmp/elsewhere/.verdict.toml")));
    }
}
