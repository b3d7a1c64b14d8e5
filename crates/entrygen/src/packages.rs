//! Resolved package directories and the discoverable plugin catalog
//!
//! Both values are computed once by the caller (typically at process start)
//! and passed read-only into every generator call, so independent calls can
//! share them without synchronization.

use std::fs;
use std::path::{Path, PathBuf};

use crate::text::file_base_name;

/// Source directories the generators emit imports against.
#[derive(Debug, Clone)]
pub struct RuntimePaths {
    /// The application project root; relative entry paths resolve here.
    pub project_root: PathBuf,
    /// Directory holding the application-factory variants.
    pub app_dir: PathBuf,
    /// Directory holding the internal plugin modules.
    pub plugins_dir: PathBuf,
}

impl RuntimePaths {
    /// Layout used by the runtime package: `<pkg>/lib/app` and
    /// `<pkg>/lib/plugins`.
    pub fn from_package_root(project_root: impl Into<PathBuf>, package_root: &Path) -> Self {
        let lib = package_root.join("lib");
        Self {
            project_root: project_root.into(),
            app_dir: lib.join("app"),
            plugins_dir: lib.join("plugins"),
        }
    }

    /// Resolve a possibly-relative path against the project root.
    pub fn abs_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}

/// One discoverable internal plugin module.
#[derive(Debug, Clone)]
pub struct PluginEntry {
    /// Plugin name (file name without extension).
    pub name: String,
    /// Full path of the plugin module.
    pub file: PathBuf,
}

/// Plugin modules found under the runtime package.
#[derive(Debug, Clone, Default)]
pub struct PluginCatalog {
    plugins: Vec<PluginEntry>,
}

impl PluginCatalog {
    /// Scan `dir` for plugin modules, sorted by name for deterministic
    /// output. An unreadable directory degrades to an empty catalog; a
    /// later lookup for any named plugin then fails with the usual usage
    /// error instead of propagating the IO failure.
    pub fn discover(dir: &Path) -> Self {
        let mut plugins: Vec<PluginEntry> = match fs::read_dir(dir) {
            Ok(entries) => entries
                .filter_map(Result::ok)
                .map(|entry| {
                    let file = entry.path();
                    PluginEntry {
                        name: file_base_name(&file, true),
                        file,
                    }
                })
                .collect(),
            Err(err) => {
                log::debug!("plugin directory {} not readable: {err}", dir.display());
                Vec::new()
            }
        };
        plugins.sort_by(|a, b| a.name.cmp(&b.name));
        log::debug!("discovered {} plugins under {}", plugins.len(), dir.display());
        Self { plugins }
    }

    /// Look a plugin up by name.
    pub fn find(&self, name: &str) -> Option<&PluginEntry> {
        self.plugins.iter().find(|plugin| plugin.name == name)
    }

    /// All known plugin names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugins.iter().map(|plugin| plugin.name.as_str())
    }

    /// Whether the catalog found anything.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn discover_names_plugins_after_their_files() {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join("mock.js"), "export default {}").expect("write");
        fs::write(dir.path().join("http.js"), "export default {}").expect("write");

        let catalog = PluginCatalog::discover(dir.path());
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, vec!["http", "mock"]);
        assert!(catalog.find("mock").is_some());
        assert!(catalog.find("bogus").is_none());
    }

    #[test]
    fn unreadable_directory_degrades_to_empty() {
        let catalog = PluginCatalog::discover(Path::new("/nonexistent/plugins"));
        assert!(catalog.is_empty());
        assert_eq!(catalog.names().count(), 0);
    }

    #[test]
    fn abs_path_resolves_against_the_project_root() {
        let paths = RuntimePaths::from_package_root("/work/app", Path::new("/work/app/node_modules/runtime"));
        assert_eq!(paths.abs_path("src/main.js"), PathBuf::from("/work/app/src/main.js"));
        assert_eq!(paths.abs_path("/abs/main.js"), PathBuf::from("/abs/main.js"));
        assert_eq!(paths.app_dir, PathBuf::from("/work/app/node_modules/runtime/lib/app"));
        assert_eq!(
            paths.plugins_dir,
            PathBuf::from("/work/app/node_modules/runtime/lib/plugins")
        );
    }
}
