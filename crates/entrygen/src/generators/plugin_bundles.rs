//! Plugin-bundles fragment
//!
//! Resolves the configured comma-separated plugin list against the
//! discovered catalog and emits one static import per plugin plus an array
//! binding of their identifiers. The one hard-failure path of the whole
//! subsystem lives here: an unknown plugin name is not recoverable.

use crate::config::AppConfig;
use crate::error::UsageError;
use crate::packages::PluginCatalog;
use crate::text::{EOL, ensure_path_quote, upper_first};
use crate::types::FxIndexSet;

/// Emit the plugin-bundle imports and array binding. `http_mock` appends
/// the `mock` plugin to the requested set.
pub fn import_plugin_bundles(
    config: &AppConfig,
    catalog: &PluginCatalog,
    http_mock: bool,
    import_name: Option<&str>,
) -> Result<String, UsageError> {
    let import_name = import_name.unwrap_or("plugins");

    let mut requested: FxIndexSet<String> = config
        .plugins
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect();
    if http_mock {
        requested.insert("mock".to_owned());
    }

    let mut found = Vec::with_capacity(requested.len());
    for name in &requested {
        let Some(entry) = catalog.find(name) else {
            return Err(UsageError::UnknownPlugin {
                name: name.clone(),
                available: catalog.names().map(str::to_owned).collect(),
            });
        };
        found.push((format!("plugin{}", upper_first(name)), entry.file.clone()));
    }

    if found.is_empty() {
        return Ok(format!("const {import_name}=[]{EOL}"));
    }

    let mut fragment = vec![format!("// plugin{EOL}")];
    for (identifier, file) in &found {
        fragment.push(format!(
            "import {identifier} from '{}'{EOL}",
            ensure_path_quote(&file.to_string_lossy())
        ));
    }
    let identifiers: Vec<&str> = found
        .iter()
        .map(|(identifier, _)| identifier.as_str())
        .collect();
    fragment.push(format!(
        "const {import_name}=[{}]{EOL}",
        identifiers.join(",")
    ));
    Ok(fragment.join(EOL))
}
