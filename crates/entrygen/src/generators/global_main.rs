//! Global-main fragment
//!
//! Imports the conventional entry module when it exists; otherwise binds the
//! explicit `undefined` sentinel so downstream code can branch on absence
//! without a reference error.

use crate::config::AppConfig;
use crate::packages::RuntimePaths;
use crate::text::{EOL, ensure_path_quote};

/// Emit the global-main import, or the `undefined` sentinel binding when no
/// entry file is present.
pub fn import_global_main(
    config: &AppConfig,
    paths: &RuntimePaths,
    import_name: Option<&str>,
) -> String {
    let import_name = import_name.unwrap_or("globalMain");

    let entry = config.module_entry.as_deref().unwrap_or("src/main.js");
    let global_main_file = paths.abs_path(entry);

    let mut fragment = vec![format!("// main.js{EOL}")];
    if global_main_file.exists() {
        fragment.push(format!(
            "import {import_name} from '{}'{EOL}",
            ensure_path_quote(&global_main_file.to_string_lossy())
        ));
    } else {
        fragment.push(format!("const {import_name}=undefined{EOL}"));
    }
    fragment.join(EOL)
}
