//! Application-launcher fragment
//!
//! Pure selection: one of four prebuilt application-factory variants is
//! chosen by the store/router capability flags and imported statically.

use crate::config::AppConfig;
use crate::packages::RuntimePaths;
use crate::text::{EOL, ensure_path_quote};

/// Emit the application-factory import for the configured capabilities.
pub fn import_app_launcher(
    config: &AppConfig,
    paths: &RuntimePaths,
    import_name: Option<&str>,
) -> String {
    let import_name = import_name.unwrap_or("createApp");

    let variant = match (config.use_store, config.use_router) {
        (true, true) => "full",
        (true, false) => "withStore",
        (false, true) => "withRouter",
        (false, false) => "only",
    };
    let create_app_file = paths.app_dir.join(format!("{variant}.js"));

    [
        format!("// app creator{EOL}"),
        format!(
            "import {import_name} from '{}'{EOL}",
            ensure_path_quote(&create_app_file.to_string_lossy())
        ),
    ]
    .join(EOL)
}
