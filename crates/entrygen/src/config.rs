//! Build configuration consumed by the fragment generators
//!
//! The configuration bundle is assembled by the caller (config loading lives
//! outside this crate) and passed by reference into every generator call.

use serde::Deserialize;

/// Nested-routing mode requested by the application configuration.
///
/// `auto` keeps the scanned tree nested (the router nests natively),
/// `none` flattens every route, `manual` flattens but honors subtrees the
/// scanner marked as manually nested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NestedRoutes {
    /// Keep the tree nested.
    #[default]
    Auto,
    /// Flatten, honoring `manual_nested` subtrees.
    Manual,
    /// Flatten everything.
    None,
}

/// Prop-mapping mode for generated route records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropsMode {
    /// Drop `props` from generated routes entirely.
    #[default]
    None,
    /// Route params map to props natively; emit `props:true` as-is.
    Params,
    /// Map query values onto props through a shared helper.
    Query,
    /// Map params and query values onto props through a shared helper.
    All,
}

/// Application composition flags handed to the generators.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// State-management capability flag.
    pub use_store: bool,
    /// Router capability flag.
    pub use_router: bool,
    /// Nested-routing mode, see [`NestedRoutes`].
    pub nested_routes: NestedRoutes,
    /// Router history mode string, embedded verbatim into the options
    /// literal (`"hash"`, `"history"`, …).
    pub router_mode: String,
    /// Defer component imports to dynamically-loaded chunks.
    pub code_splitting: bool,
    /// Prop-mapping mode, see [`PropsMode`].
    pub map_props: PropsMode,
    /// Comma-separated plugin names to bundle.
    pub plugins: String,
    /// Conventional entry-module path, relative to the project root.
    pub module_entry: Option<String>,
    /// Production builds drop development-only diagnostic fields from the
    /// generated routes.
    pub production: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            use_store: false,
            use_router: false,
            nested_routes: NestedRoutes::default(),
            router_mode: "hash".to_owned(),
            code_splitting: false,
            map_props: PropsMode::default(),
            plugins: String::new(),
            module_entry: None,
            production: false,
        }
    }
}

/// Derive the production flag from the conventional environment signal.
pub fn production_from_env() -> bool {
    std::env::var("NODE_ENV").is_ok_and(|value| value == "production")
}
