//! Entry code synthesis for application bootstrap source
//!
//! Given an in-memory description of an application's composition — entry
//! module, store/router capability flags, plugin list, and a route tree
//! produced by an external file-system scanner — the generators in this
//! crate emit the textual module fragments a downstream bundler compiles
//! into the application's bootstrap code:
//!
//! - [`generators::import_app_launcher`] — application-factory import
//! - [`generators::import_global_main`] — conventional entry-module import
//! - [`generators::import_plugin_bundles`] — plugin imports + array binding
//! - [`generators::import_router_options`] — the router-options literal
//!
//! The route-options compiler is the heart of the crate: it serializes the
//! route tree into a source literal, deduplicating identifiers for repeated
//! module references, optionally flattening nested routing, and splicing
//! raw code spans (import identifiers, spread expressions, utility
//! references) through quasi-quotation tag channels. See the module docs on
//! [`tagging`] for the technique.
//!
//! Every call owns its own identifier counters, tag tokens and import
//! collections; the only shared values are the caller-constructed
//! [`packages::RuntimePaths`] and [`packages::PluginCatalog`], which are
//! immutable after construction.

pub mod config;
pub mod error;
pub mod flatten;
pub mod generators;
pub mod identifiers;
pub mod packages;
pub mod routes;
pub mod tagging;
pub mod text;
pub mod types;

pub use config::{AppConfig, NestedRoutes, PropsMode};
pub use error::UsageError;
pub use generators::{
    RouterOptionsParams, import_app_launcher, import_global_main, import_plugin_bundles,
    import_router_options,
};
pub use packages::{PluginCatalog, RuntimePaths};
pub use routes::{BundleRef, PropsSpec, RouteNode};
