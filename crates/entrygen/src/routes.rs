//! Route-tree input model
//!
//! The route tree arrives from the external file-system scanner (typically
//! as a JSON manifest) and is read-only to this crate: the flattener builds
//! fresh nodes instead of rewriting the input in place.

use serde::Deserialize;

use crate::types::FxIndexMap;

/// A single module reference: bundle file path plus an identifier-naming
/// hint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BundleRef {
    /// Module file path of the loadable unit.
    pub bundle: Option<String>,
    /// Readable hint for the generated import identifier.
    pub namespace: Option<String>,
}

/// Prop-mapping requirement attached to a route by the scanner: either a
/// flag or a view-name map.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PropsSpec {
    /// Map props for the (single) view, or not at all.
    Flag(bool),
    /// Per-view prop-mapping requirements; values are opaque to this crate.
    Map(FxIndexMap<String, serde_json::Value>),
}

/// One node of the scanned route tree.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteNode {
    /// Route path relative to the parent route.
    pub path: Option<String>,
    /// Fully resolved route path.
    pub abs_route_path: Option<String>,
    /// Route name.
    pub name: Option<String>,
    /// Single component reference; mutually exclusive with `components`.
    pub component: Option<BundleRef>,
    /// Named-view component references; mutually exclusive with `component`.
    pub components: Option<FxIndexMap<String, BundleRef>>,
    /// Ordered child routes.
    pub children: Option<Vec<RouteNode>>,
    /// Bundle file path carried directly by a bundle-only leaf (a module
    /// that default-exports an array of routes).
    pub bundle: Option<String>,
    /// Identifier-naming hint for `bundle`.
    pub namespace: Option<String>,
    /// This subtree stays nested under manual flattening.
    pub manual_nested: bool,
    /// Prop-mapping requirement.
    pub props: Option<PropsSpec>,
    /// Redirect target path.
    pub redirect: Option<String>,
    /// Alias path.
    pub alias: Option<String>,
    /// Source file the route was scanned from; serialized only outside
    /// production mode.
    pub file_path: Option<String>,
    /// Reserved flattened-bundle marker, populated by the flattener and
    /// consumed by the serializer. Never part of the scanner input.
    #[serde(skip)]
    pub flatten_routes: Option<Vec<BundleRef>>,
}

impl RouteNode {
    /// A node with no component, no bundle and no children contributes
    /// nothing to the generated routes and is dropped during flattening.
    pub fn is_significant(&self) -> bool {
        self.component.is_some()
            || self.components.is_some()
            || self.bundle.is_some()
            || self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// The node's own bundle reference.
    pub fn bundle_ref(&self) -> BundleRef {
        BundleRef {
            bundle: self.bundle.clone(),
            namespace: self.namespace.clone(),
        }
    }
}
