//! Route-tree flattening
//!
//! Rewrites a nested route tree into a flat (or hybrid flat/nested) route
//! list when the configured nested-routing mode opts out of native nesting.
//! The walk builds a fresh output structure; the scanner's tree is never
//! mutated, so flattening is safe to repeat on the same input.

use crate::config::NestedRoutes;
use crate::routes::RouteNode;

/// Flattening policy applied to the scanned route tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlattenMode {
    /// Pass the tree through unchanged (native nesting).
    None,
    /// Flatten every descendant; `manual_nested` flags are ignored.
    Auto,
    /// Flatten, but keep a `manual_nested` subtree nested: its children are
    /// recursively flattened on their own and re-attached under it.
    Manual,
}

impl FlattenMode {
    /// Map the configured nested-routing mode onto a flattening policy:
    /// `auto` nesting keeps the tree, `none` nesting flattens everything,
    /// `manual` nesting flattens while honoring `manual_nested` subtrees.
    pub fn from_nested_routes(mode: NestedRoutes) -> Self {
        match mode {
            NestedRoutes::Auto => Self::None,
            NestedRoutes::None => Self::Auto,
            NestedRoutes::Manual => Self::Manual,
        }
    }

    /// Whether this policy rewrites the tree at all.
    pub fn is_flatten(self) -> bool {
        !matches!(self, Self::None)
    }

    fn check_nested(self) -> bool {
        matches!(self, Self::Manual)
    }
}

/// Child-ordering utility supplied by the route scanner; applied to every
/// re-attached manually-nested subtree.
pub type RouteSorter = fn(&mut RouteNode);

/// Flatten `root` into a route list: the root itself first, then every
/// descendant in document order, paths rewritten to their absolute form.
/// Bundle-only leaves are wrapped into the reserved one-element marker list
/// for the serializer to unwrap into a spread expression. Insignificant
/// nodes are dropped.
pub fn to_flatten_routes(
    root: &RouteNode,
    mode: FlattenMode,
    sorter: Option<RouteSorter>,
) -> Vec<RouteNode> {
    let mut head = root.clone();
    let children = head.children.take();

    let mut list = vec![head];
    if let Some(children) = children {
        list.extend(flatten_deep(&children, mode.check_nested(), sorter));
    }

    list.retain_mut(|route| {
        if route.bundle.is_some() {
            route.flatten_routes = Some(vec![route.bundle_ref()]);
        }
        route.is_significant()
    });
    list
}

fn flatten_deep(
    children: &[RouteNode],
    check_nested: bool,
    sorter: Option<RouteSorter>,
) -> Vec<RouteNode> {
    let mut list = Vec::new();
    for child in children {
        let mut flat = child.clone();

        // bundle leaves pass through untouched
        if flat.bundle.is_some() {
            list.push(flat);
            continue;
        }

        flat.path = flat.abs_route_path.clone();

        if check_nested && flat.manual_nested {
            let nested = flat.children.take().unwrap_or_default();
            flat.children = Some(flatten_deep(&nested, check_nested, sorter));
            if let Some(sort) = sorter {
                sort(&mut flat);
            }
            list.push(flat);
            continue;
        }

        let nested = flat.children.take();
        list.push(flat);
        if let Some(nested) = nested {
            list.extend(flatten_deep(&nested, check_nested, sorter));
        }
    }
    list
}
