//! Router-options fragment: the route-options compiler
//!
//! Serializes the scanned route tree into the router-options source literal:
//! flattening per the configured nesting mode, deduplicating identifiers for
//! repeated module references, and splicing raw code spans (identifiers,
//! spreads, utility references) through the quasi-quotation tag channels.

use serde_json::Value;

use super::replacer::{RouteReplacer, TO_ARRAY_UTIL, json_quote};
use crate::config::AppConfig;
use crate::flatten::{FlattenMode, RouteSorter, to_flatten_routes};
use crate::routes::RouteNode;
use crate::tagging::{TagToken, splice_marker_objects, spread_tagged, unquote_tagged};

/// Inputs for [`import_router_options`].
#[derive(Debug)]
pub struct RouterOptionsParams<'a> {
    /// Scanned route tree; `None` short-circuits to the sentinel binding.
    pub route_tree: Option<&'a RouteNode>,
    /// Application configuration bundle.
    pub config: &'a AppConfig,
    /// Base public path embedded into the options literal.
    pub public_path: &'a str,
    /// Binding name; defaults to `routerOptions`.
    pub import_name: Option<&'a str>,
    /// Child-ordering utility from the route scanner, applied to re-sorted
    /// manually-nested subtrees.
    pub sorter: Option<RouteSorter>,
}

/// Compile the router-options fragment.
pub fn import_router_options(params: &RouterOptionsParams<'_>) -> String {
    let import_name = params.import_name.unwrap_or("routerOptions");
    let config = params.config;

    let (Some(route_tree), true) = (params.route_tree, config.use_router) else {
        return format!("const {import_name}=undefined\n");
    };

    let mode = FlattenMode::from_nested_routes(config.nested_routes);

    // One fresh token per semantic channel.
    let tag_routes = TagToken::new(1_000_000_000);
    let tag_component = TagToken::new(10_000_000_000);
    let tag_object = TagToken::new(100_000_000_000);
    let tag_flatten = TagToken::new(1_000_000_000_000);
    let marker_key = tag_flatten.wrap("[Routes]");

    let mut replacer = RouteReplacer::new(
        import_name,
        config,
        tag_routes,
        tag_component,
        tag_object,
        marker_key,
    );

    let mut root_route = if mode.is_flatten() {
        let flattened = to_flatten_routes(route_tree, mode, params.sorter);
        log::debug!("flattened route tree into {} routes", flattened.len());
        let items: Vec<Value> = flattened
            .iter()
            .map(|route| replacer.route_value(route))
            .collect();
        serde_json::to_string(&Value::Array(items))
            .expect("route literal serialization cannot fail")
    } else {
        serde_json::to_string(&replacer.route_value(route_tree))
            .expect("route literal serialization cannot fail")
    };

    if replacer.to_array_minted() {
        root_route = spread_tagged(&root_route, replacer.route_importer.tag(), TO_ARRAY_UTIL);
    }
    root_route = unquote_tagged(&root_route, replacer.component_importer.tag(), &['\'', '"', '`']);
    root_route = unquote_tagged(&root_route, &replacer.tag_object, &['\'', '"']);

    let routes = if mode.is_flatten() {
        splice_marker_objects(&root_route, &replacer.marker_key)
    } else {
        format!("[{root_route}]")
    };

    let mut fragment = replacer.utility_lines();
    fragment.push("// router\n".to_owned());
    fragment.extend(replacer.route_importer.imports().iter().cloned());
    fragment.push("// component\n".to_owned());
    fragment.extend(replacer.component_importer.imports().iter().cloned());
    fragment.push("// router options\n".to_owned());

    let router_options = format!(
        "{{mode:{},base:{},routes:{}}}",
        json_quote(&config.router_mode),
        json_quote(params.public_path),
        routes
    );
    fragment.push(format!("const {import_name}={router_options}\n"));

    fragment.join("\n")
}
