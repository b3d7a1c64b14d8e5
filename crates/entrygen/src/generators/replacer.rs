//! Structured serializer + replacer for route records
//!
//! Routes are lowered to a generic JSON value tree in which code spans —
//! import identifiers, utility references — are tag-wrapped strings. The
//! generic serializer then quotes everything uniformly, and the final text
//! passes in `tagging` strip the marks back off. Only allowlisted route
//! properties survive the lowering; scanner bookkeeping fields never reach
//! the generated source.

use serde_json::{Map, Value};

use crate::config::{AppConfig, PropsMode};
use crate::identifiers::{BundleImporter, IdentifierCounter};
use crate::routes::{PropsSpec, RouteNode};
use crate::tagging::{TagToken, escape_object_string};
use crate::types::ImportStyle;

/// Shared prop-mapping utility identifier.
pub(crate) const MAP_PROPS_UTIL: &str = "mapRouteParamsToProps";
/// Shared array-coercion utility identifier.
pub(crate) const TO_ARRAY_UTIL: &str = "toArray";

/// JSON-quote a plain string for embedding in generated source.
pub(crate) fn json_quote(value: &str) -> String {
    serde_json::to_string(value).expect("string serialization cannot fail")
}

/// Per-invocation serializer state: importers, tag channels and lazily
/// minted utility declarations.
#[derive(Debug)]
pub(crate) struct RouteReplacer {
    pub(crate) counter: IdentifierCounter,
    pub(crate) route_importer: BundleImporter,
    pub(crate) component_importer: BundleImporter,
    pub(crate) tag_object: TagToken,
    pub(crate) marker_key: String,
    map_props: PropsMode,
    production: bool,
    map_props_code: Option<String>,
    to_array_code: Option<String>,
}

impl RouteReplacer {
    pub(crate) fn new(
        import_name: &str,
        config: &AppConfig,
        tag_routes: TagToken,
        tag_component: TagToken,
        tag_object: TagToken,
        marker_key: String,
    ) -> Self {
        Self {
            counter: IdentifierCounter::seeded(&[import_name]),
            route_importer: BundleImporter::new(tag_routes, ImportStyle::Static, "router"),
            component_importer: BundleImporter::new(
                tag_component,
                ImportStyle::from_code_splitting(config.code_splitting),
                "comp",
            ),
            tag_object,
            marker_key,
            map_props: config.map_props,
            production: config.production,
            map_props_code: None,
            to_array_code: None,
        }
    }

    /// Lower one route record into the serializable value tree. Keys appear
    /// in allowlist order; everything not allowlisted is dropped here.
    pub(crate) fn route_value(&mut self, route: &RouteNode) -> Value {
        let mut map = Map::new();

        if let Some(path) = &route.path {
            map.insert("path".to_owned(), Value::String(path.clone()));
        }
        if let Some(name) = &route.name {
            map.insert("name".to_owned(), Value::String(name.clone()));
        }
        if let Some(component) = &route.component {
            let reference = self.component_importer.import(
                &mut self.counter,
                component.bundle.as_deref(),
                component.namespace.as_deref(),
            );
            map.insert("component".to_owned(), Value::String(reference));
        }
        if let Some(components) = &route.components {
            let mut inner = Map::new();
            for (view, reference) in components {
                let code = self.component_importer.import(
                    &mut self.counter,
                    reference.bundle.as_deref(),
                    reference.namespace.as_deref(),
                );
                inner.insert(view.clone(), Value::String(code));
            }
            let json = serde_json::to_string(&Value::Object(inner))
                .expect("component map serialization cannot fail");
            map.insert(
                "components".to_owned(),
                Value::String(escape_object_string(
                    &json,
                    &self.tag_object,
                    self.component_importer.tag(),
                )),
            );
        }
        if let Some(children) = route.children.as_deref()
            && !children.is_empty()
        {
            let items: Vec<Value> = children.iter().map(|child| self.child_value(child)).collect();
            map.insert("children".to_owned(), Value::Array(items));
        }
        if !matches!(self.map_props, PropsMode::None)
            && let Some(props) = &route.props
        {
            map.insert("props".to_owned(), self.props_value(props));
        }
        if let Some(redirect) = &route.redirect {
            map.insert("redirect".to_owned(), Value::String(redirect.clone()));
        }
        if let Some(alias) = &route.alias {
            map.insert("alias".to_owned(), Value::String(alias.clone()));
        }
        if !self.production
            && let Some(file_path) = &route.file_path
        {
            map.insert("filePath".to_owned(), Value::String(file_path.clone()));
        }
        if let Some(marker) = route.flatten_routes.as_deref()
            && !marker.is_empty()
        {
            let items: Vec<Value> = marker
                .iter()
                .map(|reference| {
                    self.mint_to_array();
                    Value::String(self.route_importer.import(
                        &mut self.counter,
                        reference.bundle.as_deref(),
                        reference.namespace.as_deref(),
                    ))
                })
                .collect();
            map.insert(self.marker_key.clone(), Value::Array(items));
        }

        Value::Object(map)
    }

    /// A bundle-only child collapses to a tagged route reference the
    /// post-processing pass turns into a spread; anything else recurses.
    fn child_value(&mut self, child: &RouteNode) -> Value {
        if child.bundle.is_some() {
            self.mint_to_array();
            Value::String(self.route_importer.import(
                &mut self.counter,
                child.bundle.as_deref(),
                child.namespace.as_deref(),
            ))
        } else {
            self.route_value(child)
        }
    }

    fn props_value(&mut self, props: &PropsSpec) -> Value {
        match props {
            PropsSpec::Flag(true) => Value::String(self.props_code()),
            PropsSpec::Flag(false) => Value::String(self.tag_object.wrap("false")),
            PropsSpec::Map(views) => {
                let code = self.props_code();
                let mut inner = Map::new();
                for view in views.keys() {
                    inner.insert(view.clone(), Value::String(code.clone()));
                }
                let json = serde_json::to_string(&Value::Object(inner))
                    .expect("props map serialization cannot fail");
                Value::String(escape_object_string(
                    &json,
                    &self.tag_object,
                    self.component_importer.tag(),
                ))
            }
        }
    }

    /// Tagged reference replacing a `props` requirement. In `params` mode
    /// the router maps params natively and the literal `true` suffices;
    /// otherwise the shared utility is referenced and its declaration
    /// queued on first use.
    fn props_code(&mut self) -> String {
        if matches!(self.map_props, PropsMode::Params) {
            return self.component_importer.tag().wrap("true");
        }
        if self.map_props_code.is_none() {
            self.map_props_code = Some(match self.map_props {
                PropsMode::Query => {
                    format!("const {MAP_PROPS_UTIL}=({{query}})=>({{...query}})\n")
                }
                _ => format!("const {MAP_PROPS_UTIL}=({{params,query}})=>({{...params,...query}})\n"),
            });
        }
        self.component_importer.tag().wrap(MAP_PROPS_UTIL)
    }

    fn mint_to_array(&mut self) {
        if self.to_array_code.is_none() {
            self.to_array_code =
                Some(format!("const {TO_ARRAY_UTIL}=(arr)=>Array.isArray(arr)?arr:[]\n"));
        }
    }

    pub(crate) fn to_array_minted(&self) -> bool {
        self.to_array_code.is_some()
    }

    /// Queued utility declarations, prop-mapping helper first.
    pub(crate) fn utility_lines(&self) -> Vec<String> {
        self.map_props_code
            .iter()
            .chain(self.to_array_code.iter())
            .cloned()
            .collect()
    }
}
