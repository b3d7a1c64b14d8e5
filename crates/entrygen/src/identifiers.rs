//! Identifier allocation for generated import bindings
//!
//! One counter table per fragment-generation call, shared by every importer
//! participating in that call, so identifiers stay unique across channels.
//! Each importer additionally remembers bundle paths it has already bound,
//! so repeated references reuse the identifier instead of re-importing.

use crate::tagging::TagToken;
use crate::text::{camelize, ensure_path_quote};
use crate::types::{FxIndexMap, ImportStyle};

/// Shared counter table disambiguating identifier bases.
#[derive(Debug, Default)]
pub struct IdentifierCounter {
    counts: FxIndexMap<String, usize>,
}

impl IdentifierCounter {
    /// Empty counter table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed base names so later allocations cannot collide with them
    /// (used for the fragment's own binding name).
    pub fn seeded(names: &[&str]) -> Self {
        let mut counter = Self::default();
        for name in names {
            counter.counts.insert((*name).to_owned(), 1);
        }
        counter
    }

    /// Mint the next identifier for `hint`, falling back to the importer's
    /// namespace tag. The first allocation of a base is the bare base;
    /// subsequent allocations carry a numeric suffix.
    pub fn make(&mut self, hint: Option<&str>, namespace_tag: &str) -> String {
        let mut base = hint.map(camelize).unwrap_or_default();
        if base.is_empty() {
            base = camelize(namespace_tag);
        }
        if base.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            base.insert(0, '_');
        }
        let count = self.counts.entry(base.clone()).or_insert(0);
        let identifier = if *count == 0 {
            base
        } else {
            format!("{base}{count}")
        };
        *count += 1;
        identifier
    }
}

/// Collects import declarations and hands out tagged identifiers for module
/// references: one declaration per distinct bundle path, the identifier
/// reused on every later reference.
#[derive(Debug)]
pub struct BundleImporter {
    tag: TagToken,
    style: ImportStyle,
    namespace_tag: String,
    identifiers: FxIndexMap<String, String>,
    imports: Vec<String>,
}

impl BundleImporter {
    /// New importer for one semantic channel.
    pub fn new(tag: TagToken, style: ImportStyle, namespace_tag: &str) -> Self {
        Self {
            tag,
            style,
            namespace_tag: namespace_tag.to_owned(),
            identifiers: FxIndexMap::default(),
            imports: Vec::new(),
        }
    }

    /// This channel's tag token.
    pub fn tag(&self) -> &TagToken {
        &self.tag
    }

    /// Import declarations collected so far, in first-reference order.
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    /// Tagged identifier for `bundle`; empty when there is no bundle path.
    /// The first reference to a path queues its import declaration.
    pub fn import(
        &mut self,
        counter: &mut IdentifierCounter,
        bundle: Option<&str>,
        namespace: Option<&str>,
    ) -> String {
        let Some(bundle) = bundle else {
            return String::new();
        };
        let bundle_path = ensure_path_quote(bundle);
        if let Some(declared) = self.identifiers.get(&bundle_path) {
            return self.tag.wrap(declared);
        }
        let identifier = counter.make(namespace, &self.namespace_tag);
        log::debug!("bound {identifier} to bundle '{bundle_path}'");
        self.imports.push(match self.style {
            ImportStyle::Static => format!("import {identifier} from '{bundle_path}'\n"),
            ImportStyle::DynamicChunk => {
                format!("const {identifier}=()=>import('{bundle_path}')\n")
            }
        });
        let tagged = self.tag.wrap(&identifier);
        self.identifiers.insert(bundle_path, identifier);
        tagged
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn importer(style: ImportStyle) -> BundleImporter {
        BundleImporter::new(TagToken::new(1_000_000_000), style, "comp")
    }

    #[test]
    fn counter_disambiguates_repeated_bases() {
        let mut counter = IdentifierCounter::new();
        assert_eq!(counter.make(Some("home"), "comp"), "home");
        assert_eq!(counter.make(Some("home"), "comp"), "home1");
        assert_eq!(counter.make(Some("home"), "comp"), "home2");
        assert_eq!(counter.make(None, "comp"), "comp");
    }

    #[test]
    fn counter_seeding_protects_binding_names() {
        let mut counter = IdentifierCounter::seeded(&["routerOptions"]);
        assert_eq!(counter.make(Some("routerOptions"), "comp"), "routerOptions1");
    }

    #[test]
    fn counter_sanitizes_hints() {
        let mut counter = IdentifierCounter::new();
        assert_eq!(counter.make(Some("my-page"), "comp"), "myPage");
        assert_eq!(counter.make(Some("404"), "comp"), "_404");
        assert_eq!(counter.make(Some("---"), "router"), "router");
    }

    #[test]
    fn distinct_paths_get_distinct_declarations() {
        let mut counter = IdentifierCounter::new();
        let mut imports = importer(ImportStyle::Static);
        let a = imports.import(&mut counter, Some("src/pages/a.vue"), Some("a"));
        let b = imports.import(&mut counter, Some("src/pages/b.vue"), Some("b"));
        assert_ne!(a, b);
        assert_eq!(imports.imports().len(), 2);
        assert_eq!(imports.imports()[0], "import a from 'src/pages/a.vue'\n");
    }

    #[test]
    fn repeated_paths_reuse_the_identifier() {
        let mut counter = IdentifierCounter::new();
        let mut imports = importer(ImportStyle::Static);
        let first = imports.import(&mut counter, Some("src/pages/a.vue"), Some("a"));
        let again = imports.import(&mut counter, Some("src/pages/a.vue"), Some("other"));
        assert_eq!(first, again);
        assert_eq!(imports.imports().len(), 1);
    }

    #[test]
    fn dynamic_style_defers_the_import() {
        let mut counter = IdentifierCounter::new();
        let mut imports = importer(ImportStyle::DynamicChunk);
        imports.import(&mut counter, Some("src/pages/a.vue"), Some("a"));
        assert_eq!(
            imports.imports()[0],
            "const a=()=>import('src/pages/a.vue')\n"
        );
    }

    #[test]
    fn missing_bundle_yields_empty_reference() {
        let mut counter = IdentifierCounter::new();
        let mut imports = importer(ImportStyle::Static);
        assert_eq!(imports.import(&mut counter, None, Some("a")), "");
        assert!(imports.imports().is_empty());
    }
}
