//! "Used by" fragment for NamingSystem pages.
//!
//! # Output
//!
//! ```html
//!
//! <ul>
//!  <li><a href="ValueSet-colors.html">Color Codes</a></li>
//! </ul>
//! ```
//!
//! followed by the page's change summary. Lines end with `\r\n` and the
//! fragment starts with one.

use super::index::{IdentifierSet, MatchRecord, find_references};
use crate::log;
use crate::resource::{Corpus, CorpusError, NamingSystem, ValueSet};
use quick_xml::escape::escape;
use rustc_hash::FxHashMap;

const LINE_BREAK: &str = "\r\n";

/// Shown when the NamingSystem declares no usable identifiers.
pub const NO_IDENTIFIERS: &str =
    "<ul><li>This NamingSystem has no identifiers to reference in value sets</li></ul>\r\n";

/// Shown when no ValueSet with a page references the identifiers.
pub const NOT_USED: &str = "<ul><li>The Code System identifiers in this NamingSystem are not used in any value sets in this Implementation Guide</li></ul>\r\n";

// ============================================================================
// Page context
// ============================================================================

/// Per-page services the renderer borrows from the surrounding build.
pub trait PageContext {
    /// Localized name of a ValueSet, unescaped.
    fn display_name(&self, value_set: &ValueSet) -> String {
        default_display_name(value_set).to_owned()
    }

    /// Fragment appended to every cross-reference result.
    fn change_summary(&self) -> String {
        String::new()
    }
}

/// `name`, else `id`, else `url`, else empty.
pub fn default_display_name(value_set: &ValueSet) -> &str {
    [&value_set.name, &value_set.id, &value_set.url]
        .into_iter()
        .find_map(|field| field.as_deref().filter(|s| !s.is_empty()))
        .unwrap_or_default()
}

/// Page context with fixed per-language translation tables and change summary.
///
/// Names are translated through the table of the page's language; names
/// missing from it, or pages in a language without a table, keep the
/// source name.
#[derive(Debug, Clone, Default)]
pub struct StaticPageContext {
    language: String,
    translations: FxHashMap<String, FxHashMap<String, String>>,
    change_summary: String,
}

impl StaticPageContext {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Default::default()
        }
    }

    /// Add (or replace) the name table for `language`.
    pub fn with_translations<I, K, V>(mut self, language: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let names = names
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.translations.insert(language.into(), names);
        self
    }

    pub fn with_change_summary(mut self, change_summary: impl Into<String>) -> Self {
        self.change_summary = change_summary.into();
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl PageContext for StaticPageContext {
    fn display_name(&self, value_set: &ValueSet) -> String {
        let name = default_display_name(value_set);
        self.translations
            .get(&self.language)
            .and_then(|names| names.get(name))
            .cloned()
            .unwrap_or_else(|| name.to_owned())
    }

    fn change_summary(&self) -> String {
        self.change_summary.clone()
    }
}

// ============================================================================
// Renderer
// ============================================================================

/// Renders the list of ValueSets that use a NamingSystem's identifiers.
pub struct XrefRenderer<'a> {
    corpus: &'a dyn Corpus,
    page: &'a dyn PageContext,
}

impl<'a> XrefRenderer<'a> {
    pub fn new(corpus: &'a dyn Corpus, page: &'a dyn PageContext) -> Self {
        Self { corpus, page }
    }

    /// HTML fragment listing every ValueSet referencing `subject`.
    ///
    /// Only a failing corpus scan is an error. Without identifiers the corpus
    /// is not scanned at all.
    pub fn cross_reference(&self, subject: &NamingSystem) -> Result<String, CorpusError> {
        let mut html = String::from(LINE_BREAK);

        let ids = IdentifierSet::from_naming_system(subject);
        if ids.is_empty() {
            html.push_str(NO_IDENTIFIERS);
        } else {
            let value_sets = self.corpus.value_sets()?;
            let matches = find_references(&value_sets, &ids);
            html.push_str(&render_reference_list(&matches, self.page));
        }

        html.push_str(&self.page.change_summary());
        Ok(html)
    }
}

/// List items for matches with a render path, wrapped in `<ul>`.
///
/// Matches without a render path are reported on the log and produce no
/// item. With no visible items at all the result is [`NOT_USED`].
pub fn render_reference_list(matches: &[MatchRecord<'_>], page: &dyn PageContext) -> String {
    let mut items = String::new();

    for record in matches {
        match record.render_path {
            Some(path) => {
                let name = page.display_name(record.value_set);
                items.push_str(&format!(
                    " <li><a href=\"{path}\">{}</a></li>{LINE_BREAK}",
                    escape(name.as_str())
                ));
            }
            None => {
                log!("xref"; "No path for {}", record.value_set.url.as_deref().unwrap_or("<no url>"));
            }
        }
    }

    if items.is_empty() {
        NOT_USED.to_owned()
    } else {
        format!("<ul>{LINE_BREAK}{items}</ul>{LINE_BREAK}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{Compose, ConceptSet, MemoryCorpus, UniqueId};
    use std::cell::Cell;

    fn naming_system(uris: &[&str]) -> NamingSystem {
        NamingSystem {
            unique_id: uris.iter().map(|u| UniqueId::uri(u)).collect(),
            ..Default::default()
        }
    }

    fn value_set(name: &str, path: Option<&str>, include: &[&str], exclude: &[&str]) -> ValueSet {
        ValueSet {
            name: Some(name.into()),
            url: Some(format!("http://example.org/ValueSet/{name}")),
            web_path: path.map(str::to_owned),
            compose: Compose {
                include: include.iter().map(|s| ConceptSet::system(s)).collect(),
                exclude: exclude.iter().map(|s| ConceptSet::system(s)).collect(),
            },
            ..Default::default()
        }
    }

    /// Corpus that counts how often it was scanned.
    struct CountingCorpus {
        inner: MemoryCorpus,
        scans: Cell<usize>,
    }

    impl Corpus for CountingCorpus {
        fn value_sets(&self) -> Result<Vec<ValueSet>, CorpusError> {
            self.scans.set(self.scans.get() + 1);
            self.inner.value_sets()
        }
    }

    struct FailingCorpus;

    impl Corpus for FailingCorpus {
        fn value_sets(&self) -> Result<Vec<ValueSet>, CorpusError> {
            Err(CorpusError::Io(
                "resources".into(),
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            ))
        }
    }

    fn render(subject: &NamingSystem, corpus: Vec<ValueSet>) -> String {
        let corpus = MemoryCorpus::from(corpus);
        let page = StaticPageContext::new("en");
        XrefRenderer::new(&corpus, &page)
            .cross_reference(subject)
            .unwrap()
    }

    #[test]
    fn test_no_identifiers_skips_corpus() {
        let corpus = CountingCorpus {
            inner: MemoryCorpus::from(vec![value_set("A", Some("a.html"), &["urn:a"], &[])]),
            scans: Cell::new(0),
        };
        let page = StaticPageContext::new("en");
        let renderer = XrefRenderer::new(&corpus, &page);

        let subject = NamingSystem {
            unique_id: vec![UniqueId::default()],
            ..Default::default()
        };
        let html = renderer.cross_reference(&subject).unwrap();

        assert_eq!(html, format!("\r\n{NO_IDENTIFIERS}"));
        assert_eq!(corpus.scans.get(), 0);
    }

    #[test]
    fn test_no_identifiers_ignores_failing_corpus() {
        let page = StaticPageContext::new("en");
        let html = XrefRenderer::new(&FailingCorpus, &page)
            .cross_reference(&NamingSystem::default())
            .unwrap();
        assert!(html.contains(NO_IDENTIFIERS));
    }

    #[test]
    fn test_corpus_failure_propagates() {
        let page = StaticPageContext::new("en");
        let result = XrefRenderer::new(&FailingCorpus, &page).cross_reference(&naming_system(&["urn:a"]));
        assert!(matches!(result, Err(CorpusError::Io(..))));
    }

    #[test]
    fn test_no_matches_is_not_used() {
        let html = render(
            &naming_system(&["urn:a"]),
            vec![
                value_set("B", Some("b.html"), &["urn:b"], &["urn:c"]),
                value_set("C", Some("c.html"), &[], &[]),
            ],
        );
        assert_eq!(html, format!("\r\n{NOT_USED}"));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_single_match_scenario() {
        let html = render(
            &naming_system(&["urn:a", "urn:b"]),
            vec![
                value_set("Color Codes", Some("/vs/c1.html"), &["urn:a"], &[]),
                value_set("Other", Some("/vs/c2.html"), &["urn:z"], &[]),
            ],
        );
        assert_eq!(
            html,
            "\r\n<ul>\r\n <li><a href=\"/vs/c1.html\">Color Codes</a></li>\r\n</ul>\r\n"
        );
    }

    #[test]
    fn test_include_and_exclude_listed_once() {
        let html = render(
            &naming_system(&["urn:a"]),
            vec![value_set("Both", Some("both.html"), &["urn:a"], &["urn:a"])],
        );
        assert_eq!(html.matches("<li>").count(), 1);
    }

    #[test]
    fn test_exclude_only_is_listed() {
        let html = render(
            &naming_system(&["urn:a"]),
            vec![value_set("Excluder", Some("ex.html"), &[], &["urn:a"])],
        );
        assert!(html.contains(r#"<li><a href="ex.html">Excluder</a></li>"#));
    }

    #[test]
    fn test_absent_render_path_yields_not_used() {
        let html = render(
            &naming_system(&["urn:a"]),
            vec![value_set("Pathless", None, &["urn:a"], &[])],
        );
        assert_eq!(html, format!("\r\n{NOT_USED}"));
        assert!(!html.contains("<ul>\r\n"));
    }

    #[test]
    fn test_absent_render_path_blocks_later_pathless_match() {
        let html = render(
            &naming_system(&["urn:a"]),
            vec![
                value_set("First", None, &["urn:a"], &[]),
                value_set("Second", None, &["urn:a"], &[]),
                value_set("Linked", Some("linked.html"), &["urn:a"], &[]),
            ],
        );
        assert_eq!(
            html,
            "\r\n<ul>\r\n <li><a href=\"linked.html\">Linked</a></li>\r\n</ul>\r\n"
        );
    }

    #[test]
    fn test_display_name_is_escaped() {
        let html = render(
            &naming_system(&["urn:a"]),
            vec![value_set("Fish & <Chips>", Some("fc.html"), &["urn:a"], &[])],
        );
        assert!(html.contains(r#"<a href="fc.html">Fish &amp; &lt;Chips&gt;</a>"#));
    }

    #[test]
    fn test_render_path_written_verbatim() {
        let html = render(
            &naming_system(&["urn:a"]),
            vec![value_set("N", Some("vs/o'brien.html?a=1&b=2"), &["urn:a"], &[])],
        );
        assert!(html.contains(r#"<a href="vs/o'brien.html?a=1&b=2">N</a>"#));
    }

    #[test]
    fn test_order_follows_corpus() {
        let html = render(
            &naming_system(&["urn:a"]),
            vec![
                value_set("Zeta", Some("z.html"), &["urn:a"], &[]),
                value_set("Alpha", Some("a.html"), &["urn:a"], &[]),
            ],
        );
        let zeta = html.find("Zeta").unwrap();
        let alpha = html.find("Alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_change_summary_appended() {
        let corpus = MemoryCorpus::from(vec![value_set("A", Some("a.html"), &["urn:a"], &[])]);
        let page = StaticPageContext::new("en").with_change_summary("<p>changed</p>");
        let renderer = XrefRenderer::new(&corpus, &page);

        let used = renderer.cross_reference(&naming_system(&["urn:a"])).unwrap();
        assert!(used.ends_with("</ul>\r\n<p>changed</p>"));

        let unused = renderer.cross_reference(&naming_system(&["urn:zzz"])).unwrap();
        assert!(unused.ends_with(&format!("{NOT_USED}<p>changed</p>")));

        let empty = renderer.cross_reference(&NamingSystem::default()).unwrap();
        assert!(empty.ends_with(&format!("{NO_IDENTIFIERS}<p>changed</p>")));
    }

    #[test]
    fn test_translated_display_name() {
        let corpus = MemoryCorpus::from(vec![value_set("Colors", Some("c.html"), &["urn:a"], &[])]);
        let page = StaticPageContext::new("de")
            .with_translations("de", [("Colors", "Farben")])
            .with_translations("fr", [("Colors", "Couleurs")]);
        let html = XrefRenderer::new(&corpus, &page)
            .cross_reference(&naming_system(&["urn:a"]))
            .unwrap();

        assert_eq!(page.language(), "de");
        assert!(html.contains(">Farben</a>"));
    }

    #[test]
    fn test_language_without_table_keeps_name() {
        let vs = value_set("Colors", Some("c.html"), &["urn:a"], &[]);
        let page = StaticPageContext::new("en").with_translations("de", [("Colors", "Farben")]);

        assert_eq!(page.display_name(&vs), "Colors");
    }

    #[test]
    fn test_directory_corpus_end_to_end() {
        use crate::resource::DirectoryCorpus;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let write = |name: &str, json: &str| std::fs::write(dir.path().join(name), json).unwrap();
        write(
            "vs-colors.json",
            r#"{"resourceType": "ValueSet", "id": "colors", "name": "ColorCodes",
                "compose": {"include": [{"system": "urn:a"}]}}"#,
        );
        write(
            "vs-shapes.json",
            r#"{"resourceType": "ValueSet", "id": "shapes", "name": "Shapes",
                "compose": {"exclude": [{"system": "urn:b"}]}}"#,
        );
        write(
            "vs-other.json",
            r#"{"resourceType": "ValueSet", "id": "other", "compose": {"include": [{"system": "urn:z"}]}}"#,
        );

        let corpus = DirectoryCorpus::new(dir.path());
        let page = StaticPageContext::new("en");
        let html = XrefRenderer::new(&corpus, &page)
            .cross_reference(&naming_system(&["urn:a", "urn:b"]))
            .unwrap();

        assert_eq!(
            html,
            "\r\n<ul>\r\n \
             <li><a href=\"ValueSet-colors.html\">ColorCodes</a></li>\r\n \
             <li><a href=\"ValueSet-shapes.html\">Shapes</a></li>\r\n\
             </ul>\r\n"
        );
    }

    #[test]
    fn test_default_display_name_fallbacks() {
        let mut vs = ValueSet {
            id: Some("vs-id".into()),
            url: Some("http://example.org/vs".into()),
            ..Default::default()
        };
        assert_eq!(default_display_name(&vs), "vs-id");
        vs.id = None;
        assert_eq!(default_display_name(&vs), "http://example.org/vs");
        vs.url = None;
        assert_eq!(default_display_name(&vs), "");
    }
}
