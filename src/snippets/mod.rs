//! Packaging the snippet library into editor autocompletion entries.
//!
//! A [`SnippetSet`] collects one [`SnippetItem`] per snippet source file and
//! renders them as a VS Code snippets JSON file: a map from description to
//! `{ "prefix", "body", "description" }`. [`scan::scan_directory`] fills a
//! set from a directory tree.

pub mod scan;

use serde::Serialize;

/// One autocompletion entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnippetItem {
    /// The human-readable name shown by the editor.
    pub description: String,
    /// What the user types to trigger the completion.
    pub tab_trigger: String,
    /// The text the completion inserts.
    pub body: String,
}

/// How snippet bodies get wrapped for a target language.
///
/// The directories a snippet was found under become its module path; a
/// dialect decides what that path means textually. The default is to not
/// wrap at all.
pub trait Dialect {
    fn wrap_modules(&self, module_path: &[String], body: &str) -> String {
        let _ = module_path;
        body.to_string()
    }
}

/// Leaves every snippet body untouched.
pub struct PlainDialect;

impl Dialect for PlainDialect {}

/// Wraps snippet bodies in nested `pub mod` blocks, so inserting a snippet
/// brings its own namespace along.
pub struct RustDialect;

impl Dialect for RustDialect {
    fn wrap_modules(&self, module_path: &[String], body: &str) -> String {
        if module_path.is_empty() {
            return body.to_string();
        }

        let mut out = String::new();
        for (depth, name) in module_path.iter().enumerate() {
            for _ in 0..depth {
                out.push_str("    ");
            }
            out.push_str("pub mod ");
            out.push_str(name);
            out.push_str(" {\n");
        }
        out.push_str(body);
        if !body.ends_with('\n') {
            out.push('\n');
        }
        for _ in 0..module_path.len() {
            out.push('}');
        }
        out.push_str(" // mod ");
        out.push_str(&module_path.join("::"));
        out.push('\n');
        out
    }
}

#[derive(Serialize)]
struct VsCodeEntry<'a> {
    prefix: &'a str,
    body: Vec<&'a str>,
    description: &'a str,
}

/// An ordered collection of autocompletion entries.
#[derive(Default)]
pub struct SnippetSet {
    items: Vec<SnippetItem>,
}

impl SnippetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of entries collected so far.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds an entry as-is.
    pub fn push(&mut self, item: SnippetItem) {
        self.items.push(item);
    }

    /// Adds an entry after wrapping its body in `module_path` according to
    /// the dialect.
    pub fn push_wrapped(
        &mut self,
        dialect: &impl Dialect,
        module_path: &[String],
        mut item: SnippetItem,
    ) {
        item.body = dialect.wrap_modules(module_path, &item.body);
        self.push(item);
    }

    pub fn items(&self) -> &[SnippetItem] {
        &self.items
    }

    /// Renders the VS Code snippets JSON, entries in insertion order.
    pub fn to_vscode_json(&self) -> serde_json::Result<String> {
        let mut map = serde_json::Map::new();
        for item in &self.items {
            let entry = VsCodeEntry {
                prefix: &item.tab_trigger,
                // VS Code wants the body line by line; carriage returns
                // would end up inside the JSON strings.
                body: item
                    .body
                    .split('\n')
                    .map(|line| line.strip_suffix('\r').unwrap_or(line))
                    .collect(),
                description: &item.description,
            };
            map.insert(item.description.clone(), serde_json::to_value(entry)?);
        }
        serde_json::to_string_pretty(&map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str, trigger: &str, body: &str) -> SnippetItem {
        SnippetItem {
            description: description.to_string(),
            tab_trigger: trigger.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn renders_vscode_entries_in_order() {
        let mut set = SnippetSet::new();
        set.push(item("z function", "z_function", "fn z() {}\nz();"));
        set.push(item("binary exponentiation", "binary_exponentiation", "pow"));

        let json = set.to_vscode_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed["z function"]["body"],
            serde_json::json!(["fn z() {}", "z();"])
        );
        assert_eq!(parsed["binary exponentiation"]["prefix"], "binary_exponentiation");
        // preserve_order keeps the scan order in the output.
        let keys: Vec<_> = parsed.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z function", "binary exponentiation"]);
    }

    #[test]
    fn rust_dialect_nests_modules() {
        let wrapped = RustDialect.wrap_modules(
            &["math".to_string(), "primes".to_string()],
            "pub fn is_prime() {}",
        );
        assert_eq!(
            wrapped,
            "pub mod math {\n    pub mod primes {\npub fn is_prime() {}\n}} // mod math::primes\n"
        );
    }

    #[test]
    fn empty_module_path_leaves_body_alone() {
        assert_eq!(RustDialect.wrap_modules(&[], "body"), "body");
        assert_eq!(
            PlainDialect.wrap_modules(&["m".to_string()], "body"),
            "body"
        );
    }

    #[test]
    fn strips_carriage_returns() {
        let mut set = SnippetSet::new();
        set.push(item("dos", "dos", "a\r\nb\r"));
        let json = set.to_vscode_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["dos"]["body"], serde_json::json!(["a", "b"]));
    }
}
