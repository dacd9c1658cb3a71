//! Filling a [`SnippetSet`] from a directory tree of snippet sources.

use super::{Dialect, SnippetItem, SnippetSet};

use std::fs;
use std::io;
use std::path::Path;

// Only sources of the snippet language itself get packaged.
const SNIPPET_EXTENSION: &str = "rs";

/// The entry description: the file stem, trimmed.
pub fn extract_description(stem: &str) -> String {
    stem.trim().to_string()
}

/// The tab trigger derived from a file stem: a trailing `[bracketed variant]`
/// marker is dropped, whitespace and underscores map to `_`, the remaining
/// punctuation is dropped.
///
/// `"DisjointSet [with undo]"` becomes `"DisjointSet"`, and
/// `"binary exponentiation"` becomes `"binary_exponentiation"`.
pub fn extract_tab_trigger(stem: &str) -> String {
    let head = match stem.find('[') {
        Some(pos) => &stem[..pos],
        None => stem,
    };
    let head = head.trim();

    let mut result = String::with_capacity(head.len());
    for c in head.chars() {
        if c.is_whitespace() || c == '_' {
            result.push('_');
        } else if c.is_ascii_punctuation() {
            // dropped
        } else {
            result.push(c);
        }
    }
    result
}

/// Walks `root` recursively and packages every snippet source found, in
/// directory order (entries sorted by name, so the output is deterministic).
///
/// The directories between `root` and a file become the file's module path,
/// except under a dot-directory, where snippets are packaged unwrapped.
/// Files with other extensions are logged and skipped.
pub fn scan_directory(root: &Path, dialect: &impl Dialect) -> io::Result<SnippetSet> {
    let mut set = SnippetSet::new();
    let mut modules = Vec::new();
    walk(root, &mut modules, dialect, &mut set)?;
    Ok(set)
}

fn walk(
    dir: &Path,
    modules: &mut Vec<String>,
    dialect: &impl Dialect,
    set: &mut SnippetSet,
) -> io::Result<()> {
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            modules.push(entry.file_name().to_string_lossy().into_owned());
            walk(&path, modules, dialect, set)?;
            modules.pop();
        } else if file_type.is_file() {
            if path.extension().and_then(|ext| ext.to_str()) != Some(SNIPPET_EXTENSION) {
                log::warn!(
                    "Unsupported file extension {:?} from file {}",
                    path.extension().unwrap_or_default(),
                    path.display()
                );
                continue;
            }

            let stem = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            let body = fs::read_to_string(&path)?;

            let module_path: &[String] = match modules.last() {
                Some(last) if last.starts_with('.') => &[],
                _ => modules.as_slice(),
            };
            set.push_wrapped(
                dialect,
                module_path,
                SnippetItem {
                    description: extract_description(&stem),
                    tab_trigger: extract_tab_trigger(&stem),
                    body,
                },
            );
        }
    }

    Ok(())
}
