//! Extractor: line-pattern heuristics over one file unit's content.
//!
//! These are pure functions over text, matched line by line. They do not
//! track indentation, nesting, decorators, or multi-line signatures: false
//! positives and false negatives are accepted, because the results feed a
//! heuristic index rather than a correctness-critical consumer. Keep it
//! approximate; do not grow this into a real parser.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// `import X[, Y ...]` and `from M import X[, Y ...]`, applied to the
/// trimmed line. Group 1 is the optional `from` module, group 2 the item list.
static IMPORT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:from\s+(\S+)\s+)?import\s+(.+)$").unwrap());

/// Class definition header; the name is everything between the keyword and
/// the first `(` or `:`.
static CLASS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*class\s+([^(:]+)").unwrap());

/// Function definition header, same capture convention as [`CLASS_RE`].
static DEF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*def\s+([^(:]+)").unwrap());

/// Collect imported names from `content`.
///
/// For a bare `import` form, each comma-separated token is recorded as-is.
/// For `from M import a, b as c`, the module `M` is recorded together with
/// the qualified members `M.a` and `M.b`. Aliases are dropped; only the
/// original name is kept. The result is a set: duplicate mentions collapse
/// and order is irrelevant. No match at all is a normal, valid outcome.
pub fn extract_imports(content: &str) -> BTreeSet<String> {
    let mut imports = BTreeSet::new();

    for line in content.lines() {
        let Some(caps) = IMPORT_RE.captures(line.trim()) else {
            continue;
        };
        let from_module = caps.get(1).map(|m| m.as_str());
        let items = caps.get(2).map(|m| m.as_str()).unwrap_or_default();

        if let Some(module) = from_module {
            imports.insert(module.to_string());
        }
        for item in items.split(',') {
            // First whitespace token; this drops an `as <alias>` suffix.
            let Some(name) = item.split_whitespace().next() else {
                continue;
            };
            match from_module {
                Some(module) => imports.insert(format!("{module}.{name}")),
                None => imports.insert(name.to_string()),
            };
        }
    }

    imports
}

/// Collect class and function names from `content`, each in order of
/// appearance. A line matching the class pattern never also contributes a
/// function.
pub fn extract_classes_and_functions(content: &str) -> (Vec<String>, Vec<String>) {
    let mut classes = Vec::new();
    let mut functions = Vec::new();

    for line in content.lines() {
        if let Some(caps) = CLASS_RE.captures(line) {
            classes.push(caps[1].trim().to_string());
            continue;
        }
        if let Some(caps) = DEF_RE.captures(line) {
            functions.push(caps[1].trim().to_string());
        }
    }

    (classes, functions)
}
