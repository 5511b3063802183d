//! Static response catalog and placeholder rendering.
//!
//! The catalog is compiled into the binary ([`catalog`]) and indexed once into
//! a process-wide [`TemplateTable`]. Lookups never fail: an unknown category
//! resolves to [`keys::PRACTICE_1`].

pub mod catalog;
pub mod keys;

use std::collections::HashMap;
use std::sync::LazyLock;

static BUILTIN: LazyLock<TemplateTable> =
    LazyLock::new(|| TemplateTable::from_entries(catalog::CATALOG));

/// Read-only map from category key to an ordered list of templates.
#[derive(Debug, Clone)]
pub struct TemplateTable {
    entries: HashMap<&'static str, &'static [&'static str]>,
}

/// The result of a category lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
    /// The key that actually served the templates.
    pub key: &'static str,
    pub templates: &'static [&'static str],
}

impl TemplateTable {
    /// The catalog shipped with the crate.
    pub fn builtin() -> &'static TemplateTable {
        &BUILTIN
    }

    fn from_entries(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Templates for `key`, or `None` if the key is not in the catalog.
    pub fn get(&self, key: &str) -> Option<&'static [&'static str]> {
        self.entries.get(key).copied()
    }

    /// Templates for `key`, falling back to [`keys::PRACTICE_1`].
    pub fn lookup(&self, key: &str) -> Lookup {
        if let Some((&key, &templates)) = self.entries.get_key_value(key) {
            return Lookup { key, templates };
        }
        Lookup {
            key: keys::PRACTICE_1,
            templates: self.get(keys::PRACTICE_1).unwrap_or(&[]),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

/// Substitute `{name}` tokens in a single left-to-right pass.
///
/// Tokens with no matching placeholder are copied through verbatim, braces
/// included. Substituted values are written straight to the output and never
/// scanned again, so a value containing `{team_name}` stays literal.
pub fn render(template: &str, placeholders: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some((before, after_open)) = rest.split_once('{') {
        out.push_str(before);

        let Some((name, after_close)) = after_open.split_once('}') else {
            out.push('{');
            out.push_str(after_open);
            return out;
        };

        // A second `{` before the `}` means this brace opens nothing.
        if name.contains('{') {
            out.push('{');
            rest = after_open;
            continue;
        }

        match placeholders.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = after_close;
    }

    out.push_str(rest);
    out
}
