//! Localisation table data layer.
//!
//! Provides the `LocalisationTable` resource: an ordered list of languages
//! and a keyed list of text entries, where each entry holds one translated
//! string per language. Entry value arrays stay index-aligned with the
//! language list across language insertions and removals. Editor tooling
//! and runtime lookup both go through this table; file formats and UI are
//! handled downstream.

use bevy::prelude::*;
use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Language created implicitly when an entry is added to a table that has
/// no languages yet.
pub const DEFAULT_LANGUAGE: &str = "English";

// =============================================================================
// Types
// =============================================================================

/// A named translation target. Its position in the table's language list is
/// its index; entry value arrays use the same index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct Language {
    /// Unique display name, matched by exact string equality.
    pub name: String,
}

/// A keyed record holding one translated string per language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct LocalisationEntry {
    /// Unique key, matched by exact string equality.
    pub key: String,
    /// One slot per language; `values[i]` belongs to the language at index `i`.
    pub values: Vec<String>,
}

impl LocalisationEntry {
    /// The translation at the given language index, or `None` when out of range.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(|v| v.as_str())
    }

    /// Set the translation at the given language index. Out-of-range indices
    /// are ignored.
    pub fn set_value(&mut self, index: usize, text: &str) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = text.to_string();
        }
    }
}

// =============================================================================
// Resource
// =============================================================================

/// The localisation asset: ordered, duplicate-free languages plus
/// duplicate-free (by key) entries whose value arrays are index-aligned with
/// the language list.
///
/// All operations are total. "Not found" and "already exists" are ordinary
/// return values, never errors, and every mutation leaves the table in a
/// state where `verify_consistency` reports no violation.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize, Encode, Decode)]
pub struct LocalisationTable {
    /// Languages in insertion order. Index = position in every entry's values.
    pub languages: Vec<Language>,
    /// Entries in insertion order.
    pub entries: Vec<LocalisationEntry>,
}

impl LocalisationTable {
    // -------------------------------------------------------------------------
    // Languages
    // -------------------------------------------------------------------------

    /// Add a language, returning its index.
    ///
    /// Idempotent: if the name is already present the existing index is
    /// returned and nothing changes. Otherwise the language is appended and
    /// every entry grows one empty slot at the tail.
    pub fn add_language(&mut self, name: &str) -> usize {
        if let Some(index) = self.language_index(name) {
            return index;
        }
        self.languages.push(Language {
            name: name.to_string(),
        });
        for entry in &mut self.entries {
            entry.values.push(String::new());
        }
        self.languages.len() - 1
    }

    /// Remove a language and every entry's slot at its index. No-op when the
    /// name is absent. Slots below the removed index are untouched; slots
    /// above shift down one with their content preserved verbatim.
    pub fn remove_language(&mut self, name: &str) {
        let Some(index) = self.language_index(name) else {
            return;
        };
        self.languages.remove(index);
        for entry in &mut self.entries {
            if index < entry.values.len() {
                entry.values.remove(index);
            }
        }
    }

    /// Look up a language by exact name.
    pub fn get_language(&self, name: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.name == name)
    }

    /// Whether a language with this exact name exists.
    pub fn contains_language(&self, name: &str) -> bool {
        self.language_index(name).is_some()
    }

    /// All languages in index order.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Index of a language by exact name.
    pub fn language_index(&self, name: &str) -> Option<usize> {
        self.languages.iter().position(|l| l.name == name)
    }

    /// Number of languages.
    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    // -------------------------------------------------------------------------
    // Entries
    // -------------------------------------------------------------------------

    /// Add an entry, returning a mutable handle to it.
    ///
    /// Idempotent: an existing entry with the same key is returned unchanged.
    /// On a table with zero languages the default language is created first,
    /// so a new entry always has at least one value slot. New entries get one
    /// empty slot per language.
    pub fn add_entry(&mut self, key: &str) -> &mut LocalisationEntry {
        if self.languages.is_empty() {
            self.add_language(DEFAULT_LANGUAGE);
        }
        if let Some(index) = self.entries.iter().position(|e| e.key == key) {
            return &mut self.entries[index];
        }
        self.entries.push(LocalisationEntry {
            key: key.to_string(),
            values: vec![String::new(); self.languages.len()],
        });
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    /// Remove an entry and all of its values. No-op when the key is absent.
    /// Languages and other entries are unaffected.
    pub fn remove_entry(&mut self, key: &str) {
        self.entries.retain(|e| e.key != key);
    }

    /// Look up an entry by exact key.
    pub fn get_entry(&self, key: &str) -> Option<&LocalisationEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Look up an entry by exact key, mutably.
    pub fn get_entry_mut(&mut self, key: &str) -> Option<&mut LocalisationEntry> {
        self.entries.iter_mut().find(|e| e.key == key)
    }

    /// Whether an entry with this exact key exists.
    pub fn contains_entry(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[LocalisationEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    /// The non-empty translation for a key in a language, or `None` when the
    /// key or language is absent or the slot holds no text.
    pub fn translation(&self, key: &str, language: &str) -> Option<&str> {
        let index = self.language_index(language)?;
        let entry = self.get_entry(key)?;
        match entry.value(index) {
            Some(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// Translation lookup for UI callers: falls back to the default language
    /// when the requested language has no text for the key, and to the key
    /// itself when nothing matches.
    pub fn localise<'a>(&'a self, key: &'a str, language: &str) -> &'a str {
        self.translation(key, language)
            .or_else(|| self.translation(key, DEFAULT_LANGUAGE))
            .unwrap_or(key)
    }

    // -------------------------------------------------------------------------
    // Consistency check
    // -------------------------------------------------------------------------

    /// Diagnostic check used by tests and editor tooling.
    ///
    /// Returns a description of the first violation found (value-array length
    /// mismatch, duplicate language name, duplicate entry key), or `None`
    /// when the table is consistent. Never mutates the table. A violation
    /// reachable through the public operations is a bug in this module.
    pub fn verify_consistency(&self) -> Option<String> {
        for (i, language) in self.languages.iter().enumerate() {
            if self.languages[..i].iter().any(|l| l.name == language.name) {
                return Some(format!("duplicate language '{}'", language.name));
            }
        }
        for (i, entry) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|e| e.key == entry.key) {
                return Some(format!("duplicate entry key '{}'", entry.key));
            }
            if entry.values.len() != self.languages.len() {
                return Some(format!(
                    "entry '{}' has {} values for {} languages",
                    entry.key,
                    entry.values.len(),
                    self.languages.len()
                ));
            }
        }
        None
    }

    // -------------------------------------------------------------------------
    // Save hooks
    // -------------------------------------------------------------------------

    /// Serialize the table to bytes for the host save system.
    /// Returns `None` for an empty table so the save layer can skip it.
    pub fn save_to_bytes(&self) -> Option<Vec<u8>> {
        if self.languages.is_empty() && self.entries.is_empty() {
            return None;
        }
        Some(bitcode::encode(self))
    }

    /// Deserialize a table from bytes, logging a warning and returning an
    /// empty table when the bytes do not decode.
    pub fn load_from_bytes(bytes: &[u8]) -> Self {
        crate::decode_or_warn("LocalisationTable", bytes)
    }
}

// =============================================================================
// Tests
// =============================================================================
