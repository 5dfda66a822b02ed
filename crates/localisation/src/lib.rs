//! In-memory localisation table for games built on bevy.
//!
//! The `LocalisationTable` resource holds an ordered list of languages and a
//! keyed list of entries, one translated string per language per entry, with
//! the value arrays kept index-aligned with the language list across
//! language insertions and removals. `LocalisationPlugin` wires the table,
//! the active-language selection, and its event pair into an `App`. File
//! formats, asset loading, and editor UI live in the embedding game.

use bevy::prelude::*;

pub mod selection;
pub mod table;

#[cfg(test)]
mod integration_tests;

use selection::{handle_set_language, ActiveLanguage, LanguageChanged, SetLanguage};
use table::LocalisationTable;

// =============================================================================
// Decode helper
// =============================================================================

/// Decode bytes via `bitcode::decode`, logging a warning and returning
/// `Default` on failure, so a corrupt save degrades instead of aborting.
pub fn decode_or_warn<T: bitcode::DecodeOwned + Default>(what: &str, bytes: &[u8]) -> T {
    match bitcode::decode(bytes) {
        Ok(value) => value,
        Err(e) => {
            warn!(
                "{}: failed to decode {} bytes, falling back to default: {}",
                what,
                bytes.len(),
                e
            );
            T::default()
        }
    }
}

// =============================================================================
// Plugin
// =============================================================================

pub struct LocalisationPlugin;

impl Plugin for LocalisationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocalisationTable>()
            .init_resource::<ActiveLanguage>()
            .add_event::<SetLanguage>()
            .add_event::<LanguageChanged>()
            .add_systems(Update, handle_set_language);
    }
}
