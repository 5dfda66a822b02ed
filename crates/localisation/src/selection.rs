//! Active-language selection.
//!
//! Holds the `ActiveLanguage` resource and the `SetLanguage` /
//! `LanguageChanged` event pair. UI systems send `SetLanguage`; anything
//! that caches localised text listens for `LanguageChanged` and refreshes.

use bevy::prelude::*;

use crate::table::{LocalisationTable, DEFAULT_LANGUAGE};

// =============================================================================
// Resource
// =============================================================================

/// Name of the language used for lookups by UI callers.
///
/// Not required to name a language present in the table: the table may be
/// populated after startup, and `LocalisationTable::localise` already falls
/// back to the default language and then the key.
#[derive(Resource, Debug, Clone)]
pub struct ActiveLanguage {
    pub name: String,
}

impl Default for ActiveLanguage {
    fn default() -> Self {
        Self {
            name: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

// =============================================================================
// Events
// =============================================================================

/// Request to switch the active language to a language in the table.
#[derive(Event, Debug, Clone)]
pub struct SetLanguage {
    pub name: String,
}

/// Fired after the active language actually changed.
#[derive(Event, Debug, Clone)]
pub struct LanguageChanged {
    pub name: String,
}

// =============================================================================
// Systems
// =============================================================================

/// Process `SetLanguage` requests against the current table.
///
/// Requests naming a language not present in the table are rejected with a
/// warning and leave the selection unchanged. Requests for the language that
/// is already active are dropped without a `LanguageChanged`.
pub fn handle_set_language(
    mut requests: EventReader<SetLanguage>,
    table: Res<LocalisationTable>,
    mut active: ResMut<ActiveLanguage>,
    mut changed: EventWriter<LanguageChanged>,
) {
    for request in requests.read() {
        if !table.contains_language(&request.name) {
            warn!(
                "SetLanguage: unknown language '{}', keeping '{}'",
                request.name, active.name
            );
            continue;
        }
        if active.name == request.name {
            continue;
        }
        active.name = request.name.clone();
        info!("Active language switched to '{}'", active.name);
        changed.send(LanguageChanged {
            name: request.name.clone(),
        });
    }
}

// =============================================================================
// Tests
// =============================================================================
