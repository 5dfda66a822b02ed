//! Cross-module scenarios: plugin wiring, end-to-end language switching,
//! and table mutations driven through a running `App`.

use bevy::prelude::*;

use crate::selection::{ActiveLanguage, SetLanguage};
use crate::table::LocalisationTable;
use crate::LocalisationPlugin;

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(LocalisationPlugin);
    app
}

// =============================================================================
// Plugin wiring
// =============================================================================

#[test]
fn test_plugin_registers_resources() {
    let app = test_app();
    let table = app.world().resource::<LocalisationTable>();
    assert_eq!(table.language_count(), 0);
    assert_eq!(table.entry_count(), 0);
    assert_eq!(table.verify_consistency(), None);
    assert_eq!(app.world().resource::<ActiveLanguage>().name, "English");
}

// =============================================================================
// End-to-end language switching
// =============================================================================

#[test]
fn test_language_switch_end_to_end() {
    let mut app = test_app();
    {
        let mut table = app.world_mut().resource_mut::<LocalisationTable>();
        table.add_language("English");
        table.add_language("French");
        let entry = table.add_entry("menu.start");
        entry.set_value(0, "Start");
        entry.set_value(1, "Commencer");
    }

    app.world_mut().send_event(SetLanguage {
        name: "French".to_string(),
    });
    app.update();

    let active = app.world().resource::<ActiveLanguage>().name.clone();
    assert_eq!(active, "French");
    let table = app.world().resource::<LocalisationTable>();
    assert_eq!(table.localise("menu.start", &active), "Commencer");
    assert_eq!(table.verify_consistency(), None);
}

// =============================================================================
// Mutation sequences
// =============================================================================

#[test]
fn test_growth_then_shrink_preserves_translations() {
    let mut table = LocalisationTable::default();
    table.add_language("English");
    for key in ["Key1", "Key2"] {
        table.add_entry(key).set_value(0, &format!("{}-English", key));
    }

    // Grow: the new language gets an empty tail slot on every entry.
    table.add_language("French");
    for key in ["Key1", "Key2"] {
        let entry = table.get_entry_mut(key).unwrap();
        assert_eq!(entry.values, vec![format!("{}-English", key), String::new()]);
        entry.set_value(1, &format!("{}-French", key));
    }

    table.add_language("Spanish");
    assert_eq!(table.verify_consistency(), None);

    // Shrink from the middle: English and Spanish slots keep their text.
    table.remove_language("French");
    for key in ["Key1", "Key2"] {
        let entry = table.get_entry(key).unwrap();
        assert_eq!(entry.values, vec![format!("{}-English", key), String::new()]);
    }
    assert_eq!(table.language_index("Spanish"), Some(1));
    assert_eq!(table.verify_consistency(), None);
}

// =============================================================================
// Host-engine serialization
// =============================================================================

#[test]
fn test_serde_json_roundtrip() {
    let mut table = LocalisationTable::default();
    table.add_language("English");
    table.add_language("French");
    let entry = table.add_entry("ui.quit");
    entry.set_value(0, "Quit");
    entry.set_value(1, "Quitter");

    let json = serde_json::to_string(&table).expect("table should serialize");
    let restored: LocalisationTable = serde_json::from_str(&json).expect("json should parse");
    assert_eq!(restored.languages, table.languages);
    assert_eq!(restored.entries, table.entries);
    assert_eq!(restored.verify_consistency(), None);
}
