//! Start-page persistence adapters for boot hydration and legacy config migration.

use platform_storage::{
    decode_envelope_payload, load_app_state_with_migration, save_app_state_with, AppStateEnvelope,
    AppStateStore, PrefsStore, STARTPAGE_STATE_NAMESPACE,
};

use crate::model::{StartSnapshot, StartState, START_CONFIG_SCHEMA_VERSION};

/// Raw `localStorage` key written by earlier releases of the dashboard.
pub const LEGACY_CONFIG_KEY: &str = "lofi_start_config_v1";

fn migrate_start_snapshot(
    schema_version: u32,
    envelope: &AppStateEnvelope,
) -> Result<Option<StartSnapshot>, String> {
    match schema_version {
        // Schema 0 predates the version stamp but shares the snapshot field layout; the serde
        // defaults fill anything it lacks.
        0 => decode_envelope_payload(envelope).map(Some),
        _ => Ok(None),
    }
}

/// Loads the legacy raw-JSON config if one is still present.
///
/// Earlier releases stored the whole config as plain JSON under [`LEGACY_CONFIG_KEY`]. The
/// snapshot's serde defaults absorb fields those releases did not write.
pub async fn load_legacy_snapshot(prefs: &dyn PrefsStore) -> Option<StartSnapshot> {
    match prefs.load_pref(LEGACY_CONFIG_KEY).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                leptos::logging::warn!("legacy config parse failed: {err}");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            leptos::logging::warn!("legacy config load failed: {err}");
            None
        }
    }
}

/// Deletes the legacy raw-JSON config key after a successful durable migration.
pub async fn delete_legacy_snapshot(prefs: &dyn PrefsStore) {
    if let Err(err) = prefs.delete_pref(LEGACY_CONFIG_KEY).await {
        leptos::logging::warn!("legacy config delete failed: {err}");
    }
}

/// Loads the durable boot snapshot from the versioned app-state envelope.
pub async fn load_durable_boot_snapshot(store: &dyn AppStateStore) -> Option<StartSnapshot> {
    match load_app_state_with_migration(
        store,
        STARTPAGE_STATE_NAMESPACE,
        START_CONFIG_SCHEMA_VERSION,
        migrate_start_snapshot,
    )
    .await
    {
        Ok(snapshot) => snapshot,
        Err(err) => {
            leptos::logging::warn!("durable boot snapshot load failed: {err}");
            None
        }
    }
}

/// Persists the durable config snapshot for `state`.
///
/// # Errors
///
/// Returns an error when serialization or the store save fails.
pub async fn persist_config_snapshot(
    store: &dyn AppStateStore,
    state: &StartState,
) -> Result<(), String> {
    save_app_state_with(
        store,
        STARTPAGE_STATE_NAMESPACE,
        START_CONFIG_SCHEMA_VERSION,
        &state.snapshot(),
    )
    .await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_storage::{build_app_state_envelope, MemoryAppStateStore, MemoryPrefsStore};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn config_namespace_migration_supports_schema_zero() {
        let snapshot = StartState::default().snapshot();
        let envelope = build_app_state_envelope(STARTPAGE_STATE_NAMESPACE, 0, &snapshot)
            .expect("build envelope");

        let migrated =
            migrate_start_snapshot(0, &envelope).expect("schema-zero migration should succeed");
        assert!(migrated.is_some(), "expected migrated start snapshot");
    }

    #[test]
    fn persist_and_load_round_trip_through_the_envelope() {
        let store = MemoryAppStateStore::default();
        let mut state = StartState::default();
        state.username = "Ada".to_string();
        state.lock_layout = true;

        block_on(persist_config_snapshot(&store, &state)).expect("persist");
        let loaded = block_on(load_durable_boot_snapshot(&store)).expect("snapshot present");

        assert_eq!(StartState::from_snapshot(loaded), state);
    }

    #[test]
    fn legacy_snapshot_parses_camel_case_json() {
        let prefs = MemoryPrefsStore::default();
        let raw = r#"{
            "username": "Kim",
            "lockLayout": true,
            "layout": { "header": ["clock"], "sidebar": ["todo"], "topLeft": [], "topRight": [] },
            "bookmarks": [
                { "id": "1", "title": "GitHub", "url": "https://github.com",
                  "category": "Development", "isFavorite": true }
            ]
        }"#;
        block_on(prefs.save_pref(LEGACY_CONFIG_KEY, raw)).expect("seed legacy key");

        let snapshot = block_on(load_legacy_snapshot(&prefs)).expect("legacy snapshot");
        assert_eq!(snapshot.username, "Kim");
        assert!(snapshot.lock_layout);
        assert_eq!(snapshot.layout.header, vec!["clock".to_string()]);
        assert_eq!(snapshot.bookmarks.len(), 1);
        assert!(snapshot.bookmarks[0].is_favorite);
    }

    #[test]
    fn unparseable_legacy_payload_is_discarded() {
        let prefs = MemoryPrefsStore::default();
        block_on(prefs.save_pref(LEGACY_CONFIG_KEY, "not json")).expect("seed legacy key");
        assert_eq!(block_on(load_legacy_snapshot(&prefs)), None);
    }

    #[test]
    fn delete_legacy_snapshot_removes_the_key() {
        let prefs = MemoryPrefsStore::default();
        block_on(prefs.save_pref(LEGACY_CONFIG_KEY, "{}")).expect("seed legacy key");
        block_on(delete_legacy_snapshot(&prefs));
        assert_eq!(
            block_on(prefs.load_pref(LEGACY_CONFIG_KEY)).expect("load"),
            None
        );
    }
}
