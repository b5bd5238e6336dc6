//! Host-side runtime helpers for executing reducer effects and wiring browser services.
//!
//! Effect execution lives behind a typed boundary so the reducer stays pure: persistence goes
//! through the injected [`AppStateStore`]/[`PrefsStore`] services and device access (haptics)
//! stays in this module.

use std::cell::Cell;
use std::rc::Rc;

use leptos::{create_effect, logging, spawn_local, Callable, Callback, SignalGetUntracked};
use platform_storage::{AppStateStore, PrefsStore};
#[cfg(not(target_arch = "wasm32"))]
use platform_storage::{MemoryAppStateStore, MemoryPrefsStore};
#[cfg(target_arch = "wasm32")]
use platform_storage::{WebAppStateStore, WebPrefsStore};

use crate::{
    model::StartState,
    persistence,
    reducer::{RuntimeEffect, StartAction},
    runtime_context::StartRuntimeContext,
};

/// Trailing-edge debounce window for config persistence, in milliseconds.
#[cfg(target_arch = "wasm32")]
const PERSIST_DEBOUNCE_MS: i32 = 1000;

#[derive(Clone)]
/// Host service bundle for start-page runtime side effects.
pub struct StartHostContext {
    app_state: Rc<dyn AppStateStore>,
    prefs: Rc<dyn PrefsStore>,
    pending_persist: Rc<Cell<Option<i32>>>,
}

impl Default for StartHostContext {
    fn default() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(Rc::new(WebAppStateStore), Rc::new(WebPrefsStore))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(
                Rc::new(MemoryAppStateStore::default()),
                Rc::new(MemoryPrefsStore::default()),
            )
        }
    }
}

impl StartHostContext {
    /// Builds a host context over explicit storage services.
    pub fn new(app_state: Rc<dyn AppStateStore>, prefs: Rc<dyn PrefsStore>) -> Self {
        Self {
            app_state,
            prefs,
            pending_persist: Rc::new(Cell::new(None)),
        }
    }

    /// Returns the configured app-state persistence service.
    pub fn app_state_store(&self) -> Rc<dyn AppStateStore> {
        self.app_state.clone()
    }

    /// Returns the configured lightweight preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Installs boot hydration/migration side effects for the start provider.
    ///
    /// Boot order:
    /// 1. hydrate from the legacy raw-JSON config first (if present)
    /// 2. hydrate from the durable envelope if present
    /// 3. otherwise migrate the legacy value into the envelope and delete the legacy key
    pub fn install_boot_hydration(&self, dispatch: Callback<StartAction>) {
        let host = self.clone();
        create_effect(move |_| {
            let host = host.clone();
            let dispatch = dispatch;
            spawn_local(async move {
                let legacy = persistence::load_legacy_snapshot(host.prefs.as_ref()).await;
                if let Some(snapshot) = legacy.clone() {
                    dispatch.call(StartAction::HydrateSnapshot(snapshot));
                }

                if let Some(snapshot) =
                    persistence::load_durable_boot_snapshot(host.app_state.as_ref()).await
                {
                    dispatch.call(StartAction::HydrateSnapshot(snapshot));
                } else if let Some(snapshot) = legacy {
                    let migrated = StartState::from_snapshot(snapshot);
                    match persistence::persist_config_snapshot(host.app_state.as_ref(), &migrated)
                        .await
                    {
                        Ok(()) => persistence::delete_legacy_snapshot(host.prefs.as_ref()).await,
                        Err(err) => {
                            logging::warn!("migrate legacy config to durable store failed: {err}")
                        }
                    }
                }
            });
        });
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: StartRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistConfig => self.schedule_persist(runtime),
            RuntimeEffect::HapticPulse(duration_ms) => self.haptic_pulse(duration_ms),
        }
    }

    /// Schedules a debounced config persist so reorder bursts collapse into one write.
    ///
    /// The snapshot is taken when the timer fires, not when it is scheduled. Outside the
    /// browser the write happens immediately.
    fn schedule_persist(&self, runtime: StartRuntimeContext) {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::{closure::Closure, JsCast};

            let Some(window) = web_sys::window() else {
                return;
            };
            if let Some(handle) = self.pending_persist.take() {
                window.clear_timeout_with_handle(handle);
            }

            let host = self.clone();
            let callback = Closure::once_into_js(move || {
                host.pending_persist.set(None);
                let state = runtime.state.get_untracked();
                let store = host.app_state.clone();
                spawn_local(async move {
                    if let Err(err) =
                        persistence::persist_config_snapshot(store.as_ref(), &state).await
                    {
                        logging::warn!("persist config snapshot failed: {err}");
                    }
                });
            });
            match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                PERSIST_DEBOUNCE_MS,
            ) {
                Ok(handle) => self.pending_persist.set(Some(handle)),
                Err(_) => logging::warn!("persist debounce timer install failed"),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = self.pending_persist.take();
            let host = self.clone();
            let state = runtime.state.get_untracked();
            spawn_local(async move {
                if let Err(err) =
                    persistence::persist_config_snapshot(host.app_state.as_ref(), &state).await
                {
                    logging::warn!("persist config snapshot failed: {err}");
                }
            });
        }
    }

    /// Fires a vibration pulse where the host navigator supports it.
    fn haptic_pulse(&self, duration_ms: u32) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.navigator().vibrate_with_duration(duration_ms);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = duration_ms;
    }
}
