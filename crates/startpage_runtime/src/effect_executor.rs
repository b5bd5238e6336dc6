//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::{reducer::RuntimeEffect, runtime_context::StartRuntimeContext};

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
///
/// `PersistConfig` collapses within a drained batch: a burst of accepted actions schedules the
/// debounced persist once instead of resetting the timer per action.
pub fn install(runtime: StartRuntimeContext) {
    // Clear the current queue before processing so nested dispatches enqueue a fresh batch instead
    // of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        let mut persist_scheduled = false;
        for effect in queued {
            if matches!(effect, RuntimeEffect::PersistConfig) {
                if persist_scheduled {
                    continue;
                }
                persist_scheduled = true;
            }
            host.run_runtime_effect(runtime, effect);
        }
    });
}
