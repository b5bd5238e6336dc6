//! Runtime provider and context wiring for the start-page shell.
//!
//! This module owns the reducer container, the runtime effect queue, and host bootstrap wiring.
//! UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    effect_executor,
    host::StartHostContext,
    model::{InteractionState, StartState},
    reducer::{reduce_start, RuntimeEffect, StartAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading start-page runtime state and dispatching [`StartAction`] values.
pub struct StartRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<StartHostContext>,
    /// Reactive dashboard state signal.
    pub state: RwSignal<StartState>,
    /// Reactive drag/vault interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the host.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<StartAction>,
}

impl StartRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: StartAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`StartRuntimeContext`] to descendant components and boots persisted state.
pub fn StartProvider(children: Children) -> impl IntoView {
    let host = store_value(StartHostContext::default());
    let state = create_rw_signal(StartState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: StartAction| {
        let mut next_state = state.get_untracked();
        let mut next_interaction = interaction.get_untracked();
        let previous_state = next_state.clone();
        let previous_interaction = next_interaction.clone();

        match reduce_start(&mut next_state, &mut next_interaction, action) {
            Ok(new_effects) => {
                if next_state != previous_state {
                    state.set(next_state);
                }
                if next_interaction != previous_interaction {
                    interaction.set(next_interaction);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("start reducer error: {err}"),
        }
    });

    let runtime = StartRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);

    runtime.host.get_value().install_boot_hydration(dispatch);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`StartRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`StartProvider`].
pub fn use_start_runtime() -> StartRuntimeContext {
    use_context::<StartRuntimeContext>().expect("StartRuntimeContext not provided")
}
