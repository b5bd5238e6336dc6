//! Start-page shell UI composition and interaction surfaces.

mod bookmark_grid;
mod settings;
mod widgets;

use std::time::Duration;

use leptos::*;
use wasm_bindgen::JsCast;

use self::{bookmark_grid::BookmarkGrid, settings::SettingsPanel};
use crate::{
    model::{BookmarkSize, DragKind, DragPayload, DragPhase, StartState, WidgetId, Zone},
    reducer::StartAction,
};

pub use crate::runtime_context::{use_start_runtime, StartProvider, StartRuntimeContext};

/// `DataTransfer` format carrying the dragged entity kind.
const DRAG_KIND_FORMAT: &str = "application/x-startpage-drag";

/// Hold duration before a bookmark tile arms for dragging, in milliseconds.
const BOOKMARK_PRESS_MS: u64 = 300;

fn widget_enabled(state: &StartState, id: WidgetId) -> bool {
    match id {
        WidgetId::Clock => state.clock.enabled,
        WidgetId::Search => state.search.enabled,
        WidgetId::Weather => state.weather.enabled,
        WidgetId::Todo => state.todo.enabled,
        WidgetId::Quote => state.quote.enabled,
        WidgetId::Notes => state.notes.enabled,
        WidgetId::Pomodoro => state.pomodoro.enabled,
        WidgetId::Crypto => state.crypto.enabled,
        WidgetId::Breathing => state.breathing.enabled,
    }
}

fn is_text_entry_target(ev: &web_sys::KeyboardEvent) -> bool {
    let Some(target) = ev.target() else {
        return false;
    };
    target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
}

fn tag_drag_event(ev: &web_sys::DragEvent, kind: DragKind) {
    if let Some(transfer) = ev.data_transfer() {
        transfer.set_effect_allowed("move");
        if transfer.set_data(DRAG_KIND_FORMAT, kind.as_str()).is_err() {
            logging::warn!("drag payload tag rejected by the data transfer");
        }
    }
}

/// Reads the entity-kind tag back off a drop event. Foreign drags (files, text
/// selections) carry no tag and resolve to `None`.
fn drag_event_kind(ev: &web_sys::DragEvent) -> Option<DragKind> {
    let transfer = ev.data_transfer()?;
    let raw = transfer.get_data(DRAG_KIND_FORMAT).ok()?;
    DragKind::parse(&raw)
}

/// True when a drag gesture started on an interactive control inside the
/// draggable surface, which should win over the drag.
fn drag_started_on_control(ev: &web_sys::DragEvent) -> bool {
    let Some(target) = ev.target() else {
        return false;
    };
    let Some(element) = target.dyn_ref::<web_sys::Element>() else {
        return false;
    };
    matches!(element.closest("button, input"), Ok(Some(_)))
}

fn bookmark_size_css(size: BookmarkSize) -> &'static str {
    match size {
        BookmarkSize::Icon => "icon",
        BookmarkSize::Small => "small",
        BookmarkSize::Medium => "medium",
        BookmarkSize::Large => "large",
    }
}

fn widget_body(id: WidgetId) -> View {
    match id {
        WidgetId::Clock => view! { <widgets::ClockWidget /> }.into_view(),
        WidgetId::Search => view! { <widgets::SearchWidget /> }.into_view(),
        WidgetId::Weather => view! { <widgets::WeatherWidget /> }.into_view(),
        WidgetId::Todo => view! { <widgets::TodoWidget /> }.into_view(),
        WidgetId::Quote => view! { <widgets::QuoteWidget /> }.into_view(),
        WidgetId::Notes => view! { <widgets::NotesWidget /> }.into_view(),
        WidgetId::Pomodoro => view! { <widgets::PomodoroWidget /> }.into_view(),
        WidgetId::Crypto => view! { <widgets::CryptoWidget /> }.into_view(),
        WidgetId::Breathing => view! { <widgets::BreathingWidget /> }.into_view(),
    }
}

#[component]
/// Renders the full start-page shell: widget zones, the bookmark grid, and the
/// settings surface.
pub fn StartShell() -> impl IntoView {
    let runtime = use_start_runtime();
    let state = runtime.state;
    let settings_open = create_rw_signal(false);

    let zen_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        if !ev.key().eq_ignore_ascii_case("z") || is_text_entry_target(&ev) {
            return;
        }
        runtime.dispatch_action(StartAction::ToggleZenMode);
    });
    on_cleanup(move || zen_listener.remove());

    view! {
        <div
            id="start-shell-root"
            class="start-shell"
            tabindex="-1"
            data-ui-primitive="true"
            data-ui-kind="start-root"
            data-zen=move || state.get().zen_mode.to_string()
            data-locked=move || state.get().lock_layout.to_string()
        >
            <Show
                when=move || !state.get().zen_mode
                fallback=move || {
                    view! {
                        <div class="zen-stage" data-ui-slot="zen">
                            <widgets::ClockWidget />
                        </div>
                    }
                }
            >
                <WidgetZone zone=Zone::Header />
                <div class="start-top-row">
                    <WidgetZone zone=Zone::TopLeft />
                    <WidgetZone zone=Zone::TopRight />
                </div>
                <div class="start-main-row">
                    <aside class="start-sidebar">
                        <WidgetZone zone=Zone::Sidebar />
                    </aside>
                    <main class="start-content">
                        <BookmarkGrid />
                    </main>
                </div>
                <button
                    class="settings-toggle"
                    aria-label="Open settings"
                    aria-haspopup="dialog"
                    aria-expanded=move || settings_open.get()
                    on:click=move |_| settings_open.update(|open| *open = !*open)
                >
                    "Settings"
                </button>
                <SettingsPanel open=settings_open />
            </Show>
        </div>
    }
}

#[component]
/// One layout zone: renders its placed, enabled widgets and accepts widget
/// drops onto empty zone space.
fn WidgetZone(zone: Zone) -> impl IntoView {
    let runtime = use_start_runtime();
    let state = runtime.state;

    let widget_drop_ready = Signal::derive(move || {
        matches!(
            runtime.interaction.get().drag.dragging_payload(),
            Some(DragPayload::Widget { .. })
        )
    });

    view! {
        <section
            class="widget-zone"
            data-ui-kind="widget-zone"
            data-ui-slot=zone.as_str()
            data-drop-ready=move || widget_drop_ready.get().to_string()
            on:dragover=move |ev| {
                if widget_drop_ready.get_untracked() {
                    ev.prevent_default();
                }
            }
            on:drop=move |ev| {
                ev.prevent_default();
                if drag_event_kind(&ev) == Some(DragKind::Widget) {
                    runtime
                        .dispatch_action(StartAction::DropOnWidget {
                            target_zone: zone,
                            target: None,
                        });
                }
            }
        >
            <For
                each=move || {
                    let start = state.get();
                    start
                        .layout
                        .zone(zone)
                        .iter()
                        .copied()
                        .filter(|id| widget_enabled(&start, *id))
                        .collect::<Vec<_>>()
                }
                key=|id| *id
                let:id
            >
                <DraggableWidget id=id zone=zone />
            </For>
        </section>
    }
}

#[component]
/// Widget chrome shared by every zone entry: grip arming, HTML5 drag wiring,
/// and the remove control.
fn DraggableWidget(id: WidgetId, zone: Zone) -> impl IntoView {
    let runtime = use_start_runtime();

    let armed = Signal::derive(move || {
        matches!(
            &runtime.interaction.get().drag,
            DragPhase::Armed(DragPayload::Widget { id: armed_id, .. }) if *armed_id == id
        )
    });
    let dragging_self = Signal::derive(move || {
        matches!(
            runtime.interaction.get().drag.dragging_payload(),
            Some(DragPayload::Widget { id: drag_id, .. }) if *drag_id == id
        )
    });
    let widget_drop_ready = Signal::derive(move || {
        matches!(
            runtime.interaction.get().drag.dragging_payload(),
            Some(DragPayload::Widget { .. })
        )
    });
    let gestures_enabled = Signal::derive(move || {
        let start = runtime.state.get();
        !start.lock_layout && !start.zen_mode
    });

    view! {
        <article
            class="widget-card"
            data-ui-kind="widget-card"
            data-widget=id.as_str()
            data-armed=move || armed.get().to_string()
            data-dragging=move || dragging_self.get().to_string()
            draggable=move || armed.get().to_string()
            on:dragstart=move |ev| {
                tag_drag_event(&ev, DragKind::Widget);
                runtime.dispatch_action(StartAction::BeginDrag);
            }
            on:dragend=move |_| runtime.dispatch_action(StartAction::CancelDrag)
            on:dragover=move |ev| {
                if widget_drop_ready.get_untracked() {
                    ev.prevent_default();
                }
            }
            on:drop=move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
                if drag_event_kind(&ev) == Some(DragKind::Widget) {
                    runtime
                        .dispatch_action(StartAction::DropOnWidget {
                            target_zone: zone,
                            target: Some(id),
                        });
                }
            }
        >
            <header class="widget-card-header">
                <Show when=move || gestures_enabled.get() fallback=|| ()>
                    <span
                        class="widget-grip"
                        data-ui-kind="widget-grip"
                        aria-hidden="true"
                        on:pointerenter=move |_| {
                            runtime
                                .dispatch_action(
                                    StartAction::ArmDrag(DragPayload::Widget {
                                        id,
                                        source_zone: zone,
                                    }),
                                );
                        }
                        on:pointerleave=move |_| {
                            runtime.dispatch_action(StartAction::DisarmDrag);
                        }
                    >
                        "::"
                    </span>
                </Show>
                <h2 class="widget-card-title">{id.title()}</h2>
                <Show when=move || gestures_enabled.get() fallback=|| ()>
                    <button
                        class="widget-remove"
                        aria-label=format!("Remove {} widget", id.title())
                        on:click=move |_| runtime.dispatch_action(StartAction::RemoveWidget(id))
                    >
                        "x"
                    </button>
                </Show>
            </header>
            <div class="widget-card-body">{widget_body(id)}</div>
        </article>
    }
}
