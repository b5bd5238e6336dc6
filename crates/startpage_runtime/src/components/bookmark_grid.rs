use super::*;

use leptos::leptos_dom::helpers::TimeoutHandle;

use crate::{
    bookmarks::bookmarks_in_group,
    categories::sorted_category_labels,
    model::{Bookmark, BookmarkGroup, PRIVATE_CATEGORY},
};

#[component]
/// The main bookmark surface: the favorites group first, then one section per
/// category in display order.
pub(super) fn BookmarkGrid() -> impl IntoView {
    let runtime = use_start_runtime();
    let state = runtime.state;

    let groups = Signal::derive(move || {
        let start = state.get();
        let mut groups = Vec::new();
        if !bookmarks_in_group(&start.bookmarks, &BookmarkGroup::Favorites).is_empty() {
            groups.push(BookmarkGroup::Favorites);
        }
        for label in sorted_category_labels(&start.bookmarks, &start.category_order) {
            if label == PRIVATE_CATEGORY && !start.private_config.enabled {
                continue;
            }
            groups.push(BookmarkGroup::Category(label));
        }
        groups
    });

    view! {
        <div class="bookmark-grid" data-ui-kind="bookmark-grid">
            <For each=move || groups.get() key=|group| group.clone() let:group>
                <BookmarkSection group=group />
            </For>
        </div>
    }
}

#[component]
/// One bookmark group: a draggable header for categories, the collapse and
/// private controls, and the tile list.
fn BookmarkSection(group: BookmarkGroup) -> impl IntoView {
    let runtime = use_start_runtime();
    let state = runtime.state;

    let label = group.label().to_string();
    let is_category = matches!(group, BookmarkGroup::Category(_));
    let is_private = label == PRIVATE_CATEGORY;
    let gate_expanded = create_rw_signal(false);
    let tile_group = store_value(group.clone());

    let collapsed = {
        let label = label.clone();
        Signal::derive(move || is_category && state.get().collapsed_categories.contains(&label))
    };
    let unlocked = Signal::derive(move || runtime.interaction.get().private_unlocked);
    let dragging_self = {
        let label = label.clone();
        Signal::derive(move || {
            matches!(
                runtime.interaction.get().drag.dragging_payload(),
                Some(DragPayload::Category { label: drag_label }) if *drag_label == label
            )
        })
    };
    let category_drop_ready = Signal::derive(move || {
        is_category
            && matches!(
                runtime.interaction.get().drag.dragging_payload(),
                Some(DragPayload::Category { .. })
            )
    });
    // A private section with a password set stays pinned until it is unlocked.
    let header_draggable = Signal::derive(move || {
        let start = state.get();
        is_category
            && !start.lock_layout
            && !start.zen_mode
            && !(is_private && !start.private_config.password_hash.is_empty() && !unlocked.get())
    });
    let size = {
        let label = label.clone();
        Signal::derive(move || {
            let start = state.get();
            start
                .category_bookmark_sizes
                .get(&label)
                .copied()
                .unwrap_or(start.global_bookmark_size)
        })
    };
    let tiles = Signal::derive(move || {
        let start = state.get();
        bookmarks_in_group(&start.bookmarks, &tile_group.get_value())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });
    let body_visible = Signal::derive(move || !collapsed.get() && (!is_private || unlocked.get()));

    let drag_label = label.clone();
    let drop_label = label.clone();
    let collapse_label = label.clone();

    view! {
        <section
            class="bookmark-section"
            data-ui-kind="bookmark-section"
            data-group=label.clone()
            data-dragging=move || dragging_self.get().to_string()
            draggable=move || header_draggable.get().to_string()
            on:dragstart=move |ev| {
                if !is_category || drag_started_on_control(&ev) {
                    ev.prevent_default();
                    return;
                }
                tag_drag_event(&ev, DragKind::Category);
                runtime
                    .dispatch_action(
                        StartAction::ArmDrag(DragPayload::Category {
                            label: drag_label.clone(),
                        }),
                    );
                runtime.dispatch_action(StartAction::BeginDrag);
            }
            on:dragend=move |_| runtime.dispatch_action(StartAction::CancelDrag)
            on:dragover=move |ev| {
                if category_drop_ready.get_untracked() {
                    ev.prevent_default();
                }
            }
            on:drop=move |ev| {
                if !is_category {
                    return;
                }
                if drag_event_kind(&ev) == Some(DragKind::Category) {
                    ev.prevent_default();
                    ev.stop_propagation();
                    runtime
                        .dispatch_action(StartAction::DropOnCategory {
                            target_label: drop_label.clone(),
                        });
                }
            }
        >
            <header class="bookmark-section-header">
                <h2 class="bookmark-section-title">{label.clone()}</h2>
                <span class="bookmark-section-count">{move || tiles.get().len()}</span>
                <Show when=move || is_category && !is_private fallback=|| ()>
                    <button
                        class="bookmark-section-collapse"
                        aria-expanded=move || (!collapsed.get()).to_string()
                        on:click={
                            let collapse_label = collapse_label.clone();
                            move |_| {
                                runtime
                                    .dispatch_action(StartAction::ToggleCategoryCollapsed {
                                        label: collapse_label.clone(),
                                    });
                            }
                        }
                    >
                        {move || if collapsed.get() { "Show" } else { "Hide" }}
                    </button>
                </Show>
                <Show when=move || is_private fallback=|| ()>
                    <button
                        class="bookmark-private-toggle"
                        aria-label=move || {
                            if unlocked.get() { "Lock private bookmarks" } else { "Unlock private bookmarks" }
                        }
                        on:click=move |_| {
                            if unlocked.get_untracked() {
                                runtime.dispatch_action(StartAction::LockPrivate);
                                gate_expanded.set(false);
                            } else {
                                gate_expanded.update(|open| *open = !*open);
                            }
                        }
                    >
                        {move || if unlocked.get() { "Lock" } else { "Unlock" }}
                    </button>
                </Show>
            </header>
            <Show when=move || is_private && !unlocked.get() && gate_expanded.get() fallback=|| ()>
                <PrivateGate />
            </Show>
            <Show when=move || body_visible.get() fallback=|| ()>
                <ul class="bookmark-tile-list" data-size=move || bookmark_size_css(size.get())>
                    <For
                        each=move || tiles.get()
                        key=|bookmark| {
                            (
                                bookmark.id.clone(),
                                bookmark.title.clone(),
                                bookmark.url.clone(),
                                bookmark.is_favorite,
                            )
                        }
                        let:bookmark
                    >
                        <BookmarkTile
                            bookmark=bookmark
                            group=tile_group.get_value()
                            can_drag=!is_private
                        />
                    </For>
                </ul>
            </Show>
        </section>
    }
}

#[component]
/// A single bookmark link. Reorder drags arm through a long press so that a
/// plain click still follows the link.
fn BookmarkTile(bookmark: Bookmark, group: BookmarkGroup, can_drag: bool) -> impl IntoView {
    let runtime = use_start_runtime();
    let press_timer = create_rw_signal(None::<TimeoutHandle>);

    let id = bookmark.id.clone();
    let is_favorite = bookmark.is_favorite;
    let glyph = bookmark
        .title
        .chars()
        .next()
        .map(|first| first.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());

    let armed = {
        let id = id.clone();
        Signal::derive(move || {
            matches!(
                &runtime.interaction.get().drag,
                DragPhase::Armed(DragPayload::Bookmark { id: armed_id, .. }) if *armed_id == id
            )
        })
    };
    let dragging_self = {
        let id = id.clone();
        Signal::derive(move || {
            matches!(
                runtime.interaction.get().drag.dragging_payload(),
                Some(DragPayload::Bookmark { id: drag_id, .. }) if *drag_id == id
            )
        })
    };
    let bookmark_drop_ready = Signal::derive(move || {
        matches!(
            runtime.interaction.get().drag.dragging_payload(),
            Some(DragPayload::Bookmark { .. })
        )
    });
    let gestures_enabled = Signal::derive(move || {
        let start = runtime.state.get();
        can_drag && !start.lock_layout && !start.zen_mode
    });

    let clear_press = move || {
        if let Some(handle) = press_timer.get_untracked() {
            handle.clear();
            press_timer.set(None);
        }
    };

    let press_id = id.clone();
    let press_group = group.clone();
    let start_press = move || {
        clear_press();
        let payload = DragPayload::Bookmark {
            id: press_id.clone(),
            source_group: press_group.clone(),
        };
        let install = set_timeout_with_handle(
            move || runtime.dispatch_action(StartAction::ArmDrag(payload)),
            Duration::from_millis(BOOKMARK_PRESS_MS),
        );
        match install {
            Ok(handle) => press_timer.set(Some(handle)),
            Err(_) => logging::warn!("bookmark long-press timer install failed"),
        }
    };

    let drop_group = group.clone();
    let drop_id = id.clone();

    view! {
        <li
            class="bookmark-tile"
            data-ui-kind="bookmark-tile"
            data-armed=move || armed.get().to_string()
            data-dragging=move || dragging_self.get().to_string()
            draggable=move || (gestures_enabled.get() && armed.get()).to_string()
            on:pointerdown=move |_| {
                if gestures_enabled.get_untracked() {
                    start_press();
                }
            }
            on:pointerup=move |_| clear_press()
            on:pointerleave=move |_| {
                clear_press();
                if armed.get_untracked() {
                    runtime.dispatch_action(StartAction::DisarmDrag);
                }
            }
            on:dragstart=move |ev| {
                if !gestures_enabled.get_untracked() {
                    ev.prevent_default();
                    return;
                }
                ev.stop_propagation();
                tag_drag_event(&ev, DragKind::Bookmark);
                runtime.dispatch_action(StartAction::BeginDrag);
            }
            on:dragend=move |_| {
                clear_press();
                runtime.dispatch_action(StartAction::CancelDrag);
            }
            on:dragover=move |ev| {
                if gestures_enabled.get_untracked() && bookmark_drop_ready.get_untracked() {
                    ev.prevent_default();
                }
            }
            on:drop=move |ev| {
                if !gestures_enabled.get_untracked() {
                    return;
                }
                if drag_event_kind(&ev) == Some(DragKind::Bookmark) {
                    ev.prevent_default();
                    ev.stop_propagation();
                    runtime
                        .dispatch_action(StartAction::DropOnBookmark {
                            group: drop_group.clone(),
                            target_id: drop_id.clone(),
                        });
                }
            }
        >
            <a
                class="bookmark-link"
                href=bookmark.url.clone()
                draggable="false"
                on:click=move |ev| {
                    if armed.get_untracked() || dragging_self.get_untracked() {
                        ev.prevent_default();
                    }
                }
            >
                <span class="bookmark-glyph" aria-hidden="true">{glyph}</span>
                <span class="bookmark-title">{bookmark.title.clone()}</span>
                <Show when=move || is_favorite fallback=|| ()>
                    <span class="bookmark-favorite-mark" aria-label="Favorite">"\u{2605}"</span>
                </Show>
            </a>
        </li>
    }
}

#[component]
/// Password prompt for the private section. Unlock state never persists, so a
/// reload always starts locked.
fn PrivateGate() -> impl IntoView {
    let runtime = use_start_runtime();
    let attempt = create_rw_signal(String::new());
    let error = create_rw_signal(false);

    let submit = move || {
        runtime.dispatch_action(StartAction::UnlockPrivate {
            password: attempt.get_untracked(),
        });
        if runtime.interaction.get_untracked().private_unlocked {
            attempt.set(String::new());
            error.set(false);
        } else {
            error.set(true);
        }
    };

    view! {
        <form
            class="private-gate"
            data-error=move || error.get().to_string()
            on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }
        >
            <input
                type="password"
                placeholder="Password"
                aria-label="Private bookmarks password"
                prop:value=move || attempt.get()
                on:input=move |ev| {
                    attempt.set(event_target_value(&ev));
                    error.set(false);
                }
            />
            <button type="submit">"Unlock"</button>
            <Show when=move || error.get() fallback=|| ()>
                <span class="private-gate-error" role="alert">"Incorrect password"</span>
            </Show>
        </form>
    }
}
