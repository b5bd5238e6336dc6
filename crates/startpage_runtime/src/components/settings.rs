use super::*;

use crate::{
    categories::sorted_category_labels,
    model::{Bookmark, GENERAL_CATEGORY},
};

fn bookmark_size_from_css(value: &str) -> Option<BookmarkSize> {
    match value {
        "icon" => Some(BookmarkSize::Icon),
        "small" => Some(BookmarkSize::Small),
        "medium" => Some(BookmarkSize::Medium),
        "large" => Some(BookmarkSize::Large),
        _ => None,
    }
}

fn normalized_category(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        GENERAL_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

#[component]
/// The settings surface: identity, widget toggles, layout lock, bookmark CRUD,
/// tile sizes, and the private vault.
pub(super) fn SettingsPanel(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class="settings-panel"
                role="dialog"
                aria-label="Start page settings"
                data-ui-kind="settings-panel"
            >
                <header class="settings-panel-header">
                    <h2>"Settings"</h2>
                    <button
                        class="settings-close"
                        aria-label="Close settings"
                        on:click=move |_| open.set(false)
                    >
                        "x"
                    </button>
                </header>
                <GeneralSection />
                <WidgetSection />
                <BookmarkSection />
                <SizeSection />
                <PrivateSection />
            </div>
        </Show>
    }
}

#[component]
fn GeneralSection() -> impl IntoView {
    let runtime = use_start_runtime();
    let state = runtime.state;

    view! {
        <section class="settings-section" data-ui-slot="general">
            <h3>"General"</h3>
            <label class="settings-field">
                <span>"Display name"</span>
                <input
                    type="text"
                    prop:value=move || state.get().username
                    on:change=move |ev| {
                        runtime.dispatch_action(StartAction::SetUsername(event_target_value(&ev)));
                    }
                />
            </label>
            <label class="settings-field">
                <input
                    type="checkbox"
                    prop:checked=move || state.get().clock.use_24_hour
                    on:change=move |ev| {
                        runtime.dispatch_action(StartAction::SetClock24h(event_target_checked(&ev)));
                    }
                />
                <span>"24-hour clock"</span>
            </label>
            <label class="settings-field">
                <input
                    type="checkbox"
                    prop:checked=move || state.get().lock_layout
                    on:change=move |_| runtime.dispatch_action(StartAction::ToggleLockLayout)
                />
                <span>"Lock layout"</span>
            </label>
        </section>
    }
}

#[component]
fn WidgetSection() -> impl IntoView {
    let runtime = use_start_runtime();
    let state = runtime.state;

    view! {
        <section class="settings-section" data-ui-slot="widgets">
            <h3>"Widgets"</h3>
            <For each=|| WidgetId::ALL key=|id| *id let:id>
                <label class="settings-field">
                    <input
                        type="checkbox"
                        prop:checked=move || widget_enabled(&state.get(), id)
                        on:change=move |ev| {
                            runtime
                                .dispatch_action(
                                    StartAction::SetWidgetEnabled(id, event_target_checked(&ev)),
                                );
                        }
                    />
                    <span>{id.title()}</span>
                </label>
            </For>
        </section>
    }
}

#[component]
fn BookmarkSection() -> impl IntoView {
    let runtime = use_start_runtime();
    let state = runtime.state;

    let title_draft = create_rw_signal(String::new());
    let url_draft = create_rw_signal(String::new());
    let category_draft = create_rw_signal(String::new());
    let favorite_draft = create_rw_signal(false);

    let add_bookmark = move || {
        let title = title_draft.get_untracked().trim().to_string();
        let url_raw = url_draft.get_untracked().trim().to_string();
        if title.is_empty() || url_raw.is_empty() {
            return;
        }
        let url = if url_raw.starts_with("http") {
            url_raw
        } else {
            format!("https://{url_raw}")
        };
        let bookmark = Bookmark {
            id: format!("bm-{}", platform_storage::next_monotonic_timestamp_ms()),
            title,
            url,
            category: normalized_category(&category_draft.get_untracked()),
            is_favorite: favorite_draft.get_untracked(),
        };
        runtime.dispatch_action(StartAction::AddBookmark(bookmark));
        title_draft.set(String::new());
        url_draft.set(String::new());
        category_draft.set(String::new());
        favorite_draft.set(false);
    };

    view! {
        <section class="settings-section" data-ui-slot="bookmarks">
            <h3>"Bookmarks"</h3>
            <form
                class="settings-bookmark-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    add_bookmark();
                }
            >
                <input
                    type="text"
                    placeholder="Title"
                    aria-label="Bookmark title"
                    prop:value=move || title_draft.get()
                    on:input=move |ev| title_draft.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="URL"
                    aria-label="Bookmark URL"
                    prop:value=move || url_draft.get()
                    on:input=move |ev| url_draft.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Category"
                    aria-label="Bookmark category"
                    prop:value=move || category_draft.get()
                    on:input=move |ev| category_draft.set(event_target_value(&ev))
                />
                <label class="settings-field">
                    <input
                        type="checkbox"
                        prop:checked=move || favorite_draft.get()
                        on:change=move |ev| favorite_draft.set(event_target_checked(&ev))
                    />
                    <span>"Favorite"</span>
                </label>
                <button type="submit">"Add bookmark"</button>
            </form>
            <ul class="settings-bookmark-list">
                <For
                    each=move || state.get().bookmarks
                    key=|bookmark| {
                        (bookmark.id.clone(), bookmark.category.clone(), bookmark.is_favorite)
                    }
                    let:bookmark
                >
                    {
                        let favorite_id = bookmark.id.clone();
                        let remove_id = bookmark.id.clone();
                        let edit_source = bookmark.clone();
                        view! {
                            <li class="settings-bookmark-row">
                                <span class="settings-bookmark-name">{bookmark.title.clone()}</span>
                                <input
                                    type="text"
                                    aria-label=format!("Category for {}", bookmark.title)
                                    prop:value=bookmark.category.clone()
                                    on:change=move |ev| {
                                        let mut updated = edit_source.clone();
                                        updated.category = normalized_category(
                                            &event_target_value(&ev),
                                        );
                                        runtime.dispatch_action(StartAction::UpdateBookmark(updated));
                                    }
                                />
                                <button
                                    class="settings-bookmark-favorite"
                                    aria-pressed=bookmark.is_favorite.to_string()
                                    aria-label=format!("Toggle favorite for {}", bookmark.title)
                                    on:click=move |_| {
                                        runtime
                                            .dispatch_action(StartAction::ToggleFavorite {
                                                id: favorite_id.clone(),
                                            });
                                    }
                                >
                                    "\u{2605}"
                                </button>
                                <button
                                    class="settings-bookmark-remove"
                                    aria-label=format!("Remove {}", bookmark.title)
                                    on:click=move |_| {
                                        runtime
                                            .dispatch_action(StartAction::RemoveBookmark {
                                                id: remove_id.clone(),
                                            });
                                    }
                                >
                                    "x"
                                </button>
                            </li>
                        }
                    }
                </For>
            </ul>
        </section>
    }
}

#[component]
fn SizeSection() -> impl IntoView {
    let runtime = use_start_runtime();
    let state = runtime.state;

    let category_labels = Signal::derive(move || {
        let start = state.get();
        sorted_category_labels(&start.bookmarks, &start.category_order)
    });

    view! {
        <section class="settings-section" data-ui-slot="sizes">
            <h3>"Tile sizes"</h3>
            <label class="settings-field">
                <span>"All bookmarks"</span>
                <select
                    prop:value=move || bookmark_size_css(state.get().global_bookmark_size)
                    on:change=move |ev| {
                        if let Some(size) = bookmark_size_from_css(&event_target_value(&ev)) {
                            runtime.dispatch_action(StartAction::SetGlobalBookmarkSize(size));
                        }
                    }
                >
                    <option value="icon">"Icon"</option>
                    <option value="small">"Small"</option>
                    <option value="medium">"Medium"</option>
                    <option value="large">"Large"</option>
                </select>
            </label>
            <For each=move || category_labels.get() key=|label| label.clone() let:label>
                {
                    let value_label = label.clone();
                    let change_label = label.clone();
                    view! {
                        <label class="settings-field">
                            <span>{label.clone()}</span>
                            <select
                                prop:value=move || {
                                    state
                                        .get()
                                        .category_bookmark_sizes
                                        .get(&value_label)
                                        .map(|size| bookmark_size_css(*size))
                                        .unwrap_or("global")
                                }
                                on:change=move |ev| {
                                    let size = bookmark_size_from_css(&event_target_value(&ev));
                                    runtime
                                        .dispatch_action(StartAction::SetCategoryBookmarkSize {
                                            label: change_label.clone(),
                                            size,
                                        });
                                }
                            >
                                <option value="global">"Use global"</option>
                                <option value="icon">"Icon"</option>
                                <option value="small">"Small"</option>
                                <option value="medium">"Medium"</option>
                                <option value="large">"Large"</option>
                            </select>
                        </label>
                    }
                }
            </For>
        </section>
    }
}

#[component]
fn PrivateSection() -> impl IntoView {
    let runtime = use_start_runtime();
    let state = runtime.state;

    let password_draft = create_rw_signal(String::new());
    let unlocked = Signal::derive(move || runtime.interaction.get().private_unlocked);

    // A blank submission clears the stored password entirely.
    let apply_password = move || {
        let password = password_draft.get_untracked();
        let action = if password.is_empty() {
            StartAction::SetPrivatePassword(None)
        } else {
            StartAction::SetPrivatePassword(Some(password))
        };
        runtime.dispatch_action(action);
        password_draft.set(String::new());
    };

    view! {
        <section class="settings-section" data-ui-slot="private">
            <h3>"Private bookmarks"</h3>
            <label class="settings-field">
                <input
                    type="checkbox"
                    prop:checked=move || state.get().private_config.enabled
                    on:change=move |ev| {
                        runtime
                            .dispatch_action(
                                StartAction::SetPrivateEnabled(event_target_checked(&ev)),
                            );
                    }
                />
                <span>"Show the Private category"</span>
            </label>
            <form
                class="settings-private-password"
                on:submit=move |ev| {
                    ev.prevent_default();
                    apply_password();
                }
            >
                <input
                    type="password"
                    placeholder="New password (blank to remove)"
                    aria-label="Private category password"
                    prop:value=move || password_draft.get()
                    on:input=move |ev| password_draft.set(event_target_value(&ev))
                />
                <button type="submit">"Set password"</button>
            </form>
            <span class="settings-private-status">
                {move || {
                    if state.get().private_config.password_hash.is_empty() {
                        "No password set"
                    } else {
                        "Password set"
                    }
                }}
            </span>
            <Show when=move || unlocked.get() fallback=|| ()>
                <button
                    class="settings-private-lock"
                    on:click=move |_| runtime.dispatch_action(StartAction::LockPrivate)
                >
                    "Lock now"
                </button>
            </Show>
        </section>
    }
}
