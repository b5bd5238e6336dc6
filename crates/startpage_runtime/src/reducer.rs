//! Reducer actions, side-effect intents, and transition logic for the start-page runtime.

use thiserror::Error;

use crate::bookmarks::move_bookmark;
use crate::categories::{move_category, sorted_category_labels};
use crate::layout::move_widget;
use crate::model::{
    simple_hash, Bookmark, BookmarkGroup, BookmarkSize, DragPayload, DragPhase, InteractionState,
    SearchEngine, StartSnapshot, StartState, TodoItem, WidgetId, Zone, PRIVATE_CATEGORY,
};

/// Haptic pulse length for a bookmark long-press arming a drag, in milliseconds.
const LONG_PRESS_PULSE_MS: u32 = 50;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_start`] to mutate [`StartState`].
pub enum StartAction {
    /// Arm a drag session for the supplied payload (grip press or long-press).
    ArmDrag(DragPayload),
    /// Drop an armed session that never started dragging.
    DisarmDrag,
    /// Promote the armed session to an active drag.
    BeginDrag,
    /// Abort the active drag without dropping.
    CancelDrag,
    /// Drop the dragged widget onto a zone slot.
    DropOnWidget {
        /// Zone receiving the drop.
        target_zone: Zone,
        /// Widget under the pointer, or `None` for empty zone space.
        target: Option<WidgetId>,
    },
    /// Drop the dragged bookmark onto another tile in the same group.
    DropOnBookmark {
        /// Group the drop target renders in.
        group: BookmarkGroup,
        /// Bookmark under the pointer.
        target_id: String,
    },
    /// Drop the dragged category header onto another header.
    DropOnCategory {
        /// Category label under the pointer.
        target_label: String,
    },
    /// Disable a widget and strip it from every zone.
    RemoveWidget(WidgetId),
    /// Enable or disable a widget from the settings surface.
    SetWidgetEnabled(WidgetId, bool),
    /// Toggle the layout lock that freezes all drag gestures.
    ToggleLockLayout,
    /// Toggle zen mode (clock-only rendering, gestures frozen).
    ToggleZenMode,
    /// Append a bookmark to the master list.
    AddBookmark(Bookmark),
    /// Replace a bookmark's fields, matched by id.
    UpdateBookmark(Bookmark),
    /// Delete a bookmark by id.
    RemoveBookmark {
        /// Bookmark to delete.
        id: String,
    },
    /// Flip a bookmark's favorite flag.
    ToggleFavorite {
        /// Bookmark to toggle.
        id: String,
    },
    /// Collapse or expand a rendered group section.
    ToggleCategoryCollapsed {
        /// Group label (a category name or the favorites label).
        label: String,
    },
    /// Set the default bookmark tile size.
    SetGlobalBookmarkSize(BookmarkSize),
    /// Override (or clear) the tile size for one group.
    SetCategoryBookmarkSize {
        /// Group label the override applies to.
        label: String,
        /// New size, or `None` to fall back to the global size.
        size: Option<BookmarkSize>,
    },
    /// Set the greeting username.
    SetUsername(String),
    /// Replace the notes widget content.
    SetNotesContent(String),
    /// Append a todo item. Blank text is ignored.
    AddTodo {
        /// Caller-minted unique id.
        id: String,
        /// Todo text.
        text: String,
    },
    /// Flip a todo's completed flag.
    ToggleTodo {
        /// Todo to toggle.
        id: String,
    },
    /// Delete a todo by id.
    RemoveTodo {
        /// Todo to delete.
        id: String,
    },
    /// Delete every completed todo.
    ClearCompletedTodos,
    /// Select the search engine used by the search widget.
    SetSearchEngine(SearchEngine),
    /// Switch the clock between 24-hour and 12-hour display.
    SetClock24h(bool),
    /// Enable or disable the private bookmark group.
    SetPrivateEnabled(bool),
    /// Set or clear the private group password (hashed before storage).
    SetPrivatePassword(Option<String>),
    /// Attempt to unlock the private group for this session.
    UnlockPrivate {
        /// Plaintext password attempt.
        password: String,
    },
    /// Re-lock the private group.
    LockPrivate,
    /// Hydrate runtime state from a persisted snapshot.
    HydrateSnapshot(StartSnapshot),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_start`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Persist the current config snapshot.
    PersistConfig,
    /// Vibrate for the given number of milliseconds where the host supports it.
    HapticPulse(u32),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for settings-surface actions that reference a missing entity.
///
/// Drag gestures never error; a stale or mismatched gesture is a silent no-op.
pub enum ReducerError {
    /// The target bookmark id was not found in the current state.
    #[error("bookmark not found")]
    BookmarkNotFound,
    /// The target todo id was not found in the current state.
    #[error("todo not found")]
    TodoNotFound,
}

/// Applies a [`StartAction`] to the start-page state and collects resulting side effects.
///
/// This function is the authoritative state transition engine for the dashboard: the drag
/// session state machine, layout and collection reordering, and every settings-surface
/// mutation route through it. Accepted mutations of persisted state emit
/// [`RuntimeEffect::PersistConfig`] exactly once.
///
/// # Errors
///
/// Returns [`ReducerError`] when a settings action references a bookmark or todo that is not
/// present.
pub fn reduce_start(
    state: &mut StartState,
    interaction: &mut InteractionState,
    action: StartAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        StartAction::ArmDrag(payload) => {
            if state.lock_layout || state.zen_mode {
                return Ok(effects);
            }
            if !matches!(interaction.drag, DragPhase::Idle) {
                return Ok(effects);
            }
            if payload_touches_locked_private(state, interaction, &payload) {
                return Ok(effects);
            }
            if matches!(payload, DragPayload::Bookmark { .. }) {
                effects.push(RuntimeEffect::HapticPulse(LONG_PRESS_PULSE_MS));
            }
            interaction.drag = DragPhase::Armed(payload);
        }
        StartAction::DisarmDrag => {
            if matches!(interaction.drag, DragPhase::Armed(_)) {
                interaction.drag = DragPhase::Idle;
            }
        }
        StartAction::BeginDrag => {
            if let DragPhase::Armed(payload) = std::mem::take(&mut interaction.drag) {
                interaction.drag = DragPhase::Dragging(payload);
            }
        }
        StartAction::CancelDrag => {
            interaction.drag = DragPhase::Idle;
        }
        StartAction::DropOnWidget {
            target_zone,
            target,
        } => {
            if let DragPhase::Dragging(DragPayload::Widget { id, source_zone }) =
                std::mem::take(&mut interaction.drag)
            {
                if move_widget(&mut state.layout, source_zone, id, target_zone, target) {
                    effects.push(RuntimeEffect::PersistConfig);
                }
            }
        }
        StartAction::DropOnBookmark { group, target_id } => {
            if let DragPhase::Dragging(DragPayload::Bookmark { id, source_group }) =
                std::mem::take(&mut interaction.drag)
            {
                if source_group == group
                    && move_bookmark(&mut state.bookmarks, &group, &id, &target_id)
                {
                    effects.push(RuntimeEffect::PersistConfig);
                }
            }
        }
        StartAction::DropOnCategory { target_label } => {
            if let DragPhase::Dragging(DragPayload::Category { label }) =
                std::mem::take(&mut interaction.drag)
            {
                let rendered = sorted_category_labels(&state.bookmarks, &state.category_order);
                if move_category(
                    &mut state.category_order,
                    &rendered,
                    &label,
                    &target_label,
                ) {
                    effects.push(RuntimeEffect::PersistConfig);
                }
            }
        }
        StartAction::RemoveWidget(id) => {
            *widget_enabled_mut(state, id) = false;
            state.layout.remove_everywhere(id);
            effects.push(RuntimeEffect::PersistConfig);
        }
        StartAction::SetWidgetEnabled(id, enabled) => {
            *widget_enabled_mut(state, id) = enabled;
            if enabled && !state.layout.contains(id) {
                state.layout.sidebar.push(id);
            }
            effects.push(RuntimeEffect::PersistConfig);
        }
        StartAction::ToggleLockLayout => {
            state.lock_layout = !state.lock_layout;
            effects.push(RuntimeEffect::PersistConfig);
        }
        StartAction::ToggleZenMode => {
            state.zen_mode = !state.zen_mode;
            effects.push(RuntimeEffect::PersistConfig);
        }
        StartAction::AddBookmark(bookmark) => {
            state.bookmarks.push(bookmark);
            effects.push(RuntimeEffect::PersistConfig);
        }
        StartAction::UpdateBookmark(bookmark) => {
            let slot = state
                .bookmarks
                .iter_mut()
                .find(|b| b.id == bookmark.id)
                .ok_or(ReducerError::BookmarkNotFound)?;
            *slot = bookmark;
            effects.push(RuntimeEffect::PersistConfig);
        }
        StartAction::RemoveBookmark { id } => {
            let before_len = state.bookmarks.len();
            state.bookmarks.retain(|b| b.id != id);
            if state.bookmarks.len() == before_len {
                return Err(ReducerError::BookmarkNotFound);
            }
            effects.push(RuntimeEffect::PersistConfig);
        }
        StartAction::ToggleFavorite { id } => {
            let bookmark = state
                .bookmarks
                .iter_mut()
                .find(|b| b.id == id)
                .ok_or(ReducerError::BookmarkNotFound)?;
            bookmark.is_favorite = !bookmark.is_favorite;
            effects.push(RuntimeEffect::PersistConfig);
        }
        StartAction::ToggleCategoryCollapsed { label } => {
            if let Some(index) = state.collapsed_categories.iter().position(|l| *l == label) {
                state.collapsed_categories.remove(index);
            } else {
                state.collapsed_categories.push(label);
            }
            effects.push(RuntimeEffect::PersistConfig);
        }
        StartAction::SetGlobalBookmarkSize(size) => {
            state.global_bookmark_size = size;
            effects.push(RuntimeEffect::PersistConfig);
        }
        StartAction::SetCategoryBookmarkSize { label, size } => {
            match size {
                Some(size) => {
                    state.category_bookmark_sizes.insert(label, size);
                }
                None => {
                    state.category_bookmark_sizes.remove(&label);
                }
            }
            effects.push(RuntimeEffect::PersistConfig);
        }
        StartAction::SetUsername(username) => {
            state.username = username;
            effects.push(RuntimeEffect::PersistConfig);
        }
        StartAction::SetNotesContent(content) => {
            state.notes.content = content;
            effects.push(RuntimeEffect::PersistConfig);
        }
        StartAction::AddTodo { id, text } => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(effects);
            }
            state.todos.push(TodoItem {
                id,
                text: text.to_string(),
                completed: false,
            });
            effects.push(RuntimeEffect::PersistConfig);
        }
        StartAction::ToggleTodo { id } => {
            let todo = state
                .todos
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(ReducerError::TodoNotFound)?;
            todo.completed = !todo.completed;
            effects.push(RuntimeEffect::PersistConfig);
        }
        StartAction::RemoveTodo { id } => {
            let before_len = state.todos.len();
            state.todos.retain(|t| t.id != id);
            if state.todos.len() == before_len {
                return Err(ReducerError::TodoNotFound);
            }
            effects.push(RuntimeEffect::PersistConfig);
        }
        StartAction::ClearCompletedTodos => {
            let before_len = state.todos.len();
            state.todos.retain(|t| !t.completed);
            if state.todos.len() != before_len {
                effects.push(RuntimeEffect::PersistConfig);
            }
        }
        StartAction::SetSearchEngine(engine) => {
            state.search.engine = engine;
            effects.push(RuntimeEffect::PersistConfig);
        }
        StartAction::SetClock24h(use_24_hour) => {
            state.clock.use_24_hour = use_24_hour;
            effects.push(RuntimeEffect::PersistConfig);
        }
        StartAction::SetPrivateEnabled(enabled) => {
            state.private_config.enabled = enabled;
            if !enabled {
                interaction.private_unlocked = false;
            }
            effects.push(RuntimeEffect::PersistConfig);
        }
        StartAction::SetPrivatePassword(password) => {
            state.private_config.password_hash = match password {
                Some(password) => simple_hash(&password),
                None => String::new(),
            };
            effects.push(RuntimeEffect::PersistConfig);
        }
        StartAction::UnlockPrivate { password } => {
            let stored = &state.private_config.password_hash;
            if stored.is_empty() || simple_hash(&password) == *stored {
                interaction.private_unlocked = true;
            }
        }
        StartAction::LockPrivate => {
            interaction.private_unlocked = false;
        }
        StartAction::HydrateSnapshot(snapshot) => {
            *state = StartState::from_snapshot(snapshot);
            interaction.drag = DragPhase::Idle;
        }
    }

    Ok(effects)
}

/// Whether arming `payload` would reorder inside a private group that is still locked.
fn payload_touches_locked_private(
    state: &StartState,
    interaction: &InteractionState,
    payload: &DragPayload,
) -> bool {
    let label = match payload {
        DragPayload::Widget { .. } => return false,
        DragPayload::Bookmark { source_group, .. } => source_group.label(),
        DragPayload::Category { label } => label.as_str(),
    };
    label == PRIVATE_CATEGORY
        && !state.private_config.password_hash.is_empty()
        && !interaction.private_unlocked
}

fn widget_enabled_mut(state: &mut StartState, id: WidgetId) -> &mut bool {
    match id {
        WidgetId::Clock => &mut state.clock.enabled,
        WidgetId::Search => &mut state.search.enabled,
        WidgetId::Weather => &mut state.weather.enabled,
        WidgetId::Todo => &mut state.todo.enabled,
        WidgetId::Quote => &mut state.quote.enabled,
        WidgetId::Notes => &mut state.notes.enabled,
        WidgetId::Pomodoro => &mut state.pomodoro.enabled,
        WidgetId::Crypto => &mut state.crypto.enabled,
        WidgetId::Breathing => &mut state.breathing.enabled,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WidgetLayout;

    fn drag_widget(
        state: &mut StartState,
        interaction: &mut InteractionState,
        id: WidgetId,
        source_zone: Zone,
    ) {
        reduce_start(
            state,
            interaction,
            StartAction::ArmDrag(DragPayload::Widget { id, source_zone }),
        )
        .expect("arm");
        reduce_start(state, interaction, StartAction::BeginDrag).expect("begin");
    }

    fn bookmark(id: &str, category: &str, is_favorite: bool) -> Bookmark {
        Bookmark {
            id: id.to_string(),
            title: id.to_uppercase(),
            url: format!("https://example.com/{id}"),
            category: category.to_string(),
            is_favorite,
        }
    }

    #[test]
    fn widget_drag_lifecycle_reorders_and_persists() {
        let mut state = StartState::default();
        let mut interaction = InteractionState::default();
        state.layout = WidgetLayout {
            header: Vec::new(),
            sidebar: vec![WidgetId::Weather, WidgetId::Todo, WidgetId::Notes],
            top_left: Vec::new(),
            top_right: Vec::new(),
        };

        drag_widget(&mut state, &mut interaction, WidgetId::Weather, Zone::Sidebar);
        let effects = reduce_start(
            &mut state,
            &mut interaction,
            StartAction::DropOnWidget {
                target_zone: Zone::Sidebar,
                target: Some(WidgetId::Notes),
            },
        )
        .expect("drop");

        assert_eq!(effects, vec![RuntimeEffect::PersistConfig]);
        assert_eq!(
            state.layout.sidebar,
            vec![WidgetId::Notes, WidgetId::Todo, WidgetId::Weather]
        );
        assert_eq!(interaction.drag, DragPhase::Idle);
    }

    #[test]
    fn lock_layout_and_zen_mode_block_arming() {
        let mut state = StartState::default();
        let mut interaction = InteractionState::default();
        let payload = DragPayload::Widget {
            id: WidgetId::Clock,
            source_zone: Zone::Header,
        };

        state.lock_layout = true;
        reduce_start(&mut state, &mut interaction, StartAction::ArmDrag(payload.clone()))
            .expect("arm while locked");
        assert_eq!(interaction.drag, DragPhase::Idle);

        state.lock_layout = false;
        state.zen_mode = true;
        reduce_start(&mut state, &mut interaction, StartAction::ArmDrag(payload))
            .expect("arm while zen");
        assert_eq!(interaction.drag, DragPhase::Idle);
    }

    #[test]
    fn kind_mismatch_drop_is_silent_and_returns_to_idle() {
        let mut state = StartState::default();
        let mut interaction = InteractionState::default();
        let layout_before = state.layout.clone();
        let bookmarks_before = state.bookmarks.clone();

        drag_widget(&mut state, &mut interaction, WidgetId::Clock, Zone::Header);
        let effects = reduce_start(
            &mut state,
            &mut interaction,
            StartAction::DropOnBookmark {
                group: BookmarkGroup::Favorites,
                target_id: "1".to_string(),
            },
        )
        .expect("mismatched drop");

        assert!(effects.is_empty());
        assert_eq!(state.layout, layout_before);
        assert_eq!(state.bookmarks, bookmarks_before);
        assert_eq!(interaction.drag, DragPhase::Idle);
    }

    #[test]
    fn drop_without_active_drag_is_a_noop() {
        let mut state = StartState::default();
        let mut interaction = InteractionState::default();
        let layout_before = state.layout.clone();

        let effects = reduce_start(
            &mut state,
            &mut interaction,
            StartAction::DropOnWidget {
                target_zone: Zone::Sidebar,
                target: None,
            },
        )
        .expect("drop while idle");

        assert!(effects.is_empty());
        assert_eq!(state.layout, layout_before);
    }

    #[test]
    fn bookmark_long_press_arm_emits_haptic_pulse() {
        let mut state = StartState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce_start(
            &mut state,
            &mut interaction,
            StartAction::ArmDrag(DragPayload::Bookmark {
                id: "1".to_string(),
                source_group: BookmarkGroup::Favorites,
            }),
        )
        .expect("arm bookmark");

        assert_eq!(effects, vec![RuntimeEffect::HapticPulse(50)]);
        assert!(matches!(interaction.drag, DragPhase::Armed(_)));
    }

    #[test]
    fn bookmark_drop_reorders_within_group() {
        let mut state = StartState::default();
        let mut interaction = InteractionState::default();
        state.bookmarks = vec![
            bookmark("a", "Dev", false),
            bookmark("b", "Dev", false),
            bookmark("c", "Dev", false),
        ];
        let group = BookmarkGroup::Category("Dev".to_string());

        reduce_start(
            &mut state,
            &mut interaction,
            StartAction::ArmDrag(DragPayload::Bookmark {
                id: "a".to_string(),
                source_group: group.clone(),
            }),
        )
        .expect("arm");
        reduce_start(&mut state, &mut interaction, StartAction::BeginDrag).expect("begin");
        let effects = reduce_start(
            &mut state,
            &mut interaction,
            StartAction::DropOnBookmark {
                group,
                target_id: "c".to_string(),
            },
        )
        .expect("drop");

        assert_eq!(effects, vec![RuntimeEffect::PersistConfig]);
        let ids: Vec<&str> = state.bookmarks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn cross_group_bookmark_drop_is_rejected() {
        let mut state = StartState::default();
        let mut interaction = InteractionState::default();
        state.bookmarks = vec![bookmark("a", "Dev", false), bookmark("b", "Media", false)];

        reduce_start(
            &mut state,
            &mut interaction,
            StartAction::ArmDrag(DragPayload::Bookmark {
                id: "a".to_string(),
                source_group: BookmarkGroup::Category("Dev".to_string()),
            }),
        )
        .expect("arm");
        reduce_start(&mut state, &mut interaction, StartAction::BeginDrag).expect("begin");
        let effects = reduce_start(
            &mut state,
            &mut interaction,
            StartAction::DropOnBookmark {
                group: BookmarkGroup::Category("Media".to_string()),
                target_id: "b".to_string(),
            },
        )
        .expect("drop");

        assert!(effects.is_empty());
        let ids: Vec<&str> = state.bookmarks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(interaction.drag, DragPhase::Idle);
    }

    #[test]
    fn category_drop_seeds_order_and_moves_label() {
        let mut state = StartState::default();
        let mut interaction = InteractionState::default();
        state.bookmarks = vec![
            bookmark("w", "Work", false),
            bookmark("s", "Social", false),
        ];
        state.category_order = vec!["Work".to_string()];

        reduce_start(
            &mut state,
            &mut interaction,
            StartAction::ArmDrag(DragPayload::Category {
                label: "Social".to_string(),
            }),
        )
        .expect("arm");
        reduce_start(&mut state, &mut interaction, StartAction::BeginDrag).expect("begin");
        let effects = reduce_start(
            &mut state,
            &mut interaction,
            StartAction::DropOnCategory {
                target_label: "Work".to_string(),
            },
        )
        .expect("drop");

        assert_eq!(effects, vec![RuntimeEffect::PersistConfig]);
        assert_eq!(state.category_order, vec!["Social", "Work"]);
    }

    #[test]
    fn locked_private_group_blocks_bookmark_arming() {
        let mut state = StartState::default();
        let mut interaction = InteractionState::default();
        state.private_config.enabled = true;
        state.private_config.password_hash = simple_hash("hunter2");

        reduce_start(
            &mut state,
            &mut interaction,
            StartAction::ArmDrag(DragPayload::Bookmark {
                id: "p".to_string(),
                source_group: BookmarkGroup::Category(PRIVATE_CATEGORY.to_string()),
            }),
        )
        .expect("arm locked private");
        assert_eq!(interaction.drag, DragPhase::Idle);

        reduce_start(
            &mut state,
            &mut interaction,
            StartAction::UnlockPrivate {
                password: "hunter2".to_string(),
            },
        )
        .expect("unlock");
        assert!(interaction.private_unlocked);

        reduce_start(
            &mut state,
            &mut interaction,
            StartAction::ArmDrag(DragPayload::Bookmark {
                id: "p".to_string(),
                source_group: BookmarkGroup::Category(PRIVATE_CATEGORY.to_string()),
            }),
        )
        .expect("arm unlocked private");
        assert!(matches!(interaction.drag, DragPhase::Armed(_)));
    }

    #[test]
    fn unlock_with_wrong_password_stays_locked() {
        let mut state = StartState::default();
        let mut interaction = InteractionState::default();
        state.private_config.password_hash = simple_hash("hunter2");

        let effects = reduce_start(
            &mut state,
            &mut interaction,
            StartAction::UnlockPrivate {
                password: "hunter3".to_string(),
            },
        )
        .expect("unlock attempt");

        assert!(effects.is_empty());
        assert!(!interaction.private_unlocked);
    }

    #[test]
    fn remove_widget_disables_and_strips_from_zones() {
        let mut state = StartState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce_start(
            &mut state,
            &mut interaction,
            StartAction::RemoveWidget(WidgetId::Weather),
        )
        .expect("remove widget");

        assert_eq!(effects, vec![RuntimeEffect::PersistConfig]);
        assert!(!state.weather.enabled);
        assert!(!state.layout.contains(WidgetId::Weather));
    }

    #[test]
    fn re_enabling_a_removed_widget_lands_in_the_sidebar() {
        let mut state = StartState::default();
        let mut interaction = InteractionState::default();
        reduce_start(
            &mut state,
            &mut interaction,
            StartAction::RemoveWidget(WidgetId::Crypto),
        )
        .expect("remove");

        reduce_start(
            &mut state,
            &mut interaction,
            StartAction::SetWidgetEnabled(WidgetId::Crypto, true),
        )
        .expect("enable");

        assert!(state.crypto.enabled);
        assert_eq!(state.layout.sidebar.last(), Some(&WidgetId::Crypto));
    }

    #[test]
    fn disabling_a_widget_keeps_its_layout_slot() {
        let mut state = StartState::default();
        let mut interaction = InteractionState::default();

        reduce_start(
            &mut state,
            &mut interaction,
            StartAction::SetWidgetEnabled(WidgetId::Todo, false),
        )
        .expect("disable");

        assert!(!state.todo.enabled);
        assert!(state.layout.contains(WidgetId::Todo));
    }

    #[test]
    fn bookmark_crud_round_trip() {
        let mut state = StartState::default();
        let mut interaction = InteractionState::default();
        state.bookmarks.clear();

        reduce_start(
            &mut state,
            &mut interaction,
            StartAction::AddBookmark(bookmark("x", "Dev", false)),
        )
        .expect("add");
        assert_eq!(state.bookmarks.len(), 1);

        let mut updated = bookmark("x", "Media", false);
        updated.title = "Example".to_string();
        reduce_start(
            &mut state,
            &mut interaction,
            StartAction::UpdateBookmark(updated.clone()),
        )
        .expect("update");
        assert_eq!(state.bookmarks[0], updated);

        reduce_start(
            &mut state,
            &mut interaction,
            StartAction::ToggleFavorite { id: "x".to_string() },
        )
        .expect("favorite");
        assert!(state.bookmarks[0].is_favorite);

        reduce_start(
            &mut state,
            &mut interaction,
            StartAction::RemoveBookmark { id: "x".to_string() },
        )
        .expect("remove");
        assert!(state.bookmarks.is_empty());

        let missing = reduce_start(
            &mut state,
            &mut interaction,
            StartAction::RemoveBookmark { id: "x".to_string() },
        );
        assert_eq!(missing, Err(ReducerError::BookmarkNotFound));
    }

    #[test]
    fn todo_flow_skips_blank_text_and_clears_completed() {
        let mut state = StartState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce_start(
            &mut state,
            &mut interaction,
            StartAction::AddTodo {
                id: "t0".to_string(),
                text: "   ".to_string(),
            },
        )
        .expect("blank todo");
        assert!(effects.is_empty());
        assert!(state.todos.is_empty());

        reduce_start(
            &mut state,
            &mut interaction,
            StartAction::AddTodo {
                id: "t1".to_string(),
                text: " water plants ".to_string(),
            },
        )
        .expect("add todo");
        assert_eq!(state.todos[0].text, "water plants");

        reduce_start(
            &mut state,
            &mut interaction,
            StartAction::ToggleTodo { id: "t1".to_string() },
        )
        .expect("toggle");
        assert!(state.todos[0].completed);

        let effects = reduce_start(&mut state, &mut interaction, StartAction::ClearCompletedTodos)
            .expect("clear");
        assert_eq!(effects, vec![RuntimeEffect::PersistConfig]);
        assert!(state.todos.is_empty());

        let effects = reduce_start(&mut state, &mut interaction, StartAction::ClearCompletedTodos)
            .expect("clear again");
        assert!(effects.is_empty());

        let missing = reduce_start(
            &mut state,
            &mut interaction,
            StartAction::ToggleTodo { id: "t1".to_string() },
        );
        assert_eq!(missing, Err(ReducerError::TodoNotFound));
    }

    #[test]
    fn toggle_category_collapsed_flips_membership() {
        let mut state = StartState::default();
        let mut interaction = InteractionState::default();

        reduce_start(
            &mut state,
            &mut interaction,
            StartAction::ToggleCategoryCollapsed {
                label: "Work".to_string(),
            },
        )
        .expect("collapse");
        assert_eq!(state.collapsed_categories, vec!["Work".to_string()]);

        reduce_start(
            &mut state,
            &mut interaction,
            StartAction::ToggleCategoryCollapsed {
                label: "Work".to_string(),
            },
        )
        .expect("expand");
        assert!(state.collapsed_categories.is_empty());
    }

    #[test]
    fn category_size_override_sets_and_clears() {
        let mut state = StartState::default();
        let mut interaction = InteractionState::default();

        reduce_start(
            &mut state,
            &mut interaction,
            StartAction::SetCategoryBookmarkSize {
                label: "Work".to_string(),
                size: Some(BookmarkSize::Icon),
            },
        )
        .expect("override");
        assert_eq!(
            state.category_bookmark_sizes.get("Work"),
            Some(&BookmarkSize::Icon)
        );

        reduce_start(
            &mut state,
            &mut interaction,
            StartAction::SetCategoryBookmarkSize {
                label: "Work".to_string(),
                size: None,
            },
        )
        .expect("clear");
        assert!(state.category_bookmark_sizes.is_empty());
    }

    #[test]
    fn disabling_private_relocks_the_session() {
        let mut state = StartState::default();
        let mut interaction = InteractionState::default();
        interaction.private_unlocked = true;

        reduce_start(
            &mut state,
            &mut interaction,
            StartAction::SetPrivateEnabled(false),
        )
        .expect("disable private");

        assert!(!state.private_config.enabled);
        assert!(!interaction.private_unlocked);
    }

    #[test]
    fn hydrate_replaces_state_without_persisting() {
        let mut state = StartState::default();
        let mut interaction = InteractionState::default();
        let mut incoming = StartState::default();
        incoming.username = "Ada".to_string();
        incoming.zen_mode = true;

        let effects = reduce_start(
            &mut state,
            &mut interaction,
            StartAction::HydrateSnapshot(incoming.snapshot()),
        )
        .expect("hydrate");

        assert!(effects.is_empty());
        assert_eq!(state.username, "Ada");
        assert!(state.zen_mode);
    }
}
