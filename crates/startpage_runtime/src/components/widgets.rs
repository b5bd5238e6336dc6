use super::*;

use crate::presets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    hours: u32,
    minutes: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            Self {
                hours: date.get_hours(),
                minutes: date.get_minutes(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                hours: 0,
                minutes: 0,
            }
        }
    }
}

fn format_clock_time(snapshot: ClockSnapshot, use_24_hour: bool) -> String {
    if use_24_hour {
        format!("{:02}:{:02}", snapshot.hours, snapshot.minutes)
    } else {
        let meridiem = if snapshot.hours < 12 { "AM" } else { "PM" };
        let hours = match snapshot.hours % 12 {
            0 => 12,
            hours => hours,
        };
        format!("{}:{:02} {}", hours, snapshot.minutes, meridiem)
    }
}

fn greeting_for_hour(hours: u32) -> &'static str {
    match hours {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

/// Day counter driving the daily quote pick. Stable within a calendar day.
fn quote_day_index() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        date.get_month() * 31 + date.get_date()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        0
    }
}

fn open_search_url(engine_url: &str, query: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let encoded = String::from(js_sys::encode_uri_component(query));
        let Some(window) = web_sys::window() else {
            return;
        };
        if window
            .location()
            .set_href(&format!("{engine_url}{encoded}"))
            .is_err()
        {
            logging::warn!("search navigation failed");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (engine_url, query);
    }
}

#[component]
pub(super) fn ClockWidget() -> impl IntoView {
    let runtime = use_start_runtime();
    let state = runtime.state;
    let now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) =
        set_interval_with_handle(move || now.set(ClockSnapshot::now()), Duration::from_secs(1))
    {
        on_cleanup(move || interval.clear());
    }

    view! {
        <div class="clock-widget" data-ui-kind="clock">
            <span class="clock-time">
                {move || format_clock_time(now.get(), state.get().clock.use_24_hour)}
            </span>
            <Show when=move || state.get().clock.show_greeting fallback=|| ()>
                <span class="clock-greeting">
                    {move || {
                        format!("{}, {}", greeting_for_hour(now.get().hours), state.get().username)
                    }}
                </span>
            </Show>
        </div>
    }
}

#[component]
pub(super) fn SearchWidget() -> impl IntoView {
    let runtime = use_start_runtime();
    let state = runtime.state;
    let query = create_rw_signal(String::new());

    let submit_search = move || {
        let raw = query.get_untracked();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }
        let engine = state.get_untracked().search.engine;
        open_search_url(&engine.url, trimmed);
        query.set(String::new());
    };

    view! {
        <div class="search-widget" data-ui-kind="search" role="search">
            <select
                class="search-engine-select"
                aria-label="Search engine"
                prop:value=move || state.get().search.engine.name
                on:change=move |ev| {
                    let name = event_target_value(&ev);
                    if let Some(engine) = presets::search_engines()
                        .into_iter()
                        .find(|engine| engine.name == name)
                    {
                        runtime.dispatch_action(StartAction::SetSearchEngine(engine));
                    }
                }
            >
                <For
                    each=|| presets::search_engines()
                    key=|engine| engine.name.clone()
                    let:engine
                >
                    <option value=engine.name.clone()>{engine.name.clone()}</option>
                </For>
            </select>
            <input
                type="text"
                class="search-input"
                placeholder="Search the web"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        submit_search();
                    }
                }
            />
            <button class="search-submit" aria-label="Search" on:click=move |_| submit_search()>
                "Go"
            </button>
        </div>
    }
}

#[component]
pub(super) fn TodoWidget() -> impl IntoView {
    let runtime = use_start_runtime();
    let state = runtime.state;
    let draft = create_rw_signal(String::new());

    let add_todo = move || {
        let text = draft.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        let id = format!("todo-{}", platform_storage::next_monotonic_timestamp_ms());
        runtime.dispatch_action(StartAction::AddTodo { id, text });
        draft.set(String::new());
    };

    view! {
        <div class="todo-widget" data-ui-kind="todo">
            <div class="todo-compose">
                <input
                    type="text"
                    placeholder="Add a task"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            add_todo();
                        }
                    }
                />
                <button aria-label="Add task" on:click=move |_| add_todo()>"Add"</button>
            </div>
            <ul class="todo-list">
                <For
                    each=move || state.get().todos
                    key=|todo| (todo.id.clone(), todo.completed)
                    let:todo
                >
                    {
                        let toggle_id = todo.id.clone();
                        let remove_id = todo.id.clone();
                        view! {
                            <li class="todo-item" data-completed=todo.completed.to_string()>
                                <label>
                                    <input
                                        type="checkbox"
                                        checked=todo.completed
                                        on:change=move |_| {
                                            runtime
                                                .dispatch_action(StartAction::ToggleTodo {
                                                    id: toggle_id.clone(),
                                                });
                                        }
                                    />
                                    <span class="todo-text">{todo.text.clone()}</span>
                                </label>
                                <button
                                    class="todo-remove"
                                    aria-label="Remove task"
                                    on:click=move |_| {
                                        runtime
                                            .dispatch_action(StartAction::RemoveTodo {
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
            <Show
                when=move || state.get().todos.iter().any(|todo| todo.completed)
                fallback=|| ()
            >
                <button
                    class="todo-clear"
                    on:click=move |_| runtime.dispatch_action(StartAction::ClearCompletedTodos)
                >
                    "Clear completed"
                </button>
            </Show>
        </div>
    }
}

#[component]
pub(super) fn NotesWidget() -> impl IntoView {
    let runtime = use_start_runtime();
    let state = runtime.state;

    view! {
        <div class="notes-widget" data-ui-kind="notes">
            <textarea
                placeholder="Write anything"
                prop:value=move || state.get().notes.content
                on:input=move |ev| {
                    runtime.dispatch_action(StartAction::SetNotesContent(event_target_value(&ev)));
                }
            ></textarea>
        </div>
    }
}

#[component]
pub(super) fn QuoteWidget() -> impl IntoView {
    let quote = presets::quote_for_day(quote_day_index());

    view! {
        <figure class="quote-widget" data-ui-kind="quote">
            <blockquote>{format!("\u{201c}{}\u{201d}", quote.text)}</blockquote>
            <figcaption>{quote.author}</figcaption>
        </figure>
    }
}

#[component]
pub(super) fn WeatherWidget() -> impl IntoView {
    let runtime = use_start_runtime();
    let state = runtime.state;

    let unit_symbol = Signal::derive(move || {
        if state.get().weather.unit == "fahrenheit" {
            "\u{b0}F"
        } else {
            "\u{b0}C"
        }
    });

    view! {
        <div class="weather-widget" data-ui-kind="weather">
            <span class="weather-city">{move || state.get().weather.city}</span>
            <span class="weather-reading">{move || format!("--{}", unit_symbol.get())}</span>
        </div>
    }
}

#[component]
pub(super) fn CryptoWidget() -> impl IntoView {
    let runtime = use_start_runtime();
    let state = runtime.state;

    let coins = Signal::derive(move || {
        state
            .get()
            .crypto
            .coins
            .split(',')
            .map(|coin| coin.trim().to_string())
            .filter(|coin| !coin.is_empty())
            .collect::<Vec<_>>()
    });

    view! {
        <ul class="crypto-widget" data-ui-kind="crypto">
            <For each=move || coins.get() key=|coin| coin.clone() let:coin>
                <li class="crypto-coin">
                    <span class="crypto-coin-name">{coin}</span>
                    <span class="crypto-coin-price">"--"</span>
                </li>
            </For>
        </ul>
    }
}

#[component]
pub(super) fn PomodoroWidget() -> impl IntoView {
    let runtime = use_start_runtime();
    let state = runtime.state;

    view! {
        <div class="pomodoro-widget" data-ui-kind="pomodoro">
            <span class="pomodoro-display">
                {move || format!("{:02}:00", state.get().pomodoro.work_duration)}
            </span>
            <span class="pomodoro-cycle">
                {move || {
                    let pomodoro = state.get().pomodoro;
                    format!("{} min focus / {} min break", pomodoro.work_duration, pomodoro.break_duration)
                }}
            </span>
        </div>
    }
}

#[component]
pub(super) fn BreathingWidget() -> impl IntoView {
    view! {
        <div class="breathing-widget" data-ui-kind="breathing">
            <div class="breathing-circle" aria-hidden="true"></div>
            <span class="breathing-prompt">"Breathe in. Breathe out."</span>
        </div>
    }
}
