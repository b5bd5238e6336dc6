use leptos::*;
use leptos_meta::*;
use startpage_runtime::{StartProvider, StartShell};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="New Tab" />
        <Meta name="description" content="A calm personal start page with widgets and bookmarks." />

        <StartPage />
    }
}

#[component]
pub fn StartPage() -> impl IntoView {
    view! {
        <StartProvider>
            <StartShell />
        </StartProvider>
    }
}
