use leptos::prelude::*;
use wasm_bindgen::JsCast;

use circuit_map_shared::{ListEntry, SelectionSource, TRACKS, filtered_entries};

use crate::app::{Coordinator, SearchQuery, Selected};

/// Floating panel with the ranked circuit list.
#[component]
pub fn Sidebar() -> impl IntoView {
    let Selected(selected) = expect_context();
    let scroll_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the active row visible, e.g. after a marker click. Only the panel's
    // own scroll position moves, never the page.
    Effect::new(move || {
        let Some(id) = selected.get() else {
            return;
        };
        let Some(scroll_el) = scroll_ref.get() else {
            return;
        };
        let Ok(Some(item_el)) = scroll_el.query_selector(&format!("[data-track-id='{id}']"))
        else {
            return;
        };
        let Ok(item_el) = item_el.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };

        let scroll_rect = scroll_el.get_bounding_client_rect();
        let item_rect = item_el.get_bounding_client_rect();
        let current_top = scroll_el.scroll_top();
        if item_rect.top() < scroll_rect.top() {
            let delta = (item_rect.top() - scroll_rect.top()).floor() as i32;
            scroll_el.set_scroll_top(current_top + delta);
        } else if item_rect.bottom() > scroll_rect.bottom() {
            let delta = (item_rect.bottom() - scroll_rect.bottom()).ceil() as i32;
            scroll_el.set_scroll_top(current_top + delta);
        }
    });

    view! {
        <aside class="sidebar">
            <SidebarHeader />
            <SearchBar />
            <div node_ref=scroll_ref class="sidebar__scroll">
                <section class="sidebar__section">
                    <header class="sidebar__intro">
                        <h1>"Top Formula 1 Circuits"</h1>
                        <p>"A personal top list of tracks I love watching, each one ready to explore on the map."</p>
                    </header>
                    <TrackList />
                </section>
            </div>
        </aside>
    }
}

#[component]
fn SidebarHeader() -> impl IntoView {
    view! {
        <div class="sidebar__header">
            <span class="sidebar__logo">"F1"</span>
            <div>
                <p class="sidebar__eyebrow">"Top Circuits"</p>
                <p class="sidebar__title">"Favourite Tracks"</p>
            </div>
        </div>
    }
}

#[component]
fn SearchBar() -> impl IntoView {
    let SearchQuery(search_query) = expect_context();

    let on_input = move |e: leptos::ev::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        search_query.set(input.value());
    };

    view! {
        <label class="search" for="search">
            <svg class="search__icon" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
                <path d="M15.5 15.5L20 20" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" />
                <circle cx="11" cy="11" r="6" stroke="currentColor" stroke-width="1.6" />
            </svg>
            <input
                id="search"
                name="search"
                type="search"
                placeholder="Search favourite circuits"
                autocomplete="off"
                prop:value=move || search_query.get()
                on:input=on_input
            />
        </label>
    }
}

#[component]
fn TrackList() -> impl IntoView {
    let coordinator: Coordinator = expect_context();
    let SearchQuery(search_query) = expect_context();

    let entries = Memo::new(move |_| search_query.with(|q| filtered_entries(TRACKS, q)));
    let shown = Memo::new(move |_| entries.with(Vec::len));

    view! {
        <p class="track-list__count">
            {move || format!("{} of {} circuits", shown.get(), TRACKS.len())}
        </p>
        <div class="track-list" role="list">
            <For
                each=move || entries.get()
                key=|entry| entry.id
                children=move |entry| view! { <TrackCard entry=entry coordinator=coordinator /> }
            />
            {move || {
                (shown.get() == 0)
                    .then(|| view! { <p class="track-list__empty">"No circuits match your search."</p> })
            }}
        </div>
    }
}

#[component]
fn TrackCard(entry: ListEntry, coordinator: Coordinator) -> impl IntoView {
    let ListEntry {
        rank,
        id,
        title,
        location,
        description,
        image,
        accent,
    } = entry;
    let accent_style = format!("--accent: {};", accent.unwrap_or("#0f172a"));
    let active = move || coordinator.is_active(id);

    view! {
        <button
            type="button"
            class="track-card"
            class:active=active
            role="listitem"
            aria-pressed=move || if active() { "true" } else { "false" }
            data-track-id=id
            style=accent_style
            on:click=move |_| {
                coordinator.select(id, SelectionSource::List);
            }
        >
            <span class="track-card__badge">{rank}</span>
            <span class="track-card__body">
                {image
                    .map(|src| {
                        view! {
                            <img class="track-card__image" src=src alt={format!("{title} overview")} loading="lazy" />
                        }
                    })}
                <span class="track-card__title">{title}</span>
                <span class="track-card__meta">{location}</span>
                <span class="track-card__description">{description}</span>
            </span>
        </button>
    }
}
