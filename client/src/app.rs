use leptos::prelude::*;

use circuit_map_shared::{Selection, SelectionChange, SelectionSource, TRACKS, Track};

use crate::map::{self, TrackMap};
use crate::sidebar::Sidebar;

/// Id of the highlighted track, mirrored from [`Coordinator`] for the views.
#[derive(Clone, Copy)]
pub(crate) struct Selected(pub RwSignal<Option<&'static str>>);
/// Set once Leaflet reports the map (or its first tiles) ready.
#[derive(Clone, Copy)]
pub(crate) struct MapReady(pub RwSignal<bool>);
#[derive(Clone, Copy)]
pub(crate) struct SearchQuery(pub RwSignal<String>);

/// Owns the selection and fans each accepted change out to the sidebar
/// highlight, the viewport and the marker popups.
#[derive(Clone, Copy)]
pub(crate) struct Coordinator {
    state: StoredValue<Selection>,
    selected: RwSignal<Option<&'static str>>,
}

impl Coordinator {
    pub(crate) fn new(tracks: &'static [Track]) -> Self {
        let selection = Selection::initial(tracks);
        Self {
            state: StoredValue::new(selection),
            selected: RwSignal::new(selection.active()),
        }
    }

    pub(crate) fn selected(&self) -> RwSignal<Option<&'static str>> {
        self.selected
    }

    /// Reactive: re-runs the caller when the selection moves.
    pub(crate) fn is_active(&self, id: &str) -> bool {
        leptos::prelude::Track::track(&self.selected);
        self.state.with_value(|selection| selection.is_active(id))
    }

    /// Returns the applied change, or `None` when `id` is not a known track.
    pub(crate) fn select(&self, id: &str, source: SelectionSource) -> Option<SelectionChange> {
        let mut selection = self.state.get_value();
        let change = match selection.select(id, source) {
            Ok(change) => change,
            Err(e) => {
                web_sys::console::warn_1(&e.to_string().into());
                return None;
            }
        };
        self.state.set_value(selection);
        if change.changed() {
            self.selected.set(Some(change.current));
        }
        map::apply_selection(&change);
        Some(change)
    }
}

/// Root application component. Provides selection and map state via context.
#[component]
pub fn App() -> impl IntoView {
    let coordinator = Coordinator::new(TRACKS);
    let map_ready: RwSignal<bool> = RwSignal::new(false);
    let search_query: RwSignal<String> = RwSignal::new(String::new());

    provide_context(coordinator);
    provide_context(Selected(coordinator.selected()));
    provide_context(MapReady(map_ready));
    provide_context(SearchQuery(search_query));

    view! {
        <main class="app">
            <div class="map-layer">
                <TrackMap />
                <div class="map-loading" class:is-hidden=move || map_ready.get() aria-live="polite">
                    <span class="map-loading__spinner" aria-hidden="true" />
                    <span>"Loading map…"</span>
                </div>
            </div>
            <Sidebar />
        </main>
    }
}
