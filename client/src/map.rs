use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use circuit_map_shared::{FlyTo, LatLng, SelectionChange, SelectionSource, TRACKS, rank_label};

use crate::app::{Coordinator, MapReady};
use crate::error::{self, StartupError};
use crate::leaflet::{
    self, DivIconOptions, FlyToOptions, MapOptions, MarkerOptions, PopupOptions, TileLayerOptions,
};
use crate::markers::{ICON_SIZE, marker_icon_html, popup_html};

/// Zoomed out far enough to show every marker at once.
pub const DEFAULT_CENTER: LatLng = LatLng::new(25.0, 15.0);
pub const DEFAULT_ZOOM: f64 = 2.0;
pub const MIN_ZOOM: f64 = 2.0;
pub const MAX_ZOOM: f64 = 19.0;

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;
const POPUP_MAX_WIDTH: f64 = 260.0;
const RESIZE_DEBOUNCE_MS: u32 = 120;

/// Live Leaflet map plus everything that must outlive JS callbacks into Rust.
struct MapBinding {
    map: leaflet::Map,
    markers: HashMap<&'static str, leaflet::Marker>,
    callbacks: Vec<Closure<dyn FnMut()>>,
}

impl MapBinding {
    fn fly_to(&self, fly: &FlyTo) -> Result<(), String> {
        let latlng = leaflet::to_js(&fly.target)?;
        let options = leaflet::to_js(&FlyToOptions {
            duration: fly.duration_secs,
            ease_linearity: fly.ease_linearity,
        })?;
        self.map.fly_to(&latlng, fly.zoom, &options);
        Ok(())
    }

    fn open_popup(&self, id: &str) -> bool {
        match self.markers.get(id) {
            Some(marker) => {
                marker.open_popup();
                true
            }
            None => false,
        }
    }

    fn apply(&self, change: &SelectionChange) {
        if let Some(fly) = &change.fly_to
            && let Err(e) = self.fly_to(fly)
        {
            web_sys::console::warn_1(&format!("flyTo failed: {e}").into());
        }
        if change.open_popup && !self.open_popup(change.current) {
            web_sys::console::warn_1(&format!("No marker for track {}", change.current).into());
        }
    }
}

impl Drop for MapBinding {
    fn drop(&mut self) {
        // Detaches Leaflet's handlers before the closures they point at are freed.
        self.map.remove();
    }
}

struct ResizeBinding {
    window: web_sys::Window,
    _handler: Closure<dyn Fn()>,
}

thread_local! {
    static MAP_BINDING: RefCell<Option<MapBinding>> = const { RefCell::new(None) };
    static RESIZE_BINDING: RefCell<Option<ResizeBinding>> = const { RefCell::new(None) };
}

/// Push a selection change to the map. No-op until the map exists.
pub(crate) fn apply_selection(change: &SelectionChange) {
    MAP_BINDING.with(|slot| {
        if let Some(binding) = slot.borrow().as_ref() {
            binding.apply(change);
        }
    });
}

fn invalidate_size() {
    MAP_BINDING.with(|slot| {
        if let Some(binding) = slot.borrow().as_ref() {
            binding.map.invalidate_size();
        }
    });
}

fn build_map(
    container: &web_sys::HtmlElement,
    coordinator: Coordinator,
    ready: RwSignal<bool>,
) -> Result<MapBinding, StartupError> {
    if !leaflet::is_available() {
        return Err(StartupError::LeafletMissing);
    }

    let options = leaflet::to_js(&MapOptions {
        center: DEFAULT_CENTER,
        zoom: DEFAULT_ZOOM,
        min_zoom: MIN_ZOOM,
        max_zoom: MAX_ZOOM,
        world_copy_jump: true,
        scroll_wheel_zoom: false,
    })
    .map_err(StartupError::Leaflet)?;
    let map = leaflet::create_map(container, &options)
        .map_err(|e| StartupError::Leaflet(leaflet::describe_js_error(&e)))?;
    // Owned from here on: an early return drops the binding, which removes the
    // map before any registered closure is freed.
    let mut binding = MapBinding {
        map,
        markers: HashMap::with_capacity(TRACKS.len()),
        callbacks: Vec::with_capacity(TRACKS.len() + 2),
    };

    let tile_options = leaflet::to_js(&TileLayerOptions {
        attribution: TILE_ATTRIBUTION,
    })
    .map_err(StartupError::Leaflet)?;
    let tiles = leaflet::tile_layer(TILE_URL, &tile_options);
    tiles.add_to(&binding.map);
    let on_tiles_loaded = Closure::<dyn FnMut()>::new(move || ready.set(true));
    tiles.on("load", on_tiles_loaded.as_ref().unchecked_ref());
    binding.callbacks.push(on_tiles_loaded);

    let popup_options = leaflet::to_js(&PopupOptions {
        max_width: POPUP_MAX_WIDTH,
        class_name: "track-popup",
    })
    .map_err(StartupError::Leaflet)?;

    for (index, track) in TRACKS.iter().enumerate() {
        let rank = rank_label(index);
        let icon = leaflet::div_icon(
            &leaflet::to_js(&DivIconOptions {
                html: marker_icon_html(&rank, track.accent),
                class_name: "marker-icon",
                icon_size: [ICON_SIZE, ICON_SIZE],
                icon_anchor: [ICON_SIZE / 2.0, ICON_SIZE / 2.0],
                popup_anchor: [0.0, -ICON_SIZE / 2.0],
            })
            .map_err(StartupError::Leaflet)?,
        );
        let alt = format!("{rank} {}", track.title);
        let marker_options = leaflet::to_js(&MarkerOptions {
            title: track.title,
            alt: &alt,
            rise_on_hover: true,
        })
        .map_err(StartupError::Leaflet)?;
        js_sys::Reflect::set(&marker_options, &"icon".into(), &icon)
            .map_err(|e| StartupError::Leaflet(leaflet::describe_js_error(&e)))?;
        let latlng = leaflet::to_js(&track.coords).map_err(StartupError::Leaflet)?;

        let marker = leaflet::marker(&latlng, &marker_options);
        marker.add_to(&binding.map);
        marker.bind_popup(&popup_html(track, &rank), &popup_options);

        let id = track.id;
        let on_click = Closure::<dyn FnMut()>::new(move || {
            coordinator.select(id, SelectionSource::Marker);
        });
        marker.on("click", on_click.as_ref().unchecked_ref());
        binding.callbacks.push(on_click);

        binding.markers.insert(track.id, marker);
    }

    // Fires synchronously when the view is already set, so it must not touch MAP_BINDING.
    let ready_map = binding.map.clone();
    let on_ready = Closure::<dyn FnMut()>::new(move || {
        ready.set(true);
        ready_map.invalidate_size();
    });
    binding.map.when_ready(on_ready.as_ref().unchecked_ref());
    binding.callbacks.push(on_ready);

    Ok(binding)
}

fn bind_resize() {
    let Some(window) = web_sys::window() else {
        return;
    };
    unbind_resize();

    // Dropping a Timeout cancels it, so replacing the pending one debounces.
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let handler = Closure::<dyn Fn()>::new(move || {
        *pending.borrow_mut() = Some(Timeout::new(RESIZE_DEBOUNCE_MS, invalidate_size));
    });
    if window
        .add_event_listener_with_callback("resize", handler.as_ref().unchecked_ref())
        .is_err()
    {
        web_sys::console::warn_1(&"Failed to attach resize listener".into());
        return;
    }
    RESIZE_BINDING.with(|slot| {
        *slot.borrow_mut() = Some(ResizeBinding {
            window,
            _handler: handler,
        });
    });
}

fn unbind_resize() {
    RESIZE_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            let _ = old
                .window
                .remove_event_listener_with_callback("resize", old._handler.as_ref().unchecked_ref());
        }
    });
}

fn teardown() {
    unbind_resize();
    let old = MAP_BINDING.with(|slot| slot.borrow_mut().take());
    drop(old);
}

/// Full-bleed Leaflet map with one marker per track.
#[component]
pub fn TrackMap() -> impl IntoView {
    let coordinator: Coordinator = expect_context();
    let MapReady(ready) = expect_context();
    let container_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let Some(container) = container_ref.get() else {
            return;
        };
        teardown();
        match build_map(&container, coordinator, ready) {
            Ok(binding) => {
                MAP_BINDING.with(|slot| {
                    *slot.borrow_mut() = Some(binding);
                });
                bind_resize();
                web_sys::console::info_1(
                    &format!("Map ready with {} circuits", TRACKS.len()).into(),
                );
            }
            Err(err) => error::report(&err),
        }
    });

    on_cleanup(teardown);

    view! {
        <div node_ref=container_ref id="map" class="map" aria-label="Map of favourite circuits" />
    }
}
