//! Bindings to the subset of the Leaflet 1.9 API the map uses.
//!
//! Leaflet is loaded as a global `L` by `index.html`; nothing here bundles it.

use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

use circuit_map_shared::LatLng;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = Map)]
    #[derive(Debug, Clone)]
    pub type Map;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    pub fn create_map(container: &web_sys::HtmlElement, options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = flyTo)]
    pub fn fly_to(this: &Map, latlng: &JsValue, zoom: f64, options: &JsValue);

    #[wasm_bindgen(method, js_name = whenReady)]
    pub fn when_ready(this: &Map, callback: &js_sys::Function);

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &Map);

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = TileLayer)]
    #[derive(Debug, Clone)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map);

    #[wasm_bindgen(method)]
    pub fn on(this: &TileLayer, event: &str, callback: &js_sys::Function);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = DivIcon)]
    #[derive(Debug, Clone)]
    pub type DivIcon;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    pub fn div_icon(options: &JsValue) -> DivIcon;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = Marker)]
    #[derive(Debug, Clone)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(latlng: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &Map);

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, content: &str, options: &JsValue);

    #[wasm_bindgen(method, js_name = openPopup)]
    pub fn open_popup(this: &Marker);

    #[wasm_bindgen(method)]
    pub fn on(this: &Marker, event: &str, callback: &js_sys::Function);
}

/// True when the Leaflet global has been loaded.
pub fn is_available() -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("L"))
        .map(|l| l.is_object())
        .unwrap_or(false)
}

/// Human-readable message for an exception thrown by Leaflet.
pub fn describe_js_error(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub world_copy_jump: bool,
    pub scroll_wheel_zoom: bool,
}

#[derive(Serialize)]
pub struct TileLayerOptions {
    pub attribution: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivIconOptions {
    pub html: String,
    pub class_name: &'static str,
    pub icon_size: [f64; 2],
    pub icon_anchor: [f64; 2],
    pub popup_anchor: [f64; 2],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerOptions<'a> {
    pub title: &'a str,
    pub alt: &'a str,
    pub rise_on_hover: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupOptions {
    pub max_width: f64,
    pub class_name: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlyToOptions {
    pub duration: f64,
    pub ease_linearity: f64,
}

/// Convert an options struct into the plain JS object Leaflet expects.
pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(value).map_err(|e| e.to_string())
}
