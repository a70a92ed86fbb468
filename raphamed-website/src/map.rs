/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Bridge to the externally loaded maps library.
//!
//! The library calls the global `initMap` once its script has loaded. A
//! missing library or host element is logged and the widget is skipped.

use js_sys::{Array, Function, Object, Reflect};
use raphamed_interactions::map::{LatLng, MapConfig, MAP_ELEMENT_ID};
use raphamed_interactions::MapError;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::constants::{maps_script_src, GOOGLE_MAPS_API_KEY};

const MAPS_SCRIPT_ID: &str = "maps-script";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapStyle {
    feature_type: &'static str,
    element_type: &'static str,
    stylers: Vec<serde_json::Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    center: LatLng,
    zoom: u8,
    disable_default_ui: bool,
    zoom_control: bool,
    map_type_control: bool,
    scale_control: bool,
    street_view_control: bool,
    rotate_control: bool,
    fullscreen_control: bool,
    styles: Vec<MapStyle>,
}

impl MapOptions {
    fn new(config: &MapConfig) -> Self {
        let style = |feature_type, element_type, styler: serde_json::Value| MapStyle {
            feature_type,
            element_type,
            stylers: vec![styler],
        };
        Self {
            center: config.center,
            zoom: config.zoom,
            disable_default_ui: false,
            zoom_control: true,
            map_type_control: false,
            scale_control: true,
            street_view_control: false,
            rotate_control: false,
            fullscreen_control: true,
            styles: vec![
                style("all", "geometry", serde_json::json!({ "color": "#f5f5f5" })),
                style("water", "geometry", serde_json::json!({ "color": "#c9e6f5" })),
                style("poi", "labels", serde_json::json!({ "visibility": "off" })),
                style("road", "geometry", serde_json::json!({ "color": "#ffffff" })),
            ],
        }
    }
}

/// Entry point for the maps library's `callback=initMap`.
#[wasm_bindgen(js_name = initMap)]
pub fn init_map() {
    match mount_map() {
        Ok(()) => log::info!("map initialized"),
        Err(MapError::HostMissing(id)) => log::info!("no map element `{id}`, skipping"),
        Err(e) => log::warn!("map skipped: {e}"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapsScript {
    /// No API key was configured.
    Disabled,
    /// The script was appended; it will call `initMap` when loaded.
    Inserted,
    /// An earlier mount already loaded it.
    AlreadyPresent,
}

/// Appends the maps script unless it is already on the page or no key is
/// configured.
pub fn load_maps_script() -> MapsScript {
    let Some(key) = GOOGLE_MAPS_API_KEY.filter(|k| !k.trim().is_empty()) else {
        log::info!("GOOGLE_MAPS_API_KEY not set, map disabled");
        return MapsScript::Disabled;
    };
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return MapsScript::Disabled;
    };
    if document.get_element_by_id(MAPS_SCRIPT_ID).is_some() {
        return MapsScript::AlreadyPresent;
    }
    let inserted = document.create_element("script").and_then(|script| {
        script.set_id(MAPS_SCRIPT_ID);
        script.set_attribute("src", &maps_script_src(key))?;
        script.set_attribute("async", "")?;
        script.set_attribute("defer", "")?;
        match document.head() {
            Some(head) => head.append_child(&script).map(|_| ()),
            None => Err(JsValue::from_str("document has no <head>")),
        }
    });
    match inserted {
        Ok(()) => MapsScript::Inserted,
        Err(e) => {
            log::warn!("could not add maps script: {e:?}");
            MapsScript::Disabled
        }
    }
}

/// Brings up the map for a freshly rendered host element.
pub fn mount_when_ready() {
    if load_maps_script() == MapsScript::AlreadyPresent {
        init_map();
    }
}

/// Reads the host element's `data-*` attributes into a [`MapConfig`].
pub fn read_config(host: &Element) -> MapConfig {
    MapConfig::from_attributes(&|key: &str| host.get_attribute(&format!("data-{key}")))
}

fn mount_map() -> Result<(), MapError> {
    let window = web_sys::window().ok_or(MapError::LibraryMissing)?;
    let document = window.document().ok_or(MapError::LibraryMissing)?;
    let host = document
        .get_element_by_id(MAP_ELEMENT_ID)
        .ok_or_else(|| MapError::HostMissing(MAP_ELEMENT_ID.to_string()))?;
    let maps = lookup(&window, &["google", "maps"]).ok_or(MapError::LibraryMissing)?;
    let config = read_config(&host);

    let options = serde_wasm_bindgen::to_value(&MapOptions::new(&config))
        .map_err(|_| MapError::Construct("Map"))?;
    let map = construct(&maps, "Map", &[host.into(), options])?;

    let marker_options = Object::new();
    let position =
        serde_wasm_bindgen::to_value(&config.center).map_err(|_| MapError::Construct("Marker"))?;
    set(&marker_options, "position", &position);
    set(&marker_options, "map", &map);
    set(&marker_options, "title", &JsValue::from_str(&config.title));
    if let Some(drop) = lookup(&maps, &["Animation", "DROP"]) {
        set(&marker_options, "animation", &drop);
    }
    let marker = construct(&maps, "Marker", &[marker_options.into()])?;

    let info_options = Object::new();
    set(
        &info_options,
        "content",
        &JsValue::from_str(&config.info_window_html()),
    );
    let info_window = construct(&maps, "InfoWindow", &[info_options.into()])?;

    let open = {
        let (info_window, map, marker) = (info_window.clone(), map.clone(), marker.clone());
        move || call(&info_window, "open", &[map.clone(), marker.clone()])
    };
    let on_click = Closure::<dyn Fn()>::new({
        let open = open.clone();
        move || open()
    });
    call(
        &marker,
        "addListener",
        &[JsValue::from_str("click"), on_click.as_ref().clone()],
    );
    // The marker lives for the rest of the page.
    on_click.forget();

    if config.auto_open {
        open();
    }
    Ok(())
}

fn lookup(root: &JsValue, path: &[&str]) -> Option<JsValue> {
    path.iter().try_fold(root.clone(), |obj, key| {
        Reflect::get(&obj, &JsValue::from_str(key))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    })
}

fn construct(maps: &JsValue, class: &'static str, args: &[JsValue]) -> Result<JsValue, MapError> {
    let ctor = lookup(maps, &[class])
        .and_then(|c| c.dyn_into::<Function>().ok())
        .ok_or(MapError::Construct(class))?;
    let args: Array = args.iter().collect();
    Reflect::construct(&ctor, &args).map_err(|_| MapError::Construct(class))
}

fn call(target: &JsValue, method: &str, args: &[JsValue]) {
    let Some(function) = lookup(target, &[method]).and_then(|f| f.dyn_into::<Function>().ok())
    else {
        log::warn!("maps object has no `{method}`");
        return;
    };
    let args: Array = args.iter().collect();
    if let Err(e) = Reflect::apply(&function, target, &args) {
        log::warn!("`{method}` failed: {e:?}");
    }
}

fn set(target: &Object, key: &str, value: &JsValue) {
    // Setting a property on a plain object cannot fail.
    let _ = Reflect::set(target, &JsValue::from_str(key), value);
}
