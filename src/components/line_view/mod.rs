mod scene;
mod state;
mod station_marker;
mod train_marker;

pub use scene::{
    compose_scene, LineScene, MapLayout, MapScene, StationLabel, StationScene, TrainScene,
};
pub use state::LineViewState;
pub use station_marker::StationMarker;
pub use train_marker::TrainMarker;

use leptos::{
    component, create_effect, create_memo, create_node_ref, create_signal, html,
    request_animation_frame, store_value, view, CollectView, For, IntoView, Memo, NodeRef, Signal,
    SignalGet, SignalGetUntracked, SignalUpdate, SignalWith, SignalWithUntracked,
};

use crate::line_geometry::{routes_for_line, GeometryCache};
use crate::logging::log;
use crate::models::{ApiSnapshot, Line};
use crate::train_ordering::train_route_pairs_for_line;

fn line_has_trains(line: &Line, api: &ApiSnapshot) -> bool {
    let routes = routes_for_line(line, &api.routes_info);
    !train_route_pairs_for_line(&api.trains_by_route, &routes).is_empty()
}

/// Map of one line with its stations and active trains, or a notice when the
/// line has no trains.
#[component]
pub fn LineView(
    #[prop(into)] api: Signal<ApiSnapshot>,
    line: &'static Line,
    #[prop(optional, into)] style: Option<String>,
) -> impl IntoView {
    let container_ref = create_node_ref::<html::Div>();
    let cache = store_value(GeometryCache::new());

    let has_trains = create_memo(move |_| api.with(|api| line_has_trains(line, api)));
    let (state, set_state) = create_signal(LineViewState::new(has_trains.get_untracked()));

    // Runs when presence toggles. The flag flip waits for the next frame so the
    // render that first shows a train still focuses it.
    create_effect(move |previous: Option<bool>| {
        let present = has_trains.get();
        if previous.is_some() {
            request_animation_frame(move || {
                set_state.update(|state| *state = state.train_presence_changed(present));
            });
        }
        present
    });

    let focus_first_train = create_memo(move |_| state.with(|state| state.focus_first_train));

    let scene = create_memo(move |_| {
        let focus = focus_first_train.get();
        api.with(|api| {
            cache
                .try_update_value(|cache| compose_scene(line, api, cache, focus))
                .unwrap_or_else(|| LineScene::NoTrains(line.no_trains_notice()))
        })
    });

    let notice = create_memo(move |_| {
        scene.with(|scene| match scene {
            LineScene::NoTrains(notice) => Some(notice.clone()),
            LineScene::Map(_) => None,
        })
    });
    let layout = create_memo(move |_| {
        scene.with(|scene| match scene {
            LineScene::Map(map) => Some(map.layout.clone()),
            LineScene::NoTrains(_) => None,
        })
    });
    let trains = create_memo(move |_| {
        scene.with(|scene| match scene {
            LineScene::Map(map) => map.trains.clone(),
            LineScene::NoTrains(_) => Vec::new(),
        })
    });

    // Measure the anchor station once the markers have been laid out
    create_effect(move |_| {
        let anchor = layout.with(|layout| {
            layout.as_ref().and_then(|layout| layout.anchor_station_id.clone())
        });
        let Some(anchor) = anchor else { return };
        if state.with_untracked(|state| state.offset.is_some()) {
            return;
        }

        request_animation_frame(move || {
            let Some(container) = container_ref.get_untracked() else { return };
            let selector = format!("[data-station-id=\"{anchor}\"]");
            let Ok(Some(marker)) = container.query_selector(&selector) else { return };
            let left = marker.get_bounding_client_rect().left();
            log!("Aligning the {} Line on {anchor} at {left}px", line.name);
            set_state.update(|state| *state = state.measure_offset(left));
        });
    });

    view! {
        <div
            class="line-view"
            node_ref=container_ref
            style=move || state.with(|state| state.container_style(style.as_deref()))
        >
            {move || notice.get().map(|notice| view! {
                <div class="line-view-notice">{notice}</div>
            })}
            {move || layout.get().map(|layout| view! {
                <LineMap layout=layout trains=trains line=line container=container_ref />
            })}
        </div>
    }
}

/// The SVG map. Path and stations come from `layout`; trains are keyed by
/// label so a train moving between stations keeps its marker.
#[component]
fn LineMap(
    layout: MapLayout,
    trains: Memo<Vec<TrainScene>>,
    line: &'static Line,
    container: NodeRef<html::Div>,
) -> impl IntoView {
    let MapLayout { viewbox, path_directive, stations, .. } = layout;

    view! {
        <svg class="line-map" viewBox=viewbox.to_string() xmlns="http://www.w3.org/2000/svg">
            <path
                class="line-path"
                d=path_directive
                fill="none"
                stroke=line.color_primary
                stroke-width="3"
                stroke-linejoin="round"
                stroke-linecap="round"
            />
            {stations
                .into_iter()
                .map(|station| view! { <StationMarker station=station line=line /> })
                .collect_view()}
            <For
                each=move || trains.get()
                key=|train| train.pair.train.label.clone()
                children=move |train: TrainScene| {
                    let label = train.pair.train.label.clone();
                    let initial = train.position;
                    let position = create_memo(move |_| {
                        trains.with(|trains| {
                            trains
                                .iter()
                                .find(|train| train.pair.train.label == label)
                                .map_or(initial, |train| train.position)
                        })
                    });
                    view! {
                        <TrainMarker
                            train=train
                            position=position
                            line=line
                            container=container
                        />
                    }
                }
            />
        </svg>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::lines::{GREEN, ORANGE, RED};
    use crate::models::{InitialData, RouteInfo, Station, Train, TrainsByRoute};
    use gloo_timers::future::TimeoutFuture;
    use leptos::{mount_to_body, SignalSet, WriteSignal};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn reset_body() {
        document().body().unwrap().set_inner_html("");
    }

    /// Lets effects and the frame callbacks they queue run
    async fn next_frames() {
        TimeoutFuture::new(100).await;
    }

    fn station(id: &str, name: &str, x: f64, y: f64) -> Station {
        Station {
            id: id.to_string(),
            name: Some(name.to_string()),
            position: Point::new(x, y),
        }
    }

    fn green_b_train_at(station_id: &str) -> TrainsByRoute {
        let mut trains = TrainsByRoute::new();
        trains.insert(
            "Green-B".to_string(),
            vec![Train {
                label: "3900".to_string(),
                route: "Green-B".to_string(),
                station_id: Some(station_id.to_string()),
                direction: 0,
                is_new_train: true,
            }],
        );
        trains
    }

    fn snapshot(trains: TrainsByRoute) -> ApiSnapshot {
        let mut data = InitialData::default();
        for (id, line) in [("Green-B", "Green"), ("Orange", "Orange"), ("Red", "Red")] {
            data.routes_info.insert(
                id.to_string(),
                RouteInfo {
                    id: id.to_string(),
                    line: line.to_string(),
                    name: String::new(),
                    station_ids: vec![],
                    path: vec![],
                },
            );
        }
        data.stations_by_route.insert(
            "Green-B".to_string(),
            vec![
                station("place-pktrm", "Park Street", 10.0, 0.0),
                station("place-lake", "Boston College", 0.0, 80.0),
            ],
        );
        ApiSnapshot::from_initial_data(data).with_trains(trains)
    }

    fn mount(line: &'static Line, api: ApiSnapshot) -> WriteSignal<ApiSnapshot> {
        reset_body();
        let (api, set_api) = create_signal(api);
        mount_to_body(move || view! { <LineView api=api line=line /> });
        set_api
    }

    #[wasm_bindgen_test]
    fn test_red_line_without_trains_shows_notice() {
        mount(&RED, snapshot(TrainsByRoute::new()));

        let text = document().body().unwrap().text_content().unwrap();
        assert!(text.contains("New Red Line trains are expected later in 2020."));
        assert!(document().query_selector("svg").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn test_other_line_without_trains_shows_generic_notice() {
        mount(&ORANGE, snapshot(TrainsByRoute::new()));

        let text = document().body().unwrap().text_content().unwrap();
        assert!(text.contains("No new trains on the Orange Line right now."));
        assert!(document().query_selector("svg").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn test_train_at_unknown_station_still_renders() {
        mount(&GREEN, snapshot(green_b_train_at("place-nowhere")));

        let svg = document().query_selector("svg.line-map").unwrap().unwrap();
        assert_eq!(svg.get_attribute("viewBox").as_deref(), Some("-50 -5 110 95"));
        assert_eq!(document().query_selector_all("g.train").unwrap().length(), 1);
        assert_eq!(document().query_selector_all("[data-station-id]").unwrap().length(), 2);
        assert!(svg.text_content().unwrap().contains("B.C."));
    }

    #[wasm_bindgen_test]
    async fn test_first_train_to_appear_takes_focus() {
        let set_api = mount(&GREEN, snapshot(TrainsByRoute::new()));
        next_frames().await;
        assert!(document().query_selector("g.train").unwrap().is_none());

        set_api.set(snapshot(green_b_train_at("place-lake")));
        next_frames().await;

        let marker = document().query_selector("g.train").unwrap().unwrap();
        let active = document().active_element().unwrap();
        assert!(marker.is_same_node(Some(&*active)));
        assert_eq!(active.get_attribute("data-train-label").as_deref(), Some("3900"));
    }

    #[wasm_bindgen_test]
    async fn test_moving_train_keeps_its_marker() {
        let set_api = mount(&GREEN, snapshot(TrainsByRoute::new()));
        set_api.set(snapshot(green_b_train_at("place-lake")));
        next_frames().await;
        let marker = document().query_selector("g.train").unwrap().unwrap();
        let svg = document().query_selector("svg.line-map").unwrap().unwrap();

        set_api.set(snapshot(green_b_train_at("place-pktrm")));
        next_frames().await;

        let moved = document().query_selector("g.train").unwrap().unwrap();
        assert!(moved.is_same_node(Some(&*marker)));
        let svg_after = document().query_selector("svg.line-map").unwrap().unwrap();
        assert!(svg_after.is_same_node(Some(&*svg)));
        let circle = moved.query_selector("circle").unwrap().unwrap();
        assert_eq!(circle.get_attribute("cx").as_deref(), Some("10"));
        assert_eq!(circle.get_attribute("cy").as_deref(), Some("0"));
        let active = document().active_element().unwrap();
        assert!(moved.is_same_node(Some(&*active)));
    }

    #[wasm_bindgen_test]
    async fn test_container_is_shifted_after_layout() {
        mount(&GREEN, snapshot(green_b_train_at("place-lake")));
        next_frames().await;

        let container = document().query_selector(".line-view").unwrap().unwrap();
        let style = container.get_attribute("style").unwrap_or_default();
        assert!(style.starts_with("transform: translateX(calc(33vw - "), "{style}");
        assert!(style.ends_with("px));"), "{style}");
    }
}
