use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_meta::*;

use crate::api::{fetch_initial_data, fetch_trains};
use crate::components::line_view::LineView;
use crate::constants::TRAIN_REFRESH_INTERVAL_MS;
use crate::lines::ALL_LINES;
use crate::logging::log;
use crate::models::ApiSnapshot;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (api, set_api) = create_signal(None::<ApiSnapshot>);
    let (load_error, set_load_error) = create_signal(None::<String>);

    spawn_local(async move {
        let initial = match fetch_initial_data().await {
            Ok(data) => ApiSnapshot::from_initial_data(data),
            Err(e) => {
                leptos::logging::error!("Failed to load line data: {e}");
                set_load_error.set(Some(e.to_string()));
                return;
            }
        };
        let route_ids = initial.route_ids();
        log!("Loaded {} routes", route_ids.len());
        set_api.set(Some(initial));

        // Keep the last good snapshot when a refresh fails
        loop {
            match fetch_trains(&route_ids).await {
                Ok(trains) => {
                    if let Some(current) = api.get_untracked() {
                        set_api.set(Some(current.with_trains(trains)));
                    }
                }
                Err(e) => leptos::logging::error!("Failed to refresh trains: {e}"),
            }
            TimeoutFuture::new(TRAIN_REFRESH_INTERVAL_MS).await;
        }
    });

    let loaded = create_memo(move |_| api.with(Option::is_some));
    let snapshot = Signal::derive(move || api.get().unwrap_or_default());

    view! {
        <Stylesheet id="leptos" href="/pkg/line_map.css"/>
        <Title text="New Train Tracker"/>

        <div class="app">
            {move || {
                if let Some(message) = load_error.get() {
                    let notice = format!("Could not load line data: {message}");
                    view! { <div class="app-notice app-error">{notice}</div> }.into_view()
                } else if loaded.get() {
                    ALL_LINES
                        .iter()
                        .map(|&line| view! { <LineView api=snapshot line=line /> })
                        .collect_view()
                } else {
                    view! { <div class="app-notice">"Loading lines…"</div> }.into_view()
                }
            }}
        </div>
    }
}
