use leptos::{
    component, create_node_ref, create_signal, html, request_animation_frame, svg, view,
    IntoView, NodeRef, Portal, Signal, SignalGet, SignalSet,
};

use super::scene::TrainScene;
use crate::constants::{STATION_LABEL_OFFSET, TRAIN_MARKER_RADIUS};
use crate::geometry::Point;
use crate::models::Line;

/// A single train on the map.
///
/// The marker stays mounted while its train is active; `position` follows the
/// train between refreshes. `container` is the line view's wrapper: the
/// popover is mounted into it and positioned relative to it.
#[component]
#[must_use]
pub fn TrainMarker(
    train: TrainScene,
    #[prop(into)] position: Signal<Point>,
    line: &'static Line,
    container: NodeRef<html::Div>,
) -> impl IntoView {
    let TrainScene { pair, focus_on_mount, always_label, .. } = train;
    let marker_ref = create_node_ref::<svg::G>();
    let (popover_position, set_popover_position) = create_signal(None::<(f64, f64)>);

    if focus_on_mount {
        marker_ref.on_load(|marker| {
            // Wait until the marker is attached, otherwise focus is a no-op
            request_animation_frame(move || {
                let _ = marker.focus();
            });
        });
    }

    let show_popover = move || {
        let (Some(marker), Some(container_el)) =
            (marker_ref.get_untracked(), container.get_untracked())
        else {
            return;
        };
        let marker_rect = marker.get_bounding_client_rect();
        let container_rect = container_el.get_bounding_client_rect();
        set_popover_position.set(Some((
            marker_rect.right() - container_rect.left(),
            marker_rect.top() - container_rect.top(),
        )));
    };
    let hide_popover = move || set_popover_position.set(None);

    let fill = if pair.train.is_new_train {
        line.color_primary
    } else {
        line.color_secondary
    };
    let caption = format!(
        "{} · {}",
        pair.train.label,
        route_caption(&pair.route.name, &pair.route.id)
    );
    let label = pair.train.label.clone();

    view! {
        <g
            class="train"
            tabindex="0"
            data-train-label=pair.train.label
            node_ref=marker_ref
            on:focus=move |_| show_popover()
            on:mouseenter=move |_| show_popover()
            on:blur=move |_| hide_popover()
            on:mouseleave=move |_| hide_popover()
        >
            <circle
                cx=move || position.get().x
                cy=move || position.get().y
                r=TRAIN_MARKER_RADIUS
                fill=fill
                stroke="white"
                stroke-width="1.5"
            />
            {always_label.then(|| view! {
                <text
                    class="train-label"
                    x=move || position.get().x + TRAIN_MARKER_RADIUS + STATION_LABEL_OFFSET / 2.0
                    y=move || position.get().y
                    dominant-baseline="middle"
                >
                    {label}
                </text>
            })}
            {move || {
                let (x, y) = popover_position.get()?;
                let mount: web_sys::Element = (*container.get_untracked()?).clone().into();
                let caption = caption.clone();
                let style = format!("position: absolute; left: {x}px; top: {y}px;");
                Some(view! {
                    <Portal mount=mount>
                        <div class="train-popover" style=style.clone()>
                            {caption.clone()}
                        </div>
                    </Portal>
                })
            }}
        </g>
    }
}

fn route_caption<'a>(name: &'a str, id: &'a str) -> &'a str {
    if name.is_empty() {
        id
    } else {
        name
    }
}
