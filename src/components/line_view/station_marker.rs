use leptos::{component, view, IntoView};

use super::scene::StationScene;
use crate::constants::{STATION_LABEL_OFFSET, STATION_MARKER_RADIUS};
use crate::models::Line;

#[component]
#[must_use]
pub fn StationMarker(station: StationScene, line: &'static Line) -> impl IntoView {
    let StationScene { id, position, label } = station;

    view! {
        <g class="station">
            <circle
                data-station-id=id
                cx=position.x
                cy=position.y
                r=STATION_MARKER_RADIUS
                fill="white"
                stroke=line.color_primary
                stroke-width="2"
            />
            {label.map(|label| view! {
                <text
                    class="station-label"
                    x={position.x + label.side.direction() * STATION_LABEL_OFFSET}
                    y=position.y
                    text-anchor=label.side.text_anchor()
                    dominant-baseline="middle"
                >
                    {label.text}
                </text>
            })}
        </g>
    }
}
