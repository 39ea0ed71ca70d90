use leptos::html;
use leptos::prelude::*;

use super::seeded_rng;
use crate::core::grid_pattern::{GridPattern, GridPatternConfig};

const PATTERN_ID: &str = "lead-grid-pattern";

/// SVG grid with squares that fade in, fade out and move to a new cell
#[component]
pub fn AnimatedGridPattern(
    config: GridPatternConfig,
    #[prop(default = "pointer-events-none absolute inset-0 h-full w-full")] class: &'static str,
) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let rng = StoredValue::new(seeded_rng());

    // One full cycle fades in then back out
    let cycle_secs = config.duration * 2.0;
    let max_opacity = config.max_opacity;
    let (cell_width, cell_height) = (config.cell_width, config.cell_height);
    let pattern = RwSignal::new(GridPattern::new(config));
    let cell_path = pattern.with_untracked(|p| p.cell_path());

    let reposition = move |id: usize| {
        rng.update_value(|r| {
            pattern.update(|p| {
                p.reposition(id, r);
            });
        });
    };

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::resize;

        let measure = move || {
            if let Some(el) = container.get_untracked() {
                let (width, height) = (el.client_width() as f64, el.client_height() as f64);
                rng.update_value(|r| pattern.update(|p| p.resize(width, height, r)));
            }
        };

        Effect::new(move |_| {
            if container.get().is_some() {
                measure();
            }
        });

        let on_resize = window_event_listener(resize, move |_| measure());
        on_cleanup(move || drop(on_resize));
    }

    let squares = move || {
        pattern.with(|p| {
            p.squares()
                .iter()
                .enumerate()
                .map(|(index, square)| (index, *square, p.rect(square)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div node_ref=container class=class aria-hidden="true">
            <svg class="absolute inset-0 h-full w-full fill-slate-400/30 stroke-slate-400/30">
                <defs>
                    <pattern
                        id=PATTERN_ID
                        width=cell_width
                        height=cell_height
                        patternUnits="userSpaceOnUse"
                        x="-1"
                        y="-1"
                    >
                        <path d=cell_path fill="none" stroke-dasharray="0"/>
                    </pattern>
                </defs>
                <rect width="100%" height="100%" stroke-width="0" fill=format!("url(#{})", PATTERN_ID)/>
                <svg x="-1" y="-1" class="overflow-visible">
                    <For
                        each=squares
                        key=|(_, square, _)| (square.id, square.generation)
                        children=move |(index, square, rect)| {
                            let style = format!(
                                "animation-duration: {}s; animation-delay: {}s; --grid-max-opacity: {};",
                                cycle_secs,
                                GridPattern::delay(index),
                                max_opacity
                            );
                            view! {
                                <rect
                                    class="grid-square"
                                    style=style
                                    x=rect.x
                                    y=rect.y
                                    width=rect.width
                                    height=rect.height
                                    fill="currentColor"
                                    stroke-width="0"
                                    on:animationend=move |_| reposition(square.id)
                                />
                            }
                        }
                    />
                </svg>
            </svg>
        </div>
    }
}
