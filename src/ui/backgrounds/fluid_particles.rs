use leptos::html;
use leptos::prelude::*;

use crate::core::particles::ParticleConfig;

/// Full-viewport canvas of particles that flee the pointer and scatter on click
#[component]
pub fn FluidParticles(
    config: ParticleConfig,
    #[prop(default = "fixed inset-0 z-0 pointer-events-none")] class: &'static str,
) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use leptos::ev::{click, mousemove, mouseout, resize};
        use wasm_bindgen::prelude::*;

        use super::{seeded_rng, viewport_size};
        use crate::core::particles::ParticleField;

        let field = StoredValue::new(None::<ParticleField>);
        let rng = StoredValue::new(seeded_rng());
        let config = StoredValue::new(config);
        let running = Arc::new(AtomicBool::new(true));

        Effect::new({
            let running = running.clone();
            move |started: Option<bool>| {
                if started == Some(true) {
                    return true;
                }
                let Some(canvas) = canvas_ref.get() else {
                    return false;
                };

                let (width, height) = viewport_size();
                canvas.set_width(width as u32);
                canvas.set_height(height as u32);
                let seeded = rng.try_update_value(|r| {
                    ParticleField::new(config.get_value(), width, height, r)
                });
                field.set_value(seeded);

                let frame = Rc::new(RefCell::new(None::<Closure<dyn FnMut()>>));
                let next_frame = frame.clone();
                let running = running.clone();

                *frame.borrow_mut() = Some(Closure::new(move || {
                    if !running.load(Ordering::Relaxed) {
                        return;
                    }

                    let now = js_sys::Date::now();
                    let moved = field
                        .try_update_value(|f| f.as_mut().is_some_and(|f| f.tick(now)))
                        .unwrap_or(false);
                    if moved {
                        if let Some(canvas) = canvas_ref.get_untracked() {
                            let drawn = field.with_value(|f| f.as_ref().map(|f| draw(&canvas, f)));
                            if let Some(Err(e)) = drawn {
                                leptos::logging::warn!("{}", e);
                            }
                        }
                    }

                    if let Some(window) = web_sys::window() {
                        if let Some(closure) = next_frame.borrow().as_ref() {
                            let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
                        }
                    }
                }));

                if let Some(window) = web_sys::window() {
                    if let Some(closure) = frame.borrow().as_ref() {
                        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
                    }
                }
                true
            }
        });

        let on_move = window_event_listener(mousemove, move |ev| {
            field.update_value(|f| {
                if let Some(f) = f {
                    f.pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
                }
            });
        });

        let on_leave = window_event_listener(mouseout, move |ev| {
            if ev.related_target().is_none() {
                field.update_value(|f| {
                    if let Some(f) = f {
                        f.pointer_left();
                    }
                });
            }
        });

        let on_click = window_event_listener(click, move |ev| {
            let now = js_sys::Date::now();
            field.update_value(|f| {
                if let Some(f) = f {
                    f.trigger_blast(ev.client_x() as f64, ev.client_y() as f64, now);
                }
            });
        });

        let on_resize = window_event_listener(resize, move |_| {
            let (width, height) = viewport_size();
            if let Some(canvas) = canvas_ref.get_untracked() {
                canvas.set_width(width as u32);
                canvas.set_height(height as u32);
            }
            rng.update_value(|r| {
                field.update_value(|f| {
                    if let Some(f) = f {
                        f.resize(width, height, r);
                    }
                });
            });
        });

        on_cleanup(move || {
            running.store(false, Ordering::Relaxed);
            drop(on_move);
            drop(on_leave);
            drop(on_click);
            drop(on_resize);
        });
    }

    #[cfg(feature = "ssr")]
    let _ = config;

    view! {
        <canvas node_ref=canvas_ref class=class aria-hidden="true"></canvas>
    }
}

#[cfg(not(feature = "ssr"))]
fn draw(
    canvas: &web_sys::HtmlCanvasElement,
    field: &crate::core::particles::ParticleField,
) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let ctx = canvas
        .get_context("2d")
        .map_err(|_| "canvas: get_context threw".to_string())?
        .ok_or("canvas: missing 2d context".to_string())?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|_| "canvas: context is not 2d".to_string())?;

    let (width, height) = field.size();
    ctx.clear_rect(0.0, 0.0, width, height);

    for p in field.particles() {
        ctx.set_fill_style_str(field.color_of(p));
        ctx.begin_path();
        ctx.arc(p.x, p.y, p.size, 0.0, std::f64::consts::TAU)
            .map_err(|_| "canvas: arc threw".to_string())?;
        ctx.fill();
    }
    Ok(())
}
