use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use serde_json::json;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, Element, HtmlCanvasElement};
use yew::prelude::*;

use super::hooks::now_ms;
use super::viewport_size;
use crate::diagnostics::{log_event, LogLevel};
use crate::scene::{surface_size, Frame, Scene};

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("window is unavailable")]
    NoWindow,
    #[error("document is unavailable")]
    NoDocument,
    #[error("canvas element could not be created")]
    NoCanvas,
    #[error("2d drawing context is unavailable")]
    ContextUnavailable,
}

struct Surface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    pixel_ratio: f64,
}

impl Surface {
    fn attach(host: &Element) -> Result<Self, SurfaceError> {
        let window = window().ok_or(SurfaceError::NoWindow)?;
        let document = window.document().ok_or(SurfaceError::NoDocument)?;
        let canvas = document
            .create_element("canvas")
            .ok()
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or(SurfaceError::NoCanvas)?;
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(SurfaceError::ContextUnavailable)?;

        // A previous mount may have left its canvas behind.
        host.set_inner_html("");
        host.append_child(&canvas).map_err(|_| SurfaceError::NoCanvas)?;

        Ok(Self {
            canvas,
            context,
            pixel_ratio: window.device_pixel_ratio().max(1.0),
        })
    }

    fn fit(&self, width: f32, height: f32) {
        let ratio = self.pixel_ratio;
        self.canvas.set_width((f64::from(width) * ratio) as u32);
        self.canvas.set_height((f64::from(height) * ratio) as u32);
        let _ = self.canvas.set_attribute(
            "style",
            &format!("width: {width}px; height: {height}px;"),
        );
        let _ = self.context.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
    }

    fn draw(&self, frame: &Frame) {
        let context = &self.context;
        context.clear_rect(0.0, 0.0, f64::from(frame.width), f64::from(frame.height));

        let _ = context.set_global_composite_operation("lighter");
        context.set_fill_style_str("#ffffff");
        for particle in &frame.particles {
            let size = f64::from(particle.size);
            context.fill_rect(
                f64::from(particle.x) - size / 2.0,
                f64::from(particle.y) - size / 2.0,
                size,
                size,
            );
        }

        let _ = context.set_global_composite_operation("source-over");
        for polygon in &frame.polygons {
            let Some(((first_x, first_y), rest)) = polygon.points.split_first() else {
                continue;
            };
            context.begin_path();
            context.move_to(f64::from(*first_x), f64::from(*first_y));
            for (x, y) in rest {
                context.line_to(f64::from(*x), f64::from(*y));
            }
            context.close_path();
            context.set_fill_style_str(&polygon.fill);
            context.fill();
        }
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        self.canvas.remove();
    }
}

struct FrameLoop {
    running: Cell<bool>,
    pending: RefCell<Option<AnimationFrame>>,
    scene: RefCell<Scene>,
    surface: Surface,
    started_ms: f64,
}

fn schedule_frame(state: Rc<FrameLoop>) {
    let next = Rc::clone(&state);
    let handle = request_animation_frame(move |_| {
        if !next.running.get() {
            return;
        }
        let elapsed = ((now_ms() - next.started_ms) / 1_000.0) as f32;
        next.scene.borrow_mut().update(elapsed);
        let frame = next.scene.borrow().frame();
        next.surface.draw(&frame);
        schedule_frame(next);
    });
    *state.pending.borrow_mut() = Some(handle);
}

fn host_size(host: &Element) -> (f32, f32) {
    surface_size((host.client_width(), host.client_height()), viewport_size())
}

/// Owns the canvas, the render loop and the resize listener. Dropping it stops
/// the loop, cancels the pending frame and removes the canvas.
pub struct BackgroundRenderer {
    state: Rc<FrameLoop>,
    _resize: EventListener,
}

impl BackgroundRenderer {
    pub fn mount(host: &Element) -> Result<Self, SurfaceError> {
        let window = window().ok_or(SurfaceError::NoWindow)?;
        let surface = Surface::attach(host)?;
        let (width, height) = host_size(host);
        surface.fit(width, height);

        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let scene = Scene::new(&mut fastrand::Rng::with_seed(seed), width, height);

        let state = Rc::new(FrameLoop {
            running: Cell::new(true),
            pending: RefCell::new(None),
            scene: RefCell::new(scene),
            surface,
            started_ms: now_ms(),
        });
        schedule_frame(Rc::clone(&state));

        let resize = {
            let state = Rc::clone(&state);
            let host = host.clone();
            EventListener::new(&window, "resize", move |_| {
                let (width, height) = host_size(&host);
                state.scene.borrow_mut().resize(width, height);
                state.surface.fit(width, height);
            })
        };

        Ok(Self {
            state,
            _resize: resize,
        })
    }
}

impl Drop for BackgroundRenderer {
    fn drop(&mut self) {
        self.state.running.set(false);
        self.state.pending.borrow_mut().take();
    }
}

#[function_component(CosmicBackground)]
pub fn cosmic_background() -> Html {
    let host = use_node_ref();

    {
        let host = host.clone();
        use_effect_with((), move |_| {
            let renderer = host.cast::<Element>().and_then(|element| {
                match BackgroundRenderer::mount(&element) {
                    Ok(renderer) => {
                        log_event(LogLevel::Debug, "background.mounted", json!({}));
                        Some(renderer)
                    }
                    Err(error) => {
                        log_event(
                            LogLevel::Warn,
                            "background.unavailable",
                            json!({ "reason": error.to_string() }),
                        );
                        None
                    }
                }
            });

            move || {
                if renderer.is_some() {
                    log_event(LogLevel::Debug, "background.unmounted", json!({}));
                }
                drop(renderer);
            }
        });
    }

    html! {
        <div ref={host} class="cosmic-background" aria-hidden="true"></div>
    }
}
