use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::cursor::CursorGlow;
use crate::theme::Theme;

enum GlowAction {
    Move(f64, f64),
    Enter,
    Leave,
}

#[derive(Clone, Default, PartialEq)]
struct GlowState(CursorGlow);

impl Reducible for GlowState {
    type Action = GlowAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut glow = self.0;
        match action {
            GlowAction::Move(x, y) => glow.moved(x, y),
            GlowAction::Enter => glow.entered(),
            GlowAction::Leave => glow.left(),
        }
        Rc::new(Self(glow))
    }
}

#[derive(Properties, PartialEq)]
pub struct CursorOverlayProps {
    pub theme: Theme,
}

#[function_component(CursorOverlay)]
pub fn cursor_overlay(props: &CursorOverlayProps) -> Html {
    let glow = use_reducer(GlowState::default);

    {
        let dispatcher = glow.dispatcher();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();

            if let Some(win) = window() {
                let on_move = dispatcher.clone();
                listeners.push(EventListener::new(&win, "mousemove", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        on_move.dispatch(GlowAction::Move(
                            f64::from(event.client_x()),
                            f64::from(event.client_y()),
                        ));
                    }
                }));

                if let Some(body) = win.document().and_then(|document| document.body()) {
                    let on_enter = dispatcher.clone();
                    listeners.push(EventListener::new(&body, "mouseenter", move |_| {
                        on_enter.dispatch(GlowAction::Enter);
                    }));
                    let on_leave = dispatcher;
                    listeners.push(EventListener::new(&body, "mouseleave", move |_| {
                        on_leave.dispatch(GlowAction::Leave);
                    }));
                }
            }

            move || drop(listeners)
        });
    }

    match glow.0.style(props.theme) {
        Some(style) => html! { <div class="cursor-glow" style={style}></div> },
        None => html! {},
    }
}
