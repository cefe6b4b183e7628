mod background;
mod cursor;
mod hooks;
mod overlays;
mod sections;

use std::rc::Rc;

use js_sys::{Function, Reflect};
use serde_json::json;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollRestoration,
    ScrollToOptions, Window,
};
use yew::prelude::*;

use crate::config::{
    parse_log_level, CONTACT_SUCCESS_MESSAGE, DEFAULT_LOG_LEVEL, LOG_LEVEL_ATTRIBUTE,
    TOAST_VISIBLE_MS,
};
use crate::content::{Icon, ImageSource, Project};
use crate::diagnostics::{log_event, set_log_level, LogLevel};
use crate::overlay::{ClickTarget, Modal, Toast, ToastKind};
use crate::theme::{Theme, ThemeSwitch};

use background::CosmicBackground;
use cursor::CursorOverlay;
use hooks::{use_toast_timer, ToastAction, ToastState};
use overlays::{ProjectModal, ToastBanner};
use sections::{
    AboutSection, ContactSection, EducationSection, Footer, HeroSection, Navbar, ProjectsSection,
    SkillsSection,
};

fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

fn write_theme(theme: Theme) {
    if let Some(root) = document().and_then(|document| document.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

fn reduced_motion_requested(win: &Window) -> bool {
    matches!(
        win.match_media("(prefers-reduced-motion: reduce)"),
        Ok(Some(query)) if query.matches()
    )
}

fn view_transition_starter(document: &JsValue) -> Option<Function> {
    Reflect::get(document, &JsValue::from_str("startViewTransition"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn switch_theme(theme: Theme) {
    let (Some(win), Some(document)) = (window(), document()) else {
        write_theme(theme);
        return;
    };
    let document: JsValue = document.into();
    let starter = view_transition_starter(&document);

    match (ThemeSwitch::choose(reduced_motion_requested(&win), starter.is_some()), starter) {
        (ThemeSwitch::Animated, Some(start)) => {
            let update = Closure::once_into_js(move || write_theme(theme));
            if start.call1(&document, &update).is_err() {
                write_theme(theme);
            }
        }
        _ => write_theme(theme),
    }
}

fn disable_scroll_restoration() {
    if let Some(history) = window().and_then(|win| win.history().ok()) {
        let _ = history.set_scroll_restoration(ScrollRestoration::Manual);
    }
}

pub(crate) fn viewport_size() -> Option<(f64, f64)> {
    let win = window()?;
    let width = win.inner_width().ok()?.as_f64()?;
    let height = win.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

pub(crate) fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub(crate) fn smooth_scroll_to(element: &web_sys::Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub(crate) fn smooth_scroll_to_id(id: &str) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        smooth_scroll_to(&element);
    }
}

pub(crate) fn scroll_to_top() {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

pub(crate) fn icon(icon: Icon) -> Html {
    html! { <span class="icon" aria-hidden="true">{icon.glyph()}</span> }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ExternalLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub label: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ExternalLink)]
pub(crate) fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={props.class.clone()}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            aria-label={(!props.label.is_empty()).then(|| props.label.clone())}
        >
            {props.children.clone()}
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct FallbackImageProps {
    pub src: &'static str,
    pub fallback: &'static str,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Callers key this on `src`, so a new path remounts with fresh state.
#[function_component(FallbackImage)]
pub(crate) fn fallback_image(props: &FallbackImageProps) -> Html {
    let image = use_state(|| ImageSource::new(props.src, props.fallback));

    let onerror = {
        let image = image.clone();
        Callback::from(move |_: Event| {
            let mut next = *image;
            if next.fail() {
                log_event(
                    LogLevel::Debug,
                    "image.fallback",
                    json!({ "src": image.current() }),
                );
                image.set(next);
            }
        })
    };

    html! {
        <img class={props.class.clone()} src={image.current()} alt={props.alt.clone()} {onerror} />
    }
}

pub(crate) enum ModalAction {
    Open(&'static Project),
    Close,
    Click(ClickTarget),
    NextImage,
    PrevImage,
}

#[derive(Clone, Default, PartialEq)]
pub(crate) struct ModalState(pub Modal);

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut modal = self.0;
        match action {
            ModalAction::Open(project) => {
                modal.open(project);
                log_event(LogLevel::Debug, "modal.opened", json!({ "project": project.id }));
            }
            ModalAction::Close => modal.close(),
            ModalAction::Click(target) => {
                modal.click(target);
            }
            ModalAction::NextImage => modal.next_image(),
            ModalAction::PrevImage => modal.prev_image(),
        }
        if self.0.is_open() && !modal.is_open() {
            log_event(LogLevel::Debug, "modal.closed", json!({}));
        }
        Rc::new(Self(modal))
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(Theme::default);
    let toast = use_reducer(|| ToastState(Toast::new(TOAST_VISIBLE_MS)));
    let modal = use_reducer(ModalState::default);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            write_theme(current);
            disable_scroll_restoration();
            || ()
        });
    }

    use_toast_timer(&toast);

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*theme).toggled();
            switch_theme(next);
            log_event(LogLevel::Debug, "theme.changed", json!({ "theme": next.as_str() }));
            theme.set(next);
        })
    };

    let on_sent = {
        let dispatcher = toast.dispatcher();
        Callback::from(move |_: ()| {
            dispatcher.dispatch(ToastAction::Show(
                CONTACT_SUCCESS_MESSAGE.to_string(),
                ToastKind::Success,
            ))
        })
    };

    let on_dismiss = {
        let dispatcher = toast.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ToastAction::Dismiss))
    };

    let on_modal = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |action: ModalAction| dispatcher.dispatch(action))
    };

    let on_open = {
        let on_modal = on_modal.clone();
        Callback::from(move |project: &'static Project| on_modal.emit(ModalAction::Open(project)))
    };

    let current = *theme;

    html! {
        <div class={classes!("page", current.as_str())}>
            <CursorOverlay theme={current} />
            <CosmicBackground />
            <Navbar theme={current} on_toggle={on_toggle} />
            <main class="page-main">
                <HeroSection theme={current} />
                <AboutSection theme={current} />
                <SkillsSection theme={current} />
                <ProjectsSection theme={current} on_open={on_open} />
                <EducationSection theme={current} />
                <ContactSection theme={current} on_sent={on_sent} />
                <Footer theme={current} />
            </main>
            <ProjectModal theme={current} modal={modal.0} on_action={on_modal} />
            <ToastBanner toast={toast.0.clone()} on_dismiss={on_dismiss} />
        </div>
    }
}

pub fn run() {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");

    let level = parse_log_level(
        root.get_attribute(LOG_LEVEL_ATTRIBUTE).as_deref(),
        DEFAULT_LOG_LEVEL,
    );
    set_log_level(level);

    yew::Renderer::<App>::with_root(root).render();
}
