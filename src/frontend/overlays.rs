use yew::prelude::*;

use super::hooks::use_elapsed;
use super::{icon, ExternalLink, ModalAction};
use crate::config::OVERLAY_TRANSITION_MS;
use crate::content::{Icon, Project, PORTFOLIO};
use crate::gallery::Gallery;
use crate::motion::Transition;
use crate::overlay::{ClickTarget, Modal, Toast};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub theme: Theme,
    pub modal: Modal,
    pub on_action: Callback<ModalAction>,
}

fn screenshots(project: &'static Project, gallery: &Gallery, on_action: &Callback<ModalAction>) -> Html {
    let Some(src) = gallery.current(project) else {
        return html! {};
    };
    let prev = on_action.reform(|_: MouseEvent| ModalAction::PrevImage);
    let next = on_action.reform(|_: MouseEvent| ModalAction::NextImage);

    html! {
        <div class="gallery">
            <h3>{"Project Screenshots (Local Preview)"}</h3>
            <div class="gallery-frame">
                <img src={src} alt={gallery.caption(project)} />
                <button type="button" class="gallery-nav prev" aria-label="Previous screenshot" onclick={prev}>
                    {icon(Icon::ArrowLeft)}
                </button>
                <button type="button" class="gallery-nav next" aria-label="Next screenshot" onclick={next}>
                    {icon(Icon::ArrowRight)}
                </button>
            </div>
            <p class="gallery-counter muted">
                {format!("{} / {}", gallery.index() + 1, gallery.count())}
            </p>
        </div>
    }
}

#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let shown = props.modal.project().map(|project| project.id);
    let elapsed = use_elapsed(shown, OVERLAY_TRANSITION_MS);

    let Some(project) = props.modal.project() else {
        return html! {};
    };

    let on_backdrop = props
        .on_action
        .reform(|_: MouseEvent| ModalAction::Click(ClickTarget::Backdrop));
    let on_content = props.on_action.reform(|event: MouseEvent| {
        event.stop_propagation();
        ModalAction::Click(ClickTarget::Content)
    });
    let on_close = props.on_action.reform(|_: MouseEvent| ModalAction::Close);

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div
                class={classes!("modal", props.theme.as_str())}
                role="dialog"
                aria-modal="true"
                aria-label={project.title}
                style={Transition::modal().style(elapsed)}
                onclick={on_content}
            >
                <div class="modal-header">
                    <h2 class="gradient-text">{project.title}</h2>
                    <button type="button" class="icon-button close" aria-label="Close" onclick={on_close}>
                        {icon(Icon::Close)}
                    </button>
                </div>

                <div class="modal-body">
                    <p class="muted">{project.detail_text()}</p>
                    <div class="chips">
                        {for project.tags.iter().map(|tag| html! {
                            <span key={*tag} class="chip tag">{*tag}</span>
                        })}
                    </div>
                    <div class="modal-actions">
                        <ExternalLink class={classes!("button", "outline")} href={PORTFOLIO.contact.github}>
                            {"Code "}{icon(Icon::Code)}
                        </ExternalLink>
                    </div>
                    if project.has_gallery() {
                        {screenshots(project, props.modal.gallery(), &props.on_action)}
                    }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastBannerProps {
    pub toast: Toast,
    pub on_dismiss: Callback<MouseEvent>,
}

#[function_component(ToastBanner)]
pub fn toast_banner(props: &ToastBannerProps) -> Html {
    let toast = &props.toast;
    let elapsed = use_elapsed((toast.generation(), toast.is_visible()), OVERLAY_TRANSITION_MS);

    let Some(message) = toast.message() else {
        return html! {};
    };

    let transition = if toast.is_visible() {
        Transition::toast()
    } else {
        Transition::toast().reversed()
    };
    if !toast.is_visible() && transition.is_done(elapsed) {
        return html! {};
    }

    html! {
        <div
            class={classes!("toast", message.kind.class())}
            role="status"
            aria-live="polite"
            style={transition.style(elapsed)}
        >
            {icon(Icon::CheckCircle)}
            <p>{message.text.clone()}</p>
            <button type="button" class="icon-button" aria-label="Dismiss" onclick={props.on_dismiss.clone()}>
                {icon(Icon::Close)}
            </button>
        </div>
    }
}
