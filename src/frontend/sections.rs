use std::rc::Rc;

use gloo::events::EventListener;
use serde_json::json;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::hooks::{use_cycle, use_elapsed, use_skill_cycle, SkillsAction};
use super::{
    icon, scroll_to_top, scroll_y, smooth_scroll_to, smooth_scroll_to_id, ExternalLink,
    FallbackImage,
};
use crate::config::{
    CARD_FADE_MS, HERO_CYCLE_MS, HERO_SCROLL_FADE_PX, HERO_TEXT_FADE_MS, PROGRESS_FILL_MS,
    SKILLS_CYCLE_MS,
};
use crate::contact::{ContactForm, Field};
use crate::content::{
    Icon, Project, MOCKUP_PLACEHOLDER, PORTFOLIO, PROFILE_PHOTO, PROFILE_PHOTO_PLACEHOLDER,
};
use crate::cycle::{format_counter, CycleAction};
use crate::diagnostics::{log_event, LogLevel};
use crate::motion::{progress_fill, scroll_fade, Transition};
use crate::theme::Theme;

fn section_title(text: &'static str) -> Html {
    html! {
        <h2 class="section-title">
            <span class="gradient-text underline">{text}</span>
        </h2>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub theme: Theme,
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: Theme,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let contact = &PORTFOLIO.contact;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let links = |on_click: Option<Callback<MouseEvent>>| -> Html {
        PORTFOLIO
            .nav
            .iter()
            .map(|item| {
                html! {
                    <a
                        key={item.anchor}
                        class="nav-link"
                        href={format!("#{}", item.anchor)}
                        onclick={on_click.clone()}
                    >
                        {item.label}
                    </a>
                }
            })
            .collect()
    };

    html! {
        <header class="navbar">
            <div class="navbar-inner">
                <span class="navbar-logo gradient-text">{PORTFOLIO.profile.initials}</span>

                <nav class="navbar-links" aria-label="Sections">
                    {links(None)}
                </nav>

                <div class="navbar-actions">
                    <div class="navbar-social">
                        <ExternalLink class={classes!("icon-button")} href={contact.linkedin} label="LinkedIn">
                            {icon(Icon::Linkedin)}
                        </ExternalLink>
                        <ExternalLink class={classes!("icon-button")} href={contact.github} label="GitHub">
                            {icon(Icon::Github)}
                        </ExternalLink>
                    </div>
                    <button
                        type="button"
                        class="icon-button theme-toggle"
                        onclick={props.on_toggle.clone()}
                        aria-label={props.theme.toggle_label()}
                        aria-pressed={props.theme.pressed().to_string()}
                    >
                        <span aria-hidden="true">{props.theme.icon()}</span>
                    </button>
                    <button
                        type="button"
                        class="icon-button menu-toggle"
                        onclick={toggle_menu}
                        aria-expanded={(*menu_open).to_string()}
                        aria-label="Toggle navigation"
                    >
                        {icon(if *menu_open { Icon::Close } else { Icon::Menu })}
                    </button>
                </div>
            </div>

            if *menu_open {
                <nav class="mobile-menu" aria-label="Sections">
                    {links(Some(close_menu))}
                </nav>
            }
        </header>
    }
}

#[function_component(HeroSection)]
pub fn hero_section(props: &SectionProps) -> Html {
    let profile = &PORTFOLIO.profile;
    let rotation = use_cycle(profile.rotating_skills.len(), Some(HERO_CYCLE_MS));
    let index = rotation.0.index();
    let badge_elapsed = use_elapsed(index, HERO_TEXT_FADE_MS);
    let fade = use_state_eq(|| scroll_fade(scroll_y(), HERO_SCROLL_FADE_PX));

    {
        let fade = fade.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "scroll", move |_| {
                    fade.set(scroll_fade(scroll_y(), HERO_SCROLL_FADE_PX));
                })
            });
            move || drop(listener)
        });
    }

    let (first, last) = profile.name_parts();
    let badge = profile.rotating_skills.get(index).map(|skill| {
        html! {
            <span
                key={index}
                class="hero-badge"
                style={Transition::hero_text().style(badge_elapsed)}
            >
                {icon(skill.icon)}{" "}{skill.label}
            </span>
        }
    });

    html! {
        <section id="hero" class={classes!("hero", props.theme.as_str())}>
            <div class="hero-content" style={format!("opacity: {:.3};", *fade)}>
                <h1 class="hero-name">
                    <span class="gradient-text first">{first}</span>
                    <span class="gradient-text last">{last}</span>
                </h1>
                <h2 class="hero-title">{profile.title}</h2>
                <div class="hero-badge-slot">{badge}</div>
                <p class="hero-tagline">{profile.tagline}</p>
                <a class="button primary" href="#projects">{"View My Projects"}</a>

                <div class="tech-stack">
                    <p class="muted">{"Tech Stack"}</p>
                    <div class="chips">
                        {for profile.tech_stack.iter().map(|tech| html! {
                            <span key={*tech} class="chip">{*tech}</span>
                        })}
                    </div>
                </div>

                <div class="scroll-hint">
                    <span class="muted">{"Scroll to explore"}</span>
                    {icon(Icon::ArrowDown)}
                </div>
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
pub fn about_section(props: &SectionProps) -> Html {
    let profile = &PORTFOLIO.profile;
    let about = &PORTFOLIO.about;
    let (first, last) = profile.name_parts();

    html! {
        <section id="about" class={classes!("section", "about", props.theme.as_str())}>
            <div class="container">
                {section_title("About Me")}
                <div class="about-grid">
                    <div class="card photo-card">
                        <FallbackImage
                            key={PROFILE_PHOTO}
                            class={classes!("profile-photo")}
                            src={PROFILE_PHOTO}
                            fallback={PROFILE_PHOTO_PLACEHOLDER}
                            alt={format!("{} Avatar", profile.name)}
                        />
                    </div>

                    <div class="about-body">
                        <p class="about-intro">
                            {format!("Hi, I'm {first} {last}, {}.", about.role)}
                        </p>
                        <p>{about.description}</p>

                        <h3 class="journey-title">{"My Journey"}</h3>
                        <div class="journey">
                            {for about.journey.iter().map(|entry| html! {
                                <div key={entry.title} class="journey-entry">
                                    <h4>{entry.title}</h4>
                                    <p>{entry.description}</p>
                                </div>
                            })}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProgressBarProps {
    name: &'static str,
    percentage: u8,
}

#[function_component(ProgressBar)]
fn progress_bar(props: &ProgressBarProps) -> Html {
    let elapsed = use_elapsed((), PROGRESS_FILL_MS);
    let width = progress_fill(props.percentage).sample(elapsed);

    html! {
        <div class="progress">
            <div class="progress-label">
                <span>{props.name}</span>
                <span>{format!("{}%", props.percentage)}</span>
            </div>
            <div class="progress-track">
                <div class="progress-fill" style={format!("width: {width:.1}%;")}></div>
            </div>
        </div>
    }
}

#[function_component(SkillsSection)]
pub fn skills_section(props: &SectionProps) -> Html {
    let grid = use_skill_cycle(PORTFOLIO.skill_ids(), SKILLS_CYCLE_MS);

    let on_leave = {
        let dispatcher = grid.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(SkillsAction::Leave))
    };

    let cards = PORTFOLIO.skills.iter().map(|skill| {
        let on_enter = {
            let dispatcher = grid.dispatcher();
            let id = skill.id;
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(SkillsAction::Hover(id)))
        };
        let active = grid.0.is_active(skill.id);

        html! {
            <div
                key={skill.id}
                class={classes!("card", "skill-card", active.then_some("active"))}
                onmouseenter={on_enter}
                onmouseleave={on_leave.clone()}
            >
                <div class="skill-card-header">
                    {icon(skill.icon)}
                    <h3>{skill.title}</h3>
                </div>
                <div class="skill-items">
                    {for skill.items.iter().map(|(name, percentage)| html! {
                        <ProgressBar key={*name} name={*name} percentage={*percentage} />
                    })}
                </div>
            </div>
        }
    });

    html! {
        <section id="skills" class={classes!("section", "skills", props.theme.as_str())}>
            <div class="container">
                {section_title("Skills & Expertise")}
                <p class="section-subtitle">{PORTFOLIO.skills_subtitle}</p>
                <div class="skills-grid">{for cards}</div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub theme: Theme,
    pub on_open: Callback<&'static Project>,
}

#[function_component(ProjectsSection)]
pub fn projects_section(props: &ProjectsProps) -> Html {
    let projects = PORTFOLIO.projects;
    let carousel = use_cycle(projects.len(), None);
    let index = carousel.0.index();
    let elapsed = use_elapsed(index, CARD_FADE_MS);

    let Some(project) = projects.get(index) else {
        return html! {};
    };

    let step = |action: fn() -> CycleAction| {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action()))
    };
    let on_details = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(project))
    };

    html! {
        <section id="projects" class={classes!("section", "projects", props.theme.as_str())}>
            <div class="container">
                {section_title("My Projects")}

                <div class="card project-card" style={Transition::project_card().style(elapsed)}>
                    <div class="project-details">
                        <h3>{project.title}</h3>
                        <p>{project.description}</p>
                        <div class="chips">
                            {for project.tags.iter().map(|tag| html! {
                                <span key={*tag} class="chip tag">{*tag}</span>
                            })}
                        </div>
                        <div class="project-actions">
                            <button type="button" class="button accent" onclick={on_details}>
                                {"View Details"}
                            </button>
                            if let Some(link) = project.link {
                                <ExternalLink class={classes!("button", "outline")} href={link}>
                                    {"Visit Site "}{icon(Icon::Globe)}
                                </ExternalLink>
                            }
                        </div>
                    </div>
                    <div class="project-mockup">
                        <FallbackImage
                            key={project.mockup}
                            src={project.mockup}
                            fallback={MOCKUP_PLACEHOLDER}
                            alt={format!("{} Mockup", project.title)}
                        />
                    </div>
                </div>

                <div class="carousel-controls">
                    <button
                        type="button"
                        class="icon-button"
                        aria-label="Previous project"
                        onclick={step(|| CycleAction::Prev)}
                    >
                        {icon(Icon::ArrowLeft)}
                    </button>
                    <span class="carousel-counter">{format_counter(index, projects.len())}</span>
                    <button
                        type="button"
                        class="icon-button"
                        aria-label="Next project"
                        onclick={step(|| CycleAction::Next)}
                    >
                        {icon(Icon::ArrowRight)}
                    </button>
                </div>
            </div>
        </section>
    }
}

#[function_component(EducationSection)]
pub fn education_section(props: &SectionProps) -> Html {
    let education = PORTFOLIO.education;
    let timeline = use_cycle(education.len(), None);
    let active = timeline.0.index();

    let entries = education.iter().enumerate().map(|(index, entry)| {
        let onclick = {
            let dispatcher = timeline.dispatcher();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(CycleAction::Select(index)))
        };
        html! {
            <button
                key={entry.years}
                type="button"
                class={classes!("timeline-entry", (index == active).then_some("active"))}
                {onclick}
            >
                <span class="timeline-dot" aria-hidden="true"></span>
                <h4>{entry.years}</h4>
                <p>{entry.degree}</p>
                if let Some(percentage) = entry.percentage {
                    <p class="percentage">{percentage}</p>
                }
            </button>
        }
    });

    let detail = education.get(active).map(|entry| {
        html! {
            <div class="card education-card">
                {icon(Icon::BookOpen)}
                <div>
                    <p class="muted">{entry.years}</p>
                    <h3>{entry.degree}</h3>
                    <p class="institution">{entry.institution}</p>
                    <p>{entry.description}</p>
                    if let Some(percentage) = entry.percentage {
                        <p class="percentage">{format!("Percentage: {percentage}")}</p>
                    }
                </div>
            </div>
        }
    });

    html! {
        <section id="education" class={classes!("section", "education", props.theme.as_str())}>
            <div class="container">
                {section_title("My Education")}
                <div class="education-layout">
                    <div class="timeline">{for entries}</div>
                    <div class="education-detail">{detail}</div>
                </div>
            </div>
        </section>
    }
}

enum FormAction {
    Set(Field, String),
    Reset,
}

#[derive(Default, PartialEq)]
struct FormState(ContactForm);

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();
        match action {
            FormAction::Set(field, value) => form.set(field, value),
            FormAction::Reset => form = ContactForm::default(),
        }
        Rc::new(Self(form))
    }
}

fn input_value(event: &InputEvent) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub theme: Theme,
    pub on_sent: Callback<()>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactProps) -> Html {
    let form = use_reducer(FormState::default);
    let form_ref = use_node_ref();
    let info = &PORTFOLIO.contact;
    let copy = &PORTFOLIO.contact_copy;

    let on_input = |field: Field| {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                dispatcher.dispatch(FormAction::Set(field, value));
            }
        })
    };

    let scroll_to_form = {
        let form_ref = form_ref.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if let Some(element) = form_ref.cast::<Element>() {
                smooth_scroll_to(&element);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let form_ref = form_ref.clone();
        let on_sent = props.on_sent.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut draft = form.0.clone();
            match draft.submit() {
                Ok(submission) => {
                    let fields = serde_json::to_value(&submission).unwrap_or_else(|_| json!({}));
                    log_event(LogLevel::Info, "contact.submitted", fields);
                    form.dispatch(FormAction::Reset);
                    on_sent.emit(());
                }
                Err(error) => {
                    log_event(
                        LogLevel::Warn,
                        "contact.rejected",
                        json!({ "field": error.field().as_str(), "reason": error.to_string() }),
                    );
                    if let Some(element) = form_ref.cast::<HtmlFormElement>() {
                        element.report_validity();
                    }
                }
            }
        })
    };

    html! {
        <section id="contact" class={classes!("section", "contact", props.theme.as_str())}>
            <div class="container">
                <h2 class="section-title">
                    <span class="gradient-text">{copy.heading}</span>
                </h2>
                <p class="section-subtitle">{copy.intro}</p>

                <div class="card contact-card">
                    <div class="contact-details">
                        <h3>{copy.pitch}</h3>
                        <p class="muted">{copy.prompt}</p>
                        <button type="button" class="contact-line link" onclick={scroll_to_form}>
                            {icon(Icon::AtSign)}
                            <span>{info.email}</span>
                        </button>
                        <div class="contact-line">
                            {icon(Icon::MapPin)}
                            <span>{info.location}</span>
                        </div>
                    </div>

                    <form ref={form_ref} class="contact-form" {onsubmit}>
                        <input
                            name={Field::Name.as_str()}
                            type="text"
                            placeholder="Name"
                            required=true
                            value={form.0.value(Field::Name).to_string()}
                            oninput={on_input(Field::Name)}
                        />
                        <input
                            name={Field::Email.as_str()}
                            type="email"
                            placeholder="Email"
                            required=true
                            value={form.0.value(Field::Email).to_string()}
                            oninput={on_input(Field::Email)}
                        />
                        <textarea
                            name={Field::Message.as_str()}
                            placeholder="Message"
                            rows="4"
                            required=true
                            value={form.0.value(Field::Message).to_string()}
                            oninput={on_input(Field::Message)}
                        />
                        <button type="submit" class="button primary wide">
                            {"Send Message "}{icon(Icon::Send)}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[function_component(Footer)]
pub fn footer(props: &SectionProps) -> Html {
    let contact = &PORTFOLIO.contact;
    let copy = &PORTFOLIO.footer;

    let to_contact = Callback::from(|event: MouseEvent| {
        event.prevent_default();
        smooth_scroll_to_id("contact");
    });
    let to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer class={classes!("footer", props.theme.as_str())}>
            <div class="container">
                <h2 class="section-title small">
                    <span class="gradient-text">{copy.heading}</span>
                </h2>
                <div class="footer-social">
                    <ExternalLink class={classes!("icon-button", "round")} href={contact.github} label="GitHub">
                        {icon(Icon::Github)}
                    </ExternalLink>
                    <ExternalLink class={classes!("icon-button", "round")} href={contact.linkedin} label="LinkedIn">
                        {icon(Icon::Linkedin)}
                    </ExternalLink>
                    <button type="button" class="icon-button round" aria-label="Contact" onclick={to_contact}>
                        {icon(Icon::Mail)}
                    </button>
                </div>
                <hr />
                <p class="muted small">{copy.copyright(current_year())}</p>
                <p class="muted small">{copy.credit}</p>
            </div>
            <button type="button" class="scroll-top" aria-label="Scroll to top" onclick={to_top}>
                {icon(Icon::ArrowUp)}
            </button>
        </footer>
    }
}
