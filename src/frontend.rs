use crate::carousel::{Carousel, TimerCommand};
use crate::config::SiteConfig;
use crate::content::{PortfolioData, Project};
use crate::observer::{ObservationHandle, RevealDispatcher};
use crate::resume::download_resume;
use crate::reveal::{RevealKey, RevealList};
use crate::scroll_spy::{ScrollSpyNavigator, SectionAnchor, SectionId};
use crate::telemetry::{log_event, LogLevel};
use crate::theme::{css_variables, spotlight_background, ThemeMode, ThemeStore};
use gloo_events::EventListener;
use gloo_timers::callback::Interval;
use js_sys::{Function, Reflect};
use serde_json::json;
use std::{cell::RefCell, rc::Rc, time::Duration};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Event, MouseEvent, PointerEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

fn apply_theme(mode: ThemeMode) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", mode.as_str());
            let _ = root.set_attribute("style", &css_variables(mode.palette()));
        }
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme_with_transition(mode: ThemeMode) {
    if prefers_reduced_motion() {
        apply_theme(mode);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(mode);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(mode);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(mode);
        return;
    };

    let callback = Closure::once_into_js(move || {
        apply_theme(mode);
    });

    if start_view_transition
        .call1(&document_js, callback.unchecked_ref())
        .is_err()
    {
        apply_theme(mode);
    }
}

fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0)
}

/// Document offsets of the section anchors currently in the page.
fn measure_anchors(sections: &[SectionId]) -> Vec<SectionAnchor> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let scroll_y = scroll_offset();

    sections
        .iter()
        .filter_map(|id| {
            let element = document.get_element_by_id(id.as_str())?;
            Some(SectionAnchor {
                id: *id,
                offset_top: element.get_bounding_client_rect().top() + scroll_y,
            })
        })
        .collect()
}

fn smooth_scroll_to(top: f64) {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

#[derive(Clone, Copy, PartialEq)]
struct NavSnapshot {
    scrolled: bool,
    active: Option<SectionId>,
    menu_open: bool,
}

impl NavSnapshot {
    fn of(navigator: &ScrollSpyNavigator) -> Self {
        Self {
            scrolled: navigator.scrolled(),
            active: navigator.active_section(),
            menu_open: navigator.menu_open(),
        }
    }
}

#[derive(Clone, PartialEq)]
struct RevealContext(Option<RevealDispatcher>);

impl RevealContext {
    fn is_revealed(&self, key: RevealKey) -> bool {
        self.0
            .as_ref()
            .map_or(true, |dispatcher| dispatcher.is_revealed(key))
    }
}

#[derive(Properties, PartialEq)]
struct RevealItemProps {
    reveal: RevealKey,
    revealed: bool,
    #[prop_or(AttrValue::from("div"))]
    tag: AttrValue,
    #[prop_or_default]
    id: Option<AttrValue>,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    children: Html,
}

#[function_component(RevealItem)]
fn reveal_item(props: &RevealItemProps) -> Html {
    let node_ref = use_node_ref();
    let context = use_context::<RevealContext>();

    {
        let node_ref = node_ref.clone();
        let dispatcher = context.and_then(|context| context.0);
        use_effect_with(props.reveal, move |key| {
            let handle: Option<ObservationHandle> = dispatcher
                .zip(node_ref.cast::<web_sys::Element>())
                .map(|(dispatcher, element)| dispatcher.attach(*key, element));
            move || drop(handle)
        });
    }

    let state = if props.revealed { "is-revealed" } else { "is-hidden" };

    html! {
        <@{props.tag.to_string()}
            ref={node_ref}
            id={props.id.clone()}
            class={classes!(props.class.clone(), "reveal", format!("reveal-{}", props.reveal.list.as_str()), state)}
        >
            {props.children.clone()}
        </@>
    }
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    label: AttrValue,
    #[prop_or_default]
    class: Classes,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={classes!("link", props.class.clone())}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    name: AttrValue,
    sections: Vec<SectionId>,
    snapshot: NavSnapshot,
    theme: ThemeMode,
    on_navigate: Callback<SectionId>,
    on_toggle_menu: Callback<()>,
    on_toggle_theme: Callback<()>,
    on_resume: Callback<()>,
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    let links = props.sections.iter().map(|id| {
        let id = *id;
        let onclick = {
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |event: MouseEvent| {
                event.prevent_default();
                on_navigate.emit(id);
            })
        };
        let active = props.snapshot.active == Some(id);

        html! {
            <li>
                <a
                    href={format!("#{}", id.as_str())}
                    class={classes!("nav-link", active.then_some("is-active"))}
                    aria-current={active.then_some("true")}
                    onclick={onclick}
                >
                    {id.label()}
                </a>
            </li>
        }
    });

    let on_toggle_menu = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| on_toggle_menu.emit(()))
    };
    let on_toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };
    let on_resume = {
        let on_resume = props.on_resume.clone();
        Callback::from(move |_: MouseEvent| on_resume.emit(()))
    };

    html! {
        <nav
            class={classes!(
                "site-nav",
                props.snapshot.scrolled.then_some("is-scrolled"),
                props.snapshot.menu_open.then_some("menu-open"),
            )}
            aria-label="Sections"
        >
            <a class="nav-brand" href="#top">{props.name.clone()}</a>
            <button
                class="menu-toggle"
                type="button"
                aria-label="Toggle navigation"
                aria-expanded={props.snapshot.menu_open.to_string()}
                onclick={on_toggle_menu}
            >
                <span aria-hidden="true">{"☰"}</span>
            </button>
            <ul class="nav-links">
                { for links }
            </ul>
            <div class="nav-actions">
                <button class="resume-button" type="button" onclick={on_resume}>{"Resume"}</button>
                <button
                    class="theme-toggle"
                    type="button"
                    aria-label={props.theme.toggle_label()}
                    aria-pressed={props.theme.pressed().to_string()}
                    onclick={on_toggle_theme}
                >
                    <span aria-hidden="true">{props.theme.icon()}</span>
                </button>
            </div>
        </nav>
    }
}

/// Drives a [`Carousel`] with a real interval and mirrors its index into
/// component state.
#[derive(Clone)]
struct CarouselDriver {
    carousel: Rc<RefCell<Carousel<Project>>>,
    timer: Rc<RefCell<Option<Interval>>>,
    index: UseStateHandle<usize>,
    log_level: LogLevel,
}

impl CarouselDriver {
    fn apply(&self, transition: impl FnOnce(&mut Carousel<Project>) -> TimerCommand) {
        let command = transition(&mut self.carousel.borrow_mut());

        match command {
            TimerCommand::Start { token, period } => {
                let driver = self.clone();
                let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
                let interval = Interval::new(millis, move || {
                    let advanced = driver.carousel.borrow_mut().tick(token);
                    if advanced {
                        driver.sync_index();
                    }
                });
                *self.timer.borrow_mut() = Some(interval);
                log_event(
                    self.log_level,
                    LogLevel::Debug,
                    "carousel_timer_started",
                    json!({ "periodMs": millis }),
                );
            }
            TimerCommand::Stop => {
                self.timer.borrow_mut().take();
                log_event(self.log_level, LogLevel::Debug, "carousel_timer_stopped", json!({}));
            }
            TimerCommand::Keep => {}
        }
    }

    fn navigate(&self, step: impl FnOnce(&mut Carousel<Project>)) {
        step(&mut self.carousel.borrow_mut());
        self.sync_index();
    }

    fn sync_index(&self) {
        let current = self.carousel.borrow().current_index();
        self.index.set(current);
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCarouselProps {
    projects: Vec<Project>,
    revealed: bool,
    interval: Duration,
    log_level: LogLevel,
}

#[function_component(ProjectCarousel)]
fn project_carousel(props: &ProjectCarouselProps) -> Html {
    let carousel = {
        let projects = props.projects.clone();
        let interval = props.interval;
        use_mut_ref(move || Carousel::new(projects, interval))
    };
    let timer = use_mut_ref(|| None::<Interval>);
    let index = use_state_eq(|| 0usize);

    let driver = CarouselDriver {
        carousel: carousel.clone(),
        timer,
        index: index.clone(),
        log_level: props.log_level,
    };

    {
        let driver = driver.clone();
        use_effect_with((), move |_| {
            driver.apply(Carousel::start);
            move || driver.apply(Carousel::stop)
        });
    }

    // Touch taps fire mouseenter without a matching mouseleave; pointer
    // events always pair up when the finger lifts.
    let onpointerenter = {
        let driver = driver.clone();
        Callback::from(move |_: PointerEvent| driver.apply(|c| c.set_paused(true)))
    };
    let onpointerleave = {
        let driver = driver.clone();
        Callback::from(move |_: PointerEvent| driver.apply(|c| c.set_paused(false)))
    };
    let on_prev = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| driver.navigate(Carousel::prev))
    };
    let on_next = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| driver.navigate(Carousel::next))
    };

    let state = carousel.borrow();
    let current = *index;
    let slides: Html = state.items().iter().enumerate().map(|(position, project)| {
        html! {
            <div class={classes!("carousel-slide", (position == current).then_some("is-current"))}>
                { project_card(project) }
            </div>
        }
    }).collect();

    let dots: Html = (0..state.len()).map(|position| {
        let onclick = {
            let driver = driver.clone();
            Callback::from(move |_: MouseEvent| {
                driver.navigate(|c| {
                    c.go_to(position);
                })
            })
        };
        html! {
            <button
                type="button"
                class={classes!("carousel-dot", (position == current).then_some("is-current"))}
                aria-label={format!("Show project {}", position + 1)}
                onclick={onclick}
            />
        }
    }).collect();
    let track_style = state.track_style();
    let has_controls = state.len() > 1;
    drop(state);

    html! {
        <div class="carousel" onpointerenter={onpointerenter} onpointerleave={onpointerleave}>
            <RevealItem
                reveal={RevealKey::whole(RevealList::Projects)}
                revealed={props.revealed}
                class="carousel-viewport"
            >
                <div class="carousel-track" style={track_style}>
                    {slides}
                </div>
            </RevealItem>
            if has_controls {
                <div class="carousel-controls">
                    <button type="button" class="carousel-arrow" aria-label="Previous project" onclick={on_prev}>{"‹"}</button>
                    <div class="carousel-dots">{dots}</div>
                    <button type="button" class="carousel-arrow" aria-label="Next project" onclick={on_next}>{"›"}</button>
                </div>
            }
        </div>
    }
}

fn project_card(project: &Project) -> Html {
    let title = match project.link.as_deref() {
        Some(link) => html! {
            <ExternalLink href={AttrValue::from(link.to_string())} label={AttrValue::from(project.title.clone())} />
        },
        None => html! { {project.title.clone()} },
    };

    html! {
        <article class="card project-card">
            <h3>{title}</h3>
            <p class="card-subtitle">{project.subtitle.clone()}</p>
            { for project.description.iter().map(|paragraph| html! { <p class="muted">{paragraph.clone()}</p> }) }
            <ul class="tag-list">
                { for project.tags.iter().map(|tag| html! { <li class="tag">{tag.clone()}</li> }) }
            </ul>
        </article>
    }
}

struct SectionView<'a> {
    data: &'a PortfolioData,
    reveal: &'a RevealContext,
    config: &'a SiteConfig,
}

impl SectionView<'_> {
    fn revealed(&self, list: RevealList, index: usize) -> bool {
        self.reveal.is_revealed(RevealKey::new(list, index))
    }

    fn render(&self, position: usize, id: SectionId) -> Html {
        let body = match id {
            SectionId::Experience => self.experience(),
            SectionId::Skills => self.skills(),
            SectionId::Projects => self.projects(),
            SectionId::Awards => self.awards(),
            SectionId::Certifications => self.certifications(),
            SectionId::Education => self.education(),
        };

        html! {
            <RevealItem
                reveal={RevealKey::new(RevealList::Section, position)}
                revealed={self.revealed(RevealList::Section, position)}
                tag="section"
                id={AttrValue::from(id.as_str())}
                class="section-block"
            >
                <h2>{id.heading()}</h2>
                {body}
            </RevealItem>
        }
    }

    fn experience(&self) -> Html {
        let cards = self.data.experience.iter().enumerate().map(|(index, entry)| {
            html! {
                <RevealItem
                    reveal={RevealKey::new(RevealList::Experience, index)}
                    revealed={self.revealed(RevealList::Experience, index)}
                    class="card"
                >
                    <div class="card-header">
                        <div>
                            <h3>{entry.role.clone()}</h3>
                            <p class="card-subtitle">{entry.company.clone()}</p>
                        </div>
                        <span class="pill">{entry.duration.clone()}</span>
                    </div>
                    <ul class="achievements">
                        { for entry.achievements.iter().map(|line| html! { <li>{line.clone()}</li> }) }
                    </ul>
                </RevealItem>
            }
        });

        html! { <div class="card-stack">{ for cards }</div> }
    }

    fn skills(&self) -> Html {
        let mut position = 0;
        let groups = self.data.skills.iter().map(|group| {
            let badges = group
                .skills
                .iter()
                .map(|skill| {
                    let index = position;
                    position += 1;
                    html! {
                        <RevealItem
                            reveal={RevealKey::new(RevealList::Skills, index)}
                            revealed={self.revealed(RevealList::Skills, index)}
                            tag="span"
                            class="skill-badge"
                        >
                            if let Some(icon) = skill.icon.clone() {
                                <i class={icon} aria-hidden="true"></i>
                            }
                            {skill.name.clone()}
                        </RevealItem>
                    }
                })
                .collect::<Html>();

            html! {
                <div class="skill-group">
                    if self.data.skills.len() > 1 {
                        <h3>{group.title.clone()}</h3>
                    }
                    <div class="skill-badges">{badges}</div>
                </div>
            }
        });

        groups.collect::<Html>()
    }

    fn projects(&self) -> Html {
        let revealed = self.reveal.is_revealed(RevealKey::whole(RevealList::Projects));

        html! {
            <ProjectCarousel
                projects={self.data.projects.clone()}
                revealed={revealed}
                interval={self.config.carousel_interval}
                log_level={self.config.log_level}
            />
        }
    }

    fn awards(&self) -> Html {
        let cards = self.data.awards.iter().enumerate().map(|(index, award)| {
            html! {
                <RevealItem
                    reveal={RevealKey::new(RevealList::Awards, index)}
                    revealed={self.revealed(RevealList::Awards, index)}
                    class="card award-card"
                >
                    <div class="card-header">
                        <div>
                            <h3>{award.title.clone()}</h3>
                            <p class="card-subtitle">{award.organization.clone()}</p>
                        </div>
                        <span class="pill">{award.date.clone()}</span>
                    </div>
                    <p class="muted">{award.description.clone()}</p>
                </RevealItem>
            }
        });

        html! { <div class="card-stack">{ for cards }</div> }
    }

    fn certifications(&self) -> Html {
        let cards = self.data.certifications.iter().enumerate().map(|(index, cert)| {
            let title = match cert.link.as_deref() {
                Some(link) => html! {
                    <ExternalLink href={AttrValue::from(link.to_string())} label={AttrValue::from(cert.title.clone())} />
                },
                None => html! { {cert.title.clone()} },
            };

            html! {
                <RevealItem
                    reveal={RevealKey::new(RevealList::Certifications, index)}
                    revealed={self.revealed(RevealList::Certifications, index)}
                    class="card cert-card"
                >
                    <h3>{title}</h3>
                    <p class="muted">{format!("{} • {}", cert.issuer, cert.date)}</p>
                </RevealItem>
            }
        });

        html! { <div class="card-stack">{ for cards }</div> }
    }

    fn education(&self) -> Html {
        let entries = self.data.education.iter().enumerate().map(|(index, entry)| {
            html! {
                <RevealItem
                    reveal={RevealKey::new(RevealList::Education, index)}
                    revealed={self.revealed(RevealList::Education, index)}
                    class="timeline-item"
                >
                    <span class="timeline-node" aria-hidden="true"></span>
                    <div class="card">
                        <div class="card-header">
                            <div>
                                <h3>{entry.degree.clone()}</h3>
                                <p class="card-subtitle">{entry.institute.clone()}</p>
                            </div>
                            <span class="pill">{entry.year.clone()}</span>
                        </div>
                        <p class="muted">{entry.gpa.clone()}</p>
                    </div>
                </RevealItem>
            }
        });

        html! { <div class="timeline">{ for entries }</div> }
    }
}

#[derive(Properties, PartialEq)]
struct PortfolioProps {
    data: Rc<PortfolioData>,
    config: Rc<SiteConfig>,
}

#[function_component(Portfolio)]
fn portfolio(props: &PortfolioProps) -> Html {
    let config = props.config.clone();
    let sections = props.data.sections();

    let theme = use_state_eq(ThemeStore::default);
    let navigator = {
        let config = config.clone();
        use_mut_ref(move || ScrollSpyNavigator::new(&config))
    };
    let nav_snapshot = use_state_eq(|| NavSnapshot::of(&navigator.borrow()));
    let pointer = use_state_eq(|| (0.0_f64, 0.0_f64));

    let force_update = use_force_update();
    let reveal = {
        let log_level = config.log_level;
        use_memo((), move |_| {
            let on_reveal = Callback::from(move |_key: RevealKey| force_update.force_update());
            RevealContext(RevealDispatcher::new(on_reveal, log_level))
        })
    };

    {
        let current = theme.current_mode();
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    {
        let navigator = navigator.clone();
        let nav_snapshot = nav_snapshot.clone();
        let pointer = pointer.clone();
        let sections = sections.clone();
        let log_level = config.log_level;
        use_effect_with((), move |_| {
            let recompute = {
                let navigator = navigator.clone();
                let nav_snapshot = nav_snapshot.clone();
                move || {
                    let scroll_y = scroll_offset();
                    let anchors = measure_anchors(&sections);
                    let activated = navigator.borrow_mut().on_scroll(scroll_y, &anchors);
                    if let Some(section) = activated {
                        log_event(
                            log_level,
                            LogLevel::Info,
                            "section_activated",
                            json!({ "section": section.as_str(), "scrollY": scroll_y }),
                        );
                    }
                    nav_snapshot.set(NavSnapshot::of(&navigator.borrow()));
                }
            };

            recompute();

            let listeners = window().map(|win| {
                let scroll = EventListener::new(&win, "scroll", move |_: &Event| recompute());

                let resize = {
                    let navigator = navigator.clone();
                    let nav_snapshot = nav_snapshot.clone();
                    EventListener::new(&win, "resize", move |_: &Event| {
                        navigator.borrow_mut().on_resize(viewport_width());
                        nav_snapshot.set(NavSnapshot::of(&navigator.borrow()));
                    })
                };

                let pointer_move = EventListener::new(&win, "mousemove", move |event: &Event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        pointer.set((f64::from(event.client_x()), f64::from(event.client_y())));
                    }
                });

                [scroll, resize, pointer_move]
            });

            move || drop(listeners)
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        let log_level = config.log_level;
        Callback::from(move |()| {
            let mut next = *theme;
            next.toggle();
            apply_theme_with_transition(next.current_mode());
            log_event(
                log_level,
                LogLevel::Info,
                "theme_toggled",
                json!({ "mode": next.current_mode().as_str() }),
            );
            theme.set(next);
        })
    };

    let on_navigate = {
        let navigator = navigator.clone();
        let nav_snapshot = nav_snapshot.clone();
        let sections = sections.clone();
        Callback::from(move |id: SectionId| {
            let anchors = measure_anchors(&sections);
            let target = navigator.borrow_mut().scroll_to(id, &anchors);
            if let Some(top) = target {
                smooth_scroll_to(top);
            }
            nav_snapshot.set(NavSnapshot::of(&navigator.borrow()));
        })
    };

    let on_toggle_menu = {
        let navigator = navigator.clone();
        let nav_snapshot = nav_snapshot.clone();
        Callback::from(move |()| {
            navigator.borrow_mut().toggle_menu();
            nav_snapshot.set(NavSnapshot::of(&navigator.borrow()));
        })
    };

    let on_resume = {
        let path = config.resume_path.clone();
        let file_name = config.resume_file_name.clone();
        let log_level = config.log_level;
        Callback::from(move |()| download_resume(path.clone(), file_name.clone(), log_level))
    };

    let personal = &props.data.personal;
    let mode = theme.current_mode();
    let view = SectionView {
        data: &props.data,
        reveal: &reveal,
        config: &config,
    };
    let rendered_sections = sections
        .iter()
        .enumerate()
        .map(|(position, id)| view.render(position, *id))
        .collect::<Html>();

    html! {
        <ContextProvider<RevealContext> context={(*reveal).clone()}>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <div
                class="spotlight"
                style={spotlight_background(mode, pointer.0, pointer.1)}
                aria-hidden="true"
            />
            <NavBar
                name={AttrValue::from(personal.name.clone())}
                sections={sections.clone()}
                snapshot={*nav_snapshot}
                theme={mode}
                on_navigate={on_navigate}
                on_toggle_menu={on_toggle_menu}
                on_toggle_theme={on_toggle_theme}
                on_resume={on_resume}
            />
            <div class="page-shell">
                <header id="top" class="hero" aria-labelledby="identity-heading">
                    <p class="hero-kicker">{"Hi, my name is"}</p>
                    <h1 id="identity-heading">{personal.name.clone()}<span class="accent">{"."}</span></h1>
                    <p class="hero-role">{personal.role.clone()}</p>
                    <p class="hero-about">{personal.about.clone()}</p>
                    <div class="hero-actions">
                        <ExternalLink href={AttrValue::from(personal.github.clone())} label="GitHub" class="button" />
                        <ExternalLink href={AttrValue::from(personal.linkedin.clone())} label="LinkedIn" class="button primary" />
                        <a class="button" href={format!("mailto:{}", personal.email)}>{"Email"}</a>
                    </div>
                </header>

                <main id="content">
                    {rendered_sections}
                </main>

                <footer class="site-footer">
                    <p>{"Designed by "}<span class="accent">{personal.name.clone()}</span></p>
                </footer>
            </div>
        </ContextProvider<RevealContext>>
    }
}

#[derive(Properties, PartialEq)]
struct ContentErrorNoticeProps {
    message: AttrValue,
}

#[function_component(ContentErrorNotice)]
fn content_error_notice(props: &ContentErrorNoticeProps) -> Html {
    html! {
        <main class="page-shell config-error" role="alert">
            <h1>{"Content configuration error"}</h1>
            <p>{props.message.clone()}</p>
        </main>
    }
}

fn load_content(config: &SiteConfig) -> Result<Rc<PortfolioData>, String> {
    match PortfolioData::load_embedded() {
        Ok(data) => {
            log_event(
                config.log_level,
                LogLevel::Info,
                "content_loaded",
                json!({
                    "sections": data.sections().iter().map(|id| id.as_str()).collect::<Vec<_>>(),
                    "projects": data.projects.len(),
                    "skills": data.skill_count(),
                }),
            );
            Ok(Rc::new(data))
        }
        Err(error) => {
            log_event(
                config.log_level,
                LogLevel::Warn,
                "content_invalid",
                json!({ "error": error.to_string() }),
            );
            Err(error.to_string())
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| SiteConfig::from_build_env());
    let content = {
        let config = config.clone();
        use_memo((), move |_| load_content(&config))
    };

    match &*content {
        Ok(data) => html! { <Portfolio data={data.clone()} config={config.clone()} /> },
        Err(message) => html! { <ContentErrorNotice message={AttrValue::from(message.clone())} /> },
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
