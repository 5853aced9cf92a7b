use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;
use crate::error::SetupError;
use crate::nav::active_section::{
    ActiveSection, SectionHit, DETECTION_BAND_MARGIN, SECTION_ATTR, SECTION_SELECTOR,
};
use crate::nav::header::HeaderState;
use crate::nav::menu::{sync_scroll_lock, MenuAction, MenuState};

#[derive(Clone, Copy, PartialEq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "home", label: "Home" },
    NavItem { id: "about", label: "About" },
    NavItem { id: "projects", label: "Projects" },
    NavItem { id: "skills", label: "Skills" },
    NavItem { id: "contact", label: "Contact" },
];

/// Watches every `data-section` element through a band on the viewport
/// midline and forwards each batch of entries to `on_batch`.
struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl SectionObserver {
    fn install(on_batch: impl Fn(Vec<SectionHit>) + 'static) -> Result<Self, SetupError> {
        let (_, document) = dom::window_and_document()?;
        let sections = dom::query_all(&document, SECTION_SELECTOR);
        if sections.is_empty() {
            return Err(SetupError::MissingElement("section[data-section]"));
        }

        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| {
                    let section = entry.target().get_attribute(SECTION_ATTR);
                    SectionHit::new(entry.is_intersecting(), section.as_deref())
                })
                .collect();
            on_batch(batch);
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(DETECTION_BAND_MARGIN);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for section in &sections {
            observer.observe(section);
        }
        log::debug!("observing {} sections for nav highlighting", sections.len());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu = use_reducer(MenuState::default);
    let active = use_reducer(ActiveSection::default);
    let (_, scroll_y) = use_window_scroll();
    let header_state = HeaderState::from_scroll(scroll_y);

    use_effect_with_deps(
        move |state: &MenuState| {
            sync_scroll_lock(state);
            || ()
        },
        *menu,
    );

    {
        let dispatcher = active.dispatcher();
        use_effect_with_deps(
            move |_| {
                let observer = match SectionObserver::install(move |batch| dispatcher.dispatch(batch)) {
                    Ok(observer) => Some(observer),
                    Err(err) => {
                        err.log("active section tracking");
                        None
                    }
                };
                move || drop(observer)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Toggle))
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::LinkActivated))
    };

    let icons = menu.icons();

    html! {
        <header id="main-header" class={classes!("site-header", header_state.class())}>
            <a href="#home" class="logo">{"launchpad"}</a>
            <button
                id="menu-toggle"
                class="menu-toggle"
                aria-label="Toggle navigation"
                aria-expanded={menu.open.to_string()}
                onclick={toggle_menu}
            >
                <span class="hamburger-icon" style={format!("display: {};", icons.hamburger)}>{"☰"}</span>
                <span class="close-icon" style={format!("display: {};", icons.close)}>{"✕"}</span>
            </button>
            <nav id="main-nav" class={classes!("main-nav", menu.panel_class())}>
                {
                    for NAV_ITEMS.iter().map(|item| html! {
                        <a
                            href={format!("#{}", item.id)}
                            class={classes!("nav-link", active.is_active(item.id).then_some("active"))}
                            data-nav={item.id}
                            onclick={close_menu.clone()}
                        >
                            {item.label}
                        </a>
                    })
                }
            </nav>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1.5rem 2rem;
                        transition: background 0.3s ease, padding 0.3s ease;
                    }
                    .site-header.scrolled {
                        padding: 0.75rem 2rem;
                        background: rgba(10, 10, 20, 0.85);
                        backdrop-filter: blur(10px);
                    }
                    .logo {
                        font-weight: 700;
                        color: var(--text-color);
                        text-decoration: none;
                    }
                    .main-nav {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: var(--muted-color);
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover,
                    .nav-link.active {
                        color: var(--accent-color);
                    }
                    .menu-toggle {
                        display: none;
                        background: none;
                        border: none;
                        color: var(--text-color);
                        font-size: 1.5rem;
                    }
                    @media (max-width: 768px) {
                        .menu-toggle {
                            display: block;
                            z-index: 101;
                        }
                        .main-nav {
                            position: fixed;
                            inset: 0;
                            flex-direction: column;
                            align-items: center;
                            justify-content: center;
                            background: rgba(10, 10, 20, 0.97);
                            transform: translateX(100%);
                            transition: transform 0.3s ease;
                        }
                        .main-nav.is-open {
                            transform: translateX(0);
                        }
                    }
                    .body-no-scroll {
                        overflow: hidden;
                    }
                "#}
            </style>
        </header>
    }
}
