use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use super::hover::{HoverCard, HoverStyle, CARD_SELECTOR, TITLE_SELECTOR};
use super::reveal::{RevealGroup, RevealKind, RevealStyle};
use crate::dom::{self, set_style};
use crate::frame_loop::{frame_delta, FrameLoop};

struct Reveal {
    trigger: HtmlElement,
    group: RevealGroup<HtmlElement>,
}

#[derive(Default)]
struct AnimatorState {
    reveals: Vec<Reveal>,
    hovers: Vec<HoverCard<HtmlElement>>,
    last_frame: Option<f64>,
}

impl AnimatorState {
    fn check_reveals(&mut self, viewport_height: f64) {
        for reveal in self.reveals.iter_mut().filter(|r| !r.group.is_done()) {
            let top = reveal.trigger.get_bounding_client_rect().top();
            reveal.group.check(top, viewport_height);
        }
    }

    fn frame(&mut self, now: f64) {
        let dt = frame_delta(self.last_frame, now);
        self.last_frame = Some(now);

        for reveal in self.reveals.iter_mut().filter(|r| r.group.needs_frame()) {
            for (element, style) in reveal.group.frame(now) {
                apply_reveal(element, &style);
            }
        }

        for card in self.hovers.iter_mut() {
            if let Some(style) = card.frame(dt) {
                apply_hover(card, &style);
            }
        }
    }
}

fn apply_reveal(element: &HtmlElement, style: &RevealStyle) {
    set_style(element, "opacity", &style.opacity.to_string());
    set_style(element, "transform", &style.transform());
}

fn apply_hover(card: &HoverCard<HtmlElement>, style: &HoverStyle) {
    set_style(&card.card, "transform", &style.card_transform());
    if let Some(title) = &card.title {
        match style.title_color() {
            Some(color) => set_style(title, "color", &color),
            None => {
                let _ = title.style().remove_property("color");
            }
        }
    }
}

/// Drives the reveal-on-scroll and hover animations for the whole page.
/// Reveal targets are hidden on the first frame, once every listener is in
/// place.
pub struct Animator {
    _listeners: Vec<EventListener>,
    _frames: FrameLoop,
}

impl Animator {
    pub fn install(window: &Window, document: &Document) -> Self {
        let state = Rc::new(RefCell::new(AnimatorState::default()));
        let mut listeners = Vec::new();

        for kind in RevealKind::ALL {
            for trigger in dom::query_all(document, kind.selector()) {
                let targets = match kind.children() {
                    Some(children) => dom::query_all(&trigger, children),
                    None => vec![trigger.clone()],
                };
                state.borrow_mut().reveals.push(Reveal {
                    trigger,
                    group: RevealGroup::new(kind, targets),
                });
            }
        }

        for (index, card) in dom::query_all(document, CARD_SELECTOR).into_iter().enumerate() {
            let title = card
                .query_selector(TITLE_SELECTOR)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());

            let enter_state = state.clone();
            listeners.push(EventListener::new(&card, "mouseenter", move |_| {
                if let Some(card) = enter_state.borrow_mut().hovers.get_mut(index) {
                    card.pointer_enter();
                }
            }));
            let leave_state = state.clone();
            listeners.push(EventListener::new(&card, "mouseleave", move |_| {
                if let Some(card) = leave_state.borrow_mut().hovers.get_mut(index) {
                    card.pointer_leave();
                }
            }));

            state.borrow_mut().hovers.push(HoverCard::new(card, title));
        }

        {
            let state = state.borrow();
            log::info!(
                "animations installed: {} reveal groups, {} hover cards",
                state.reveals.len(),
                state.hovers.len()
            );
        }

        for event in ["scroll", "resize"] {
            let scroll_state = state.clone();
            let scroll_window = window.clone();
            listeners.push(EventListener::new(window, event, move |_| {
                let (_, height) = dom::viewport(&scroll_window);
                scroll_state.borrow_mut().check_reveals(height);
            }));
        }
        // Elements already on screen reveal without waiting for a scroll.
        state.borrow_mut().check_reveals(dom::viewport(window).1);

        let frame_state = state.clone();
        let frames = FrameLoop::start(move |now| frame_state.borrow_mut().frame(now));

        Self {
            _listeners: listeners,
            _frames: frames,
        }
    }
}
