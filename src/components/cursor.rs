use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::dom::{self, set_style};
use crate::error::SetupError;
use crate::nav::cursor::{CursorState, GROW_CLASS, INTERACTIVE_SELECTOR};

fn render(cursor: &HtmlElement, state: &CursorState) {
    set_style(cursor, "left", &state.left_px());
    set_style(cursor, "top", &state.top_px());
    let _ = cursor.class_list().toggle_with_force(GROW_CLASS, state.grow);
}

fn follow_pointer(cursor: Option<HtmlElement>) -> Result<Vec<EventListener>, SetupError> {
    let cursor = cursor.ok_or(SetupError::MissingElement(".cursor"))?;
    let (window, document) = dom::window_and_document()?;
    let state = Rc::new(Cell::new(CursorState::default()));
    let mut listeners = Vec::new();

    {
        let cursor = cursor.clone();
        let state = state.clone();
        listeners.push(EventListener::new(&window, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else { return };
            let next = state.get().moved(event.client_x() as f64, event.client_y() as f64);
            state.set(next);
            render(&cursor, &next);
        }));
    }

    let interactive = dom::query_all(&document, INTERACTIVE_SELECTOR);
    for element in &interactive {
        let over_cursor = cursor.clone();
        let over_state = state.clone();
        listeners.push(EventListener::new(element, "mouseover", move |_| {
            let next = over_state.get().entered_interactive();
            over_state.set(next);
            render(&over_cursor, &next);
        }));

        let leave_cursor = cursor.clone();
        let leave_state = state.clone();
        listeners.push(EventListener::new(element, "mouseleave", move |_| {
            let next = leave_state.get().left_interactive();
            leave_state.set(next);
            render(&leave_cursor, &next);
        }));
    }
    log::debug!("cursor follows pointer, {} interactive elements", interactive.len());

    Ok(listeners)
}

#[function_component(Cursor)]
pub fn cursor() -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let listeners = follow_pointer(node.cast::<HtmlElement>()).unwrap_or_else(|err| {
                    err.log("cursor");
                    Vec::new()
                });
                move || drop(listeners)
            },
            (),
        );
    }

    html! {
        <>
            <div class="cursor" ref={node}></div>
            <style>
                {r#"
                    .cursor {
                        position: fixed;
                        top: -100px;
                        left: -100px;
                        width: 20px;
                        height: 20px;
                        border: 2px solid var(--accent-color);
                        border-radius: 50%;
                        pointer-events: none;
                        transform: translate(-50%, -50%);
                        transition: width 0.2s ease, height 0.2s ease, background 0.2s ease;
                        z-index: 1000;
                    }
                    .cursor.grow {
                        width: 48px;
                        height: 48px;
                        background: rgba(255, 140, 66, 0.15);
                    }
                    @media (hover: none) {
                        .cursor {
                            display: none;
                        }
                    }
                "#}
            </style>
        </>
    }
}
