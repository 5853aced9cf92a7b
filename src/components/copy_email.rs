use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::nav::clipboard::{self, CopyLabel, COPIED_LABEL};

#[derive(Properties, PartialEq)]
pub struct CopyEmailProps {
    pub email: AttrValue,
}

fn copy_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <rect x="9" y="9" width="13" height="13" rx="2" ry="2"></rect>
            <path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"></path>
        </svg>
    }
}

#[function_component(CopyEmail)]
pub fn copy_email(props: &CopyEmailProps) -> Html {
    let label = use_reducer(CopyLabel::default);
    let email_ref = use_node_ref();

    let onclick = {
        let label = label.dispatcher();
        let email_ref = email_ref.clone();
        Callback::from(move |_: MouseEvent| {
            // Copy what is on screen, not what was passed in.
            let Some(email) = email_ref.get().and_then(|node| node.text_content()) else {
                return;
            };
            let label = label.clone();
            spawn_local(async move {
                clipboard::copy_and_confirm(
                    async { clipboard::write_text(&email).await },
                    TimeoutFuture::new,
                    move |action| label.dispatch(action),
                )
                .await;
            });
        })
    };

    html! {
        <div class="email-copy">
            <span id="email-text" ref={email_ref}>{props.email.clone()}</span>
            <button id="copy-email-btn" class="copy-btn" aria-label="Copy email address" {onclick}>
                {
                    match *label {
                        CopyLabel::Icon => copy_icon(),
                        CopyLabel::Copied => html! { {COPIED_LABEL} },
                    }
                }
            </button>
        </div>
    }
}
