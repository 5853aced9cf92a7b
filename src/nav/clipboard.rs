use std::fmt::Debug;
use std::future::Future;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;

pub const CONFIRMATION_MS: u32 = 2_000;
pub const COPIED_LABEL: &str = "Copied!";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["navigator", "clipboard"], js_name = writeText)]
    fn clipboard_write_text(text: &str) -> Result<js_sys::Promise, JsValue>;
}

pub async fn write_text(text: &str) -> Result<(), JsValue> {
    let promise = clipboard_write_text(text)?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Runs one copy: on a successful `write` the label flips to `Copied!`, and
/// `sleep(CONFIRMATION_MS)` later it flips back. A rejected write changes
/// nothing.
pub async fn copy_and_confirm<W, E, S, F>(write: W, sleep: S, mut dispatch: impl FnMut(CopyAction))
where
    W: Future<Output = Result<(), E>>,
    E: Debug,
    S: FnOnce(u32) -> F,
    F: Future<Output = ()>,
{
    match write.await {
        Ok(()) => {
            dispatch(CopyAction::WriteSucceeded);
            sleep(CONFIRMATION_MS).await;
            dispatch(CopyAction::ConfirmationElapsed);
        }
        Err(err) => log::debug!("clipboard write rejected: {:?}", err),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyLabel {
    #[default]
    Icon,
    Copied,
}

pub enum CopyAction {
    WriteSucceeded,
    ConfirmationElapsed,
}

impl Reducible for CopyLabel {
    type Action = CopyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            CopyAction::WriteSucceeded => CopyLabel::Copied,
            CopyAction::ConfirmationElapsed => CopyLabel::Icon,
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{ready, Ready};
    use std::cell::RefCell;

    fn reduce(label: CopyLabel, action: CopyAction) -> CopyLabel {
        *Rc::new(label).reduce(action)
    }

    #[test]
    fn success_shows_copied_then_reverts() {
        let shown = reduce(CopyLabel::default(), CopyAction::WriteSucceeded);
        assert_eq!(shown, CopyLabel::Copied);
        assert_eq!(reduce(shown, CopyAction::ConfirmationElapsed), CopyLabel::Icon);
    }

    #[test]
    fn repeated_success_stays_copied() {
        let label = Rc::new(CopyLabel::Copied);
        let again = label.clone().reduce(CopyAction::WriteSucceeded);
        assert!(Rc::ptr_eq(&label, &again));
    }

    fn run_copy(write: Ready<Result<(), &'static str>>) -> Vec<String> {
        let events = RefCell::new(Vec::new());
        let label = RefCell::new(Rc::new(CopyLabel::default()));
        block_on(copy_and_confirm(
            write,
            |ms| {
                events.borrow_mut().push(format!("sleep {}", ms));
                ready(())
            },
            |action| {
                let next = label.borrow().clone().reduce(action);
                events.borrow_mut().push(format!("{:?}", next));
                *label.borrow_mut() = next;
            },
        ));
        events.into_inner()
    }

    #[test]
    fn confirmation_lasts_two_seconds() {
        assert_eq!(run_copy(ready(Ok(()))), vec!["Copied", "sleep 2000", "Icon"]);
    }

    #[test]
    fn rejected_write_leaves_the_icon() {
        assert!(run_copy(ready(Err("denied"))).is_empty());
    }
}
