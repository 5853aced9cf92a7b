use std::rc::Rc;

use yew::prelude::*;

pub const OPEN_CLASS: &str = "is-open";
pub const SCROLL_LOCK_CLASS: &str = "body-no-scroll";

pub enum MenuAction {
    Toggle,
    LinkActivated,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

/// `display` values for the two toggle glyphs. Exactly one is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuIcons {
    pub hamburger: &'static str,
    pub close: &'static str,
}

impl MenuState {
    pub fn icons(&self) -> MenuIcons {
        if self.open {
            MenuIcons {
                hamburger: "none",
                close: "block",
            }
        } else {
            MenuIcons {
                hamburger: "block",
                close: "none",
            }
        }
    }

    pub fn panel_class(&self) -> Option<&'static str> {
        self.open.then_some(OPEN_CLASS)
    }

    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    fn apply(self, action: MenuAction) -> Self {
        match action {
            MenuAction::Toggle => MenuState { open: !self.open },
            MenuAction::LinkActivated => MenuState { open: false },
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Mirror the scroll lock onto `<body>`.
pub fn sync_scroll_lock(state: &MenuState) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body
            .class_list()
            .toggle_with_force(SCROLL_LOCK_CLASS, state.scroll_locked());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: MenuState, action: MenuAction) -> MenuState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn starts_closed_with_hamburger_showing() {
        let state = MenuState::default();
        assert!(!state.open);
        assert_eq!(state.icons().hamburger, "block");
        assert_eq!(state.icons().close, "none");
        assert_eq!(state.panel_class(), None);
        assert!(!state.scroll_locked());
    }

    #[test]
    fn toggle_opens_locks_scroll_and_swaps_icon() {
        let state = reduce(MenuState::default(), MenuAction::Toggle);
        assert!(state.open);
        assert!(state.scroll_locked());
        assert_eq!(state.panel_class(), Some(OPEN_CLASS));
        assert_eq!(
            state.icons(),
            MenuIcons {
                hamburger: "none",
                close: "block"
            }
        );
    }

    #[test]
    fn toggling_twice_restores_everything() {
        let initial = MenuState::default();
        let twice = reduce(reduce(initial, MenuAction::Toggle), MenuAction::Toggle);
        assert_eq!(twice, initial);
        assert_eq!(twice.icons(), initial.icons());
        assert_eq!(twice.scroll_locked(), initial.scroll_locked());
    }

    #[test]
    fn link_closes_an_open_menu() {
        let open = reduce(MenuState::default(), MenuAction::Toggle);
        let closed = reduce(open, MenuAction::LinkActivated);
        assert!(!closed.open);
        assert!(!closed.scroll_locked());
        assert_eq!(closed.icons(), MenuState::default().icons());
    }

    #[test]
    fn link_on_closed_menu_keeps_the_same_state() {
        let closed = Rc::new(MenuState::default());
        let after = closed.clone().reduce(MenuAction::LinkActivated);
        assert!(Rc::ptr_eq(&closed, &after));
    }

    #[test]
    fn exactly_one_icon_visible_in_every_state() {
        for open in [false, true] {
            let icons = MenuState { open }.icons();
            assert_ne!(icons.hamburger == "none", icons.close == "none");
        }
    }
}
