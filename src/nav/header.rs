/// Scroll offset past which the header switches to its compact style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub scrolled: bool,
}

impl HeaderState {
    pub fn from_scroll(scroll_y: f64) -> Self {
        Self {
            scrolled: scroll_y > SCROLLED_THRESHOLD_PX,
        }
    }

    pub fn class(&self) -> Option<&'static str> {
        self.scrolled.then_some("scrolled")
    }
}
