use super::tween::{lerp, Ease, Playhead};

pub const CARD_SELECTOR: &str = ".skill-category";
pub const TITLE_SELECTOR: &str = "h4";

const HOVER_DURATION_MS: f64 = 300.0;
const LIFT_PX: f64 = -5.0;
const HOVER_SCALE: f64 = 1.02;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverStyle {
    pub lift_px: f64,
    pub scale: f64,
    pub accent_pct: f64,
}

impl HoverStyle {
    pub const REST: HoverStyle = HoverStyle {
        lift_px: 0.0,
        scale: 1.0,
        accent_pct: 0.0,
    };

    /// The card moves on `power1.inOut`; the title colour keeps the default
    /// `power1.out`.
    pub fn at(progress: f64) -> Self {
        let card = Ease::Power1InOut.apply(progress);
        let title = Ease::Power1Out.apply(progress);
        Self {
            lift_px: lerp(0.0, LIFT_PX, card),
            scale: lerp(1.0, HOVER_SCALE, card),
            accent_pct: lerp(0.0, 100.0, title),
        }
    }

    pub fn is_rest(&self) -> bool {
        *self == Self::REST
    }

    pub fn card_transform(&self) -> String {
        format!("translateY({}px) scale({})", self.lift_px, self.scale)
    }

    /// Title colour, or `None` to fall back to the stylesheet.
    pub fn title_color(&self) -> Option<String> {
        if self.accent_pct <= 0.0 {
            return None;
        }
        Some(format!(
            "color-mix(in srgb, var(--accent-color) {:.1}%, var(--text-color))",
            self.accent_pct
        ))
    }
}

/// A card's paused hover timeline: pointer-enter plays it, pointer-leave
/// reverses it from wherever it got to.
#[derive(Debug)]
pub struct HoverCard<T> {
    pub card: T,
    pub title: Option<T>,
    playhead: Playhead,
}

impl<T> HoverCard<T> {
    pub fn new(card: T, title: Option<T>) -> Self {
        Self {
            card,
            title,
            playhead: Playhead::paused(HOVER_DURATION_MS),
        }
    }

    pub fn pointer_enter(&mut self) {
        self.playhead.play();
    }

    pub fn pointer_leave(&mut self) {
        self.playhead.reverse();
    }

    pub fn frame(&mut self, dt_ms: f64) -> Option<HoverStyle> {
        self.playhead
            .advance(dt_ms)
            .then(|| HoverStyle::at(self.playhead.progress()))
    }

    pub fn style(&self) -> HoverStyle {
        HoverStyle::at(self.playhead.progress())
    }
}
