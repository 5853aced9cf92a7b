use super::tween::{lerp, Tween};

pub const REVEAL_OFFSET_PX: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    ProjectCard,
    Section,
}

impl RevealKind {
    pub const ALL: [RevealKind; 2] = [RevealKind::ProjectCard, RevealKind::Section];

    pub fn selector(self) -> &'static str {
        match self {
            RevealKind::ProjectCard => ".project-card",
            RevealKind::Section => ".animate-on-scroll",
        }
    }

    /// Selector for the animated children, or `None` to animate the element.
    pub fn children(self) -> Option<&'static str> {
        match self {
            RevealKind::ProjectCard => Some("h3, p, div"),
            RevealKind::Section => None,
        }
    }

    pub fn threshold(self) -> f64 {
        match self {
            RevealKind::ProjectCard => 0.85,
            RevealKind::Section => 0.90,
        }
    }

    fn duration_ms(self) -> f64 {
        match self {
            RevealKind::ProjectCard => 500.0,
            RevealKind::Section => 600.0,
        }
    }

    fn stagger_ms(self) -> f64 {
        match self {
            RevealKind::ProjectCard => 100.0,
            RevealKind::Section => 0.0,
        }
    }

    pub fn tween(self, index: usize) -> Tween {
        Tween::new(self.duration_ms()).delayed(self.stagger_ms() * index as f64)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    threshold: f64,
    fired: bool,
}

impl RevealTrigger {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            fired: false,
        }
    }

    /// Returns `true` the first time `top` is at or above the threshold line.
    /// Elements already scrolled past on load count as crossed.
    pub fn check(&mut self, top: f64, viewport_height: f64) -> bool {
        if self.fired || top > viewport_height * self.threshold {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub offset_y: f64,
}

impl RevealStyle {
    pub const HIDDEN: RevealStyle = RevealStyle {
        opacity: 0.0,
        offset_y: REVEAL_OFFSET_PX,
    };

    pub fn at(progress: f64) -> Self {
        Self {
            opacity: lerp(0.0, 1.0, progress),
            offset_y: lerp(REVEAL_OFFSET_PX, 0.0, progress),
        }
    }

    pub fn transform(&self) -> String {
        format!("translateY({}px)", self.offset_y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Waiting,
    /// Triggered; the clock starts on the next frame.
    Pending,
    Running { started_at: f64 },
    Done,
}

#[derive(Debug)]
pub struct RevealGroup<T> {
    trigger: RevealTrigger,
    targets: Vec<(T, Tween)>,
    phase: Phase,
    armed: bool,
    self_triggered: bool,
}

impl<T> RevealGroup<T> {
    pub fn new(kind: RevealKind, targets: Vec<T>) -> Self {
        let targets = targets
            .into_iter()
            .enumerate()
            .map(|(i, target)| (target, kind.tween(i)))
            .collect();
        Self {
            trigger: RevealTrigger::new(kind.threshold()),
            targets,
            phase: Phase::Waiting,
            armed: false,
            self_triggered: kind.children().is_none(),
        }
    }

    pub fn targets(&self) -> impl Iterator<Item = &T> {
        self.targets.iter().map(|(target, _)| target)
    }

    /// Feed the trigger element's measured top edge. Once a self-revealing
    /// element has been hidden its box sits `REVEAL_OFFSET_PX` lower, which is
    /// taken back out here.
    pub fn check(&mut self, top: f64, viewport_height: f64) {
        let top = if self.armed && self.self_triggered {
            top - REVEAL_OFFSET_PX
        } else {
            top
        };
        if self.trigger.check(top, viewport_height) {
            self.phase = Phase::Pending;
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Pending | Phase::Running { .. })
    }

    pub fn needs_frame(&self) -> bool {
        !self.armed || self.is_animating()
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Styles for every target at frame time `now`. The first frame hides
    /// targets that have not been triggered yet; idle groups return nothing.
    pub fn frame(&mut self, now: f64) -> Vec<(&T, RevealStyle)> {
        let arming = !self.armed;
        self.armed = true;
        let started_at = match self.phase {
            Phase::Waiting if arming => {
                return self
                    .targets
                    .iter()
                    .map(|(target, _)| (target, RevealStyle::HIDDEN))
                    .collect();
            }
            Phase::Waiting | Phase::Done => return Vec::new(),
            Phase::Pending => {
                self.phase = Phase::Running { started_at: now };
                now
            }
            Phase::Running { started_at } => started_at,
        };
        let elapsed = now - started_at;
        if self.targets.iter().all(|(_, tween)| tween.is_finished(elapsed)) {
            self.phase = Phase::Done;
        }
        self.targets
            .iter()
            .map(|(target, tween)| (target, RevealStyle::at(tween.value(elapsed))))
            .collect()
    }
}
