#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// `power1.out`, the default for every tween on the page.
    Power1Out,
    /// `power1.inOut`
    Power1InOut,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Power1Out
    }
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// A one-shot forward animation that starts `delay_ms` after it is kicked off.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub delay_ms: f64,
    pub duration_ms: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            delay_ms: 0.0,
            duration_ms,
            ease: Ease::default(),
        }
    }

    pub fn delayed(self, delay_ms: f64) -> Self {
        Self { delay_ms, ..self }
    }

    pub fn value(&self, elapsed_ms: f64) -> f64 {
        let local = elapsed_ms - self.delay_ms;
        if local <= 0.0 {
            return 0.0;
        }
        if self.duration_ms <= 0.0 || local >= self.duration_ms {
            return 1.0;
        }
        self.ease.apply(local / self.duration_ms)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.delay_ms + self.duration_ms
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Paused,
    Forward,
    Reverse,
}

/// Playback position of a timeline that can be played and reversed from
/// wherever it currently is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playhead {
    position_ms: f64,
    duration_ms: f64,
    direction: Direction,
}

impl Playhead {
    pub fn paused(duration_ms: f64) -> Self {
        Self {
            position_ms: 0.0,
            duration_ms: duration_ms.max(f64::EPSILON),
            direction: Direction::Paused,
        }
    }

    pub fn play(&mut self) {
        self.direction = Direction::Forward;
    }

    pub fn reverse(&mut self) {
        self.direction = Direction::Reverse;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Moves the playhead by `dt_ms` in its current direction and pauses it
    /// at either end. Returns whether the position changed.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        let before = self.position_ms;
        match self.direction {
            Direction::Paused => return false,
            Direction::Forward => {
                self.position_ms = (self.position_ms + dt_ms).min(self.duration_ms);
                if self.position_ms >= self.duration_ms {
                    self.direction = Direction::Paused;
                }
            }
            Direction::Reverse => {
                self.position_ms = (self.position_ms - dt_ms).max(0.0);
                if self.position_ms <= 0.0 {
                    self.direction = Direction::Paused;
                }
            }
        }
        self.position_ms != before
    }

    pub fn progress(&self) -> f64 {
        self.position_ms / self.duration_ms
    }

    pub fn is_at_rest(&self) -> bool {
        self.position_ms <= 0.0
    }

    pub fn is_idle(&self) -> bool {
        self.direction == Direction::Paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn eases_hit_both_ends() {
        for ease in [Ease::Linear, Ease::Power1Out, Ease::Power1InOut] {
            assert!(ease.apply(0.0).abs() < EPS);
            assert!((ease.apply(1.0) - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn power1_out_front_loads_motion() {
        assert!((Ease::Power1Out.apply(0.5) - 0.75).abs() < EPS);
        assert!((Ease::Power1InOut.apply(0.5) - 0.5).abs() < EPS);
        assert!((Ease::Power1InOut.apply(0.25) - 0.125).abs() < EPS);
    }

    #[test]
    fn tween_waits_for_its_delay() {
        let tween = Tween::new(500.0).delayed(100.0);
        assert_eq!(tween.value(0.0), 0.0);
        assert_eq!(tween.value(100.0), 0.0);
        assert!(tween.value(350.0) > 0.0);
        assert_eq!(tween.value(600.0), 1.0);
        assert!(!tween.is_finished(599.0));
        assert!(tween.is_finished(600.0));
    }

    #[test]
    fn zero_length_tween_completes_immediately() {
        let tween = Tween::new(0.0);
        assert_eq!(tween.value(1.0), 1.0);
        assert!(tween.is_finished(0.0));
    }

    #[test]
    fn playhead_stops_at_the_end() {
        let mut head = Playhead::paused(300.0);
        assert!(!head.advance(16.0));
        head.play();
        assert!(head.advance(200.0));
        assert!(head.advance(200.0));
        assert_eq!(head.progress(), 1.0);
        assert!(head.is_idle());
        assert!(!head.advance(16.0));
    }

    #[test]
    fn reverse_from_midway_returns_to_rest() {
        let mut head = Playhead::paused(300.0);
        head.play();
        head.advance(120.0);
        head.reverse();
        assert_eq!(head.direction(), Direction::Reverse);
        head.advance(100.0);
        assert!(!head.is_at_rest());
        head.advance(100.0);
        assert!(head.is_at_rest());
        assert!(head.is_idle());
    }
}
