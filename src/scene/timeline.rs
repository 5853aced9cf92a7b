use std::f32::consts::PI;

use glam::Vec3;

use crate::animation::tween::Ease;

const STEP_DURATION: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
}

impl ScrollRange {
    /// From the moment the content's top meets the top of the viewport to the
    /// moment its bottom meets the bottom of the viewport.
    pub fn for_content(content_top: f64, content_height: f64, viewport_height: f64) -> Self {
        Self {
            start: content_top,
            end: content_top + content_height - viewport_height,
        }
    }
}

/// Maps a scroll offset to timeline progress in `[0, 1]`. Content that does
/// not overflow the viewport never advances.
pub fn scroll_progress(scroll_y: f64, range: ScrollRange) -> f64 {
    let span = range.end - range.start;
    if span <= 0.0 {
        return 0.0;
    }
    ((scroll_y - range.start) / span).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    RocketPosition,
    RocketRotation,
    CameraPosition,
    StarsPosition,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenePose {
    pub rocket_position: Vec3,
    pub rocket_rotation: Vec3,
    pub camera_position: Vec3,
    pub stars_position: Vec3,
}

impl ScenePose {
    pub const INITIAL: ScenePose = ScenePose {
        rocket_position: Vec3::new(0.0, -4.0, 1.0),
        rocket_rotation: Vec3::ZERO,
        camera_position: Vec3::new(0.0, 0.0, 5.0),
        stars_position: Vec3::ZERO,
    };

    fn get_mut(&mut self, target: Target) -> &mut Vec3 {
        match target {
            Target::RocketPosition => &mut self.rocket_position,
            Target::RocketRotation => &mut self.rocket_rotation,
            Target::CameraPosition => &mut self.camera_position,
            Target::StarsPosition => &mut self.stars_position,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Step {
    target: Target,
    at: f32,
    to: [Option<f32>; 3],
}

/// A scroll-scrubbed sequence of keyframe tweens.
///
/// Each tween starts from the value its property has once every earlier tween
/// on that property has finished, so `pose` is a pure function of progress
/// and scrolling backwards replays it exactly in reverse.
#[derive(Clone, Debug)]
pub struct ScrollTimeline {
    steps: Vec<Step>,
    ease: Ease,
}

impl ScrollTimeline {
    pub fn launch() -> Self {
        Self::default()
            .to(Target::RocketPosition, 0.0, [None, Some(11.5), Some(-4.0)])
            .to(Target::RocketRotation, 0.0, [None, None, Some(PI * 0.25)])
            .to(Target::CameraPosition, 0.0, [None, None, Some(12.0)])
            .to(Target::CameraPosition, 0.8, [None, Some(11.0), Some(4.0)])
            .to(Target::StarsPosition, 0.0, [None, Some(-5.0), None])
    }

    fn to(mut self, target: Target, at: f32, to: [Option<f32>; 3]) -> Self {
        self.steps.push(Step { target, at, to });
        self.steps.sort_by(|a, b| a.at.total_cmp(&b.at));
        self
    }

    pub fn duration(&self) -> f32 {
        self.steps
            .iter()
            .map(|step| step.at + STEP_DURATION)
            .fold(0.0, f32::max)
    }

    pub fn pose(&self, progress: f64) -> ScenePose {
        let time = progress.clamp(0.0, 1.0) as f32 * self.duration();
        let mut pose = ScenePose::INITIAL;
        // Where each property ends up once the tweens seen so far complete.
        let mut settled = ScenePose::INITIAL;

        for step in &self.steps {
            let started = time >= step.at;
            let t = self.ease.apply(((time - step.at) / STEP_DURATION) as f64) as f32;
            let from = *settled.get_mut(step.target);
            let current = pose.get_mut(step.target);
            let rest = settled.get_mut(step.target);
            for axis in 0..3 {
                let Some(to) = step.to[axis] else { continue };
                if started {
                    current[axis] = from[axis] + (to - from[axis]) * t;
                }
                rest[axis] = to;
            }
        }
        pose
    }
}

impl Default for ScrollTimeline {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            ease: Ease::Power1Out,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubFollower {
    current: f64,
    lag_secs: f64,
}

impl ScrubFollower {
    pub const DEFAULT_LAG_SECS: f64 = 1.0;

    pub fn new(initial: f64, lag_secs: f64) -> Self {
        Self {
            current: initial,
            lag_secs,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    /// Moves towards `target`; about 98% of the gap closes within one lag.
    pub fn step(&mut self, target: f64, dt_ms: f64) -> f64 {
        if self.lag_secs <= 0.0 {
            self.current = target;
            return self.current;
        }
        let time_constant = self.lag_secs / 4.0;
        let alpha = 1.0 - (-(dt_ms / 1000.0) / time_constant).exp();
        self.current += (target - self.current) * alpha;
        if (target - self.current).abs() < 1e-4 {
            self.current = target;
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        a.abs_diff_eq(b, 1e-5)
    }

    #[test]
    fn progress_is_clamped_to_the_range() {
        let range = ScrollRange::for_content(0.0, 3000.0, 1000.0);
        assert_eq!(scroll_progress(-50.0, range), 0.0);
        assert_eq!(scroll_progress(0.0, range), 0.0);
        assert_eq!(scroll_progress(1000.0, range), 0.5);
        assert_eq!(scroll_progress(2000.0, range), 1.0);
        assert_eq!(scroll_progress(2500.0, range), 1.0);
    }

    #[test]
    fn content_that_fits_never_scrolls_the_timeline() {
        let range = ScrollRange::for_content(0.0, 600.0, 1000.0);
        assert_eq!(scroll_progress(0.0, range), 0.0);
        assert_eq!(scroll_progress(400.0, range), 0.0);
    }

    #[test]
    fn range_starts_at_the_content_top() {
        let range = ScrollRange::for_content(200.0, 2200.0, 1000.0);
        assert_eq!(range, ScrollRange { start: 200.0, end: 1400.0 });
        assert_eq!(scroll_progress(800.0, range), 0.5);
    }

    #[test]
    fn launch_runs_one_point_three_units() {
        assert!((ScrollTimeline::launch().duration() - 1.3).abs() < 1e-6);
    }

    #[test]
    fn start_pose_is_the_initial_layout() {
        let pose = ScrollTimeline::launch().pose(0.0);
        assert!(close(pose.rocket_position, Vec3::new(0.0, -4.0, 1.0)));
        assert!(close(pose.camera_position, Vec3::new(0.0, 0.0, 5.0)));
        assert!(close(pose.stars_position, Vec3::ZERO));
        assert!(close(pose.rocket_rotation, Vec3::ZERO));
    }

    #[test]
    fn midway_rocket_has_landed_and_camera_is_pulled_back() {
        let pose = ScrollTimeline::launch().pose(0.5);
        assert!(close(pose.rocket_position, Vec3::new(0.0, 11.5, -4.0)));
        assert!(close(pose.rocket_rotation, Vec3::new(0.0, 0.0, PI * 0.25)));
        assert!(close(pose.camera_position, Vec3::new(0.0, 0.0, 12.0)));
        assert!(close(pose.stars_position, Vec3::new(0.0, -5.0, 0.0)));
    }

    #[test]
    fn end_pose_frames_the_moon() {
        let pose = ScrollTimeline::launch().pose(1.0);
        assert!(close(pose.rocket_position, Vec3::new(0.0, 11.5, -4.0)));
        assert!(close(pose.camera_position, Vec3::new(0.0, 11.0, 4.0)));
    }

    #[test]
    fn second_camera_move_starts_from_the_first_ones_end() {
        let timeline = ScrollTimeline::launch();
        // t = 0.8 is the instant the second camera tween begins.
        let pose = timeline.pose(0.8 / 1.3);
        assert!(close(pose.camera_position, Vec3::new(0.0, 0.0, 12.0)));
        let later = timeline.pose(1.0 / 1.3);
        assert!(later.camera_position.z < 12.0 && later.camera_position.z > 4.0);
        assert!(later.camera_position.y > 0.0 && later.camera_position.y < 11.0);
    }

    #[test]
    fn pose_is_reversible() {
        let timeline = ScrollTimeline::launch();
        let forward: Vec<_> = (0..=20).map(|i| timeline.pose(i as f64 / 20.0)).collect();
        let backward: Vec<_> = (0..=20).rev().map(|i| timeline.pose(i as f64 / 20.0)).collect();
        for (a, b) in forward.iter().zip(backward.iter().rev()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn rocket_climbs_monotonically() {
        let timeline = ScrollTimeline::launch();
        let heights: Vec<f32> = (0..=10).map(|i| timeline.pose(i as f64 / 10.0).rocket_position.y).collect();
        assert!(heights.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn follower_converges_within_a_couple_of_lags() {
        let mut follower = ScrubFollower::new(0.0, ScrubFollower::DEFAULT_LAG_SECS);
        let first = follower.step(1.0, 16.0);
        assert!(first > 0.0 && first < 0.2);
        for _ in 0..200 {
            follower.step(1.0, 16.0);
        }
        assert_eq!(follower.current(), 1.0);
    }

    #[test]
    fn zero_lag_snaps() {
        let mut follower = ScrubFollower::new(0.2, 0.0);
        assert_eq!(follower.step(0.7, 16.0), 0.7);
    }
}
