use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};

type Schedule<H> = fn(Box<dyn FnOnce(f64)>) -> H;

/// A `requestAnimationFrame` loop that reschedules itself every frame.
///
/// Dropping the handle cancels the queued frame and frees the callback.
pub struct FrameLoop<H = AnimationFrame> {
    inner: Rc<Inner<H>>,
}

struct Inner<H> {
    on_frame: RefCell<Box<dyn FnMut(f64)>>,
    pending: RefCell<Option<H>>,
    schedule: Schedule<H>,
}

impl FrameLoop {
    pub fn start<F>(on_frame: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        Self::with_scheduler(on_frame, |callback| request_animation_frame(callback))
    }
}

impl<H: 'static> FrameLoop<H> {
    fn with_scheduler<F>(on_frame: F, schedule: Schedule<H>) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        let inner = Rc::new(Inner {
            on_frame: RefCell::new(Box::new(on_frame)),
            pending: RefCell::new(None),
            schedule,
        });
        Inner::schedule_next(&inner);
        Self { inner }
    }
}

impl<H: 'static> Inner<H> {
    // Queued callbacks only hold a weak reference, so the loop never owns itself.
    fn schedule_next(this: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(this);
        let handle = (this.schedule)(Box::new(move |timestamp| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.borrow_mut().take();
            (inner.on_frame.borrow_mut())(timestamp);
            Inner::schedule_next(&inner);
        }));
        *this.pending.borrow_mut() = Some(handle);
    }
}

impl<H> Drop for FrameLoop<H> {
    fn drop(&mut self) {
        self.inner.pending.borrow_mut().take();
    }
}

/// Milliseconds between two frame timestamps, with the first frame and
/// clock hiccups reported as zero.
pub fn frame_delta(previous: Option<f64>, now: f64) -> f64 {
    match previous {
        Some(prev) if now > prev => now - prev,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    thread_local! {
        static QUEUE: RefCell<Vec<Box<dyn FnOnce(f64)>>> = RefCell::new(Vec::new());
    }

    fn queue_frame(callback: Box<dyn FnOnce(f64)>) {
        QUEUE.with(|queue| queue.borrow_mut().push(callback));
    }

    fn run_queued(timestamp: f64) -> usize {
        let queued: Vec<_> = QUEUE.with(|queue| queue.borrow_mut().drain(..).collect());
        let count = queued.len();
        for callback in queued {
            callback(timestamp);
        }
        count
    }

    #[test]
    fn first_frame_has_no_delta() {
        assert_eq!(frame_delta(None, 1234.0), 0.0);
    }

    #[test]
    fn delta_never_goes_negative() {
        assert_eq!(frame_delta(Some(20.0), 36.5), 16.5);
        assert_eq!(frame_delta(Some(50.0), 40.0), 0.0);
    }

    #[test]
    fn reschedules_after_every_frame() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let record = seen.clone();
        let _frames = FrameLoop::<()>::with_scheduler(move |ts| record.borrow_mut().push(ts), queue_frame);

        assert_eq!(run_queued(16.0), 1);
        assert_eq!(run_queued(32.0), 1);
        assert_eq!(*seen.borrow(), vec![16.0, 32.0]);
        assert_eq!(QUEUE.with(|queue| queue.borrow().len()), 1);
    }

    #[test]
    fn dropping_the_handle_releases_the_callback() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let frames = FrameLoop::<()>::with_scheduler(move |_| counter.set(counter.get() + 1), queue_frame);
        run_queued(16.0);
        assert_eq!(Rc::strong_count(&calls), 2);

        drop(frames);
        assert_eq!(Rc::strong_count(&calls), 1);

        // A frame that was already queued runs as a no-op and queues nothing.
        assert_eq!(run_queued(32.0), 1);
        assert_eq!(calls.get(), 1);
        assert_eq!(run_queued(48.0), 0);
    }
}
