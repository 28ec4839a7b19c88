//! Auto-dismissing copy confirmation.
//!
//! Each [`CopyNotice::show`] makes the notice visible and schedules its own
//! hide. Earlier timers are not cancelled, so two copies in quick
//! succession race: the first timer can hide the second notice before its
//! full duration has passed.

use std::time::Duration;

use web_time::Instant;

use crate::constants::NOTICE_DURATION_MS;

/// The page element that displays the copy confirmation.
pub trait NoticeSurface: Clone + 'static {
    fn set_visible(&self, visible: bool);
}

/// One-shot deferred execution on the UI loop.
pub trait Timer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Copy confirmation with a fixed display duration.
pub struct CopyNotice<S, T> {
    surface: S,
    timer: T,
    duration: Duration,
}

impl<S: NoticeSurface, T: Timer> CopyNotice<S, T> {
    pub fn new(surface: S, timer: T) -> Self {
        Self::with_duration(surface, timer, Duration::from_millis(NOTICE_DURATION_MS))
    }

    pub fn with_duration(surface: S, timer: T, duration: Duration) -> Self {
        Self {
            surface,
            timer,
            duration,
        }
    }

    /// Show the notice now and hide it once the duration has elapsed.
    pub fn show(&self) {
        self.surface.set_visible(true);

        let surface = self.surface.clone();
        let shown_at = Instant::now();
        self.timer.schedule(
            self.duration,
            Box::new(move || {
                surface.set_visible(false);
                log::debug!("copy notice hidden after {:?}", shown_at.elapsed());
            }),
        );
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualTimer, MockNotice};

    #[test]
    fn test_visible_immediately_then_hidden_after_duration() {
        let surface = MockNotice::default();
        let timer = ManualTimer::default();
        let notice = CopyNotice::new(surface.clone(), timer.clone());

        notice.show();
        assert!(surface.visible());

        timer.advance(Duration::from_millis(1999));
        assert!(surface.visible());

        timer.advance(Duration::from_millis(1));
        assert!(!surface.visible());
    }

    #[test]
    fn test_rapid_shows_do_not_cancel_earlier_timer() {
        let surface = MockNotice::default();
        let timer = ManualTimer::default();
        let notice = CopyNotice::new(surface.clone(), timer.clone());

        notice.show();
        timer.advance(Duration::from_millis(1500));
        notice.show();

        // The first timer fires 500ms into the second notice
        timer.advance(Duration::from_millis(500));
        assert!(!surface.visible());
        assert_eq!(timer.pending(), 1);

        timer.advance(Duration::from_millis(1500));
        assert_eq!(timer.pending(), 0);
        assert!(!surface.visible());
    }

    #[test]
    fn test_custom_duration() {
        let surface = MockNotice::default();
        let timer = ManualTimer::default();
        let notice =
            CopyNotice::with_duration(surface.clone(), timer.clone(), Duration::from_millis(250));

        notice.show();
        assert_eq!(notice.duration(), Duration::from_millis(250));
        timer.advance(Duration::from_millis(250));
        assert!(!surface.visible());
    }
}
