//! In-memory stand-ins for the platform traits.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::clipboard::ClipboardBackend;
use crate::error::{ClipboardError, Result};
use crate::geometry::{Point, Rect, Size};
use crate::notice::{NoticeSurface, Timer};
use crate::tooltip::TooltipSurface;

#[derive(Default)]
struct SurfaceState {
    lines: Vec<String>,
    position: Point,
    placements: usize,
    visible: bool,
}

/// Panel with a fixed rendered size inside a fixed viewport.
#[derive(Clone)]
pub struct MockSurface {
    size: Size,
    viewport: Size,
    state: Rc<RefCell<SurfaceState>>,
}

impl MockSurface {
    pub fn new(size: Size, viewport: Size) -> Self {
        Self {
            size,
            viewport,
            state: Rc::default(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.state.borrow().lines.clone()
    }

    pub fn position(&self) -> Point {
        self.state.borrow().position
    }

    pub fn placements(&self) -> usize {
        self.state.borrow().placements
    }

    pub fn visible(&self) -> bool {
        self.state.borrow().visible
    }
}

impl TooltipSurface for MockSurface {
    fn set_lines(&self, lines: &[String]) {
        self.state.borrow_mut().lines = lines.to_vec();
    }

    fn place(&self, position: Point) {
        let mut state = self.state.borrow_mut();
        state.position = position;
        state.placements += 1;
    }

    fn bounds(&self) -> Rect {
        Rect::at(self.position(), self.size)
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn set_visible(&self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }
}

#[derive(Clone, Default)]
pub struct MockNotice {
    visible: Rc<Cell<bool>>,
}

impl MockNotice {
    pub fn visible(&self) -> bool {
        self.visible.get()
    }
}

impl NoticeSurface for MockNotice {
    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}

type Task = (Duration, Box<dyn FnOnce()>);

/// Timer driven by [`ManualTimer::advance`].
#[derive(Clone, Default)]
pub struct ManualTimer {
    now: Rc<Cell<Duration>>,
    tasks: Rc<RefCell<Vec<Task>>>,
}

impl ManualTimer {
    /// Move the clock forward and run every task that has come due, in due order.
    pub fn advance(&self, by: Duration) {
        let now = self.now.get() + by;
        self.now.set(now);

        let mut due = {
            let mut tasks = self.tasks.borrow_mut();
            let (due, pending): (Vec<_>, Vec<_>) =
                tasks.drain(..).partition(|(at, _)| *at <= now);
            *tasks = pending;
            due
        };
        due.sort_by_key(|(at, _)| *at);
        for (_, task) in due {
            task();
        }
    }

    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }
}

impl Timer for ManualTimer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let at = self.now.get() + delay;
        self.tasks.borrow_mut().push((at, task));
    }
}

#[derive(Default)]
struct ClipboardLog {
    written: Vec<String>,
    copied: Vec<String>,
    attached: usize,
    detached: usize,
}

/// Clipboard whose two paths succeed or fail as configured.
pub struct MockClipboard {
    primary_ok: bool,
    fallback_ok: bool,
    attach_ok: bool,
    log: RefCell<ClipboardLog>,
}

impl MockClipboard {
    pub fn new(primary_ok: bool, fallback_ok: bool) -> Self {
        Self {
            primary_ok,
            fallback_ok,
            attach_ok: true,
            log: RefCell::default(),
        }
    }

    pub fn failing_attach(mut self) -> Self {
        self.attach_ok = false;
        self
    }

    /// Texts written through the async path.
    pub fn written(&self) -> Vec<String> {
        self.log.borrow().written.clone()
    }

    /// Texts copied through the legacy path.
    pub fn copied(&self) -> Vec<String> {
        self.log.borrow().copied.clone()
    }

    pub fn attached(&self) -> usize {
        self.log.borrow().attached
    }

    pub fn detached(&self) -> usize {
        self.log.borrow().detached
    }
}

impl ClipboardBackend for MockClipboard {
    type Scratch = String;

    async fn write_async(&self, text: &str) -> Result<()> {
        if !self.primary_ok {
            return Err(ClipboardError::Unavailable);
        }
        self.log.borrow_mut().written.push(text.to_string());
        Ok(())
    }

    fn attach_scratch(&self, text: &str) -> Result<Self::Scratch> {
        if !self.attach_ok {
            return Err(ClipboardError::Scratch("attach refused".into()));
        }
        self.log.borrow_mut().attached += 1;
        Ok(text.to_string())
    }

    fn copy_selection(&self, scratch: &Self::Scratch) -> Result<()> {
        if !self.fallback_ok {
            return Err(ClipboardError::CommandRefused);
        }
        self.log.borrow_mut().copied.push(scratch.clone());
        Ok(())
    }

    fn detach_scratch(&self, _scratch: Self::Scratch) {
        self.log.borrow_mut().detached += 1;
    }
}
