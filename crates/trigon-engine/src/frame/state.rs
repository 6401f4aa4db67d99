use std::ops::Range;

/// Draw parameters issued by one frame.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DrawCall {
    pub vertices: Range<u32>,
    pub instances: Range<u32>,
}

impl DrawCall {
    /// A single-instance draw of `count` vertices starting at vertex 0.
    pub fn vertices(count: u32) -> Self {
        Self {
            vertices: 0..count,
            instances: 0..1,
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.end - self.vertices.start
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.end - self.instances.start
    }
}

/// Result of asking the swap chain for the next texture.
pub enum Acquire<F> {
    /// A texture was acquired; the frame owns it until presented.
    Ready(F),
    /// No texture; the swap chain is done and the loop ends.
    Invalid,
}

/// Swap chain + recorder driven by [`FrameLoop`].
pub trait FrameTarget {
    /// Per-frame transients (texture, view, encoder).
    type Frame;

    fn acquire(&mut self) -> Acquire<Self::Frame>;

    /// Records the frame's render pass; returns the draw it issued, if any.
    fn record(&mut self, frame: &mut Self::Frame) -> Option<DrawCall>;

    /// Submits the recorded commands and presents. Consumes the frame, so
    /// every transient is released here.
    fn submit(&mut self, frame: Self::Frame);

    /// Housekeeping after presentation.
    fn tick(&mut self) {}
}

/// Outcome of one [`FrameLoop::step`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FrameStep {
    Presented(Option<DrawCall>),
    Finished,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum LoopState {
    Running,
    Finished,
}

/// Per-iteration state machine:
/// `AcquireTexture -> {Invalid: finish | Ready: record -> submit -> tick}`.
///
/// There are no retries: the first failed acquisition finishes the loop.
///
/// Event polling happens outside, in the window runtime; a close request
/// finishes the loop before the next acquisition.
#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    presented: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Running,
            presented: 0,
        }
    }

    /// Stops the loop; later steps touch nothing.
    pub fn request_close(&mut self) {
        if self.state == LoopState::Running {
            log::info!("close requested after {} frames", self.presented);
        }
        self.state = LoopState::Finished;
    }

    pub fn is_finished(&self) -> bool {
        self.state == LoopState::Finished
    }

    /// Frames submitted and presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Runs one iteration against `target`.
    pub fn step<T: FrameTarget>(&mut self, target: &mut T) -> FrameStep {
        if self.is_finished() {
            return FrameStep::Finished;
        }

        let mut frame = match target.acquire() {
            Acquire::Ready(frame) => frame,
            Acquire::Invalid => {
                log::info!("swap chain invalid after {} frames; leaving frame loop", self.presented);
                self.state = LoopState::Finished;
                return FrameStep::Finished;
            }
        };

        let draw = target.record(&mut frame);
        target.submit(frame);
        target.tick();

        self.presented += 1;
        log::trace!("frame {} presented ({draw:?})", self.presented);
        FrameStep::Presented(draw)
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    #[derive(Debug, Clone, Eq, PartialEq)]
    enum Event {
        Acquire,
        Record(u32),
        Submit(u32),
        Tick,
        Released(u32),
    }

    type Journal = Rc<RefCell<Vec<Event>>>;

    #[derive(Debug, Clone, Copy)]
    enum Script {
        Ready,
        Invalid,
    }

    struct TestFrame {
        id: u32,
        journal: Journal,
    }

    impl Drop for TestFrame {
        fn drop(&mut self) {
            self.journal.borrow_mut().push(Event::Released(self.id));
        }
    }

    /// Records every call; acquisitions follow `script`, then succeed.
    struct RecordingTarget {
        journal: Journal,
        script: VecDeque<Script>,
        draw: Option<DrawCall>,
        next_id: u32,
    }

    impl RecordingTarget {
        fn new(draw: Option<DrawCall>, script: &[Script]) -> Self {
            Self {
                journal: Rc::default(),
                script: script.iter().copied().collect(),
                draw,
                next_id: 0,
            }
        }

        fn events(&self) -> Vec<Event> {
            self.journal.borrow().clone()
        }

        fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
            self.journal.borrow().iter().filter(|e| pred(*e)).count()
        }
    }

    impl FrameTarget for RecordingTarget {
        type Frame = TestFrame;

        fn acquire(&mut self) -> Acquire<TestFrame> {
            self.journal.borrow_mut().push(Event::Acquire);
            match self.script.pop_front().unwrap_or(Script::Ready) {
                Script::Ready => {
                    let id = self.next_id;
                    self.next_id += 1;
                    Acquire::Ready(TestFrame {
                        id,
                        journal: Rc::clone(&self.journal),
                    })
                }
                Script::Invalid => Acquire::Invalid,
            }
        }

        fn record(&mut self, frame: &mut TestFrame) -> Option<DrawCall> {
            self.journal.borrow_mut().push(Event::Record(frame.id));
            self.draw.clone()
        }

        fn submit(&mut self, frame: TestFrame) {
            self.journal.borrow_mut().push(Event::Submit(frame.id));
        }

        fn tick(&mut self) {
            self.journal.borrow_mut().push(Event::Tick);
        }
    }

    fn triangle() -> Option<DrawCall> {
        Some(DrawCall::vertices(3))
    }

    // ── draw call ─────────────────────────────────────────────────────────

    #[test]
    fn triangle_draw_is_three_vertices_one_instance() {
        let call = DrawCall::vertices(3);
        assert_eq!(call.vertices, 0..3);
        assert_eq!(call.instances, 0..1);
        assert_eq!(call.vertex_count(), 3);
        assert_eq!(call.instance_count(), 1);
    }

    // ── happy path ────────────────────────────────────────────────────────

    #[test]
    fn frame_runs_acquire_record_submit_tick_in_order() {
        let mut target = RecordingTarget::new(triangle(), &[]);
        let mut frames = FrameLoop::new();

        assert_eq!(frames.step(&mut target), FrameStep::Presented(triangle()));
        assert_eq!(
            target.events(),
            vec![
                Event::Acquire,
                Event::Record(0),
                Event::Submit(0),
                Event::Released(0),
                Event::Tick,
            ]
        );
        assert_eq!(frames.presented(), 1);
    }

    #[test]
    fn clear_only_frame_presents_without_draw() {
        let mut target = RecordingTarget::new(None, &[]);
        let mut frames = FrameLoop::new();

        assert_eq!(frames.step(&mut target), FrameStep::Presented(None));
    }

    #[test]
    fn each_frame_released_exactly_once() {
        let mut target = RecordingTarget::new(triangle(), &[]);
        let mut frames = FrameLoop::new();

        for _ in 0..5 {
            frames.step(&mut target);
        }

        for id in 0..5 {
            assert_eq!(target.count(|e| *e == Event::Released(id)), 1);
        }
        assert_eq!(target.count(|e| matches!(e, Event::Submit(_))), 5);
    }

    // ── close ─────────────────────────────────────────────────────────────

    #[test]
    fn close_stops_before_next_acquire() {
        let mut target = RecordingTarget::new(triangle(), &[]);
        let mut frames = FrameLoop::new();

        frames.step(&mut target);
        frames.request_close();
        let before = target.events().len();

        assert_eq!(frames.step(&mut target), FrameStep::Finished);
        assert_eq!(frames.step(&mut target), FrameStep::Finished);
        assert_eq!(target.events().len(), before);
        assert!(frames.is_finished());
        assert_eq!(target.count(|e| matches!(e, Event::Record(_))), 1);
    }

    #[test]
    fn close_before_first_frame_touches_nothing() {
        let mut target = RecordingTarget::new(triangle(), &[]);
        let mut frames = FrameLoop::new();

        frames.request_close();

        assert_eq!(frames.step(&mut target), FrameStep::Finished);
        assert!(target.events().is_empty());
    }

    // ── invalid acquisition ───────────────────────────────────────────────

    #[test]
    fn invalid_texture_ends_loop_without_recording() {
        let mut target = RecordingTarget::new(triangle(), &[Script::Ready, Script::Invalid]);
        let mut frames = FrameLoop::new();

        assert!(matches!(frames.step(&mut target), FrameStep::Presented(_)));
        assert_eq!(frames.step(&mut target), FrameStep::Finished);
        assert!(frames.is_finished());

        let events = target.events();
        assert_eq!(events.last(), Some(&Event::Acquire));
        assert_eq!(target.count(|e| matches!(e, Event::Record(_))), 1);
        assert_eq!(target.count(|e| matches!(e, Event::Submit(_))), 1);

        // Finished loops never acquire again.
        assert_eq!(frames.step(&mut target), FrameStep::Finished);
        assert_eq!(target.events().len(), events.len());
    }

    #[test]
    fn first_failed_acquire_is_final() {
        let mut target = RecordingTarget::new(triangle(), &[Script::Invalid, Script::Ready]);
        let mut frames = FrameLoop::new();

        assert_eq!(frames.step(&mut target), FrameStep::Finished);
        assert_eq!(frames.step(&mut target), FrameStep::Finished);

        // The scripted recovery is never reached.
        assert_eq!(target.events(), vec![Event::Acquire]);
        assert_eq!(frames.presented(), 0);
    }
}
