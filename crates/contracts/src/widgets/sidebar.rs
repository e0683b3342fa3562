//! Mobile off-canvas sidebar: triggers, transitions and swipe detection.

/// Direction of a recognised horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Classify the gesture between two touch points.
///
/// Horizontal movement must dominate vertical movement and exceed `threshold`.
pub fn classify_swipe(start: TouchPoint, end: TouchPoint, threshold: f64) -> Option<SwipeDirection> {
    let delta_x = start.x - end.x;
    let delta_y = start.y - end.y;
    if delta_x.abs() > delta_y.abs() && delta_x.abs() > threshold {
        if delta_x > 0.0 {
            Some(SwipeDirection::Left)
        } else {
            Some(SwipeDirection::Right)
        }
    } else {
        None
    }
}

/// Remembers where the current touch began.
#[derive(Debug, Default, Clone)]
pub struct SwipeTracker {
    start: Option<TouchPoint>,
}

impl SwipeTracker {
    pub fn begin(&mut self, point: TouchPoint) {
        self.start = Some(point);
    }

    /// Finish the gesture; the tracker is reset either way.
    pub fn finish(&mut self, end: TouchPoint, threshold: f64) -> Option<SwipeDirection> {
        let start = self.start.take()?;
        classify_swipe(start, end, threshold)
    }
}

/// Everything that can ask the sidebar to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarTrigger {
    Hamburger,
    Overlay,
    CloseButton,
    Escape,
    NavItem,
    Swipe(SwipeDirection),
    Resize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarCommand {
    Open,
    Close,
}

/// Decide what a trigger means at the given viewport width.
pub fn command_for(trigger: SidebarTrigger, viewport_width: f64, breakpoint: f64) -> Option<SidebarCommand> {
    match trigger {
        SidebarTrigger::Hamburger => Some(SidebarCommand::Open),
        SidebarTrigger::Overlay
        | SidebarTrigger::CloseButton
        | SidebarTrigger::Escape
        | SidebarTrigger::NavItem
        | SidebarTrigger::Swipe(SwipeDirection::Left) => Some(SidebarCommand::Close),
        SidebarTrigger::Swipe(SwipeDirection::Right) if viewport_width <= breakpoint => {
            Some(SidebarCommand::Open)
        }
        SidebarTrigger::Swipe(SwipeDirection::Right) => None,
        SidebarTrigger::Resize if viewport_width > breakpoint => Some(SidebarCommand::Close),
        SidebarTrigger::Resize => None,
    }
}

/// Open/closed flag plus the page scroll lock that goes with it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
}

impl SidebarState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Body scroll is locked exactly while the sidebar is open.
    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    /// Apply a command; returns whether the flag changed.
    pub fn apply(&mut self, command: SidebarCommand) -> bool {
        let open = command == SidebarCommand::Open;
        let changed = self.open != open;
        self.open = open;
        changed
    }

    pub fn handle(&mut self, trigger: SidebarTrigger, viewport_width: f64, breakpoint: f64) -> Option<SidebarCommand> {
        let command = command_for(trigger, viewport_width, breakpoint)?;
        self.apply(command);
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BP: f64 = 768.0;

    #[test]
    fn test_hamburger_then_escape() {
        let mut state = SidebarState::default();
        assert!(!state.is_open());

        assert_eq!(state.handle(SidebarTrigger::Hamburger, 400.0, BP), Some(SidebarCommand::Open));
        assert!(state.is_open() && state.scroll_locked());

        assert_eq!(state.handle(SidebarTrigger::Escape, 400.0, BP), Some(SidebarCommand::Close));
        assert!(!state.is_open() && !state.scroll_locked());
    }

    #[test]
    fn test_swipe_left_80px_closes() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(TouchPoint::new(200.0, 300.0));
        let dir = tracker.finish(TouchPoint::new(120.0, 305.0), 50.0);
        assert_eq!(dir, Some(SwipeDirection::Left));

        let mut state = SidebarState::default();
        state.apply(SidebarCommand::Open);
        state.handle(SidebarTrigger::Swipe(dir.unwrap()), 400.0, BP);
        assert!(!state.is_open());
    }

    #[test]
    fn test_swipe_right_opens_only_on_mobile() {
        let dir = classify_swipe(TouchPoint::new(10.0, 100.0), TouchPoint::new(90.0, 100.0), 50.0);
        assert_eq!(dir, Some(SwipeDirection::Right));

        let mut state = SidebarState::default();
        assert_eq!(state.handle(SidebarTrigger::Swipe(SwipeDirection::Right), 768.0, BP), Some(SidebarCommand::Open));
        assert!(state.is_open());

        let mut desktop = SidebarState::default();
        assert_eq!(desktop.handle(SidebarTrigger::Swipe(SwipeDirection::Right), 1024.0, BP), None);
        assert!(!desktop.is_open());
    }

    #[test]
    fn test_short_or_vertical_moves_are_not_swipes() {
        let start = TouchPoint::new(100.0, 100.0);
        assert_eq!(classify_swipe(start, TouchPoint::new(60.0, 100.0), 50.0), None);
        assert_eq!(classify_swipe(start, TouchPoint::new(20.0, 0.0), 50.0), None);
    }

    #[test]
    fn test_tracker_resets_after_finish() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.finish(TouchPoint::new(0.0, 0.0), 50.0), None);

        tracker.begin(TouchPoint::new(0.0, 0.0));
        assert_eq!(tracker.finish(TouchPoint::new(100.0, 0.0), 50.0), Some(SwipeDirection::Right));
        assert_eq!(tracker.finish(TouchPoint::new(100.0, 0.0), 50.0), None);
    }

    #[test]
    fn test_resize_closes_above_breakpoint() {
        assert_eq!(command_for(SidebarTrigger::Resize, 1200.0, BP), Some(SidebarCommand::Close));
        assert_eq!(command_for(SidebarTrigger::Resize, 768.0, BP), None);
    }

    #[test]
    fn test_apply_reports_changes() {
        let mut state = SidebarState::default();
        assert!(!state.apply(SidebarCommand::Close));
        assert!(state.apply(SidebarCommand::Open));
        assert!(!state.apply(SidebarCommand::Open));
    }
}
