/// Base multiplier for icon animation durations
pub const ICON_DURATION_MULTIPLIER: f64 = 0.35;

#[inline]
pub fn scaled_duration(base_secs: f64) -> f64 {
    base_secs * ICON_DURATION_MULTIPLIER
}

/// Inclusive-exclusive frame range of a segmented animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: u32,
    pub end: u32,
}

impl Segment {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn frames(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}

/// Frame layout of a hover icon: one intro, then hover segments played in turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSegments {
    pub appear: Segment,
    pub hover: &'static [Segment],
    /// Start the next hover segment if the pointer is still over the icon
    /// when one finishes
    pub replay_while_hovered: bool,
}

impl IconSegments {
    pub const GLOBE: IconSegments = IconSegments {
        appear: Segment::new(0, 70),
        hover: &[Segment::new(70, 130), Segment::new(140, 200)],
        replay_while_hovered: true,
    };

    pub const UIUX: IconSegments = IconSegments {
        appear: Segment::new(0, 69),
        hover: &[Segment::new(69, 159), Segment::new(169, 269)],
        replay_while_hovered: true,
    };

    /// Single hover burst; the pointer has to leave and come back to replay
    pub const BRANDING: IconSegments = IconSegments {
        appear: Segment::new(0, 70),
        hover: &[Segment::new(70, 190)],
        replay_while_hovered: false,
    };
}

/// Hover-triggered icon animation
///
/// The icon is invisible until [`start`](Self::start) plays its intro. After
/// that each hover plays the next hover segment, but never interrupts a
/// segment already running. With `replay_while_hovered`, a pointer still
/// resting on the icon when a segment finishes triggers the next one.
#[derive(Debug, Clone)]
pub struct IconAnimation {
    segments: IconSegments,
    started: bool,
    appearing: bool,
    appeared: bool,
    animating: bool,
    hovered: bool,
    next_hover: usize,
}

impl IconAnimation {
    pub fn new(segments: IconSegments) -> Self {
        Self {
            segments,
            started: false,
            appearing: false,
            appeared: false,
            animating: false,
            hovered: false,
            next_hover: 0,
        }
    }

    /// Whether the icon should be drawn at all
    pub fn is_visible(&self) -> bool {
        self.started
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Play the intro once
    pub fn start(&mut self) -> Option<Segment> {
        if self.appeared || self.appearing {
            return None;
        }
        self.started = true;
        self.appearing = true;
        self.animating = true;
        Some(self.segments.appear)
    }

    pub fn mouse_enter(&mut self) -> Option<Segment> {
        self.hovered = true;
        self.play_hover()
    }

    pub fn mouse_leave(&mut self) {
        self.hovered = false;
    }

    /// The running segment finished
    pub fn complete(&mut self) -> Option<Segment> {
        if self.appearing {
            self.appearing = false;
            self.appeared = true;
        }
        self.animating = false;

        if self.hovered && self.segments.replay_while_hovered {
            self.play_hover()
        } else {
            None
        }
    }

    fn play_hover(&mut self) -> Option<Segment> {
        if !self.appeared || self.animating {
            return None;
        }
        let hover = self.segments.hover;
        let segment = *hover.get(self.next_hover)?;
        self.animating = true;
        self.next_hover = (self.next_hover + 1) % hover.len();
        Some(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appeared() -> IconAnimation {
        let mut icon = IconAnimation::new(IconSegments::GLOBE);
        icon.start();
        icon.complete();
        icon
    }

    #[test]
    fn test_hover_before_appear_is_ignored() {
        let mut icon = IconAnimation::new(IconSegments::GLOBE);
        assert!(!icon.is_visible());
        assert_eq!(icon.mouse_enter(), None);
    }

    #[test]
    fn test_start_plays_once() {
        let mut icon = IconAnimation::new(IconSegments::GLOBE);
        assert_eq!(icon.start(), Some(Segment::new(0, 70)));
        assert_eq!(icon.start(), None);
        icon.complete();
        assert_eq!(icon.start(), None);
        assert!(icon.is_visible());
    }

    #[test]
    fn test_hover_segments_alternate() {
        let mut icon = appeared();
        assert_eq!(icon.mouse_enter(), Some(Segment::new(70, 130)));
        icon.mouse_leave();
        icon.complete();
        assert_eq!(icon.mouse_enter(), Some(Segment::new(140, 200)));
        icon.mouse_leave();
        icon.complete();
        assert_eq!(icon.mouse_enter(), Some(Segment::new(70, 130)));
    }

    #[test]
    fn test_hover_does_not_interrupt() {
        let mut icon = appeared();
        icon.mouse_enter();
        icon.mouse_leave();
        assert_eq!(icon.mouse_enter(), None);
    }

    #[test]
    fn test_still_hovered_replays_on_complete() {
        let mut icon = IconAnimation::new(IconSegments::GLOBE);
        icon.start();
        // Pointer arrives during the intro
        assert_eq!(icon.mouse_enter(), None);
        assert_eq!(icon.complete(), Some(Segment::new(70, 130)));
        assert_eq!(icon.complete(), Some(Segment::new(140, 200)));
        icon.mouse_leave();
        assert_eq!(icon.complete(), None);
        assert!(!icon.is_animating());
    }

    #[test]
    fn test_uiux_alternates_its_own_segments() {
        let mut icon = IconAnimation::new(IconSegments::UIUX);
        assert_eq!(icon.start(), Some(Segment::new(0, 69)));
        icon.complete();
        assert_eq!(icon.mouse_enter(), Some(Segment::new(69, 159)));
        assert_eq!(icon.complete(), Some(Segment::new(169, 269)));
    }

    #[test]
    fn test_branding_single_segment_repeats() {
        let mut icon = IconAnimation::new(IconSegments::BRANDING);
        icon.start();
        icon.complete();
        assert_eq!(icon.mouse_enter(), Some(Segment::new(70, 190)));
        icon.mouse_leave();
        icon.complete();
        assert_eq!(icon.mouse_enter(), Some(Segment::new(70, 190)));
    }

    #[test]
    fn test_branding_does_not_replay_while_hovered() {
        let mut icon = IconAnimation::new(IconSegments::BRANDING);
        icon.start();
        assert_eq!(icon.mouse_enter(), None);
        // Intro ends with the pointer still over the icon
        assert_eq!(icon.complete(), None);
        assert_eq!(icon.mouse_enter(), Some(Segment::new(70, 190)));
        assert_eq!(icon.complete(), None);
        assert!(!icon.is_animating());
    }

    #[test]
    fn test_no_hover_segments_is_inert() {
        const STATIC: IconSegments = IconSegments {
            appear: Segment::new(0, 10),
            hover: &[],
            replay_while_hovered: true,
        };
        let mut icon = IconAnimation::new(STATIC);
        icon.start();
        icon.complete();
        assert_eq!(icon.mouse_enter(), None);
        assert!(!icon.is_animating());
    }

    #[test]
    fn test_scaled_duration() {
        assert!((scaled_duration(2.0) - 0.7).abs() < 1e-9);
        assert_eq!(IconSegments::GLOBE.appear.frames(), 70);
    }
}
