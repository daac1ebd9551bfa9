/// Horizontal displacement (in client px) that commits a swipe.
pub const SWIPE_THRESHOLD: i32 = 50;

pub const ZOOM_MIN: f64 = 1.0;
pub const ZOOM_MAX: f64 = 3.0;
/// Zoom change applied per pinch move event.
pub const ZOOM_STEP: f64 = 0.1;

#[derive(Clone, PartialEq, Debug)]
pub enum GalleryItem {
    Image { url: String },
    Video { youtube_id: String },
}

impl GalleryItem {
    pub fn is_video(&self) -> bool {
        matches!(self, GalleryItem::Video { .. })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SlideDirection {
    None,
    Forward,
    Backward,
}

/// View state of the project modal: which item is active, how it is
/// presented. Owned by one modal instance and discarded on close.
#[derive(Clone, PartialEq)]
pub struct GalleryView {
    items: Vec<GalleryItem>,
    index: usize,
    zoom: f64,
    fullscreen: bool,
    slide: SlideDirection,
    video_playing: bool,
}

impl GalleryView {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        debug_assert!(!items.is_empty());
        Self {
            items,
            index: 0,
            zoom: ZOOM_MIN,
            fullscreen: false,
            slide: SlideDirection::None,
            video_playing: false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &GalleryItem {
        &self.items[self.index]
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn slide_direction(&self) -> SlideDirection {
        self.slide
    }

    pub fn is_video_playing(&self) -> bool {
        self.video_playing
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.items.len();
        self.slide = SlideDirection::Forward;
        self.reset_item_state();
    }

    pub fn previous(&mut self) {
        self.index = (self.index + self.items.len() - 1) % self.items.len();
        self.slide = SlideDirection::Backward;
        self.reset_item_state();
    }

    // Zoom and the embedded player are per-item state.
    fn reset_item_state(&mut self) {
        self.zoom = ZOOM_MIN;
        self.video_playing = false;
    }

    /// Called by the one-shot timer once the slide transition has played.
    pub fn clear_slide_direction(&mut self) {
        self.slide = SlideDirection::None;
    }

    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }

    pub fn exit_fullscreen(&mut self) {
        self.fullscreen = false;
    }

    /// Applies one pinch move. `delta` is the change in inter-finger
    /// distance since the previous move; only its sign matters. Videos
    /// ignore pinch entirely.
    pub fn pinch_by(&mut self, delta: f64) {
        if self.current().is_video() || delta == 0.0 {
            return;
        }
        let step = if delta > 0.0 { ZOOM_STEP } else { -ZOOM_STEP };
        self.zoom = (self.zoom + step).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Thumbnail click: switch a video item to the embedded player.
    pub fn play_video(&mut self) {
        if self.current().is_video() {
            self.video_playing = true;
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Swipe {
    Next,
    Previous,
}

/// Raw touch bookkeeping for the modal. One swipe fires at most once per
/// gesture; pinch tracks the previous inter-finger distance so each move
/// yields a signed delta.
#[derive(Default, Clone, PartialEq)]
pub struct TouchTracker {
    start_x: Option<i32>,
    pinch_distance: Option<f64>,
}

impl TouchTracker {
    pub fn touch_start(&mut self, points: &[(i32, i32)]) {
        match points {
            [(x, _)] => {
                self.start_x = Some(*x);
                self.pinch_distance = None;
            }
            [a, b] => {
                self.start_x = None;
                self.pinch_distance = Some(distance(*a, *b));
            }
            _ => {
                self.start_x = None;
                self.pinch_distance = None;
            }
        }
    }

    /// Single-pointer move. Returns a swipe once the displacement passes
    /// the threshold, then disarms until the next touch_start.
    pub fn drag_to(&mut self, x: i32) -> Option<Swipe> {
        let start = self.start_x?;
        let diff = start - x;
        if diff.abs() > SWIPE_THRESHOLD {
            self.start_x = None;
            if diff > 0 {
                Some(Swipe::Next)
            } else {
                Some(Swipe::Previous)
            }
        } else {
            None
        }
    }

    /// Two-pointer move. Returns the signed change in distance since the
    /// previous move and updates the baseline.
    pub fn pinch_to(&mut self, a: (i32, i32), b: (i32, i32)) -> Option<f64> {
        let new = distance(a, b);
        let delta = new - self.pinch_distance?;
        self.pinch_distance = Some(new);
        Some(delta)
    }

    pub fn touch_end(&mut self) {
        self.start_x = None;
        self.pinch_distance = None;
    }
}

fn distance(a: (i32, i32), b: (i32, i32)) -> f64 {
    let dx = (a.0 - b.0) as f64;
    let dy = (a.1 - b.1) as f64;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<GalleryItem> {
        (0..n)
            .map(|i| GalleryItem::Image { url: format!("/images/{}.png", i) })
            .collect()
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut view = GalleryView::new(images(3));
        view.next();
        view.next();
        assert_eq!(view.index(), 2);
        view.next();
        assert_eq!(view.index(), 0);
        assert_eq!(view.slide_direction(), SlideDirection::Forward);
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut view = GalleryView::new(images(3));
        view.previous();
        assert_eq!(view.index(), 2);
        assert_eq!(view.slide_direction(), SlideDirection::Backward);
    }

    #[test]
    fn navigation_resets_zoom_and_player() {
        let mut view = GalleryView::new(vec![
            GalleryItem::Image { url: "/a.png".to_string() },
            GalleryItem::Video { youtube_id: "abc123".to_string() },
        ]);
        view.pinch_by(8.0);
        assert!(view.zoom() > ZOOM_MIN);
        view.next();
        assert_eq!(view.zoom(), ZOOM_MIN);

        view.play_video();
        assert!(view.is_video_playing());
        view.next();
        assert!(!view.is_video_playing());
    }

    #[test]
    fn zoom_is_clamped_both_ways() {
        let mut view = GalleryView::new(images(1));
        for _ in 0..100 {
            view.pinch_by(5.0);
        }
        assert_eq!(view.zoom(), ZOOM_MAX);
        for _ in 0..100 {
            view.pinch_by(-5.0);
        }
        assert_eq!(view.zoom(), ZOOM_MIN);
    }

    #[test]
    fn pinch_is_ignored_on_video_items() {
        let mut view = GalleryView::new(vec![GalleryItem::Video { youtube_id: "abc".to_string() }]);
        view.pinch_by(20.0);
        assert_eq!(view.zoom(), ZOOM_MIN);
    }

    #[test]
    fn play_video_is_a_no_op_on_images() {
        let mut view = GalleryView::new(images(1));
        view.play_video();
        assert!(!view.is_video_playing());
    }

    #[test]
    fn fullscreen_toggles_back_to_original_state() {
        let mut view = GalleryView::new(images(2));
        assert!(!view.is_fullscreen());
        assert!(view.toggle_fullscreen());
        assert!(!view.toggle_fullscreen());
        assert!(!view.is_fullscreen());
    }

    #[test]
    fn slide_direction_clears_after_transition() {
        let mut view = GalleryView::new(images(2));
        view.next();
        assert_eq!(view.slide_direction(), SlideDirection::Forward);
        view.clear_slide_direction();
        assert_eq!(view.slide_direction(), SlideDirection::None);
    }

    #[test]
    fn swipe_left_goes_next_and_fires_once_per_gesture() {
        let mut tracker = TouchTracker::default();
        tracker.touch_start(&[(200, 10)]);
        assert_eq!(tracker.drag_to(180), None);
        assert_eq!(tracker.drag_to(140), Some(Swipe::Next));
        // Disarmed until a new gesture starts.
        assert_eq!(tracker.drag_to(40), None);
        tracker.touch_start(&[(40, 10)]);
        assert_eq!(tracker.drag_to(120), Some(Swipe::Previous));
    }

    #[test]
    fn displacement_at_threshold_does_not_commit() {
        let mut tracker = TouchTracker::default();
        tracker.touch_start(&[(100, 0)]);
        assert_eq!(tracker.drag_to(50), None);
        assert_eq!(tracker.drag_to(49), Some(Swipe::Next));
    }

    #[test]
    fn pinch_deltas_follow_finger_distance() {
        let mut tracker = TouchTracker::default();
        tracker.touch_start(&[(0, 0), (100, 0)]);
        let d = tracker.pinch_to((0, 0), (130, 0)).unwrap();
        assert!(d > 0.0);
        let d = tracker.pinch_to((0, 0), (90, 0)).unwrap();
        assert!(d < 0.0);
    }

    #[test]
    fn touch_end_abandons_both_gesture_kinds() {
        let mut tracker = TouchTracker::default();
        tracker.touch_start(&[(0, 0), (100, 0)]);
        tracker.touch_end();
        assert_eq!(tracker.pinch_to((0, 0), (200, 0)), None);
        assert_eq!(tracker.drag_to(500), None);
    }
}
