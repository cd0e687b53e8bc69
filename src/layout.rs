//! Fixed geometry of the page screen on the render canvas.

use crate::constants::{RENDER_HEIGHT, RENDER_WIDTH};
use crate::page::{Side, SlideAction};

pub const MARGIN: f32 = 40.0;
pub const PANEL_TOP: f32 = 400.0;
pub const PANEL_HEIGHT: f32 = 480.0;
pub const BUTTON_WIDTH: f32 = 50.0;
pub const BUTTON_HEIGHT: f32 = 80.0;
pub const INDICATOR_RADIUS: f32 = 8.0;
pub const INDICATOR_SPACING: f32 = 28.0;
const INDICATOR_BAND: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Geometry of one carousel panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub side: Side,
    pub frame: Bounds,
    pub slide: Bounds,
    pub prev: Bounds,
    pub next: Bounds,
}

impl PanelLayout {
    fn new(side: Side, frame: Bounds) -> Self {
        let button_y = frame.y + (frame.height - INDICATOR_BAND - BUTTON_HEIGHT) * 0.5;
        let prev = Bounds::new(frame.x + 10.0, button_y, BUTTON_WIDTH, BUTTON_HEIGHT);
        let next = Bounds::new(
            frame.x + frame.width - 10.0 - BUTTON_WIDTH,
            button_y,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        );
        let slide = Bounds::new(
            prev.x + BUTTON_WIDTH + 10.0,
            frame.y + 10.0,
            next.x - prev.x - BUTTON_WIDTH - 20.0,
            frame.height - INDICATOR_BAND - 20.0,
        );
        Self {
            side,
            frame,
            slide,
            prev,
            next,
        }
    }

    /// Centres of `count` indicator dots, centred under the slide.
    pub fn indicator_centers(&self, count: usize) -> Vec<Point> {
        if count == 0 {
            return Vec::new();
        }
        let row_width = (count - 1) as f32 * INDICATOR_SPACING;
        let start_x = self.frame.center().x - row_width * 0.5;
        let y = self.frame.y + self.frame.height - INDICATOR_BAND * 0.5;
        (0..count)
            .map(|i| Point::new(start_x + i as f32 * INDICATOR_SPACING, y))
            .collect()
    }

    pub fn hit_test(&self, p: Point, count: usize) -> Option<SlideAction> {
        if self.prev.contains(p) {
            return Some(SlideAction::Previous(self.side));
        }
        if self.next.contains(p) {
            return Some(SlideAction::Next(self.side));
        }
        let reach = INDICATOR_SPACING * 0.5;
        self.indicator_centers(count)
            .iter()
            .position(|c| (c.x - p.x).abs() < reach && (c.y - p.y).abs() < reach)
            .map(|i| SlideAction::Jump(self.side, i))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub good: PanelLayout,
    pub bad: PanelLayout,
}

impl Default for PageLayout {
    fn default() -> Self {
        let width = RENDER_WIDTH as f32;
        let panel_width = (width - MARGIN * 3.0) * 0.5;
        Self {
            good: PanelLayout::new(
                Side::Good,
                Bounds::new(MARGIN, PANEL_TOP, panel_width, PANEL_HEIGHT),
            ),
            bad: PanelLayout::new(
                Side::Bad,
                Bounds::new(MARGIN * 2.0 + panel_width, PANEL_TOP, panel_width, PANEL_HEIGHT),
            ),
        }
    }
}

impl PageLayout {
    pub fn panel(&self, side: Side) -> &PanelLayout {
        match side {
            Side::Good => &self.good,
            Side::Bad => &self.bad,
        }
    }

    /// Map a click on the canvas to a carousel action, given each side's
    /// slide count.
    pub fn hit_test(&self, p: Point, good_count: usize, bad_count: usize) -> Option<SlideAction> {
        let canvas = Bounds::new(0.0, 0.0, RENDER_WIDTH as f32, RENDER_HEIGHT as f32);
        if !canvas.contains(p) {
            return None;
        }
        self.good
            .hit_test(p, good_count)
            .or_else(|| self.bad.hit_test(p, bad_count))
    }
}

/// Convert a window-space point to canvas space when the canvas is
/// stretched over a `screen_width` x `screen_height` window.
pub fn to_canvas(p: Point, screen_width: f32, screen_height: f32) -> Point {
    if screen_width <= 0.0 || screen_height <= 0.0 {
        return Point::new(-1.0, -1.0);
    }
    Point::new(
        p.x * RENDER_WIDTH as f32 / screen_width,
        p.y * RENDER_HEIGHT as f32 / screen_height,
    )
}

/// Greedy word wrap to at most `max_chars` characters per line. Words
/// longer than a line are split. Explicit newlines are kept.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > max_chars {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            let needed = if line.is_empty() { word.len() } else { line.chars().count() + 1 + word.len() };
            if needed > max_chars {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.extend(word);
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_do_not_overlap() {
        let layout = PageLayout::default();
        assert!(layout.good.frame.x + layout.good.frame.width <= layout.bad.frame.x);
        assert!(layout.bad.frame.x + layout.bad.frame.width <= RENDER_WIDTH as f32);
    }

    #[test]
    fn buttons_map_to_their_side() {
        let layout = PageLayout::default();
        assert_eq!(
            layout.hit_test(layout.good.next.center(), 3, 3),
            Some(SlideAction::Next(Side::Good))
        );
        assert_eq!(
            layout.hit_test(layout.bad.prev.center(), 3, 3),
            Some(SlideAction::Previous(Side::Bad))
        );
    }

    #[test]
    fn indicators_map_to_jumps() {
        let layout = PageLayout::default();
        let dots = layout.bad.indicator_centers(4);
        assert_eq!(dots.len(), 4);
        assert_eq!(
            layout.hit_test(dots[3], 2, 4),
            Some(SlideAction::Jump(Side::Bad, 3))
        );
        // Same spot on the good side has no dots when it has no slides.
        let mirrored = Point::new(dots[0].x - layout.bad.frame.x + layout.good.frame.x, dots[0].y);
        assert_eq!(layout.hit_test(mirrored, 0, 4), None);
    }

    #[test]
    fn indicator_row_is_centred() {
        let layout = PageLayout::default();
        let dots = layout.good.indicator_centers(3);
        let mid = layout.good.frame.center().x;
        assert!((dots[1].x - mid).abs() < 0.001);
        assert!(layout.good.indicator_centers(0).is_empty());
    }

    #[test]
    fn clicks_outside_the_canvas_miss() {
        let layout = PageLayout::default();
        assert_eq!(layout.hit_test(Point::new(-5.0, 500.0), 3, 3), None);
        assert_eq!(layout.hit_test(layout.good.slide.center(), 3, 3), None);
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap_text("never reuse a nonce with the same key", 12),
            vec!["never reuse", "a nonce with", "the same key"]
        );
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text("one\n\ntwo", 10), vec!["one", "", "two"]);
    }

    #[test]
    fn window_points_scale_to_canvas() {
        let p = to_canvas(Point::new(480.0, 270.0), 960.0, 540.0);
        assert_eq!(p, Point::new(960.0, 540.0));
        assert_eq!(to_canvas(Point::new(1.0, 1.0), 0.0, 540.0), Point::new(-1.0, -1.0));
    }
}
