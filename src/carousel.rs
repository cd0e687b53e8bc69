//! Ring-indexed slideshow over an ordered, fixed set of slides.

/// One indicator mark under a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

/// What a carousel shows at a given moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideView<'a, T> {
    pub slide: Option<&'a T>,
    pub indicators: Vec<Indicator>,
    pub controls_enabled: bool,
}

/// A carousel showing one slide at a time.
///
/// The slide list never changes after construction. An empty slideshow is
/// valid: it has no active slide, no indicators and disabled controls, and
/// every navigation call is a no-op.
#[derive(Debug, Clone)]
pub struct Slideshow<T> {
    slides: Vec<T>,
    current: usize,
}

impl<T> Slideshow<T> {
    pub fn new(slides: Vec<T>) -> Self {
        Self { slides, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Current position, or `None` when there are no slides.
    pub fn index(&self) -> Option<usize> {
        if self.slides.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.slides.get(self.current)
    }

    pub fn slides(&self) -> &[T] {
        &self.slides
    }

    pub fn next(&mut self) {
        let n = self.slides.len();
        if n > 0 {
            self.current = (self.current + 1) % n;
        }
    }

    pub fn previous(&mut self) {
        let n = self.slides.len();
        if n > 0 {
            self.current = (self.current + n - 1) % n;
        }
    }

    /// Move straight to `index`. Returns `false` and leaves the position
    /// untouched if `index` is not a valid slide.
    pub fn jump(&mut self, index: usize) -> bool {
        if index < self.slides.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    pub fn indicators(&self) -> impl Iterator<Item = Indicator> + '_ {
        (0..self.slides.len()).map(move |index| Indicator {
            index,
            active: index == self.current,
        })
    }

    pub fn view(&self) -> SlideView<'_, T> {
        SlideView {
            slide: self.current(),
            indicators: self.indicators().collect(),
            controls_enabled: !self.slides.is_empty(),
        }
    }
}

impl<T> From<Vec<T>> for Slideshow<T> {
    fn from(slides: Vec<T>) -> Self {
        Self::new(slides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn positioned(n: usize, start: usize) -> Slideshow<usize> {
        let mut show = Slideshow::new((0..n).collect());
        assert!(show.jump(start));
        show
    }

    #[test]
    fn starts_at_first_slide() {
        let show = Slideshow::new(vec!["X", "Y", "Z"]);
        assert_eq!(show.index(), Some(0));
        assert_eq!(show.current(), Some(&"X"));
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut show = Slideshow::new(vec!["X", "Y", "Z"]);
        let mut seen = Vec::new();
        for _ in 0..3 {
            show.next();
            seen.push(show.index().unwrap());
        }
        assert_eq!(seen, vec![1, 2, 0]);
        assert_eq!(show.current(), Some(&"X"));
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut show = Slideshow::new(vec!["X", "Y", "Z"]);
        show.previous();
        assert_eq!(show.index(), Some(2));
        assert_eq!(show.current(), Some(&"Z"));
    }

    #[test]
    fn jump_then_next_wraps() {
        let mut show = Slideshow::new(vec![10, 20, 30, 40]);
        assert!(show.jump(3));
        assert_eq!(show.index(), Some(3));
        show.next();
        assert_eq!(show.index(), Some(0));
    }

    #[test]
    fn jump_out_of_range_is_ignored() {
        let mut show = Slideshow::new(vec!['a', 'b']);
        show.next();
        assert!(!show.jump(2));
        assert_eq!(show.index(), Some(1));
    }

    #[test]
    fn empty_slideshow_renders_nothing() {
        let mut show: Slideshow<String> = Slideshow::new(Vec::new());
        show.next();
        show.previous();
        assert!(!show.jump(0));

        let view = show.view();
        assert_eq!(view.slide, None);
        assert!(view.indicators.is_empty());
        assert!(!view.controls_enabled);
        assert_eq!(show.index(), None);
    }

    #[test]
    fn view_marks_only_the_current_indicator() {
        let mut show = Slideshow::new(vec!["a", "b", "c"]);
        show.jump(1);
        let view = show.view();
        assert_eq!(view.slide, Some(&"b"));
        assert!(view.controls_enabled);
        let active: Vec<usize> = view
            .indicators
            .iter()
            .filter(|i| i.active)
            .map(|i| i.index)
            .collect();
        assert_eq!(active, vec![1]);
        assert_eq!(view.indicators.len(), 3);
    }

    #[test]
    fn instances_do_not_share_position() {
        let slides = vec!["same", "slides", "here"];
        let mut good = Slideshow::new(slides.clone());
        let mut bad = Slideshow::new(slides);
        good.next();
        bad.previous();
        bad.previous();
        assert_eq!(good.index(), Some(1));
        assert_eq!(bad.index(), Some(1));
        good.next();
        assert_eq!(good.index(), Some(2));
        assert_eq!(bad.index(), Some(1));
    }

    proptest! {
        #[test]
        fn next_cycles_through_every_position((n, start) in (2usize..40).prop_flat_map(|n| (Just(n), 0..n))) {
            let mut show = positioned(n, start);
            for k in 1..=n {
                show.next();
                prop_assert_eq!(show.index(), Some((start + k) % n));
            }
            prop_assert_eq!(show.index(), Some(start));
        }

        #[test]
        fn previous_cycles_through_every_position((n, start) in (2usize..40).prop_flat_map(|n| (Just(n), 0..n))) {
            let mut show = positioned(n, start);
            for k in 1..=n {
                show.previous();
                prop_assert_eq!(show.index(), Some((start + n * k - k) % n));
            }
            prop_assert_eq!(show.index(), Some(start));
        }

        #[test]
        fn next_and_previous_cancel((n, start) in (1usize..40).prop_flat_map(|n| (Just(n), 0..n))) {
            let mut show = positioned(n, start);
            show.next();
            show.previous();
            prop_assert_eq!(show.index(), Some(start));
            show.previous();
            show.next();
            prop_assert_eq!(show.index(), Some(start));
        }

        #[test]
        fn jump_lands_exactly(
            (n, start, target) in (1usize..40).prop_flat_map(|n| (Just(n), 0..n, 0..n)),
            moves in proptest::collection::vec(any::<bool>(), 0..20),
        ) {
            let mut show = positioned(n, start);
            for forward in moves {
                if forward { show.next() } else { show.previous() }
            }
            prop_assert!(show.jump(target));
            prop_assert_eq!(show.index(), Some(target));
        }

        #[test]
        fn single_slide_never_moves(ops in proptest::collection::vec(0u8..3, 0..30)) {
            let mut show = Slideshow::new(vec!["only"]);
            for op in ops {
                match op {
                    0 => show.next(),
                    1 => show.previous(),
                    _ => { show.jump(0); }
                }
                prop_assert_eq!(show.index(), Some(0));
            }
        }

        #[test]
        fn index_always_in_range(
            n in 0usize..20,
            ops in proptest::collection::vec((0u8..3, 0usize..25), 0..50),
        ) {
            let mut show = Slideshow::new(vec![(); n]);
            let other = Slideshow::new(vec![(); n]);
            for (op, target) in ops {
                match op {
                    0 => show.next(),
                    1 => show.previous(),
                    _ => { show.jump(target); }
                }
                match show.index() {
                    Some(i) => prop_assert!(i < n),
                    None => prop_assert_eq!(n, 0),
                }
                prop_assert_eq!(show.view().indicators.iter().filter(|i| i.active).count(), n.min(1));
            }
            prop_assert_eq!(other.index(), if n == 0 { None } else { Some(0) });
        }
    }
}
