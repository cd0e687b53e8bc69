//! Page payloads and the per-page carousel pair.

use serde::Deserialize;

use crate::carousel::{SlideView, Slideshow};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodeSample {
    pub language: String,
    #[serde(default)]
    pub caption: Option<String>,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CveReference {
    pub id: String,
    pub summary: String,
}

/// Static content of one CWE page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PracticePage {
    pub path: String,
    pub cwe: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub best_practices: Vec<String>,
    #[serde(default)]
    pub bad_practices: Vec<String>,
    #[serde(default)]
    pub good_samples: Vec<CodeSample>,
    #[serde(default)]
    pub bad_samples: Vec<CodeSample>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub references: Vec<CveReference>,
}

/// Which of a page's two carousels an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Good,
    Bad,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Good => "Do",
            Side::Bad => "Don't",
        }
    }
}

/// Carousel movement within a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideAction {
    Next(Side),
    Previous(Side),
    Jump(Side, usize),
}

/// A page as it is being viewed: its content plus one independent
/// slideshow for the good samples and one for the bad samples.
#[derive(Debug, Clone)]
pub struct PageView {
    page: PracticePage,
    good: Slideshow<CodeSample>,
    bad: Slideshow<CodeSample>,
}

impl PageView {
    pub fn new(page: PracticePage) -> Self {
        let good = Slideshow::new(page.good_samples.clone());
        let bad = Slideshow::new(page.bad_samples.clone());
        Self { page, good, bad }
    }

    pub fn page(&self) -> &PracticePage {
        &self.page
    }

    pub fn slideshow(&self, side: Side) -> &Slideshow<CodeSample> {
        match side {
            Side::Good => &self.good,
            Side::Bad => &self.bad,
        }
    }

    fn slideshow_mut(&mut self, side: Side) -> &mut Slideshow<CodeSample> {
        match side {
            Side::Good => &mut self.good,
            Side::Bad => &mut self.bad,
        }
    }

    pub fn view(&self, side: Side) -> SlideView<'_, CodeSample> {
        self.slideshow(side).view()
    }

    /// Apply a carousel action. Returns whether the targeted carousel
    /// accepted it (jumps past the end and moves on an empty carousel
    /// are refused).
    pub fn apply(&mut self, action: SlideAction) -> bool {
        match action {
            SlideAction::Next(side) => {
                let show = self.slideshow_mut(side);
                show.next();
                !show.is_empty()
            }
            SlideAction::Previous(side) => {
                let show = self.slideshow_mut(side);
                show.previous();
                !show.is_empty()
            }
            SlideAction::Jump(side, index) => self.slideshow_mut(side).jump(index),
        }
    }
}
