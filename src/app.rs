//! Screen navigation: the category index and the page screen.

use rand::Rng;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::page::{PageView, PracticePage, SlideAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Slide(SlideAction),
    NextPage,
    PreviousPage,
    RandomPage,
    SelectUp,
    SelectDown,
    Open,
    Home,
    Quit,
}

#[derive(Debug, Clone)]
pub enum Screen {
    /// `selected` indexes into `Catalog::index_order`.
    Index { selected: usize },
    Page(PageView),
}

pub struct App {
    catalog: Catalog,
    screen: Screen,
    running: bool,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            screen: Screen::Index { selected: 0 },
            running: true,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn open(&mut self, path: &str) -> Result<()> {
        let page = self
            .catalog
            .get(path)
            .ok_or_else(|| Error::UnknownPath(path.to_string()))?
            .clone();
        self.open_page(page);
        Ok(())
    }

    fn open_page(&mut self, page: PracticePage) {
        info!(path = %page.path, cwe = %page.cwe, "opening page");
        self.screen = Screen::Page(PageView::new(page));
    }

    fn current_path(&self) -> Option<&str> {
        match &self.screen {
            Screen::Page(view) => Some(view.page().path.as_str()),
            Screen::Index { .. } => None,
        }
    }

    fn step_page(&mut self, step: isize) {
        let target = match self.current_path() {
            Some(path) => self.catalog.neighbour(path, step),
            None if step < 0 => self.catalog.pages().last(),
            None => self.catalog.pages().first(),
        };
        if let Some(page) = target.cloned() {
            self.open_page(page);
        }
    }

    fn move_selection(&mut self, step: isize) {
        let n = self.catalog.len() as isize;
        if let Screen::Index { selected } = &mut self.screen {
            *selected = (*selected as isize + step).rem_euclid(n) as usize;
        }
    }

    pub fn apply<R: Rng + ?Sized>(&mut self, action: Action, rng: &mut R) {
        debug!(?action, "apply");
        match action {
            Action::Slide(slide) => {
                if let Screen::Page(view) = &mut self.screen {
                    if !view.apply(slide) {
                        debug!(?slide, "carousel ignored action");
                    }
                }
            }
            Action::NextPage => self.step_page(1),
            Action::PreviousPage => self.step_page(-1),
            Action::RandomPage => {
                let path = self.catalog.random_path(rng);
                if let Some(page) = self.catalog.get(path).cloned() {
                    self.open_page(page);
                }
            }
            Action::SelectUp => self.move_selection(-1),
            Action::SelectDown => self.move_selection(1),
            Action::Open => {
                if let Screen::Index { selected } = self.screen {
                    let page = self.catalog.index_order().get(selected).map(|p| (*p).clone());
                    if let Some(page) = page {
                        self.open_page(page);
                    }
                }
            }
            Action::Home => {
                let selected = match &self.screen {
                    Screen::Index { selected } => *selected,
                    Screen::Page(view) => self
                        .catalog
                        .index_order()
                        .iter()
                        .position(|p| p.path == view.page().path)
                        .unwrap_or(0),
                };
                self.screen = Screen::Index { selected };
            }
            Action::Quit => self.running = false,
        }
    }
}
