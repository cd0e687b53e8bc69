use raylib::prelude::*;

use cwe_slideshow::constants::*;
use cwe_slideshow::layout::{Bounds, INDICATOR_RADIUS, PageLayout, PanelLayout, wrap_text};
use cwe_slideshow::{App, Catalog, CodeSample, PageView, Screen, Side, SlideView};

const BACKGROUND: Color = Color::new(24, 26, 33, 255);
const PANEL: Color = Color::new(36, 39, 48, 255);
const TEXT: Color = Color::new(225, 228, 235, 255);
const MUTED: Color = Color::new(140, 146, 160, 255);
const DO: Color = Color::new(92, 184, 112, 255);
const DONT: Color = Color::new(220, 90, 80, 255);

// Rough advance of the default font, used for wrapping.
fn chars_for_width(width: f32, size: i32) -> usize {
    (width / (size as f32 * 0.55)).max(1.0) as usize
}

fn side_color(side: Side) -> Color {
    match side {
        Side::Good => DO,
        Side::Bad => DONT,
    }
}

/// Draw wrapped `text` inside `bounds`, returning the y below the last line.
fn draw_wrapped<D: RaylibDraw>(d: &mut D, text: &str, bounds: Bounds, size: i32, color: Color) -> i32 {
    let mut y = bounds.y as i32;
    let bottom = (bounds.y + bounds.height) as i32;
    for line in wrap_text(text, chars_for_width(bounds.width, size)) {
        if y + size > bottom {
            break;
        }
        d.draw_text(&line, bounds.x as i32, y, size, color);
        y += size + LINE_GAP;
    }
    y
}

fn draw_bullets<D: RaylibDraw>(d: &mut D, heading: &str, items: &[String], bounds: Bounds, color: Color) {
    d.draw_text(heading, bounds.x as i32, bounds.y as i32, HEADING_SIZE, color);
    let mut y = bounds.y + (HEADING_SIZE + LINE_GAP * 2) as f32;
    for item in items {
        let remaining = bounds.y + bounds.height - y;
        if remaining < BODY_SIZE as f32 {
            break;
        }
        d.draw_circle(bounds.x as i32 + 8, y as i32 + BODY_SIZE / 2, 4.0, color);
        let area = Bounds::new(bounds.x + 24.0, y, bounds.width - 24.0, remaining);
        y = draw_wrapped(d, item, area, BODY_SIZE, TEXT) as f32;
    }
}

fn draw_sample<D: RaylibDraw>(d: &mut D, sample: &CodeSample, area: Bounds) {
    let mut y = area.y as i32;
    let header = match &sample.caption {
        Some(caption) => format!("{caption}  [{}]", sample.language),
        None => format!("[{}]", sample.language),
    };
    d.draw_text(&header, area.x as i32, y, BODY_SIZE, MUTED);
    y += BODY_SIZE + LINE_GAP * 2;

    let bottom = (area.y + area.height) as i32;
    for line in sample.code.lines() {
        if y + CODE_SIZE > bottom {
            d.draw_text("...", area.x as i32, y - LINE_GAP, CODE_SIZE, MUTED);
            break;
        }
        d.draw_text(line, area.x as i32, y, CODE_SIZE, TEXT);
        y += CODE_SIZE + LINE_GAP;
    }
}

fn draw_carousel<D: RaylibDraw>(d: &mut D, panel: &PanelLayout, view: &SlideView<'_, CodeSample>) {
    let color = side_color(panel.side);
    let f = panel.frame;
    d.draw_rectangle(f.x as i32, f.y as i32, f.width as i32, f.height as i32, PANEL);
    d.draw_rectangle_lines(f.x as i32, f.y as i32, f.width as i32, f.height as i32, color);
    d.draw_text(panel.side.label(), f.x as i32 + 12, f.y as i32 - HEADING_SIZE - 6, HEADING_SIZE, color);

    match view.slide {
        Some(sample) => draw_sample(d, sample, panel.slide),
        None => d.draw_text("No samples for this page.", panel.slide.x as i32, panel.slide.y as i32, BODY_SIZE, MUTED),
    }

    let button_color = if view.controls_enabled { color } else { MUTED };
    for (bounds, glyph) in [(panel.prev, "<"), (panel.next, ">")] {
        d.draw_rectangle_lines(bounds.x as i32, bounds.y as i32, bounds.width as i32, bounds.height as i32, button_color);
        let c = bounds.center();
        d.draw_text(glyph, c.x as i32 - 8, c.y as i32 - HEADING_SIZE / 2, HEADING_SIZE, button_color);
    }

    for (indicator, center) in view.indicators.iter().zip(panel.indicator_centers(view.indicators.len())) {
        if indicator.active {
            d.draw_circle(center.x as i32, center.y as i32, INDICATOR_RADIUS, color);
        } else {
            d.draw_circle_lines(center.x as i32, center.y as i32, INDICATOR_RADIUS, MUTED);
        }
    }
}

fn draw_page<D: RaylibDraw>(d: &mut D, view: &PageView, layout: &PageLayout) {
    let page = view.page();
    let width = RENDER_WIDTH as f32;
    d.draw_text(&page.title, 40, 30, TITLE_SIZE, TEXT);
    d.draw_text(&format!("{}  |  {}  |  {}", page.cwe, page.category, page.path), 40, 30 + TITLE_SIZE + 8, BODY_SIZE, MUTED);

    let column = (width - 120.0) * 0.5;
    draw_bullets(d, "Best practices", &page.best_practices, Bounds::new(40.0, 140.0, column, 200.0), DO);
    draw_bullets(d, "Bad practices", &page.bad_practices, Bounds::new(80.0 + column, 140.0, column, 200.0), DONT);

    for side in [Side::Good, Side::Bad] {
        draw_carousel(d, layout.panel(side), &view.view(side));
    }

    let below = layout.good.frame.y + layout.good.frame.height + 16.0;
    let area = Bounds::new(40.0, below, width - 80.0, RENDER_HEIGHT as f32 - below - 10.0);
    let mut y = draw_wrapped(d, &page.explanation, area, BODY_SIZE, TEXT);
    for cve in &page.references {
        if y + BODY_SIZE > RENDER_HEIGHT - 10 {
            break;
        }
        d.draw_text(&format!("{}: {}", cve.id, cve.summary), 40, y, BODY_SIZE, MUTED);
        y += BODY_SIZE + LINE_GAP;
    }
}

fn draw_index<D: RaylibDraw>(d: &mut D, catalog: &Catalog, selected: usize) {
    d.draw_text("Cryptographic weaknesses", 40, 30, TITLE_SIZE, TEXT);
    d.draw_text("Up/Down to choose, Enter to open, R for a random page, Q to quit", 40, 30 + TITLE_SIZE + 8, BODY_SIZE, MUTED);

    let mut y = 160;
    let mut row = 0;
    for (category, pages) in catalog.categories() {
        d.draw_text(category, 40, y, HEADING_SIZE, DO);
        y += HEADING_SIZE + LINE_GAP * 2;
        for page in pages {
            let color = if row == selected { TEXT } else { MUTED };
            if row == selected {
                d.draw_rectangle(60, y - 4, RENDER_WIDTH - 120, BODY_SIZE + 8, PANEL);
            }
            d.draw_text(&format!("{}  {}", page.cwe, page.title), 80, y, BODY_SIZE, color);
            y += BODY_SIZE + LINE_GAP * 2;
            row += 1;
        }
        y += LINE_GAP * 2;
    }
}

pub fn draw_screen<D: RaylibDraw>(d: &mut D, app: &App, layout: &PageLayout) {
    d.clear_background(BACKGROUND);
    match app.screen() {
        Screen::Index { selected } => draw_index(d, app.catalog(), *selected),
        Screen::Page(view) => draw_page(d, view, layout),
    }
}

pub fn draw_error<D: RaylibDraw>(d: &mut D, message: &str) {
    d.clear_background(Color::BLACK);
    draw_wrapped(d, &format!("Error: {message}"), Bounds::new(20.0, 20.0, 900.0, 500.0), 20, Color::RED);
}
