use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod input;
mod render;

use cwe_slideshow::constants::*;
use cwe_slideshow::layout::PageLayout;
use cwe_slideshow::{Action, App, Catalog};

#[derive(Parser, Debug)]
#[command(name = "cwe-slideshow", about = "Browse cryptographic weakness classes with do/don't code samples")]
struct Cli {
    /// Directory of page files (*.toml)
    #[arg(default_value = "content")]
    content_dir: PathBuf,

    /// Open this page path instead of the index
    #[arg(short, long, conflicts_with = "random")]
    page: Option<String>,

    /// Open a random page
    #[arg(short, long)]
    random: bool,

    /// Print the catalog grouped by category and exit
    #[arg(short, long)]
    list: bool,
}

fn print_catalog(catalog: &Catalog) {
    for (category, pages) in catalog.categories() {
        println!("{category}");
        for page in pages {
            println!("  {:<10} {:<24} {}", page.cwe, page.path, page.title);
        }
    }
}

fn show_error(rl: &mut RaylibHandle, thread: &RaylibThread, message: &str) {
    let mut d = rl.begin_drawing(thread);
    render::draw_error(&mut d, message);
    drop(d);
    std::thread::sleep(Duration::from_secs(ERROR_DISPLAY_SECS));
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if cli.list {
        let catalog = Catalog::load_dir(&cli.content_dir)
            .with_context(|| format!("loading pages from {}", cli.content_dir.display()))?;
        print_catalog(&catalog);
        return Ok(());
    }

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("CWE Slideshow")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape goes back to the index instead of closing the window.
    rl.set_exit_key(None);

    // --- Load Pages ---
    let catalog = match Catalog::load_dir(&cli.content_dir) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(dir = %cli.content_dir.display(), "{e}");
            show_error(&mut rl, &thread, &e.to_string());
            return Err(e).context("loading pages");
        }
    };

    let mut app = App::new(catalog);
    let mut rng = rand::rng();
    if let Some(path) = &cli.page {
        if let Err(e) = app.open(path) {
            error!("{e}");
            show_error(&mut rl, &thread, &e.to_string());
            return Err(e.into());
        }
    } else if cli.random {
        app.apply(Action::RandomPage, &mut rng);
    }

    let layout = PageLayout::default();
    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow::anyhow!("creating render texture: {e}"))?;

    info!("window open");

    // --- Main Loop ---
    while !rl.window_should_close() && app.is_running() {
        for action in input::poll(&rl, &app, &layout) {
            app.apply(action, &mut rng);
        }

        // --- Render into the fixed size "framebuffer" ---
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            render::draw_screen(&mut tmd, &app, &layout);
        });

        // Stretch the framebuffer over the window (render textures are stored upside down)
        let mut d = rl.begin_drawing(&thread);

        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    info!("window closed");
    Ok(())
}
