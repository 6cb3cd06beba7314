use anyhow::{Context, Result};
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;

use carousel::cli::Args;
use carousel::constants::*;
use carousel::texture_loader::load_sorted_image_paths;
use carousel::viewer::Viewer;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    tracing::info!(dir = %args.image_directory.display(), "starting carousel");

    // --- Collect slides before opening a window ---
    let mut image_paths = load_sorted_image_paths(&args.image_directory)
        .with_context(|| format!("error loading images from {}", args.image_directory.display()))?;
    if args.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape belongs to the help modal
    rl.set_exit_key(None);

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow::anyhow!("failed to create render texture: {}", e))?;

    let mut viewer = Viewer::new(image_paths, args.start, args.fade)?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        viewer.update(&mut rl, &thread);

        // --- Render into the fixed size framebuffer ---
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            viewer.draw(&mut d);
        });

        // --- Scale the framebuffer to the window (render textures are stored upside down) ---
        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    tracing::info!("window closed");
    Ok(())
}
