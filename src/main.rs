use anyhow::{Result, anyhow};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};

mod autoplay;
mod cli;
mod constants;
mod deck;
mod ffmpeg;
mod input;
mod logging;
mod presenter;
mod state;
mod texture_loader;
mod transition;
mod view;

use crate::cli::Args;
use crate::constants::*;
use crate::deck::Deck;
use crate::ffmpeg::Ffmpeg;
use crate::presenter::{Presenter, recording_frames};
use crate::state::{Action, PresentationState};
use crate::texture_loader::SlideImages;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level)?;

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Eco Vibe Labs — Pitch Deck")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    if args.fullscreen {
        rl.toggle_fullscreen();
    }

    let deck = Deck::eco_vibe();
    let images = SlideImages::load(&mut rl, &thread, &args.assets, &deck.image_sources());

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("failed to create render texture: {e}"))?;

    // Recording always autoplays
    let autoplaying = args.record.is_some() || !args.paused;
    let initial = PresentationState { index: 0, autoplaying }.reduce(Action::GoTo(args.start.saturating_sub(1)), deck.len());
    let mut presenter = Presenter::new(deck, args.interval, initial);
    info!(
        slides = deck.len(),
        interval = args.interval,
        autoplaying,
        first = presenter.current_slide().title,
        "presentation loaded"
    );

    match &args.record {
        Some(output) => {
            let mut ffmpeg = Ffmpeg::new(RENDER_WIDTH, RENDER_HEIGHT, FPS, output)?;
            let total_frames = recording_frames(deck.len(), args.interval);
            while ffmpeg.frames() < total_frames {
                if rl.window_should_close() {
                    warn!(frames = ffmpeg.frames(), "window closed, recording cut short");
                    break;
                }
                // Fixed step so the video is independent of render speed
                presenter.update(FRAME_TIME);
                render_frame(&mut rl, &thread, &mut framebuffer, &presenter, &images);
                let image = framebuffer
                    .load_image()
                    .map_err(|e| anyhow!("failed to read back frame: {e}"))?;
                ffmpeg.write(&image)?;
            }
        }
        None => {
            while !rl.window_should_close() {
                for key in input::pressed_keys(&rl) {
                    presenter.dispatch(key.action());
                }
                if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
                    let point = view::to_render_space(
                        rl.get_mouse_position(),
                        rl.get_screen_width() as f32,
                        rl.get_screen_height() as f32,
                    );
                    if let Some(control) = view::control_at(point) {
                        presenter.dispatch(control.action());
                    }
                }

                let dt = rl.get_frame_time();
                presenter.update(dt);
                render_frame(&mut rl, &thread, &mut framebuffer, &presenter, &images);
            }
        }
    }

    let last = presenter.current_slide().title;
    let final_state = presenter.shutdown();
    info!(index = final_state.index, slide = last, "presentation closed");
    Ok(())
}

/// Draws the deck into the fixed-size framebuffer, then shows it stretched to the window.
fn render_frame(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    framebuffer: &mut RenderTexture2D,
    presenter: &Presenter,
    images: &SlideImages,
) {
    rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
        let mut d = tmd.begin_drawing(thread);
        view::draw_frame(&mut d, presenter, images);
    });

    let mut d = rl.begin_drawing(thread);
    let sw = d.get_screen_width() as f32;
    let sh = d.get_screen_height() as f32;

    // Render textures are stored upside down
    d.draw_texture_pro(
        &*framebuffer,
        Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
        Rectangle::new(0.0, 0.0, sw, sh),
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}
