//! Draws the deck onto the fixed-size render surface.
//!
//! Everything here is laid out in render coordinates (1920x1080). The
//! window shows the render texture stretched, so pointer positions are
//! mapped back with [`to_render_space`] before hit testing.

use std::borrow::Cow;
use raylib::prelude::*;
use raylib::core::text::measure_text;
use crate::constants::*;
use crate::deck::{Accent, Slide};
use crate::input::Control;
use crate::presenter::Presenter;
use crate::texture_loader::SlideImages;
use crate::transition::Pose;

const TAGLINE: &str = "Eco Vibe Bottles — Hydration, reimagined.";

const BACKGROUND: u32 = 0x020617ff;
const PANEL: u32 = 0xffffff0d;
const TEXT: u32 = 0xffffffff;
const TEXT_SOFT: u32 = 0xffffffcc;
const TEXT_MUTED: u32 = 0xffffff99;
const EMERALD: u32 = 0x34d399ff;
const SKY: u32 = 0x38bdf8ff;
const INDIGO: u32 = 0x818cf8ff;
const BUTTON: u32 = 0xffffff1a;

const SECTION: Rectangle = Rectangle { x: 96.0, y: 140.0, width: 1728.0, height: 800.0 };
const LEFT_COLUMN: Rectangle = Rectangle { x: 160.0, y: 196.0, width: 840.0, height: 700.0 };
const IMAGE_PANEL: Rectangle = Rectangle { x: 1060.0, y: 196.0, width: 700.0, height: 700.0 };
const STATS_HEIGHT: f32 = 140.0;

const PREVIOUS_BUTTON: Rectangle = Rectangle { x: 120.0, y: 972.0, width: 56.0, height: 56.0 };
const NEXT_BUTTON: Rectangle = Rectangle { x: 192.0, y: 972.0, width: 56.0, height: 56.0 };
const PLAY_BUTTON: Rectangle = Rectangle { x: 264.0, y: 972.0, width: 176.0, height: 56.0 };
const PROGRESS_BAR: Rectangle = Rectangle { x: 480.0, y: 995.0, width: 1140.0, height: 10.0 };

pub fn hex_color(rgba: u32) -> Color {
    Color::new((rgba >> 24) as u8, (rgba >> 16) as u8, (rgba >> 8) as u8, rgba as u8)
}

fn faded(rgba: u32, opacity: f32) -> Color {
    let color = hex_color(rgba);
    let alpha = (color.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
    Color::new(color.r, color.g, color.b, alpha)
}

/// Maps a window position to render coordinates.
pub fn to_render_space(point: Vector2, screen_width: f32, screen_height: f32) -> Vector2 {
    Vector2::new(
        point.x * RENDER_WIDTH as f32 / screen_width.max(1.0),
        point.y * RENDER_HEIGHT as f32 / screen_height.max(1.0),
    )
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x && point.x < rect.x + rect.width && point.y >= rect.y && point.y < rect.y + rect.height
}

pub fn controls() -> [(Control, Rectangle); 3] {
    [
        (Control::Previous, PREVIOUS_BUTTON),
        (Control::Next, NEXT_BUTTON),
        (Control::PlayPause, PLAY_BUTTON),
    ]
}

/// Control under `point` (render coordinates), if any.
pub fn control_at(point: Vector2) -> Option<Control> {
    controls()
        .into_iter()
        .find(|(_, rect)| contains(rect, point))
        .map(|(control, _)| control)
}

pub fn progress_fraction(index: usize, len: usize) -> f32 {
    (index + 1) as f32 / len.max(1) as f32
}

pub fn counter_label(index: usize, len: usize) -> String {
    format!("{:02} / {:02}", index + 1, len)
}

pub fn play_label(autoplaying: bool) -> &'static str {
    if autoplaying { "Pause" } else { "Play" }
}

/// Swaps glyphs missing from raylib's default font for ASCII look-alikes.
pub fn printable(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '—' | '–' => out.push('-'),
            '™' => out.push_str("(TM)"),
            '’' | '‘' => out.push('\''),
            '“' | '”' => out.push('"'),
            '₀'..='₉' => out.push(char::from(b'0' + (c as u32 - '₀' as u32) as u8)),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Greedy word wrap. A single word wider than `max_width` gets a line of its own.
pub fn wrap_text(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{line} {word}");
        if measure(&candidate) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Source rectangle that crops a texture to fill `dest` without distortion.
pub fn cover_source(tex_width: f32, tex_height: f32, dest_width: f32, dest_height: f32) -> Rectangle {
    let scale = (dest_width / tex_width).max(dest_height / tex_height);
    let width = dest_width / scale;
    let height = dest_height / scale;
    Rectangle::new((tex_width - width) * 0.5, (tex_height - height) * 0.5, width, height)
}

fn draw_wrapped(
    d: &mut impl RaylibDraw,
    text: &str,
    x: f32,
    y: f32,
    width: f32,
    size: i32,
    line_height: f32,
    color: Color,
) -> f32 {
    let mut y = y;
    for line in wrap_text(&printable(text), width as i32, |s| measure_text(s, size)) {
        d.draw_text(&line, x as i32, y as i32, size, color);
        y += line_height;
    }
    y
}

pub fn draw_frame(d: &mut impl RaylibDraw, presenter: &Presenter, images: &SlideImages) {
    d.clear_background(hex_color(BACKGROUND));

    draw_header(d);
    d.draw_rectangle_rounded(SECTION, 0.06, 16, hex_color(PANEL));

    let deck = presenter.deck();
    let content = presenter.content();
    let image = presenter.image();

    draw_text_column(d, deck.get(content.shown()), content.pose());
    draw_image_panel(d, deck.get(image.shown()), image.pose(), images);
    draw_stats(d, deck.get(content.shown()), content.pose());

    let state = presenter.state();
    draw_footer(d, state.index, deck.len(), state.autoplaying);
}

fn draw_header(d: &mut impl RaylibDraw) {
    d.draw_rectangle_rounded(Rectangle::new(96.0, 56.0, 210.0, 36.0), 1.0, 16, hex_color(BUTTON));
    d.draw_text("ECO VIBE LABS", 116, 66, 16, hex_color(TEXT_SOFT));
    d.draw_text("Inspired by LARQ innovation", 326, 66, 18, hex_color(TEXT_MUTED));

    let live = "LIVE PITCH MODE";
    let width = measure_text(live, 16);
    d.draw_circle(1824 - width - 18, 74, 5.0, hex_color(EMERALD));
    d.draw_text(live, 1824 - width, 66, 16, hex_color(TEXT_MUTED));
}

fn draw_text_column(d: &mut impl RaylibDraw, slide: &Slide, pose: Pose) {
    let x = LEFT_COLUMN.x;
    let width = LEFT_COLUMN.width;
    let mut y = LEFT_COLUMN.y + pose.offset_y;

    d.draw_rectangle_gradient_h(x as i32, y as i32 + 6, 40, 8, faded(EMERALD, pose.opacity), faded(SKY, pose.opacity));
    d.draw_text(&printable(&slide.label.to_uppercase()), x as i32 + 56, y as i32, 18, faded(TEXT_SOFT, pose.opacity));
    y += 48.0;

    y = draw_wrapped(d, slide.title, x, y, width, 60, 68.0, faded(TEXT, pose.opacity));
    y += 16.0;

    if let Some(subtitle) = slide.subtitle {
        y = draw_wrapped(d, subtitle, x, y, width, 26, 36.0, faded(TEXT_SOFT, pose.opacity));
        y += 24.0;
    }

    for paragraph in slide.paragraphs {
        y = draw_wrapped(d, paragraph, x, y, width, 20, 28.0, faded(TEXT_SOFT, pose.opacity));
        y += 14.0;
    }

    for bullet in slide.bullets {
        d.draw_circle(x as i32 + 5, y as i32 + 10, 5.0, faded(EMERALD, pose.opacity));
        y = draw_wrapped(d, bullet, x + 28.0, y, width - 28.0, 20, 28.0, faded(TEXT_SOFT, pose.opacity));
        y += 12.0;
    }

    if let Some(note) = slide.footer_note {
        let bottom = LEFT_COLUMN.y + LEFT_COLUMN.height - 20.0 + pose.offset_y;
        draw_wrapped(d, &note.to_uppercase(), x, bottom.max(y), width, 14, 20.0, faded(TEXT_MUTED, pose.opacity));
    }
}

fn draw_accent(d: &mut impl RaylibDraw, accent: Accent) {
    let glow = Rectangle::new(IMAGE_PANEL.x - 24.0, IMAGE_PANEL.y - 24.0, IMAGE_PANEL.width + 48.0, IMAGE_PANEL.height + 48.0);
    let half = glow.width * 0.5;
    let fade = |rgba: u32| faded(rgba, 0.45);
    d.draw_rectangle_gradient_h(glow.x as i32, glow.y as i32, half as i32, glow.height as i32, fade(accent.from), fade(accent.via));
    d.draw_rectangle_gradient_h((glow.x + half) as i32, glow.y as i32, half as i32, glow.height as i32, fade(accent.via), fade(accent.to));
}

fn draw_image_panel(d: &mut impl RaylibDraw, slide: &Slide, pose: Pose, images: &SlideImages) {
    draw_accent(d, slide.accent);
    d.draw_rectangle_rounded(IMAGE_PANEL, 0.08, 16, hex_color(0x0f172aff));

    let area = Rectangle::new(IMAGE_PANEL.x + 8.0, IMAGE_PANEL.y + 8.0, IMAGE_PANEL.width - 16.0, IMAGE_PANEL.height - STATS_HEIGHT - 8.0);
    let width = area.width * pose.scale;
    let height = area.height * pose.scale;
    let origin = Vector2::new(width * 0.5, height * 0.5);
    let dest = Rectangle::new(area.x + area.width * 0.5, area.y + area.height * 0.5, width, height);

    match images.get(slide.image.src) {
        Some(texture) => {
            let source = cover_source(texture.width() as f32, texture.height() as f32, area.width, area.height);
            d.draw_texture_pro(texture, source, dest, origin, pose.rotation, faded(0xffffffff, pose.opacity));
        }
        None => {
            d.draw_rectangle_pro(dest, origin, pose.rotation, faded(0x1e293bff, pose.opacity));
            let label = "Image unavailable";
            let label_width = measure_text(label, 20);
            d.draw_text(label, (dest.x - label_width as f32 * 0.5) as i32, (dest.y - 10.0) as i32, 20, faded(TEXT_MUTED, pose.opacity));
        }
    }

    // Caption overlay along the bottom of the image
    let caption_y = area.y + area.height - 56.0;
    d.draw_rectangle_gradient_v(area.x as i32, (caption_y - 40.0) as i32, area.width as i32, 96, faded(0x00000000, pose.opacity), faded(0x000000b3, pose.opacity));
    d.draw_text(&printable(slide.image.alt), area.x as i32 + 24, caption_y as i32 + 20, 16, faded(TEXT_SOFT, pose.opacity));
    if let Some(credit) = slide.image.credit {
        let credit = printable(credit);
        let credit_width = measure_text(&credit, 16);
        d.draw_text(&credit, (area.x + area.width) as i32 - 24 - credit_width, caption_y as i32 + 20, 16, faded(TEXT_SOFT, pose.opacity));
    }
}

fn draw_stats(d: &mut impl RaylibDraw, slide: &Slide, pose: Pose) {
    let strip = Rectangle::new(IMAGE_PANEL.x + 16.0, IMAGE_PANEL.y + IMAGE_PANEL.height - STATS_HEIGHT + 16.0, IMAGE_PANEL.width - 32.0, STATS_HEIGHT - 32.0);

    if slide.stats.is_empty() {
        d.draw_text(&printable(&TAGLINE.to_uppercase()), strip.x as i32 + 8, (strip.y + strip.height * 0.5) as i32 - 8, 16, hex_color(TEXT_MUTED));
        return;
    }

    let gap = 12.0;
    let columns = slide.stats.len() as f32;
    let cell_width = (strip.width - gap * (columns - 1.0)) / columns;
    for (i, stat) in slide.stats.iter().enumerate() {
        let cell = Rectangle::new(strip.x + i as f32 * (cell_width + gap), strip.y + pose.offset_y, cell_width, strip.height);
        d.draw_rectangle_rounded(cell, 0.2, 12, faded(PANEL, pose.opacity));

        let label = printable(&stat.label.to_uppercase()).into_owned();
        let value = printable(stat.value);
        let label_width = measure_text(&label, 14);
        let value_width = measure_text(&value, 30);
        let center = cell.x + cell.width * 0.5;
        d.draw_text(&label, (center - label_width as f32 * 0.5) as i32, cell.y as i32 + 22, 14, faded(TEXT_MUTED, pose.opacity));
        d.draw_text(&value, (center - value_width as f32 * 0.5) as i32, cell.y as i32 + 50, 30, faded(TEXT, pose.opacity));
    }
}

fn draw_chevron(d: &mut impl RaylibDraw, rect: Rectangle, pointing_right: bool) {
    let cx = rect.x + rect.width * 0.5;
    let cy = rect.y + rect.height * 0.5;
    let dx = if pointing_right { 5.0 } else { -5.0 };
    let tip = Vector2::new(cx + dx, cy);
    let color = hex_color(TEXT);
    d.draw_line_ex(Vector2::new(cx - dx, cy - 10.0), tip, 3.0, color);
    d.draw_line_ex(Vector2::new(cx - dx, cy + 10.0), tip, 3.0, color);
}

fn draw_footer(d: &mut impl RaylibDraw, index: usize, len: usize, autoplaying: bool) {
    for rect in [PREVIOUS_BUTTON, NEXT_BUTTON] {
        d.draw_circle((rect.x + rect.width * 0.5) as i32, (rect.y + rect.height * 0.5) as i32, rect.width * 0.5, hex_color(BUTTON));
    }
    draw_chevron(d, PREVIOUS_BUTTON, false);
    draw_chevron(d, NEXT_BUTTON, true);

    d.draw_rectangle_rounded(PLAY_BUTTON, 1.0, 16, hex_color(BUTTON));
    let icon_x = PLAY_BUTTON.x + 28.0;
    let icon_y = PLAY_BUTTON.y + PLAY_BUTTON.height * 0.5;
    if autoplaying {
        d.draw_rectangle((icon_x - 6.0) as i32, (icon_y - 8.0) as i32, 4, 16, hex_color(TEXT));
        d.draw_rectangle((icon_x + 2.0) as i32, (icon_y - 8.0) as i32, 4, 16, hex_color(TEXT));
    } else {
        // Counter-clockwise winding, raylib culls the other one
        d.draw_triangle(
            Vector2::new(icon_x - 6.0, icon_y - 9.0),
            Vector2::new(icon_x - 6.0, icon_y + 9.0),
            Vector2::new(icon_x + 8.0, icon_y),
            hex_color(TEXT),
        );
    }
    d.draw_text(&play_label(autoplaying).to_uppercase(), (icon_x + 24.0) as i32, (icon_y - 8.0) as i32, 16, hex_color(TEXT_SOFT));

    d.draw_rectangle_rounded(PROGRESS_BAR, 1.0, 8, hex_color(BUTTON));
    let filled = Rectangle { width: PROGRESS_BAR.width * progress_fraction(index, len), ..PROGRESS_BAR };
    let half = (filled.width * 0.5) as i32;
    d.draw_rectangle_gradient_h(filled.x as i32, filled.y as i32, half, filled.height as i32, hex_color(EMERALD), hex_color(SKY));
    d.draw_rectangle_gradient_h(filled.x as i32 + half, filled.y as i32, filled.width as i32 - half, filled.height as i32, hex_color(SKY), hex_color(INDIGO));

    let counter = counter_label(index, len);
    let counter_width = measure_text(&counter, 20);
    d.draw_text(&counter, 1824 - counter_width, 990, 20, hex_color(TEXT_MUTED));
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fixed-width stand-in for font metrics
    fn monospace(s: &str) -> i32 {
        s.chars().count() as i32 * 10
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap_text("Build, Scale, Expand the premium hydration category", 150, monospace);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(monospace(line) <= 150, "{line:?} too wide");
        }
        assert_eq!(lines.join(" "), "Build, Scale, Expand the premium hydration category");
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        let lines = wrap_text("a supercalifragilistic b", 50, monospace);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn empty_text_wraps_to_nothing() {
        assert!(wrap_text("   ", 100, monospace).is_empty());
    }

    #[test]
    fn counter_is_zero_padded() {
        assert_eq!(counter_label(0, 9), "01 / 09");
        assert_eq!(counter_label(8, 9), "09 / 09");
        assert_eq!(counter_label(11, 12), "12 / 12");
    }

    #[test]
    fn progress_fills_on_last_slide() {
        assert_eq!(progress_fraction(8, 9), 1.0);
        assert!((progress_fraction(0, 9) - 1.0 / 9.0).abs() < f32::EPSILON);
    }

    #[test]
    fn play_button_reflects_autoplay() {
        assert_eq!(play_label(true), "Pause");
        assert_eq!(play_label(false), "Play");
    }

    #[test]
    fn clicks_hit_the_right_control() {
        assert_eq!(control_at(Vector2::new(148.0, 1000.0)), Some(Control::Previous));
        assert_eq!(control_at(Vector2::new(220.0, 1000.0)), Some(Control::Next));
        assert_eq!(control_at(Vector2::new(350.0, 1000.0)), Some(Control::PlayPause));
        assert_eq!(control_at(Vector2::new(900.0, 500.0)), None);
    }

    #[test]
    fn window_coordinates_scale_to_render_space() {
        let p = to_render_space(Vector2::new(480.0, 270.0), 960.0, 540.0);
        assert_eq!((p.x, p.y), (960.0, 540.0));
    }

    #[test]
    fn cover_crops_wide_images_horizontally() {
        let src = cover_source(2000.0, 1000.0, 500.0, 500.0);
        assert_eq!((src.x, src.y, src.width, src.height), (500.0, 0.0, 1000.0, 1000.0));
    }

    #[test]
    fn printable_swaps_missing_glyphs() {
        assert_eq!(printable("CO₂ Offset"), "CO2 Offset");
        assert_eq!(printable("ActivePure™ UV-C"), "ActivePure(TM) UV-C");
        assert_eq!(printable("LARQ—built"), "LARQ-built");
        assert!(matches!(printable("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn every_deck_string_is_printable() {
        let deck = crate::deck::Deck::eco_vibe();
        let mut texts = vec![TAGLINE];
        for slide in deck.slides() {
            texts.extend([slide.label, slide.title, slide.image.alt]);
            texts.extend(slide.subtitle);
            texts.extend(slide.footer_note);
            texts.extend(slide.image.credit);
            texts.extend(slide.bullets.iter().copied());
            texts.extend(slide.paragraphs.iter().copied());
            texts.extend(slide.stats.iter().flat_map(|stat| [stat.label, stat.value]));
        }
        for text in texts {
            assert!(printable(text).is_ascii(), "{text:?} still has non-ASCII glyphs");
        }
    }

    #[test]
    fn hex_colors_unpack_rgba() {
        let c = hex_color(0x34d399ff);
        assert_eq!((c.r, c.g, c.b, c.a), (0x34, 0xd3, 0x99, 0xff));
    }
}
