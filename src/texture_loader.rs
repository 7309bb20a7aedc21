use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use anyhow::{Context, Result, anyhow};
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use tracing::{debug, info, warn};

/// Textures for every image the deck references, keyed by `SlideImage::src`.
/// Sources that failed to load are simply absent.
pub struct SlideImages {
    textures: HashMap<&'static str, Texture2D>,
}

impl SlideImages {
    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        assets_dir: &Path,
        sources: &[&'static str],
    ) -> Self {
        let mut textures = HashMap::new();
        for src in sources {
            let path = assets_dir.join(src);
            match load_texture_with_exif_rotation(rl, thread, &path) {
                Ok(texture) => {
                    textures.insert(*src, texture);
                }
                Err(e) => warn!(src, "slide image unavailable, drawing placeholder: {e:#}"),
            }
        }
        info!(loaded = textures.len(), requested = sources.len(), "slide images loaded");
        Self { textures }
    }

    pub fn get(&self, src: &str) -> Option<&Texture2D> {
        self.textures.get(src)
    }
}

/// Rotation needed to display an image upright, from its EXIF orientation tag.
/// Flipped orientations are shown unflipped.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Rotation {
    None,
    Half,
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    pub fn from_orientation(orientation: u16) -> Self {
        match orientation {
            3 => Rotation::Half,
            6 => Rotation::Clockwise,
            8 => Rotation::CounterClockwise,
            _ => Rotation::None,
        }
    }
}

fn read_orientation(file_bytes: &[u8], image_path: &Path) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Not fatal: the image is shown as stored
            debug!(path = %image_path.display(), "no EXIF orientation: {e}");
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read {}", image_path.display()))?;

    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();

    // EXIF is only reliable for JPEG
    let rotation = if extension == "jpg" || extension == "jpeg" {
        Rotation::from_orientation(read_orientation(&file_bytes, image_path))
    } else {
        Rotation::None
    };

    // Extension hint is required when loading from memory
    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| anyhow!("failed to decode {}: {}", image_path.display(), e))?;

    match rotation {
        Rotation::Half => {
            image.rotate_cw();
            image.rotate_cw();
        }
        Rotation::Clockwise => image.rotate_cw(),
        Rotation::CounterClockwise => image.rotate_ccw(),
        Rotation::None => {}
    }
    if rotation != Rotation::None {
        debug!(path = %image_path.display(), ?rotation, "applied EXIF rotation");
    }

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {}", image_path.display(), e))?;

    // Release the CPU-side copy
    drop(image);

    Ok(texture)
}
