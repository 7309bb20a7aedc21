use std::io::Write;
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};
use anyhow::{Context, Result, bail};
use raylib::prelude::*;
use tracing::{info, warn};

/// Streams raw RGBA frames into an ffmpeg child process encoding H.264.
pub struct Ffmpeg {
    process: Child,
    stdin: Option<ChildStdin>,
    frames: u64,
}

impl Ffmpeg {
    pub fn new(width: i32, height: i32, fps: u32, output: &Path) -> Result<Ffmpeg> {
        let mut process = Command::new("ffmpeg")
            .stdin(Stdio::piped())
            .args(["-loglevel", "error"])
            .arg("-y")
            .args(["-f", "rawvideo"])
            .args(["-pixel_format", "rgba"])
            .args(["-video_size", &format!("{}x{}", width, height)])
            .args(["-framerate", &format!("{}", fps)])
            .args(["-i", "-"])
            .args(["-c:v", "libx264"])
            .args(["-pix_fmt", "yuv420p"])
            .arg(output)
            .spawn()
            .context("failed to start ffmpeg, is it on PATH?")?;
        let stdin = process.stdin.take().context("failed to open ffmpeg stdin")?;
        info!(output = %output.display(), width, height, fps, "recording started");
        Ok(Ffmpeg { process, stdin: Some(stdin), frames: 0 })
    }

    /// Writes one frame grabbed from the render texture.
    pub fn write(&mut self, image: &Image) -> Result<()> {
        let width = image.width() as usize;
        let height = image.height() as usize;
        let len = width * height * 4; // RGBA
        let Some(stdin) = self.stdin.as_mut() else {
            bail!("ffmpeg stdin already closed");
        };
        // SAFETY: images read back from a render texture are uncompressed RGBA8,
        // so `data` points to exactly width * height * 4 bytes owned by `image`.
        let pixels = unsafe { std::slice::from_raw_parts(image.data() as *const u8, len) };
        write_flipped(stdin, pixels, width * 4).context("failed to write frame to ffmpeg")?;
        self.frames += 1;
        Ok(())
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Writes rows bottom-up: raylib render textures are stored upside down
/// relative to what ffmpeg expects.
pub fn write_flipped(out: &mut impl Write, pixels: &[u8], row_len: usize) -> std::io::Result<()> {
    for row in pixels.chunks_exact(row_len).rev() {
        out.write_all(row)?;
    }
    Ok(())
}

impl Drop for Ffmpeg {
    fn drop(&mut self) {
        // Closing stdin signals end of stream
        self.stdin = None;
        match self.process.wait() {
            Ok(status) if status.success() => info!(frames = self.frames, "recording finished"),
            Ok(status) => warn!(%status, "ffmpeg exited with failure"),
            Err(e) => warn!("failed to wait for ffmpeg: {e}"),
        }
    }
}
