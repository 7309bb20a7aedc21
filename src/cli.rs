use std::path::PathBuf;
use clap::Parser;
use crate::constants::AUTOPLAY_INTERVAL;

/// Present the Eco Vibe Bottles investor pitch deck.
#[derive(Parser, Debug)]
#[command(name = "eco-vibe-pitch", version, about)]
pub struct Args {
    /// Directory slide image paths are resolved against
    #[arg(long, default_value = "public")]
    pub assets: PathBuf,

    /// Seconds between automatic slide advances
    #[arg(long, default_value_t = AUTOPLAY_INTERVAL, value_parser = parse_interval)]
    pub interval: f32,

    /// Slide to open on, 1-based; out-of-range values wrap around the deck
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub start: i64,

    /// Start with autoplay paused
    #[arg(long)]
    pub paused: bool,

    /// Switch to fullscreen once the window is open
    #[arg(long)]
    pub fullscreen: bool,

    /// Render one autoplay cycle to this video file instead of presenting
    #[arg(long, value_name = "FILE")]
    pub record: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "eco_vibe_pitch=trace")
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

fn parse_interval(raw: &str) -> Result<f32, String> {
    let secs: f32 = raw.parse().map_err(|e| format!("not a number: {e}"))?;
    if secs.is_finite() && secs > 0.0 {
        Ok(secs)
    } else {
        Err(format!("interval must be a positive number of seconds, got {secs}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_live_deck() {
        let args = Args::try_parse_from(["eco-vibe-pitch"]).unwrap();
        assert_eq!(args.assets, PathBuf::from("public"));
        assert_eq!(args.interval, 12.0);
        assert!(!args.paused);
        assert!(args.record.is_none());
        assert_eq!(args.start, 1);
    }

    #[test]
    fn start_accepts_any_slide_number() {
        let args = Args::try_parse_from(["eco-vibe-pitch", "--start", "-1"]).unwrap();
        assert_eq!(args.start, -1);
        assert!(Args::try_parse_from(["eco-vibe-pitch", "--start", "third"]).is_err());
    }

    #[test]
    fn interval_must_be_positive() {
        assert!(Args::try_parse_from(["eco-vibe-pitch", "--interval", "0"]).is_err());
        assert!(Args::try_parse_from(["eco-vibe-pitch", "--interval", "-3"]).is_err());
        assert!(Args::try_parse_from(["eco-vibe-pitch", "--interval", "soon"]).is_err());
        let args = Args::try_parse_from(["eco-vibe-pitch", "--interval", "2.5"]).unwrap();
        assert_eq!(args.interval, 2.5);
    }

    #[test]
    fn record_takes_a_path() {
        let args = Args::try_parse_from(["eco-vibe-pitch", "--record", "deck.mp4", "--paused"]).unwrap();
        assert_eq!(args.record, Some(PathBuf::from("deck.mp4")));
        assert!(args.paused);
    }
}
