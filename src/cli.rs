use std::path::PathBuf;

use clap::Parser;

use crate::constants::*;

/// Browse a directory of images as a slider.
#[derive(Debug, Parser)]
#[command(name = "carousel", version, about)]
pub struct Args {
    /// Directory holding the slide images (png, jpg, jpeg, bmp, gif)
    pub image_directory: PathBuf,

    /// Show the slides in random order
    #[arg(long)]
    pub shuffle: bool,

    /// Slide to show first (0-based)
    #[arg(long, value_name = "N")]
    pub start: Option<usize>,

    /// Initial window width
    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    pub width: i32,

    /// Initial window height
    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    pub height: i32,

    /// Opacity of the controls that are not hovered
    #[arg(long, value_name = "OPACITY", default_value_t = DEFAULT_FADE, value_parser = parse_opacity)]
    pub fade: f32,
}

fn parse_opacity(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("opacity must be between 0.0 and 1.0, got {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["carousel", "photos"]).unwrap();
        assert_eq!(args.image_directory, PathBuf::from("photos"));
        assert!(!args.shuffle);
        assert_eq!(args.start, None);
        assert_eq!((args.width, args.height), (960, 540));
        assert_eq!(args.fade, DEFAULT_FADE);
    }

    #[test]
    fn all_options() {
        let args = Args::try_parse_from([
            "carousel", "photos", "--shuffle", "--start", "3", "--width", "1280", "--height", "720", "--fade", "0.25",
        ])
        .unwrap();
        assert!(args.shuffle);
        assert_eq!(args.start, Some(3));
        assert_eq!((args.width, args.height), (1280, 720));
        assert_eq!(args.fade, 0.25);
    }

    #[test]
    fn directory_is_required() {
        assert!(Args::try_parse_from(["carousel"]).is_err());
    }

    #[test]
    fn fade_out_of_range_is_rejected() {
        assert!(Args::try_parse_from(["carousel", "photos", "--fade", "1.5"]).is_err());
        assert!(Args::try_parse_from(["carousel", "photos", "--fade", "dim"]).is_err());
    }
}
