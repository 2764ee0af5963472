//! Screenshot capture
//!
//! Reads back the finished frame from the canvas and writes it as a PNG
//! named after the local time: `screenshot_YYYYMMDD_HHMMSS.png`. The target
//! directory is created on demand.
//!
//! Failures are returned to the caller, which logs them and carries on; a
//! failed screenshot never interrupts the game.

use chrono::{DateTime, Local};
use sdl2::image::SaveSurface;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::Canvas;
use sdl2::surface::Surface;
use sdl2::video::Window;
use std::fs;
use std::path::{Path, PathBuf};

/// File name for a screenshot taken at `timestamp`
pub fn screenshot_file_name(timestamp: &DateTime<Local>) -> String {
    format!("screenshot_{}.png", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Full path for a screenshot taken now, creating `directory` if needed
pub fn prepare_path(directory: &Path) -> Result<PathBuf, ScreenshotError> {
    if !directory.exists() {
        fs::create_dir_all(directory)?;
    }
    Ok(directory.join(screenshot_file_name(&Local::now())))
}

/// Saves the current contents of `canvas` under `directory`.
///
/// Call after drawing and before presenting; the back buffer is undefined
/// once the frame has been presented.
pub fn take_screenshot(canvas: &Canvas<Window>, directory: &Path) -> Result<PathBuf, ScreenshotError> {
    let path = prepare_path(directory)?;

    let format = PixelFormatEnum::ARGB8888;
    let (width, height) = canvas.output_size().map_err(ScreenshotError::Sdl)?;
    let mut pixels = canvas.read_pixels(None, format).map_err(ScreenshotError::Sdl)?;
    let pitch = format.byte_size_of_pixels(width as usize) as u32;

    let surface = Surface::from_data(&mut pixels, width, height, pitch, format)
        .map_err(ScreenshotError::Sdl)?;
    surface.save(&path).map_err(ScreenshotError::Sdl)?;

    log::info!("Screenshot saved: {}", path.display());
    Ok(path)
}

/// Errors that can occur while writing a screenshot
#[derive(Debug)]
pub enum ScreenshotError {
    IoError(std::io::Error),
    Sdl(String),
}

impl std::fmt::Display for ScreenshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenshotError::IoError(e) => write!(f, "IO error: {}", e),
            ScreenshotError::Sdl(msg) => write!(f, "SDL error: {}", msg),
        }
    }
}

impl std::error::Error for ScreenshotError {}

impl From<std::io::Error> for ScreenshotError {
    fn from(err: std::io::Error) -> Self {
        ScreenshotError::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_file_name_format() {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 30).unwrap();
        assert_eq!(screenshot_file_name(&timestamp), "screenshot_20240309_070530.png");
    }

    #[test]
    fn test_prepare_path_creates_directory() {
        let dir = std::env::temp_dir()
            .join(format!("jazzball_shots_{}", std::process::id()))
            .join("nested");
        let _ = fs::remove_dir_all(&dir);

        let path = prepare_path(&dir).unwrap();

        assert!(dir.is_dir());
        assert_eq!(path.parent(), Some(dir.as_path()));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("screenshot_"));
        assert!(name.ends_with(".png"));
        // screenshot_ + 8 digits + _ + 6 digits + .png
        assert_eq!(name.len(), "screenshot_".len() + 15 + ".png".len());
    }

    #[test]
    fn test_prepare_path_fails_on_file_in_the_way() {
        let blocker = std::env::temp_dir().join(format!("jazzball_blocker_{}", std::process::id()));
        fs::write(&blocker, b"not a directory").unwrap();

        let result = prepare_path(&blocker.join("shots"));
        assert!(matches!(result, Err(ScreenshotError::IoError(_))));
    }
}
