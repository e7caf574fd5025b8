//! Font discovery for right-to-left output.
//!
//! The report is shaped for Persian only when a TrueType font with Persian
//! glyphs is available. The font is located and parsed once at start-up; a
//! font the PDF writer accepts is the shaping capability flag handed to the
//! library.

use ocrpdf::PdfPageWriter;
use std::fs;
use std::path::{Path, PathBuf};

/// Candidate font files, relative to the working directory, in search order.
pub const FONT_CANDIDATES: &[&str] = &[
    "fonts/IRANSans.ttf",
    "fonts/IranSans.ttf",
    "fonts/IRANSans_Bold.ttf",
    "fonts/IRANSans_Black.ttf",
    "IRANSans.ttf",
];

/// Locate a font: `explicit` when given, else the first candidate under `base`.
pub fn find_font(explicit: Option<&Path>, base: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return path.is_file().then(|| path.to_path_buf());
    }
    FONT_CANDIDATES
        .iter()
        .map(|candidate| base.join(candidate))
        .find(|path| path.is_file())
}

/// A font found on disk and read into memory.
pub struct LoadedFont {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl LoadedFont {
    /// Whether the PDF writer can embed these bytes.
    pub fn is_usable(&self) -> bool {
        PdfPageWriter::accepts_font(&self.bytes)
    }
}

/// Find and read a font. Unreadable files are logged and skipped.
pub fn load_font(explicit: Option<&Path>, base: &Path) -> Option<LoadedFont> {
    let path = find_font(explicit, base)?;
    match fs::read(&path) {
        Ok(bytes) => {
            log::debug!("Read font {} ({} bytes)", path.display(), bytes.len());
            Some(LoadedFont { path, bytes })
        }
        Err(e) => {
            log::warn!("Could not read font {}: {}", path.display(), e);
            None
        }
    }
}
