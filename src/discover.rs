//! Input discovery: locating PDF files for a batch.

use crate::error::Result;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// List the PDF files directly inside `dir`, sorted by path.
///
/// Matching is by extension, case-insensitively. Subdirectories are not
/// searched.
///
/// # Example
/// ```no_run
/// let pdfs = ocrpdf::discover::find_pdfs("pdfs").unwrap();
/// for path in &pdfs {
///     println!("{}", path.display());
/// }
/// ```
pub fn find_pdfs<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_pdf_path(&path) {
            found.push(path);
        }
    }
    found.sort();
    log::debug!("Found {} PDF files in {}", found.len(), dir.display());
    Ok(found)
}

/// Whether `path` has a `.pdf` extension (any case).
pub fn is_pdf_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Whether `data` starts with the PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}

/// Whether the file at `path` starts with the PDF header.
pub fn has_pdf_header<P: AsRef<Path>>(path: P) -> bool {
    let mut header = [0u8; 5];
    File::open(path)
        .and_then(|mut file| file.read_exact(&mut header))
        .map(|_| is_pdf_bytes(&header))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_find_pdfs_filters_and_sorts() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.pdf"), b"%PDF-1.4").unwrap();
        fs::write(dir.path().join("A.PDF"), b"%PDF-1.7").unwrap();
        fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
        fs::create_dir(dir.path().join("nested.pdf")).unwrap();

        let names: Vec<String> = find_pdfs(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["A.PDF", "b.pdf"]);
    }

    #[test]
    fn test_find_pdfs_missing_dir() {
        let dir = tempdir().unwrap();
        assert!(find_pdfs(dir.path().join("absent")).is_err());
    }

    #[test]
    fn test_is_pdf_path() {
        assert!(is_pdf_path("scan.pdf"));
        assert!(is_pdf_path("SCAN.Pdf"));
        assert!(!is_pdf_path("scan.pdf.txt"));
        assert!(!is_pdf_path("pdf"));
    }

    #[test]
    fn test_pdf_header() {
        assert!(is_pdf_bytes(b"%PDF-1.4\n"));
        assert!(!is_pdf_bytes(b"Not a PDF"));

        let dir = tempdir().unwrap();
        let good = dir.path().join("good.pdf");
        let short = dir.path().join("short.pdf");
        fs::write(&good, b"%PDF-1.7\n%\xe2\xe3").unwrap();
        fs::write(&short, b"%PD").unwrap();
        assert!(has_pdf_header(&good));
        assert!(!has_pdf_header(&short));
    }
}
