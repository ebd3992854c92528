//! Loading and saving rasterised pages.
//!
//! The image format is chosen from the file extension. Exported documents are
//! written as one PNG per page.

use crate::error::Result;
use crate::session::Session;
use image::{ImageFormat, RgbImage};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a page from disk, converting it to 8-bit RGB.
pub fn load_page(path: impl AsRef<Path>) -> Result<RgbImage> {
    let path = path.as_ref();
    let page = image::open(path)?.into_rgb8();
    debug!(
        "loaded {} ({}x{})",
        path.display(),
        page.width(),
        page.height()
    );
    Ok(page)
}

/// Reads several pages in order.
pub fn load_pages<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Result<Vec<RgbImage>> {
    paths.into_iter().map(load_page).collect()
}

/// Writes a page to disk in the format implied by the extension of `path`.
pub fn save_page(page: &RgbImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    page.save(path)?;
    debug!("saved {}", path.display());
    Ok(())
}

/// Writes every page of `session` to `dir` as `{stem}-001.png`,
/// `{stem}-002.png` and so on, creating `dir` if needed. Returns the paths
/// written, in page order.
pub fn save_pages(session: &Session, dir: impl AsRef<Path>, stem: &str) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(session.page_count());
    for (i, page) in session.pages().enumerate() {
        let path = dir.join(format!("{}-{:03}.png", stem, i + 1));
        page.save_with_format(&path, ImageFormat::Png)?;
        written.push(path);
    }

    info!("exported {} pages to {}", written.len(), dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Annotation;
    use crate::error::Error;
    use crate::fill::FillOptions;
    use image::Rgb;

    #[test]
    fn test_save_and_load_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.png");
        let page = RgbImage::from_fn(7, 3, |x, y| Rgb([x as u8 * 30, y as u8 * 80, 5]));

        save_page(&page, &path).unwrap();
        assert_pixels_eq!(load_page(&path).unwrap(), page);
    }

    #[test]
    fn test_load_missing_page() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_page(dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }

    #[test]
    fn test_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let page = RgbImage::new(2, 2);
        let err = save_page(&page, dir.path().join("page.unknown")).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }

    #[test]
    fn test_save_pages_numbers_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("export");
        let pages = vec![RgbImage::from_pixel(4, 4, Rgb([255, 255, 255])); 2];
        let mut session = Session::new(pages).unwrap();
        session.go_to_page(1).unwrap();
        let fill = Annotation::Fill {
            x: 0,
            y: 0,
            options: FillOptions::default(),
        };
        session.apply(&fill, Rgb([0, 0, 200])).unwrap();

        let written = save_pages(&session, &out, "plan").unwrap();
        assert_eq!(
            written,
            vec![out.join("plan-001.png"), out.join("plan-002.png")]
        );

        let reloaded = load_pages(&written).unwrap();
        assert_eq!(reloaded[0].get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(reloaded[1].get_pixel(3, 3), &Rgb([0, 0, 200]));
    }
}
