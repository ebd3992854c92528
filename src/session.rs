//! An editing session over the rasterised pages of one document.

use crate::annotation::{Annotation, Applied};
use crate::error::{Error, Result};
use crate::history::History;
use image::{Rgb, RgbImage};
use log::{info, warn};

#[derive(Debug, Clone)]
struct Page {
    original: RgbImage,
    canvas: RgbImage,
}

/// Pages of a document, the edits made to them and the undo history of the
/// page being edited.
///
/// Each page keeps its edits when another page is shown. The undo history
/// only covers the current page and is cleared on navigation.
///
/// # Examples
/// ```
/// use image::{Rgb, RgbImage};
/// use plancolor::annotation::Annotation;
/// use plancolor::fill::FillOptions;
/// use plancolor::session::Session;
///
/// let page = RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]));
/// let mut session = Session::new(vec![page.clone(), page]).unwrap();
///
/// let fill = Annotation::Fill { x: 3, y: 3, options: FillOptions::default() };
/// session.apply(&fill, Rgb([0, 128, 0])).unwrap();
/// assert_eq!(session.canvas().get_pixel(0, 0), &Rgb([0, 128, 0]));
///
/// assert!(session.undo());
/// assert_eq!(session.canvas().get_pixel(0, 0), &Rgb([255, 255, 255]));
/// assert!(!session.undo());
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    pages: Vec<Page>,
    current: usize,
    history: History<RgbImage>,
}

impl Session {
    /// Starts a session on the given pages, showing the first one.
    pub fn new(pages: Vec<RgbImage>) -> Result<Session> {
        Session::with_history(pages, History::default())
    }

    /// Starts a session with a custom undo history, for example one with a
    /// smaller capacity for very large pages.
    pub fn with_history(pages: Vec<RgbImage>, history: History<RgbImage>) -> Result<Session> {
        if pages.is_empty() {
            return Err(Error::NoPages);
        }
        let pages = pages
            .into_iter()
            .map(|original| Page {
                canvas: original.clone(),
                original,
            })
            .collect::<Vec<_>>();
        info!("opened document with {} pages", pages.len());
        Ok(Session {
            pages,
            current: 0,
            history,
        })
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Zero-based index of the page being edited.
    pub fn current_page(&self) -> usize {
        self.current
    }

    /// The current page with its edits.
    pub fn canvas(&self) -> &RgbImage {
        &self.pages[self.current].canvas
    }

    /// The current page as it was loaded.
    pub fn original(&self) -> &RgbImage {
        &self.pages[self.current].original
    }

    /// Number of edits that can be undone on the current page.
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Switches to another page. The undo history is cleared.
    pub fn go_to_page(&mut self, index: usize) -> Result<()> {
        if index >= self.pages.len() {
            return Err(Error::PageOutOfRange {
                index,
                count: self.pages.len(),
            });
        }
        if index != self.current {
            info!("showing page {} of {}", index + 1, self.pages.len());
            self.current = index;
            self.history.clear();
        }
        Ok(())
    }

    /// Applies an annotation to the current page in `color`.
    ///
    /// An edit that changed the page can be undone. If the annotation fails
    /// the page is restored to its state before the call and the error is
    /// returned.
    pub fn apply(&mut self, annotation: &Annotation, color: Rgb<u8>) -> Result<Applied> {
        let snapshot = self.pages[self.current].canvas.clone();
        let canvas = &mut self.pages[self.current].canvas;
        match annotation.apply(canvas, color) {
            Ok(Applied::Changed) => {
                self.history.push(snapshot);
                Ok(Applied::Changed)
            }
            Ok(Applied::Unchanged) => Ok(Applied::Unchanged),
            Err(err) => {
                warn!(
                    "{} failed on page {}: {}",
                    annotation.tool(),
                    self.current + 1,
                    err
                );
                *canvas = snapshot;
                Err(err)
            }
        }
    }

    /// Reverts the most recent edit of the current page. Returns `false` if
    /// there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.pages[self.current].canvas = snapshot;
                true
            }
            None => false,
        }
    }

    /// Discards every edit of the current page.
    pub fn reset_page(&mut self) {
        let page = &mut self.pages[self.current];
        page.canvas = page.original.clone();
        self.history.clear();
        info!("reset page {}", self.current + 1);
    }

    /// Every page with its edits, in document order.
    pub fn pages(&self) -> impl ExactSizeIterator<Item = &RgbImage> + '_ {
        self.pages.iter().map(|page| &page.canvas)
    }
}
