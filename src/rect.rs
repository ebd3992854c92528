//! Basic manipulation of rectangles.

/// A rectangular region of non-zero width and height.
///
/// # Examples
/// ```
/// use plancolor::rect::Rect;
///
/// // Construct a rectangle with top-left corner at (4, 5), width 6 and height 7.
/// let rect = Rect::at(4, 5).of_size(6, 7);
///
/// // Contains top-left point:
/// assert_eq!(rect.left(), 4);
/// assert_eq!(rect.top(), 5);
/// assert!(rect.contains(rect.left(), rect.top()));
///
/// // Contains bottom-right point, at (left + width - 1, top + height - 1):
/// assert_eq!(rect.right(), 9);
/// assert_eq!(rect.bottom(), 11);
/// assert!(rect.contains(rect.right(), rect.bottom()));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    left: i32,
    top: i32,
    width: u32,
    height: u32,
}

impl Rect {
    /// Reduces possibility of confusing coordinates and dimensions
    /// when specifying rects.
    ///
    /// See the [struct-level documentation](Rect) for examples.
    pub fn at(x: i32, y: i32) -> RectPosition {
        RectPosition { left: x, top: y }
    }

    /// The smallest rect containing both corners, given in any order.
    ///
    /// This is how a rectangle dragged out between two points is described.
    ///
    /// # Examples
    /// ```
    /// use plancolor::rect::Rect;
    ///
    /// let r = Rect::from_corners((8, 2), (3, 6));
    /// assert_eq!(r, Rect::at(3, 2).of_size(6, 5));
    /// ```
    ///
    /// A span covering every `i32` is one wider than a `u32` can hold, so its
    /// size saturates at `u32::MAX`.
    pub fn from_corners(a: (i32, i32), b: (i32, i32)) -> Rect {
        let left = a.0.min(b.0);
        let top = a.1.min(b.1);
        let width = a.0.abs_diff(b.0).saturating_add(1);
        let height = a.1.abs_diff(b.1).saturating_add(1);
        Rect::at(left, top).of_size(width, height)
    }

    /// Smallest y-coordinate reached by rect.
    pub fn top(&self) -> i32 {
        self.top
    }

    /// Smallest x-coordinate reached by rect.
    pub fn left(&self) -> i32 {
        self.left
    }

    /// Greatest y-coordinate reached by rect, clamped to `i32::MAX`.
    pub fn bottom(&self) -> i32 {
        last_coord(self.top, self.height)
    }

    /// Greatest x-coordinate reached by rect, clamped to `i32::MAX`.
    pub fn right(&self) -> i32 {
        last_coord(self.left, self.width)
    }

    /// Width of rect.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of rect.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels covered by rect.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether the point `(x, y)` lies inside rect, boundary included.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.left <= x && x <= self.right() && self.top <= y && y <= self.bottom()
    }

    /// Returns the intersection of self and other, or none if they are are disjoint.
    ///
    /// # Examples
    /// ```
    /// use plancolor::rect::Rect;
    ///
    /// // Intersecting a rectangle with itself
    /// let r = Rect::at(4, 5).of_size(6, 7);
    /// assert_eq!(r.intersect(r), Some(r));
    ///
    /// // Intersecting overlapping but non-equal rectangles
    /// let r = Rect::at(0, 0).of_size(5, 5);
    /// let s = Rect::at(1, 4).of_size(10, 12);
    /// let i = Rect::at(1, 4).of_size(4, 1);
    /// assert_eq!(r.intersect(s), Some(i));
    ///
    /// // Intersecting disjoint rectangles
    /// let r = Rect::at(0, 0).of_size(5, 5);
    /// let s = Rect::at(10, 10).of_size(100, 12);
    /// assert_eq!(r.intersect(s), None);
    /// ```
    pub fn intersect(&self, other: Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right < left || bottom < top {
            return None;
        }

        Some(Rect::from_corners((left, top), (right, bottom)))
    }

    /// Smallest rect containing both self and the point `(x, y)`.
    pub fn expand_to(&self, x: i32, y: i32) -> Rect {
        Rect::from_corners(
            (self.left.min(x), self.top.min(y)),
            (self.right().max(x), self.bottom().max(y)),
        )
    }
}

fn last_coord(start: i32, len: u32) -> i32 {
    let end = start as i64 + len as i64 - 1;
    end.min(i32::MAX as i64) as i32
}

/// Position of the top left of a rectangle.
/// Only used when building a [`Rect`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RectPosition {
    left: i32,
    top: i32,
}

impl RectPosition {
    /// Construct a rectangle from a position and size. Width and height
    /// are required to be strictly positive.
    ///
    /// See the [`Rect`] documentation for examples.
    pub fn of_size(self, width: u32, height: u32) -> Rect {
        assert!(width > 0, "width must be strictly positive");
        assert!(height > 0, "height must be strictly positive");
        Rect {
            left: self.left,
            top: self.top,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    #[should_panic]
    fn test_rejects_empty_rectangle() {
        Rect::at(1, 2).of_size(0, 1);
    }

    #[test]
    fn test_contains() {
        let r = Rect::at(5, 5).of_size(4, 4);
        assert!(r.contains(5, 5));
        assert!(r.contains(8, 8));
        assert!(!r.contains(9, 8));
        assert!(!r.contains(4, 5));
    }

    #[test]
    fn test_extreme_extents() {
        let r = Rect::from_corners((i32::MIN, -5), (i32::MAX, 9));
        assert_eq!(r.width(), u32::MAX);
        assert_eq!(r.left(), i32::MIN);
        assert_eq!(r.bottom(), 9);
        assert!(r.contains(0, 0));

        let r = Rect::from_corners((-5, 0), (i32::MAX, 9));
        assert_eq!(r.right(), i32::MAX);
        assert!(r.contains(i32::MAX, 9));

        let r = Rect::at(i32::MAX - 1, 0).of_size(10, 1);
        assert_eq!(r.right(), i32::MAX);

        let page = Rect::at(0, 0).of_size(20, 10);
        assert_eq!(
            page.intersect(Rect::from_corners((i32::MIN, 5), (i32::MAX, 5))),
            Some(Rect::at(0, 5).of_size(20, 1))
        );
    }

    #[test]
    fn test_expand_to() {
        let r = Rect::at(5, 5).of_size(1, 1);
        let r = r.expand_to(2, 7);
        assert_eq!(r, Rect::at(2, 5).of_size(4, 3));
        assert_eq!(r.area(), 12);
        assert_eq!(r.expand_to(3, 6), r);
    }
}
