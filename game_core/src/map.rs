use glam::IVec2;
use serde::Serialize;

/// Axis-aligned rectangle in court pixels, origin at the top-left
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Check if two rectangles overlap. Shared edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// The play area, bounded by [0, width] x [0, height]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Court {
    pub width: i32,
    pub height: i32,
}

impl Court {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.width / 2, self.height / 2)
    }

    /// X of the dashed centre line
    pub fn midline_x(&self) -> i32 {
        self.width / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10, 250, 10, 100);
        assert_eq!(rect.left(), 10);
        assert_eq!(rect.right(), 20);
        assert_eq!(rect.top(), 250);
        assert_eq!(rect.bottom(), 350);
        assert_eq!(rect.center(), IVec2::new(15, 300));
    }

    #[test]
    fn test_rect_overlap() {
        let paddle = Rect::new(10, 250, 10, 100);
        assert!(paddle.intersects(&Rect::new(15, 300, 7, 7)));
        assert!(paddle.intersects(&Rect::new(5, 245, 7, 7)), "corner overlap");
        assert!(!paddle.intersects(&Rect::new(40, 300, 7, 7)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let paddle = Rect::new(10, 250, 10, 100);
        assert!(!paddle.intersects(&Rect::new(20, 300, 7, 7)), "right edge");
        assert!(!paddle.intersects(&Rect::new(3, 300, 7, 7)), "left edge");
        assert!(!paddle.intersects(&Rect::new(12, 350, 7, 7)), "bottom edge");
    }

    #[test]
    fn test_court_center() {
        let court = Court::new(800, 600);
        assert_eq!(court.center(), IVec2::new(400, 300));
        assert_eq!(court.midline_x(), 400);
    }
}
