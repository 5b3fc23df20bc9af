use crate::keys::Movement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenGeometry {
    rows: u16,
    cols: u16,
}

impl ScreenGeometry {
    /// Returns `None` when either dimension is zero.
    pub fn new(rows: u16, cols: u16) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        Some(Self { rows, cols })
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorPosition {
    pub x: u16,
    pub y: u16,
}

impl CursorPosition {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn apply(&mut self, movement: Movement, geometry: ScreenGeometry) {
        match movement {
            Movement::ArrowLeft => self.x = self.x.saturating_sub(1),
            Movement::ArrowRight => self.x = self.x.saturating_add(1).min(geometry.cols - 1),
            Movement::ArrowUp => self.y = self.y.saturating_sub(1),
            Movement::ArrowDown => self.y = self.y.saturating_add(1).min(geometry.rows - 1),
            Movement::Home => self.x = 0,
            Movement::End => self.x = geometry.cols - 1,
            Movement::PageUp => self.repeat(Movement::ArrowUp, geometry),
            Movement::PageDown => self.repeat(Movement::ArrowDown, geometry),
            // reserved for text mutation
            Movement::Delete => {}
        }
    }

    fn repeat(&mut self, movement: Movement, geometry: ScreenGeometry) {
        for _ in 0..geometry.rows {
            self.apply(movement, geometry);
        }
    }
}
