use serde::{Deserialize, Serialize};

use crate::{EngineError, Position, Result, Size};

/// Palette index of a bitmap cell. 0 is transparent.
pub type Color = u8;

/// Row-major grid of color indices.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bitmap {
    size: Size,
    data: Vec<Color>,
}

impl Bitmap {
    /// Creates a bitmap filled with color 0. Negative dimensions are treated as 0.
    pub fn new(size: impl Into<Size>) -> Self {
        let size = size.into();
        let size = Size::new(size.width.max(0), size.height.max(0));
        Self {
            size,
            data: vec![0; size.area()],
        }
    }

    /// Builds a bitmap from rows of color indices.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RaggedBitmap`] if the rows differ in length.
    pub fn from_rows(rows: &[Vec<Color>]) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            if line.len() != width {
                return Err(EngineError::RaggedBitmap {
                    row,
                    expected: width,
                    actual: line.len(),
                });
            }
            data.extend_from_slice(line);
        }
        Ok(Self {
            size: Size::from((width, rows.len())),
            data,
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<Color>> {
        if self.size.width == 0 {
            return vec![Vec::new(); self.size.height as usize];
        }
        self.data.chunks(self.size.width as usize).map(<[Color]>::to_vec).collect()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn is_valid(&self, col: i32, row: i32) -> bool {
        self.size.contains(Position::new(col, row))
    }

    /// Color at `(col, row)`, 0 outside the bitmap.
    pub fn get(&self, col: i32, row: i32) -> Color {
        if self.is_valid(col, row) {
            self.data[row as usize * self.size.width as usize + col as usize]
        } else {
            0
        }
    }

    /// Sets the color at `(col, row)`. Writes outside the bitmap are ignored.
    pub fn set(&mut self, col: i32, row: i32, color: Color) {
        if self.is_valid(col, row) {
            self.data[row as usize * self.size.width as usize + col as usize] = color;
        }
    }

    pub fn fill(&mut self, color: Color) {
        self.data.fill(color);
    }

    /// Copies a region. Cells outside this bitmap read as 0.
    pub fn copy_region(&self, left: i32, top: i32, width: i32, height: i32) -> Bitmap {
        let mut result = Bitmap::new((width, height));
        for r in 0..result.height() {
            for c in 0..result.width() {
                result.set(c, r, self.get(left + c, top + r));
            }
        }
        result
    }

    /// Writes `other` into this bitmap with its top-left corner at `at`.
    /// With `transparent` set, color 0 in `other` leaves the target untouched.
    pub fn apply(&mut self, other: &Bitmap, at: Position, transparent: bool) {
        for r in 0..other.height() {
            for c in 0..other.width() {
                let color = other.get(c, r);
                if transparent && color == 0 {
                    continue;
                }
                self.set(at.x + c, at.y + r, color);
            }
        }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.data
    }
}
