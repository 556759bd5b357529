use grid_engine::{Bitmap, Color, Position, Size};

/// Working document of the bitmap editor.
///
/// A marquee selection lives in `floating_layer`, drawn on top of `image`
/// with its top-left corner at `layer_offset`. The offset has no meaning
/// while there is no floating layer and is ignored by equality.
#[derive(Clone, Debug, Default)]
pub struct EditState {
    pub image: Bitmap,
    pub floating_layer: Option<Bitmap>,
    pub layer_offset: Position,
}

impl EditState {
    pub fn new(image: Bitmap) -> Self {
        Self {
            image,
            floating_layer: None,
            layer_offset: Position::default(),
        }
    }

    pub fn size(&self) -> Size {
        self.image.size()
    }

    pub fn width(&self) -> i32 {
        self.image.width()
    }

    pub fn height(&self) -> i32 {
        self.image.height()
    }

    /// Stamps the floating layer onto the image and drops it.
    ///
    /// Color 0 in the layer is transparent.
    pub fn merge_floating_layer(&mut self) {
        if let Some(layer) = self.floating_layer.take() {
            log::trace!("merging floating layer {} at {}", layer.size(), self.layer_offset);
            self.image.apply(&layer, self.layer_offset, true);
        }
    }

    /// Copies a region into a new floating layer placed over its source.
    ///
    /// A negative size moves the corner by that amount and flips the sign, so
    /// `(left, width) = (5, -2)` selects columns 3 and 4. An empty region
    /// leaves the state untouched. With `cut` set the source cells are cleared
    /// to 0.
    pub fn copy_to_layer(&mut self, left: i32, top: i32, width: i32, height: i32, cut: bool) {
        if width == 0 || height == 0 {
            return;
        }
        let (left, width) = if width < 0 { (left + width, -width) } else { (left, width) };
        let (top, height) = if height < 0 { (top + height, -height) } else { (top, height) };

        self.floating_layer = Some(self.image.copy_region(left, top, width, height));
        self.layer_offset = Position::new(left, top);

        if cut {
            for row in top..top + height {
                for col in left..left + width {
                    self.image.set(col, row, 0);
                }
            }
        }
    }

    /// Check if a canvas cell is covered by the floating layer
    pub fn in_floating_layer(&self, col: i32, row: i32) -> bool {
        self.floating_layer.as_ref().is_some_and(|layer| {
            let local = Position::new(col, row) - self.layer_offset;
            layer.size().contains(local)
        })
    }

    /// Visible color at a canvas cell, the floating layer taking precedence
    /// where it is not transparent.
    pub fn color_at(&self, col: i32, row: i32) -> Color {
        if let Some(layer) = &self.floating_layer {
            let color = layer.get(col - self.layer_offset.x, row - self.layer_offset.y);
            if color != 0 {
                return color;
            }
        }
        self.image.get(col, row)
    }
}

impl PartialEq for EditState {
    fn eq(&self, other: &Self) -> bool {
        if self.image != other.image {
            return false;
        }
        match (&self.floating_layer, &other.floating_layer) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b && self.layer_offset == other.layer_offset,
            _ => false,
        }
    }
}

impl Eq for EditState {}
