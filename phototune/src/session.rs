use image_adjust::{Adjust, AdjustResult, Adjustment, PixelBuffer, io};
use std::path::Path;

/// The image being edited and whether it changed since the last save.
#[derive(Debug, Clone)]
pub struct Session {
    image: PixelBuffer,
    modified: bool,
}

impl Session {
    pub fn new(image: PixelBuffer) -> Self {
        Self {
            image,
            modified: false,
        }
    }

    pub fn image(&self) -> &PixelBuffer {
        &self.image
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Replaces the working image with the adjusted one. On error the
    /// session is left as it was.
    pub fn apply(&mut self, adjustment: &Adjustment) -> AdjustResult<()> {
        self.image = adjustment.apply(&self.image)?;
        self.modified = true;
        Ok(())
    }

    pub fn save(&mut self, path: impl AsRef<Path>, quality: u8) -> AdjustResult<()> {
        io::save(&self.image, path, quality)?;
        self.modified = false;
        Ok(())
    }
}
