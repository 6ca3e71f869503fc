use anyhow::{Context, Result};
use image_adjust::{PixelBuffer, io};
use tempfile::TempDir;

pub trait Viewer {
    fn show(&mut self, image: &PixelBuffer) -> Result<()>;
}

impl<V: Viewer + ?Sized> Viewer for &mut V {
    fn show(&mut self, image: &PixelBuffer) -> Result<()> {
        (**self).show(image)
    }
}

/// Hands a PNG snapshot to the desktop's default image viewer.
///
/// Snapshots live in a temporary directory that is removed together with
/// the viewer.
pub struct SystemViewer {
    dir: TempDir,
    count: usize,
}

impl SystemViewer {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("phototune-")
            .tempdir()
            .context("create preview directory failed")?;

        Ok(Self { dir, count: 0 })
    }
}

impl Viewer for SystemViewer {
    fn show(&mut self, image: &PixelBuffer) -> Result<()> {
        // A fresh name per snapshot so viewers don't serve a cached copy.
        self.count += 1;
        let path = self.dir.path().join(format!("preview-{}.png", self.count));

        io::save(image, &path, io::DEFAULT_QUALITY)
            .with_context(|| format!("write preview {} failed", path.display()))?;
        open::that_detached(&path).with_context(|| format!("open {} failed", path.display()))?;

        log::debug!("showing {}", path.display());
        Ok(())
    }
}
