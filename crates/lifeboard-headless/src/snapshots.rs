use std::path::{Path, PathBuf};

use anyhow::Result;
use image::RgbImage;

/// Snapshot writer for rendered frames
pub struct SnapshotWriter {
    output_dir: PathBuf,
}

impl SnapshotWriter {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }

    /// Save a frame as `frame_NNNN.png`, returning its path
    pub fn write_frame(&self, generation: u64, frame: &RgbImage) -> Result<PathBuf> {
        let filepath = self.output_dir.join(format!("frame_{:04}.png", generation));
        frame.save(&filepath)?;
        Ok(filepath)
    }
}
