use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::photo_pipeline::common::error::{CaptureError, Result};
use crate::photo_pipeline::frame::types::CanonicalImage;
use crate::photo_pipeline::persist::counter::PhotoCounter;
use crate::photo_pipeline::persist::png_writer::PngPhotoWriter;
use crate::photo_pipeline::persist::types::PhotoRecord;
use crate::photo_pipeline::persist::writer::PhotoWriter;
use crate::photo_pipeline::style::types::StyleProfile;

pub const DEFAULT_OUTPUT_DIR: &str = "SavedGameData/Photos";

/// Writes developed photos as `photo_<n>.<ext>` under one directory.
pub struct PhotoPersister<W: PhotoWriter> {
    writer: W,
    output_dir: PathBuf,
    counter: PhotoCounter,
}

impl PhotoPersister<PngPhotoWriter> {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self::with_custom(PngPhotoWriter, output_dir, PhotoCounter::new())
    }
}

impl<W: PhotoWriter> PhotoPersister<W> {
    pub fn with_custom(writer: W, output_dir: impl Into<PathBuf>, counter: PhotoCounter) -> Self {
        Self {
            writer,
            output_dir: output_dir.into(),
            counter,
        }
    }

    /// Encodes `image` and writes it under the next sequence number.
    ///
    /// The number is claimed before encoding and is not returned on failure,
    /// so a failed write leaves a gap. No partial file is left behind.
    #[instrument(skip(self, image, style), fields(width = image.width, height = image.height, profile = %style.name))]
    pub fn persist(&mut self, image: &CanonicalImage, style: &StyleProfile) -> Result<PhotoRecord> {
        std::fs::create_dir_all(&self.output_dir)?;

        let sequence_number = self
            .counter
            .next()
            .ok_or(CaptureError::SequenceExhausted(self.counter.last()))?;
        let file_path = self
            .output_dir
            .join(format!("photo_{}.{}", sequence_number, self.writer.extension()));

        let mut encoded = Vec::new();
        if let Err(e) = self.writer.write_photo(image, &mut encoded) {
            warn!(sequence_number, "Encoding failed, sequence number skipped: {}", e);
            return Err(e);
        }

        if let Err(e) = std::fs::write(&file_path, &encoded) {
            remove_partial(&file_path);
            warn!(sequence_number, "Write failed, sequence number skipped: {}", e);
            return Err(CaptureError::OutputWriteError(format!(
                "{}: {}",
                file_path.display(),
                e
            )));
        }

        info!(sequence_number, path = %file_path.display(), "Photo saved");
        Ok(PhotoRecord {
            sequence_number,
            file_path,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn counter(&self) -> &PhotoCounter {
        &self.counter
    }
}

fn remove_partial(path: &Path) {
    if path.exists() {
        if let Err(e) = std::fs::remove_file(path) {
            warn!("Could not remove partial file {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    struct FailingWriter;

    impl PhotoWriter for FailingWriter {
        fn extension(&self) -> &str {
            "png"
        }

        fn write_photo(&self, _image: &CanonicalImage, output: &mut dyn Write) -> Result<()> {
            output.write_all(b"half a png")?;
            Err(CaptureError::EncodeError("Mock encode error".to_string()))
        }
    }

    #[test]
    fn test_sequence_numbers_are_monotonic() {
        let dir = tempfile::tempdir().unwrap();
        let mut persister = PhotoPersister::new(dir.path().join("Photos"));
        let image = CanonicalImage::filled(4, 4, [10, 20, 30, 255]);
        let style = StyleProfile::photo_mode();

        for expected in 1..=5 {
            let record = persister.persist(&image, &style).unwrap();
            assert_eq!(record.sequence_number, expected);
            assert_eq!(
                record.file_path,
                dir.path().join("Photos").join(format!("photo_{}.png", expected))
            );
            assert!(record.file_path.is_file());
        }
    }

    #[test]
    fn test_failed_encode_leaves_gap_and_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut persister = PhotoPersister::with_custom(FailingWriter, dir.path(), PhotoCounter::new());
        let image = CanonicalImage::filled(2, 2, [0, 0, 0, 255]);

        let result = persister.persist(&image, &StyleProfile::camera());
        assert!(matches!(result, Err(CaptureError::EncodeError(_))));
        assert_eq!(persister.counter().last(), 1);
        assert!(!dir.path().join("photo_1.png").exists());
    }

    #[test]
    fn test_gap_after_failure_then_success() {
        let dir = tempfile::tempdir().unwrap();
        let mut persister = PhotoPersister::new(dir.path());
        let style = StyleProfile::photo_mode();

        let empty = CanonicalImage::from_raw(0, 0, Vec::new()).unwrap();
        assert!(persister.persist(&empty, &style).is_err());

        let record = persister
            .persist(&CanonicalImage::filled(1, 1, [1, 2, 3, 4]), &style)
            .unwrap();
        assert_eq!(record.sequence_number, 2);
        assert!(!dir.path().join("photo_1.png").exists());
    }

    #[test]
    fn test_creating_directory_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let mut persister = PhotoPersister::new(&nested);
        let record = persister
            .persist(&CanonicalImage::filled(1, 1, [9, 9, 9, 255]), &StyleProfile::camera())
            .unwrap();
        assert_eq!(record.file_path, nested.join("photo_1.png"));
    }

    #[test]
    fn test_unwritable_directory_does_not_claim_number() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, b"file").unwrap();

        let mut persister = PhotoPersister::new(blocker.join("Photos"));
        let result = persister.persist(&CanonicalImage::filled(1, 1, [0, 0, 0, 255]), &StyleProfile::camera());
        assert!(matches!(result, Err(CaptureError::IoError(_))));
        assert_eq!(persister.counter().last(), 0);
    }

    #[test]
    fn test_exhausted_sequence_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let mut persister = PhotoPersister::with_custom(
            PngPhotoWriter,
            dir.path(),
            PhotoCounter::starting_after(u32::MAX - 1),
        );
        let image = CanonicalImage::filled(1, 1, [5, 5, 5, 255]);
        let style = StyleProfile::photo_mode();

        let last = persister.persist(&image, &style).unwrap();
        assert_eq!(last.sequence_number, u32::MAX);

        let result = persister.persist(&image, &style);
        assert!(matches!(result, Err(CaptureError::SequenceExhausted(n)) if n == u32::MAX));
        assert!(!dir.path().join("photo_1.png").exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
