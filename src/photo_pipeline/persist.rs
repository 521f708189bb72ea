//! Photo persistence module
//!
//! Sequence numbering and PNG output for developed photos.

mod counter;
mod persister;
mod png_writer;
mod writer;
pub mod types;

pub use counter::PhotoCounter;
pub use persister::{DEFAULT_OUTPUT_DIR, PhotoPersister};
pub use png_writer::PngPhotoWriter;
pub use types::PhotoRecord;
pub use writer::PhotoWriter;
