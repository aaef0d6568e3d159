use thiserror::Error;

use crate::folder::Folder;

/// Errors returned when turning user input into a sound file.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SoundfileError {
    /// An announcement number was zero or did not fit in one byte.
    #[error("announcement number must be between 1 and 255, got {value}")]
    AnnouncementOutOfRange {
        /// The rejected input as the caller supplied it.
        value: String,
    },
    /// No symbolic sound with this name exists in the folder.
    #[error("no sound named '{name}' in the {folder} folder")]
    UnknownSound {
        /// The folder that was searched.
        folder: Folder,
        /// The name that was requested.
        name: String,
    },
    /// The folder name is neither `advert` nor `mp3`.
    #[error("unknown folder '{name}' (expected 'advert' or 'mp3')")]
    UnknownFolder {
        /// The folder name that was requested.
        name: String,
    },
}
