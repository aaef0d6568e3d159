//! Resolving (folder, index) pairs to files on the storage medium.
//!
//! Files are named by their index, zero-padded to four digits, with an
//! `.mp3` extension: index 5 in the `advert` folder is `advert/0005.mp3`.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::SoundfileError;
use crate::folder::Folder;
use crate::index::AnnouncementNumber;
use crate::sounds::lookup_symbol;

/// Minimum number of digits in a sound file name.
pub const FILE_NAME_WIDTH: usize = 4;

/// Extension of every sound file.
pub const FILE_EXTENSION: &str = "mp3";

/// A sound file identified by its folder and index.
///
/// Two files are equal only when both folder and index match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SoundFile {
    /// The folder holding the file.
    pub folder: Folder,
    /// The file index within the folder.
    pub index: u16,
}

impl SoundFile {
    /// A file at `index` in `folder`.
    pub const fn new(folder: Folder, index: u16) -> Self {
        Self { folder, index }
    }

    /// The file name, e.g. `0005.mp3`.
    pub fn file_name(&self) -> String {
        format!(
            "{:0width$}.{FILE_EXTENSION}",
            self.index,
            width = FILE_NAME_WIDTH
        )
    }

    /// The path relative to the storage root, e.g. `advert/0005.mp3`.
    pub fn relative_path(&self) -> PathBuf {
        Path::new(self.folder.name()).join(self.file_name())
    }

    /// The path of this file below `root`.
    ///
    /// The file is not required to exist.
    pub fn path_in(&self, root: impl AsRef<Path>) -> PathBuf {
        root.as_ref().join(self.relative_path())
    }
}

impl fmt::Display for SoundFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.folder, self.file_name())
    }
}

/// Resolve user input to a sound file in `folder`.
///
/// A token made of ASCII digits is an announcement number and must be in
/// 1..=255. Anything else is looked up as a symbolic name in that folder.
pub fn resolve(folder: Folder, token: &str) -> Result<SoundFile, SoundfileError> {
    let token = token.trim();
    trace!(%folder, token, "resolving sound");

    let file = if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        let number: AnnouncementNumber = token.parse()?;
        number.sound_file(folder)
    } else {
        lookup_symbol(folder, token)?
    };

    debug!(%folder, token, file = %file, "resolved sound");
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_zero_padded() {
        assert_eq!(SoundFile::new(Folder::Advert, 5).file_name(), "0005.mp3");
        assert_eq!(SoundFile::new(Folder::Mp3, 255).file_name(), "0255.mp3");
        assert_eq!(SoundFile::new(Folder::Mp3, 401).file_name(), "0401.mp3");
    }

    #[test]
    fn wide_indices_keep_all_digits() {
        assert_eq!(SoundFile::new(Folder::Advert, 12345).file_name(), "12345.mp3");
    }

    #[test]
    fn paths_include_the_folder() {
        let file = SoundFile::new(Folder::Advert, 5);
        assert_eq!(file.relative_path(), PathBuf::from("advert").join("0005.mp3"));
        assert_eq!(
            file.path_in("/media/sd"),
            PathBuf::from("/media/sd").join("advert").join("0005.mp3")
        );
        assert_eq!(file.to_string(), "advert/0005.mp3");
    }

    #[test]
    fn same_index_in_different_folders_differs() {
        let advert = SoundFile::new(Folder::Advert, 300);
        let mp3 = SoundFile::new(Folder::Mp3, 300);
        assert_ne!(advert, mp3);
        assert_ne!(advert.relative_path(), mp3.relative_path());
    }

    #[test]
    fn resolves_numbers_and_names() {
        assert_eq!(resolve(Folder::Mp3, "17").unwrap(), SoundFile::new(Folder::Mp3, 17));
        assert_eq!(resolve(Folder::Mp3, "OK").unwrap(), SoundFile::new(Folder::Mp3, 400));
        assert_eq!(
            resolve(Folder::Advert, " notifier_dong ").unwrap(),
            SoundFile::new(Folder::Advert, 261)
        );
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        for token in ["0", "256", "300"] {
            assert!(matches!(
                resolve(Folder::Advert, token),
                Err(SoundfileError::AnnouncementOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(matches!(
            resolve(Folder::Mp3, "FREEZE_INTRO"),
            Err(SoundfileError::UnknownSound { folder: Folder::Mp3, .. })
        ));
        assert!(matches!(
            resolve(Folder::Mp3, ""),
            Err(SoundfileError::UnknownSound { .. })
        ));
    }

    #[test]
    fn signed_numbers_are_rejected_everywhere() {
        assert!("+5".parse::<AnnouncementNumber>().is_err());
        assert!(resolve(Folder::Mp3, "+5").is_err());
        assert!(resolve(Folder::Mp3, "-5").is_err());
    }
}
