//! Announcement numbers and their file indices.
//!
//! The `advert` and `mp3` folders both store the numbers 1..=255 as
//! `0001.mp3`..`0255.mp3`, so "say the number k" plays file `k` in either
//! folder. The conversions below name that mapping at call sites; they are
//! total over `u8` and pass zero through unchanged.
//!
//! Callers holding unchecked input should go through [`AnnouncementNumber`]
//! first, which rejects zero and anything that does not fit in one byte.

use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

use crate::error::SoundfileError;
use crate::file::SoundFile;
use crate::folder::Folder;

/// File index in the `advert` folder for an announcement number.
pub const fn advert_index_for(number: u8) -> u16 {
    number as u16
}

/// File index in the `mp3` folder for an announcement number.
pub const fn mp3_index_for(number: u8) -> u16 {
    number as u16
}

/// A validated announcement number in the range 1..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnnouncementNumber(NonZeroU8);

impl AnnouncementNumber {
    /// Smallest valid announcement number.
    pub const MIN: Self = Self(NonZeroU8::MIN);
    /// Largest valid announcement number.
    pub const MAX: Self = Self(NonZeroU8::MAX);

    /// The raw announcement number.
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// File index of this number in the `advert` folder.
    pub const fn advert_index(self) -> u16 {
        advert_index_for(self.get())
    }

    /// File index of this number in the `mp3` folder.
    pub const fn mp3_index(self) -> u16 {
        mp3_index_for(self.get())
    }

    /// The file that speaks this number in the given folder.
    pub const fn sound_file(self, folder: Folder) -> SoundFile {
        let index = match folder {
            Folder::Advert => self.advert_index(),
            Folder::Mp3 => self.mp3_index(),
        };
        SoundFile::new(folder, index)
    }
}

impl TryFrom<u8> for AnnouncementNumber {
    type Error = SoundfileError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        NonZeroU8::new(value)
            .map(Self)
            .ok_or_else(|| SoundfileError::AnnouncementOutOfRange {
                value: value.to_string(),
            })
    }
}

impl FromStr for AnnouncementNumber {
    type Err = SoundfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let out_of_range = || SoundfileError::AnnouncementOutOfRange {
            value: s.to_string(),
        };
        let digits = s.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(out_of_range());
        }
        let value: u8 = digits.parse().map_err(|_| out_of_range())?;
        Self::try_from(value).map_err(|_| out_of_range())
    }
}

impl From<AnnouncementNumber> for u8 {
    fn from(number: AnnouncementNumber) -> Self {
        number.get()
    }
}

impl fmt::Display for AnnouncementNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
