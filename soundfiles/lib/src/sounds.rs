//! Symbolic names for the fixed system sounds.
//!
//! Each folder gets its own enum so the compiler keeps the two numbering
//! sequences apart: [`Advertisement::FreezeIntro`] and [`Mp3::OhANewCard`]
//! are both index 300, but they live in different folders and never
//! resolve to the same file.
//!
//! The symbolic indices sit above the 1..=255 announcement range. They are
//! taken to name files in the same folder (`advert/0300.mp3`,
//! `mp3/0400.mp3`); nothing here checks that those files exist.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::SoundfileError;
use crate::file::SoundFile;
use crate::folder::Folder;

/// A named sound with a fixed index in one folder.
pub trait SymbolicSound: Copy + Into<&'static str> + FromStr + IntoEnumIterator {
    /// The folder whose numbering this sound belongs to.
    const FOLDER: Folder;

    /// The file index, matching the on-disk file name.
    fn index(self) -> u16;

    /// The symbolic name, e.g. `FREEZE_INTRO`.
    fn name(self) -> &'static str {
        self.into()
    }

    /// The file this sound resolves to.
    fn sound_file(self) -> SoundFile {
        SoundFile::new(Self::FOLDER, self.index())
    }
}

/// Sounds stored in the `advert` folder.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[repr(u16)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Advertisement {
    /// First half of the two-tone notifier chime.
    NotifierDing = 260,
    /// Second half of the two-tone notifier chime.
    NotifierDong = 261,
    /// Explains the freeze dance game.
    FreezeIntro = 300,
    /// "Stop!"
    FreezeStopp = 301,
    /// "Don't move."
    FreezeDontMove = 302,
    /// Tells the players to start dancing again.
    FreezeContinue = 303,
}

impl SymbolicSound for Advertisement {
    const FOLDER: Folder = Folder::Advert;

    fn index(self) -> u16 {
        self as u16
    }
}

/// Sounds stored in the `mp3` folder.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[repr(u16)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Mp3 {
    /// Played when an unknown card is placed on the reader.
    OhANewCard = 300,
    /// Generic confirmation.
    Ok = 400,
    /// Generic failure prompt.
    ThatDidntWork = 401,
}

impl SymbolicSound for Mp3 {
    const FOLDER: Folder = Folder::Mp3;

    fn index(self) -> u16 {
        self as u16
    }
}

/// One row of the symbolic sound table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoundEntry {
    /// The folder the sound lives in.
    pub folder: Folder,
    /// The symbolic name.
    pub name: &'static str,
    /// The file index.
    pub index: u16,
    /// The file name on the storage medium.
    pub file_name: String,
}

impl SoundEntry {
    fn of<S: SymbolicSound>(sound: S) -> Self {
        let file = sound.sound_file();
        Self {
            folder: S::FOLDER,
            name: sound.name(),
            index: sound.index(),
            file_name: file.file_name(),
        }
    }
}

/// All symbolic sounds defined for a folder, ordered by index.
pub fn symbolic_sounds(folder: Folder) -> Vec<SoundEntry> {
    let mut entries: Vec<SoundEntry> = match folder {
        Folder::Advert => Advertisement::iter().map(SoundEntry::of).collect(),
        Folder::Mp3 => Mp3::iter().map(SoundEntry::of).collect(),
    };
    entries.sort_by_key(|entry| entry.index);
    entries
}

/// Look up a symbolic sound by name within one folder.
///
/// Names are matched case-insensitively and only against the given
/// folder's table.
pub fn lookup_symbol(folder: Folder, name: &str) -> Result<SoundFile, SoundfileError> {
    let name = name.trim();
    let found = match folder {
        Folder::Advert => find::<Advertisement>(name),
        Folder::Mp3 => find::<Mp3>(name),
    };

    found.ok_or_else(|| SoundfileError::UnknownSound {
        folder,
        name: name.to_string(),
    })
}

fn find<S: SymbolicSound>(name: &str) -> Option<SoundFile> {
    S::from_str(name).ok().map(S::sound_file)
}
