use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// A folder on the storage medium holding one independent numbering
/// sequence of sound files.
///
/// Each folder is numbered from `0001.mp3` upward on its own, so the same
/// index in two folders names two different files.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Folder {
    /// The `advert` folder: announcements, notifier chimes and game clips.
    Advert,
    /// The `mp3` folder: spoken prompts and system feedback.
    Mp3,
}

impl Folder {
    /// The directory name of this folder on the storage medium.
    pub fn name(self) -> &'static str {
        self.into()
    }
}
