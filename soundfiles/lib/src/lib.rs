//! Sound file lookup for an RFID music box.
//!
//! The storage medium holds two folders, `advert` and `mp3`, each numbered
//! independently as `0001.mp3`, `0002.mp3`, ... This crate maps announcement
//! numbers and symbolic system sounds onto those files.
//!
//! ```
//! use soundfiles::{advert_index_for, Advertisement, Mp3, SymbolicSound};
//!
//! assert_eq!(advert_index_for(5), 5);
//! assert_eq!(Advertisement::FreezeIntro.index(), 300);
//! assert_eq!(Mp3::Ok.sound_file().to_string(), "mp3/0400.mp3");
//! ```

mod error;
mod file;
mod folder;
mod index;
mod sounds;

pub use crate::error::SoundfileError;
pub use crate::file::{resolve, SoundFile, FILE_EXTENSION, FILE_NAME_WIDTH};
pub use crate::folder::Folder;
pub use crate::index::{advert_index_for, mp3_index_for, AnnouncementNumber};
pub use crate::sounds::{
    lookup_symbol, symbolic_sounds, Advertisement, Mp3, SoundEntry, SymbolicSound,
};
