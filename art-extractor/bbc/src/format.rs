//! The description of where graphics live inside one particular game image.
//!
//! Nothing in the game image describes its own layout. The values below were found by taking the image apart by hand, so they
//! only hold for one build of one game. They are kept together in a [`FormatDescription`] so another build can be described by
//! a JSON file instead of code changes.

use crate::characters::{CharacterColumn, CharacterStrip};
use crate::directory::RECORD_LEN;
use crate::sheet::SheetLayout;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::io::Read;

// It is easy to mix up addresses in the memory map of the machine with offsets into the file on disk, so both get their own
// type and the conversion goes through the format description.

/// An address in the memory map of the running machine, as stored in the object directory.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MachineAddr(pub u16);

/// An absolute byte offset into the game image.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileOffset(pub u16);

impl FileOffset {
    #[inline(always)]
    pub fn as_usize(&self) -> usize {
        self.0.into()
    }
}

impl Display for MachineAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "&{:04X}", self.0)
    }
}

impl Display for FileOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the lookup tables, the object directory and the character frames are found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatDescription {
    /// Offset of the first lookup table. The tables follow each other without gaps.
    pub lookup_table_base: usize,
    /// The number of entries of each lookup table, in order.
    pub lookup_table_sizes: Vec<usize>,
    /// Offset of the object directory.
    pub directory_base: usize,
    /// Length of the (zero-filled) record at the start of the directory that does not describe an object.
    pub directory_header_len: usize,
    /// The number of object records following the header.
    pub object_count: usize,
    /// The machine address that corresponds to file offset [`FormatDescription::file_base`]. See
    /// [`FormatDescription::rebase`].
    pub load_address: u16,
    pub file_base: u16,
    /// Objects starting at one of these offsets are decoded from the high nibble, whatever their own mask flag says.
    pub forced_mask_offsets: Vec<FileOffset>,
    /// Character frames that are not part of the object directory.
    pub character_columns: Vec<CharacterColumn>,
    /// Placement of the annotations on the contact sheet.
    pub sheet: SheetLayout,
}

impl FormatDescription {
    /// The layout of the BBC Micro release of Bruce Lee.
    pub fn bruce_lee() -> Self {
        Self {
            lookup_table_base: 7620,
            lookup_table_sizes: vec![16, 16, 16, 4, 4, 4, 4, 16],
            directory_base: 8006,
            directory_header_len: RECORD_LEN,
            object_count: 58,
            load_address: 6400,
            file_base: 4096,
            // The smoke belch: its colours do not follow from the directory entry.
            forced_mask_offsets: vec![FileOffset(10343)],
            character_columns: vec![
                CharacterColumn::new(
                    "bruce",
                    0,
                    vec![
                        CharacterStrip::new("stand", 8301, 10, 26, 1),
                        CharacterStrip::new("walk", 8431, 10, 26, 2),
                        CharacterStrip::new("climb", 8691, 8, 26, 1),
                        CharacterStrip::new("fall", 8795, 8, 26, 1),
                        CharacterStrip::new("punch", 8899, 12, 26, 1),
                        CharacterStrip::new("lay", 9055, 16, 6, 1),
                        CharacterStrip::new("kick", 9103, 16, 16, 1),
                        CharacterStrip::new("jump", 9231, 10, 26, 1),
                        CharacterStrip::new("hit", 9361, 16, 14, 1),
                    ],
                ),
                CharacterColumn::new(
                    "yamo",
                    28,
                    vec![
                        CharacterStrip::new("walk", 9473, 10, 26, 2),
                        CharacterStrip::new("climb", 9733, 8, 26, 1),
                        CharacterStrip::new("fall", 9837, 8, 26, 1),
                        CharacterStrip::new("kick", 9941, 16, 16, 1),
                        CharacterStrip::new("jump", 10069, 10, 26, 1),
                        CharacterStrip::new("hit", 10199, 16, 14, 1),
                    ],
                ),
            ],
            sheet: SheetLayout::default(),
        }
    }

    /// Loads a format description from JSON. Fields that are missing keep their [`FormatDescription::bruce_lee`] value.
    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        serde_json::from_reader(reader).context("Invalid format description")
    }

    /// Translates a machine address from the directory into an offset into the file.
    ///
    /// The arithmetic wraps at 16 bits, like the address bus of the machine.
    pub fn rebase(&self, addr: MachineAddr) -> FileOffset {
        FileOffset(addr.0.wrapping_add(self.file_base).wrapping_sub(self.load_address))
    }

    /// Determines whether an object starting at `offset` must be decoded from the high nibble regardless of its mask flag.
    pub fn forces_mask(&self, offset: FileOffset) -> bool {
        self.forced_mask_offsets.contains(&offset)
    }

    /// The total number of lookup table entries.
    pub fn lookup_tables_len(&self) -> usize {
        self.lookup_table_sizes.iter().sum()
    }

    /// The offset of the first object record (just past the header).
    pub fn first_record_offset(&self) -> usize {
        self.directory_base + self.directory_header_len
    }

    /// The offset just past the last object record.
    pub fn directory_end(&self) -> usize {
        self.first_record_offset() + self.object_count * RECORD_LEN
    }

    /// The smallest file that holds both the lookup tables and the full object directory.
    pub fn min_len(&self) -> usize {
        self.directory_end()
            .max(self.lookup_table_base + self.lookup_tables_len())
    }
}

impl Default for FormatDescription {
    fn default() -> Self {
        Self::bruce_lee()
    }
}
