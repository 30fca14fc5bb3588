//! Surah/ayah index table.
//!
//! Every ayah of the Quran has a position in the linear sequence of all
//! 6236 ayahs, counted from 1. The CDN serves per-ayah audio by that global
//! number, so callers convert between `(surah, ayah)` pairs and global
//! indices through the functions here.
//!
//! The ayah counts are the standard Hafs counts. The prefix-sum table is
//! evaluated at compile time, so every lookup is a bounds check plus an
//! array read.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of surahs in the Quran.
pub const SURAH_COUNT: u16 = 114;

/// Total number of ayahs across all surahs.
pub const TOTAL_AYAHS: u16 = CUMULATIVE[SURAH_COUNT as usize];

/// Ayah count per surah; index 0 holds surah 1.
const AYAH_COUNTS: [u16; SURAH_COUNT as usize] = [
    7, 286, 200, 176, 120, 165, 206, 75, 129, 109, // 1-10
    123, 111, 43, 52, 99, 128, 111, 110, 98, 135, // 11-20
    112, 78, 118, 64, 77, 227, 93, 88, 69, 60, // 21-30
    34, 30, 73, 54, 45, 83, 182, 88, 75, 85, // 31-40
    54, 53, 89, 59, 37, 35, 38, 29, 18, 45, // 41-50
    60, 49, 62, 55, 78, 96, 29, 22, 24, 13, // 51-60
    14, 11, 11, 18, 12, 12, 30, 52, 52, 44, // 61-70
    28, 28, 20, 56, 40, 31, 50, 40, 46, 42, // 71-80
    29, 19, 36, 25, 22, 17, 19, 26, 30, 20, // 81-90
    15, 21, 11, 8, 8, 19, 5, 8, 8, 11, // 91-100
    11, 8, 3, 9, 5, 4, 7, 3, 6, 3, // 101-110
    5, 4, 5, 6, // 111-114
];

/// `CUMULATIVE[s]` is the number of ayahs in surahs `1..=s`; `CUMULATIVE[0]` is 0.
const CUMULATIVE: [u16; SURAH_COUNT as usize + 1] = prefix_sums();

const fn prefix_sums() -> [u16; SURAH_COUNT as usize + 1] {
    let mut out = [0u16; SURAH_COUNT as usize + 1];
    let mut i = 0;
    while i < SURAH_COUNT as usize {
        out[i + 1] = out[i] + AYAH_COUNTS[i];
        i += 1;
    }
    out
}

const _: () = assert!(TOTAL_AYAHS == 6236);

/// Contiguous block of global ayah indices belonging to one surah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurahRange {
    /// Global index of the first ayah.
    pub start: u16,
    /// Global index of the last ayah (inclusive).
    pub end: u16,
    /// Number of ayahs in the surah.
    pub total: u16,
}

impl SurahRange {
    /// Returns true if `global` falls inside this range.
    #[must_use]
    pub const fn contains(&self, global: u16) -> bool {
        self.start <= global && global <= self.end
    }

    /// Iterates the global indices of the surah in order.
    #[must_use]
    pub const fn iter(&self) -> std::ops::RangeInclusive<u16> {
        self.start..=self.end
    }
}

/// A validated `(surah, ayah)` position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AyahRef {
    /// Surah number, 1-based.
    pub surah: u16,
    /// Ayah number within the surah, 1-based.
    pub ayah: u16,
}

impl AyahRef {
    /// Creates a reference after checking both components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either component is invalid.
    pub fn new(surah: u16, ayah: u16) -> Result<Self> {
        surah_ayah_to_global(surah, ayah)?;
        Ok(Self { surah, ayah })
    }

    /// Returns the global index of this ayah.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the fields were set to an invalid pair.
    pub fn global(&self) -> Result<u16> {
        surah_ayah_to_global(self.surah, self.ayah)
    }
}

impl fmt::Display for AyahRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.surah, self.ayah)
    }
}

fn check_surah(surah: u16) -> Result<usize> {
    if (1..=SURAH_COUNT).contains(&surah) {
        Ok(usize::from(surah))
    } else {
        Err(Error::out_of_range(
            "surah",
            i64::from(surah),
            1,
            i64::from(SURAH_COUNT),
        ))
    }
}

/// Returns the number of ayahs in `surah`.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if `surah` is not in `1..=114`.
pub fn ayah_count(surah: u16) -> Result<u16> {
    let s = check_surah(surah)?;
    Ok(AYAH_COUNTS[s - 1])
}

/// Converts a `(surah, ayah)` pair to its 1-based position among all ayahs.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if `surah` is not in `1..=114` or `ayah`
/// is not in `1..=ayah_count(surah)`.
pub fn surah_ayah_to_global(surah: u16, ayah: u16) -> Result<u16> {
    let s = check_surah(surah)?;
    let count = AYAH_COUNTS[s - 1];
    if !(1..=count).contains(&ayah) {
        return Err(Error::out_of_range(
            "ayah",
            i64::from(ayah),
            1,
            i64::from(count),
        ));
    }
    Ok(CUMULATIVE[s - 1] + ayah)
}

/// Returns the global index range covered by `surah`.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if `surah` is not in `1..=114`.
pub fn surah_ayah_range(surah: u16) -> Result<SurahRange> {
    let s = check_surah(surah)?;
    let total = AYAH_COUNTS[s - 1];
    let start = CUMULATIVE[s - 1] + 1;
    Ok(SurahRange {
        start,
        end: start + total - 1,
        total,
    })
}

/// Converts a global ayah index back into its `(surah, ayah)` position.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if `global` is not in `1..=6236`.
#[allow(clippy::cast_possible_truncation)]
pub fn global_to_surah_ayah(global: u16) -> Result<AyahRef> {
    if !(1..=TOTAL_AYAHS).contains(&global) {
        return Err(Error::out_of_range(
            "global ayah",
            i64::from(global),
            1,
            i64::from(TOTAL_AYAHS),
        ));
    }
    // First s with CUMULATIVE[s] >= global; CUMULATIVE[0] = 0 < global keeps s >= 1.
    let s = CUMULATIVE.partition_point(|&c| c < global);
    Ok(AyahRef {
        surah: s as u16,
        ayah: global - CUMULATIVE[s - 1],
    })
}
