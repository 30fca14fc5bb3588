//! Surah names and surah-list parsing.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ayah::{SURAH_COUNT, ayah_count};
use crate::error::{Error, Result};

/// Where a surah was revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Revelation {
    Meccan,
    Medinan,
}

impl fmt::Display for Revelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meccan => f.pad("Meccan"),
            Self::Medinan => f.pad("Medinan"),
        }
    }
}

/// Human-readable metadata for one surah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurahInfo {
    /// Surah number, 1-based.
    pub number: u16,
    /// Transliterated Arabic name.
    pub name: &'static str,
    /// English meaning of the name.
    pub english: &'static str,
    /// Place of revelation.
    pub revelation: Revelation,
    /// Number of ayahs.
    pub ayahs: u16,
}

use Revelation::{Meccan as Mk, Medinan as Md};

const NAMES: [(&str, &str, Revelation); SURAH_COUNT as usize] = [
    ("Al-Faatiha", "The Opening", Mk),
    ("Al-Baqara", "The Cow", Md),
    ("Aal-i-Imraan", "The Family of Imraan", Md),
    ("An-Nisaa", "The Women", Md),
    ("Al-Maaida", "The Table", Md),
    ("Al-An'aam", "The Cattle", Mk),
    ("Al-A'raaf", "The Heights", Mk),
    ("Al-Anfaal", "The Spoils of War", Md),
    ("At-Tawba", "The Repentance", Md),
    ("Yunus", "Jonas", Mk),
    ("Hud", "Hud", Mk),
    ("Yusuf", "Joseph", Mk),
    ("Ar-Ra'd", "The Thunder", Md),
    ("Ibrahim", "Abraham", Mk),
    ("Al-Hijr", "The Rock", Mk),
    ("An-Nahl", "The Bee", Mk),
    ("Al-Israa", "The Night Journey", Mk),
    ("Al-Kahf", "The Cave", Mk),
    ("Maryam", "Mary", Mk),
    ("Taa-Haa", "Taa-Haa", Mk),
    ("Al-Anbiyaa", "The Prophets", Mk),
    ("Al-Hajj", "The Pilgrimage", Md),
    ("Al-Muminoon", "The Believers", Mk),
    ("An-Noor", "The Light", Md),
    ("Al-Furqaan", "The Criterion", Mk),
    ("Ash-Shu'araa", "The Poets", Mk),
    ("An-Naml", "The Ant", Mk),
    ("Al-Qasas", "The Stories", Mk),
    ("Al-Ankaboot", "The Spider", Mk),
    ("Ar-Room", "The Romans", Mk),
    ("Luqman", "Luqman", Mk),
    ("As-Sajda", "The Prostration", Mk),
    ("Al-Ahzaab", "The Clans", Md),
    ("Saba", "Sheba", Mk),
    ("Faatir", "The Originator", Mk),
    ("Yaseen", "Yaseen", Mk),
    ("As-Saaffaat", "Those drawn up in Ranks", Mk),
    ("Saad", "The letter Saad", Mk),
    ("Az-Zumar", "The Groups", Mk),
    ("Ghafir", "The Forgiver", Mk),
    ("Fussilat", "Explained in detail", Mk),
    ("Ash-Shura", "Consultation", Mk),
    ("Az-Zukhruf", "Ornaments of gold", Mk),
    ("Ad-Dukhaan", "The Smoke", Mk),
    ("Al-Jaathiya", "Crouching", Mk),
    ("Al-Ahqaf", "The Dunes", Mk),
    ("Muhammad", "Muhammad", Md),
    ("Al-Fath", "The Victory", Md),
    ("Al-Hujuraat", "The Inner Apartments", Md),
    ("Qaaf", "The letter Qaaf", Mk),
    ("Adh-Dhaariyat", "The Winnowing Winds", Mk),
    ("At-Tur", "The Mount", Mk),
    ("An-Najm", "The Star", Mk),
    ("Al-Qamar", "The Moon", Mk),
    ("Ar-Rahmaan", "The Beneficent", Md),
    ("Al-Waaqia", "The Inevitable", Mk),
    ("Al-Hadid", "The Iron", Md),
    ("Al-Mujaadila", "The Pleading Woman", Md),
    ("Al-Hashr", "The Exile", Md),
    ("Al-Mumtahana", "She that is to be examined", Md),
    ("As-Saff", "The Ranks", Md),
    ("Al-Jumu'a", "Friday", Md),
    ("Al-Munaafiqoon", "The Hypocrites", Md),
    ("At-Taghaabun", "Mutual Disillusion", Md),
    ("At-Talaaq", "Divorce", Md),
    ("At-Tahrim", "The Prohibition", Md),
    ("Al-Mulk", "The Sovereignty", Mk),
    ("Al-Qalam", "The Pen", Mk),
    ("Al-Haaqqa", "The Reality", Mk),
    ("Al-Ma'aarij", "The Ascending Stairways", Mk),
    ("Nooh", "Noah", Mk),
    ("Al-Jinn", "The Jinn", Mk),
    ("Al-Muzzammil", "The Enshrouded One", Mk),
    ("Al-Muddaththir", "The Cloaked One", Mk),
    ("Al-Qiyaama", "The Resurrection", Mk),
    ("Al-Insaan", "Man", Md),
    ("Al-Mursalaat", "The Emissaries", Mk),
    ("An-Naba", "The Announcement", Mk),
    ("An-Naazi'aat", "Those who drag forth", Mk),
    ("Abasa", "He frowned", Mk),
    ("At-Takwir", "The Overthrowing", Mk),
    ("Al-Infitaar", "The Cleaving", Mk),
    ("Al-Mutaffifin", "Defrauding", Mk),
    ("Al-Inshiqaaq", "The Splitting Open", Mk),
    ("Al-Burooj", "The Constellations", Mk),
    ("At-Taariq", "The Morning Star", Mk),
    ("Al-A'laa", "The Most High", Mk),
    ("Al-Ghaashiya", "The Overwhelming", Mk),
    ("Al-Fajr", "The Dawn", Mk),
    ("Al-Balad", "The City", Mk),
    ("Ash-Shams", "The Sun", Mk),
    ("Al-Lail", "The Night", Mk),
    ("Ad-Dhuhaa", "The Morning Hours", Mk),
    ("Ash-Sharh", "The Consolation", Mk),
    ("At-Tin", "The Fig", Mk),
    ("Al-Alaq", "The Clot", Mk),
    ("Al-Qadr", "The Power", Mk),
    ("Al-Bayyina", "The Evidence", Md),
    ("Az-Zalzala", "The Earthquake", Md),
    ("Al-Aadiyaat", "The Chargers", Mk),
    ("Al-Qaari'a", "The Calamity", Mk),
    ("At-Takaathur", "Competition", Mk),
    ("Al-Asr", "The Declining Day", Mk),
    ("Al-Humaza", "The Traducer", Mk),
    ("Al-Fil", "The Elephant", Mk),
    ("Quraish", "Quraysh", Mk),
    ("Al-Maa'un", "Almsgiving", Mk),
    ("Al-Kawthar", "Abundance", Mk),
    ("Al-Kaafiroon", "The Disbelievers", Mk),
    ("An-Nasr", "Divine Support", Md),
    ("Al-Masad", "The Palm Fibre", Mk),
    ("Al-Ikhlaas", "Sincerity", Mk),
    ("Al-Falaq", "The Dawn", Mk),
    ("An-Naas", "Mankind", Mk),
];

/// Returns the metadata for `surah`.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if `surah` is not in `1..=114`.
pub fn surah_info(surah: u16) -> Result<SurahInfo> {
    let ayahs = ayah_count(surah)?;
    let (name, english, revelation) = NAMES[usize::from(surah) - 1];
    Ok(SurahInfo {
        number: surah,
        name,
        english,
        revelation,
        ayahs,
    })
}

/// Iterates all 114 surahs in order.
pub fn surahs() -> impl Iterator<Item = SurahInfo> {
    (1..=SURAH_COUNT).filter_map(|s| surah_info(s).ok())
}

/// Lowercases and drops everything that is not a letter or digit.
fn fold_name(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Finds a surah by transliterated name, ignoring case, hyphens,
/// apostrophes and the leading article (`kahf` matches `Al-Kahf`).
#[must_use]
pub fn find_surah_by_name(name: &str) -> Option<SurahInfo> {
    let wanted = fold_name(name);
    if wanted.is_empty() {
        return None;
    }
    surahs().find(|info| {
        let full = fold_name(info.name);
        let bare = info
            .name
            .split_once('-')
            .map(|(_, rest)| fold_name(rest));
        full == wanted || bare.is_some_and(|b| b == wanted)
    })
}

/// Parses a single surah token: a number or a name.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] for numbers outside `1..=114` and
/// [`Error::InvalidSurahList`] for unknown names.
pub fn parse_surah(token: &str) -> Result<u16> {
    let token = token.trim();
    if let Ok(n) = token.parse::<u32>() {
        let s = u16::try_from(n).unwrap_or(u16::MAX);
        return ayah_count(s).map(|_| s);
    }
    find_surah_by_name(token)
        .map(|info| info.number)
        .ok_or_else(|| Error::InvalidSurahList(format!("unknown surah '{token}'")))
}

/// Parses a surah list such as `1-3,36,112-114` into sorted, unique numbers.
///
/// `all` expands to every surah. Empty items are ignored.
///
/// # Errors
///
/// Returns [`Error::InvalidSurahList`] for malformed items or reversed
/// ranges and [`Error::OutOfRange`] for numbers outside `1..=114`.
pub fn parse_surah_list(input: &str) -> Result<Vec<u16>> {
    if input.trim().eq_ignore_ascii_case("all") {
        return Ok((1..=SURAH_COUNT).collect());
    }

    let mut out = BTreeSet::new();
    for item in input.split(',').map(str::trim).filter(|i| !i.is_empty()) {
        if let Some((lo, hi)) = item.split_once('-')
            && lo.trim().chars().all(|c| c.is_ascii_digit())
            && hi.trim().chars().all(|c| c.is_ascii_digit())
        {
            let lo = parse_surah(lo)?;
            let hi = parse_surah(hi)?;
            if lo > hi {
                return Err(Error::InvalidSurahList(format!(
                    "reversed range '{item}'"
                )));
            }
            out.extend(lo..=hi);
        } else {
            out.insert(parse_surah(item)?);
        }
    }

    if out.is_empty() {
        return Err(Error::InvalidSurahList("no surahs given".to_string()));
    }
    Ok(out.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_every_surah() {
        assert_eq!(surahs().count(), 114);
        let first = surah_info(1).unwrap();
        assert_eq!(first.name, "Al-Faatiha");
        assert_eq!(first.ayahs, 7);
        let last = surah_info(114).unwrap();
        assert_eq!(last.name, "An-Naas");
        assert_eq!(last.ayahs, 6);
    }

    #[test]
    fn info_out_of_range() {
        assert!(surah_info(0).unwrap_err().is_out_of_range());
        assert!(surah_info(115).unwrap_err().is_out_of_range());
    }

    #[test]
    fn revelation_places() {
        assert_eq!(surah_info(2).unwrap().revelation, Revelation::Medinan);
        assert_eq!(surah_info(18).unwrap().revelation, Revelation::Meccan);
        assert_eq!(Revelation::Medinan.to_string(), "Medinan");
    }

    #[test]
    fn find_by_name_variants() {
        assert_eq!(find_surah_by_name("Al-Kahf").unwrap().number, 18);
        assert_eq!(find_surah_by_name("kahf").unwrap().number, 18);
        assert_eq!(find_surah_by_name("YASEEN").unwrap().number, 36);
        assert_eq!(find_surah_by_name("al-mulk").unwrap().number, 67);
        assert!(find_surah_by_name("").is_none());
        assert!(find_surah_by_name("not-a-surah").is_none());
    }

    #[test]
    fn parse_single_surah() {
        assert_eq!(parse_surah("36").unwrap(), 36);
        assert_eq!(parse_surah(" mulk ").unwrap(), 67);
        assert!(parse_surah("0").unwrap_err().is_out_of_range());
        assert!(parse_surah("99999").unwrap_err().is_out_of_range());
        assert!(matches!(
            parse_surah("nope"),
            Err(Error::InvalidSurahList(_))
        ));
    }

    #[test]
    fn parse_list_ranges_and_singles() {
        assert_eq!(
            parse_surah_list("1-3,36,112-114").unwrap(),
            vec![1, 2, 3, 36, 112, 113, 114]
        );
    }

    #[test]
    fn parse_list_dedups_and_sorts() {
        assert_eq!(parse_surah_list("67, 2, 1-3,,2").unwrap(), vec![1, 2, 3, 67]);
    }

    #[test]
    fn parse_list_all() {
        assert_eq!(parse_surah_list("all").unwrap().len(), 114);
    }

    #[test]
    fn parse_list_names() {
        assert_eq!(parse_surah_list("kahf,Al-Mulk").unwrap(), vec![18, 67]);
    }

    #[test]
    fn parse_list_errors() {
        assert!(matches!(
            parse_surah_list("5-3"),
            Err(Error::InvalidSurahList(_))
        ));
        assert!(parse_surah_list("110-115").unwrap_err().is_out_of_range());
        assert!(matches!(parse_surah_list(" , "), Err(Error::InvalidSurahList(_))));
    }
}
