//! CDN URL construction and local file naming for Quran assets.

use std::fmt;
use std::str::FromStr;

use crate::ayah::surah_ayah_to_global;
use crate::config::CdnConfig;
use crate::error::{Error, Result};
use crate::reciter::Reciter;

/// Kind of remote asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// One MP3 per ayah, addressed by global ayah index.
    AyahAudio,
    /// One MP3 per surah.
    SurahAudio,
    /// One PNG per ayah.
    AyahImage,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AyahAudio => f.write_str("ayah"),
            Self::SurahAudio => f.write_str("surah"),
            Self::AyahImage => f.write_str("image"),
        }
    }
}

impl FromStr for AssetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ayah" => Ok(Self::AyahAudio),
            "surah" => Ok(Self::SurahAudio),
            "image" => Ok(Self::AyahImage),
            other => Err(Error::Config(format!(
                "unknown asset kind '{other}' (expected ayah, surah or image)"
            ))),
        }
    }
}

/// Builds asset URLs against a configured pair of CDN roots.
///
/// The reciter is always passed by the caller; this type holds no
/// "current reciter".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUrls {
    audio_base: String,
    image_base: String,
}

impl Default for AssetUrls {
    fn default() -> Self {
        Self::new(&CdnConfig::default())
    }
}

impl AssetUrls {
    /// Creates a URL builder from CDN configuration.
    #[must_use]
    pub fn new(cdn: &CdnConfig) -> Self {
        Self {
            audio_base: cdn.audio_base.trim_end_matches('/').to_string(),
            image_base: cdn.image_base.trim_end_matches('/').to_string(),
        }
    }

    /// URL of the audio for a single ayah.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for an invalid surah or ayah.
    pub fn ayah_audio(&self, reciter: &Reciter, surah: u16, ayah: u16) -> Result<String> {
        let global = surah_ayah_to_global(surah, ayah)?;
        Ok(format!(
            "{}/audio/{}/{}/{global}.mp3",
            self.audio_base, reciter.bitrate, reciter.id
        ))
    }

    /// URL of the audio for a whole surah.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for an invalid surah.
    pub fn surah_audio(&self, reciter: &Reciter, surah: u16) -> Result<String> {
        crate::ayah::ayah_count(surah)?;
        Ok(format!(
            "{}/audio-surah/{}/{}/{surah}.mp3",
            self.audio_base, reciter.bitrate, reciter.id
        ))
    }

    /// URL of the image for a single ayah.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for an invalid surah or ayah.
    pub fn ayah_image(&self, surah: u16, ayah: u16) -> Result<String> {
        surah_ayah_to_global(surah, ayah)?;
        Ok(format!("{}/{surah}_{ayah}.png", self.image_base))
    }

    /// URL for `kind`; `ayah` is ignored for [`AssetKind::SurahAudio`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for an invalid surah or ayah.
    pub fn url_for(&self, kind: AssetKind, reciter: &Reciter, surah: u16, ayah: u16) -> Result<String> {
        match kind {
            AssetKind::AyahAudio => self.ayah_audio(reciter, surah, ayah),
            AssetKind::SurahAudio => self.surah_audio(reciter, surah),
            AssetKind::AyahImage => self.ayah_image(surah, ayah),
        }
    }
}

/// Local file name for an asset, zero padded so directory listings sort.
#[must_use]
pub fn file_name(kind: AssetKind, surah: u16, ayah: u16) -> String {
    match kind {
        AssetKind::AyahAudio => format!("{surah:03}{ayah:03}.mp3"),
        AssetKind::SurahAudio => format!("{surah:03}.mp3"),
        AssetKind::AyahImage => format!("{surah:03}_{ayah:03}.png"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reciter::find_reciter;

    fn alafasy() -> &'static Reciter {
        find_reciter("ar.alafasy").unwrap()
    }

    #[test]
    fn ayah_audio_uses_global_index() {
        let urls = AssetUrls::default();
        assert_eq!(
            urls.ayah_audio(alafasy(), 2, 1).unwrap(),
            "https://cdn.islamic.network/quran/audio/128/ar.alafasy/8.mp3"
        );
        assert_eq!(
            urls.ayah_audio(alafasy(), 114, 6).unwrap(),
            "https://cdn.islamic.network/quran/audio/128/ar.alafasy/6236.mp3"
        );
    }

    #[test]
    fn surah_audio_url() {
        let urls = AssetUrls::default();
        let sudais = find_reciter("ar.abdurrahmaansudais").unwrap();
        assert_eq!(
            urls.surah_audio(sudais, 36).unwrap(),
            "https://cdn.islamic.network/quran/audio-surah/192/ar.abdurrahmaansudais/36.mp3"
        );
    }

    #[test]
    fn ayah_image_url() {
        let urls = AssetUrls::default();
        assert_eq!(
            urls.ayah_image(2, 255).unwrap(),
            "https://cdn.islamic.network/quran/images/2_255.png"
        );
    }

    #[test]
    fn invalid_positions_are_rejected() {
        let urls = AssetUrls::default();
        assert!(urls.ayah_audio(alafasy(), 0, 1).unwrap_err().is_out_of_range());
        assert!(urls.ayah_audio(alafasy(), 1, 8).unwrap_err().is_out_of_range());
        assert!(urls.surah_audio(alafasy(), 115).unwrap_err().is_out_of_range());
        assert!(urls.ayah_image(114, 7).unwrap_err().is_out_of_range());
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let urls = AssetUrls::new(&CdnConfig {
            audio_base: "https://mirror.example/q/".to_string(),
            image_base: "https://img.example//".to_string(),
        });
        assert_eq!(
            urls.surah_audio(alafasy(), 1).unwrap(),
            "https://mirror.example/q/audio-surah/128/ar.alafasy/1.mp3"
        );
        assert_eq!(
            urls.ayah_image(1, 1).unwrap(),
            "https://img.example/1_1.png"
        );
    }

    #[test]
    fn url_for_dispatches_on_kind() {
        let urls = AssetUrls::default();
        assert_eq!(
            urls.url_for(AssetKind::SurahAudio, alafasy(), 1, 999).unwrap(),
            urls.surah_audio(alafasy(), 1).unwrap()
        );
        assert_eq!(
            urls.url_for(AssetKind::AyahImage, alafasy(), 1, 2).unwrap(),
            urls.ayah_image(1, 2).unwrap()
        );
    }

    #[test]
    fn file_names_are_padded() {
        assert_eq!(file_name(AssetKind::AyahAudio, 1, 1), "001001.mp3");
        assert_eq!(file_name(AssetKind::AyahAudio, 2, 255), "002255.mp3");
        assert_eq!(file_name(AssetKind::SurahAudio, 36, 0), "036.mp3");
        assert_eq!(file_name(AssetKind::AyahImage, 114, 6), "114_006.png");
    }

    #[test]
    fn asset_kind_parse_and_display() {
        assert_eq!("ayah".parse::<AssetKind>().unwrap(), AssetKind::AyahAudio);
        assert_eq!("Surah".parse::<AssetKind>().unwrap(), AssetKind::SurahAudio);
        assert_eq!("image".parse::<AssetKind>().unwrap(), AssetKind::AyahImage);
        assert!("video".parse::<AssetKind>().is_err());
        assert_eq!(AssetKind::AyahImage.to_string(), "image");
    }
}
