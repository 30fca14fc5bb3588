//! Human-readable formatting for sizes, durations and surah labels.

use std::time::Duration;

use crate::surah::SurahInfo;

/// Formats a byte count with a binary unit (B, KB, MB, GB).
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}

/// Formats a duration as `4.2s`, `3m 07s` or `1h 02m 03s`.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    match secs {
        0..60 => format!("{secs}.{}s", d.subsec_millis() / 100),
        60..3600 => format!("{}m {:02}s", secs / 60, secs % 60),
        _ => format!("{}h {:02}m {:02}s", secs / 3600, (secs % 3600) / 60, secs % 60),
    }
}

/// Formats a surah as `018 Al-Kahf (The Cave)`.
#[must_use]
pub fn format_surah(info: &SurahInfo) -> String {
    format!("{:03} {} ({})", info.number, info.name, info.english)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surah::surah_info;

    #[test]
    fn bytes_units() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1_048_576), "1.00 MB");
        assert_eq!(format_bytes(1_073_741_824), "1.00 GB");
        assert_eq!(format_bytes(5 * 1_099_511_627_776), "5120.00 GB");
    }

    #[test]
    fn duration_units() {
        assert_eq!(format_duration(Duration::ZERO), "0.0s");
        assert_eq!(format_duration(Duration::from_millis(4200)), "4.2s");
        assert_eq!(format_duration(Duration::from_secs(187)), "3m 07s");
        assert_eq!(format_duration(Duration::from_secs(3723)), "1h 02m 03s");
    }

    #[test]
    fn surah_label() {
        assert_eq!(format_surah(&surah_info(18).unwrap()), "018 Al-Kahf (The Cave)");
        assert_eq!(format_surah(&surah_info(114).unwrap()), "114 An-Naas (Mankind)");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn format_bytes_never_panics(bytes in any::<u64>()) {
                let s = format_bytes(bytes);
                prop_assert!(s.ends_with('B'));
            }

            #[test]
            fn format_duration_never_panics(millis in 0u64..10_000_000_000) {
                let _ = format_duration(Duration::from_millis(millis));
            }
        }
    }
}
