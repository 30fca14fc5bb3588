//! Integration tests for the global ayah index through the public API.

use hifz_assets::{
    Error, SURAH_COUNT, SurahRange, TOTAL_AYAHS, ayah_count, global_to_surah_ayah,
    surah_ayah_range, surah_ayah_to_global, surahs,
};

#[test]
fn boundary_scenarios() {
    let cases = [
        ((1, 1), 1),
        ((1, 7), 7),
        ((2, 1), 8),
        ((2, 286), 293),
        ((114, 1), 6231),
        ((114, 6), 6236),
    ];
    for ((surah, ayah), global) in cases {
        assert_eq!(
            surah_ayah_to_global(surah, ayah).unwrap(),
            global,
            "{surah}:{ayah}"
        );
    }
}

#[test]
fn range_scenarios() {
    let expect = |start, end, total| SurahRange { start, end, total };
    assert_eq!(surah_ayah_range(1).unwrap(), expect(1, 7, 7));
    assert_eq!(surah_ayah_range(2).unwrap(), expect(8, 293, 286));
    assert_eq!(surah_ayah_range(114).unwrap(), expect(6231, 6236, 6));
}

#[test]
fn out_of_range_surahs() {
    for surah in [0, 115, u16::MAX] {
        match surah_ayah_to_global(surah, 1) {
            Err(Error::OutOfRange { what, value, .. }) => {
                assert_eq!(what, "surah");
                assert_eq!(value, i64::from(surah));
            }
            other => panic!("expected OutOfRange for surah {surah}, got {other:?}"),
        }
    }
}

#[test]
fn ranges_tile_the_whole_book() {
    let mut next_start = 1;
    for s in 1..=SURAH_COUNT {
        let range = surah_ayah_range(s).unwrap();
        assert_eq!(range.start, next_start, "surah {s}");
        assert_eq!(range.total, ayah_count(s).unwrap());
        assert_eq!(range.end - range.start + 1, range.total);
        next_start = range.end + 1;
    }
    assert_eq!(next_start - 1, TOTAL_AYAHS);
    assert_eq!(TOTAL_AYAHS, 6236);
}

#[test]
fn every_ayah_round_trips() {
    let mut expected = 1;
    for info in surahs() {
        for ayah in 1..=info.ayahs {
            let global = surah_ayah_to_global(info.number, ayah).unwrap();
            assert_eq!(global, expected);
            let back = global_to_surah_ayah(global).unwrap();
            assert_eq!((back.surah, back.ayah), (info.number, ayah));
            expected += 1;
        }
    }
}
