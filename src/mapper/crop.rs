use crate::mapper::scores::round3;
use crate::mapper::types::GradeBand;

/// Collapses every exam score below `min_grade` into a single failing
/// band spanning `[0, min_grade - 0.1]` and clips any band that
/// straddles the threshold.
///
/// A surviving band whose rounded grade is also 0 replaces the failing
/// band in place rather than merging with it; the last band written for
/// a rounded grade wins. With `min_grade == 0` the input is returned
/// unchanged.
pub fn crop_below_min(bands: &[GradeBand], min_grade: f64) -> Vec<GradeBand> {
    if min_grade == 0.0 {
        return bands.to_vec();
    }

    let mut cropped = vec![GradeBand {
        rounded: 0,
        min_score: 0.0,
        max_score: round3(min_grade - 0.1),
    }];

    for band in bands {
        if band.max_score < min_grade {
            continue;
        }

        let emitted = if band.min_score < min_grade {
            GradeBand {
                rounded: band.rounded,
                min_score: min_grade,
                max_score: band.max_score,
            }
        } else {
            *band
        };

        match cropped.iter_mut().find(|b| b.rounded == emitted.rounded) {
            Some(existing) => *existing = emitted,
            None => cropped.push(emitted),
        }
    }

    cropped
}
