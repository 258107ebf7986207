//! Normalization rules applied to demographic predictions before they are
//! stored on a person record.

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

pub const GENDER_MALE: &str = "male";
pub const GENDER_FEMALE: &str = "female";

/// Stored when the predictor reports anything other than male or female,
/// including no answer at all.
pub const GENDER_OTHER: &str = "other";

/// Map a raw predicted gender onto the stored vocabulary.
///
/// Matching is exact: `"Male"` is not `"male"` and becomes `"other"`.
pub fn normalize_gender(raw: Option<&str>) -> &'static str {
    match raw {
        Some(GENDER_MALE) => GENDER_MALE,
        Some(GENDER_FEMALE) => GENDER_FEMALE,
        _ => GENDER_OTHER,
    }
}

// ---------------------------------------------------------------------------
// Nationality
// ---------------------------------------------------------------------------

/// Pick the country code with the strictly highest probability.
///
/// Candidates are visited in order and a later candidate only replaces the
/// current best when its probability is greater, so ties go to the first
/// one seen. NaN probabilities never win. Blank country codes are skipped.
pub fn select_nationality<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut best: Option<(&'a str, f64)> = None;

    for (code, probability) in candidates {
        if code.trim().is_empty() || probability.is_nan() {
            continue;
        }
        match best {
            Some((_, top)) if probability <= top => {}
            _ => best = Some((code, probability)),
        }
    }

    best.map(|(code, _)| code)
}
