//! Fixed vocabularies used by the extractor
//!
//! All lists are ordered. Symptom order is the order of the extracted tags;
//! month order is calendar order.

/// Controlled symptom vocabulary, in output order
///
/// `"tired"` is also a negative mood word. Both signals fire independently.
pub const SYMPTOM_PHRASES: &[&str] = &[
    "tired",
    "fatigue",
    "cramps",
    "pain",
    "bloating",
    "bloated",
    "headache",
    "migraine",
    "nausea",
    "sore breasts",
    "mood swings",
    "anxiety",
    "depression",
    "acne",
    "diarrhea",
    "constipation",
    "dizziness",
    "back pain",
    "leg pain",
    "water retention",
    "irritability",
    "tender breasts",
    "food cravings",
    "insomnia",
    "heavy bleeding",
    "light bleeding",
    "spotting",
    "breast tenderness",
    "abdominal pain",
];

/// Words counted toward a positive mood
pub const POSITIVE_WORDS: &[&str] = &[
    "happy", "great", "good", "fine", "well", "okay", "excited", "joyful", "content", "calm",
];

/// Words counted toward a low mood
pub const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "upset",
    "angry",
    "stressed",
    "anxious",
    "depressed",
    "tired",
    "exhausted",
    "irritable",
    "frustrated",
    "miserable",
    "worried",
    "bad",
];

/// Full month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Three-letter month abbreviations, January first
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Weekday names as they appear after `last`
pub const WEEKDAY_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// Convert a vocabulary phrase into its tag
///
/// `"breast tenderness"` becomes `"breastTenderness"`; single words pass
/// through unchanged.
pub fn to_tag(phrase: &str) -> String {
    let mut words = phrase.split_whitespace();
    let mut tag = match words.next() {
        Some(first) => first.to_string(),
        None => return String::new(),
    };

    for word in words {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            tag.extend(first.to_uppercase());
            tag.push_str(chars.as_str());
        }
    }

    tag
}

/// 1-based month number for a full or abbreviated month name
pub fn month_number(name: &str) -> Option<u32> {
    let name = name.to_lowercase();
    MONTH_ABBREVIATIONS
        .iter()
        .position(|abbr| *abbr == name)
        .or_else(|| {
            MONTH_NAMES
                .iter()
                .position(|full| full.to_lowercase() == name)
        })
        .map(|idx| idx as u32 + 1)
}
