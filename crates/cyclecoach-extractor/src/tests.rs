//! End-to-end scenarios for the Extractor

#[cfg(test)]
mod tests {
    use crate::{extract_summary, format_month_day, Extractor, ExtractorConfig};
    use chrono::{Datelike, Local, NaiveDate, TimeDelta, Weekday};
    use cyclecoach_domain::traits::SummaryExtractor;
    use cyclecoach_domain::{Mood, NO_SPECIFIC_SYMPTOMS};

    // A Monday
    fn reference_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn sentinel() -> Vec<String> {
        vec![NO_SPECIFIC_SYMPTOMS.to_string()]
    }

    #[test]
    fn test_empty_input() {
        let summary = Extractor::new().extract_on("", reference_day());
        assert_eq!(summary.period_start(), "October 19");
        assert_eq!(summary.symptoms(), sentinel());
        assert_eq!(summary.mood(), Mood::Neutral);
    }

    #[test]
    fn test_whitespace_only_input() {
        let summary = Extractor::new().extract_on("   \n\t ", reference_day());
        assert_eq!(summary.symptoms(), sentinel());
        assert_eq!(summary.mood(), Mood::Neutral);
    }

    #[test]
    fn test_cramps_and_bloating_today() {
        let summary = Extractor::new().extract_on(
            "I have cramps and bloating today, feeling pretty sad and tired",
            reference_day(),
        );
        assert_eq!(summary.period_start(), "October 19");
        // "tired" is a symptom too, and it comes first in the vocabulary
        assert_eq!(summary.symptoms(), ["tired", "cramps", "bloating"]);
        assert_eq!(summary.mood(), Mood::Low);
    }

    #[test]
    fn test_yesterday_mood_swings_back_pain() {
        let summary = Extractor::new().extract_on(
            "yesterday I had mood swings and back pain, felt happy and great though",
            reference_day(),
        );
        assert_eq!(summary.period_start(), "October 18");
        assert_eq!(summary.symptoms(), ["pain", "moodSwings", "backPain"]);
        assert_eq!(summary.mood(), Mood::Positive);
    }

    #[test]
    fn test_last_monday_on_a_monday() {
        let summary = Extractor::new().extract_on(
            "last monday was rough, anxiety and nausea, felt awful",
            reference_day(),
        );
        assert_eq!(summary.period_start(), "October 12");
        assert_eq!(summary.symptoms(), ["nausea", "anxiety"]);
        // "awful" and "rough" are not in the negative list
        assert_eq!(summary.mood(), Mood::Neutral);
    }

    #[test]
    fn test_last_monday_midweek() {
        let thursday = NaiveDate::from_ymd_opt(2026, 10, 22).unwrap();
        let summary = Extractor::new().extract_on("last monday", thursday);
        assert_eq!(summary.period_start(), "October 19");
    }

    #[test]
    fn test_short_absolute_date() {
        let summary = Extractor::new().extract_on("3 mar I was fine", reference_day());
        assert_eq!(summary.period_start(), "March 3");
        assert_eq!(summary.symptoms(), sentinel());
        assert_eq!(summary.mood(), Mood::Positive);
    }

    #[test]
    fn test_mixed_case_input() {
        let summary = Extractor::new().extract_on("YESTERDAY: Spotting, HEADACHE. Calm.", reference_day());
        assert_eq!(summary.period_start(), "October 18");
        assert_eq!(summary.symptoms(), ["headache", "spotting"]);
        assert_eq!(summary.mood(), Mood::Positive);
    }

    #[test]
    fn test_invalid_absolute_date_uses_reference_day() {
        let summary = Extractor::new().extract_on("30 feb heavy bleeding", reference_day());
        assert_eq!(summary.period_start(), "October 19");
        assert_eq!(summary.symptoms(), ["heavyBleeding"]);
    }

    #[test]
    fn test_idempotent() {
        let extractor = Extractor::new();
        let text = "tomorrow probably cramps again, worried and stressed";
        let first = extractor.extract_on(text, reference_day());
        let second = extractor.extract_on(text, reference_day());
        assert_eq!(first, second);
    }

    #[test]
    fn test_free_function_uses_local_today() {
        let today = Local::now().date_naive();
        let summary = extract_summary("");
        // Tolerate a midnight rollover between the two clock reads
        let tomorrow = today + TimeDelta::days(1);
        assert!(
            summary.period_start() == format_month_day(today)
                || summary.period_start() == format_month_day(tomorrow)
        );
    }

    #[test]
    fn test_last_weekday_never_today() {
        let extractor = Extractor::new();
        let mut day = reference_day();
        for _ in 0..7 {
            for weekday in ["sunday", "monday", "tuesday", "wednesday", "thursday", "friday", "saturday"] {
                let summary = extractor.extract_on(&format!("last {weekday}"), day);
                let target: Weekday = weekday.parse().unwrap();
                let expected = (1..=7)
                    .map(|back| day - TimeDelta::days(back))
                    .find(|d| d.weekday() == target)
                    .unwrap();
                assert_eq!(summary.period_start(), format_month_day(expected));
            }
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_extended_lexicon() {
        let config = ExtractorConfig {
            extra_symptoms: vec!["hot flashes".to_string()],
            extra_positive_words: vec!["relaxed".to_string()],
            extra_negative_words: vec!["grumpy".to_string()],
        };
        let extractor = Extractor::from_config(&config).unwrap();

        let summary = extractor.extract_on("hot flashes and cramps, grumpy", reference_day());
        assert_eq!(summary.symptoms(), ["cramps", "hotFlashes"]);
        assert_eq!(summary.mood(), Mood::Low);

        let summary = extractor.extract_on("relaxed", reference_day());
        assert_eq!(summary.mood(), Mood::Positive);
    }

    #[test]
    fn test_extended_lexicon_ignores_duplicate_phrases() {
        let config = ExtractorConfig {
            extra_symptoms: vec!["cramps".to_string()],
            ..Default::default()
        };
        let extractor = Extractor::from_config(&config).unwrap();
        let summary = extractor.extract_on("cramps", reference_day());
        assert_eq!(summary.symptoms(), ["cramps"]);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ExtractorConfig {
            extra_symptoms: vec!["Hot Flashes".to_string()],
            ..Default::default()
        };
        assert!(Extractor::from_config(&config).is_err());
    }

    #[test]
    fn test_trait_object_extraction() {
        let extractor: Box<dyn SummaryExtractor> = Box::new(Extractor::new());
        let summary = extractor.extract("acne and insomnia");
        assert_eq!(summary.symptoms(), ["acne", "insomnia"]);
    }

    #[test]
    fn test_concurrent_extraction_shares_lexicon() {
        let extractor = Extractor::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let extractor = extractor.clone();
                std::thread::spawn(move || extractor.extract_on("sad cramps", reference_day()))
            })
            .collect();

        for handle in handles {
            let summary = handle.join().unwrap();
            assert_eq!(summary.symptoms(), ["cramps"]);
            assert_eq!(summary.mood(), Mood::Low);
        }
    }
}

#[cfg(test)]
mod proptests {
    use crate::Extractor;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_summary_always_populated(text in ".*") {
            let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
            let summary = Extractor::new().extract_on(&text, today);
            prop_assert!(!summary.symptoms().is_empty());
            prop_assert!(!summary.period_start().is_empty());
            prop_assert!(["positive", "neutral", "low"].contains(&summary.mood().as_str()));
        }

        #[test]
        fn prop_journal_like_text(
            words in proptest::collection::vec(
                prop_oneof![
                    Just("cramps"), Just("happy"), Just("sad"), Just("last"),
                    Just("friday"), Just("12"), Just("mar"), Just("tired"), Just("and"),
                ],
                0..20,
            )
        ) {
            let text = words.join(" ");
            let today = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
            let summary = Extractor::new().extract_on(&text, today);
            prop_assert!(!summary.symptoms().is_empty());
        }
    }
}
