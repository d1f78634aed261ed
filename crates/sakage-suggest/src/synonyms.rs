//! Fixed synonym table for craving keywords.
//!
//! Maps the words customers actually type to the words the menu copy uses.
//! A synonym hit scores half a verbatim hit, so the table errs toward
//! precision over recall.

const SYNONYMS: &[(&str, &[&str])] = &[
    ("juicy", &["tender", "succulent", "moist"]),
    ("steak", &["beef", "meat", "sirloin", "ribeye"]),
    ("sweet", &["sugary", "honeyed", "candied"]),
    ("spicy", &["fiery", "zesty", "cayenne", "kick"]),
    ("cheesy", &["cheese", "cheddar", "mozzarella", "swiss"]),
    ("crispy", &["crunchy", "golden", "toasted"]),
    ("healthy", &["lean", "fresh", "light", "spinach"]),
    ("vegetarian", &["veggie", "vegetable", "zucchini", "mushroom"]),
    ("hearty", &["filling", "stacked", "feast", "loaded"]),
];

/// Returns the synonym set for a keyword, or an empty slice.
#[must_use]
pub fn synonyms(word: &str) -> &'static [&'static str] {
    SYNONYMS
        .iter()
        .find(|(key, _)| *key == word)
        .map_or(&[], |(_, syns)| syns)
}
