//! Static location suggestions offered while typing into the location field.

use once_cell::sync::Lazy;
use strsim::normalized_levenshtein;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSuggestion {
    pub neighbourhood: &'static str,
    pub city: &'static str,
}

impl LocationSuggestion {
    const fn new(neighbourhood: &'static str, city: &'static str) -> Self {
        Self { neighbourhood, city }
    }

    /// `Downtown, Calgary`
    pub fn label(&self) -> String {
        format!("{}, {}", self.neighbourhood, self.city)
    }
}

static SUGGESTIONS: Lazy<Vec<LocationSuggestion>> = Lazy::new(|| {
    vec![
        LocationSuggestion::new("Downtown", "Calgary"),
        LocationSuggestion::new("Beltline", "Calgary"),
        LocationSuggestion::new("Kensington", "Calgary"),
        LocationSuggestion::new("Inglewood", "Calgary"),
        LocationSuggestion::new("Mission", "Calgary"),
        LocationSuggestion::new("Bridgeland", "Calgary"),
        LocationSuggestion::new("Whyte Avenue", "Edmonton"),
        LocationSuggestion::new("Downtown", "Edmonton"),
        LocationSuggestion::new("Gastown", "Vancouver"),
        LocationSuggestion::new("Kitsilano", "Vancouver"),
        LocationSuggestion::new("Distillery District", "Toronto"),
        LocationSuggestion::new("Plateau", "Montreal"),
    ]
});

pub fn all() -> &'static [LocationSuggestion] {
    &SUGGESTIONS
}

/// Ranks suggestions for `query`: substring hits first, then by similarity.
pub fn suggest(query: &str, limit: usize) -> Vec<&'static LocationSuggestion> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SUGGESTIONS.iter().take(limit).collect();
    }

    let mut scored: Vec<(bool, f64, &'static LocationSuggestion)> = SUGGESTIONS
        .iter()
        .map(|entry| {
            let label = entry.label().to_lowercase();
            let contains = label.contains(&needle);
            let similarity = normalized_levenshtein(&needle, &entry.neighbourhood.to_lowercase())
                .max(normalized_levenshtein(&needle, &label));
            (contains, similarity, entry)
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.total_cmp(&a.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, _, entry)| entry)
        .collect()
}
