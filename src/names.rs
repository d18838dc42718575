/// Literal replacements applied to station names that are too long to label.
/// No replacement produces text matching another pattern.
const ABBREVIATIONS: [(&str, &str); 6] = [
    ("Boston College", "B.C."),
    ("Hynes Convention Center", "Hynes"),
    ("Northeastern University", "Northeastern"),
    ("Museum of Fine Arts", "MFA"),
    ("Massachusetts Avenue", "Mass. Ave"),
    ("Government Center", "Gov't Center"),
];

/// Shortens a station name for display on the map.
#[must_use]
pub fn abbreviate(name: &str) -> String {
    ABBREVIATIONS
        .iter()
        .fold(name.to_string(), |acc, (from, to)| acc.replace(from, to))
}
