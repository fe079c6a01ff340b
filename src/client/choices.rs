//! Fixed choice lists for the six preference fields. These restrict the
//! client UI only; the intake service accepts any string.

pub const OCCASIONS: [&str; 6] = ["Casual", "Formal", "Party", "Wedding", "Work", "Date"];

pub const SEASONS: [&str; 6] = ["Any", "Summer", "Winter", "Spring", "Autumn", "Monsoon"];

pub const GENDERS: [&str; 4] = ["Woman", "Man", "Non-binary", "Prefer not to say"];

pub const BODY_TYPES: [&str; 6] = ["Average", "Petite", "Tall", "Plus-size", "Athletic", "Curvy"];

pub const AGE_GROUPS: [&str; 6] = ["Teen", "20s", "30s", "40s", "50+", "60+"];

pub const MOODS: [&str; 13] = [
    "Happy",
    "Lazy",
    "Motivated",
    "Romantic",
    "Confident",
    "Chill",
    "Adventurous",
    "Classy",
    "Energetic",
    "Bold",
    "Elegant",
    "Sophisticated",
    "Edgy",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::StylePreferences;

    #[test]
    fn seed_defaults_are_valid_choices() {
        let defaults = StylePreferences::default();
        assert!(OCCASIONS.contains(&defaults.occasion.as_str()));
        assert!(SEASONS.contains(&defaults.season.as_str()));
        assert!(GENDERS.contains(&defaults.gender.as_str()));
        assert!(BODY_TYPES.contains(&defaults.body_type.as_str()));
        assert!(AGE_GROUPS.contains(&defaults.age.as_str()));
        assert!(MOODS.contains(&defaults.mood.as_str()));
    }

    #[test]
    fn choices_are_unique_within_each_list() {
        fn all_unique(list: &[&str]) -> bool {
            let mut seen = std::collections::HashSet::new();
            list.iter().all(|v| seen.insert(*v))
        }

        assert!(all_unique(&OCCASIONS));
        assert!(all_unique(&SEASONS));
        assert!(all_unique(&GENDERS));
        assert!(all_unique(&BODY_TYPES));
        assert!(all_unique(&AGE_GROUPS));
        assert!(all_unique(&MOODS));
    }
}
