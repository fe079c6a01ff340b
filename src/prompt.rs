use serde::{Deserialize, Serialize};

/// The six categorical style preferences attached to an upload. The
/// backend accepts any string; the restricted choice lists live in the
/// client UI only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePreferences {
    pub occasion: String,
    pub season: String,
    pub gender: String,
    pub body_type: String,
    pub age: String,
    pub mood: String,
}

impl Default for StylePreferences {
    fn default() -> Self {
        Self {
            occasion: "Casual".to_string(),
            season: "Any".to_string(),
            gender: "Woman".to_string(),
            body_type: "Average".to_string(),
            age: "20s".to_string(),
            mood: "Confident".to_string(),
        }
    }
}

impl StylePreferences {
    /// Overwrites a single field by form-field name. Unknown names are
    /// ignored so the multipart parser can feed every text field through.
    pub fn set(&mut self, name: &str, value: String) {
        match name {
            "occasion" => self.occasion = value,
            "season" => self.season = value,
            "gender" => self.gender = value,
            "body_type" => self.body_type = value,
            "age" => self.age = value,
            "mood" => self.mood = value,
            _ => {}
        }
    }
}

/// Renders the stylist prompt for one request. Pure function of the six
/// preference fields; the image travels separately as a content part.
pub fn build_prompt(prefs: &StylePreferences) -> String {
    format!(
        r#"You are a fashion stylist.
Generate a culturally-aware, body-type-optimized outfit suggestion using this base image and these traits:

- Occasion: {occasion}
- Season: {season}
- Gender: {gender}
- Body Type: {body_type}
- Age: {age}
- Mood: {mood}

Return in Markdown with:
## Signature Look: [Theme Name]
"🌟 Vibe: [Mood/Style]"
"👗 Garment: [Key item + detail]"
"🧥 Layer: [Adaptation layer + weather]"
"💎 Accents: [3 accessories with cultural touch]"
"📏 Fit Tip: [Fit advice based on body type]"
"⚡ Final Flair: [1-line quote to boost confidence]"
"#,
        occasion = prefs.occasion,
        season = prefs.season,
        gender = prefs.gender,
        body_type = prefs.body_type,
        age = prefs.age,
        mood = prefs.mood,
    )
}
