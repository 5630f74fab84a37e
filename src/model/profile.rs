use serde::{Deserialize, Serialize};

/// The structured résumé document this app renders. Loaded from JSON; the
/// bundled default lives in `assets/profile.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub contacts: Contact,
    #[serde(default)]
    pub missions: Vec<Mission>,
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
}

/// A consulting/freelance mission. `row` optionally pins the item to a
/// 1-based row of the mission swimlane, bypassing automatic placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub title: String,
    pub context: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub technologies: Vec<Technology>,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub row: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub row: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
}

/// A public-speaking or community event; single-day, never ongoing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub date: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    pub frequency: Frequency,
    #[serde(default)]
    pub comments: String,
}

/// Usage frequency of a technology: either a free-form string or a 0.0–1.0
/// ratio that gets bucketed into a display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Frequency {
    Ratio(f32),
    Text(String),
}

impl Frequency {
    pub fn label(&self) -> String {
        match self {
            Frequency::Text(text) => text.clone(),
            Frequency::Ratio(r) if *r >= 0.8 => "Au quotidien".to_string(),
            Frequency::Ratio(r) if *r >= 0.5 => "Souvent".to_string(),
            Frequency::Ratio(r) if *r >= 0.2 => "De temps en temps".to_string(),
            Frequency::Ratio(r) if *r > 0.0 => "Un tout petit peu".to_string(),
            Frequency::Ratio(_) => "Jamais".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_accepts_numbers_and_strings() {
        let tech: Technology = serde_json::from_str(
            r#"{"name": "Kotlin", "frequency": 0.9, "comments": "used daily"}"#,
        )
        .unwrap();
        assert_eq!(tech.frequency.label(), "Au quotidien");

        let tech: Technology =
            serde_json::from_str(r#"{"name": "Rust", "frequency": "week-ends"}"#).unwrap();
        assert_eq!(tech.frequency.label(), "week-ends");
    }

    #[test]
    fn frequency_bands() {
        assert_eq!(Frequency::Ratio(0.8).label(), "Au quotidien");
        assert_eq!(Frequency::Ratio(0.5).label(), "Souvent");
        assert_eq!(Frequency::Ratio(0.2).label(), "De temps en temps");
        assert_eq!(Frequency::Ratio(0.05).label(), "Un tout petit peu");
        assert_eq!(Frequency::Ratio(0.0).label(), "Jamais");
    }

    #[test]
    fn event_kind_maps_from_type_field() {
        let event: Event = serde_json::from_str(
            r#"{"name": "DevFest", "date": "2023-10", "description": "Talk", "type": "conference"}"#,
        )
        .unwrap();
        assert_eq!(event.kind, "conference");
    }
}
