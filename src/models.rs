use serde::{Deserialize, Serialize};

use crate::format::{format_percent, format_steps, group_thousands};

/// Persisted metrics record. Field names stay camelCase on disk so a store
/// written by an earlier schema-1 client loads unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub streak: u32,
    pub steps: u64,
    pub percentile: u32,
    pub calories: u64,
    pub distance: f64,
    pub active_minutes: u64,
    pub activity: [u64; 7],
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            streak: 14,
            steps: 10_000,
            percentile: 86,
            calories: 2_450,
            distance: 8.5,
            active_minutes: 127,
            activity: [45, 60, 55, 70, 80, 90, 75],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub education: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            age: 25,
            education: "Your school or university".to_string(),
        }
    }
}

impl Profile {
    pub fn avatar_initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

/// Closed set of icons selectable for custom stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconId {
    Clock,
    Heart,
    Fire,
    Water,
    Muscle,
    Trophy,
}

impl IconId {
    pub fn glyph(self) -> &'static str {
        match self {
            IconId::Clock => "\u{23F0}",
            IconId::Heart => "\u{2764}\u{FE0F}",
            IconId::Fire => "\u{1F525}",
            IconId::Water => "\u{1F4A7}",
            IconId::Muscle => "\u{1F4AA}",
            IconId::Trophy => "\u{1F3C6}",
        }
    }
}

/// Ad-hoc stat card added through the custom-stat dialog. Session-only:
/// never written to the store, gone on restart.
#[derive(Debug, Clone, Serialize)]
pub struct CustomCard {
    pub name: String,
    pub value: String,
    pub unit: String,
    pub icon: IconId,
}

/// Everything the dashboard tracks in memory.
#[derive(Debug, Clone, Default)]
pub struct AppData {
    pub metrics: Metrics,
    pub profile: Profile,
    pub cards: Vec<CustomCard>,
}

#[derive(Debug, Deserialize)]
pub struct StreakRequest {
    pub streak: u32,
}

#[derive(Debug, Deserialize)]
pub struct StepsRequest {
    pub steps: u64,
    pub percentile: u32,
}

#[derive(Debug, Deserialize)]
pub struct ActivityRequest {
    pub activity: Vec<u64>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub name: String,
    pub age: u32,
    pub education: String,
}

#[derive(Debug, Deserialize)]
pub struct CardRequest {
    pub name: String,
    pub value: String,
    pub unit: String,
    pub icon: IconId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub streak: u32,
    pub filled_slots: u32,
    pub steps: u64,
    pub steps_display: String,
    pub percentile: u32,
    pub percentile_display: String,
    pub calories: u64,
    pub calories_display: String,
    pub distance: f64,
    pub active_minutes: u64,
    pub activity: Vec<u64>,
}

impl MetricsResponse {
    pub fn project(metrics: &Metrics) -> Self {
        Self {
            streak: metrics.streak,
            filled_slots: metrics.streak.min(crate::ui::STREAK_SLOTS),
            steps: metrics.steps,
            steps_display: format_steps(metrics.steps),
            percentile: metrics.percentile,
            percentile_display: format_percent(metrics.percentile),
            calories: metrics.calories,
            calories_display: group_thousands(metrics.calories),
            distance: metrics.distance,
            active_minutes: metrics.active_minutes,
            activity: metrics.activity.to_vec(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub name: String,
    pub age: u32,
    pub age_display: String,
    pub education: String,
    pub initial: String,
}

impl ProfileResponse {
    pub fn project(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            age: profile.age,
            age_display: format!("{} yrs", profile.age),
            education: profile.education.clone(),
            initial: profile.avatar_initial(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CardResponse {
    pub name: String,
    pub value: String,
    pub unit: String,
    pub glyph: &'static str,
}
