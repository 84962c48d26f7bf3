use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::error::AppError;

/// Closed set of moods a user can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodCategory {
    #[serde(rename = "Sad/Low")]
    SadLow,
    #[serde(rename = "Anxious/Stressed")]
    AnxiousStressed,
    #[serde(rename = "Distracted/ADHD")]
    DistractedAdhd,
    #[serde(rename = "Tired/Insomnia")]
    TiredInsomnia,
    #[serde(rename = "Angry/Frustrated")]
    AngryFrustrated,
}

impl MoodCategory {
    pub const ALL: [MoodCategory; 5] = [
        MoodCategory::SadLow,
        MoodCategory::AnxiousStressed,
        MoodCategory::DistractedAdhd,
        MoodCategory::TiredInsomnia,
        MoodCategory::AngryFrustrated,
    ];

    /// Display label, also the accepted input form
    pub fn label(&self) -> &'static str {
        match self {
            MoodCategory::SadLow => "Sad/Low",
            MoodCategory::AnxiousStressed => "Anxious/Stressed",
            MoodCategory::DistractedAdhd => "Distracted/ADHD",
            MoodCategory::TiredInsomnia => "Tired/Insomnia",
            MoodCategory::AngryFrustrated => "Angry/Frustrated",
        }
    }
}

impl Display for MoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MoodCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MoodCategory::ALL
            .into_iter()
            .find(|mood| mood.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::InvalidMood(s.to_string()))
    }
}
