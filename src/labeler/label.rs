use std::fmt;
use std::str::FromStr;

use super::Error;

/// Emotion a file can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Anger,
    Disgust,
    Fear,
    Happiness,
    Neutral,
    Sadness,
}

impl Label {
    /// Every label, in the order the buttons are laid out.
    pub const ALL: [Label; 6] = [
        Label::Anger,
        Label::Disgust,
        Label::Fear,
        Label::Happiness,
        Label::Neutral,
        Label::Sadness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Anger => "Anger",
            Label::Disgust => "Disgust",
            Label::Fear => "Fear",
            Label::Happiness => "Happiness",
            Label::Neutral => "Neutral",
            Label::Sadness => "Sadness",
        }
    }

    /// Maps the digit keys 1..=6 onto the labels.
    pub fn from_shortcut(digit: u8) -> Option<Label> {
        match digit {
            1..=6 => Some(Label::ALL[(digit - 1) as usize]),
            _ => None,
        }
    }

    pub fn shortcut(&self) -> u8 {
        // ALL is exhaustive, so the position always exists.
        Label::ALL.iter().position(|l| l == self).unwrap_or(0) as u8 + 1
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Label::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownLabel {
                value: s.to_string(),
            })
    }
}
