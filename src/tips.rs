//! Health tips shown on the patient dashboard.
//!
//! The dashboard rotates through these one at a time, by index, so the
//! stored order is the rotation order. Like the image catalog, the list is
//! compiled in and never mutated.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("tip {0} is empty")]
    Empty(usize),
    #[error("tip {0} does not end in a period: {1:?}")]
    Unterminated(usize, &'static str),
}

/// A single dashboard health tip.
#[derive(Debug, Clone, Copy)]
pub struct HealthTip {
    pub text: &'static str,
}

const TIPS: &[HealthTip] = &[
    HealthTip { text: "Drink plenty of water throughout the day to stay hydrated." },
    HealthTip { text: "Aim for at least 30 minutes of physical activity most days of the week." },
    HealthTip { text: "Eat a balanced diet rich in fruits, vegetables, and whole grains." },
    HealthTip { text: "Get 7-8 hours of quality sleep every night for optimal health." },
    HealthTip { text: "Wash your hands regularly to prevent the spread of germs." },
    HealthTip { text: "Take breaks from screens to reduce eye strain and improve focus." },
    HealthTip { text: "Manage stress with relaxation techniques like deep breathing or meditation." },
    HealthTip { text: "Schedule regular check-ups with your healthcare provider." },
    HealthTip { text: "Limit sugary drinks and processed foods for better long-term health." },
    HealthTip { text: "Practice safe sun exposure by wearing sunscreen when outdoors." },
];

/// The tips in rotation order.
pub fn health_tips() -> &'static [HealthTip] {
    TIPS
}

/// Validate the compiled-in tips: non-empty, each a period-terminated sentence.
pub fn check() -> Result<(), CheckError> {
    check_tips(TIPS)
}

fn check_tips(tips: &[HealthTip]) -> Result<(), CheckError> {
    for (idx, tip) in tips.iter().enumerate() {
        let pos = idx + 1;
        if tip.text.is_empty() {
            return Err(CheckError::Empty(pos));
        }
        if !tip.text.ends_with('.') {
            return Err(CheckError::Unterminated(pos, tip.text));
        }
    }
    Ok(())
}
