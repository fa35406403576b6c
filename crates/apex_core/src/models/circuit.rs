use serde::{Deserialize, Serialize};

/// A circuit on the calendar.
///
/// `focus_factor` scales both the random variance of qualifying/race scores
/// and the DNF risk. High-focus street circuits are chaotic and punishing;
/// low-focus power circuits are predictable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    pub name: String,
    pub focus_factor: f32,
}

impl Circuit {
    pub fn new(name: impl Into<String>, focus_factor: f32) -> Self {
        Self {
            name: name.into(),
            focus_factor,
        }
    }
}
