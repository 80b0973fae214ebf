use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Sort rank: HIGH(0) < MEDIUM(1) < LOW(2)
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase).
    /// Single-letter shortcuts H/M/L are accepted too.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "HIGH" | "H" => Some(Priority::High),
            "MEDIUM" | "M" => Some(Priority::Medium),
            "LOW" | "L" => Some(Priority::Low),
            _ => None,
        }
    }
}
