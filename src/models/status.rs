use serde::{Deserialize, Serialize};

/// Per-item progress marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    None,
    Done,
    Skip,
}

impl Status {
    /// Single-click transition: none → done → skip → none.
    pub fn next(self) -> Self {
        match self {
            Status::None => Status::Done,
            Status::Done => Status::Skip,
            Status::Skip => Status::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::None => "none",
            Status::Done => "done",
            Status::Skip => "skip",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "none" | "clear" => Some(Status::None),
            "done" | "ok" => Some(Status::Done),
            "skip" => Some(Status::Skip),
            _ => None,
        }
    }

    pub fn mark(&self) -> &'static str {
        match self {
            Status::None => "[ ]",
            Status::Done => "[✓]",
            Status::Skip => "[✗]",
        }
    }
}

/// Status entry stored apart from the item it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStatus {
    pub id: String,
    pub status: Status,
}
