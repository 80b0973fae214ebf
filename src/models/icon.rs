use serde::{Deserialize, Serialize};

/// Cosmetic group icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IconType {
    #[default]
    Folder,
    Package,
    Wrench,
    Cpu,
    Monitor,
    HardDrive,
    Puzzle,
}

impl IconType {
    pub const ALL: [IconType; 7] = [
        IconType::Folder,
        IconType::Package,
        IconType::Wrench,
        IconType::Cpu,
        IconType::Monitor,
        IconType::HardDrive,
        IconType::Puzzle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconType::Folder => "folder",
            IconType::Package => "package",
            IconType::Wrench => "wrench",
            IconType::Cpu => "cpu",
            IconType::Monitor => "monitor",
            IconType::HardDrive => "hard-drive",
            IconType::Puzzle => "puzzle",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        Self::ALL.into_iter().find(|i| i.as_str() == code)
    }

    /// Terminal glyph used in list headers.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconType::Folder => "📁",
            IconType::Package => "📦",
            IconType::Wrench => "🔧",
            IconType::Cpu => "💻",
            IconType::Monitor => "🖥️",
            IconType::HardDrive => "💾",
            IconType::Puzzle => "🧩",
        }
    }
}
