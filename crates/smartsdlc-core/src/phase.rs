use serde::{Deserialize, Serialize};

/// A software development life-cycle phase used to bucket classified
/// sentences.
///
/// `General` and `Other` are distinct: `General` is chosen by the model,
/// `Other` also catches any label that is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SdlcPhase {
    Requirements,
    Design,
    Development,
    Testing,
    Deployment,
    General,
    Other,
}

impl SdlcPhase {
    /// All phases in display order.
    pub const ALL: [SdlcPhase; 7] = [
        SdlcPhase::Requirements,
        SdlcPhase::Design,
        SdlcPhase::Development,
        SdlcPhase::Testing,
        SdlcPhase::Deployment,
        SdlcPhase::General,
        SdlcPhase::Other,
    ];

    /// Maps a free-text label to a phase, case-insensitively.
    /// Unknown labels map to [`SdlcPhase::Other`].
    pub fn from_label(label: &str) -> SdlcPhase {
        match label.trim().to_lowercase().as_str() {
            "requirements" => SdlcPhase::Requirements,
            "design" => SdlcPhase::Design,
            "development" => SdlcPhase::Development,
            "testing" => SdlcPhase::Testing,
            "deployment" => SdlcPhase::Deployment,
            "general" => SdlcPhase::General,
            _ => SdlcPhase::Other,
        }
    }

    /// Lowercase key used on the wire.
    pub fn key(&self) -> &'static str {
        match self {
            SdlcPhase::Requirements => "requirements",
            SdlcPhase::Design => "design",
            SdlcPhase::Development => "development",
            SdlcPhase::Testing => "testing",
            SdlcPhase::Deployment => "deployment",
            SdlcPhase::General => "general",
            SdlcPhase::Other => "other",
        }
    }

    /// Returns a human-readable name for the phase.
    pub fn display_name(&self) -> &'static str {
        match self {
            SdlcPhase::Requirements => "Requirements",
            SdlcPhase::Design => "Design",
            SdlcPhase::Development => "Development",
            SdlcPhase::Testing => "Testing",
            SdlcPhase::Deployment => "Deployment",
            SdlcPhase::General => "General",
            SdlcPhase::Other => "Other",
        }
    }
}
