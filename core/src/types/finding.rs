use serde::{Deserialize, Serialize};
use std::fmt;

/// Coded diagnostic category attached to an ROI (e.g. SNOMED CT "Tumor")
///
/// The display name doubles as the category label in output file names
/// and feature names, see [`FindingCode::slug`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FindingCode {
    /// Code value, e.g. "108369006"
    pub code: String,

    /// Coding scheme designator
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// Display name, e.g. "Tumor"
    pub meaning: String,
}

fn default_scheme() -> String {
    "SCT".to_string()
}

impl FindingCode {
    /// Creates a new FindingCode
    pub fn new(code: &str, scheme: &str, meaning: &str) -> Self {
        Self {
            code: code.to_string(),
            scheme: scheme.to_string(),
            meaning: meaning.to_string(),
        }
    }

    /// Creates a SNOMED CT finding code
    pub fn sct(code: &str, meaning: &str) -> Self {
        Self::new(code, "SCT", meaning)
    }

    /// Category label: display name lowercased with spaces replaced by hyphens
    pub fn slug(&self) -> String {
        self.meaning.to_lowercase().replace(' ', "-")
    }

    /// Checks whether a coded value denotes this finding
    ///
    /// Codes are equal when value and coding scheme match; the meaning is
    /// informative only.
    pub fn matches(&self, code: &str, scheme: &str) -> bool {
        self.code == code.trim() && self.scheme == scheme.trim()
    }
}

impl fmt::Display for FindingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, \"{}\")", self.code, self.scheme, self.meaning)
    }
}

/// The finding categories exported when no configuration overrides them
pub fn default_findings() -> Vec<FindingCode> {
    vec![
        FindingCode::sct("399721002", "Tumor infiltration by lymphocytes present"),
        FindingCode::sct("47973001", "Artifact"),
        FindingCode::sct("39577004", "Tumor cells of uncertain behavior"),
        FindingCode::sct("108369006", "Tumor"),
    ]
}
