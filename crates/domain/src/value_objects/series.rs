//! Series value object - the game sub-title (realm) a record belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// The realm a character, world or relic comes from.
///
/// Serialized as the game's numeric series id. Ids the table does not know yet
/// are kept as `Other` so new content still loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum Series {
    Core,
    FfI,
    FfII,
    FfIII,
    FfIV,
    FfV,
    FfVI,
    FfVII,
    FfVIII,
    FfIX,
    FfX,
    FfXI,
    FfXII,
    FfXIII,
    FfXIV,
    Fft,
    Other(u32),
}

const SERIES_IDS: [(Series, u32); 16] = [
    (Series::Core, 200001),
    (Series::FfI, 101001),
    (Series::FfII, 102001),
    (Series::FfIII, 103001),
    (Series::FfIV, 104001),
    (Series::FfV, 105001),
    (Series::FfVI, 106001),
    (Series::FfVII, 107001),
    (Series::FfVIII, 108001),
    (Series::FfIX, 109001),
    (Series::FfX, 110001),
    (Series::FfXI, 111001),
    (Series::FfXII, 112001),
    (Series::FfXIII, 113001),
    (Series::FfXIV, 114001),
    (Series::Fft, 150001),
];

impl Series {
    pub fn id(&self) -> u32 {
        match self {
            Self::Other(id) => *id,
            known => SERIES_IDS
                .iter()
                .find(|(series, _)| series == known)
                .map(|(_, id)| *id)
                .unwrap_or_default(),
        }
    }

    /// Name shown in the Series column (e.g. "FF VII").
    pub fn display_name(&self) -> String {
        let name = match self {
            Self::Core => "Core",
            Self::FfI => "FF I",
            Self::FfII => "FF II",
            Self::FfIII => "FF III",
            Self::FfIV => "FF IV",
            Self::FfV => "FF V",
            Self::FfVI => "FF VI",
            Self::FfVII => "FF VII",
            Self::FfVIII => "FF VIII",
            Self::FfIX => "FF IX",
            Self::FfX => "FF X",
            Self::FfXI => "FF XI",
            Self::FfXII => "FF XII",
            Self::FfXIII => "FF XIII",
            Self::FfXIV => "FF XIV",
            Self::Fft => "FFT",
            Self::Other(id) => return id.to_string(),
        };
        name.to_string()
    }

    pub fn all_known() -> impl Iterator<Item = Series> {
        SERIES_IDS.iter().map(|(series, _)| *series)
    }
}

impl From<u32> for Series {
    fn from(value: u32) -> Self {
        SERIES_IDS
            .iter()
            .find(|(_, id)| *id == value)
            .map(|(series, _)| *series)
            .unwrap_or(Self::Other(value))
    }
}

impl From<Series> for u32 {
    fn from(value: Series) -> Self {
        value.id()
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl FromStr for Series {
    type Err = DomainError;

    /// Accepts a numeric series id or a display name ("FF VII", "ff vii").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<u32>() {
            return Ok(Self::from(id));
        }
        Self::all_known()
            .find(|series| series.display_name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::parse(format!("Unknown series: {}", s)))
    }
}
