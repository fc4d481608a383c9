use core::fmt::{Display, Formatter};
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// The device class a set of measurements applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormFactor {
    #[default]
    AllFormFactors,
    Desktop,
    Phone,
    Tablet,
}

impl FormFactor {
    /// The identifier used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllFormFactors => "ALL_FORM_FACTORS",
            Self::Desktop => "DESKTOP",
            Self::Phone => "PHONE",
            Self::Tablet => "TABLET",
        }
    }

    /// Human-readable device name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::AllFormFactors => "All Devices",
            Self::Desktop => "Desktop",
            Self::Phone => "Mobile",
            Self::Tablet => "Tablet",
        }
    }
}

impl Display for FormFactor {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormFactor {
    type Err = ohno::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all_form_factors" | "all" => Ok(Self::AllFormFactors),
            "desktop" => Ok(Self::Desktop),
            "phone" | "mobile" => Ok(Self::Phone),
            "tablet" => Ok(Self::Tablet),
            _ => Err(ohno::app_err!(
                "unknown form factor '{s}' (expected one of: all, desktop, phone, tablet)"
            )),
        }
    }
}
