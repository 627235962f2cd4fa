//! Equipment kind enumeration with display metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of a loanable asset.
///
/// Carries the icon and label metadata the dashboards render next to each
/// asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "equipment_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EquipmentKind {
    /// Portable computer.
    Notebook,
    /// Multimedia projector.
    Projector,
    /// Photo/video camera.
    Camera,
    /// Tablet device.
    Tablet,
    /// Mobile phone.
    Phone,
    /// Peripheral or other accessory.
    Accessory,
}

impl EquipmentKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Notebook => "Notebook",
            Self::Projector => "Proyector",
            Self::Camera => "Cámara",
            Self::Tablet => "Tablet",
            Self::Phone => "Teléfono",
            Self::Accessory => "Accesorio",
        }
    }

    /// Icon shown next to the asset in calendars and dashboards.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Notebook => "💻",
            Self::Projector => "📽️",
            Self::Camera => "📷",
            Self::Tablet => "📱",
            Self::Phone => "📞",
            Self::Accessory => "🔌",
        }
    }

    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Notebook => "notebook",
            Self::Projector => "projector",
            Self::Camera => "camera",
            Self::Tablet => "tablet",
            Self::Phone => "phone",
            Self::Accessory => "accessory",
        }
    }
}

impl fmt::Display for EquipmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EquipmentKind {
    type Err = medistaff_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "notebook" => Ok(Self::Notebook),
            "projector" => Ok(Self::Projector),
            "camera" => Ok(Self::Camera),
            "tablet" => Ok(Self::Tablet),
            "phone" => Ok(Self::Phone),
            "accessory" => Ok(Self::Accessory),
            _ => Err(medistaff_core::AppError::validation(format!(
                "Invalid equipment kind: '{s}'"
            ))),
        }
    }
}
