//! Offboarding exit type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Why an employee left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "exit_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ExitType {
    /// The employee resigned.
    VoluntaryResignation,
    /// The employer terminated the contract.
    Dismissal,
    /// The employee retired.
    Retirement,
    /// A fixed-term contract ran out.
    ContractEnd,
    /// The employee stopped showing up.
    JobAbandonment,
    /// Anything else.
    Other,
}

impl ExitType {
    /// Return the exit type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VoluntaryResignation => "voluntary_resignation",
            Self::Dismissal => "dismissal",
            Self::Retirement => "retirement",
            Self::ContractEnd => "contract_end",
            Self::JobAbandonment => "job_abandonment",
            Self::Other => "other",
        }
    }

    /// Human-readable label for notification emails.
    pub fn label(&self) -> &'static str {
        match self {
            Self::VoluntaryResignation => "Renuncia voluntaria",
            Self::Dismissal => "Despido",
            Self::Retirement => "Jubilación",
            Self::ContractEnd => "Fin de contrato",
            Self::JobAbandonment => "Abandono de trabajo",
            Self::Other => "Otros",
        }
    }
}

impl fmt::Display for ExitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExitType {
    type Err = medistaff_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "voluntary_resignation" => Ok(Self::VoluntaryResignation),
            "dismissal" => Ok(Self::Dismissal),
            "retirement" => Ok(Self::Retirement),
            "contract_end" => Ok(Self::ContractEnd),
            "job_abandonment" => Ok(Self::JobAbandonment),
            "other" => Ok(Self::Other),
            _ => Err(medistaff_core::AppError::validation(format!(
                "Invalid exit type: '{s}'. Expected one of: voluntary_resignation, dismissal, retirement, contract_end, job_abandonment, other"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "retirement".parse::<ExitType>().unwrap(),
            ExitType::Retirement
        );
        assert_eq!(
            "CONTRACT_END".parse::<ExitType>().unwrap(),
            ExitType::ContractEnd
        );
        assert!("resignation".parse::<ExitType>().is_err());
    }

    #[test]
    fn test_round_trip() {
        for t in [
            ExitType::VoluntaryResignation,
            ExitType::Dismissal,
            ExitType::Retirement,
            ExitType::ContractEnd,
            ExitType::JobAbandonment,
            ExitType::Other,
        ] {
            assert_eq!(t.as_str().parse::<ExitType>().unwrap(), t);
        }
    }
}
