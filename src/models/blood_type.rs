use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The eight canonical ABO/Rh groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodType {
    pub const ALL: [BloodType; 8] = [
        BloodType::APositive,
        BloodType::ANegative,
        BloodType::BPositive,
        BloodType::BNegative,
        BloodType::AbPositive,
        BloodType::AbNegative,
        BloodType::OPositive,
        BloodType::ONegative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodType::APositive => "A+",
            BloodType::ANegative => "A-",
            BloodType::BPositive => "B+",
            BloodType::BNegative => "B-",
            BloodType::AbPositive => "AB+",
            BloodType::AbNegative => "AB-",
            BloodType::OPositive => "O+",
            BloodType::ONegative => "O-",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBloodType(pub String);

impl fmt::Display for UnknownBloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a recognised blood group", self.0)
    }
}

impl FromStr for BloodType {
    type Err = UnknownBloodType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BloodType::ALL
            .into_iter()
            .find(|bt| bt.as_str() == s)
            .ok_or_else(|| UnknownBloodType(s.to_string()))
    }
}

/// Request severity. Carries no ordering; it only picks a display tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl FromStr for Urgency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Urgency::Low),
            "Medium" => Ok(Urgency::Medium),
            "High" => Ok(Urgency::High),
            "Critical" => Ok(Urgency::Critical),
            other => Err(format!("'{}' is not a recognised urgency", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blood_type_parses_canonical_strings() {
        for bt in BloodType::ALL {
            assert_eq!(bt.as_str().parse::<BloodType>(), Ok(bt));
        }
    }

    #[test]
    fn test_blood_type_is_case_sensitive() {
        assert!("o-".parse::<BloodType>().is_err());
        assert!("O−".parse::<BloodType>().is_err());
        assert!("".parse::<BloodType>().is_err());
    }

    #[test]
    fn test_blood_type_serde_uses_display_form() {
        let json = serde_json::to_string(&BloodType::AbNegative).unwrap();
        assert_eq!(json, "\"AB-\"");
    }

    #[test]
    fn test_urgency_rejects_unknown() {
        assert_eq!("Critical".parse::<Urgency>(), Ok(Urgency::Critical));
        assert!("urgent".parse::<Urgency>().is_err());
    }
}
