//! Typed employee profile shapes shared with the rest of the platform.
//!
//! Field names follow the platform contract (camelCase on the wire). Dates
//! stay strings; parsing and formatting them is the consumer's concern.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use hrms_events::JsonMap;

use crate::error::PeopleError;

/// Employment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    Active,
    Inactive,
    Terminated,
    OnLeave,
}

impl EmploymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Terminated => "TERMINATED",
            Self::OnLeave => "ON_LEAVE",
        }
    }
}

impl core::fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmploymentStatus {
    type Err = PeopleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            "TERMINATED" => Ok(Self::Terminated),
            "ON_LEAVE" => Ok(Self::OnLeave),
            other => Err(PeopleError::UnknownEmploymentStatus(other.to_string())),
        }
    }
}

/// Contractual employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Intern,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "FULL_TIME",
            Self::PartTime => "PART_TIME",
            Self::Contract => "CONTRACT",
            Self::Intern => "INTERN",
        }
    }
}

impl core::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmploymentType {
    type Err = PeopleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FULL_TIME" => Ok(Self::FullTime),
            "PART_TIME" => Ok(Self::PartTime),
            "CONTRACT" => Ok(Self::Contract),
            "INTERN" => Ok(Self::Intern),
            other => Err(PeopleError::UnknownEmploymentType(other.to_string())),
        }
    }
}

/// Personal details of an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_name: Option<String>,
    pub date_of_birth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// Postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// How to reach an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub personal_email: String,
    pub work_email: String,
    pub phone_number: String,
    pub home_address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_address: Option<Address>,
}

/// Position and tenure details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentInfo {
    pub job_title: String,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub status: EmploymentStatus,
    /// `type` on the wire; reserved word in Rust.
    #[serde(rename = "type")]
    pub kind: EmploymentType,
}

fn to_json_map<T: Serialize>(value: &T) -> JsonMap {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => JsonMap::new(),
    }
}

impl PersonalInfo {
    /// Serialize into the open map form carried on events.
    pub fn to_map(&self) -> JsonMap {
        to_json_map(self)
    }
}

impl EmploymentInfo {
    /// Serialize into the open map form carried on events.
    pub fn to_map(&self) -> JsonMap {
        to_json_map(self)
    }
}
