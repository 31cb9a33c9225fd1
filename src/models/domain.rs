use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque pet identifier
///
/// The backend hands out integer ids but nothing on this side does arithmetic
/// with them, so they are kept as text. Both JSON numbers and strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawPetId", into = "String")]
pub struct PetId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPetId {
    Number(i64),
    Text(String),
}

impl From<RawPetId> for PetId {
    fn from(raw: RawPetId) -> Self {
        match raw {
            RawPetId::Number(n) => PetId(n.to_string()),
            RawPetId::Text(s) => PetId(s.trim().to_string()),
        }
    }
}

impl From<PetId> for String {
    fn from(id: PetId) -> Self {
        id.0
    }
}

impl PetId {
    /// Parse a user-supplied id, returning `None` for empty or blank input
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PetId(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pet profile as served by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    #[serde(rename = "pets_id", alias = "id")]
    pub id: PetId,
    #[serde(rename = "pet_name", default, deserialize_with = "non_blank")]
    pub name: Option<String>,
    #[serde(rename = "pet_sex", default, deserialize_with = "non_blank")]
    pub sex: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub breed: Option<String>,
    #[serde(rename = "pet_dob", default, deserialize_with = "non_blank")]
    pub date_of_birth: Option<String>,
    #[serde(rename = "photo_path", default, deserialize_with = "non_blank")]
    pub photo: Option<String>,
}

impl Pet {
    /// Create a pet with only an id; every other attribute is absent
    pub fn new(id: PetId) -> Self {
        Self {
            id,
            name: None,
            sex: None,
            breed: None,
            date_of_birth: None,
            photo: None,
        }
    }

    pub fn sex_kind(&self) -> Option<PetSex> {
        self.sex.as_deref().map(PetSex::from)
    }

    /// Date of birth as a calendar date, if the backend sent an ISO date
    pub fn birth_date(&self) -> Option<NaiveDate> {
        let raw = self.date_of_birth.as_deref()?;
        let day = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

/// Treat null, missing and whitespace-only strings alike
fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Sex of a pet. The backend stores free text, so unknown values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetSex {
    Male,
    Female,
    Other(String),
}

impl From<&str> for PetSex {
    fn from(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => PetSex::Male,
            "female" | "f" => PetSex::Female,
            _ => PetSex::Other(raw.trim().to_string()),
        }
    }
}

impl fmt::Display for PetSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PetSex::Male => f.write_str("Male"),
            PetSex::Female => f.write_str("Female"),
            PetSex::Other(s) => f.write_str(s),
        }
    }
}

/// A pet proposed as a potential match for the selected pet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate {
    pet: Pet,
}

impl Candidate {
    pub fn new(pet: Pet) -> Self {
        Self { pet }
    }

    pub fn id(&self) -> &PetId {
        &self.pet.id
    }

    pub fn pet(&self) -> &Pet {
        &self.pet
    }

    pub fn into_pet(self) -> Pet {
        self.pet
    }
}

/// Accept or reject, as taken by the user against a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    /// Backend endpoint name for this decision
    pub fn endpoint(self) -> &'static str {
        match self {
            Decision::Accept => "accept_match",
            Decision::Reject => "reject_match",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Accept => f.write_str("accept"),
            Decision::Reject => f.write_str("reject"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pet_from_backend_json() {
        let json = r#"{
            "pets_id": 12,
            "pet_name": "Rex",
            "pet_sex": "Male",
            "breed": "Beagle",
            "pet_dob": "2021-04-03",
            "photo_path": "pet_photos/rex.jpg",
            "tracker": "ignored"
        }"#;

        let pet: Pet = serde_json::from_str(json).unwrap();
        assert_eq!(pet.id.as_str(), "12");
        assert_eq!(pet.name.as_deref(), Some("Rex"));
        assert_eq!(pet.sex_kind(), Some(PetSex::Male));
        assert_eq!(pet.birth_date(), NaiveDate::from_ymd_opt(2021, 4, 3));
    }

    #[test]
    fn test_blank_fields_are_missing() {
        let json = r#"{"pets_id": "7", "pet_name": "  ", "breed": null}"#;

        let pet: Pet = serde_json::from_str(json).unwrap();
        assert_eq!(pet.id, PetId::parse("7").unwrap());
        assert!(pet.name.is_none());
        assert!(pet.breed.is_none());
        assert!(pet.photo.is_none());
        assert!(pet.birth_date().is_none());
    }

    #[test]
    fn test_pet_id_parse_rejects_blank() {
        assert!(PetId::parse("").is_none());
        assert!(PetId::parse("   ").is_none());
        assert_eq!(PetId::parse(" 3 ").unwrap().as_str(), "3");
    }

    #[test]
    fn test_free_text_sex_is_kept() {
        assert_eq!(PetSex::from("female"), PetSex::Female);
        assert_eq!(PetSex::from("Neutered").to_string(), "Neutered");
    }
}
