// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the simulation, the response generator, and storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a pet profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetId(pub String);

impl PetId {
    /// Generates a fresh random identifier.
    pub fn new_random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the type of adapter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Backend,
    Storage,
    Notifier,
}

/// Conversational persona derived from a profile's `is_pawpal` flag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// Living or virtual companion: playful, present tense.
    Companion,
    /// Memorial spirit: gentle, past tense, comforting.
    Memorial,
}

/// A pet profile as created during onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetProfile {
    pub id: PetId,
    pub name: String,
    pub species: String,
    /// Key into the static breed table, if the user picked one.
    #[serde(default)]
    pub breed: Option<String>,
    /// Comma-separated free text.
    #[serde(default)]
    pub traits: String,
    /// Comma-separated free text.
    #[serde(default)]
    pub habits: String,
    pub is_pawpal: bool,
    /// Art variant key such as `dog_1` or `cat_2`.
    #[serde(default)]
    pub variant: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PetProfile {
    /// Creates a profile with a fresh id and the current timestamp.
    pub fn new(name: impl Into<String>, species: impl Into<String>, is_pawpal: bool) -> Self {
        Self {
            id: PetId::new_random(),
            name: name.into(),
            species: species.into(),
            breed: None,
            traits: String::new(),
            habits: String::new(),
            is_pawpal,
            variant: None,
            created_at: Utc::now(),
        }
    }

    pub fn persona(&self) -> Persona {
        if self.is_pawpal {
            Persona::Companion
        } else {
            Persona::Memorial
        }
    }

    /// Name used in generated text, falling back to a persona default.
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if !name.is_empty() {
            return name;
        }
        match self.persona() {
            Persona::Companion => "buddy",
            Persona::Memorial => "friend",
        }
    }

    /// Species used in generated text, falling back to "pet".
    pub fn display_species(&self) -> &str {
        let species = self.species.trim();
        if species.is_empty() { "pet" } else { species }
    }

    pub fn trait_list(&self) -> Vec<&str> {
        split_list(&self.traits)
    }

    pub fn habit_list(&self) -> Vec<&str> {
        split_list(&self.habits)
    }

    /// Whether the pet should use cat-specific wording and media.
    pub fn is_cat(&self) -> bool {
        let variant_is_cat = self
            .variant
            .as_deref()
            .is_some_and(|v| v.to_lowercase().contains("cat"));
        variant_is_cat || self.species.to_lowercase().contains("cat")
    }
}

fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Who authored a conversation turn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Pet,
    System,
}

/// A single entry in a pet's append-only conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub id: String,
    pub from: Speaker,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn new(from: Speaker, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            from,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.from == Speaker::User
    }
}

/// A journal entry attached to a pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub id: String,
    pub pet_id: PetId,
    pub text: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    pub date: DateTime<Utc>,
    /// Set when the memory was promoted from a conversation turn.
    #[serde(default)]
    pub is_chat_message: bool,
}

impl Memory {
    pub fn new(pet_id: PetId, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            pet_id,
            text: text.into(),
            photo: None,
            video: None,
            date: Utc::now(),
            is_chat_message: false,
        }
    }

    /// Promotes a conversation turn to a journal entry.
    pub fn from_turn(pet_id: PetId, turn: &ConversationTurn) -> Self {
        Self {
            is_chat_message: true,
            ..Self::new(pet_id, turn.text.clone())
        }
    }
}

/// One entry in a daily feeding schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FeedingTime {
    pub hour: u8,
    pub minute: u8,
}

impl FeedingTime {
    /// Returns `None` when the hour or minute is out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }
}

impl std::fmt::Display for FeedingTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl std::str::FromStr for FeedingTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| format!("expected HH:MM, got '{s}'"))?;
        let hour: u8 = h.trim().parse().map_err(|_| format!("invalid hour '{h}'"))?;
        let minute: u8 = m
            .trim()
            .parse()
            .map_err(|_| format!("invalid minute '{m}'"))?;
        Self::new(hour, minute).ok_or_else(|| format!("time out of range: '{s}'"))
    }
}

/// A request handed to a remote response backend.
#[derive(Debug, Clone)]
pub struct BackendRequest {
    /// Persona prompt built from the pet profile.
    pub system_prompt: String,
    /// Trimmed history window, oldest first.
    pub history: Vec<ConversationTurn>,
    /// The new user message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, species: &str) -> PetProfile {
        PetProfile::new(name, species, true)
    }

    #[test]
    fn display_name_falls_back_per_persona() {
        let mut p = profile("  ", "dog");
        assert_eq!(p.display_name(), "buddy");
        p.is_pawpal = false;
        assert_eq!(p.display_name(), "friend");
        p.name = "Rex".into();
        assert_eq!(p.display_name(), "Rex");
    }

    #[test]
    fn trait_list_splits_and_trims() {
        let mut p = profile("Rex", "dog");
        p.traits = " playful ,  loyal,, curious ".into();
        assert_eq!(p.trait_list(), vec!["playful", "loyal", "curious"]);
        assert!(p.habit_list().is_empty());
    }

    #[test]
    fn cat_detection_uses_variant_or_species() {
        let mut p = profile("Tom", "dog");
        assert!(!p.is_cat());
        p.variant = Some("cat_1".into());
        assert!(p.is_cat());
        let q = profile("Kit", "Cat");
        assert!(q.is_cat());
    }

    #[test]
    fn persona_follows_flag() {
        let mut p = profile("Rex", "dog");
        assert_eq!(p.persona(), Persona::Companion);
        p.is_pawpal = false;
        assert_eq!(p.persona(), Persona::Memorial);
        assert_eq!(Persona::Memorial.to_string(), "memorial");
    }

    #[test]
    fn feeding_time_parses_and_validates() {
        let t: FeedingTime = "08:30".parse().unwrap();
        assert_eq!(t, FeedingTime { hour: 8, minute: 30 });
        assert_eq!(t.to_string(), "08:30");
        assert!("24:00".parse::<FeedingTime>().is_err());
        assert!("7".parse::<FeedingTime>().is_err());
        assert!("07:60".parse::<FeedingTime>().is_err());
    }

    #[test]
    fn memory_from_turn_is_flagged() {
        let pet = PetId("p1".into());
        let turn = ConversationTurn::new(Speaker::Pet, "woof!");
        let memory = Memory::from_turn(pet.clone(), &turn);
        assert!(memory.is_chat_message);
        assert_eq!(memory.text, "woof!");
        assert_eq!(memory.pet_id, pet);
    }

    #[test]
    fn speaker_serializes_lowercase() {
        let json = serde_json::to_string(&Speaker::Pet).unwrap();
        assert_eq!(json, "\"pet\"");
    }
}
