use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// One extracurricular offering.
///
/// The name is the directory key and is not repeated in the serialized body;
/// `GET /activities` renders it as the key of the surrounding JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Insertion ordered; serialized as a JSON array.
    pub participants: IndexSet<String>,
}

impl Activity {
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.contains(email)
    }
}

// Row shape of the seed catalog (built-in JSON or ACTIVITIES_SEED file).
#[derive(Debug, Clone, Deserialize)]
pub struct SeedActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl From<SeedActivity> for Activity {
    fn from(seed: SeedActivity) -> Self {
        Activity {
            name: seed.name,
            description: seed.description,
            schedule: seed.schedule,
            max_participants: seed.max_participants,
            // Duplicate seeded emails collapse to their first occurrence.
            participants: seed.participants.into_iter().collect(),
        }
    }
}
