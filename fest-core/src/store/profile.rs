//! The single user profile.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::FestResult;
use crate::storage::{self, KeyValueStore, PROFILE_KEY};

static DEFAULT_COLLEGE: &str = "SMVITM";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub college: String,
    pub year: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile {
            name: String::new(),
            college: DEFAULT_COLLEGE.to_string(),
            year: String::new(),
        }
    }
}

/// Partial profile update. `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub college: Option<String>,
    pub year: Option<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.college.is_none() && self.year.is_none()
    }
}

impl UserProfile {
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(college) = patch.college {
            self.college = college;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
    }
}

pub struct ProfileStore {
    storage: Arc<dyn KeyValueStore>,
    profile: UserProfile,
}

impl ProfileStore {
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let profile = storage::load_or_default(storage.as_ref(), PROFILE_KEY);
        ProfileStore { storage, profile }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn update_profile(&mut self, patch: ProfilePatch) -> FestResult<()> {
        self.profile.apply(patch);
        storage::save(self.storage.as_ref(), PROFILE_KEY, &self.profile)
    }
}
