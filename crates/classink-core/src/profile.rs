//! The persisted user profile: every classroom design plus the subject set.

use crate::design::ClassroomDesign;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Subjects every new profile starts with.
pub const BUILT_IN_SUBJECTS: &[&str] = &[
    "math",
    "reading",
    "science",
    "art",
    "music",
    "social-studies",
];

/// A subject created by the teacher, alongside the built-in set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSubject {
    pub id: String,
    pub name: String,
}

/// Aggregate root: owns every classroom design, the custom subjects, and
/// the hidden built-ins.
///
/// Loaded wholesale at login and rewritten wholesale on every mutation;
/// there are no partial updates. Invariant: every active subject
/// (built-in minus hidden, plus custom) has exactly one design entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub designs: HashMap<String, ClassroomDesign>,
    pub custom_subjects: Vec<CustomSubject>,
    pub hidden_builtins: Vec<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl UserProfile {
    /// Create a profile with a default classroom for every built-in subject.
    pub fn new() -> Self {
        let mut profile = Self {
            id: Uuid::new_v4(),
            designs: HashMap::new(),
            custom_subjects: Vec::new(),
            hidden_builtins: Vec::new(),
        };
        profile.sync_designs();
        profile
    }

    /// Active subjects: built-ins minus hidden, plus custom, in that order.
    pub fn active_subjects(&self) -> Vec<String> {
        let mut subjects: Vec<String> = BUILT_IN_SUBJECTS
            .iter()
            .filter(|s| !self.hidden_builtins.iter().any(|h| h == *s))
            .map(|s| s.to_string())
            .collect();
        subjects.extend(self.custom_subjects.iter().map(|s| s.id.clone()));
        subjects
    }

    /// Check if a subject id is currently active.
    pub fn is_active(&self, subject: &str) -> bool {
        self.active_subjects().iter().any(|s| s == subject)
    }

    /// Enforce the design invariant: exactly one design per active
    /// subject, none for anything else.
    pub fn sync_designs(&mut self) {
        let active = self.active_subjects();
        for subject in &active {
            self.designs.entry(subject.clone()).or_default();
        }
        self.designs
            .retain(|subject, _| active.iter().any(|s| s == subject));
    }

    /// Add a custom subject with a fresh default classroom.
    /// Returns false on an id collision with any known subject.
    pub fn add_custom_subject(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> bool {
        let id = id.into();
        if BUILT_IN_SUBJECTS.contains(&id.as_str())
            || self.custom_subjects.iter().any(|s| s.id == id)
        {
            return false;
        }
        self.custom_subjects.push(CustomSubject {
            id,
            name: name.into(),
        });
        self.sync_designs();
        true
    }

    /// Remove a custom subject; its classroom design goes with it.
    pub fn remove_custom_subject(&mut self, id: &str) -> bool {
        let before = self.custom_subjects.len();
        self.custom_subjects.retain(|s| s.id != id);
        let removed = self.custom_subjects.len() != before;
        if removed {
            self.sync_designs();
        }
        removed
    }

    /// Hide a built-in subject; its classroom design is dropped.
    pub fn hide_builtin(&mut self, id: &str) -> bool {
        if !BUILT_IN_SUBJECTS.contains(&id) || self.hidden_builtins.iter().any(|h| h == id) {
            return false;
        }
        self.hidden_builtins.push(id.to_string());
        self.sync_designs();
        true
    }

    /// Bring back a hidden built-in with a fresh default classroom.
    pub fn unhide_builtin(&mut self, id: &str) -> bool {
        let before = self.hidden_builtins.len();
        self.hidden_builtins.retain(|h| h != id);
        let restored = self.hidden_builtins.len() != before;
        if restored {
            self.sync_designs();
        }
        restored
    }

    /// The design for a subject, if the subject is active.
    pub fn design(&self, subject: &str) -> Option<&ClassroomDesign> {
        self.designs.get(subject)
    }

    /// Mutable design for a subject, created with defaults when absent.
    ///
    /// Refuses inactive subjects: minting a design for a hidden or unknown
    /// subject would break the invariant, and the entry would be swept away
    /// (data included) by the next `sync_designs`.
    pub fn design_mut(&mut self, subject: &str) -> Option<&mut ClassroomDesign> {
        if !self.is_active(subject) {
            return None;
        }
        Some(self.designs.entry(subject.to_string()).or_default())
    }

    /// Serialize the profile to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a profile from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_covers_builtins() {
        let profile = UserProfile::new();
        assert_eq!(profile.designs.len(), BUILT_IN_SUBJECTS.len());
        for subject in BUILT_IN_SUBJECTS {
            assert!(profile.design(subject).is_some());
        }
    }

    #[test]
    fn test_custom_subject_gets_a_design() {
        let mut profile = UserProfile::new();
        assert!(profile.add_custom_subject("coding", "Coding Club"));
        assert!(profile.design("coding").is_some());

        // Duplicate ids are refused, builtin ids too.
        assert!(!profile.add_custom_subject("coding", "Again"));
        assert!(!profile.add_custom_subject("math", "Shadow Math"));
    }

    #[test]
    fn test_removing_custom_subject_drops_design() {
        let mut profile = UserProfile::new();
        profile.add_custom_subject("coding", "Coding Club");

        assert!(profile.remove_custom_subject("coding"));
        assert!(profile.design("coding").is_none());
        assert!(!profile.remove_custom_subject("coding"));
    }

    #[test]
    fn test_hiding_builtin_drops_design() {
        let mut profile = UserProfile::new();
        assert!(profile.hide_builtin("art"));
        assert!(profile.design("art").is_none());
        assert!(!profile.is_active("art"));

        // Unhiding recreates a fresh default classroom.
        assert!(profile.unhide_builtin("art"));
        assert!(profile.design("art").is_some());
    }

    #[test]
    fn test_hide_unknown_subject_refused() {
        let mut profile = UserProfile::new();
        assert!(!profile.hide_builtin("astrology"));
    }

    #[test]
    fn test_invariant_one_design_per_active_subject() {
        let mut profile = UserProfile::new();
        profile.add_custom_subject("coding", "Coding Club");
        profile.hide_builtin("music");
        profile.sync_designs();

        let active = profile.active_subjects();
        assert_eq!(profile.designs.len(), active.len());
        for subject in &active {
            assert!(profile.designs.contains_key(subject));
        }
    }

    #[test]
    fn test_design_mut_refuses_inactive_subject() {
        let mut profile = UserProfile::new();
        profile.hide_builtin("art");

        assert!(profile.design_mut("art").is_none());
        assert!(profile.design_mut("astrology").is_none());

        // No stray entries were minted.
        assert_eq!(profile.designs.len(), profile.active_subjects().len());
    }

    #[test]
    fn test_json_round_trip() {
        let mut profile = UserProfile::new();
        profile.add_custom_subject("coding", "Coding Club");
        profile.design_mut("math").unwrap().add_sticker("⭐");

        let json = profile.to_json().unwrap();
        let back = UserProfile::from_json(&json).unwrap();
        assert_eq!(back, profile);
    }
}
