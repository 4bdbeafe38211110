//! Activity records and registry snapshots.

use serde::ser::{Serialize, SerializeMap, Serializer};

use mergington_config::ActivitySeed;

/// One extracurricular activity.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advertised capacity. Reported to clients but not enforced on signup.
    pub max_participants: u32,
    /// Participant emails in signup order.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participant(mut self, email: impl Into<String>) -> Self {
        self.participants.push(email.into());
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Split a seed record into its name and activity.
    pub fn from_seed(seed: ActivitySeed) -> (String, Self) {
        let activity = Self {
            description: seed.description,
            schedule: seed.schedule,
            max_participants: seed.max_participants,
            participants: seed.participants,
        };
        (seed.name, activity)
    }
}

/// Point-in-time copy of the registry, in seed order.
///
/// Serializes as a JSON object keyed by activity name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivitySnapshot {
    entries: Vec<(String, Activity)>,
}

impl ActivitySnapshot {
    pub(crate) fn new(entries: Vec<(String, Activity)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ActivitySnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_participants() {
        let activity = Activity::new("Learn chess", "Fridays", 12)
            .with_participant("michael@mergington.edu");
        assert!(activity.has_participant("michael@mergington.edu"));
        assert!(!activity.has_participant("daniel@mergington.edu"));
        assert_eq!(activity.participant_count(), 1);
    }

    #[test]
    fn test_activity_from_seed() {
        let seed = ActivitySeed::new("Art Club", "Painting", "Wednesdays", 18)
            .with_participant("mia@mergington.edu");
        let (name, activity) = Activity::from_seed(seed);
        assert_eq!(name, "Art Club");
        assert_eq!(activity.description, "Painting");
        assert_eq!(activity.participants, vec!["mia@mergington.edu"]);
    }

    #[test]
    fn test_activity_serialize_fields() {
        let activity = Activity::new("Painting", "Wednesdays", 18);
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["description"], "Painting");
        assert_eq!(json["schedule"], "Wednesdays");
        assert_eq!(json["max_participants"], 18);
        assert!(json["participants"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_serializes_as_object_in_order() {
        let snapshot = ActivitySnapshot::new(vec![
            ("Zoology".to_string(), Activity::new("Animals", "Mondays", 5)),
            ("Art Club".to_string(), Activity::new("Painting", "Wednesdays", 18)),
        ]);
        let json = serde_json::to_string(&snapshot).unwrap();
        let zoology = json.find("Zoology").unwrap();
        let art = json.find("Art Club").unwrap();
        assert!(json.starts_with('{'));
        assert!(zoology < art);
    }

    #[test]
    fn test_snapshot_get() {
        let snapshot = ActivitySnapshot::new(vec![(
            "Chess Club".to_string(),
            Activity::new("Chess", "Fridays", 12),
        )]);
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.get("Chess Club").is_some());
        assert!(snapshot.get("Go Club").is_none());
    }
}
