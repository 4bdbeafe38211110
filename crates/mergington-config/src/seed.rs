//! Built-in activity catalogue.

use crate::schema::ActivitySeed;

/// Activities offered when the config file does not list any.
pub fn default_activities() -> Vec<ActivitySeed> {
    vec![
        ActivitySeed::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participant("michael@mergington.edu")
        .with_participant("daniel@mergington.edu"),
        ActivitySeed::new(
            "Soccer Team",
            "Competitive soccer training and matches",
            "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
            22,
        )
        .with_participant("liam@mergington.edu")
        .with_participant("noah@mergington.edu"),
        ActivitySeed::new(
            "Track and Field",
            "Sprint, distance, and field event training",
            "Mondays, Wednesdays, Fridays, 3:30 PM - 5:00 PM",
            25,
        )
        .with_participant("ava@mergington.edu")
        .with_participant("ethan@mergington.edu"),
        ActivitySeed::new(
            "Art Club",
            "Explore drawing, painting, and mixed media",
            "Wednesdays, 3:30 PM - 5:00 PM",
            18,
        )
        .with_participant("mia@mergington.edu")
        .with_participant("isabella@mergington.edu"),
        ActivitySeed::new(
            "Drama Club",
            "Acting workshops and theatrical productions",
            "Thursdays, 4:00 PM - 6:00 PM",
            20,
        )
        .with_participant("charlotte@mergington.edu")
        .with_participant("amelia@mergington.edu"),
        ActivitySeed::new(
            "Debate Team",
            "Practice public speaking and competitive debates",
            "Mondays and Thursdays, 5:00 PM - 6:30 PM",
            16,
        )
        .with_participant("benjamin@mergington.edu")
        .with_participant("oliver@mergington.edu"),
        ActivitySeed::new(
            "Science Club",
            "Hands-on experiments and science fair projects",
            "Fridays, 3:30 PM - 5:00 PM",
            20,
        )
        .with_participant("lucas@mergington.edu")
        .with_participant("harper@mergington.edu"),
        ActivitySeed::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participant("emma@mergington.edu")
        .with_participant("sophia@mergington.edu"),
        ActivitySeed::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participant("john@mergington.edu")
        .with_participant("olivia@mergington.edu"),
    ]
}
