//! Static catalog of suggested calisthenics exercises.

use serde::Serialize;

/// A suggested exercise from the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuggestedExercise {
    pub name: &'static str,
    pub category: &'static str,
    pub difficulty: &'static str,
}

const fn exercise(
    name: &'static str,
    category: &'static str,
    difficulty: &'static str,
) -> SuggestedExercise {
    SuggestedExercise {
        name,
        category,
        difficulty,
    }
}

/// Common calisthenics exercises. Reference data, not derived from
/// logged workouts.
pub fn suggested_exercises() -> &'static [SuggestedExercise] {
    const CATALOG: [SuggestedExercise; 20] = [
        exercise("Push-ups", "Push", "beginner"),
        exercise("Pull-ups", "Pull", "intermediate"),
        exercise("Squats", "Legs", "beginner"),
        exercise("Dips", "Push", "intermediate"),
        exercise("Lunges", "Legs", "beginner"),
        exercise("Plank", "Core", "beginner"),
        exercise("Burpees", "Full Body", "intermediate"),
        exercise("Mountain Climbers", "Core", "beginner"),
        exercise("Jumping Jacks", "Cardio", "beginner"),
        exercise("Leg Raises", "Core", "intermediate"),
        exercise("Handstand Push-ups", "Push", "advanced"),
        exercise("Pistol Squats", "Legs", "advanced"),
        exercise("L-Sit", "Core", "advanced"),
        exercise("Muscle-ups", "Pull", "advanced"),
        exercise("Diamond Push-ups", "Push", "intermediate"),
        exercise("Wide Grip Pull-ups", "Pull", "intermediate"),
        exercise("Jump Squats", "Legs", "intermediate"),
        exercise("Side Plank", "Core", "beginner"),
        exercise("Bicycle Crunches", "Core", "beginner"),
        exercise("Box Jumps", "Legs", "intermediate"),
    ];
    &CATALOG
}
