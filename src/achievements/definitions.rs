//! Achievement definitions.

use super::{Achievement, ConditionType};

/// Get all achievement definitions
pub fn all_achievements() -> Vec<Achievement> {
    let mut achievements = Vec::new();

    achievements.extend(lesson_achievements());
    achievements.extend(streak_achievements());
    achievements.extend(xp_achievements());
    achievements.extend(language_achievements());
    achievements.extend(score_achievements());

    achievements
}

/// Look up a single achievement by id.
pub fn find_achievement(id: &str) -> Option<Achievement> {
    all_achievements().into_iter().find(|a| a.id == id)
}

fn lesson_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "first_step",
            "First Step",
            "Complete your first lesson",
            "🦶",
            ConditionType::Lessons,
            1,
        ),
        Achievement::new(
            "lessons_50",
            "Dedicated",
            "Complete 50 lessons",
            "📚",
            ConditionType::Lessons,
            50,
        ),
        Achievement::new(
            "lessons_100",
            "Centurion",
            "Complete 100 lessons",
            "💯",
            ConditionType::Lessons,
            100,
        ),
    ]
}

fn streak_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "streak_3",
            "On Fire",
            "Reach a 3-day streak",
            "🔥",
            ConditionType::Streak,
            3,
        ),
        Achievement::new(
            "streak_7",
            "Week Warrior",
            "Reach a 7-day streak",
            "📅",
            ConditionType::Streak,
            7,
        ),
        Achievement::new(
            "streak_14",
            "Committed",
            "Reach a 14-day streak",
            "🗓️",
            ConditionType::Streak,
            14,
        ),
        Achievement::new(
            "streak_30",
            "Monthly Master",
            "Reach a 30-day streak",
            "🏆",
            ConditionType::Streak,
            30,
        ),
    ]
}

fn xp_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new("xp_100", "Novice", "Earn 100 XP total", "🥉", ConditionType::Xp, 100),
        Achievement::new(
            "xp_1000",
            "Scholar",
            "Earn 1000 XP total",
            "🥇",
            ConditionType::Xp,
            1000,
        ),
        Achievement::new(
            "xp_5000",
            "Expert",
            "Earn 5000 XP total",
            "🎓",
            ConditionType::Xp,
            5000,
        ),
    ]
}

fn language_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "polyglot_3",
            "Polyglot",
            "Start learning 3 languages",
            "🌍",
            ConditionType::Languages,
            3,
        ),
        Achievement::new(
            "polyglot_5",
            "World Traveler",
            "Start learning 5 languages",
            "✈️",
            ConditionType::Languages,
            5,
        ),
    ]
}

fn score_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "score_130",
            "Linguistic Legend",
            "Reach a Language Score of 130",
            "👑",
            ConditionType::Score,
            130,
        ),
        Achievement::new(
            "score_500",
            "Grandmaster",
            "Reach a Language Score of 500",
            "💎",
            ConditionType::Score,
            500,
        ),
    ]
}
