use crate::models::{Category, Level};

pub fn candidates(category: Category, level: Level) -> &'static [&'static str] {
    match (category, level) {
        (Category::Health, Level::Low) => &[
            "Start with a 15-minute walk three times a week.",
            "Try going to bed 30 minutes earlier.",
            "Make one meal a day mostly vegetables.",
            "Take five minutes for deep breathing or stretching.",
        ],
        (Category::Health, Level::Medium) => &[
            "Keep your current habits and add a little more exercise each week.",
            "Track your daily steps to keep yourself motivated.",
            "Drink water more deliberately throughout the day.",
        ],
        (Category::Health, Level::High) => &[
            "Your health is in great shape. Keep it up!",
            "Exercise with friends or family to make it even more fun.",
        ],
        (Category::Work, Level::Low) => &[
            "Sort your tasks by priority and focus on three important ones a day.",
            "Try the Pomodoro technique: 25 minutes of focus, 5 minutes of rest.",
            "Set small goals and build a sense of progress.",
            "Talk more with your manager and colleagues.",
        ],
        (Category::Work, Level::Medium) => &[
            "Hold your current pace and consider picking up a new skill.",
            "Lean on your team to get work done more efficiently.",
        ],
        (Category::Work, Level::High) => &[
            "Work is going really well. Keep going!",
            "Deepen your expertise or try mentoring someone junior.",
        ],
        (Category::Hobby, Level::Low) => &[
            "Set aside even 30 minutes a week for something you enjoy.",
            "Read or listen to music on your commute.",
            "This is a good moment to try a new hobby.",
            "Relax with a favourite film or series.",
        ],
        (Category::Hobby, Level::Medium) => &[
            "Review your schedule to free up a bit more hobby time.",
            "Meet people who share your interests.",
        ],
        (Category::Hobby, Level::High) => &[
            "Your hobbies are thriving. Wonderful!",
            "Your hobbies might bring you new skills or new friends.",
        ],
        (Category::Relationships, Level::Low) => &[
            "Send a short message to a friend or family member.",
            "Plan a coffee or lunch with someone once a week.",
            "Think of a small surprise for someone you care about.",
            "Put your gratitude into words.",
        ],
        (Category::Relationships, Level::Medium) => &[
            "Look for chances to have deeper conversations.",
            "Try something new together with friends or family.",
        ],
        (Category::Relationships, Level::High) => &[
            "Your relationships are rich and rewarding. Wonderful!",
            "Keep supporting and thanking the people around you.",
        ],
        (Category::Learning, Level::Low) => &[
            "Listen to a podcast or an educational video on your commute.",
            "Make time to read, even ten minutes a day.",
            "Explore a topic you like with an online course.",
            "Write down what you learned in a journal.",
        ],
        (Category::Learning, Level::Medium) => &[
            "Plan toward a certification or a concrete skill upgrade.",
            "Join a study group or seminar and learn with others.",
        ],
        (Category::Learning, Level::High) => &[
            "Your drive to learn is impressive!",
            "Put what you learn into practice or teach it to someone.",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pair_has_two_to_four_entries() {
        for category in Category::ALL {
            for level in [Level::Low, Level::Medium, Level::High] {
                let count = candidates(category, level).len();
                assert!(
                    (2..=4).contains(&count),
                    "{category}/{level} has {count} entries"
                );
            }
        }
    }

    #[test]
    fn entries_are_not_shared_between_categories() {
        let health = candidates(Category::Health, Level::Low);
        let work = candidates(Category::Work, Level::Low);
        assert!(health.iter().all(|entry| !work.contains(entry)));
    }
}
