/// Reply sent when the history holds no user message yet.
pub const GREETING: &str = "Hello! I'm your exercise health assistant. How can I help you today?";

/// Canned replies, indexed by [`ResponseCategory::catalog_index`].
pub const RESPONSE_CATALOG: [&str; 6] = [
    "Exercise can help improve both physical and mental health. It's generally recommended to engage in at least 150 minutes of moderate-intensity aerobic activity weekly, such as brisk walking, swimming, or cycling. Additionally, include muscle-strengthening activities that involve all major muscle groups on 2 or more days per week.",
    "For beginners, it's best to start with low-intensity exercises and gradually increase duration and intensity. Try walking for 30 minutes daily and slowly build up from there. Choosing activities you enjoy will make it easier to maintain consistency.",
    "The appropriate exercise frequency depends on your health status and fitness goals. For general health objectives, 3-5 sessions of 30-60 minutes of moderate-intensity exercise per week is a reasonable schedule. Remember to allow your body time to recover and avoid overtraining.",
    "Based on your BMI and exercise habits, I recommend incorporating some strength training into your routine. This not only helps burn more calories but also builds muscle strength and increases metabolism. Adding 2-3 strength training sessions per week, combined with your existing cardio workouts, would provide better results.",
    "Proper rest and recovery are crucial for exercise effectiveness. Ensure you get 7-8 hours of quality sleep each night, maintain adequate hydration, and allow muscles 48 hours to recover after intense training. Nutritional supplementation is also key, especially protein intake.",
    "A healthy diet should include various nutrients. Consume some carbohydrates before exercise for energy, and protein within 30 minutes after exercise to aid muscle recovery. In your daily diet, incorporate plenty of vegetables, fruits, whole grains, and quality proteins while reducing processed foods and sugar intake.",
];

/// Semantic category of a canned reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCategory {
    General,
    Beginner,
    Frequency,
    Planning,
    Recovery,
    Nutrition,
}

impl ResponseCategory {
    pub const ALL: [ResponseCategory; 6] = [
        ResponseCategory::General,
        ResponseCategory::Beginner,
        ResponseCategory::Frequency,
        ResponseCategory::Planning,
        ResponseCategory::Recovery,
        ResponseCategory::Nutrition,
    ];

    /// Position of this category's reply in [`RESPONSE_CATALOG`].
    pub const fn catalog_index(self) -> usize {
        match self {
            ResponseCategory::General => 0,
            ResponseCategory::Beginner => 1,
            ResponseCategory::Frequency => 2,
            ResponseCategory::Planning => 3,
            ResponseCategory::Recovery => 4,
            ResponseCategory::Nutrition => 5,
        }
    }

    pub const fn reply(self) -> &'static str {
        RESPONSE_CATALOG[self.catalog_index()]
    }

    pub const fn label(self) -> &'static str {
        match self {
            ResponseCategory::General => "general",
            ResponseCategory::Beginner => "beginner",
            ResponseCategory::Frequency => "frequency",
            ResponseCategory::Planning => "planning",
            ResponseCategory::Recovery => "recovery",
            ResponseCategory::Nutrition => "nutrition",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_owns_a_distinct_slot() {
        let mut seen = [false; RESPONSE_CATALOG.len()];
        for category in ResponseCategory::ALL {
            let idx = category.catalog_index();
            assert!(!seen[idx], "slot {} claimed twice", idx);
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn catalog_order_is_fixed() {
        assert!(ResponseCategory::General.reply().starts_with("Exercise can help"));
        assert!(ResponseCategory::Beginner.reply().starts_with("For beginners"));
        assert!(ResponseCategory::Frequency.reply().starts_with("The appropriate exercise frequency"));
        assert!(ResponseCategory::Planning.reply().starts_with("Based on your BMI"));
        assert!(ResponseCategory::Recovery.reply().starts_with("Proper rest and recovery"));
        assert!(ResponseCategory::Nutrition.reply().starts_with("A healthy diet"));
    }

    #[test]
    fn greeting_is_not_a_catalog_entry() {
        assert!(!RESPONSE_CATALOG.contains(&GREETING));
    }
}
