/// A coaching reply plus follow-up suggestions for the chat screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    pub reply: String,
    pub suggestions: Vec<String>,
}

/// The recommendation collaborator. The core flow only ever sees this
/// trait; the canned implementation below is the sole one shipped.
pub trait Advisor {
    fn advise(&self, message: &str) -> Advice;
}

/// Keyword-routed fixed templates, standing in for a real coaching
/// backend. Case-insensitive, total over any input.
#[derive(Debug, Default)]
pub struct CannedAdvisor;

impl CannedAdvisor {
    pub fn new() -> Self {
        Self
    }

    /// Opening message for the chat screen.
    pub fn greeting(&self) -> Advice {
        Advice {
            reply: "Hi! I've analyzed your 3-week progress and I'm impressed! You've gained \
                    4.9% muscle mass and lost 12.2% body fat. Based on your performance, I can \
                    help optimize your workout plan. What would you like to focus on?"
                .to_string(),
            suggestions: vec![
                "Increase muscle building intensity".to_string(),
                "Add more cardio for fat loss".to_string(),
                "Focus on strength training".to_string(),
            ],
        }
    }
}

impl Advisor for CannedAdvisor {
    fn advise(&self, message: &str) -> Advice {
        let lower = message.to_lowercase();

        if lower.contains("muscle") || lower.contains("build") {
            Advice {
                reply: "Great choice! Based on your current progress, I recommend increasing \
                        your training intensity: add progressive overload, include isolation \
                        exercises for lagging muscle groups, and extend rest periods to 90-120 \
                        seconds for strength gains."
                    .to_string(),
                suggestions: vec![
                    "Yes, update my plan".to_string(),
                    "Show me the new exercises".to_string(),
                    "What about nutrition?".to_string(),
                ],
            }
        } else if lower.contains("fat") || lower.contains("lose") {
            Advice {
                reply: "Excellent! Your fat loss progress is already impressive. Let's \
                        accelerate it further with HIIT sessions and metabolic circuits for \
                        25-30% faster fat loss."
                    .to_string(),
                suggestions: vec![
                    "Add HIIT to my plan".to_string(),
                    "Show me metabolic circuits".to_string(),
                    "Adjust my nutrition".to_string(),
                ],
            }
        } else if lower.contains("strength") {
            Advice {
                reply: "Perfect! Let's focus on maximizing your strength gains with heavy \
                        compound lifts and longer recovery, targeting a 20-25% strength \
                        increase in 4 weeks."
                    .to_string(),
                suggestions: vec![
                    "Yes, make me stronger".to_string(),
                    "Show me powerlifting techniques".to_string(),
                    "What about safety?".to_string(),
                ],
            }
        } else if lower.contains("bored") || lower.contains("variety") {
            Advice {
                reply: "I understand! Variety keeps workouts exciting and prevents plateaus. \
                        Let's rotate in new movements that target your muscles from different \
                        angles."
                    .to_string(),
                suggestions: vec![
                    "Show me new exercises".to_string(),
                    "Add functional training".to_string(),
                    "Try different styles".to_string(),
                ],
            }
        } else {
            Advice {
                reply: "I understand your concern! Based on your excellent progress so far \
                        (4.9% muscle gain!), your current plan is working well. Here are some \
                        general recommendations to keep improving."
                    .to_string(),
                suggestions: vec![
                    "Improve my recovery".to_string(),
                    "Track nutrition better".to_string(),
                    "Increase training intensity".to_string(),
                    "Add more variety".to_string(),
                ],
            }
        }
    }
}
