use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default reward per correct quiz answer
pub const DEFAULT_POINTS_PER_CORRECT: u32 = 33;

/// A single-completion task with a fixed one-time point reward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Quest {
    /// Unique id within the catalog
    pub id: String,

    pub title: String,

    pub description: String,

    /// Fixed points awarded exactly once on completion
    pub points: u32,

    /// How many units of the tracked action the quest asks for
    pub target: u32,

    /// Display unit for the target (e.g. "Meals", "Days")
    pub unit: String,
}

/// Read-only quest catalog supplied at startup
///
/// Point values are trusted input; the catalog is never validated beyond
/// structural shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QuestCatalog {
    quests: Vec<Quest>,
}

impl QuestCatalog {
    pub fn new(quests: Vec<Quest>) -> Self {
        Self { quests }
    }

    /// The stock catalog shipped with the app
    pub fn standard() -> Self {
        Self::new(vec![
            Quest {
                id: "q1".to_string(),
                title: "Meatless Monday".to_string(),
                description: "Eat only plant-based meals today".to_string(),
                points: 30,
                target: 3,
                unit: "Meals".to_string(),
            },
            Quest {
                id: "q2".to_string(),
                title: "Commute by Bike".to_string(),
                description: "Cycle to work or school".to_string(),
                points: 50,
                target: 1,
                unit: "Ride".to_string(),
            },
            Quest {
                id: "w1".to_string(),
                title: "Zero Plastic Week".to_string(),
                description: "Avoid all single-use plastics for 7 days".to_string(),
                points: 150,
                target: 7,
                unit: "Days".to_string(),
            },
        ])
    }

    pub fn get(&self, quest_id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == quest_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter()
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }
}

/// Static answer key a quiz session is scored against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QuizKey {
    /// Correct option index per question
    answers: Vec<u32>,

    /// Reward per correct answer, settled when the quiz finishes
    points_per_correct: u32,
}

impl QuizKey {
    pub fn new(answers: Vec<u32>) -> Self {
        Self {
            answers,
            points_per_correct: DEFAULT_POINTS_PER_CORRECT,
        }
    }

    pub fn with_points_per_correct(mut self, points: u32) -> Self {
        self.points_per_correct = points;
        self
    }

    /// The stock weekly quiz key
    pub fn standard() -> Self {
        Self::new(vec![1, 0, 2])
    }

    pub fn answer_for(&self, question_index: usize) -> Option<u32> {
        self.answers.get(question_index).copied()
    }

    pub fn points_per_correct(&self) -> u32 {
        self.points_per_correct
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// An educational article shown in the learn tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Article {
    pub id: String,
    pub category: String,
    pub title: String,
    pub author: String,
    pub read_time: String,
}

/// A short educational video clip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub duration: String,
}

/// Read-only educational content lists
///
/// The engine hands these out to presentation untouched; nothing in here
/// enters any computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContentLibrary {
    articles: Vec<Article>,
    videos: Vec<Video>,
}

impl ContentLibrary {
    pub fn new(articles: Vec<Article>, videos: Vec<Video>) -> Self {
        Self { articles, videos }
    }

    pub fn standard() -> Self {
        Self::new(
            vec![
                Article {
                    id: "a1".to_string(),
                    category: "CONSERVATION".to_string(),
                    title: "Preserving the Amazon: A Global Imperative".to_string(),
                    author: "Elena Vance".to_string(),
                    read_time: "6 min read".to_string(),
                },
                Article {
                    id: "a2".to_string(),
                    category: "RENEWABLE ENERGY".to_string(),
                    title: "The Unstoppable Rise of Solar Power".to_string(),
                    author: "Marcus Thorne".to_string(),
                    read_time: "4 min read".to_string(),
                },
            ],
            vec![
                Video {
                    id: "v1".to_string(),
                    title: "Quick Guide to Home Composting".to_string(),
                    duration: "0:45".to_string(),
                },
                Video {
                    id: "v2".to_string(),
                    title: "Recycling: Common Myths Busted".to_string(),
                    duration: "1:12".to_string(),
                },
            ],
        )
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }
}
