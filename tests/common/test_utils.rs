use axum::Router;
use faqbot_rust::{
    config::ResponseEntry,
    dataset::TrainingExample,
    engine::Engine,
    responses::ResponseTable,
    server,
};
use std::sync::Arc;

pub const DIABETES_ANSWER: &str = "Diabetes is a chronic condition that affects blood sugar.";
pub const ASTHMA_ANSWER: &str = "Asthma is a chronic condition that affects the airways.";

fn example(question: &str, category: &str) -> TrainingExample {
    TrainingExample {
        question: question.to_string(),
        category: category.to_string(),
    }
}

/// A small separable training set. The "greeting" category deliberately has
/// no response table entry so fallback behavior can be exercised.
pub fn sample_examples() -> Vec<TrainingExample> {
    vec![
        example("What is diabetes?", "diabetes"),
        example("How is diabetes treated?", "diabetes"),
        example("What are the symptoms of diabetes?", "diabetes"),
        example("Can diabetes be prevented?", "diabetes"),
        example("What is asthma?", "asthma"),
        example("What triggers asthma?", "asthma"),
        example("Why does asthma cause wheezing?", "asthma"),
        example("How do inhalers treat asthma?", "asthma"),
        example("hello friend", "greeting"),
        example("good morning sunshine", "greeting"),
        example("hello good evening", "greeting"),
        example("greetings friend", "greeting"),
    ]
}

pub fn sample_table() -> ResponseTable {
    ResponseTable::new(&[
        ResponseEntry {
            category: "diabetes".to_string(),
            text: DIABETES_ANSWER.to_string(),
        },
        ResponseEntry {
            category: "asthma".to_string(),
            text: ASTHMA_ANSWER.to_string(),
        },
    ])
    .unwrap()
}

pub fn sample_engine() -> Engine {
    Engine::fit(&sample_examples(), sample_table()).unwrap()
}

pub fn test_app() -> Router {
    server::app(Arc::new(sample_engine()))
}
