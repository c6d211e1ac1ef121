//! Quiz orchestration: the per-request generation pipeline.
//!
//! One invocation runs three sequential collaborator calls (candidate nouns,
//! image, meaning) around a local sampling step. All-or-nothing: any failure
//! aborts the pipeline and no partial result is returned.

use crate::ai::{ImageGenerationService, TextCompletionService};
use crate::models::QuizResult;
use crate::{prompts, Error, Result};
use rand::prelude::*;
use std::collections::HashSet;
use tracing::info;

const OPTION_COUNT: usize = 4;
const IMAGE_SIZE: &str = "1024x1024";

const NOUN_LIST_MAX_TOKENS: u32 = 500;
const NOUN_LIST_TEMPERATURE: f32 = 0.7;
const MEANING_MAX_TOKENS: u32 = 10;
const MEANING_TEMPERATURE: f32 = 0.5;

/// Coordinates the chat and image collaborators to build one quiz item.
///
/// Holds no mutable state; one instance is shared across concurrent requests.
pub struct QuizOrchestrator {
    chat: Box<dyn TextCompletionService>,
    image: Box<dyn ImageGenerationService>,
}

impl QuizOrchestrator {
    pub fn new(chat: Box<dyn TextCompletionService>, image: Box<dyn ImageGenerationService>) -> Self {
        Self { chat, image }
    }

    /// Generate one quiz item with entropy-seeded sampling.
    pub async fn generate_quiz(&self) -> Result<QuizResult> {
        self.generate_with_rng(StdRng::from_entropy()).await
    }

    /// Generate one quiz item with a fixed seed. Sampling is deterministic
    /// for a given seed and candidate pool.
    pub async fn generate_quiz_seeded(&self, seed: u64) -> Result<QuizResult> {
        self.generate_with_rng(StdRng::seed_from_u64(seed)).await
    }

    async fn generate_with_rng(&self, mut rng: StdRng) -> Result<QuizResult> {
        let raw = self
            .chat
            .complete(
                prompts::NOUN_LIST_SYSTEM,
                prompts::NOUN_LIST_USER,
                NOUN_LIST_MAX_TOKENS,
                NOUN_LIST_TEMPERATURE,
            )
            .await?;

        let pool: Vec<String> = serde_json::from_str(raw.trim())?;
        info!("Received candidate pool of {} nouns", pool.len());

        let (quiz_options, correct_answer) = sample_options(&pool, &mut rng)?;
        info!("Selected options {:?}, answer {}", quiz_options, correct_answer);

        let image_prompt = prompts::render(prompts::IMAGE_PROMPT, &[("word", &correct_answer)]);
        let image_url = self
            .image
            .generate_image(image_prompt.trim(), IMAGE_SIZE)
            .await?;
        info!("Generated image at {}", image_url);

        let meaning_prompt = prompts::render(prompts::MEANING_USER, &[("word", &correct_answer)]);
        let correct_meaning = self
            .chat
            .complete(
                prompts::MEANING_SYSTEM,
                &meaning_prompt,
                MEANING_MAX_TOKENS,
                MEANING_TEMPERATURE,
            )
            .await?
            .trim()
            .to_string();
        info!("Meaning for {}: {}", correct_answer, correct_meaning);

        Ok(QuizResult {
            quiz_options,
            correct_answer,
            correct_meaning,
            image_url,
        })
    }
}

/// Draw 4 distinct options uniformly without replacement, then one correct
/// answer uniformly from those 4. Pools with fewer than 4 distinct entries
/// are rejected rather than producing a short option list.
fn sample_options(pool: &[String], rng: &mut impl Rng) -> Result<(Vec<String>, String)> {
    let mut seen = HashSet::new();
    let distinct: Vec<&String> = pool.iter().filter(|word| seen.insert(word.as_str())).collect();

    if distinct.len() < OPTION_COUNT {
        return Err(Error::Invariant(format!(
            "Candidate pool has {} distinct entries, need at least {}",
            distinct.len(),
            OPTION_COUNT
        )));
    }

    let mut quiz_options: Vec<String> = distinct
        .choose_multiple(rng, OPTION_COUNT)
        .map(|word| (*word).clone())
        .collect();
    quiz_options.shuffle(rng);

    let correct_answer = quiz_options
        .choose(rng)
        .cloned()
        .ok_or_else(|| Error::Invariant("Quiz options unexpectedly empty".to_string()))?;

    Ok((quiz_options, correct_answer))
}
