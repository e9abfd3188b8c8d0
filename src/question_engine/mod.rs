//! Core question engine: topic generation, slot distribution, and version
//! materialization.
//!
//! ## Module overview
//!
//! | Module         | Purpose |
//! |----------------|---------|
//! | `models`       | Shared types: topics, difficulties, slots, generated problems, requests |
//! | `error`        | Crate error enum and `Result` alias |
//! | `rng`          | Seedable randomness source and draw helpers |
//! | `arithmetic`   | GCD, exact fractions, half-away-from-zero rounding, answer rendering |
//! | `deck`         | 52-card deck used to count card-draw outcomes exactly |
//! | `helpers`      | Shared builder functions used by every topic |
//! | `topics`       | 10 topic generators, one module each |
//! | `generator`    | Dispatch table from `Topic` to generator; seeded and tag-based entry points |
//! | `distributor`  | Round-robin spread of a question count across topics |
//! | `materializer` | `template_id * 1000 + version` seeding and per-version generation |
//! | `blueprint`    | JSON-decodable test configuration |
//! | `quiz`         | Shuffled single-pass quizzes |

pub mod arithmetic;
pub mod blueprint;
pub mod deck;
pub mod distributor;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod materializer;
pub mod models;
pub mod quiz;
pub mod rng;
pub mod topics;

// Re-export the public API surface so callers can use
// `question_engine::materialize` without reaching into sub-modules.
pub use arithmetic::{reduce_fraction, Fraction};
pub use blueprint::TestBlueprint;
pub use distributor::{distribute, DistributionPlan};
pub use error::{Error, Result};
pub use generator::{generate_from_tags, generate_question, generate_seeded, generate_with_rng};
pub use materializer::{materialize, materialize_versions, version_seed};
pub use models::{
    Difficulty, GeneratedProblem, GeneratedQuestion, QuestionRequest, TemplateSlot, Topic,
    VersionSet,
};
pub use quiz::generate_quiz;
pub use rng::QuestionRng;
