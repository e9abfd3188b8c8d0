//! End-to-end demo of the question engine.
//!
//! Run with: `cargo run --example quiz`
//!
//! 1. **Every topic**: one hard problem per topic with fixed seeds, so the
//!    output is deterministic and reproducible.
//!
//! 2. **Versioned test**: a blueprint is planned into template slots, the
//!    slots get ids (as a database would assign them), and two versions are
//!    materialized. Re-running prints identical versions.
//!
//! 3. **Ad-hoc quiz**: a shuffled, unseeded quiz (different every run).

use math_quiz_gen::{
    generate_quiz, generate_seeded, materialize_versions, Difficulty, GeneratedProblem,
    TestBlueprint, Topic,
};

fn print_problem(p: &GeneratedProblem) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{} / {}]  Variant: {}", p.topic, p.difficulty, p.variant);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Q: {}", p.question);
    println!("  A: {}", p.answer);
    println!();
    for line in p.solution.lines() {
        println!("     {line}");
    }
    println!();
}

const BLUEPRINT: &str = r#"{
    "title": "Unit 4 checkpoint",
    "topics": ["fractions", "percentages", "geometry"],
    "difficulty": "medium",
    "num_questions": 5,
    "num_versions": 2
}"#;

fn main() -> math_quiz_gen::Result<()> {
    println!("\n=== ONE HARD PROBLEM PER TOPIC ===\n");
    for (i, topic) in Topic::ALL.into_iter().enumerate() {
        print_problem(&generate_seeded(topic, Difficulty::Hard, 100 + i as u64));
    }

    println!("\n=== VERSIONED TEST ===\n");
    let blueprint = TestBlueprint::from_json(BLUEPRINT)?;
    let slots: Vec<_> = blueprint
        .plan()
        .into_iter()
        .map(|slot| slot.with_template_id(40 + u64::from(slot.order)))
        .collect();
    for set in materialize_versions(&slots, blueprint.num_versions)? {
        println!("  {} (version {})", blueprint.title, set.version_number);
        for q in &set.questions {
            println!("    {}. {}", q.order, q.question_text);
            println!("       answer: {}", q.answer);
        }
        println!();
    }

    println!("\n=== AD-HOC QUIZ ===\n");
    let quiz = generate_quiz(&[Topic::Addition, Topic::Decimals, Topic::Algebra], Difficulty::Easy, 6, None);
    for (i, p) in quiz.iter().enumerate() {
        println!("  {}. {}  ({})", i + 1, p.question, p.answer);
    }
    Ok(())
}
