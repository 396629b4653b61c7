//! Question-driven title generator
//!
//! Static template substitution over four answers (topic, audience,
//! tone, format). Selecting a title with `--start` seeds a draft so
//! the editor can pick it up.

use anyhow::{bail, Result};
use chrono::{Datelike, Utc};

use quill_core::{DraftPatch, SharedStore, Viewer};

use crate::output::Output;

/// How many suggestions one round produces
const SUGGESTION_COUNT: usize = 6;

/// The four answers the generator works from
pub struct Answers {
    pub topic: String,
    pub audience: String,
    pub tone: String,
    pub format: String,
}

/// Fill the title templates with the given answers
pub fn generate(answers: &Answers) -> Vec<String> {
    let Answers {
        topic,
        audience,
        tone,
        format,
    } = answers;
    let year = Utc::now().year();

    let mut titles = vec![
        format!("The Ultimate Guide to {} for {}", topic, audience),
        format!("How to Master {}: A {} Approach", topic, tone),
        format!("{} Secrets Every {} Should Know", topic, audience),
        format!("The Complete {} for {}", format, topic),
        format!("10 Essential {} Tips for {}", topic, audience),
        format!("{} Made Simple: A {} Guide", topic, tone),
        format!("Why {} Matters in {}", topic, year),
        format!("Transform Your {} Knowledge Today", topic),
    ];
    titles.truncate(SUGGESTION_COUNT);
    titles
}

/// Print suggestions and optionally seed a draft from one of them
pub async fn run(
    store: &SharedStore,
    viewer: &Viewer,
    answers: Answers,
    start: bool,
    pick: usize,
    output: &Output,
) -> Result<()> {
    let titles = generate(&answers);

    if output.is_quiet() {
        for title in &titles {
            println!("{}", title);
        }
    } else {
        output.message("Generated titles:");
        for (i, title) in titles.iter().enumerate() {
            output.message(&format!("  [{}] {}", i + 1, title));
        }
    }

    if !start {
        return Ok(());
    }

    if pick == 0 || pick > titles.len() {
        bail!("--pick must be between 1 and {}", titles.len());
    }
    let title = titles[pick - 1].clone();

    let draft_id = store.lock().await.save_draft(DraftPatch {
        title: Some(title.clone()),
        content: Some(String::new()),
        excerpt: Some(String::new()),
        author: Some(viewer.name.clone()),
        author_avatar: Some(viewer.avatar_url.clone()),
        tags: Some(vec![answers.topic]),
        reading_time: Some(0),
        ..Default::default()
    });

    output.success(&format!("Saved draft {} - \"{}\"", draft_id, title));
    output.message(&format!(
        "Start writing with: quill write --title \"{}\"",
        title
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> Answers {
        Answers {
            topic: "Technology".to_string(),
            audience: "Beginners".to_string(),
            tone: "Conversational".to_string(),
            format: "How-to Guide".to_string(),
        }
    }

    #[test]
    fn test_generates_six_titles() {
        let titles = generate(&answers());
        assert_eq!(titles.len(), 6);
        assert_eq!(
            titles[0],
            "The Ultimate Guide to Technology for Beginners"
        );
        assert!(titles.iter().all(|t| t.contains("Technology")));
    }

    #[test]
    fn test_templates_substitute_all_answers() {
        let titles = generate(&answers());
        let joined = titles.join(" | ");
        assert!(joined.contains("Beginners"));
        assert!(joined.contains("Conversational"));
        assert!(joined.contains("How-to Guide"));
    }
}
