use crate::model::tone::Tone;

pub const INTERPRETATION_HEADER: &str = "1) Psychological Interpretation:";
pub const STORY_MARKER: &str = "2) Cinematic Story:";

pub const NEUTRAL_TONE_LINE: &str = "Use a neutral, cinematic tone.";
pub const SAME_TONE_LINE: &str = "Maintain the same tone.";

/// Builds the prompts sent to the text model.
/// Only formats text: callers validate input before building.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build_initial(dream_text: &str, tone: Option<Tone>) -> String {
        let mut prompt = String::new();

        push_interpreter_role(&mut prompt);
        push_output_layout(&mut prompt);

        match tone {
            Some(tone) => prompt.push_str(&format!("Preferred storytelling tone: {tone}.")),
            None => prompt.push_str(NEUTRAL_TONE_LINE),
        }
        prompt.push_str("\n\n");

        prompt.push_str("Dream:\n");
        push_quoted(&mut prompt, dream_text);

        prompt
    }

    pub fn build_continue(story: &str, tone: Option<Tone>) -> String {
        let mut prompt = String::from("Continue this story in 1–2 paragraphs. ");

        match tone {
            Some(tone) => prompt.push_str(&format!("Maintain tone: {tone}.")),
            None => prompt.push_str(SAME_TONE_LINE),
        }

        prompt.push_str("\n\nStory so far:\n");
        push_quoted(&mut prompt, story);

        prompt
    }

    /// `tone` is never optional here; Restyle falls back to
    /// [`crate::model::tone::DEFAULT_RESTYLE_TONE`] before calling.
    pub fn build_restyle(story: &str, tone: Tone) -> String {
        let mut prompt = format!(
            "Rewrite the following story in a {tone} tone while preserving its plot:\n\n"
        );
        push_quoted(&mut prompt, story);
        prompt
    }
}

fn push_interpreter_role(prompt: &mut String) {
    prompt.push_str(
        "You are DreamWalker — a legendary interpreter of dreams.\n\
         1. Analyze the dream symbolically and psychologically.\n\
         2. Then write a 2–3 paragraph cinematic story inspired by it.\n\n",
    );
}

fn push_output_layout(prompt: &mut String) {
    prompt.push_str("OUTPUT:\n");
    prompt.push_str(INTERPRETATION_HEADER);
    prompt.push_str("\n- Emotions:\n- Symbols:\n- Meaning:\n");
    prompt.push_str(STORY_MARKER);
    prompt.push_str("\n[Story here]\n\n");
}

fn push_quoted(prompt: &mut String, text: &str) {
    prompt.push_str("\"\"\"");
    prompt.push_str(text);
    prompt.push_str("\"\"\"");
}
