use crate::engine::llm_client::TextGenerator;
use crate::engine::prompt_builder::PromptBuilder;
use crate::engine::response_parser::split_response;
use crate::error::{GenerationError, ValidationError};
use crate::model::session::SessionResult;
use crate::model::tone::{Tone, DEFAULT_RESTYLE_TONE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Generate {
        dream_text: String,
        tone: Option<Tone>,
    },
    Continue {
        tone: Option<Tone>,
    },
    Restyle {
        tone: Option<Tone>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Generate,
    Continue,
    Restyle,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Generate { .. } => ActionKind::Generate,
            Action::Continue { .. } => ActionKind::Continue,
            Action::Restyle { .. } => ActionKind::Restyle,
        }
    }
}

impl ActionKind {
    pub fn progress_text(&self) -> &'static str {
        match self {
            ActionKind::Generate => "Weaving your dream... ✨",
            ActionKind::Continue => "Continuing your dream... 🪄",
            ActionKind::Restyle => "Restyling your story 🎨...",
        }
    }
}

/// Something the user should be told after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Warning(ValidationError),
    Error(GenerationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub session: SessionResult,
    pub notice: Option<Notice>,
}

impl ActionOutcome {
    fn updated(session: SessionResult) -> Self {
        Self {
            session,
            notice: None,
        }
    }

    fn rejected(session: SessionResult, err: ValidationError) -> Self {
        tracing::warn!("action rejected: {err}");
        Self {
            session,
            notice: Some(Notice::Warning(err)),
        }
    }

    fn failed(session: SessionResult, err: GenerationError) -> Self {
        tracing::error!("generation failed: {err}");
        Self {
            session,
            notice: Some(Notice::Error(err)),
        }
    }
}

/// Runs one user action against the session and hands the session back.
///
/// Validation failures and generation errors leave the session untouched
/// and are reported through [`ActionOutcome::notice`].
pub fn apply_action(
    session: SessionResult,
    action: Action,
    generator: &dyn TextGenerator,
) -> ActionOutcome {
    match action {
        Action::Generate { dream_text, tone } => generate(session, &dream_text, tone, generator),
        Action::Continue { tone } => continue_story(session, tone, generator),
        Action::Restyle { tone } => restyle(session, tone, generator),
    }
}

fn generate(
    session: SessionResult,
    dream_text: &str,
    tone: Option<Tone>,
    generator: &dyn TextGenerator,
) -> ActionOutcome {
    let dream_text = dream_text.trim();
    if dream_text.is_empty() {
        return ActionOutcome::rejected(session, ValidationError::EmptyDream);
    }

    tracing::info!(dream_len = dream_text.len(), tone = ?tone, "generating interpretation and story");

    let raw = match generator.generate(&PromptBuilder::build_initial(dream_text, tone)) {
        Ok(raw) => raw,
        Err(e) => return ActionOutcome::failed(session, e),
    };

    let parsed = split_response(&raw);
    if parsed.story.is_empty() {
        tracing::warn!("response had no story section, showing it unparsed");
    }

    ActionOutcome::updated(SessionResult {
        interpretation: parsed.interpretation,
        story: parsed.story,
    })
}

fn continue_story(
    session: SessionResult,
    tone: Option<Tone>,
    generator: &dyn TextGenerator,
) -> ActionOutcome {
    if !session.has_story() {
        return ActionOutcome::rejected(session, ValidationError::MissingStory);
    }

    tracing::info!(story_len = session.story.len(), tone = ?tone, "continuing story");

    match generator.generate(&PromptBuilder::build_continue(&session.story, tone)) {
        Ok(extra) => {
            let story = format!("{}\n\n{}", session.story, extra).trim().to_string();
            ActionOutcome::updated(SessionResult { story, ..session })
        }
        Err(e) => ActionOutcome::failed(session, e),
    }
}

fn restyle(
    session: SessionResult,
    tone: Option<Tone>,
    generator: &dyn TextGenerator,
) -> ActionOutcome {
    if !session.has_story() {
        return ActionOutcome::rejected(session, ValidationError::MissingStory);
    }

    let tone = tone.unwrap_or(DEFAULT_RESTYLE_TONE);
    tracing::info!(story_len = session.story.len(), %tone, "restyling story");

    match generator.generate(&PromptBuilder::build_restyle(&session.story, tone)) {
        Ok(restyled) => ActionOutcome::updated(SessionResult {
            story: restyled.trim().to_string(),
            ..session
        }),
        Err(e) => ActionOutcome::failed(session, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::response_parser::PARSE_FALLBACK_NOTICE;
    use std::cell::RefCell;

    /// Replies with canned results and remembers every prompt.
    struct FakeGenerator {
        reply: Result<String, GenerationError>,
        prompts: RefCell<Vec<String>>,
    }

    impl FakeGenerator {
        fn ok(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                prompts: RefCell::new(Vec::new()),
            }
        }

        fn failing(err: GenerationError) -> Self {
            Self {
                reply: Err(err),
                prompts: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.prompts.borrow().len()
        }

        fn last_prompt(&self) -> String {
            self.prompts.borrow().last().cloned().unwrap_or_default()
        }
    }

    impl TextGenerator for FakeGenerator {
        fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.reply.clone()
        }
    }

    fn with_story(story: &str) -> SessionResult {
        SessionResult {
            interpretation: "Emotions: awe".into(),
            story: story.into(),
        }
    }

    #[test]
    fn generate_rejects_blank_dream_without_calling() {
        let fake = FakeGenerator::ok("unused");
        let before = with_story("old");

        let out = apply_action(
            before.clone(),
            Action::Generate {
                dream_text: " \n\t ".into(),
                tone: None,
            },
            &fake,
        );

        assert_eq!(fake.calls(), 0);
        assert_eq!(out.session, before);
        assert_eq!(out.notice, Some(Notice::Warning(ValidationError::EmptyDream)));
    }

    #[test]
    fn generate_splits_response() {
        let fake = FakeGenerator::ok(
            "1) Psychological Interpretation:\nEmotions: freedom\n2) Cinematic Story:\nThe city gleamed below her.",
        );

        let out = apply_action(
            SessionResult::default(),
            Action::Generate {
                dream_text: "  I was flying over a city made of glass.  ".into(),
                tone: Some(Tone::Poetic),
            },
            &fake,
        );

        let prompt = fake.last_prompt();
        assert!(prompt.contains("\"\"\"I was flying over a city made of glass.\"\"\""));
        assert!(prompt.contains("Poetic"));
        assert_eq!(out.notice, None);
        assert_eq!(out.session.interpretation, "Emotions: freedom");
        assert_eq!(out.session.story, "The city gleamed below her.");
    }

    #[test]
    fn generate_without_marker_uses_fallback() {
        let fake = FakeGenerator::ok("I cannot analyze this.");

        let out = apply_action(
            with_story("old story"),
            Action::Generate {
                dream_text: "a dream".into(),
                tone: None,
            },
            &fake,
        );

        assert!(out.session.interpretation.starts_with(PARSE_FALLBACK_NOTICE));
        assert!(out.session.interpretation.contains("I cannot analyze this."));
        assert_eq!(out.session.story, "");
        assert_eq!(out.notice, None);
    }

    #[test]
    fn generate_error_keeps_session() {
        let fake = FakeGenerator::failing(GenerationError::Transport("offline".into()));
        let before = with_story("old");

        let out = apply_action(
            before.clone(),
            Action::Generate {
                dream_text: "a dream".into(),
                tone: None,
            },
            &fake,
        );

        assert_eq!(out.session, before);
        assert_eq!(
            out.notice,
            Some(Notice::Error(GenerationError::Transport("offline".into())))
        );
    }

    #[test]
    fn continue_and_restyle_need_a_story() {
        for action in [Action::Continue { tone: None }, Action::Restyle { tone: None }] {
            let fake = FakeGenerator::ok("unused");
            let before = SessionResult {
                interpretation: "kept".into(),
                story: String::new(),
            };

            let out = apply_action(before.clone(), action, &fake);

            assert_eq!(fake.calls(), 0);
            assert_eq!(out.session, before);
            assert_eq!(
                out.notice,
                Some(Notice::Warning(ValidationError::MissingStory))
            );
        }
    }

    #[test]
    fn continue_appends_with_blank_line() {
        let fake = FakeGenerator::ok("  She landed softly.\n");

        let out = apply_action(
            with_story("The city gleamed."),
            Action::Continue {
                tone: Some(Tone::Hopeful),
            },
            &fake,
        );

        assert!(fake.last_prompt().contains("Maintain tone: Hopeful."));
        assert_eq!(out.session.story, "The city gleamed.\n\n  She landed softly.");
        assert_eq!(out.session.interpretation, "Emotions: awe");
    }

    #[test]
    fn continue_error_keeps_story() {
        let fake = FakeGenerator::failing(GenerationError::Unauthorized { status: 401 });
        let before = with_story("The city gleamed.");

        let out = apply_action(before.clone(), Action::Continue { tone: None }, &fake);

        assert_eq!(out.session, before);
        assert!(matches!(out.notice, Some(Notice::Error(_))));
    }

    #[test]
    fn restyle_replaces_story_and_defaults_to_poetic() {
        let fake = FakeGenerator::ok("\nGlass sang beneath her wings.\n");

        let out = apply_action(
            with_story("The city gleamed."),
            Action::Restyle { tone: None },
            &fake,
        );

        assert!(fake.last_prompt().contains("in a Poetic tone"));
        assert_eq!(out.session.story, "Glass sang beneath her wings.");
        assert_eq!(out.session.interpretation, "Emotions: awe");
    }

    #[test]
    fn restyle_uses_selected_tone() {
        let fake = FakeGenerator::ok("Darkness.");

        apply_action(
            with_story("The city gleamed."),
            Action::Restyle {
                tone: Some(Tone::Dark),
            },
            &fake,
        );

        assert!(fake.last_prompt().contains("in a Dark tone"));
    }
}
