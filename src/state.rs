//! View state and its transitions
//!
//! [`ViewState`] is a plain value. Every user interaction and every network
//! completion is an [`Action`]; [`reduce`] turns the current state and an
//! action into the next state plus the [`Effect`]s the event loop must carry
//! out (scheduling the debounce timer, issuing a request). Nothing in this
//! module touches the terminal, the clock, or the network.

use crate::error::TranslateError;
use crate::languages;

/// Everything the translator view displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub source_lang: String,
    pub target_lang: String,
    pub source_text: String,
    pub translated_text: String,
    pub is_loading: bool,
    /// Empty when there is nothing to report
    pub error: String,
    /// Sequence number of the most recently issued request (0 = none yet)
    pub last_request: u64,
    /// Drop completions of requests older than `last_request`
    pub discard_stale: bool,
}

impl ViewState {
    pub fn new(source_lang: impl Into<String>, target_lang: impl Into<String>) -> Self {
        ViewState {
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
            source_text: String::new(),
            translated_text: String::new(),
            is_loading: false,
            error: String::new(),
            last_request: 0,
            discard_stale: false,
        }
    }

    pub fn with_discard_stale(mut self, discard_stale: bool) -> Self {
        self.discard_stale = discard_stale;
        self
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Completions for `seq` are applied unless stale ones are being dropped.
    fn accepts(&self, seq: u64) -> bool {
        !self.discard_stale || seq == self.last_request
    }
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new(languages::DEFAULT_SOURCE, languages::DEFAULT_TARGET)
    }
}

/// One translation call, built when the debounce timer fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub seq: u64,
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl TranslationRequest {
    /// The `langpair` query value, e.g. `pt-br|en`.
    pub fn langpair(&self) -> String {
        format!("{}|{}", self.source_lang, self.target_lang)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetSourceText(String),
    SetSourceLang(String),
    SetTargetLang(String),
    Swap,
    /// The quiet period after the last edit is over
    DebounceElapsed,
    TranslationSucceeded { seq: u64, text: String },
    TranslationFailed { seq: u64, error: TranslateError },
}

impl Action {
    /// Completion action for the outcome of request `seq`.
    pub fn completion(seq: u64, result: Result<String, TranslateError>) -> Self {
        match result {
            Ok(text) => Action::TranslationSucceeded { seq, text },
            Err(error) => Action::TranslationFailed { seq, error },
        }
    }
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Restart the debounce timer, cancelling any pending one
    ScheduleTranslate,
    /// Cancel the pending debounce timer, if any
    CancelTranslate,
    /// Send this request to the translation service
    Request(TranslationRequest),
}

/// Compute the state that follows `action`.
pub fn reduce(state: &ViewState, action: Action) -> (ViewState, Vec<Effect>) {
    let mut next = state.clone();
    let mut effects = Vec::new();

    match action {
        Action::SetSourceText(text) => {
            if text != next.source_text {
                next.source_text = text;
                text_changed(&next, &mut effects);
            }
        }
        Action::SetSourceLang(code) => {
            if languages::is_supported(&code) {
                next.source_lang = code;
            }
        }
        Action::SetTargetLang(code) => {
            if languages::is_supported(&code) {
                next.target_lang = code;
            }
        }
        Action::Swap => {
            std::mem::swap(&mut next.source_lang, &mut next.target_lang);
            std::mem::swap(&mut next.source_text, &mut next.translated_text);
            if next.source_text != state.source_text {
                text_changed(&next, &mut effects);
            }
        }
        Action::DebounceElapsed => {
            if !next.source_text.is_empty() {
                next.is_loading = true;
                next.error.clear();
                next.last_request += 1;
                effects.push(Effect::Request(TranslationRequest {
                    seq: next.last_request,
                    text: next.source_text.clone(),
                    source_lang: next.source_lang.clone(),
                    target_lang: next.target_lang.clone(),
                }));
            }
        }
        Action::TranslationSucceeded { seq, text } => {
            if next.accepts(seq) {
                next.translated_text = text;
                next.is_loading = false;
            }
        }
        Action::TranslationFailed { seq, error } => {
            if next.accepts(seq) {
                next.error = error.user_message();
                next.is_loading = false;
            }
        }
    }

    (next, effects)
}

fn text_changed(state: &ViewState, effects: &mut Vec<Effect>) {
    if state.source_text.is_empty() {
        effects.push(Effect::CancelTranslate);
    } else {
        effects.push(Effect::ScheduleTranslate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: &ViewState, actions: Vec<Action>) -> (ViewState, Vec<Effect>) {
        let mut state = state.clone();
        let mut all = Vec::new();
        for action in actions {
            let (next, effects) = reduce(&state, action);
            state = next;
            all.extend(effects);
        }
        (state, all)
    }

    fn requests(effects: &[Effect]) -> Vec<&TranslationRequest> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Request(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::default();
        assert_eq!(state.source_lang, "pt-br");
        assert_eq!(state.target_lang, "en");
        assert!(state.source_text.is_empty());
        assert!(!state.is_loading);
        assert!(!state.has_error());
    }

    #[test]
    fn test_typing_schedules_debounce() {
        let (state, effects) = reduce(
            &ViewState::default(),
            Action::SetSourceText("a".to_string()),
        );
        assert_eq!(state.source_text, "a");
        assert_eq!(effects, vec![Effect::ScheduleTranslate]);
    }

    #[test]
    fn test_same_text_is_noop() {
        let (state, _) = reduce(
            &ViewState::default(),
            Action::SetSourceText("a".to_string()),
        );
        let (_, effects) = reduce(&state, Action::SetSourceText("a".to_string()));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_clearing_text_cancels_and_keeps_stale_translation() {
        let mut state = ViewState::default();
        state.source_text = "olá".to_string();
        state.translated_text = "hello".to_string();

        let (state, effects) = reduce(&state, Action::SetSourceText(String::new()));
        assert_eq!(effects, vec![Effect::CancelTranslate]);
        assert_eq!(state.translated_text, "hello");
    }

    #[test]
    fn test_empty_text_never_requests() {
        let (state, effects) = reduce(&ViewState::default(), Action::DebounceElapsed);
        assert!(effects.is_empty());
        assert!(!state.is_loading);
        assert_eq!(state.last_request, 0);
    }

    #[test]
    fn test_debounce_elapsed_issues_request() {
        let mut state = ViewState::default();
        state.error = "old error".to_string();
        let (state, effects) = apply(
            &state,
            vec![
                Action::SetSourceText("Olá mundo".to_string()),
                Action::DebounceElapsed,
            ],
        );

        assert!(state.is_loading);
        assert!(!state.has_error());
        let reqs = requests(&effects);
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].text, "Olá mundo");
        assert_eq!(reqs[0].langpair(), "pt-br|en");
        assert_eq!(reqs[0].seq, 1);
    }

    #[test]
    fn test_success_sets_translation() {
        let (state, _) = apply(
            &ViewState::default(),
            vec![
                Action::SetSourceText("Olá".to_string()),
                Action::DebounceElapsed,
                Action::TranslationSucceeded {
                    seq: 1,
                    text: "Hello".to_string(),
                },
            ],
        );
        assert_eq!(state.translated_text, "Hello");
        assert!(!state.is_loading);
        assert!(!state.has_error());
    }

    #[test]
    fn test_failure_keeps_translation() {
        let mut state = ViewState::default();
        state.translated_text = "previous".to_string();
        let (state, _) = apply(
            &state,
            vec![
                Action::SetSourceText("Olá".to_string()),
                Action::DebounceElapsed,
                Action::TranslationFailed {
                    seq: 1,
                    error: TranslateError::Http { status: 500 },
                },
            ],
        );
        assert_eq!(state.translated_text, "previous");
        assert!(state.error.contains("500"));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_swap_exchanges_languages_and_texts() {
        let mut state = ViewState::default();
        state.source_text = "Olá".to_string();
        state.translated_text = "Hello".to_string();

        let (swapped, effects) = reduce(&state, Action::Swap);
        assert_eq!(swapped.source_lang, "en");
        assert_eq!(swapped.target_lang, "pt-br");
        assert_eq!(swapped.source_text, "Hello");
        assert_eq!(swapped.translated_text, "Olá");
        assert_eq!(effects, vec![Effect::ScheduleTranslate]);
        assert!(requests(&effects).is_empty());
    }

    #[test]
    fn test_double_swap_restores_state() {
        let mut state = ViewState::default();
        state.source_text = "bom dia".to_string();
        state.translated_text = "good morning".to_string();

        let (once, _) = reduce(&state, Action::Swap);
        let (twice, _) = reduce(&once, Action::Swap);
        assert_eq!(twice, state);
    }

    #[test]
    fn test_swap_with_equal_texts_schedules_nothing() {
        let mut state = ViewState::default();
        state.source_text = "ok".to_string();
        state.translated_text = "ok".to_string();
        let (_, effects) = reduce(&state, Action::Swap);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_language_change_does_not_schedule() {
        let (state, effects) = reduce(
            &ViewState::default(),
            Action::SetTargetLang("fr".to_string()),
        );
        assert_eq!(state.target_lang, "fr");
        assert!(effects.is_empty());
    }

    #[test]
    fn test_unknown_language_is_ignored() {
        let (state, _) = reduce(
            &ViewState::default(),
            Action::SetSourceLang("klingon".to_string()),
        );
        assert_eq!(state.source_lang, "pt-br");
    }

    #[test]
    fn test_last_write_wins_by_default() {
        let (state, effects) = apply(
            &ViewState::default(),
            vec![
                Action::SetSourceText("um".to_string()),
                Action::DebounceElapsed,
                Action::SetSourceText("dois".to_string()),
                Action::DebounceElapsed,
            ],
        );
        assert_eq!(requests(&effects).len(), 2);

        // Newer request settles first, older one last
        let (state, _) = apply(
            &state,
            vec![
                Action::completion(2, Ok("two".to_string())),
                Action::completion(1, Ok("one".to_string())),
            ],
        );
        assert_eq!(state.translated_text, "one");
    }

    #[test]
    fn test_discard_stale_keeps_latest() {
        let state = ViewState::default().with_discard_stale(true);
        let (state, _) = apply(
            &state,
            vec![
                Action::SetSourceText("um".to_string()),
                Action::DebounceElapsed,
                Action::SetSourceText("dois".to_string()),
                Action::DebounceElapsed,
                Action::completion(2, Ok("two".to_string())),
                Action::completion(1, Ok("one".to_string())),
                Action::completion(1, Err(TranslateError::Http { status: 502 })),
            ],
        );
        assert_eq!(state.translated_text, "two");
        assert!(!state.has_error());
        assert!(!state.is_loading);
    }
}
