//! Swipe session state: one candidate queue from load to exhaustion.
//!
//! [`SwipeSession`] is the plain state machine behind the home swiper.
//! Candidates are presented strictly in fetch order and a gesture always
//! advances the cursor exactly once, whatever the network does afterwards —
//! a swipe is honored locally the instant it happens. The component in
//! [`crate::swiper`] owns the async side (loading, submission, timers).

use api::{MatchCandidate, SwipeRequest, SwipeResponse};

/// Where a swipe session currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwipePhase {
    Loading,
    Ready,
    Exhausted,
    Error(String),
}

/// A swipe resolved against the in-memory candidate, ready to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwipeSubmission {
    pub is_renter: bool,
    pub resource_id: i64,
    pub target_id: i64,
    pub is_right: bool,
}

impl SwipeSubmission {
    pub fn request(&self) -> SwipeRequest {
        SwipeRequest {
            target_id: self.target_id,
            is_right: self.is_right,
        }
    }
}

const LOAD_ERROR_FALLBACK: &str = "Could not load matches.";

#[derive(Debug, Clone, PartialEq)]
pub struct SwipeSession {
    queue: Vec<MatchCandidate>,
    cursor: usize,
    loading: bool,
    error: Option<String>,
    /// Latches after the recommendations fallback has been shown once;
    /// the offer never comes back, even if recommendations also run out.
    shown_recommendations: bool,
    /// Counterpart name while the match popup is up.
    celebration: Option<String>,
    confetti: bool,
}

impl Default for SwipeSession {
    fn default() -> Self {
        Self {
            queue: Vec::new(),
            cursor: 0,
            loading: true,
            error: None,
            shown_recommendations: false,
            celebration: None,
            confetti: false,
        }
    }
}

impl SwipeSession {
    pub fn phase(&self) -> SwipePhase {
        if let Some(message) = &self.error {
            return SwipePhase::Error(message.clone());
        }
        if self.loading {
            return SwipePhase::Loading;
        }
        if self.cursor >= self.queue.len() {
            return SwipePhase::Exhausted;
        }
        SwipePhase::Ready
    }

    /// The candidate on top of the stack.
    pub fn current(&self) -> Option<&MatchCandidate> {
        self.queue.get(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn queue_is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn celebration(&self) -> Option<&str> {
        self.celebration.as_deref()
    }

    pub fn confetti(&self) -> bool {
        self.confetti
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn queue_loaded(&mut self, queue: Vec<MatchCandidate>) {
        self.queue = queue;
        self.cursor = 0;
        self.loading = false;
        self.error = None;
    }

    /// There is no automatic recovery from a failed load; the screen is
    /// remounted to retry.
    pub fn load_failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(if message.trim().is_empty() {
            LOAD_ERROR_FALLBACK.to_string()
        } else {
            message
        });
    }

    /// Renters get one fallback queue of recommendations per session.
    pub fn can_offer_recommendations(&self, is_renter: bool) -> bool {
        is_renter && !self.shown_recommendations && self.phase() == SwipePhase::Exhausted
    }

    pub fn recommendations_loaded(&mut self, queue: Vec<MatchCandidate>) {
        self.queue = queue;
        self.cursor = 0;
        self.loading = false;
        self.error = None;
        self.shown_recommendations = true;
    }

    /// Advance past the candidate at `index` and resolve the submission for
    /// it. The cursor moves exactly once per gesture whether or not a
    /// submission can be built: a missing resource id or a malformed
    /// candidate costs the server record, never the gesture.
    pub fn record_gesture(
        &mut self,
        index: usize,
        is_right: bool,
        is_renter: bool,
        resource_id: Option<i64>,
    ) -> Option<SwipeSubmission> {
        self.cursor += 1;

        let resource_id = resource_id?;
        let candidate = self.queue.get(index)?;
        let target_id = if is_renter {
            (candidate.id != 0).then_some(candidate.id)
        } else {
            candidate.renter_id.filter(|id| *id != 0)
        }?;

        Some(SwipeSubmission {
            is_renter,
            resource_id,
            target_id,
            is_right,
        })
    }

    /// React to the server's verdict on a submitted swipe: a mutual match
    /// raises the celebration popup with the counterpart's name.
    pub fn apply_swipe_response(&mut self, index: usize, response: &SwipeResponse, is_renter: bool) {
        if !response.matched {
            return;
        }
        let name = self.queue.get(index).and_then(|candidate| {
            if is_renter {
                candidate.lister_name.clone()
            } else {
                candidate.first_name.clone()
            }
        });
        let fallback = if is_renter { "a lister" } else { "a renter" };
        self.celebration = Some(name.unwrap_or_else(|| fallback.to_string()));
        self.confetti = true;
    }

    pub fn dismiss_celebration(&mut self) {
        self.celebration = None;
    }

    pub fn clear_confetti(&mut self) {
        self.confetti = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_candidate(id: i64, lister: &str) -> MatchCandidate {
        MatchCandidate {
            id,
            lister_name: Some(lister.to_string()),
            ..MatchCandidate::default()
        }
    }

    fn renter_candidate(renter_id: i64, first_name: &str) -> MatchCandidate {
        MatchCandidate {
            id: 0,
            renter_id: Some(renter_id),
            first_name: Some(first_name.to_string()),
            ..MatchCandidate::default()
        }
    }

    fn ready_session(queue: Vec<MatchCandidate>) -> SwipeSession {
        let mut session = SwipeSession::default();
        session.queue_loaded(queue);
        session
    }

    #[test]
    fn test_left_left_right_exhausts_with_one_right() {
        let queue = vec![
            listing_candidate(1, "Ana"),
            listing_candidate(2, "Ben"),
            listing_candidate(3, "Kai"),
        ];
        let mut session = ready_session(queue);

        let mut submissions = Vec::new();
        for is_right in [false, false, true] {
            let index = session.cursor();
            submissions.extend(session.record_gesture(index, is_right, true, Some(42)));
        }

        assert_eq!(session.cursor(), 3);
        assert_eq!(session.phase(), SwipePhase::Exhausted);
        assert_eq!(submissions.len(), 3);
        assert_eq!(submissions.iter().filter(|s| s.is_right).count(), 1);
        assert_eq!(submissions[2].target_id, 3);
    }

    #[test]
    fn test_lister_swipe_targets_renter_id() {
        let mut session = ready_session(vec![renter_candidate(55, "Sam")]);

        let submission = session.record_gesture(0, true, false, Some(7)).unwrap();
        assert_eq!(submission.target_id, 55);
        assert!(!submission.is_renter);
        assert_eq!(submission.resource_id, 7);
        assert_eq!(api::matching::swipe_path(false, 7), "/swipes/listing/7");
    }

    #[test]
    fn test_cursor_advances_even_without_submission() {
        // Lister viewing a candidate with no renter_id: malformed row.
        let mut session = ready_session(vec![MatchCandidate::default()]);

        assert!(session.record_gesture(0, true, false, Some(7)).is_none());
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.phase(), SwipePhase::Exhausted);
    }

    #[test]
    fn test_cursor_advances_without_resource_id() {
        let mut session = ready_session(vec![listing_candidate(1, "Ana")]);

        assert!(session.record_gesture(0, true, true, None).is_none());
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn test_match_resolves_lister_name_for_renter_viewer() {
        let mut session = ready_session(vec![listing_candidate(1, "Ana")]);
        session.record_gesture(0, true, true, Some(42));

        session.apply_swipe_response(0, &SwipeResponse { matched: true }, true);
        assert_eq!(session.celebration(), Some("Ana"));
        assert!(session.confetti());

        session.dismiss_celebration();
        assert_eq!(session.celebration(), None);
    }

    #[test]
    fn test_match_resolves_first_name_for_lister_viewer() {
        let mut session = ready_session(vec![renter_candidate(55, "Sam")]);
        session.record_gesture(0, true, false, Some(7));

        session.apply_swipe_response(0, &SwipeResponse { matched: true }, false);
        assert_eq!(session.celebration(), Some("Sam"));
    }

    #[test]
    fn test_match_falls_back_to_generic_name() {
        let mut session = ready_session(vec![MatchCandidate {
            id: 1,
            ..MatchCandidate::default()
        }]);
        session.apply_swipe_response(0, &SwipeResponse { matched: true }, true);
        assert_eq!(session.celebration(), Some("a lister"));
    }

    #[test]
    fn test_unmatched_response_changes_nothing() {
        let mut session = ready_session(vec![listing_candidate(1, "Ana")]);
        session.apply_swipe_response(0, &SwipeResponse { matched: false }, true);
        assert_eq!(session.celebration(), None);
        assert!(!session.confetti());
    }

    #[test]
    fn test_load_failure_keeps_message() {
        let mut session = SwipeSession::default();
        session.load_failed("listing 9 not found".to_string());
        assert_eq!(
            session.phase(),
            SwipePhase::Error("listing 9 not found".to_string())
        );
    }

    #[test]
    fn test_load_failure_empty_message_uses_fallback() {
        let mut session = SwipeSession::default();
        session.load_failed(String::new());
        assert_eq!(
            session.phase(),
            SwipePhase::Error("Could not load matches.".to_string())
        );
    }

    #[test]
    fn test_queue_loaded_clears_error_and_resets_cursor() {
        let mut session = SwipeSession::default();
        session.load_failed("boom".to_string());

        session.begin_load();
        session.queue_loaded(vec![listing_candidate(1, "Ana")]);
        assert_eq!(session.phase(), SwipePhase::Ready);
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_recommendations_offered_once_to_renters_only() {
        let mut session = ready_session(vec![listing_candidate(1, "Ana")]);
        session.record_gesture(0, false, true, Some(42));
        assert_eq!(session.phase(), SwipePhase::Exhausted);

        assert!(session.can_offer_recommendations(true));
        assert!(!session.can_offer_recommendations(false));

        session.recommendations_loaded(vec![listing_candidate(2, "Ben")]);
        assert_eq!(session.phase(), SwipePhase::Ready);

        session.record_gesture(0, false, true, Some(42));
        assert_eq!(session.phase(), SwipePhase::Exhausted);
        assert!(!session.can_offer_recommendations(true));
    }
}
