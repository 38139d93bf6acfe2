//! Login session state machine.
//!
//! Owns the one piece of shared mutable state in the application: the current
//! [`UserStatus`] and the in-progress PIN buffer. Every other component reads
//! a snapshot; only this module mutates.
//!
//! # Transitions
//!
//! ```text
//! LoggedOut ──sign-in──▶ LoggingIn ──4th digit──▶ VerifyingLogin ──▶ LoggedIn
//!     ▲                      ▲                          │
//!     │                      └──next status read────┐  │ failure
//!     │                                             │  ▼
//!     └───────cancel / sign-out (any state)──── LogInError
//! ```
//!
//! - Entering `LoggingIn` or `LogInError` raises a focus request for the PIN
//!   input; entering any other status clears the PIN buffer.
//! - The fourth digit starts exactly one verification and moves to
//!   `VerifyingLogin`. The session stays responsive while it is pending.
//! - `LogInError` re-arms to `LoggingIn` on the next status observation,
//!   exactly once per error, so the user can immediately retype.
//!
//! # Stale settlements
//!
//! Every verification is stamped with a generation. Cancellation, sign-out,
//! and status-button presses bump the session generation, so a verification
//! that settles after the user has moved on is discarded instead of being
//! applied retroactively.

use std::time::Instant;

use heapless::String;
use rand::Rng;

use crate::config::PIN_LENGTH;
use crate::verify::{InFlight, PinVerifier};

/// Session status driving PIN-entry UI and access gating.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum UserStatus {
    /// Locked; lock screen with clock is showing.
    #[default]
    LoggedOut,
    /// PIN entry is active and accepting digits.
    LoggingIn,
    /// A verification is in flight; input is disabled.
    VerifyingLogin,
    /// Unlocked; the home menu is showing.
    LoggedIn,
    /// The last verification failed; re-arms to `LoggingIn` on observation.
    LogInError,
}

impl UserStatus {
    /// Human-readable label, used by the debug overlay.
    pub const fn label(self) -> &'static str {
        match self {
            Self::LoggedOut => "Logged Out",
            Self::LoggingIn => "Logging In",
            Self::VerifyingLogin => "Verifying Log In",
            Self::LoggedIn => "Logged In",
            Self::LogInError => "Log In Error",
        }
    }
}

/// The session context: status, PIN buffer, and verification bookkeeping.
pub struct Session {
    status: UserStatus,
    pin: String<PIN_LENGTH>,

    /// Set when a transition wants the PIN input focused; consumed by the
    /// render layer via [`take_focus_request`](Self::take_focus_request).
    focus_requested: bool,

    /// True while an entered `LogInError` has not yet re-armed to `LoggingIn`.
    error_armed: bool,

    /// Bumped on every user-driven transition; in-flight verifications whose
    /// stamp no longer matches are discarded on settlement.
    generation: u32,

    in_flight: Option<InFlight>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            status: UserStatus::LoggedOut,
            pin: String::new(),
            focus_requested: false,
            error_armed: false,
            generation: 0,
            in_flight: None,
        }
    }

    /// Observe the current status.
    ///
    /// This is the status-check the error recovery hangs off: observing
    /// `LogInError` returns it once and re-arms the session to `LoggingIn`
    /// so the next observation (and keystroke) sees an input-ready state.
    pub fn status(&mut self) -> UserStatus {
        let observed = self.status;
        if observed == UserStatus::LogInError && self.error_armed {
            self.error_armed = false;
            self.enter(UserStatus::LoggingIn);
        }
        observed
    }

    /// Current status without triggering error recovery.
    #[inline]
    pub const fn peek_status(&self) -> UserStatus { self.status }

    /// Digits entered so far (0 to `PIN_LENGTH` characters).
    #[inline]
    pub fn pin(&self) -> &str { self.pin.as_str() }

    #[inline]
    pub fn pin_len(&self) -> usize { self.pin.len() }

    /// Whether a verification is currently pending.
    #[inline]
    pub const fn verification_pending(&self) -> bool { self.in_flight.is_some() }

    /// Consume the pending focus request, if any.
    pub fn take_focus_request(&mut self) -> bool {
        let requested = self.focus_requested;
        self.focus_requested = false;
        requested
    }

    /// Append a PIN digit. Returns `true` if the digit was accepted.
    ///
    /// Digits are accepted only while the PIN input is armed (`LoggingIn`, or
    /// `LogInError` which recovers first) and the buffer is not full. The
    /// fourth accepted digit takes the buffer, moves to `VerifyingLogin`, and
    /// begins exactly one verification.
    pub fn push_digit<R: Rng>(
        &mut self,
        digit: char,
        verifier: &PinVerifier,
        now: Instant,
        rng: &mut R,
    ) -> bool {
        if !digit.is_ascii_digit() {
            return false;
        }
        match self.status {
            UserStatus::LoggingIn => {}
            UserStatus::LogInError => {
                // Typing counts as observing the error: recover first
                self.error_armed = false;
                self.enter(UserStatus::LoggingIn);
            }
            _ => return false,
        }
        if self.pin.len() >= PIN_LENGTH || self.pin.push(digit).is_err() {
            return false;
        }

        if self.pin.len() == PIN_LENGTH {
            let pin = self.pin.clone();
            self.enter(UserStatus::VerifyingLogin);
            self.generation = self.generation.wrapping_add(1);
            self.in_flight = Some(verifier.begin(&pin, self.generation, now, rng));
        }
        true
    }

    /// Advance time-driven state: settle a pending verification whose
    /// deadline has passed. Returns the status entered by a settlement, or
    /// `None` if nothing applied (including discarded stale results).
    pub fn tick(
        &mut self,
        now: Instant,
    ) -> Option<UserStatus> {
        let settled = matches!(&self.in_flight, Some(f) if f.is_settled(now));
        if !settled {
            return None;
        }
        let flight = self.in_flight.take()?;
        if flight.generation() != self.generation {
            // The user cancelled or moved on while this was pending
            return None;
        }
        match flight.outcome() {
            Ok(()) => {
                self.enter(UserStatus::LoggedIn);
                Some(UserStatus::LoggedIn)
            }
            Err(_) => {
                self.error_armed = true;
                self.enter(UserStatus::LogInError);
                Some(UserStatus::LogInError)
            }
        }
    }

    /// Explicit cancellation: unconditionally back to `LoggedOut` from any
    /// state, clearing the buffer and invalidating any pending verification.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.error_armed = false;
        self.enter(UserStatus::LoggedOut);
    }

    /// A status-button press (sign-in targets `LoggingIn`, sign-out targets
    /// `LoggedOut`). No-op when the session is already in the target status,
    /// mirroring the disabled button. Returns `true` if a transition happened.
    pub fn request_status(
        &mut self,
        target: UserStatus,
    ) -> bool {
        if self.status == target {
            return false;
        }
        self.generation = self.generation.wrapping_add(1);
        self.error_armed = false;
        self.enter(target);
        true
    }

    /// Apply a transition's side effects: focus for the input-armed statuses,
    /// buffer clear for everything else.
    fn enter(
        &mut self,
        next: UserStatus,
    ) {
        self.status = next;
        match next {
            UserStatus::LoggingIn | UserStatus::LogInError => self.focus_requested = true,
            _ => self.pin.clear(),
        }
    }
}

impl Default for Session {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::config::{VERIFY_DELAY_MAX_MS, VERIFY_DELAY_MIN_MS};

    fn rng() -> StdRng { StdRng::seed_from_u64(1234) }

    /// An instant strictly before any verification begun at `now` can settle.
    fn before_settle(now: Instant) -> Instant { now + Duration::from_millis(VERIFY_DELAY_MIN_MS as u64 / 2) }

    /// An instant at or after every possible settle deadline for `now`.
    fn after_settle(now: Instant) -> Instant { now + Duration::from_millis(VERIFY_DELAY_MAX_MS as u64) }

    /// Drive a session from `LoggedOut` into `VerifyingLogin` with `pin`.
    fn enter_pin(
        session: &mut Session,
        verifier: &PinVerifier,
        pin: &str,
        now: Instant,
        rng: &mut StdRng,
    ) {
        session.request_status(UserStatus::LoggingIn);
        for d in pin.chars() {
            assert!(session.push_digit(d, verifier, now, rng), "digit {d} rejected");
        }
    }

    // -------------------------------------------------------------------------
    // Initial State Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_initial_state() {
        let session = Session::new();
        assert_eq!(session.peek_status(), UserStatus::LoggedOut);
        assert_eq!(session.pin_len(), 0);
        assert!(!session.verification_pending());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(UserStatus::LoggedOut.label(), "Logged Out");
        assert_eq!(UserStatus::VerifyingLogin.label(), "Verifying Log In");
    }

    // -------------------------------------------------------------------------
    // Sign-in / Status Button Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_sign_in_requests_focus() {
        let mut session = Session::new();
        assert!(session.request_status(UserStatus::LoggingIn));
        assert_eq!(session.peek_status(), UserStatus::LoggingIn);
        assert!(session.take_focus_request(), "entering LoggingIn must request focus");
        assert!(!session.take_focus_request(), "focus request is consumed");
    }

    #[test]
    fn test_status_button_noop_when_already_there() {
        let mut session = Session::new();
        assert!(
            !session.request_status(UserStatus::LoggedOut),
            "button for the current status is disabled"
        );
        assert!(!session.take_focus_request());
    }

    // -------------------------------------------------------------------------
    // Digit Entry Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_digits_rejected_while_logged_out() {
        let mut session = Session::new();
        let verifier = PinVerifier::new();
        assert!(!session.push_digit('1', &verifier, Instant::now(), &mut rng()));
        assert_eq!(session.pin_len(), 0);
    }

    #[test]
    fn test_non_digit_rejected() {
        let mut session = Session::new();
        let verifier = PinVerifier::new();
        session.request_status(UserStatus::LoggingIn);
        assert!(!session.push_digit('x', &verifier, Instant::now(), &mut rng()));
        assert_eq!(session.pin_len(), 0);
    }

    #[test]
    fn test_short_pin_triggers_no_verification() {
        let mut session = Session::new();
        let verifier = PinVerifier::new();
        let now = Instant::now();
        let mut rng = rng();
        session.request_status(UserStatus::LoggingIn);
        for d in ['1', '2', '3'] {
            session.push_digit(d, &verifier, now, &mut rng);
        }
        assert_eq!(session.pin(), "123");
        assert_eq!(session.peek_status(), UserStatus::LoggingIn);
        assert!(
            !session.verification_pending(),
            "no verification before the 4th digit"
        );
    }

    #[test]
    fn test_fourth_digit_starts_exactly_one_verification() {
        let mut session = Session::new();
        let verifier = PinVerifier::new();
        let now = Instant::now();
        let mut rng = rng();
        enter_pin(&mut session, &verifier, "1234", now, &mut rng);

        assert_eq!(session.peek_status(), UserStatus::VerifyingLogin);
        assert!(session.verification_pending());
        assert_eq!(session.pin_len(), 0, "buffer clears when leaving the input family");

        // A 5th digit while verifying is a no-op
        assert!(!session.push_digit('5', &verifier, now, &mut rng));
    }

    // -------------------------------------------------------------------------
    // Settlement Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_pending_state_observable_before_settlement() {
        let mut session = Session::new();
        let verifier = PinVerifier::new();
        let now = Instant::now();
        let mut rng = rng();
        enter_pin(&mut session, &verifier, "1234", now, &mut rng);

        assert!(session.tick(before_settle(now)).is_none());
        assert_eq!(session.peek_status(), UserStatus::VerifyingLogin);
    }

    #[test]
    fn test_correct_pin_settles_logged_in() {
        let mut session = Session::new();
        let verifier = PinVerifier::new();
        let now = Instant::now();
        let mut rng = rng();
        enter_pin(&mut session, &verifier, "1234", now, &mut rng);

        assert_eq!(session.tick(after_settle(now)), Some(UserStatus::LoggedIn));
        assert_eq!(session.peek_status(), UserStatus::LoggedIn);
        assert!(!session.verification_pending());
    }

    #[test]
    fn test_wrong_pin_settles_error() {
        let mut session = Session::new();
        let verifier = PinVerifier::new();
        let now = Instant::now();
        let mut rng = rng();
        enter_pin(&mut session, &verifier, "9999", now, &mut rng);

        assert_eq!(session.tick(after_settle(now)), Some(UserStatus::LogInError));
    }

    // -------------------------------------------------------------------------
    // Error Recovery Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_error_recovers_to_logging_in_exactly_once() {
        let mut session = Session::new();
        let verifier = PinVerifier::new();
        let now = Instant::now();
        let mut rng = rng();
        enter_pin(&mut session, &verifier, "9999", now, &mut rng);
        session.tick(after_settle(now));

        // First observation sees the error and re-arms
        assert_eq!(session.status(), UserStatus::LogInError);
        assert_eq!(session.peek_status(), UserStatus::LoggingIn);
        assert!(session.take_focus_request(), "recovery re-focuses the input");

        // Subsequent observations are stable in LoggingIn
        assert_eq!(session.status(), UserStatus::LoggingIn);
        assert_eq!(session.status(), UserStatus::LoggingIn);
    }

    #[test]
    fn test_recovery_rearms_for_each_error() {
        let mut session = Session::new();
        let verifier = PinVerifier::new();
        let mut rng = rng();

        for _ in 0..2 {
            let now = Instant::now();
            enter_pin(&mut session, &verifier, "0000", now, &mut rng);
            session.tick(after_settle(now));
            assert_eq!(session.status(), UserStatus::LogInError);
            assert_eq!(session.peek_status(), UserStatus::LoggingIn);
            session.cancel();
        }
    }

    #[test]
    fn test_typing_during_error_recovers_and_appends() {
        let mut session = Session::new();
        let verifier = PinVerifier::new();
        let now = Instant::now();
        let mut rng = rng();
        enter_pin(&mut session, &verifier, "9999", now, &mut rng);
        session.tick(after_settle(now));
        assert_eq!(session.peek_status(), UserStatus::LogInError);

        assert!(session.push_digit('1', &verifier, now, &mut rng));
        assert_eq!(session.peek_status(), UserStatus::LoggingIn);
        assert_eq!(session.pin(), "1");
    }

    // -------------------------------------------------------------------------
    // Cancellation / Stale Settlement Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_cancel_during_verification_is_immediate() {
        let mut session = Session::new();
        let verifier = PinVerifier::new();
        let now = Instant::now();
        let mut rng = rng();
        enter_pin(&mut session, &verifier, "1234", now, &mut rng);

        session.cancel();
        assert_eq!(session.peek_status(), UserStatus::LoggedOut);
        assert_eq!(session.pin_len(), 0);
    }

    #[test]
    fn test_stale_result_discarded_after_cancel() {
        let mut session = Session::new();
        let verifier = PinVerifier::new();
        let now = Instant::now();
        let mut rng = rng();
        enter_pin(&mut session, &verifier, "1234", now, &mut rng);
        session.cancel();

        // The verification eventually settles, but must not apply
        assert!(session.tick(after_settle(now)).is_none());
        assert_eq!(session.peek_status(), UserStatus::LoggedOut);
    }

    #[test]
    fn test_stale_result_does_not_clobber_new_attempt() {
        let mut session = Session::new();
        let verifier = PinVerifier::new();
        let now = Instant::now();
        let mut rng = rng();
        enter_pin(&mut session, &verifier, "1234", now, &mut rng);
        session.cancel();

        // User signs back in and starts typing a fresh PIN
        session.request_status(UserStatus::LoggingIn);
        session.push_digit('9', &verifier, now, &mut rng);

        assert!(session.tick(after_settle(now)).is_none());
        assert_eq!(session.peek_status(), UserStatus::LoggingIn);
        assert_eq!(session.pin(), "9", "stale settle must not touch the new attempt");
    }

    #[test]
    fn test_cancel_from_any_state() {
        let mut session = Session::new();
        session.cancel();
        assert_eq!(session.peek_status(), UserStatus::LoggedOut);

        session.request_status(UserStatus::LoggingIn);
        session.cancel();
        assert_eq!(session.peek_status(), UserStatus::LoggedOut);
    }

    #[test]
    fn test_sign_out_from_logged_in() {
        let mut session = Session::new();
        let verifier = PinVerifier::new();
        let now = Instant::now();
        let mut rng = rng();
        enter_pin(&mut session, &verifier, "1234", now, &mut rng);
        session.tick(after_settle(now));
        assert_eq!(session.peek_status(), UserStatus::LoggedIn);

        assert!(session.request_status(UserStatus::LoggedOut));
        assert_eq!(session.peek_status(), UserStatus::LoggedOut);
    }
}
