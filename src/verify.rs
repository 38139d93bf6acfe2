//! Simulated PIN verification with randomized latency.
//!
//! Stands in for a real authentication backend. A verification is decided the
//! moment it begins (the submitted PIN either matches the configured secret or
//! it does not), but the outcome is withheld until a settle deadline sampled
//! uniformly from `[VERIFY_DELAY_MIN_MS, VERIFY_DELAY_MAX_MS]`. The pending
//! window models network latency and is observable: the session sits in
//! `VerifyingLogin` until the deadline passes.
//!
//! Each in-flight verification carries the generation it was issued under.
//! The session ignores settlements whose generation is stale (the user
//! cancelled or signed out in the meantime), so a late result can never
//! overwrite newer state.

use std::time::{Duration, Instant};

use heapless::String;
use rand::Rng;
use thiserror::Error;

use crate::config::{DEFAULT_PIN, PIN_LENGTH, VERIFY_DELAY_MAX_MS, VERIFY_DELAY_MIN_MS};
use crate::num::rand_in_range;

/// The only error this core produces: the submitted PIN did not match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid pin: {pin}")]
pub struct VerifyError {
    /// The PIN that was submitted and rejected.
    pub pin: String<PIN_LENGTH>,
}

/// Simulated credential checker with a configured secret and latency range.
pub struct PinVerifier {
    secret: String<PIN_LENGTH>,
    delay_min_ms: i32,
    delay_max_ms: i32,
}

impl PinVerifier {
    /// Verifier with the default secret (`"1234"`) and default latency range.
    pub fn new() -> Self { Self::with_secret(DEFAULT_PIN) }

    /// Verifier with a custom secret. The secret is truncated to `PIN_LENGTH`.
    pub fn with_secret(secret: &str) -> Self {
        let mut s: String<PIN_LENGTH> = String::new();
        for ch in secret.chars().take(PIN_LENGTH) {
            let _ = s.push(ch);
        }
        Self {
            secret: s,
            delay_min_ms: VERIFY_DELAY_MIN_MS,
            delay_max_ms: VERIFY_DELAY_MAX_MS,
        }
    }

    /// Begin verifying `pin`. Returns the in-flight verification whose outcome
    /// becomes observable once `settles_at` has passed.
    pub fn begin<R: Rng>(
        &self,
        pin: &str,
        generation: u32,
        now: Instant,
        rng: &mut R,
    ) -> InFlight {
        let delay = Duration::from_millis(rand_in_range(rng, self.delay_min_ms, self.delay_max_ms) as u64);
        let outcome = if pin == self.secret.as_str() {
            Ok(())
        } else {
            let mut submitted: String<PIN_LENGTH> = String::new();
            for ch in pin.chars().take(PIN_LENGTH) {
                let _ = submitted.push(ch);
            }
            Err(VerifyError { pin: submitted })
        };
        InFlight {
            generation,
            delay,
            settles_at: now + delay,
            outcome,
        }
    }
}

impl Default for PinVerifier {
    fn default() -> Self { Self::new() }
}

/// A verification that has begun but not yet settled.
pub struct InFlight {
    generation: u32,
    delay: Duration,
    settles_at: Instant,
    outcome: Result<(), VerifyError>,
}

impl InFlight {
    /// Generation this verification was issued under.
    #[inline]
    pub const fn generation(&self) -> u32 { self.generation }

    /// Simulated latency sampled for this verification.
    #[inline]
    pub const fn delay(&self) -> Duration { self.delay }

    /// Whether the settle deadline has passed.
    #[inline]
    pub fn is_settled(
        &self,
        now: Instant,
    ) -> bool {
        now >= self.settles_at
    }

    /// Consume the verification and yield its outcome.
    ///
    /// Only meaningful once [`is_settled`](Self::is_settled) is true; the
    /// session never reads the outcome before the deadline.
    pub fn outcome(self) -> Result<(), VerifyError> { self.outcome }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn rng() -> StdRng { StdRng::seed_from_u64(99) }

    #[test]
    fn test_correct_pin_resolves_true() {
        let verifier = PinVerifier::new();
        let flight = verifier.begin("1234", 1, Instant::now(), &mut rng());
        assert!(flight.outcome().is_ok(), "default secret must verify");
    }

    #[test]
    fn test_wrong_pin_rejects_with_submitted_value() {
        let verifier = PinVerifier::new();
        let flight = verifier.begin("9999", 1, Instant::now(), &mut rng());
        let err = flight.outcome().unwrap_err();
        assert_eq!(err.pin.as_str(), "9999", "error must carry the submitted pin");
    }

    #[test]
    fn test_custom_secret() {
        let verifier = PinVerifier::with_secret("0000");
        let now = Instant::now();
        assert!(verifier.begin("0000", 1, now, &mut rng()).outcome().is_ok());
        assert!(verifier.begin("1234", 2, now, &mut rng()).outcome().is_err());
    }

    #[test]
    fn test_delay_within_configured_range() {
        let verifier = PinVerifier::new();
        let now = Instant::now();
        let mut rng = rng();
        for i in 0..200 {
            let flight = verifier.begin("1234", i, now, &mut rng);
            let ms = flight.delay().as_millis() as i32;
            assert!(
                (VERIFY_DELAY_MIN_MS..=VERIFY_DELAY_MAX_MS).contains(&ms),
                "delay {ms}ms outside [{VERIFY_DELAY_MIN_MS}, {VERIFY_DELAY_MAX_MS}]"
            );
        }
    }

    #[test]
    fn test_delay_applies_to_failures_too() {
        // Latency is identical regardless of outcome so timing leaks nothing
        let verifier = PinVerifier::new();
        let now = Instant::now();
        let flight = verifier.begin("0000", 1, now, &mut rng());
        let ms = flight.delay().as_millis() as i32;
        assert!((VERIFY_DELAY_MIN_MS..=VERIFY_DELAY_MAX_MS).contains(&ms));
    }

    #[test]
    fn test_pending_before_deadline_settled_after() {
        let verifier = PinVerifier::new();
        let now = Instant::now();
        let flight = verifier.begin("1234", 1, now, &mut rng());
        let delay = flight.delay();

        assert!(!flight.is_settled(now), "must be pending at begin time");
        assert!(
            !flight.is_settled(now + delay / 2),
            "must still be pending mid-delay"
        );
        assert!(flight.is_settled(now + delay), "must settle at the deadline");
    }

    #[test]
    fn test_generation_is_preserved() {
        let verifier = PinVerifier::new();
        let flight = verifier.begin("1234", 17, Instant::now(), &mut rng());
        assert_eq!(flight.generation(), 17);
    }

    #[test]
    fn test_error_display() {
        let verifier = PinVerifier::new();
        let err = verifier
            .begin("4321", 1, Instant::now(), &mut rng())
            .outcome()
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid pin: 4321");
    }
}
