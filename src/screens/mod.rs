//! Screen modules for the tablet pages.
//!
//! Which screen is visible is driven entirely by the session status:
//!
//! - [`lock`]: `LoggedOut` (clock + sign-in hint) and the PIN entry screen
//!   for `LoggingIn` / `VerifyingLogin` / `LogInError`
//! - [`menu`]: `LoggedIn` home menu with the card strips
//!
//! Screens are plain draw functions over the simulator display; all state
//! lives in the session, scroll controllers, and clock.

mod lock;
mod menu;

pub use lock::{draw_lock_screen, draw_pin_screen};
pub use menu::{STRIP_CARD_COUNTS, draw_menu, strip_hit, strip_rect};
