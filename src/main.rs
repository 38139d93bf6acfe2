// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional u32->i32 casts for pixel math
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive
#![allow(clippy::too_many_lines)] // main() is long but well-structured

//! Wall Tablet Home Dashboard Simulator.
//!
//! A simulated smart-home tablet: a lock screen with a live clock, PIN entry
//! with asynchronous verification, and a home menu of drag-scrollable card
//! strips (weather forecast, restaurants, home tools, movies).
//!
//! # Controls (Simulator Mode)
//!
//! | Key | Action |
//! |-----|--------|
//! | `S` | Sign in (opens PIN entry) |
//! | `0`-`9` | Enter PIN digit |
//! | `Esc` | Cancel sign-in, back to lock screen |
//! | `Q` | Sign out from the menu |
//! | `D` | Toggle the debug log overlay |
//! | Mouse drag | Scroll a card strip horizontally |
//!
//! Key repeat is ignored to prevent digit spam when holding keys.
//!
//! # Architecture
//!
//! ```text
//!  events ──▶ Session (status machine) ──▶ status snapshot ──▶ screens
//!                 │                                               │
//!                 └── PinVerifier (simulated latency) ◀── tick ───┘
//! ```
//!
//! The session is the single source of truth. Each frame: drain input events,
//! settle any due verification, observe the status, and draw the screen that
//! status selects. The PIN screen redraws every frame (the focus pulse
//! animates); the lock screen redraws only when its clock second or hint
//! blink phase changes.

mod clock;
mod colors;
mod config;
mod content;
mod diag;
mod num;
mod render;
mod screens;
mod scroll;
mod session;
mod styles;
mod verify;
mod widgets;

use std::thread;
use std::time::Instant;

use chrono::Local;
use clock::{Clock, format_clock_time};
use colors::BLACK;
use config::{ERROR_FLASH_DURATION, FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, SECTION_COUNT};
use diag::DebugLog;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::ContainsPoint;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use render::RenderState;
use screens::{draw_lock_screen, draw_menu, draw_pin_screen, strip_hit, strip_rect};
use scroll::Scrollable;
use session::{Session, UserStatus};
use verify::PinVerifier;
use widgets::draw_debug_overlay;

/// Hint blink half-period in frames (~1 Hz at 50 FPS).
const HINT_BLINK_FRAMES: u32 = 25;

/// Focus pulse half-period in frames (~2 Hz at 50 FPS).
const PULSE_FRAMES: u32 = 12;

fn main() {
    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Home Tablet", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    let mut rng = rand::thread_rng();

    // Static content, sampled once at startup (no real weather feed)
    let days = content::forecast(&mut rng);
    let snap_temp = content::weather_snap(&mut rng);

    let verifier = PinVerifier::new();
    let mut session = Session::new();

    // One scroll controller per card strip
    let mut strips: [Scrollable; SECTION_COUNT] = core::array::from_fn(|_| Scrollable::new());
    // Strip currently captured by a mouse drag
    let mut active_strip: Option<usize> = None;

    // Clock redraw gating and formatted display text
    let mut clock = Clock::new();
    let mut clock_text = format_clock_time(&Local::now().time());

    // Frame counter for blink timing (wraps to avoid overflow)
    let mut frame_count = 0u32;
    // Frame the focus pulse last restarted at, so a fresh focus request
    // begins with the highlight visible
    let mut pulse_origin = 0u32;
    // Last drawn lock screen hint phase, None forces a draw
    let mut prev_hint_on: Option<bool> = None;

    // INVALID flash deadline; outlives the error status so the message stays
    // readable while the session has already re-armed for input
    let mut error_flash_until: Option<Instant> = None;

    // Debug overlay state (D key toggles)
    let mut show_overlay = false;
    let mut debug_log = DebugLog::new();
    debug_log.push("System started");

    let mut render_state = RenderState::new();

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        // Handle window events (close, key presses, mouse drags)
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent digit spam when holding keys
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::S => {
                            if session.request_status(UserStatus::LoggingIn) {
                                debug_log.push("Sign in requested");
                            }
                        }
                        Keycode::Q => {
                            if session.request_status(UserStatus::LoggedOut) {
                                debug_log.push("Signed out");
                            }
                        }
                        Keycode::Escape => {
                            session.cancel();
                            debug_log.push("Cancelled");
                        }
                        Keycode::D => {
                            show_overlay = !show_overlay;
                            debug_log.push(if show_overlay { "Overlay: ON" } else { "Overlay: OFF" });
                        }
                        other => {
                            if let Some(digit) = keycode_digit(other)
                                && session.push_digit(digit, &verifier, Instant::now(), &mut rng)
                                && session.peek_status() == UserStatus::VerifyingLogin
                            {
                                debug_log.push("Verifying PIN");
                            }
                        }
                    }
                }
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    point,
                } => {
                    // Strips only exist on the menu page
                    if session.peek_status() == UserStatus::LoggedIn
                        && let Some(index) = strip_hit(point)
                    {
                        active_strip = Some(index);
                        strips[index].on_pointer_down(point.x);
                    }
                }
                SimulatorEvent::MouseMove { point } => {
                    if let Some(index) = active_strip {
                        if strip_rect(index).contains(point) {
                            strips[index].on_pointer_move(point.x);
                        } else {
                            // Leaving the strip ends the drag, like pointer-up
                            strips[index].on_pointer_leave();
                            active_strip = None;
                        }
                    }
                }
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } => {
                    if let Some(index) = active_strip.take() {
                        strips[index].on_pointer_up();
                    }
                }
                _ => {}
            }
        }

        // ======================================================================
        // Settle Pending Verification
        // ======================================================================

        let now = Instant::now();
        if let Some(entered) = session.tick(now) {
            debug_log.push(entered.label());
            if entered == UserStatus::LogInError {
                error_flash_until = Some(now + ERROR_FLASH_DURATION);
            }
        }

        // A fresh focus request restarts the pulse with the highlight visible
        if session.take_focus_request() {
            pulse_origin = frame_count;
        }

        // Observing the status performs the one-shot error recovery
        let status = session.status();

        // ======================================================================
        // Clock Update (gated to the displayed second)
        // ======================================================================

        let local_time = Local::now().time();
        let second_changed = clock.tick(&local_time);
        if second_changed {
            clock_text = format_clock_time(&local_time);
        }

        // ======================================================================
        // Status-Based Rendering
        // ======================================================================

        let cleared = render_state.check_clear(status, show_overlay);
        if cleared {
            display.clear(BLACK).ok();
            prev_hint_on = None;
        }

        match status {
            UserStatus::LoggedOut => {
                let hint_on = (frame_count / HINT_BLINK_FRAMES).is_multiple_of(2);
                if cleared || second_changed || prev_hint_on != Some(hint_on) {
                    draw_lock_screen(&mut display, clock_text.as_str(), snap_temp, hint_on);
                    prev_hint_on = Some(hint_on);
                }
            }
            UserStatus::LoggingIn | UserStatus::VerifyingLogin | UserStatus::LogInError => {
                let pulse_on =
                    (frame_count.wrapping_sub(pulse_origin) / PULSE_FRAMES).is_multiple_of(2);
                let show_error = error_flash_until.is_some_and(|until| now < until);
                draw_pin_screen(&mut display, session.pin(), status, pulse_on, show_error);
            }
            UserStatus::LoggedIn => {
                let offsets: [i32; SECTION_COUNT] = core::array::from_fn(|i| strips[i].offset());
                draw_menu(&mut display, clock_text.as_str(), snap_temp, &days, &offsets);
            }
        }

        // Overlay draws last so it sits on top of the active screen
        if show_overlay {
            draw_debug_overlay(&mut display, &debug_log, session.peek_status());
        }

        // ======================================================================
        // Frame Timing
        // ======================================================================

        render_state.end_frame();
        window.update(&display);
        frame_count = frame_count.wrapping_add(1);

        // Sleep to maintain target frame rate (~50 FPS)
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}

/// Map a number-row or keypad key to its PIN digit.
fn keycode_digit(keycode: Keycode) -> Option<char> {
    match keycode {
        Keycode::Num0 | Keycode::Kp0 => Some('0'),
        Keycode::Num1 | Keycode::Kp1 => Some('1'),
        Keycode::Num2 | Keycode::Kp2 => Some('2'),
        Keycode::Num3 | Keycode::Kp3 => Some('3'),
        Keycode::Num4 | Keycode::Kp4 => Some('4'),
        Keycode::Num5 | Keycode::Kp5 => Some('5'),
        Keycode::Num6 | Keycode::Kp6 => Some('6'),
        Keycode::Num7 | Keycode::Kp7 => Some('7'),
        Keycode::Num8 | Keycode::Kp8 => Some('8'),
        Keycode::Num9 | Keycode::Kp9 => Some('9'),
        _ => None,
    }
}
