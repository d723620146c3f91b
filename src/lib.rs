//! # Fortunecast - Deterministic Fortune Cards for 2026
//!
//! Fortunecast turns a name, a birth date and either body measurements or a
//! yearly goal into a reproducible "fortune card": category scores, short
//! readings, an advice line and birth-derived attributes. The same input
//! always produces the same card, on any machine, because every number comes
//! from a seeded stream rather than ambient randomness.
//!
//! ## Features
//!
//! - **Deterministic Pipeline**: FNV-1a hashing over canonical input into a Mulberry32 stream with a fixed draw order.
//! - **Two Reading Kinds**: Body readings (height/weight, BMI-adjusted health) and goal readings (success outlook with tiered advice).
//! - **Birth Attributes**: Western zodiac, zodiac animal and a single-digit life-path number from the birth date.
//! - **Terminal Cards**: Themed ANSI rendering with score bars, honoring `NO_COLOR` and non-TTY output.
//! - **Share Surfaces**: A chat-sized blurb, a JSON payload and plain-text cards saved under the data directory.
//! - **Interactive Mode**: A reading form plus a prompt loop, persistent theme preference and a reusable last reading.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fortunecast::config::Config;
//! use fortunecast::app::App;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").unwrap_or_default();
//!     let mut app = App::new(config);
//!
//!     let result = app.cast_body("Kim", "1999-11-02", "175", "68.5")?;
//!     println!("{}", fortunecast::card::render(&result, &app.render_options()));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`fortune`] - The deterministic reading pipeline (validation, seeding, RNG, scoring, content banks)
//! - [`card`] - Terminal rendering of a reading
//! - [`export`] - Share text, share JSON and saved card files
//! - [`theme`] - Dark/light palette selection with persisted preference
//! - [`app`] - Interactive session state and command dispatch
//! - [`config`] - Configuration management
//! - [`logutil`] - Log sanitization for user-entered text
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   Input         │ ← name, birth, body or goal
//! │   Validation    │
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │   Seed + RNG    │ ← FNV-1a → Mulberry32 stream
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │   Card          │ ← scores, readings, render, share
//! └─────────────────┘
//! ```

pub mod app;
pub mod card;
pub mod config;
pub mod export;
pub mod fortune;
pub mod logutil;
pub mod theme;
