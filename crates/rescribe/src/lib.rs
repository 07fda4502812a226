//! Rescribe: recorded browser interactions to runnable scripts.
//!
//! A deterministic translator from a sequence of abstract, language-neutral
//! interaction records into executable automation source plus a short
//! description of each step. Recording itself lives elsewhere; this crate
//! receives already-normalized [`actions::Action`] values and turns them into
//! text.
//!
//! # Architecture
//!
//! ```text
//! ActionInContext ──► JavaScriptGenerator ──► JsFormatter ──► indented block
//!                          │
//!                          └── JsValue renderer (literal expressions)
//! ```
//!
//! Concatenating [`language::LanguageGenerator::generate_header`], the
//! per-action blocks and
//! [`language::LanguageGenerator::generate_footer`] yields a directly
//! runnable script.
//!
//! # Example
//!
//! ```
//! use rescribe::prelude::*;
//!
//! let action = Action::new(ActionKind::Click {
//!     selector: "text=Submit".to_string(),
//!     button: MouseButton::Left,
//!     modifiers: Modifiers::NONE,
//!     click_count: 1,
//! });
//! let generator = JavaScriptGenerator::new();
//! let block = generator.generate_action(&ActionInContext::main_frame("page", action));
//! assert!(block.contains("await page.click('text=Submit');"));
//! ```

#![warn(missing_docs)]
// Lints are configured in the crate Cargo.toml [lints] tables.

pub mod actions;
pub mod devices;
pub mod error;
pub mod format;
pub mod javascript;
pub mod language;
pub mod value;

pub use error::{GenError, Result};

/// Convenience re-exports for generator callers.
pub mod prelude {
    pub use crate::actions::{
        Action, ActionKind, ClipRegion, Modifiers, MouseButton, MouseButtonState, Point, Signal,
        SignalKind,
    };
    pub use crate::devices::DeviceCatalog;
    pub use crate::error::{GenError, Result};
    pub use crate::format::JsFormatter;
    pub use crate::javascript::JavaScriptGenerator;
    pub use crate::language::{
        to_signal_map, ActionInContext, GeneratorOptions, LanguageGenerator, SignalMap,
    };
    pub use crate::value::{
        format_options, format_value, format_value_or_empty, quote, quote_with, JsValue,
    };
}
