//! # grload
//!
//! Creates geometry items from textual or binary geometry representations,
//! one per line, read from a file or given as a literal string.
//!
//! ## Line Format
//!
//! ```text
//! # comment, skipped
//! POINT(1 2)
//! !POINT(1 2 3 4 5)
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. A leading `!`
//! marks a line that is expected to fail; it only matters in self-test
//! mode.
//!
//! ## Encoding Detection
//!
//! Each content line is classified without decoding it (first match wins):
//! 1. starts with `0x` → HexWKB
//! 2. starts with `00` or `01` → WKB
//! 3. starts with `{` or ends with `}` → GeoJSON
//! 4. otherwise → WKT
//!
//! The extended ("plus") variant of each format is always selected.
//! WKB lines are hex-decoded and sent to the engine's binary entry point;
//! every other line is sent to the text entry point unchanged.
//!
//! ## Modes
//!
//! By default the first failing line aborts the run with
//! [`Error::Creation`]. In self-test mode every line is classified as
//! PASS or FAIL (inverted for `!` lines), progress is printed, and the
//! run returns [`Counters`].
//!
//! ```
//! use grload::{Harness, Options, Recorder};
//!
//! let mut engine = Recorder::new();
//! let mut harness = Harness::new(Options::default());
//! let counters = harness.run(&mut engine, ["POINT(1 2)", "# skipped"]).unwrap();
//! assert_eq!(counters.run, 1);
//! ```

pub mod body;
pub mod directive;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod harness;
pub mod sniff;
pub mod source;
pub mod transcript;

pub use body::Body;
pub use directive::Directive;
pub use dispatch::dispatch;
pub use engine::{GeometryEngine, Recorder, Request};
pub use error::{CreationFailure, Error, Result};
pub use harness::{
    create_from_source, fit_viewport, Counters, Harness, HarnessState, Options, Outcome,
    DEFAULT_PROJECTION, PREVIEW_LEN,
};
pub use sniff::{sniff, Encoding, EncodingTag};
pub use source::{load_lines, Source};
pub use transcript::Transcript;
