//! Interpreter tests.
//!
//! Organized by component:
//! - palette_tests: 256-color index resolution
//! - scanner_tests: stripping and SGR tokenization
//! - sgr_tests: parameter parsing and state transitions
//! - run_tests: run encoding, including reverse video
//! - parse_tests: whole-capture parsing
