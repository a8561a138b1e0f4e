//! outcome is a two-variant result container for explicit, composable error handling.
//!
//! Fallible operations return an [Outcome] holding either a success value or a failure
//! value, so the possibility of failure is part of the return type rather than an
//! exception flying through control flow. Failures are plain data: they are carried
//! through combinator chains until the caller decides to unwrap, default or transform
//! them.
//!
//! # Building outcomes
//!
//! The only construction paths are the two variant constructors, available both as
//! free functions and on the type itself:
//!
//! ```rust
//! use outcome::{ok, err, done, Outcome};
//!
//! let success: Outcome<i32, String> = ok(42);
//! let failure: Outcome<i32, String> = err("not found".to_string());
//!
//! // same thing, spelled on the type
//! let success: Outcome<i32, String> = Outcome::of(42);
//! let failure: Outcome<i32, String> = Outcome::from_error("not found".to_string());
//!
//! // a success with no meaningful value, the payload is `true`
//! let nothing_to_report: Outcome<bool, String> = done();
//! ```
//!
//! The variant and payload are fixed together at construction and never change; there
//! is no way to build an `Outcome` with a missing or inconsistent payload.
//!
//! # Chaining
//!
//! [map](Outcome::map) and [map_err](Outcome::map_err) transform one side leaving the
//! variant alone, [and_then](Outcome::and_then) and [or_else](Outcome::or_else) chain
//! further fallible operations while short-circuiting on the other variant, and
//! [map_or_else](Outcome::map_or_else) reconciles both branches into a single success
//! value:
//!
//! ```rust
//! use outcome::{ok, err, Outcome};
//!
//! fn parse(s: &str) -> Outcome<i32, String> {
//!     s.parse().map_err(|_| format!("bad number: {s}")).into()
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, ok(42));
//!
//! let message: Outcome<String, String> = parse("twenty")
//!     .and_then(|n| if n > 0 { ok(n) } else { err("not positive".to_string()) })
//!     .map_or_else(|e| format!("failed: {e}"), |n| format!("got {n}"));
//! assert_eq!(message.ok(), Some("failed: bad number: twenty".to_string()));
//! ```
//!
//! # Unwrapping
//!
//! The [unwrap](Outcome::unwrap)/[expect](Outcome::expect) family extracts a payload
//! directly; when asked for the wrong variant it panics with an [UnwrapError]
//! payload. That is
//! a programming error at the call site, kept distinguishable from every other panic
//! so tests and `catch_unwind` boundaries can single it out. The non-panicking
//! alternatives are [unwrap_or](Outcome::unwrap_or) and
//! [unwrap_or_else](Outcome::unwrap_or_else), or [into_result](Outcome::into_result)
//! to bridge into `?` propagation.

mod errors;
mod outcome;

pub use errors::UnwrapError;
pub use outcome::{done, err, ok, Outcome};
