//! Exception trace formatting
//!
//! Renders a raised error (and its cause chain) into a single display string
//! that is safe to embed in markup-rendering UI surfaces: tabs become a fixed
//! indent marker and line breaks become a markup break marker.

use crate::messages::{keys, MessageStore};
use std::error::Error;
use std::fmt::Write as _;

/// Maximum number of cause links walked before formatting degrades
///
/// Cause chains are expected to be short; the bound exists so a cyclic or
/// pathologically long chain cannot stall a dispatch.
pub const CAUSE_WALK_LIMIT: usize = 32;

/// Replacement for a literal tab character
pub const INDENT_MARKER: &str = "&nbsp;&nbsp;";

/// Replacement for a literal line break
pub const LINE_BREAK_MARKER: &str = "<br>";

/// Render an error into the exception-report body
///
/// An error with an underlying cause is reported as its own message plus the
/// trace of the terminal, cause-less error at the end of the chain. An error
/// without a cause is reported as exactly its own rendered trace. If the
/// chain cannot be walked within [`CAUSE_WALK_LIMIT`], the root-cause detail
/// is dropped and the immediate error's trace is used instead.
pub fn format(error: &(dyn Error + 'static), messages: &dyn MessageStore) -> String {
    if error.source().is_none() {
        return messages.message(keys::EXCEPTION_TRACE, &[&render_trace(error)]);
    }
    match root_cause(error) {
        Some(root) => messages.message(
            keys::EXCEPTION_WITH_ROOT_CAUSE,
            &[&error.to_string(), &render_trace(root)],
        ),
        None => {
            log::warn!(
                "cause chain exceeded {} links, reporting immediate error only",
                CAUSE_WALK_LIMIT
            );
            messages.message(keys::EXCEPTION_TRACE, &[&render_trace(error)])
        }
    }
}

/// Render an error's diagnostic trace as markup-safe text
///
/// The trace is the error's display message, its `Debug` rendering, and one
/// indented `caused by:` line per cause link. Output is deterministic for a
/// given error value and contains no literal tab or newline characters.
pub fn render_trace(error: &(dyn Error + 'static)) -> String {
    escape_markup(&raw_trace(error))
}

/// Walk the cause chain to the terminal, cause-less error
///
/// Returns the error itself when it has no cause. Returns `None` when the
/// chain does not terminate within [`CAUSE_WALK_LIMIT`] links.
pub fn root_cause<'a>(error: &'a (dyn Error + 'static)) -> Option<&'a (dyn Error + 'static)> {
    let mut current = error;
    for _ in 0..=CAUSE_WALK_LIMIT {
        match current.source() {
            Some(cause) => current = cause,
            None => return Some(current),
        }
    }
    None
}

fn raw_trace(error: &(dyn Error + 'static)) -> String {
    let mut text = error.to_string();
    let _ = write!(text, "\n{:?}", error);

    let mut hops = 0;
    let mut cursor = error.source();
    while let Some(cause) = cursor {
        if hops == CAUSE_WALK_LIMIT {
            text.push_str("\n\t[cause chain truncated]");
            break;
        }
        let _ = write!(text, "\n\tcaused by: {}", cause);
        hops += 1;
        cursor = cause.source();
    }
    text
}

fn escape_markup(text: &str) -> String {
    text.replace('\t', INDENT_MARKER)
        .replace('\n', LINE_BREAK_MARKER)
}
