//! How a newly observed operation is folded into an existing path item.
//!
//! A later record for the same path and method replaces the operation's
//! description, operation id and parameters wholesale. Responses are the
//! exception: they accumulate per status code, and a repeated status code
//! overwrites only its own entry.

use super::document::{Operation, PathItem};

/// Install `fresh` under `method`, carrying over the responses recorded by any
/// earlier operation for the same method. Returns the installed operation so
/// the caller can add this record's response to it.
pub fn replace_operation<'a>(
    path_item: &'a mut PathItem,
    method: &str,
    fresh: Operation,
) -> &'a mut Operation {
    let (index, previous) = path_item.insert_full(method.to_string(), fresh);
    let installed = &mut path_item[index];
    if let Some(previous) = previous {
        let mut responses = previous.responses;
        // Same status from the fresh operation wins.
        responses.extend(std::mem::take(&mut installed.responses));
        installed.responses = responses;
    }
    installed
}
