//! Fragment rendering.
//!
//! Walks a compiled formatter in order: text fragments are copied to the
//! output, argument fragments resolve their value from the request and are
//! rendered through formatter dispatch.

use crate::interpreter::{RenderContext, RenderError};
use crate::parser::{ArgumentRef, CompiledFormatter, Fragment};
use crate::types::{MessageRequest, Value};

/// Render `formatter` with the arguments of `request` in `locale`.
///
/// # Errors
///
/// Returns an error if:
/// - An argument reference cannot be resolved
/// - No formatter handles an argument's value
/// - A formatter fails (missing joiner text, invalid option, ...)
pub fn render(
    formatter: &CompiledFormatter,
    request: &MessageRequest,
    locale: &str,
    cx: &mut RenderContext<'_>,
) -> Result<String, RenderError> {
    let formatters = cx.service().formatters();
    let mut output = String::new();
    for fragment in formatter.fragments() {
        match fragment {
            Fragment::Text(text) => output.push_str(text),
            Fragment::Argument { reference, options } => {
                let value = resolve_argument(reference, request)?;
                output.push_str(&formatters.format(value, locale, options, cx)?);
            }
        }
    }
    Ok(output)
}

/// Look up the value an argument fragment refers to.
pub fn resolve_argument<'r>(
    reference: &ArgumentRef,
    request: &'r MessageRequest,
) -> Result<&'r Value, RenderError> {
    match reference {
        ArgumentRef::ByIndex(index) => {
            request
                .args()
                .get(*index)
                .ok_or_else(|| RenderError::ArgumentIndex {
                    index: *index,
                    len: request.args().len(),
                })
        }
        ArgumentRef::ByName(name) => {
            request
                .named_arg(name)
                .ok_or_else(|| RenderError::ArgumentName {
                    name: name.clone(),
                    available: request.named_args().keys().cloned().collect(),
                })
        }
    }
}
