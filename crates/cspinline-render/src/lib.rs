//! Rendering utilities for the page layer (CSP directives, script elements,
//! terminal summaries).

#![forbid(unsafe_code)]

mod directive;
mod model;
mod script;
mod summary;

pub use directive::script_src_source;
pub use model::{RenderableDecision, RenderableMode, RenderableTraceEntry};
pub use script::inline_script_element;
pub use summary::render_summary;
