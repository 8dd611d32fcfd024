//! CLI domain: parse, route, output, and presentation only.
//! No generation logic; the route table hands off to the orchestrator.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_generation_json, format_generation_text, format_validation_text};
pub use route::RunContext;
