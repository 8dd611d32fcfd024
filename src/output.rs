//! Output views: what a generated sample does with a method's response, and the
//! single-pass import collection over them.

mod collector;
mod view;

pub use collector::{collect_imports, collect_view_imports};
pub use view::{
    ArgSegment, CommentView, DefineView, LoopView, OutputView, PrintArg, PrintView,
    VariableSegment,
};
