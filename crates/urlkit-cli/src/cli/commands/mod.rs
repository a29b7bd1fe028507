//! CLI command handlers, one per file.

mod completions;
mod compose;
mod head;
mod inspect;
mod session;
mod tour;

pub use completions::{run_completions, run_manpage};
pub use compose::{parse_query_arg, run_compose};
pub use head::run_head;
pub use inspect::run_inspect;
pub use session::{run_session, SessionArgs};
pub use tour::run_tour;
