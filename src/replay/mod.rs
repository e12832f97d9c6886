//! Interactive stepping over a captured request log.
mod commands;
mod session;
mod shell;

#[cfg(test)]
mod tests;

pub use session::ReplaySession;
pub use shell::{PROMPT, run_shell};
