//! Patchsub: rename words across a series of git patches.
//!
//! A commit range is exported as patch files, every added line is run
//! through an ordered list of literal substitutions, and the result is
//! propagated to matching deletion and context lines in later patches so
//! that the series still applies when re-imported.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod git;
pub mod logging;
pub mod rewrite;
pub mod rules;

#[cfg(test)]
mod test_support;
