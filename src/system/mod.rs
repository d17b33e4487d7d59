//! # System Interaction Layer
//!
//! The boundary between the application state and the operating system.
//!
//! - **`executor`**: spawns the resolved emacs command line (or prints it in
//!   dry-run mode) and reports its exit status.

/// Running or printing an argument vector.
pub mod executor;
