//! mycat core
//!
//! The line-transformation and multi-source streaming pipeline.
//!
//! ```text
//! sources ──► access check ──► open (VFS / stdin) ──► lines
//!                                                     │
//!              StreamState (line number, last blank) ◄┤ advance
//!                                                     ▼
//!                                  number prefix + transform ──► output
//! ```
//!
//! Nothing here touches process-global state: stdin, stdout and stderr
//! are passed in by the caller, which keeps every stage testable.

pub mod access;
pub mod error;
pub mod processor;
pub mod source;
pub mod state;
pub mod transform;

pub use access::check_access;
pub use error::{CatError, SourceError};
pub use processor::{process_reader, Concatenator, ExitStatus, Pass, RunReport};
pub use source::Source;
pub use state::{LineAction, StreamState};
pub use transform::{transform, write_transformed};

pub use mycat_config::{Config, NumberingMode, Options};
