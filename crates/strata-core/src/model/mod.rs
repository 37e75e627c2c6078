//! Declared record metadata.
//!
//! Record authors describe each record type once, statically: its path, its
//! name and its ordered fields with their declared kinds. Everything the
//! validators know about a type comes from here; nothing is inspected at
//! runtime.

pub mod field;
pub mod record;
pub mod set;
