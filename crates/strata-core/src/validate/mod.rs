//! Declaration validators.
//!
//! Each validator resolves its selector, applies its shape rule to every
//! resolved field, and only then hands the candidate to the registry, which
//! owns conflict detection. Any failure leaves the registry untouched.

pub mod state_definer;
pub mod unique;

pub use state_definer::mark_state_definer;
pub use unique::mark_unique;

#[cfg(test)]
mod property;
