//! Session guard and forced-logout plumbing.

pub mod guard;
pub mod unauthorized;
