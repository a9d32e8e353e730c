//! Decorator: attach responsibilities to an object by wrapping it.
//!
//! Every wrapper implements the same trait as the thing it wraps and owns the
//! next layer in a `Box`. A wrapper forwards what it doesn't override; when it
//! does override, it must still call the next layer itself.
//!
//! Chains are built inside out: the base first, the outermost layer last,
//! and only the outermost layer is handed to the caller.

pub mod backpack;
pub mod visual;
