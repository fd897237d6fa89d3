//! Signup Validation Core
//!
//! Pure validator functions used by the signup form rule set and by the
//! WASM bindings. Every function is side-effect free and works on borrowed
//! input, so the same checks run on both sides of the JS boundary.

pub mod collection;
pub mod date;
pub mod email;
pub mod numeric;
pub mod password;
pub mod string;

// Re-export all validators
pub use collection::*;
pub use date::*;
pub use email::*;
pub use numeric::*;
pub use password::*;
pub use string::*;
