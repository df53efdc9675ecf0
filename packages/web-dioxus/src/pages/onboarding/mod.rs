//! Sign-up, payment and verification pages

mod payment;
mod signup;
mod verification;

pub use payment::*;
pub use signup::*;
pub use verification::*;
