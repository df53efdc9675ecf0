//! Sign-up, membership payment and verification, in that order.

pub mod payment;
pub mod signup;

pub use payment::{
    format_card_number, format_expiry, sanitize_cvv, CardDetails, PaymentMethod,
    MEMBERSHIP_BENEFITS,
};
pub use signup::{sanitize_zipcode, SignUpErrors, SignUpField, SignUpForm, UserAccount};

use serde::{Deserialize, Serialize};

/// Where the member is in the onboarding flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OnboardingStep {
    SignUp,
    Payment,
    Verification,
    App,
}

/// Steps shown after payment while identity is checked by hand.
pub const VERIFICATION_NEXT_STEPS: &[&str] = &[
    "We verify your identity using your provided information",
    "You'll receive an email confirmation once approved",
    "Start sharing and discovering amazing clothes!",
];
