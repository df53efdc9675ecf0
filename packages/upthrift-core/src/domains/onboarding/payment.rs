//! Membership payment. Nothing is charged; the form only formats input.

use serde::{Deserialize, Serialize};

pub const MEMBERSHIP_BENEFITS: &[&str] = &[
    "Verified community access",
    "Safe & trusted exchanges",
    "Premium support",
];

const MAX_CARD_DIGITS: usize = 16;
const MAX_CVV_DIGITS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Card,
    PayPal,
    ApplePay,
    Venmo,
}

impl PaymentMethod {
    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::ApplePay => "Apple Pay",
            PaymentMethod::Venmo => "Venmo",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Visa, Mastercard, American Express",
            PaymentMethod::PayPal => "Pay with your PayPal account",
            PaymentMethod::ApplePay => "Touch ID or Face ID",
            PaymentMethod::Venmo => "Pay with Venmo",
        }
    }

    pub fn variants() -> &'static [PaymentMethod] {
        &[
            PaymentMethod::Card,
            PaymentMethod::PayPal,
            PaymentMethod::ApplePay,
            PaymentMethod::Venmo,
        ]
    }

    /// Only cards ask for card details.
    pub fn needs_card_details(&self) -> bool {
        matches!(self, PaymentMethod::Card)
    }
}

/// Card fields as displayed, already formatted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDetails {
    pub number: String,
    pub expiry: String,
    pub cvv: String,
    pub name: String,
}

impl CardDetails {
    pub fn set_number(&mut self, input: &str) {
        self.number = format_card_number(input);
    }

    pub fn set_expiry(&mut self, input: &str) {
        self.expiry = format_expiry(input);
    }

    pub fn set_cvv(&mut self, input: &str) {
        self.cvv = sanitize_cvv(input);
    }
}

fn digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Group card digits in fours ("4242424242" -> "4242 4242 42").
///
/// Fewer than four digits are returned as typed; more than sixteen are cut.
pub fn format_card_number(input: &str) -> String {
    let digits = digits(input);
    if digits.len() < 4 {
        return digits;
    }
    digits
        .as_bytes()
        .chunks(4)
        .take(MAX_CARD_DIGITS / 4)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `MM/YY` once two digits are typed ("1227" -> "12/27").
pub fn format_expiry(input: &str) -> String {
    let digits = digits(input);
    if digits.len() < 2 {
        return digits;
    }
    let year: String = digits[2..].chars().take(2).collect();
    format!("{}/{}", &digits[..2], year)
}

pub fn sanitize_cvv(input: &str) -> String {
    digits(input).chars().take(MAX_CVV_DIGITS).collect()
}
