use chrono::{DateTime, Utc};

use super::tabs::Tab;
use crate::common::{ConversationId, ListingId};
use crate::domains::contributions::ContributionForm;
use crate::domains::listings::FilterCriteria;
use crate::domains::onboarding::{PaymentMethod, UserAccount};
use crate::domains::preferences::FontSize;

/// Everything that can happen to the application.
///
/// Request events come from views; `PaymentProcessed`,
/// `VerificationDemoReady` and `SupportReplyReady` only arrive through a
/// scheduled timer.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    // Onboarding
    SignedUp(UserAccount),
    BackToSignUp,
    PaymentSubmitted(PaymentMethod),
    PaymentProcessed,
    VerificationDemoReady,
    EnterApp,

    // Shell
    TabSelected(Tab),
    FontSizeChanged(FontSize),

    // Feed
    FilterChanged(FilterCriteria),
    FiltersCleared,
    PageChanged(usize),
    NextPage,
    PreviousPage,
    BookmarkToggled(ListingId),
    ListingSelected(ListingId),
    ListingClosed,
    VirtualTryOnRequested,
    InterestExpressed(ListingId),

    // Chat
    ConversationOpened(ConversationId),
    ConversationClosed,

    // Support
    SupportMessageSent { text: String, at: DateTime<Utc> },
    SupportReplyReady { text: String, at: DateTime<Utc> },

    // Contribute / profile
    ContributionSubmitted { form: ContributionForm, at: DateTime<Utc> },
    BioUpdated(String),
}
