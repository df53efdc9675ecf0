//! The application machine: onboarding steps, shell navigation and every
//! tab's state in one value.

use chrono::Utc;
use tracing::{debug, info, warn};

use super::commands::AppCommand;
use super::events::AppEvent;
use super::tabs::Tab;
use super::Machine;
use crate::common::ListingId;
use crate::config::Config;
use crate::domains::chat::{mock_conversations, open_chat, ActiveConversation, ChatContext, Conversation};
use crate::domains::contributions::{Contribution, SUCCESS_NOTICE};
use crate::domains::listings::{load_listings, FilterCriteria, Listing, ListingCatalog};
use crate::domains::onboarding::{OnboardingStep, UserAccount};
use crate::domains::preferences::FontSize;
use crate::domains::profile::{current_user, UserProfile};
use crate::domains::support::Transcript;
use crate::error::CatalogError;

pub const VIRTUAL_TRY_ON_NOTICE: &str = "Virtual try-on feature coming soon!";

#[derive(Debug, Clone)]
pub struct AppMachine {
    config: Config,
    step: OnboardingStep,
    account: Option<UserAccount>,
    payment_processing: bool,
    demo_skip_visible: bool,
    tab: Tab,
    catalog: ListingCatalog,
    selected_listing: Option<ListingId>,
    conversations: Vec<Conversation>,
    active_conversation: Option<ActiveConversation>,
    transcript: Transcript,
    profile: UserProfile,
    contributions: Vec<Contribution>,
    font_size: FontSize,
    rng: fastrand::Rng,
}

impl AppMachine {
    pub fn new(config: Config, listings: Vec<Listing>) -> Self {
        let mut criteria = FilterCriteria::default();
        criteria.set_radius(config.default_radius_miles);
        let catalog = ListingCatalog::with_page_size(listings, config.page_size).with_criteria(criteria);

        Self {
            config,
            step: OnboardingStep::SignUp,
            account: None,
            payment_processing: false,
            demo_skip_visible: false,
            tab: Tab::default(),
            catalog,
            selected_listing: None,
            conversations: mock_conversations(),
            active_conversation: None,
            transcript: Transcript::new(Utc::now()),
            profile: current_user(),
            contributions: Vec::new(),
            font_size: FontSize::default(),
            rng: fastrand::Rng::new(),
        }
    }

    /// Build the machine with the listing seed named by `config`.
    pub fn from_config(config: Config) -> Result<Self, CatalogError> {
        let listings = load_listings(&config)?;
        Ok(Self::new(config, listings))
    }

    /// Fix the random source, for reproducible contribution distances.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn account(&self) -> Option<&UserAccount> {
        self.account.as_ref()
    }

    pub fn is_payment_processing(&self) -> bool {
        self.payment_processing
    }

    pub fn is_demo_skip_visible(&self) -> bool {
        self.demo_skip_visible
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn catalog(&self) -> &ListingCatalog {
        &self.catalog
    }

    pub fn selected_listing(&self) -> Option<&Listing> {
        self.selected_listing
            .and_then(|id| self.catalog.on_select_listing(id))
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn active_conversation(&self) -> Option<&ActiveConversation> {
        self.active_conversation.as_ref()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Session contributions, newest first.
    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    fn expect_step(&self, expected: OnboardingStep, event: &AppEvent) -> bool {
        if self.step == expected {
            true
        } else {
            warn!(step = ?self.step, ?event, "Ignoring event outside its onboarding step");
            false
        }
    }
}

impl Machine for AppMachine {
    type Event = AppEvent;
    type Command = AppCommand;

    fn decide(&mut self, event: &AppEvent) -> Option<AppCommand> {
        match event {
            // ----------------------------------------------------------------
            // Onboarding
            // ----------------------------------------------------------------
            AppEvent::SignedUp(account) => {
                if !self.expect_step(OnboardingStep::SignUp, event) {
                    return None;
                }
                info!(zipcode = %account.zipcode, "Sign-up complete, moving to payment");
                self.account = Some(account.clone());
                self.step = OnboardingStep::Payment;
                None
            }
            AppEvent::BackToSignUp => {
                info!("Returning to sign-up");
                self.step = OnboardingStep::SignUp;
                self.payment_processing = false;
                None
            }
            AppEvent::PaymentSubmitted(method) => {
                if !self.expect_step(OnboardingStep::Payment, event) {
                    return None;
                }
                if self.payment_processing {
                    warn!("Payment already processing");
                    return None;
                }
                info!(method = method.name(), "Processing membership payment");
                self.payment_processing = true;
                Some(AppCommand::schedule(
                    self.config.payment_delay,
                    AppEvent::PaymentProcessed,
                ))
            }
            AppEvent::PaymentProcessed => {
                // Timers are not cancelled, so this lands even if the member
                // went back in the meantime.
                info!("Payment processed, awaiting verification");
                self.payment_processing = false;
                self.demo_skip_visible = false;
                self.step = OnboardingStep::Verification;
                Some(AppCommand::schedule(
                    self.config.verification_delay,
                    AppEvent::VerificationDemoReady,
                ))
            }
            AppEvent::VerificationDemoReady => {
                debug!("Verification skip button available");
                self.demo_skip_visible = true;
                None
            }
            AppEvent::EnterApp => {
                if !self.expect_step(OnboardingStep::Verification, event) {
                    return None;
                }
                info!("Entering app");
                self.step = OnboardingStep::App;
                self.tab = Tab::Feed;
                None
            }

            // ----------------------------------------------------------------
            // Shell
            // ----------------------------------------------------------------
            AppEvent::TabSelected(tab) => {
                debug!(tab = tab.label(), "Tab selected");
                self.tab = *tab;
                None
            }
            AppEvent::FontSizeChanged(size) => {
                debug!(size = size.label(), "Font size changed");
                self.font_size = *size;
                None
            }

            // ----------------------------------------------------------------
            // Feed
            // ----------------------------------------------------------------
            AppEvent::FilterChanged(criteria) => {
                self.catalog.on_filter_change(criteria.clone());
                None
            }
            AppEvent::FiltersCleared => {
                self.catalog.on_filters_cleared();
                None
            }
            AppEvent::PageChanged(page) => {
                self.catalog.on_page_change(*page);
                None
            }
            AppEvent::NextPage => {
                self.catalog.next_page();
                None
            }
            AppEvent::PreviousPage => {
                self.catalog.previous_page();
                None
            }
            AppEvent::BookmarkToggled(id) => {
                self.catalog.on_bookmark_toggle(*id);
                None
            }
            AppEvent::ListingSelected(id) => {
                if self.catalog.on_select_listing(*id).is_some() {
                    self.selected_listing = Some(*id);
                } else {
                    warn!(listing_id = %id, "Selected listing does not exist");
                }
                None
            }
            AppEvent::ListingClosed => {
                self.selected_listing = None;
                None
            }
            AppEvent::VirtualTryOnRequested => {
                Some(AppCommand::Notify(VIRTUAL_TRY_ON_NOTICE.to_string()))
            }
            AppEvent::InterestExpressed(id) => {
                let Some(listing) = self.catalog.on_select_listing(*id).cloned() else {
                    warn!(listing_id = %id, "Interest in unknown listing");
                    return None;
                };
                info!(listing_id = %id, contributor = %listing.contributor.name, "Opening chat about listing");
                let context = ChatContext::for_listing(listing);
                self.active_conversation = Some(open_chat(&self.conversations, &context));
                self.selected_listing = None;
                self.tab = Tab::Chat;
                None
            }

            // ----------------------------------------------------------------
            // Chat
            // ----------------------------------------------------------------
            AppEvent::ConversationOpened(id) => {
                match self.conversations.iter_mut().find(|c| c.id == *id) {
                    Some(conversation) => {
                        conversation.unread = false;
                        self.active_conversation =
                            Some(ActiveConversation::from_conversation(conversation));
                    }
                    None => warn!(conversation_id = %id, "Unknown conversation"),
                }
                None
            }
            AppEvent::ConversationClosed => {
                self.active_conversation = None;
                None
            }

            // ----------------------------------------------------------------
            // Support
            // ----------------------------------------------------------------
            AppEvent::SupportMessageSent { text, at } => {
                let reply = self.transcript.send(text, *at)?;
                let delay = self.config.support_reply_delay;
                let reply_at = *at
                    + chrono::Duration::from_std(delay).unwrap_or_else(|_| chrono::Duration::zero());
                Some(AppCommand::schedule(
                    delay,
                    AppEvent::SupportReplyReady {
                        text: reply.to_string(),
                        at: reply_at,
                    },
                ))
            }
            AppEvent::SupportReplyReady { text, at } => {
                self.transcript.reply(text.clone(), *at);
                None
            }

            // ----------------------------------------------------------------
            // Contribute / profile
            // ----------------------------------------------------------------
            AppEvent::ContributionSubmitted { form, at } => {
                match form.submit(self.profile.as_contributor(), &mut self.rng, *at) {
                    Ok(contribution) => {
                        info!(contribution_id = %contribution.id, "Contribution posted");
                        self.contributions.insert(0, contribution);
                        self.tab = Tab::Profile;
                        Some(AppCommand::Notify(SUCCESS_NOTICE.to_string()))
                    }
                    Err(error) => {
                        warn!(%error, "Rejected contribution");
                        None
                    }
                }
            }
            AppEvent::BioUpdated(bio) => {
                self.profile.bio = bio.trim().to_string();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::listings::seed::embedded_listings;

    fn machine() -> AppMachine {
        AppMachine::new(Config::default(), embedded_listings().unwrap())
    }

    #[test]
    fn starts_on_sign_up_with_feed_tab() {
        let machine = machine();

        assert_eq!(machine.step(), OnboardingStep::SignUp);
        assert_eq!(machine.tab(), Tab::Feed);
        assert_eq!(machine.transcript().len(), 1);
        assert_eq!(machine.catalog().total_pages(), 5);
    }

    #[test]
    fn enter_app_requires_verification_step() {
        let mut machine = machine();

        assert_eq!(machine.decide(&AppEvent::EnterApp), None);
        assert_eq!(machine.step(), OnboardingStep::SignUp);
    }

    #[test]
    fn virtual_try_on_notifies() {
        let mut machine = machine();

        assert_eq!(
            machine.decide(&AppEvent::VirtualTryOnRequested),
            Some(AppCommand::Notify(VIRTUAL_TRY_ON_NOTICE.to_string()))
        );
    }

    #[test]
    fn clear_all_keeps_configured_radius() {
        let config = Config {
            default_radius_miles: 10,
            ..Config::default()
        };
        let mut machine = AppMachine::new(config, embedded_listings().unwrap());
        assert_eq!(machine.catalog().criteria().radius, Some(10));

        let mut criteria = machine.catalog().criteria().clone();
        criteria.set_radius(25);
        criteria.toggle_favorites_only();
        machine.decide(&AppEvent::FilterChanged(criteria));
        machine.decide(&AppEvent::FiltersCleared);

        assert_eq!(machine.catalog().criteria().radius, Some(10));
        assert!(!machine.catalog().criteria().show_favorites_only);
    }

    #[test]
    fn out_of_range_radius_is_clamped_to_slider() {
        let config = Config {
            default_radius_miles: 40,
            ..Config::default()
        };
        let machine = AppMachine::new(config, embedded_listings().unwrap());

        assert_eq!(machine.catalog().criteria().radius, Some(25));
    }

    #[test]
    fn selecting_unknown_listing_is_ignored() {
        let mut machine = machine();

        machine.decide(&AppEvent::ListingSelected(ListingId::new(999)));
        assert!(machine.selected_listing().is_none());

        machine.decide(&AppEvent::ListingSelected(ListingId::new(3)));
        assert_eq!(machine.selected_listing().map(|l| l.id), Some(ListingId::new(3)));
    }
}
