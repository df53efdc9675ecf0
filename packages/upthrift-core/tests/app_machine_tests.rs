//! End-to-end flows through the application machine.

use chrono::{TimeZone, Utc};
use std::time::Duration;
use upthrift_core::common::ListingId;
use upthrift_core::domains::chat::mock_conversations;
use upthrift_core::domains::contributions::{ContributionForm, SUCCESS_NOTICE};
use upthrift_core::domains::listings::seed::embedded_listings;
use upthrift_core::domains::listings::{FilterCriteria, Size};
use upthrift_core::domains::onboarding::{OnboardingStep, PaymentMethod, SignUpForm};
use upthrift_core::domains::preferences::FontSize;
use upthrift_core::domains::support::Author;
use upthrift_core::machines::{AppCommand, AppEvent, AppMachine, Machine, Tab};
use upthrift_core::Config;

fn machine() -> AppMachine {
    AppMachine::new(Config::default(), embedded_listings().unwrap()).with_seed(42)
}

/// Run `event` and every scheduled follow-up, ignoring the delays.
fn run(machine: &mut AppMachine, event: AppEvent) -> Vec<AppCommand> {
    let mut commands = Vec::new();
    let mut next = Some(event);
    while let Some(event) = next.take() {
        if let Some(command) = machine.decide(&event) {
            if let AppCommand::Schedule { event, .. } = &command {
                next = Some((**event).clone());
            }
            commands.push(command);
        }
    }
    commands
}

fn signed_up() -> AppMachine {
    let mut machine = machine();
    let account = SignUpForm {
        name: "Jessica Thompson".into(),
        zipcode: "11201".into(),
        ..SignUpForm::default()
    }
    .validate()
    .unwrap();
    machine.decide(&AppEvent::SignedUp(account));
    machine
}

fn in_app() -> AppMachine {
    let mut machine = signed_up();
    run(&mut machine, AppEvent::PaymentSubmitted(PaymentMethod::ApplePay));
    machine.decide(&AppEvent::EnterApp);
    machine
}

#[test]
fn onboarding_walks_through_every_step() {
    let mut machine = signed_up();
    assert_eq!(machine.step(), OnboardingStep::Payment);
    assert_eq!(machine.account().unwrap().first_name(), "Jessica");

    let command = machine.decide(&AppEvent::PaymentSubmitted(PaymentMethod::Card));
    assert_eq!(
        command,
        Some(AppCommand::schedule(
            Duration::from_millis(3000),
            AppEvent::PaymentProcessed
        ))
    );
    assert!(machine.is_payment_processing());

    let command = machine.decide(&AppEvent::PaymentProcessed);
    assert_eq!(machine.step(), OnboardingStep::Verification);
    assert!(!machine.is_demo_skip_visible());
    assert_eq!(
        command,
        Some(AppCommand::schedule(
            Duration::from_millis(3000),
            AppEvent::VerificationDemoReady
        ))
    );

    machine.decide(&AppEvent::VerificationDemoReady);
    assert!(machine.is_demo_skip_visible());

    machine.decide(&AppEvent::EnterApp);
    assert_eq!(machine.step(), OnboardingStep::App);
    assert_eq!(machine.tab(), Tab::Feed);
}

#[test]
fn double_payment_submission_schedules_once() {
    let mut machine = signed_up();

    assert!(machine
        .decide(&AppEvent::PaymentSubmitted(PaymentMethod::PayPal))
        .is_some());
    assert!(machine
        .decide(&AppEvent::PaymentSubmitted(PaymentMethod::PayPal))
        .is_none());
}

#[test]
fn back_from_payment_returns_to_sign_up() {
    let mut machine = signed_up();
    machine.decide(&AppEvent::BackToSignUp);

    assert_eq!(machine.step(), OnboardingStep::SignUp);
}

#[test]
fn payment_timer_still_lands_after_going_back() {
    let mut machine = signed_up();
    machine.decide(&AppEvent::PaymentSubmitted(PaymentMethod::Venmo));
    machine.decide(&AppEvent::BackToSignUp);

    machine.decide(&AppEvent::PaymentProcessed);

    assert_eq!(machine.step(), OnboardingStep::Verification);
}

#[test]
fn interest_opens_existing_chat_with_listing_context() {
    let mut machine = in_app();
    machine.decide(&AppEvent::ListingSelected(ListingId::new(1)));

    machine.decide(&AppEvent::InterestExpressed(ListingId::new(1)));

    assert_eq!(machine.tab(), Tab::Chat);
    assert!(machine.selected_listing().is_none());
    let active = machine.active_conversation().unwrap();
    assert_eq!(active.id, mock_conversations()[0].id);
    assert_eq!(
        active.prefilled_message(&machine.config().public_origin),
        "Hi! I'm interested in your Vintage Denim Jacket. Here's the listing: http://localhost:8080/#listing-1"
    );
}

#[test]
fn opening_a_conversation_marks_it_read() {
    let mut machine = in_app();
    let id = machine.conversations()[0].id;
    assert!(machine.conversations()[0].unread);

    machine.decide(&AppEvent::ConversationOpened(id));

    assert!(!machine.conversations()[0].unread);
    assert_eq!(machine.active_conversation().unwrap().context_listing, None);

    machine.decide(&AppEvent::ConversationClosed);
    assert!(machine.active_conversation().is_none());
}

#[test]
fn feed_events_reach_the_catalog() {
    let mut machine = in_app();

    machine.decide(&AppEvent::PageChanged(3));
    assert_eq!(machine.catalog().page(), 3);

    machine.decide(&AppEvent::FilterChanged(
        FilterCriteria::default().with_type("Shoes"),
    ));
    assert_eq!(machine.catalog().page(), 1);
    assert_eq!(machine.catalog().filtered().len(), 13);

    machine.decide(&AppEvent::BookmarkToggled(ListingId::new(5)));
    assert!(machine.catalog().is_bookmarked(ListingId::new(5)));
}

#[test]
fn support_reply_arrives_after_delay() {
    let mut machine = in_app();
    let sent_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    let command = machine.decide(&AppEvent::SupportMessageSent {
        text: "Is it safe?".into(),
        at: sent_at,
    });
    assert_eq!(machine.transcript().len(), 2);

    let Some(AppCommand::Schedule { after, event }) = command else {
        panic!("expected a scheduled reply");
    };
    assert_eq!(after, Duration::from_millis(1000));

    machine.decide(&event);
    let reply = &machine.transcript().messages()[2];
    assert_eq!(reply.author, Author::Bot);
    assert!(reply.text.starts_with("Your safety is important!"));
    assert_eq!(reply.timestamp, sent_at + chrono::Duration::seconds(1));
}

#[test]
fn blank_support_message_schedules_nothing() {
    let mut machine = in_app();

    let command = machine.decide(&AppEvent::SupportMessageSent {
        text: "  ".into(),
        at: Utc::now(),
    });

    assert_eq!(command, None);
    assert_eq!(machine.transcript().len(), 1);
}

#[test]
fn contribution_lands_on_profile() {
    let mut machine = in_app();
    let mut form = ContributionForm::default();
    form.title = "Rain Boots".into();
    form.size = Some(Size::S);
    form.color = "Yellow".into();
    form.style = "Casual".into();
    form.kind = "Shoes".into();
    form.condition = "Good".into();
    form.add_photos(vec!["data:image/jpeg;base64,/9j/".to_string()]);

    let command = machine.decide(&AppEvent::ContributionSubmitted {
        form,
        at: Utc::now(),
    });

    assert_eq!(command, Some(AppCommand::Notify(SUCCESS_NOTICE.to_string())));
    assert_eq!(machine.tab(), Tab::Profile);
    assert_eq!(machine.contributions().len(), 1);
    assert_eq!(machine.contributions()[0].title, "Rain Boots");
    assert_eq!(machine.profile().items_contributed_with(machine.contributions().len()), 24);
}

#[test]
fn invalid_contribution_is_dropped() {
    let mut machine = in_app();

    let command = machine.decide(&AppEvent::ContributionSubmitted {
        form: ContributionForm::default(),
        at: Utc::now(),
    });

    assert_eq!(command, None);
    assert!(machine.contributions().is_empty());
    assert_eq!(machine.tab(), Tab::Feed);
}

#[test]
fn font_size_and_tabs_update() {
    let mut machine = in_app();

    machine.decide(&AppEvent::FontSizeChanged(FontSize::Xl));
    machine.decide(&AppEvent::TabSelected(Tab::Settings));

    assert_eq!(machine.font_size(), FontSize::Xl);
    assert_eq!(machine.tab(), Tab::Settings);
}

#[test]
fn bio_edit_is_trimmed() {
    let mut machine = in_app();

    machine.decide(&AppEvent::BioUpdated("  Swapping coats all winter.  ".into()));

    assert_eq!(machine.profile().bio, "Swapping coats all winter.");
}

#[test]
fn clearing_filters_returns_to_configured_radius() {
    let config = Config {
        default_radius_miles: 2,
        ..Config::default()
    };
    let mut machine = AppMachine::new(config, embedded_listings().unwrap());
    assert_eq!(machine.catalog().filtered().len(), 1);

    machine.decide(&AppEvent::FilterChanged(
        FilterCriteria::default().with_style("Casual"),
    ));
    assert!(machine.catalog().filtered().len() > 1);

    machine.decide(&AppEvent::FiltersCleared);

    assert_eq!(machine.catalog().criteria().radius, Some(2));
    assert_eq!(machine.catalog().filtered().len(), 1);
}
