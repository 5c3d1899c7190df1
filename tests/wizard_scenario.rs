use chrono::NaiveDate;
use spacebook::{
    core::{
        format_budget, format_guests, format_location, is_budget_complete,
        is_date_time_complete, is_location_complete, BookingFlow, BookingWizard,
        NavigationEvent, RecordingHost, Screen, SectionMode,
    },
    domain::{
        BudgetRange, GuestCount, LocationChoice, Schedule, Section, SectionValue,
    },
    init,
};

#[test]
fn full_booking_form_reaches_search() {
    init();

    let mut wizard = BookingWizard::default();
    assert_eq!(wizard.active(), Some(Section::Location));
    assert_eq!(wizard.primary_action(BookingFlow::InstantBooking).label, "Save");

    wizard.activate(Section::Location);
    wizard.update(SectionValue::Location(LocationChoice {
        value: Some("Downtown, Calgary".into()),
        is_flexible: false,
    }));
    wizard.complete_section(Section::Location);

    wizard.activate(Section::DateTime);
    wizard.update(SectionValue::DateTime(Schedule {
        date: None,
        time: None,
        is_date_flexible: true,
        is_time_flexible: true,
    }));
    wizard.complete_section(Section::DateTime);

    wizard.activate(Section::Guests);
    wizard.complete_section(Section::Guests);

    wizard.activate(Section::Budget);
    wizard.complete_section(Section::Budget);

    assert_eq!(
        wizard.completed().iter().copied().collect::<Vec<_>>(),
        Section::ALL.to_vec()
    );
    assert!(wizard.can_submit());
    assert_eq!(
        wizard.primary_action(BookingFlow::InstantBooking).label,
        "Search"
    );
    assert!(Section::ALL
        .iter()
        .all(|section| wizard.section_mode(*section) == SectionMode::Completed));

    let mut host = RecordingHost::new();
    let payload = wizard
        .hand_off(BookingFlow::InstantBooking, &mut host)
        .expect("complete form hands off");
    assert_eq!(payload.location.as_deref(), Some("Downtown, Calgary"));
    assert_eq!(payload.guests, GuestCount::default());
    assert_eq!((payload.budget_min, payload.budget_max), (0.0, 200.0));
    assert!(matches!(
        host.events(),
        [NavigationEvent::Navigated {
            target: Screen::SearchResults,
            ..
        }]
    ));
}

#[test]
fn completion_predicate_reference_cases() {
    assert!(!is_location_complete(&LocationChoice {
        value: None,
        is_flexible: false
    }));
    assert!(is_location_complete(&LocationChoice {
        value: None,
        is_flexible: true
    }));
    assert!(is_date_time_complete(&Schedule::flexible()));
    assert!(!is_date_time_complete(&Schedule {
        date: NaiveDate::from_ymd_opt(2025, 7, 4),
        time: None,
        is_date_flexible: false,
        is_time_flexible: false,
    }));
    assert!(!is_budget_complete(&BudgetRange::new(50.0, 30.0)));
}

#[test]
fn formatter_reference_outputs() {
    assert_eq!(
        format_guests(&GuestCount {
            adults: 2,
            children: 1,
            infants: 0
        }),
        "2 Adults, 1 Child"
    );
    assert_eq!(
        format_guests(&GuestCount {
            adults: 1,
            children: 0,
            infants: 0
        }),
        "1 Adult"
    );
    assert_eq!(
        format_budget(&BudgetRange::new(20.0, 100.0)),
        "$20 - 100 per hour"
    );
    assert_eq!(
        format_location(&LocationChoice {
            value: None,
            is_flexible: true
        }),
        "Flexible"
    );
}

#[test]
fn clearing_a_saved_section_returns_it_to_untouched() {
    let mut wizard = BookingWizard::default();
    wizard.set_location_text("Gastown, Vancouver");
    wizard.complete_section(Section::Location);
    assert_eq!(wizard.section_mode(Section::Location), SectionMode::Completed);

    wizard.clear_section(Section::Location);
    assert_eq!(wizard.section_mode(Section::Location), SectionMode::Untouched);
    assert_eq!(wizard.draft().location, LocationChoice::default());
    assert_eq!(wizard.active(), None);
}
