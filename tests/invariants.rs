use proptest::prelude::*;
use spacebook::{
    core::BookingWizard,
    domain::{BudgetRange, GuestKind, Section, SectionValue},
};

#[derive(Debug, Clone)]
enum GuestEdit {
    Increment(GuestKind),
    Decrement(GuestKind),
}

#[derive(Debug, Clone)]
enum BudgetEdit {
    Min(f64),
    Max(f64),
    Replace(f64, f64),
}

fn guest_kind() -> impl Strategy<Value = GuestKind> {
    prop_oneof![
        Just(GuestKind::Adults),
        Just(GuestKind::Children),
        Just(GuestKind::Infants),
    ]
}

fn guest_edit() -> impl Strategy<Value = GuestEdit> {
    prop_oneof![
        guest_kind().prop_map(GuestEdit::Increment),
        guest_kind().prop_map(GuestEdit::Decrement),
    ]
}

fn amount() -> impl Strategy<Value = f64> {
    prop_oneof![
        -500.0f64..500.0,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(0.0),
        Just(200.0),
    ]
}

fn budget_edit() -> impl Strategy<Value = BudgetEdit> {
    prop_oneof![
        amount().prop_map(BudgetEdit::Min),
        amount().prop_map(BudgetEdit::Max),
        (amount(), amount()).prop_map(|(min, max)| BudgetEdit::Replace(min, max)),
    ]
}

fn section() -> impl Strategy<Value = Section> {
    prop_oneof![
        Just(Section::Location),
        Just(Section::DateTime),
        Just(Section::Guests),
        Just(Section::Budget),
    ]
}

proptest! {
    #[test]
    fn guest_counters_never_cross_their_floor(edits in prop::collection::vec(guest_edit(), 0..64)) {
        let mut wizard = BookingWizard::default();
        for edit in edits {
            match edit {
                GuestEdit::Increment(kind) => wizard.increment_guests(kind),
                GuestEdit::Decrement(kind) => wizard.decrement_guests(kind),
            }
            let guests = wizard.draft().guests;
            prop_assert!(guests.adults >= 1);
            prop_assert!(guests.get(GuestKind::Children) >= GuestKind::Children.floor());
            prop_assert!(guests.get(GuestKind::Infants) >= GuestKind::Infants.floor());
        }
    }

    #[test]
    fn budget_stays_ordered_and_capped(edits in prop::collection::vec(budget_edit(), 0..64)) {
        let mut wizard = BookingWizard::default();
        for edit in edits {
            match edit {
                BudgetEdit::Min(value) => wizard.set_budget_min(value),
                BudgetEdit::Max(value) => wizard.set_budget_max(value),
                BudgetEdit::Replace(min, max) => {
                    wizard.update(SectionValue::Budget(BudgetRange::new(min, max)))
                }
            }
            let budget = wizard.draft().budget;
            prop_assert!(0.0 <= budget.min, "min {} below zero", budget.min);
            prop_assert!(budget.min <= budget.max, "{} > {}", budget.min, budget.max);
            prop_assert!(budget.max <= 200.0, "max {} above ceiling", budget.max);
        }
    }

    #[test]
    fn completing_is_idempotent(sections in prop::collection::vec(section(), 1..12)) {
        let mut once = BookingWizard::default();
        let mut twice = BookingWizard::default();
        for section in &sections {
            once.complete_section(*section);
            twice.complete_section(*section);
            twice.complete_section(*section);
        }
        prop_assert_eq!(once.completed(), twice.completed());
    }

    #[test]
    fn clear_always_uncompletes(target in section(), saved in prop::collection::vec(section(), 0..8)) {
        let mut wizard = BookingWizard::default();
        for section in saved {
            wizard.complete_section(section);
        }
        wizard.set_location_flexible(true);
        wizard.increment_guests(GuestKind::Adults);
        wizard.set_budget_min(40.0);
        let active = wizard.active();

        wizard.clear_section(target);
        prop_assert!(!wizard.is_completed(target));
        prop_assert_eq!(wizard.active(), active);
        let fresh = BookingWizard::default();
        prop_assert_eq!(
            wizard.draft().value(target),
            fresh.draft().value(target)
        );
    }
}
