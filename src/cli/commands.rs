//! Command handlers. Each one maps a shell line onto booking form operations.

use chrono::NaiveDate;

use crate::catalog;
use crate::core::{BookingFlow, PrimaryOutcome, Screen};
use crate::domain::{GuestKind, Section, TimeOfDay, TimeRange};

use super::context::{CommandError, CommandResult, ShellContext};
use super::output;
use super::registry::{CommandEntry, CommandRegistry};
use super::render::{command_name, render_form};

const SUGGESTION_LIMIT: usize = 5;
/// Largest count accepted by a single `guests` command.
const MAX_GUEST_STEP: u32 = 100;

pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "help",
        "List commands or show usage for one",
        "help [command]",
        cmd_help,
    ));
    registry.register(CommandEntry::new(
        "status",
        "Show the booking form",
        "status",
        cmd_status,
    ));
    registry.register(CommandEntry::new(
        "edit",
        "Open a section for editing",
        "edit <location|datetime|guests|budget>",
        cmd_edit,
    ));
    registry.register(CommandEntry::new(
        "close",
        "Collapse the open section without saving it",
        "close",
        cmd_close,
    ));
    registry.register(CommandEntry::new(
        "location",
        "Set where the space should be",
        "location <place…> | location flexible | location fixed",
        cmd_location,
    ));
    registry.register(CommandEntry::new(
        "suggest",
        "Look up location suggestions",
        "suggest <query…>",
        cmd_suggest,
    ));
    registry.register(CommandEntry::new(
        "date",
        "Set the booking date",
        "date <YYYY-MM-DD> | date flexible | date none",
        cmd_date,
    ));
    registry.register(CommandEntry::new(
        "time",
        "Set the booking time range",
        "time <start> <end> | time flexible | time none",
        cmd_time,
    ));
    registry.register(CommandEntry::new(
        "guests",
        "Add or remove guests",
        "guests <adults|children|infants> <+|-> [count]",
        cmd_guests,
    ));
    registry.register(CommandEntry::new(
        "budget",
        "Set the hourly budget bounds",
        "budget <min|max> <amount>",
        cmd_budget,
    ));
    registry.register(CommandEntry::new(
        "save",
        "Save the open section (or the named one)",
        "save [section]",
        cmd_save,
    ));
    registry.register(CommandEntry::new(
        "clear",
        "Reset a section to its default",
        "clear <section>",
        cmd_clear,
    ));
    registry.register(CommandEntry::new(
        "flow",
        "Choose instant booking or a match request",
        "flow <instant|match>",
        cmd_flow,
    ));
    registry.register(CommandEntry::new(
        "submit",
        "Press the form's main button",
        "submit",
        cmd_submit,
    ));
    registry.register(CommandEntry::new(
        "next",
        "Continue to the next screen of the flow",
        "next",
        cmd_next,
    ));
    registry.register(CommandEntry::new(
        "back",
        "Return to the previous screen",
        "back",
        cmd_back,
    ));
    registry.register(CommandEntry::new(
        "cancel",
        "Abandon this booking and start over",
        "cancel",
        cmd_cancel,
    ));
    registry.register(CommandEntry::new(
        "exit",
        "Leave the shell",
        "exit",
        cmd_exit,
    ));
    registry.alias("quit", "exit");
    registry.alias("where", "location");
    registry.alias("open", "edit");
}

fn invalid(usage: &str) -> CommandError {
    CommandError::InvalidArguments(format!("Usage: {}", usage))
}

fn parse_section(raw: &str) -> Result<Section, CommandError> {
    raw.parse::<Section>().map_err(CommandError::from)
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let entry = context
            .registry
            .get(&name.to_ascii_lowercase())
            .ok_or_else(|| CommandError::InvalidArguments(format!("No command named `{}`", name)))?;
        output::info(format!("{} - {}", entry.name, entry.description));
        output::info(format!("Usage: {}", entry.usage));
        let aliases = context.registry.aliases_for(entry.name);
        if !aliases.is_empty() {
            output::info(format!("Aliases: {}", aliases.join(", ")));
        }
        return Ok(());
    }

    output::section("Commands");
    for line in context.registry.help_lines() {
        output::info(line);
    }
    Ok(())
}

fn cmd_status(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section(format!("Booking ({})", context.flow()));
    if context.screen() != Screen::BookingForm {
        output::info(format!(
            "Screen {}/{}: {}",
            context.stepper.index() + 1,
            context.stepper.total(),
            context.screen()
        ));
        if let Some(payload) = context.host.last_payload() {
            output::info(format!("Request {}", payload.request_id));
        }
        return Ok(());
    }
    for line in render_form(&context.wizard, context.flow()) {
        output::info(line);
    }
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.ensure_on_form()?;
    let [raw] = args else {
        return Err(invalid("edit <location|datetime|guests|budget>"));
    };
    let section = parse_section(raw)?;
    context.wizard.activate(section);
    cmd_status(context, &[])
}

fn cmd_close(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.ensure_on_form()?;
    context.wizard.deactivate();
    Ok(())
}

fn cmd_location(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.ensure_on_form()?;
    if args.is_empty() {
        return Err(invalid("location <place…> | location flexible | location fixed"));
    }
    context.wizard.activate(Section::Location);
    match args {
        [flag] if flag.eq_ignore_ascii_case("flexible") => {
            context.wizard.set_location_flexible(true)
        }
        [flag] if flag.eq_ignore_ascii_case("fixed") => context.wizard.set_location_flexible(false),
        words => context.wizard.set_location_text(&words.join(" ")),
    }
    output::info(format!(
        "Location: {}",
        crate::core::format_location(&context.wizard.draft().location)
    ));
    Ok(())
}

fn cmd_suggest(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let query = args.join(" ");
    let results = catalog::suggest(&query, SUGGESTION_LIMIT);
    if results.is_empty() {
        output::info("No suggestions.");
    }
    for entry in results {
        output::info(format!("  {}", entry.label()));
    }
    Ok(())
}

fn cmd_date(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.ensure_on_form()?;
    let [raw] = args else {
        return Err(invalid("date <YYYY-MM-DD> | date flexible | date none"));
    };
    context.wizard.activate(Section::DateTime);
    match raw.to_ascii_lowercase().as_str() {
        "flexible" => context.wizard.set_date_flexible(true),
        "none" => {
            context.wizard.set_date(None);
            context.wizard.set_date_flexible(false);
        }
        value => {
            let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
                CommandError::InvalidArguments(format!("`{}` is not a YYYY-MM-DD date", raw))
            })?;
            context.wizard.set_date(Some(date));
            context.wizard.set_date_flexible(false);
        }
    }
    report_date_time(context);
    Ok(())
}

fn cmd_time(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.ensure_on_form()?;
    context.wizard.activate(Section::DateTime);
    match args {
        [flag] if flag.eq_ignore_ascii_case("flexible") => context.wizard.set_time_flexible(true),
        [flag] if flag.eq_ignore_ascii_case("none") => {
            context.wizard.set_time_range(None);
            context.wizard.set_time_flexible(false);
        }
        [start, end] => {
            let start = start.parse::<TimeOfDay>()?;
            let end = end.parse::<TimeOfDay>()?;
            if end.minutes_since_midnight() <= start.minutes_since_midnight() {
                output::warning("The end time is not after the start time.");
            }
            context.wizard.set_time_range(Some(TimeRange::new(start, end)));
            context.wizard.set_time_flexible(false);
        }
        _ => return Err(invalid("time <start> <end> | time flexible | time none")),
    }
    report_date_time(context);
    Ok(())
}

fn report_date_time(context: &ShellContext) {
    let summary = crate::core::format_date_time(&context.wizard.draft().schedule);
    if summary.is_empty() {
        output::info("Date & Time: (not set)");
    } else {
        output::info(format!("Date & Time: {}", summary));
    }
}

fn cmd_guests(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    const USAGE: &str = "guests <adults|children|infants> <+|-> [count]";
    context.ensure_on_form()?;
    let (kind, direction, count) = match args {
        [kind, direction] => (kind, direction, 1),
        [kind, direction, count] => {
            let count = count
                .parse::<u32>()
                .ok()
                .filter(|count| *count <= MAX_GUEST_STEP)
                .ok_or_else(|| {
                    CommandError::InvalidArguments(format!(
                        "`{}` is not a count between 0 and {}",
                        count, MAX_GUEST_STEP
                    ))
                })?;
            (kind, direction, count)
        }
        _ => return Err(invalid(USAGE)),
    };
    let kind = kind.parse::<GuestKind>()?;
    let adding = match *direction {
        "+" | "add" => true,
        "-" | "remove" => false,
        _ => return Err(invalid(USAGE)),
    };
    context.wizard.activate(Section::Guests);
    for _ in 0..count {
        let before = context.wizard.draft().guests.get(kind);
        if adding {
            context.wizard.increment_guests(kind);
        } else {
            context.wizard.decrement_guests(kind);
        }
        if context.wizard.draft().guests.get(kind) == before {
            break;
        }
    }
    output::info(format!(
        "Guests: {}",
        crate::core::format_guests(&context.wizard.draft().guests)
    ));
    Ok(())
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    const USAGE: &str = "budget <min|max> <amount>";
    context.ensure_on_form()?;
    let [bound, amount] = args else {
        return Err(invalid(USAGE));
    };
    let amount = amount
        .trim_start_matches('$')
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CommandError::InvalidArguments(format!("`{}` is not an amount", amount)))?;
    context.wizard.activate(Section::Budget);
    match bound.to_ascii_lowercase().as_str() {
        "min" => context.wizard.set_budget_min(amount),
        "max" => context.wizard.set_budget_max(amount),
        _ => return Err(invalid(USAGE)),
    }
    output::info(format!(
        "Budget: {}",
        crate::core::format_budget(&context.wizard.draft().budget)
    ));
    Ok(())
}

fn cmd_save(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.ensure_on_form()?;
    let section = match args {
        [] => context.wizard.active().ok_or_else(|| {
            CommandError::InvalidArguments("No section is open. Use `edit <section>` first.".into())
        })?,
        [raw] => parse_section(raw)?,
        _ => return Err(invalid("save [section]")),
    };
    context.wizard.complete_section(section);
    output::success(format!("{} saved.", section));
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.ensure_on_form()?;
    let [raw] = args else {
        return Err(invalid("clear <section>"));
    };
    let section = parse_section(raw)?;
    context.wizard.clear_section(section);
    output::success(format!("{} cleared.", section));
    Ok(())
}

fn cmd_flow(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.ensure_on_form()?;
    let [raw] = args else {
        return Err(invalid("flow <instant|match>"));
    };
    let flow = raw.parse::<BookingFlow>()?;
    context.stepper = crate::core::FlowStepper::new(flow);
    output::success(format!("Using the {} flow.", flow));
    Ok(())
}

fn cmd_submit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.ensure_on_form()?;
    let flow = context.flow();
    match context.wizard.press_primary(flow) {
        PrimaryOutcome::Saved(section) => {
            output::success(format!("{} saved.", section));
            let remaining: Vec<&str> = crate::core::incomplete_sections(context.wizard.draft())
                .into_iter()
                .map(command_name)
                .collect();
            output::hint(format!("Still needed: {}", remaining.join(", ")));
            Ok(())
        }
        PrimaryOutcome::Blocked(missing) => Err(crate::errors::BookingError::Incomplete(missing).into()),
        PrimaryOutcome::Submitted(payload) => {
            let payload = context.wizard.send(payload, &mut context.host)?;
            context.stepper.jump_to(flow.hand_off_target())?;
            output::success(format!("{} → {}", flow.submit_label(), context.screen()));
            output::info(payload.to_json()?);
            Ok(())
        }
    }
}

fn cmd_next(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.screen() == Screen::BookingForm {
        return cmd_submit(context, &[]);
    }
    if context.stepper.advance() {
        output::info(format!("Now on: {}", context.screen()));
        if context.stepper.is_finished() {
            output::success("Booking confirmed.");
        }
    } else {
        output::warning("Already on the last screen.");
    }
    Ok(())
}

fn cmd_back(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.stepper.back() {
        output::info(format!("Now on: {}", context.screen()));
    } else {
        output::warning("Already on the booking form.");
    }
    Ok(())
}

fn cmd_cancel(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.wizard.cancel(&mut context.host)?;
    let flow = context.flow();
    context.restart(flow);
    output::info("Booking cancelled. The form has been reset.");
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}

#[cfg(test)]
mod tests {
    use crate::cli::context::{CliMode, ShellContext};
    use crate::config::Config;
    use crate::core::{NavigationEvent, Screen};
    use crate::domain::{GuestKind, Section};

    fn shell() -> ShellContext {
        ShellContext::with_config(CliMode::Script, Config::default())
    }

    fn run(context: &mut ShellContext, lines: &[&str]) {
        for line in lines {
            context.process_line(line).expect("command succeeds");
        }
    }

    #[test]
    fn quoted_location_is_kept_whole() {
        let mut context = shell();
        run(&mut context, &["location \"Downtown, Calgary\"", "save"]);
        assert_eq!(
            context.wizard().draft().location.value.as_deref(),
            Some("Downtown, Calgary")
        );
        assert!(context.wizard().is_completed(Section::Location));
    }

    #[test]
    fn guest_commands_respect_floor() {
        let mut context = shell();
        run(&mut context, &["guests adults - 3", "guests children + 2"]);
        let guests = context.wizard().draft().guests;
        assert_eq!(guests.get(GuestKind::Adults), 1);
        assert_eq!(guests.get(GuestKind::Children), 2);
        assert_eq!(context.wizard().active(), Some(Section::Guests));
    }

    #[test]
    fn guest_direction_is_checked_even_for_zero_counts() {
        let mut context = shell();
        assert!(context.process_line("guests adults sideways 0").is_err());
        assert!(context.process_line("guests adults sideways").is_err());
        assert_eq!(context.wizard().active(), Some(Section::Location));
    }

    #[test]
    fn oversized_guest_counts_are_refused() {
        let mut context = shell();
        assert!(context.process_line("guests adults + 4000000000").is_err());
        assert!(context.process_line("guests adults + 101").is_err());
        assert_eq!(context.wizard().draft().guests.get(GuestKind::Adults), 1);

        run(&mut context, &["guests infants + 100", "guests infants - 100"]);
        assert_eq!(context.wizard().draft().guests.get(GuestKind::Infants), 0);
    }

    #[test]
    fn negative_zero_budget_prints_without_sign() {
        let mut context = shell();
        run(&mut context, &["budget min -0"]);
        let budget = context.wizard().draft().budget;
        assert!(budget.min.is_sign_positive());
        assert_eq!(crate::core::format_budget(&budget), "$0 - 200 per hour");
    }

    #[test]
    fn bad_arguments_are_reported_not_applied() {
        let mut context = shell();
        assert!(context.process_line("date 07/04/2025").is_err());
        assert!(context.process_line("time 9am").is_err());
        assert!(context.process_line("budget max lots").is_err());
        assert_eq!(context.wizard().draft().schedule.date, None);
    }

    #[test]
    fn submit_hands_off_and_moves_screen() {
        let mut context = shell();
        run(
            &mut context,
            &[
                "flow match",
                "location flexible",
                "date 2025-07-04",
                "time 9am 11:30am",
                "submit",
            ],
        );
        assert_eq!(context.screen(), Screen::MatchDetails);
        assert!(matches!(
            context.host().events(),
            [NavigationEvent::Navigated {
                target: Screen::MatchDetails,
                ..
            }]
        ));
        assert!(context.process_line("location Elsewhere").is_err());

        let request_id = context.host().last_payload().map(|payload| payload.request_id);
        assert!(request_id.is_some());
        run(&mut context, &["status", "next", "next", "next"]);
        assert_eq!(context.screen(), Screen::Confirmation);
        assert_eq!(
            context.host().last_payload().map(|payload| payload.request_id),
            request_id
        );
    }

    #[test]
    fn cancel_resets_the_form() {
        let mut context = shell();
        run(&mut context, &["location Mission", "save", "cancel"]);
        assert!(context.wizard().completed().is_empty());
        assert_eq!(context.wizard().draft().location.value, None);
        assert_eq!(context.host().events(), &[NavigationEvent::Dismissed]);
    }

    #[test]
    fn help_accepts_aliases_and_rejects_unknown_names() {
        let mut context = shell();
        run(&mut context, &["help", "help quit", "help where"]);
        assert!(context.process_line("help teleport").is_err());
    }

    #[test]
    fn exit_stops_the_loop() {
        let mut context = shell();
        let control = context.process_line("quit").unwrap();
        assert_eq!(control, crate::cli::context::LoopControl::Exit);
        assert_eq!(context.last_command(), Some("quit"));
    }
}
