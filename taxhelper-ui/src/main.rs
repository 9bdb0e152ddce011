use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use taxhelper_core::assistant::{QueryResponder, open_conversation};
use taxhelper_core::{SlabSchedule, TaxCalculator};
use taxhelper_ui::capabilities::{DEFAULT_SCALE_POINTS, DisplayScale, NoDictation};
use taxhelper_ui::chat::{self, ChatCommand};
use taxhelper_ui::notify::{LogNotifier, Notifier};
use taxhelper_ui::{export, form, report};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Interactive income tax helper.
///
/// Walks through an income and deduction form, prints the tax report, and
/// opens the assistant panel for follow-up questions.
#[derive(Debug, Parser)]
struct Cli {
    /// Slab policy used for the computation.
    #[arg(long, value_enum, default_value_t = PolicyArg::A)]
    policy: PolicyArg,

    /// Write the report as an HTML document after the form.
    #[arg(long)]
    export: Option<PathBuf>,

    /// Initial display scale in points (12-24).
    #[arg(long, default_value_t = DEFAULT_SCALE_POINTS)]
    scale: u8,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum PolicyArg {
    #[default]
    A,
    B,
}

impl From<PolicyArg> for SlabSchedule {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::A => SlabSchedule::policy_a(),
            PolicyArg::B => SlabSchedule::policy_b(),
        }
    }
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let schedule = SlabSchedule::from(cli.policy);
    let mut scale = DisplayScale::new(cli.scale);
    debug!(policy = schedule.name(), scale = scale.points(), "starting");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    writeln!(output, "Welcome to TaxHelper. Let's make taxes simple together.\n")?;
    let mut dictation = NoDictation;
    let taxpayer = form::collect_taxpayer(&mut input, &mut output, &mut dictation)?;
    writeln!(
        output,
        "\nHello, {}! I'll walk you through your income details.\n",
        taxpayer.name
    )?;

    let profile = form::collect_profile(&mut input, &mut output)?;
    let result = TaxCalculator::new(&schedule).compute(&profile);

    writeln!(output)?;
    writeln!(
        output,
        "{}",
        report::render_report(&taxpayer, &result, &schedule, scale)
    )?;

    if let Some(path) = cli.export.as_deref() {
        export::write_html(path, &taxpayer, &result, schedule.name())?;
    }

    // ─── assistant panel ─────────────────────────────────────────────────

    let notifier = LogNotifier;
    let responder = QueryResponder::default();
    let mut conversation = open_conversation();

    if let Some(greeting) = conversation.last() {
        writeln!(output, "{}", chat::render_turn(greeting))?;
    }
    writeln!(output, "{}\n", chat::HELP_TEXT)?;

    loop {
        write!(output, "you> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        if let Some(command) = chat::parse_command(&line) {
            match command {
                ChatCommand::Quit => break,
                ChatCommand::Help => writeln!(output, "{}", chat::HELP_TEXT)?,
                ChatCommand::Export(path) => {
                    export::write_html(&path, &taxpayer, &result, schedule.name())?;
                    writeln!(output, "Report written to {}.", path.display())?;
                }
                ChatCommand::Email => {
                    notifier.acknowledge_report(&taxpayer)?;
                    writeln!(output, "Your tax report has been sent to your email.")?;
                }
                ChatCommand::Bigger => {
                    scale.increase();
                    writeln!(
                        output,
                        "{}",
                        report::render_report(&taxpayer, &result, &schedule, scale)
                    )?;
                }
                ChatCommand::Smaller => {
                    scale.decrease();
                    writeln!(
                        output,
                        "{}",
                        report::render_report(&taxpayer, &result, &schedule, scale)
                    )?;
                }
            }
            continue;
        }

        if let Some(answer) = responder.respond(line.trim_end(), &mut conversation) {
            writeln!(output, "assistant> {answer}")?;
        }
    }

    writeln!(output, "\nGoodbye, {}!", taxpayer.name)?;
    Ok(())
}
