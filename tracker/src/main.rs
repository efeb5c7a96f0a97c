use anyhow::Result;
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use log::{error, info};
use std::path::PathBuf;

use pregnancy_tracker::backend::domain::table_presentation::{day_label, ordinal};
use pregnancy_tracker::backend::domain::TrackerCommand;
use pregnancy_tracker::backend::storage::KeyValueStorage;
use pregnancy_tracker::{Tracker, TrackerConfig};
use shared::{CalendarDayType, RowHighlight};

/// Pregnancy due-date tracker
#[derive(Debug, Parser)]
#[command(name = "pregnancy-tracker", version, about)]
struct Cli {
    /// Directory holding the saved record and settings
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Set the due date (YYYY-MM-DD)
    DueDate { value: String },
    /// Save a note for a gestational day (0-286)
    Note { day: u32, text: String },
    /// Forget the due date and all notes
    Reset,
    /// Print the gestation table
    Table,
    /// Print the month calendar
    Calendar,
    /// Print the saved record as JSON
    Show,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = TrackerConfig::load(cli.data_dir)?;
    let mut tracker = Tracker::from_config(&config)?;
    info!("Starting pregnancy tracker");

    match cli.command {
        Command::DueDate { value } => {
            tracker.dispatch(TrackerCommand::submit_due_date(value))?;
            print_table(&tracker);
        }
        Command::Note { day, text } => {
            tracker.dispatch(TrackerCommand::edit_note(Some(day), text))?;
        }
        Command::Reset => tracker.dispatch(TrackerCommand::Reset)?,
        Command::Table => print_table(&tracker),
        Command::Calendar => print_calendar(&tracker),
        Command::Show => println!("{}", serde_json::to_string_pretty(&tracker.saved_record())?),
    }

    Ok(())
}

fn print_table<S: KeyValueStorage>(tracker: &Tracker<S>) {
    let state = tracker.state();
    if state.is_empty() {
        println!("No due date set. Run `pregnancy-tracker due-date YYYY-MM-DD`.");
        return;
    }

    let styles = tracker.row_styles(Local::now().date_naive());
    println!(
        "{:<2} {:<12} {:<6} {:>4} {:>4}  {:<18} {:<18} {:<9} Note",
        "", "Date", "Week", "Gest", "Fert", "Age of pregnancy", "Age of conceptus", "Countdown"
    );
    for (record, style) in state.table.iter().zip(styles) {
        let marker = match style.highlight {
            RowHighlight::Today => ">",
            RowHighlight::DueDate => "*",
            RowHighlight::Normal => "",
        };
        println!(
            "{:<2} {:<12} {:<6} {:>4} {:>4}  {:<18} {:<18} {:<9} {}",
            marker,
            day_label(record.date),
            ordinal(record.week_no),
            record.day_gest,
            record.day_fert.map(|d| d.to_string()).unwrap_or_default(),
            record.age_preg,
            record.age_conc.as_deref().unwrap_or(""),
            record.countdown.as_deref().unwrap_or(""),
            record.note.as_deref().unwrap_or(""),
        );
    }
}

fn print_calendar<S: KeyValueStorage>(tracker: &Tracker<S>) {
    let Some(months) = &tracker.state().calendar else {
        println!("Calendar is not available.");
        return;
    };

    for month in months {
        println!("\n{} {}", month.month_name, month.year);
        println!(" Su  Mo  Tu  We  Th  Fr  Sa");

        let mut line = "    ".repeat(month.first_day_of_week as usize);
        let mut column = month.first_day_of_week;
        for day in &month.days {
            let cell = match (day.day_type, &day.record) {
                (CalendarDayType::GestationDay, Some(record)) if record.note.is_some() => {
                    format!("{:>3}*", day.date.day())
                }
                (CalendarDayType::GestationDay, _) => format!("{:>3} ", day.date.day()),
                _ => "  . ".to_string(),
            };
            line.push_str(&cell);
            column += 1;
            if column == 7 {
                println!("{}", line.trim_end());
                line.clear();
                column = 0;
            }
        }
        if !line.is_empty() {
            println!("{}", line.trim_end());
        }
    }
}
