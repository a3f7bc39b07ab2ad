// ABOUTME: meetprep CLI - command-line meet preparation tracker for powerlifters
// ABOUTME: Dispatches stats, goals, meet, equipment, weight, log, and score commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 meetprep contributors

//! Command-line meet preparation tracker.
//!
//! Usage:
//! ```bash
//! # Record current maxes and bodyweight
//! meetprep stats set --squat 180 --bench 120 --deadlift 220 --bodyweight 92.5
//!
//! # Suggest meet attempts from the current squat max
//! meetprep goals set squat --from-max
//!
//! # Configure the meet
//! meetprep meet set --name "Spring Open" --date 2026-11-07 --weight-class 93
//!
//! # Track equipment and bodyweight
//! meetprep equipment list
//! meetprep weight add 92.1
//!
//! # Log a training session
//! meetprep log add --lift bench --sets 5 --reps 3 --weight 105 --rpe 8
//!
//! # Readiness, scores, and analytics
//! meetprep readiness
//! meetprep scores
//! meetprep analytics --days 60
//! ```

mod commands;
mod display;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use meetprep::config::AppConfig;
use meetprep::errors::AppResult;
use meetprep::logging;
use meetprep::models::{EquipmentCategory, LiftType, Sex};
use meetprep::state::StateContainer;
use meetprep::storage::{JsonFileStore, JsonTrainingLog};
use meetprep::units::WeightUnit;

#[derive(Parser)]
#[command(
    name = "meetprep",
    about = "Powerlifting meet preparation tracker",
    long_about = "Tracks lift maxes, meet goals, equipment, and bodyweight, and computes \
                  strength scores, meet readiness, and training analytics."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Current lift maxes and bodyweight
    Stats {
        #[command(subcommand)]
        action: StatsCommand,
    },

    /// Planned meet attempts per lift
    Goals {
        #[command(subcommand)]
        action: GoalsCommand,
    },

    /// Active meet details
    Meet {
        #[command(subcommand)]
        action: MeetCommand,
    },

    /// Equipment checklist
    Equipment {
        #[command(subcommand)]
        action: EquipmentCommand,
    },

    /// Bodyweight log
    Weight {
        #[command(subcommand)]
        action: WeightCommand,
    },

    /// Training session log
    Log {
        #[command(subcommand)]
        action: LogCommand,
    },

    /// Meet readiness score with component breakdown
    Readiness,

    /// Dashboard progress percentage and per-lift goal progress
    Dashboard,

    /// Wilks and DOTS strength scores
    Scores,

    /// Training analytics over a window of logged sessions
    Analytics {
        /// Days of history to aggregate
        #[arg(long, default_value = "90")]
        days: u32,
    },

    /// Athlete profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum StatsCommand {
    /// Show current maxes, bodyweight, and total
    Show,

    /// Update any of the maxes or bodyweight
    Set {
        /// Squat max in kg
        #[arg(long)]
        squat: Option<f64>,

        /// Bench press max in kg
        #[arg(long)]
        bench: Option<f64>,

        /// Deadlift max in kg
        #[arg(long)]
        deadlift: Option<f64>,

        /// Bodyweight in kg
        #[arg(long)]
        bodyweight: Option<f64>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum GoalsCommand {
    /// Show planned attempts for all three lifts
    Show,

    /// Update the planned attempts for one lift
    Set {
        /// Lift to update (squat, bench, deadlift)
        lift: LiftType,

        /// First attempt in kg
        #[arg(long)]
        opener: Option<f64>,

        /// Second attempt in kg
        #[arg(long)]
        second: Option<f64>,

        /// Third attempt (the goal) in kg
        #[arg(long)]
        third: Option<f64>,

        /// Confidence in the third attempt, 1-10
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        confidence: Option<u8>,

        /// Start from attempts suggested from the current max
        #[arg(long)]
        from_max: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum MeetCommand {
    /// Show the active meet
    Show,

    /// Update the active meet
    Set {
        /// Meet name
        #[arg(long)]
        name: Option<String>,

        /// Competition date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Venue location
        #[arg(long)]
        location: Option<String>,

        /// Target weight class in kg
        #[arg(long)]
        weight_class: Option<f64>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum EquipmentCommand {
    /// List the checklist grouped by category
    List,

    /// Toggle one item by id
    Toggle {
        /// Item id (from `equipment list`)
        id: String,
    },

    /// Add an item to the checklist
    Add {
        /// Item name
        name: String,

        /// Category (essential, optional, meet-day)
        #[arg(long, default_value = "optional")]
        category: EquipmentCategory,
    },

    /// Remove one item by id
    Remove {
        /// Item id (from `equipment list`)
        id: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WeightCommand {
    /// Log a weigh-in and make it the current bodyweight
    Add {
        /// Bodyweight in kg
        kg: f64,

        /// Weigh-in date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show the recent weigh-in trend
    Trend,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum LogCommand {
    /// Append a training session to the log
    Add {
        /// Lift trained (squat, bench, deadlift)
        #[arg(long)]
        lift: LiftType,

        /// Working sets performed
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        sets: u32,

        /// Reps per set
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        reps: u32,

        /// Working weight in kg
        #[arg(long)]
        weight: f64,

        /// Rated perceived exertion, 1-10
        #[arg(long)]
        rpe: Option<f64>,

        /// Session date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Update sex and display unit
    Set {
        /// Athlete sex for score formulas (male, female)
        #[arg(long)]
        sex: Option<Sex>,

        /// Preferred display unit (kg, lbs)
        #[arg(long)]
        unit: Option<WeightUnit>,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    logging::init(config.log_level)?;

    let store = JsonFileStore::new(config.state_path());
    let mut container = StateContainer::load_or_default(store);

    match cli.command {
        Command::Stats { action } => match action {
            StatsCommand::Show => commands::stats_show(&container),
            StatsCommand::Set {
                squat,
                bench,
                deadlift,
                bodyweight,
            } => commands::stats_set(&mut container, squat, bench, deadlift, bodyweight),
        },
        Command::Goals { action } => match action {
            GoalsCommand::Show => commands::goals_show(&container),
            GoalsCommand::Set {
                lift,
                opener,
                second,
                third,
                confidence,
                from_max,
            } => commands::goals_set(
                &mut container,
                lift,
                opener,
                second,
                third,
                confidence,
                from_max,
            ),
        },
        Command::Meet { action } => match action {
            MeetCommand::Show => commands::meet_show(&container),
            MeetCommand::Set {
                name,
                date,
                location,
                weight_class,
            } => commands::meet_set(&mut container, name, date, location, weight_class),
        },
        Command::Equipment { action } => match action {
            EquipmentCommand::List => commands::equipment_list(&container),
            EquipmentCommand::Toggle { id } => commands::equipment_toggle(&mut container, &id),
            EquipmentCommand::Add { name, category } => {
                commands::equipment_add(&mut container, &name, category)
            }
            EquipmentCommand::Remove { id } => commands::equipment_remove(&mut container, &id),
        },
        Command::Weight { action } => match action {
            WeightCommand::Add { kg, date } => commands::weight_add(&mut container, kg, date),
            WeightCommand::Trend => commands::weight_trend(&container),
        },
        Command::Log { action } => match action {
            LogCommand::Add {
                lift,
                sets,
                reps,
                weight,
                rpe,
                date,
            } => {
                let log = JsonTrainingLog::new(config.training_log_path());
                commands::log_add(&log, lift, sets, reps, weight, rpe, date)
            }
        },
        Command::Readiness => commands::readiness(&container),
        Command::Dashboard => commands::dashboard(&container),
        Command::Scores => commands::scores(&container),
        Command::Analytics { days } => {
            let log = JsonTrainingLog::new(config.training_log_path());
            commands::analytics(&container, &log, days)
        }
        Command::Profile { action } => match action {
            ProfileCommand::Set { sex, unit } => commands::profile_set(&mut container, sex, unit),
        },
    }
}
