// ABOUTME: Command handlers for the meetprep CLI
// ABOUTME: Validates user input at the form layer, mutates state, and renders output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 meetprep contributors

use chrono::{NaiveDate, Utc};
use meetprep::analysis::readiness::{ReadinessCalculator, ReadinessStatus};
use meetprep::analysis::strength::{calculate_dots, calculate_wilks, StrengthLevel};
use meetprep::analysis::training_analytics::TrainingAnalyzer;
use meetprep::errors::{AppError, AppResult};
use meetprep::models::{EquipmentCategory, LiftAttempts, LiftType, Sex, TrainingEntry};
use meetprep::state::StateContainer;
use meetprep::storage::{Store, TrainingLogRepository};
use meetprep::units::{format_weight, WeightUnit};

use crate::display;

/// Show current maxes, bodyweight, and total
pub fn stats_show<S: Store>(container: &StateContainer<S>) -> AppResult<()> {
    let state = container.state();
    let unit = state.unit_preference;
    let stats = &state.current_stats;

    display::header("Current Stats");
    display::row("Bodyweight", &format_weight(stats.bodyweight, unit));
    for lift in LiftType::ALL {
        display::row(&lift.to_string(), &format_weight(stats.max_for(lift), unit));
    }
    display::row("Total", &format_weight(stats.total(), unit));
    Ok(())
}

/// Update any of the maxes or bodyweight
pub fn stats_set<S: Store>(
    container: &mut StateContainer<S>,
    squat: Option<f64>,
    bench: Option<f64>,
    deadlift: Option<f64>,
    bodyweight: Option<f64>,
) -> AppResult<()> {
    if squat.is_none() && bench.is_none() && deadlift.is_none() && bodyweight.is_none() {
        return Err(AppError::invalid_input(
            "nothing to update; pass --squat, --bench, --deadlift, and/or --bodyweight",
        ));
    }

    let mut stats = container.state().current_stats;
    if let Some(kg) = squat {
        stats.squat_max = positive(kg, "squat max")?;
    }
    if let Some(kg) = bench {
        stats.bench_max = positive(kg, "bench max")?;
    }
    if let Some(kg) = deadlift {
        stats.deadlift_max = positive(kg, "deadlift max")?;
    }
    if let Some(kg) = bodyweight {
        stats.bodyweight = positive(kg, "bodyweight")?;
    }

    container.set_stats(stats)?;
    stats_show(container)
}

/// Show planned attempts for all three lifts
pub fn goals_show<S: Store>(container: &StateContainer<S>) -> AppResult<()> {
    let state = container.state();
    let unit = state.unit_preference;

    display::header("Meet Goals");
    for lift in LiftType::ALL {
        display::attempts_line(lift, state.meet_goals.attempts_for(lift), unit);
    }
    display::row("Goal total", &format_weight(state.meet_goals.goal_total(), unit));
    Ok(())
}

/// Update the planned attempts for one lift
pub fn goals_set<S: Store>(
    container: &mut StateContainer<S>,
    lift: LiftType,
    opener: Option<f64>,
    second: Option<f64>,
    third: Option<f64>,
    confidence: Option<u8>,
    from_max: bool,
) -> AppResult<()> {
    let state = container.state();
    let mut attempts = if from_max {
        LiftAttempts::suggested_from_max(state.current_stats.max_for(lift))
    } else {
        *state.meet_goals.attempts_for(lift)
    };

    if let Some(kg) = opener {
        attempts.opener = positive(kg, "opener")?;
    }
    if let Some(kg) = second {
        attempts.second = positive(kg, "second attempt")?;
    }
    if let Some(kg) = third {
        attempts.third = positive(kg, "third attempt")?;
    }
    if let Some(value) = confidence {
        attempts.confidence = value;
    }

    container.set_goal(lift, attempts)?;
    let state = container.state();
    display::attempts_line(lift, state.meet_goals.attempts_for(lift), state.unit_preference);
    Ok(())
}

/// Show the active meet
pub fn meet_show<S: Store>(container: &StateContainer<S>) -> AppResult<()> {
    let state = container.state();
    let meet = &state.meet_info;

    display::header("Meet");
    if meet.meet_name.is_empty() && meet.meet_date.is_none() {
        println!("  No meet configured. Use `meetprep meet set`.");
        return Ok(());
    }

    display::row("Name", &meet.meet_name);
    let date_text = meet
        .meet_date
        .map_or_else(|| "unscheduled".to_owned(), |date| date.to_string());
    display::row("Date", &date_text);
    if !meet.location.is_empty() {
        display::row("Location", &meet.location);
    }
    display::row(
        "Weight class",
        &format_weight(meet.target_weight_class, state.unit_preference),
    );
    if let Some(days) = meet.days_until(Utc::now().date_naive()) {
        display::days_until_line(days);
    }
    Ok(())
}

/// Update the active meet
pub fn meet_set<S: Store>(
    container: &mut StateContainer<S>,
    name: Option<String>,
    date: Option<NaiveDate>,
    location: Option<String>,
    weight_class: Option<f64>,
) -> AppResult<()> {
    let mut meet = container.state().meet_info.clone();
    if let Some(value) = name {
        meet.meet_name = value;
    }
    if let Some(value) = date {
        meet.meet_date = Some(value);
    }
    if let Some(value) = location {
        meet.location = value;
    }
    if let Some(kg) = weight_class {
        meet.target_weight_class = positive(kg, "weight class")?;
    }

    container.set_meet_info(meet)?;
    meet_show(container)
}

/// List the checklist grouped by category
pub fn equipment_list<S: Store>(container: &StateContainer<S>) -> AppResult<()> {
    let state = container.state();
    let checklist = &state.equipment_checklist;

    display::header("Equipment Checklist");
    for category in [
        EquipmentCategory::Essential,
        EquipmentCategory::Optional,
        EquipmentCategory::MeetDay,
    ] {
        let items: Vec<_> = checklist
            .iter()
            .filter(|item| item.category == category)
            .collect();
        if items.is_empty() {
            continue;
        }
        println!("  {}:", category.label());
        for item in items {
            println!(
                "    {} {:<20} {}",
                if item.checked { "[x]" } else { "[ ]" },
                item.name,
                display::short_id(&item.id)
            );
        }
    }

    let (checked, total) = state.equipment_progress();
    println!("  {checked}/{total} items ready");
    Ok(())
}

/// Toggle one checklist item by id or unambiguous id prefix
pub fn equipment_toggle<S: Store>(container: &mut StateContainer<S>, id: &str) -> AppResult<()> {
    let id = resolve_equipment_id(container, id)?;
    let checked = container.toggle_equipment(&id)?;
    let name = container
        .state()
        .equipment_checklist
        .iter()
        .find(|item| item.id == id)
        .map_or_else(String::new, |item| item.name.clone());
    println!("{} {name}", if checked { "[x]" } else { "[ ]" });
    Ok(())
}

/// Add an item to the checklist
pub fn equipment_add<S: Store>(
    container: &mut StateContainer<S>,
    name: &str,
    category: EquipmentCategory,
) -> AppResult<()> {
    let id = container.add_equipment(name, category)?;
    println!(
        "Added {name} ({}) with id {}",
        category.label(),
        display::short_id(&id)
    );
    Ok(())
}

/// Remove one checklist item by id or unambiguous id prefix
pub fn equipment_remove<S: Store>(container: &mut StateContainer<S>, id: &str) -> AppResult<()> {
    let id = resolve_equipment_id(container, id)?;
    container.remove_equipment(&id)?;
    println!("Removed {}", display::short_id(&id));
    Ok(())
}

/// Log a weigh-in dated today unless overridden
pub fn weight_add<S: Store>(
    container: &mut StateContainer<S>,
    kg: f64,
    date: Option<NaiveDate>,
) -> AppResult<()> {
    let kg = positive(kg, "bodyweight")?;
    let date = date.unwrap_or_else(|| Utc::now().date_naive());
    container.log_weight(date, kg)?;
    let unit = container.state().unit_preference;
    println!("Logged {} on {date}", format_weight(kg, unit));
    Ok(())
}

/// Show the recent weigh-in trend
pub fn weight_trend<S: Store>(container: &StateContainer<S>) -> AppResult<()> {
    let entries = container.weight_trend();
    if entries.is_empty() {
        println!("No weigh-ins logged.");
        return Ok(());
    }

    let unit = container.state().unit_preference;
    display::header("Weight Trend");
    for entry in entries {
        display::row(&entry.date.to_string(), &format_weight(entry.weight, unit));
    }
    if let (Some(first), Some(last)) = (entries.first(), entries.last()) {
        let net = last.weight - first.weight;
        println!("  Net change: {net:+.1} kg");
    }
    Ok(())
}

/// Append a training session to the log
pub fn log_add(
    repo: &impl TrainingLogRepository,
    lift: LiftType,
    sets: u32,
    reps: u32,
    weight: f64,
    rpe: Option<f64>,
    date: Option<NaiveDate>,
) -> AppResult<()> {
    let weight = positive(weight, "working weight")?;
    if let Some(value) = rpe {
        if !(1.0..=10.0).contains(&value) {
            return Err(AppError::out_of_range(format!(
                "RPE must be between 1 and 10, got {value}"
            )));
        }
    }

    let date = date.unwrap_or_else(|| Utc::now().date_naive());
    let mut entry = TrainingEntry::new(lift, date, sets, reps, weight);
    if let Some(value) = rpe {
        entry = entry.with_rpe(value);
    }
    repo.append(&entry)?;

    println!(
        "Logged {lift}: {sets}x{reps} @ {weight} kg (volume {:.0} kg, est. 1RM {:.1} kg)",
        entry.volume(),
        entry.estimated_1rm()
    );
    Ok(())
}

/// Meet readiness score with component breakdown
pub fn readiness<S: Store>(container: &StateContainer<S>) -> AppResult<()> {
    let score = ReadinessCalculator::calculate_readiness_score(container.state());
    let status = ReadinessStatus::from_total(score.total);
    display::render_readiness(&score, status);
    Ok(())
}

/// Dashboard progress percentage and per-lift goal progress
pub fn dashboard<S: Store>(container: &StateContainer<S>) -> AppResult<()> {
    let summary = container.summary(Utc::now().date_naive());
    display::render_dashboard(container.state(), &summary);
    Ok(())
}

/// Wilks and DOTS strength scores with level classification
pub fn scores<S: Store>(container: &StateContainer<S>) -> AppResult<()> {
    let state = container.state();
    let stats = &state.current_stats;
    let total = stats.total();

    let wilks = calculate_wilks(stats.bodyweight, total, state.sex);
    let dots = calculate_dots(stats.bodyweight, total, state.sex);
    let level = StrengthLevel::from_wilks(wilks);

    display::render_scores(total, wilks, dots, level, state.unit_preference);
    Ok(())
}

/// Training analytics over a window of logged sessions
pub fn analytics<S: Store>(
    container: &StateContainer<S>,
    repo: &impl TrainingLogRepository,
    days: u32,
) -> AppResult<()> {
    let entries = repo.history(days, false)?;
    if entries.is_empty() {
        println!("No training sessions in the last {days} days.");
        return Ok(());
    }

    let analyzer = TrainingAnalyzer::new(container.state().current_stats);
    let analytics = analyzer.aggregate(&entries);
    display::render_analytics(&analytics, days);
    Ok(())
}

/// Update sex and display unit
pub fn profile_set<S: Store>(
    container: &mut StateContainer<S>,
    sex: Option<Sex>,
    unit: Option<WeightUnit>,
) -> AppResult<()> {
    if sex.is_none() && unit.is_none() {
        return Err(AppError::invalid_input(
            "nothing to update; pass --sex and/or --unit",
        ));
    }

    if let Some(value) = sex {
        container.set_sex(value)?;
    }
    if let Some(value) = unit {
        container.set_unit_preference(value)?;
    }

    let state = container.state();
    println!("Profile: {} / {}", state.sex, state.unit_preference);
    Ok(())
}

fn positive(kg: f64, what: &str) -> AppResult<f64> {
    if kg > 0.0 {
        Ok(kg)
    } else {
        Err(AppError::out_of_range(format!(
            "{what} must be positive, got {kg}"
        )))
    }
}

fn resolve_equipment_id<S: Store>(container: &StateContainer<S>, id: &str) -> AppResult<String> {
    let matches: Vec<&str> = container
        .state()
        .equipment_checklist
        .iter()
        .filter(|item| item.id.starts_with(id))
        .map(|item| item.id.as_str())
        .collect();

    match matches.as_slice() {
        [exact] => Ok((*exact).to_owned()),
        [] => Err(AppError::not_found(format!("equipment item {id}"))),
        _ => Err(AppError::invalid_input(format!(
            "equipment id prefix {id} is ambiguous"
        ))),
    }
}
