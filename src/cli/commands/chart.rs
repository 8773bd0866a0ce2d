use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::aggregate::total_hours;
use crate::core::calculator::months::is_month_key;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::ui::chart::{render_bar_chart, ChartRow};
use crate::utils::formatting::fmt_hours;

use super::{authed_client, fetch_target_record};

/// Worked-hours charts.
///
/// For the current user the bars come from the server-computed
/// work-hours summary (with its week/biweek totals). For `--user` and
/// `--all` the hours are computed locally from the fetched entries with
/// the same aggregation policy the list view uses.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart { month, user, all } = cmd {
        if let Some(m) = month
            && !is_month_key(m)
        {
            return Err(AppError::InvalidMonth(m.clone()));
        }

        let (client, _session) = authed_client(cfg)?;

        if *all {
            chart_all_users(&client, cfg)?;
        } else if user.is_some() {
            chart_one_user(&client, cfg, user.as_deref(), month.as_deref())?;
        } else {
            chart_own_work_hours(&client, cfg, month.as_deref())?;
        }
    }
    Ok(())
}

fn chart_own_work_hours(
    client: &crate::api::ApiClient,
    cfg: &Config,
    month: Option<&str>,
) -> AppResult<()> {
    let hours = client.fetch_work_hours()?;

    let rows: Vec<ChartRow> = hours
        .daily_hours
        .iter()
        .filter(|(day, _)| month.is_none_or(|m| day.starts_with(m)))
        .map(|(day, value)| ChartRow {
            label: day.clone(),
            value: *value,
        })
        .collect();

    if rows.is_empty() {
        println!("No work-hours data available.");
    } else {
        print!("{}", render_bar_chart(&rows, cfg.chart_width));
    }

    println!("Total hours worked this week:   {}", fmt_hours(hours.week_total));
    println!("Total hours worked this biweek: {}", fmt_hours(hours.biweek_total));
    Ok(())
}

fn chart_one_user(
    client: &crate::api::ApiClient,
    cfg: &Config,
    user: Option<&str>,
    month: Option<&str>,
) -> AppResult<()> {
    let record = fetch_target_record(client, user)?;
    let days = Core::build_filtered_day_rows(&record.clock_entries, month);

    if days.is_empty() {
        println!(
            "No detailed time entries available for {}.",
            record.username
        );
        return Ok(());
    }

    let rows: Vec<ChartRow> = days
        .iter()
        .map(|d| ChartRow {
            label: d.date.to_string(),
            value: d.hours,
        })
        .collect();

    println!("=== {}'s daily hours ===", record.username);
    print!("{}", render_bar_chart(&rows, cfg.chart_width));
    Ok(())
}

fn chart_all_users(client: &crate::api::ApiClient, cfg: &Config) -> AppResult<()> {
    let users = client.fetch_users()?;

    if users.is_empty() {
        println!("No user data available.");
        return Ok(());
    }

    let rows: Vec<ChartRow> = users
        .iter()
        .map(|u| ChartRow {
            label: u.username.clone(),
            value: total_hours(&u.clock_entries),
        })
        .collect();

    println!("=== Total hours per user ===");
    print!("{}", render_bar_chart(&rows, cfg.chart_width));
    Ok(())
}
