use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::months::{available_months, is_month_key};
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::user::UserTimeRecord;
use crate::utils::date::weekday_str;
use crate::utils::formatting::{fmt_hours_colored, fmt_optional_time};
use crate::utils::table::Table;

use super::{authed_client, fetch_target_record};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        month,
        user,
        months: months_only,
        events: events_only,
    } = cmd
    {
        if let Some(m) = month
            && !is_month_key(m)
        {
            return Err(AppError::InvalidMonth(m.clone()));
        }

        let (client, _session) = authed_client(cfg)?;
        let record = fetch_target_record(&client, user.as_deref())?;

        if *months_only {
            print_months(&record);
            return Ok(());
        }

        if *events_only {
            print_events(&record);
            return Ok(());
        }

        let rows = Core::build_filtered_day_rows(&record.clock_entries, month.as_deref());

        if rows.is_empty() {
            println!("No time entries available for {}.", record.username);
            return Ok(());
        }

        let mut table = Table::new(&["Date", "Clock In", "Clock Out", "Hours"]);
        let mut total = 0.0;

        for row in &rows {
            let date = if cfg.show_weekday {
                format!("{} {}", row.date, weekday_str(row.date))
            } else {
                row.date.to_string()
            };

            table.add_row(vec![
                date,
                fmt_optional_time(row.clock_in),
                fmt_optional_time(row.clock_out),
                fmt_hours_colored(row.hours),
            ]);

            total += row.hours;
        }

        println!("=== {} ===", record.username);
        print!("{}", table.render());
        println!("Total: {} h", fmt_hours_colored(total));
    }
    Ok(())
}

fn print_months(record: &UserTimeRecord) {
    let months = available_months(&record.clock_entries);
    if months.is_empty() {
        println!("No months with entries for {}.", record.username);
        return;
    }
    println!("Months with entries for {}:", record.username);
    for m in months {
        println!("- {}", m);
    }
}

fn print_events(record: &UserTimeRecord) {
    println!("EVENTS:");
    for ev in &record.clock_entries {
        println!(
            "- {} | {} | {}",
            ev.local_date(),
            ev.local_time_str(),
            ev.kind.as_str(),
        );
    }
}
