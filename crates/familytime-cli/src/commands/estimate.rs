//! Yearly estimate table.

use clap::Args;
use familytime_core::parent::HOURS_IN_DAY;
use familytime_core::{Config, Family, TimeSpent, YearEstimate};

use super::FamilyArgs;

#[derive(Args, Debug)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub family: FamilyArgs,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Include the per-child breakdown
    #[arg(long)]
    pub detail: bool,
}

pub fn run(args: EstimateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let family = args.family.resolve(&config)?;

    if args.json || config.output.json {
        let json = if args.detail {
            serde_json::to_string_pretty(&family.estimate_detailed())?
        } else {
            serde_json::to_string_pretty(&family.estimate())?
        };
        println!("{json}");
        return Ok(());
    }

    print_table(&family, &config, args.detail);
    Ok(())
}

fn print_table(family: &Family, config: &Config, detail: bool) {
    let show_age = config.output.show_parent_age;
    if show_age {
        println!("{:<6} {:>6} {:>8} {:>8}", "Year", "Age", "Weekday", "Weekend");
    } else {
        println!("{:<6} {:>8} {:>8}", "Year", "Weekday", "Weekend");
    }

    for year in family.estimate_detailed() {
        let record = TimeSpent::from(&year);
        let bar = render_bar(year.weekday, year.weekend, config.output.bar_width);
        if show_age {
            println!(
                "{:<6} {:>6} {:>8} {:>8}  {bar}",
                record.year,
                family.parent_age(record.year),
                record.weekday_hours,
                record.weekend_hours
            );
        } else {
            println!(
                "{:<6} {:>8} {:>8}  {bar}",
                record.year, record.weekday_hours, record.weekend_hours
            );
        }
        if detail {
            print_breakdown(&year);
        }
    }
}

fn print_breakdown(year: &YearEstimate) {
    for child in &year.children {
        let mut flags = Vec::new();
        if child.on_leave {
            flags.push("leave");
        }
        if child.in_daycare {
            flags.push("daycare");
        }
        println!(
            "       child {} age {:.1} {:<16} {:>5.1} {:>5.1} {}",
            child.index + 1,
            child.age,
            child.age_group.as_str(),
            child.weekday,
            child.weekend,
            flags.join(",")
        );
    }
}

/// `█` for weekday hours, `░` for the extra weekend hours.
fn render_bar(weekday: f64, weekend: f64, width: u32) -> String {
    if width == 0 {
        return String::new();
    }
    let cells = |hours: f64| ((hours / HOURS_IN_DAY) * width as f64).round().max(0.0) as usize;
    let solid = cells(weekday);
    let light = cells(weekend).saturating_sub(solid);
    format!("{}{}", "█".repeat(solid), "░".repeat(light))
}
