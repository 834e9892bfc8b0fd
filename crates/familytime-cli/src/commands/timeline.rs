//! Life-stage bars per child.

use clap::Args;
use familytime_core::timeline::ASCII_LEGEND;
use familytime_core::{timeline, Config};

use super::FamilyArgs;

#[derive(Args, Debug)]
pub struct TimelineArgs {
    #[command(flatten)]
    pub family: FamilyArgs,

    /// Print JSON instead of bars
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: TimelineArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let family = args.family.resolve(&config)?;
    let lines = timeline(&family.children);

    if args.json || config.output.json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }

    let Some(window) = family.window() else {
        return Ok(());
    };
    println!("{} - {}", window.start_year, window.end_year);
    for line in &lines {
        println!("child {} ({})  {}", line.index + 1, line.birth_year, line.render_ascii());
    }
    println!();
    println!("{ASCII_LEGEND}");

    for line in &lines {
        println!();
        println!("child {}:", line.index + 1);
        for segment in line.segments.iter().filter(|s| s.intensity > 0.0) {
            println!(
                "  {}-{}  {:<16} {:>3.0}%",
                segment.start_year,
                segment.end_year,
                segment.stage.as_str(),
                segment.intensity * 100.0
            );
        }
    }
    Ok(())
}
