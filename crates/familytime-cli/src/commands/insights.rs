use clap::Args;
use familytime_core::family::current_year;
use familytime_core::{generate_insights, Config};

use super::FamilyArgs;

#[derive(Args, Debug)]
pub struct InsightsArgs {
    #[command(flatten)]
    pub family: FamilyArgs,

    /// Year to describe (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,

    #[arg(long)]
    pub json: bool,
}

pub fn run(args: InsightsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let family = args.family.resolve(&config)?;
    let insights = generate_insights(&family, args.year.unwrap_or_else(current_year));

    if args.json || config.output.json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
    } else {
        for insight in insights {
            println!("- {insight}");
        }
    }
    Ok(())
}
