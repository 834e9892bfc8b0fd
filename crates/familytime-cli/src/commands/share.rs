//! Share-link fragments.

use clap::Subcommand;
use familytime_core::{decode_fragment, encode_fragment, Config};

use super::FamilyArgs;

#[derive(Subcommand)]
pub enum ShareAction {
    /// Encode the family as a URL fragment
    Encode {
        #[command(flatten)]
        family: FamilyArgs,
    },
    /// Decode a fragment and print the family form
    Decode {
        /// Fragment, with or without the leading '#'
        fragment: String,
        /// Print TOML instead of JSON
        #[arg(long)]
        toml: bool,
    },
}

pub fn run(action: ShareAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ShareAction::Encode { family } => {
            let config = Config::load()?;
            let family = family.resolve(&config)?;
            println!("{}", encode_fragment(&family.to_form()));
        }
        ShareAction::Decode { fragment, toml } => {
            let form = decode_fragment(&fragment)?;
            if toml {
                print!("{}", toml::to_string_pretty(&form)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&form)?);
            }
        }
    }
    Ok(())
}
