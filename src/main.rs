use anyhow::Result;
use clap::Parser;

use chips::cli::{CliArgs, CliCommand};
use chips::script;
use chips::tokenizer;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    chips::tracing::init(args.verbose);

    let config = args.load_config()?;

    match args.command {
        CliCommand::Parse { value, json } => {
            let chips = tokenizer::parse(&value);
            if json {
                println!("{}", serde_json::to_string_pretty(&chips)?);
            } else {
                for chip in chips {
                    println!("{}", chip);
                }
            }
        }
        CliCommand::Replay {
            script: path,
            value,
            json,
        } => {
            let events = script::load(&path)?;
            let report = script::replay(&value, config, events);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.view.render_line());
                println!("value: {:?}", report.value);
                for (i, change) in report.changes.iter().enumerate() {
                    println!("change {}: {:?}", i + 1, change);
                }
            }
        }
    }

    Ok(())
}
