use anyhow::{anyhow, Result};
use clap::Parser;
use flog::{setup_logger, ExecuteOptions, Flog, FlogConfig, LogCategory, StackOrder};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dump arguments, caller and stack after the callback
    #[arg(short, long)]
    debug: bool,

    /// Escalate callback failures to a fatal signal
    #[arg(short, long)]
    throwable: bool,

    /// Make the callback fail with this message
    #[arg(short, long)]
    fail: Option<String>,

    /// Make the callback panic instead of returning an error
    #[arg(long)]
    panic: bool,

    /// Print the stack innermost frame first
    #[arg(long)]
    innermost_first: bool,

    #[arg(long)]
    no_color: bool,

    /// Category for the sample line
    #[arg(short, long, default_value = "info")]
    category: String,

    /// Extra values appended to the debug dump
    extras: Vec<String>,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let order = if args.innermost_first {
        StackOrder::InnermostFirst
    } else {
        StackOrder::OutermostFirst
    };
    let config = FlogConfig::default()
        .with_color(!args.no_color)
        .with_stack_order(order);
    setup_logger(&config)?;

    let flog = Flog::new(config);
    let category: LogCategory = args.category.parse()?;
    flog.log(category, format!("sample {} line", category));
    flog.type_of(&args.extras);
    flog.raise("sample fake error", "+", flog::ErrorCategory::Error, true, "!!!")?;

    let mut options = ExecuteOptions::new()
        .with_debug(args.debug)
        .with_throwable(args.throwable);
    for extra in &args.extras {
        options = options.with_extra(extra.as_str());
    }

    let fail = args.fail;
    let panic = args.panic;
    info!("Running demo callback");
    flog.execute(
        move || {
            if panic {
                panic!("demo callback panicked");
            }
            match fail {
                Some(message) => Err(anyhow!(message)),
                None => Ok(()),
            }
        },
        options,
    )?;

    Ok(())
}
