use clap::Parser;
use std::time::Duration;

use async_combinators::{run, Error, Report, RunOptions, Strategy};

#[derive(Parser)]
#[command(name = "async-combinators", version, about)]
struct Cli {
    /// Strategy to run: all, all-settled, fold, recursive, iterative or every
    #[arg(long, default_value = "every")]
    strategy: String,

    /// Index of the task that should reject
    #[arg(long)]
    fail_at: Option<usize>,

    /// Upper bound of the simulated latency, in milliseconds
    #[arg(long, default_value_t = 2000)]
    max_delay_ms: u64,

    /// Print settled outcomes as JSON
    #[arg(long)]
    json: bool,

    /// Labels to fetch (defaults to a handful of fruit)
    labels: Vec<String>,
}

impl Cli {
    fn into_options(self) -> Result<(RunOptions, bool), Error> {
        let mut options = RunOptions::new()
            .with_failing_index(self.fail_at)
            .with_max_delay(Duration::from_millis(self.max_delay_ms));
        if self.strategy != "every" {
            options = options.with_strategy(self.strategy.parse::<Strategy>()?);
        }
        if !self.labels.is_empty() {
            options = options.with_labels(self.labels);
        }
        Ok((options, self.json))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let (options, json) = Cli::parse().into_options()?;
    let scenario = options.scenario()?;
    let tasks = scenario.tasks();

    for strategy in &options.strategies {
        println!("== {}", strategy);
        match run(*strategy, &tasks).await {
            Ok(Report::Values(values)) => println!("resolved {:?}", values),
            Ok(Report::Settled(outcomes)) if json => {
                println!("resolved {}", serde_json::to_string(&outcomes)?)
            }
            Ok(Report::Settled(outcomes)) => {
                println!("resolved");
                for outcome in outcomes {
                    println!("  {}", outcome);
                }
            }
            Err(Error::Task(e)) => println!("rejected {}", e),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
