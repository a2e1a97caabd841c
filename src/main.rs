use clap::Parser;
use singly_linked_list::driver::{self, Scenario};
use singly_linked_list::LinkedList;
use std::io;

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ScenarioChoice {
    TicketQueue,
    Removal,
    All,
}

impl ScenarioChoice {
    fn scenarios(self) -> Vec<&'static Scenario> {
        match self {
            ScenarioChoice::TicketQueue => vec![&driver::TICKET_QUEUE],
            ScenarioChoice::Removal => vec![&driver::REMOVAL],
            ScenarioChoice::All => vec![&driver::TICKET_QUEUE, &driver::REMOVAL],
        }
    }
}

/// Walks through a singly linked list one operation at a time
#[derive(Parser, Debug)]
struct CmdOptions {
    /// Scripted story to replay
    #[clap(long, value_enum, default_value = "ticket-queue")]
    scenario: ScenarioChoice,
    /// Operations to apply instead of a scenario, e.g. "push_back:5 pop_front print"
    #[clap(long, multiple_values = true)]
    ops: Vec<String>,
}

fn run(options: CmdOptions) -> Result<(), driver::Error> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !options.ops.is_empty() {
        let ops = driver::parse_ops(&options.ops)?;
        log::info!("Applying {} operations", ops.len());
        let mut list = LinkedList::new();
        return driver::run_ops(&mut list, &ops, &mut out);
    }

    for scenario in options.scenario.scenarios() {
        let mut list = LinkedList::new();
        driver::run_scenario(&mut list, scenario, &mut out)?;
    }
    Ok(())
}

fn main() {
    // Only warnings (e.g. underflow) unless RUST_LOG says otherwise
    if let Err(_) = std::env::var("RUST_LOG") {
        std::env::set_var("RUST_LOG", "warn");
    }
    pretty_env_logger::init();

    let options = CmdOptions::parse();
    log::debug!("{:?}", options);

    if let Err(err) = run(options) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
