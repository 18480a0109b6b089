//! Command-line demo for the magical container.
//!
//! Adds the given values to a container, optionally removes some of them, and
//! prints the requested traversal orders.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p magical-demo -- 17 2 25 9 3
//! ```
//!
//! Remove values before printing (repeatable):
//!
//! ```sh
//! cargo run -p magical-demo -- 17 2 25 9 3 --remove 25
//! ```
//!
//! Print a single traversal:
//!
//! ```sh
//! cargo run -p magical-demo -- 1 2 3 4 5 --order side-cross
//! ```
//!
//! Set `RUST_LOG=trace` to see every container mutation.

use std::process;

use clap::{Parser, ValueEnum};
use magical_container::{ContainerError, MagicalContainer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Order {
    All,
    Ascending,
    SideCross,
    Prime,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Values to add to the container.
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    values: Vec<i32>,

    /// Value to remove after adding. Repeatable.
    #[arg(short, long = "remove", value_name = "VALUE", allow_negative_numbers = true)]
    removals: Vec<i32>,

    /// Traversal order to print.
    #[arg(long, value_name = "ORDER", default_value = "all")]
    order: Order,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let container = match build_container(&args.values, &args.removals) {
        Ok(container) => container,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    println!("Size: {}", container.size());
    if matches!(args.order, Order::All | Order::Ascending) {
        print_order("Ascending", container.ascending());
    }
    if matches!(args.order, Order::All | Order::SideCross) {
        print_order("Side cross", container.side_cross());
    }
    if matches!(args.order, Order::All | Order::Prime) {
        print_order("Prime", container.primes_iter());
    }
}

fn build_container(values: &[i32], removals: &[i32]) -> Result<MagicalContainer, ContainerError> {
    let mut container: MagicalContainer = values.iter().copied().collect();
    log::info!("added {} value(s): {container}", values.len());
    for &value in removals {
        container.remove(value)?;
    }
    if !removals.is_empty() {
        log::info!("removed {} value(s): {container}", removals.len());
    }
    Ok(container)
}

fn print_order(label: &str, values: impl Iterator<Item = i32>) {
    let values = values.map(|v| v.to_string()).collect::<Vec<_>>();
    println!("{label}: {}", values.join(" "));
}
