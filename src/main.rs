//! Shopcheck CLI
//!
//! A small front end over the shopcheck library.

use anyhow::{bail, Context};
use serde::Serialize;
use shopcheck::prelude::*;
use std::fmt::Display;

/// Global flags accepted before the command.
struct Options {
    json: bool,
    config: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("shopcheck");
    let (options, rest) = parse_options(&args[1.min(args.len())..])?;

    if let Some(path) = &options.config {
        let settings =
            Settings::from_file(path).with_context(|| format!("loading config {}", path))?;
        settings.install()?;
        log::info!("installed settings from {}", path);
    }

    let Some((command, params)) = rest.split_first() else {
        print_usage(program);
        return Ok(());
    };

    match command.as_str() {
        "coupons" => list_coupons(&options)?,
        "discount" => {
            let [price, code] = expect_args::<2>(params, "discount <price> <code>")?;
            report(&options, &calculate_discount(price, code))?;
        }
        "range" => {
            let [price, min, max] = expect_args::<3>(params, "range <price> <min> <max>")?;
            let (Some(price), Some(min), Some(max)) =
                (price.as_number(), min.as_number(), max.as_number())
            else {
                bail!("range arguments must be numbers");
            };
            println!("{}", is_price_in_range(price, min, max));
        }
        "username" => {
            let [name] = expect_args::<1>(params, "username <name>")?;
            println!("{}", is_valid_username(name));
        }
        "validate" => {
            let [username, age] = expect_args::<2>(params, "validate <username> <age>")?;
            report(&options, &validate_user_input(username, age))?;
        }
        "drive" => {
            let [age, country] = expect_args::<2>(params, "drive <age> <country>")?;
            report(&options, &can_drive(age, country))?;
        }
        "reverse" => reverse(params)?,
        "help" | "--help" | "-h" => print_usage(program),
        other => {
            print_usage(program);
            bail!("unknown command: {}", other);
        }
    }

    Ok(())
}

fn parse_options(args: &[String]) -> anyhow::Result<(Options, &[String])> {
    let mut options = Options {
        json: false,
        config: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => {
                options.json = true;
                i += 1;
            }
            "--config" => {
                let Some(path) = args.get(i + 1) else {
                    bail!("--config requires a path");
                };
                options.config = Some(path.clone());
                i += 2;
            }
            _ => break,
        }
    }

    Ok((options, &args[i..]))
}

fn expect_args<const N: usize>(params: &[String], usage: &str) -> anyhow::Result<[Value; N]> {
    if params.len() != N {
        bail!("usage: {}", usage);
    }
    Ok(std::array::from_fn(|i| Value::from_cli_arg(&params[i])))
}

fn report<T: Display + Serialize>(options: &Options, outcome: &Outcome<T>) -> anyhow::Result<()> {
    if options.json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        println!("{}", outcome);
    }
    Ok(())
}

fn list_coupons(options: &Options) -> anyhow::Result<()> {
    let coupons = get_coupons();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&coupons)?);
        return Ok(());
    }

    println!("Available coupons ({} total):", coupons.len());
    for coupon in coupons {
        println!("  {:<12} {:>5.1}% off", coupon.code, coupon.discount * 100.0);
    }
    Ok(())
}

fn reverse(items: &[String]) -> anyhow::Result<()> {
    let mut stack: Stack<&str> = items.iter().map(String::as_str).collect();

    let mut reversed = Vec::with_capacity(stack.size());
    while !stack.is_empty() {
        reversed.push(stack.pop()?);
    }
    println!("{}", reversed.join(" "));
    Ok(())
}

fn print_usage(program: &str) {
    println!("Shopcheck v{}", shopcheck::VERSION);
    println!();
    println!("Usage: {} [--config <file>] [--json] <command> [args]", program);
    println!();
    println!("Commands:");
    println!("  coupons                      List the coupon catalog");
    println!("  discount <price> <code>      Apply a coupon code to a price");
    println!("  range <price> <min> <max>    Check min <= price <= max");
    println!("  username <name>              Check a username's length");
    println!("  validate <username> <age>    Run the user-input check");
    println!("  drive <age> <country>        Check driving eligibility");
    println!("  reverse <items...>           Reverse items through a stack");
    println!("  help                         Show this help message");
    println!();
    println!("Arguments are read as numbers when they parse as numbers;");
    println!("wrap them in double quotes to pass a string (e.g. '\"12\"').");
}
