use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::error;
use swalign::util::version::version;

pub mod commands;

use commands::{align::Align, command::Command};
use enum_dispatch::enum_dispatch;

#[derive(Parser, Debug)]
#[command(version = version())]
struct Args {
    #[clap(subcommand)]
    subcommand: Subcommand,
}

#[enum_dispatch(Command)]
#[derive(Parser, Debug)]
#[command(version = version())]
enum Subcommand {
    Align(Align),
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args: Args = Args::parse();
    if let Err(err) = args.subcommand.execute() {
        error!("{:#}", err);
        std::process::exit(1);
    }
}
