mod app;
mod cli;
mod config;
mod constants;
mod content;
mod domain;
mod error;
mod logging;
mod page;
mod storage;

fn main() {
    cli::run_cli();
}
