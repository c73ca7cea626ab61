use clap::Parser;
use colored::*;
use roster::api::RosterApi;
use roster::commands::{CmdMessage, CmdResult, MessageLevel};
use roster::error::Result;
use roster::request::Request;
use roster::store::fs::FileStore;
use std::io::Write;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let request = Request::resolve(cli.into_raw_args())?;

    let store = FileStore::new(&request.file_name);
    let mut api = RosterApi::new(store);

    let result = api.perform(&request.operation)?;
    emit(&result)
}

fn emit(result: &CmdResult) -> Result<()> {
    if let Some(output) = &result.output {
        let mut stdout = std::io::stdout();
        stdout.write_all(output)?;
        stdout.flush()?;
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
