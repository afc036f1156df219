use clap::Parser;
use colored::*;
use stocktake::api::StockApi;
use stocktake::commands::{CmdMessage, CmdResult, MessageLevel, StockLine};
use stocktake::error::Result;
use stocktake::model::DEFAULT_LOW_STOCK_THRESHOLD;
use stocktake::store::fs::FileStore;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = FileStore::new(&cli.file);
    let mut api = StockApi::new(store);

    match cli.command {
        Some(Commands::Add { item, qty }) => handle_add(&mut api, &item, qty),
        Some(Commands::Remove { item, qty }) => handle_remove(&mut api, &item, qty),
        Some(Commands::Qty { item }) => handle_qty(&api, &item),
        Some(Commands::Low { threshold }) => handle_low(&api, threshold),
        Some(Commands::Report) => handle_report(&api),
        Some(Commands::Demo) => handle_demo(&mut api),
        None => handle_report(&api),
    }
}

fn handle_add(api: &mut StockApi<FileStore>, item: &str, qty: i64) -> Result<()> {
    let result = api.add_item(item, qty)?;
    print_log_lines(&result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(api: &mut StockApi<FileStore>, item: &str, qty: i64) -> Result<()> {
    let result = api.remove_item(item, qty)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_qty(api: &StockApi<FileStore>, item: &str) -> Result<()> {
    let result = api.quantity(item)?;
    println!("{}", result.quantity.unwrap_or(0));
    print_messages(&result.messages);
    Ok(())
}

fn handle_low(api: &StockApi<FileStore>, threshold: i64) -> Result<()> {
    let result = api.low_stock(threshold)?;
    if result.low_items.is_empty() {
        println!("No low-stock items.");
    } else {
        for item in &result.low_items {
            println!("{}", item.yellow());
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_report(api: &StockApi<FileStore>) -> Result<()> {
    let result = api.report()?;
    print_report(&result.entries);
    print_messages(&result.messages);
    Ok(())
}

/// A fixed walkthrough: stock two items, sell some apples, then
/// inspect quantities, low stock, and the full report. Every step re-reads
/// the inventory file, so this also exercises the save/load round trip.
fn handle_demo(api: &mut StockApi<FileStore>) -> Result<()> {
    let result = api.add_item("apple", 10)?;
    print_messages(&result.messages);
    let result = api.add_item("banana", 2)?;
    print_messages(&result.messages);
    let result = api.remove_item("apple", 3)?;
    print_messages(&result.messages);

    let result = api.quantity("apple")?;
    println!("Apple stock: {}", result.quantity.unwrap_or(0));

    let result = api.low_stock(DEFAULT_LOW_STOCK_THRESHOLD)?;
    println!("Low items: {}", result.low_items.join(", "));

    let result = api.report()?;
    print_report(&result.entries);
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

fn print_log_lines(result: &CmdResult) {
    for line in &result.log_lines {
        println!("{}", line.dimmed());
    }
}

fn print_report(entries: &[StockLine]) {
    println!("\nItems Report");
    if entries.is_empty() {
        println!("No items in stock.");
        return;
    }

    for entry in entries {
        println!("{} -> {}", entry.name, entry.quantity);
    }
}
