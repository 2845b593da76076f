//! The interactive viewer loop.

use crate::commands::{Command, HELP};
use crate::print_page;
use anyhow::Result;
use marten_browser::{Browser, Status};
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

/// Run the viewer until `quit` or end of input, opening `start` first if given.
pub fn run(browser: &mut Browser, start: Option<&str>) -> Result<()> {
    if let Some(start) = start {
        let _ = browser.navigate(start);
        show(browser);
    } else {
        println!("Type a URL to open it, or `help` for commands.");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", "marten>".bold());
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        match Command::parse(&line?) {
            Command::Go(address) => {
                let _ = browser.navigate(&address);
                show(browser);
            }
            Command::Back => {
                if browser.go_back().is_some() {
                    show(browser);
                } else {
                    println!("Nothing to go back to.");
                }
            }
            Command::Forward => {
                if browser.go_forward().is_some() {
                    show(browser);
                } else {
                    println!("Nothing to go forward to.");
                }
            }
            Command::Reload => {
                if browser.reload().is_some() {
                    show(browser);
                } else {
                    println!("No page loaded.");
                }
            }
            Command::Home => {
                let _ = browser.go_home();
                show(browser);
            }
            Command::History => print_history(browser),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
            Command::Empty => {}
            Command::Unknown(input) => println!("Unknown command: {input} (try `help`)"),
        }
    }
    Ok(())
}

/// Print the status line followed by the page.
fn show(browser: &Browser) {
    let status = browser.status().to_string();
    match browser.status() {
        Status::Error(_) => eprintln!("{}", status.red()),
        _ => eprintln!("{}", status.green()),
    }
    if let Some(page) = browser.page() {
        print_page(page);
    }
}

fn print_history(browser: &Browser) {
    let history = browser.history();
    if history.is_empty() {
        println!("History is empty.");
        return;
    }
    for (index, url) in history.entries().iter().enumerate() {
        if Some(index) == history.position() {
            println!("{} {url}", "*".bold());
        } else {
            println!("  {url}");
        }
    }
}
