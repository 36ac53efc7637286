use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::{config_io, script_io};
use crate::model::intent::Intent;
use crate::model::item::Category;
use crate::ops::session::Session;
use crate::parse::{ParseError, parse_script};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    // An explicit config must load for every command, as it does for the TUI
    if let Some(path) = cli.config.as_deref() {
        config_io::read_config(path)?;
    }

    match cli.command {
        // main.rs launches the TUI when there is no subcommand
        None => Ok(()),
        Some(cmd) => match cmd {
            Commands::Run(args) => cmd_run(args, json),
            Commands::Check(args) => cmd_check(args, json),
            Commands::Categories => cmd_categories(json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn syntax_error_summary(errors: &[ParseError]) -> String {
    if errors.len() == 1 {
        "script has 1 syntax error".to_string()
    } else {
        format!("script has {} syntax errors", errors.len())
    }
}

/// Apply every script line to `session`. Rejected adds are reported on
/// stderr and skipped; the rest of the script still runs.
pub fn run_script(session: &mut Session, source: &str) -> Result<usize, Vec<ParseError>> {
    let (lines, errors) = parse_script(source);
    if !errors.is_empty() {
        return Err(errors);
    }

    let mut rejected = 0;
    for script_line in lines {
        if let Err(e) = session.apply(script_line.intent) {
            eprintln!("warning: line {}: {}", script_line.line, e);
            rejected += 1;
        }
    }
    Ok(rejected)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_run(args: RunArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let source = script_io::read_script(args.file.as_deref())?;
    let mut session = Session::new();

    if let Err(errors) = run_script(&mut session, &source) {
        for e in &errors {
            eprintln!("error: {}", e);
        }
        return Err(syntax_error_summary(&errors).into());
    }

    if let Some(search) = args.search {
        session.apply(Intent::Search(search))?;
    }

    let stats = session.stats();

    if json {
        let output = RunJson {
            search: session.search.clone(),
            groups: if args.stats_only {
                Vec::new()
            } else {
                groups_to_json(&session.grouped())
            },
            stats: stats_to_json(&stats),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if !args.stats_only {
        let groups = session.grouped();
        if !session.search.is_empty() {
            println!("search: {}", session.search);
            println!();
        }
        if groups.is_empty() && !session.store.is_empty() {
            println!("(no items match)");
            println!();
        }
        for line in format_groups(&groups) {
            println!("{}", line);
        }
        if !groups.is_empty() {
            println!();
        }
    }
    for line in format_stats(&stats) {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_check(args: CheckArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let source = script_io::read_script(args.file.as_deref())?;
    let (lines, errors) = parse_script(&source);

    if json {
        let output = CheckJson {
            intents: lines.len(),
            errors: errors
                .iter()
                .map(|e| CheckErrorJson {
                    line: e.line,
                    message: e.message.clone(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if errors.is_empty() {
        println!("{}: {} intents, no errors", display_source(args.file.as_deref()), lines.len());
    } else {
        for e in &errors {
            println!("{}", e);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(syntax_error_summary(&errors).into())
    }
}

fn display_source(file: Option<&Path>) -> String {
    match file {
        Some(p) if p != Path::new("-") => p.display().to_string(),
        _ => "stdin".to_string(),
    }
}

fn cmd_categories(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&Category::ALL)?);
    } else {
        for category in Category::ALL {
            let marker = if category == Category::default() {
                " (default)"
            } else {
                ""
            };
            println!("{}{}", category, marker);
        }
    }
    Ok(())
}
