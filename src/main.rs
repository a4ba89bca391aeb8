// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Ermine CLI entrypoint.
//!
//! `convert` opens an ER document in a headless editor session, converts it to UML in a new tab,
//! shows that tab and writes the resulting document. `schema` prints the document JSON Schema.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use ermine::config::ConversionConfig;
use ermine::format::{document_schema, export_document, load_document};
use ermine::model::Editor;
use ermine::tabs::{HeadlessUi, SeedDiagram, TabController};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} convert <er.json> [--output <uml.json>] [--config <config.json>]\n  {program} schema\n\nconvert writes the UML document to stdout unless --output is given.\n--config overrides table and label geometry (JSON, all fields optional)."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Convert {
        input: PathBuf,
        output: Option<PathBuf>,
        config: Option<PathBuf>,
    },
    Schema,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    command: Option<String>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<Command, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--output" | "-o" => {
                if options.output.is_some() {
                    return Err(());
                }
                options.output = Some(PathBuf::from(args.next().ok_or(())?));
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(PathBuf::from(args.next().ok_or(())?));
            }
            _ if arg.starts_with('-') => return Err(()),
            _ if options.command.is_none() => options.command = Some(arg),
            _ => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(PathBuf::from(arg));
            }
        }
    }

    match options.command.as_deref() {
        Some("convert") => Ok(Command::Convert {
            input: options.input.ok_or(())?,
            output: options.output,
            config: options.config,
        }),
        Some("schema") => {
            if options.input.is_some() || options.output.is_some() || options.config.is_some() {
                return Err(());
            }
            Ok(Command::Schema)
        }
        _ => Err(()),
    }
}

fn convert(
    input: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let config = match config {
        Some(path) => ConversionConfig::load(&path)?,
        None => ConversionConfig::default(),
    };
    let cells = load_document(&input)?;
    let label = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ER".to_owned());

    let seed = SeedDiagram::new(label.as_str(), cells);
    let mut session =
        TabController::new(Editor::default(), HeadlessUi::new(), vec![seed]).with_config(config);
    session.activate();
    let uml = session
        .convert_to_uml(&format!("{label} (UML)"))
        .ok_or("no focused tab to convert")?;
    session.select_tab(uml);

    let json = export_document(session.editor().graph().store())?;
    match output {
        Some(path) => fs::write(&path, json)?,
        None => print!("{json}"),
    }
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "ermine".to_owned());

        let command = match parse_options(args) {
            Ok(command) => command,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        match command {
            Command::Convert {
                input,
                output,
                config,
            } => convert(input, output, config),
            Command::Schema => {
                println!("{}", document_schema()?);
                Ok(())
            }
        }
    })();

    if let Err(err) = result {
        eprintln!("ermine: {err}");
        std::process::exit(1);
    }
}
