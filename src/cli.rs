// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn form_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("company")
            .long("company")
            .value_name("NAME")
            .help("Company name (required to generate)"),
    )
    .arg(
        Arg::new("barcode")
            .long("barcode")
            .value_name("TEXT")
            .help("Barcode text (required to generate)"),
    )
    .arg(
        Arg::new("value")
            .long("value")
            .value_name("DIGITS")
            .allow_hyphen_values(true)
            .help("Value as typed; digits are read as cents (12550 -> R$ 125,50)"),
    )
    .arg(
        Arg::new("date")
            .long("date")
            .value_name("YYYY-MM-DD")
            .help("Receipt date (default: today)"),
    )
    .arg(
        Arg::new("obs")
            .long("obs")
            .visible_alias("observation")
            .value_name("TEXT")
            .help("Optional observation"),
    )
    .arg(paper_arg())
}

fn paper_arg() -> Arg {
    Arg::new("paper")
        .long("paper")
        .value_name("58mm|80mm")
        .help("Paper width preset (default from config)")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of the rendering")
}

pub fn build_cli() -> Command {
    Command::new("recibo")
        .version(crate_version!())
        .about("Simplified receipt form: preview, two copies, simulated printing")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .global(true)
                .help("Config file (default: platform config dir)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("More logging on stderr (-v info, -vv debug)"),
        )
        .subcommand(form_args(
            Command::new("preview").about("Render the live preview for the given fields"),
        ))
        .subcommand(
            form_args(
                Command::new("issue").about("Generate a receipt and render both copies"),
            )
            .arg(
                Arg::new("print")
                    .long("print")
                    .action(ArgAction::SetTrue)
                    .help("Simulate printing both copies"),
            )
            .arg(json_arg()),
        )
        .subcommand(
            Command::new("session")
                .about("Fill in the form interactively (type 'help' inside)")
                .arg(paper_arg()),
        )
        .subcommand(
            Command::new("bars")
                .about("Show the decorative bar pattern for a text")
                .arg(Arg::new("text").required(true).value_name("TEXT"))
                .arg(paper_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("format")
                .about("Format typed digits as a currency value")
                .arg(
                    Arg::new("raw")
                        .required(true)
                        .allow_hyphen_values(true)
                        .value_name("RAW"),
                ),
        )
        .subcommand(
            Command::new("mock")
                .about("Render mock receipts")
                .arg(
                    Arg::new("sample")
                        .long("sample")
                        .action(ArgAction::SetTrue)
                        .help("Use the fixed sample receipt"),
                )
                .arg(
                    Arg::new("list")
                        .long("list")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("sample")
                        .help("List the mock data table"),
                )
                .arg(paper_arg())
                .arg(json_arg()),
        )
        .subcommand(Command::new("config").about("Show the effective configuration"))
}
