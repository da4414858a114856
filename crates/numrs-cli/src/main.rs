use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use numrs::{load_print_options, Axis, PrintOptions};
use numrs_cli::convert::{run_convert, ConvertRequest};
use numrs_cli::dtype::DType;
use numrs_cli::stats::{run_stats, StatsRequest};
use numrs_cli::{parse_separator, parse_shape};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("NUMRS_LOG", "error,numrs=info"))
        .init();

    let dtype_arg = || {
        Arg::new("dtype")
            .short('t')
            .long("dtype")
            .help("Element type stored in the file")
            .value_parser(DType::NAMES)
            .default_value("f64")
    };

    let matches = Command::new("numrs")
        .version(clap::crate_version!())
        .about("Inspect and convert numrs array dumps")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path to a JSON file with print options (precision, max_rows, max_cols)")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("stats")
                .about("Print summary statistics of an array file")
                .arg(
                    Arg::new("file")
                        .help("Binary dump or text file to read")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(dtype_arg())
                .arg(
                    Arg::new("sep")
                        .short('s')
                        .long("sep")
                        .help("Text separator: 'space', 'tab' or 'newline'. Omit for a binary dump."),
                )
                .arg(
                    Arg::new("shape")
                        .long("shape")
                        .help("Reinterpret the flat values as ROWS,COLS"),
                )
                .arg(
                    Arg::new("axis")
                        .short('a')
                        .long("axis")
                        .help("Axis to reduce over")
                        .value_parser(["none", "row", "col"])
                        .default_value("none"),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between binary dumps and text files")
                .arg(
                    Arg::new("input")
                        .help("File to read")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .help("File to write")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(dtype_arg())
                .arg(
                    Arg::new("from_sep")
                        .long("from-sep")
                        .help("Separator of the input file. Omit for a binary dump."),
                )
                .arg(
                    Arg::new("to_sep")
                        .long("to-sep")
                        .help("Separator of the output file. Omit for a binary dump."),
                ),
        )
        .get_matches();

    let options = match matches.get_one::<PathBuf>("config") {
        Some(path) => load_print_options(path)?,
        None => PrintOptions::default(),
    };
    log::debug!("Print options: {}", serde_json::to_string(&options)?);

    match matches.subcommand() {
        Some(("stats", sub_m)) => handle_stats(sub_m, &options),
        Some(("convert", sub_m)) => handle_convert(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn selected_dtype(matches: &ArgMatches) -> Result<DType> {
    let name = matches
        .get_one::<String>("dtype")
        .map(String::as_str)
        .unwrap_or("f64");
    name.parse::<DType>().map_err(anyhow::Error::msg)
}

fn handle_stats(matches: &ArgMatches, options: &PrintOptions) -> Result<()> {
    let Some(path) = matches.get_one::<PathBuf>("file") else {
        unreachable!("file is a required argument")
    };
    let shape = matches
        .get_one::<String>("shape")
        .map(|text| parse_shape(text))
        .transpose()?;
    let axis: Axis = matches
        .get_one::<String>("axis")
        .map(String::as_str)
        .unwrap_or("none")
        .parse()?;
    let request = StatsRequest {
        path: path.clone(),
        dtype: selected_dtype(matches)?,
        sep: parse_separator(matches.get_one::<String>("sep").map(String::as_str))?,
        shape,
        axis,
    };
    log::info!("[numrs::stats] Summarizing {:?}", request.path);
    match run_stats(&request, options) {
        Ok(report) => {
            println!("{}", report);
            Ok(())
        }
        Err(e) => {
            log::error!("Stats failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_convert(matches: &ArgMatches) -> Result<()> {
    let (Some(input), Some(output)) = (
        matches.get_one::<PathBuf>("input"),
        matches.get_one::<PathBuf>("output"),
    ) else {
        unreachable!("input and output are required arguments")
    };
    let request = ConvertRequest {
        input: input.clone(),
        output: output.clone(),
        dtype: selected_dtype(matches)?,
        from_sep: parse_separator(matches.get_one::<String>("from_sep").map(String::as_str))?,
        to_sep: parse_separator(matches.get_one::<String>("to_sep").map(String::as_str))?,
    };
    let written = run_convert(&request)?;
    eprintln!("[numrs::convert] Wrote {}", written.display());
    Ok(())
}
