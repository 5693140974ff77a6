extern crate clap;
#[macro_use] extern crate log;
extern crate fern;
extern crate chrono;
extern crate term_grid;

pub mod ippcode;

use clap::{Arg, ArgMatches, App, ErrorKind};
use term_grid::{Grid, GridOptions, Direction, Filling, Cell};

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use ippcode::ast::Program;

/// Exit codes that do not come from a parse error.
const EXIT_USAGE: i32 = 10;
const EXIT_INPUT: i32 = 11;
const EXIT_OUTPUT: i32 = 12;

fn main() {
    let args = process_arguments();
    initialize_logging(args.occurrences_of("verbose"));

    debug!("Arguments:\n\tVerbosity: {}\n\tPrint Debug: {}\n\tOutfile: {}\n\tInfile: {}",
        level_for(args.occurrences_of("verbose")),
        args.is_present("print-debug"),
        args.value_of("output").unwrap_or("<stdout>"),
        args.value_of("INPUT").unwrap_or("<stdin>")
    );

    let result = match args.value_of("INPUT") {
        Some(ifile) => {
            let ipath = Path::new(ifile);
            let ifile = match File::open(&ipath) {
                Err(err) => {
                    error!("fatal: unable to open input file `{}`: {}", ipath.display(), err);
                    std::process::exit(EXIT_INPUT);
                },
                Ok(file) => file,
            };
            ippcode::parser::parse(BufReader::new(ifile))
        },
        None => {
            let stdin = io::stdin();
            let handle = stdin.lock();
            ippcode::parser::parse(handle)
        },
    };

    // Nothing is written unless the whole source checked out.
    let program = match result {
        Ok(program) => program,
        Err(err) => {
            error!("fatal: {}", err);
            std::process::exit(err.category().exit_code());
        },
    };

    if program.is_empty() {
        warn!("program has no instructions");
    }

    if args.is_present("print-debug") {
        print_listing(&program);
    }

    let document = ippcode::xml::serialize_program(&program);
    let opath = args.value_of("output");

    if let Err(err) = write_output(opath, &document) {
        error!("fatal: unable to write output `{}`: {}", opath.unwrap_or("<stdout>"), err);
        std::process::exit(EXIT_OUTPUT);
    }
}

fn write_output(path: Option<&str>, document: &str) -> io::Result<()> {
    match path {
        Some(filename) => {
            let mut ofile = File::create(Path::new(filename))?;
            ofile.write_all(document.as_bytes())
        },
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(document.as_bytes())?;
            handle.flush()
        },
    }
}

/// Prints `order: OPCODE type@value ...` rows to STDERR.
fn print_listing(program: &Program) {
    let mut grid = Grid::new(GridOptions {
        filling:     Filling::Spaces(1),
        direction:   Direction::LeftToRight,
    });

    for ins in program.iter() {
        grid.add(Cell::from(format!("{:>4}:", ins.order)));
        grid.add(Cell::from(format!("{}", ins)));
    }

    eprintln!("{}", grid.fit_into_columns(2));
}

fn process_arguments() -> ArgMatches<'static> {
    let app = App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(Arg::with_name("INPUT")
            .help("Sets the input file to use (reads STDIN if omitted)")
            .required(false)
            .multiple(false)
            .index(1))
        .arg(Arg::with_name("verbose")
            .short("v")
            .multiple(true)
            .takes_value(false)
            .help("Sets the level of verbosity"))
        .arg(Arg::with_name("output")
            .short("o")
            .takes_value(true)
            .help("write the XML document to an outfile instead of STDOUT"))
        .arg(Arg::with_name("print-debug")
            .short("d")
            .long("show")
            .takes_value(false)
            .help("prints a listing of the parsed program to STDERR"));

    match app.get_matches_safe() {
        Ok(matches) => matches,
        Err(err) => match err.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => err.exit(),
            _ => {
                eprintln!("{}", err.message);
                std::process::exit(EXIT_USAGE);
            },
        },
    }
}

fn level_for(verbosity: u64) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

// STDOUT carries the document, so logs go to STDERR.
fn initialize_logging(verbosity: u64) {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level_for(verbosity))
        .chain(std::io::stderr())
        .apply().ok();
}
