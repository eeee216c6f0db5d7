//! Glyph Grid Headless Runner
//!
//! Lays text out in a bordered box on a fixed grid and prints the resulting
//! glyph buffer. Useful for checking wrap and border output without a display.

use std::io::{self, Read};
use std::process::ExitCode;

use glyph_grid::layout::{BorderStyle, TextBox, TextItem};
use glyph_grid::renderer::Canvas;
use glyph_grid::EngineBuilder;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut cols = 40usize;
    let mut rows = 12usize;
    let mut padding = 0usize;
    let mut border = String::from("single");
    let mut input_file: Option<String> = None;
    let mut output_format = OutputFormat::Text;
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--cols" => {
                i += 1;
                if i < args.len() {
                    cols = args[i].parse().unwrap_or(40);
                }
            },
            "-r" | "--rows" => {
                i += 1;
                if i < args.len() {
                    rows = args[i].parse().unwrap_or(12);
                }
            },
            "-p" | "--padding" => {
                i += 1;
                if i < args.len() {
                    padding = args[i].parse().unwrap_or(0);
                }
            },
            "-b" | "--border" => {
                i += 1;
                if i < args.len() {
                    border = args[i].clone();
                }
            },
            "-j" | "--json" => {
                output_format = OutputFormat::Json;
            },
            "-t" | "--text" => {
                output_format = OutputFormat::Text;
            },
            "-h" | "--help" => {
                show_help = true;
            },
            _ => {
                if input_file.is_none() && !args[i].starts_with('-') {
                    input_file = Some(args[i].clone());
                }
            },
        }
        i += 1;
    }

    if show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let style = match border.as_str() {
        "single" => BorderStyle::single(),
        "double" => BorderStyle::double(),
        other => match BorderStyle::parse(other) {
            Some(style) => style,
            None => {
                eprintln!("Invalid border '{}': expected 1 or 9 glyphs", other);
                return ExitCode::FAILURE;
            },
        },
    };

    let input = match &input_file {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path, e);
                return ExitCode::FAILURE;
            },
        },
        None => {
            let mut data = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut data) {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
            data
        },
    };

    // One pixel per tile keeps the canvas as small as the grid
    let mut engine = match EngineBuilder::new(Canvas::new(1, 1), 1)
        .size(cols, rows, false)
        .build()
    {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error creating engine: {}", e);
            return ExitCode::FAILURE;
        },
    };

    let text_box = TextBox::from(&engine)
        .with_border(style)
        .with_padding(padding);
    let mut items: Vec<TextItem> = input.lines().map(TextItem::from).collect();

    text_box.print_border(&mut engine);
    text_box.print_items(&mut engine, &mut items, None);

    let snapshot = engine.snapshot();
    match output_format {
        OutputFormat::Text => {
            println!("Grid ({}x{}):", snapshot.columns, snapshot.rows);
            println!("---");
            println!("{}", snapshot.to_text());
            println!("---");
        },
        OutputFormat::Json => match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing snapshot: {}", e);
                return ExitCode::FAILURE;
            },
        },
    }

    ExitCode::SUCCESS
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn print_help() {
    println!("Glyph Grid Headless Runner");
    println!();
    println!("Usage: glyph-grid-headless [OPTIONS] [INPUT_FILE]");
    println!();
    println!("Options:");
    println!("  -c, --cols <N>       Grid width (default: 40)");
    println!("  -r, --rows <N>       Grid height (default: 12)");
    println!("  -p, --padding <N>    Padding inside the border (default: 0)");
    println!("  -b, --border <STYLE> single, double, or a 1 or 9 glyph template");
    println!("  -j, --json           Output snapshot as JSON");
    println!("  -t, --text           Output snapshot as text (default)");
    println!("  -h, --help           Show this help message");
    println!();
    println!("Reads text from INPUT_FILE or stdin. Each input line is wrapped");
    println!("into the box below the previous one.");
}
