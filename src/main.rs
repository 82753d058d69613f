//! blockshift - Lexical → Portable Text converter

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use blockshift::{collect_footnotes, convert_file, keys::sanitize_id_part, plain_text, truncate};

#[derive(Parser)]
#[command(name = "blockshift")]
#[command(version, about = "Convert Lexical editor state to Portable Text", long_about = None)]
#[command(after_help = "EXAMPLES:
    blockshift post.json post.pt.json    Convert a Lexical export
    blockshift -i post.json              Show document summary
    blockshift --text post.json          Print the document as plain text")]
struct Cli {
    /// Input file (Lexical editor state JSON)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (Portable Text JSON array)
    #[arg(value_name = "OUTPUT", required_unless_present_any = ["info", "text"])]
    output: Option<String>,

    /// Show a document summary without converting
    #[arg(short, long)]
    info: bool,

    /// Print the document as plain text instead of converting
    #[arg(long)]
    text: bool,

    /// Key scope for generated block/span/mark keys
    /// (defaults to the sanitized input file stem)
    #[arg(long, value_name = "SCOPE")]
    scope: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let scope = cli
        .scope
        .clone()
        .unwrap_or_else(|| default_scope(&cli.input));

    let result = if cli.info {
        show_info(&cli.input, &scope)
    } else if cli.text {
        print_text(&cli.input, &scope)
    } else {
        let output = cli.output.expect("output required");
        convert(&cli.input, &output, &scope, cli.pretty, cli.quiet)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Derive a key scope from the input file name.
fn default_scope(input: &str) -> String {
    let stem = Path::new(input)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("doc");
    let scope = sanitize_id_part(stem);
    if scope.is_empty() {
        "doc".to_string()
    } else {
        scope
    }
}

fn show_info(path: &str, scope: &str) -> Result<(), String> {
    let blocks = convert_file(path, scope).map_err(|e| e.to_string())?;

    let spans: usize = blocks.iter().map(|b| b.children.len()).sum();
    let mark_defs: usize = blocks.iter().map(|b| b.mark_defs.len()).sum();
    let footnotes = collect_footnotes(&blocks, scope);

    println!("File: {path}");
    println!("Key scope: {scope}");
    println!("Blocks: {}", blocks.len());
    println!("Spans: {spans}");
    println!("Mark definitions: {mark_defs}");
    println!("Footnotes: {}", footnotes.len());

    let text = plain_text(&blocks);
    if !text.is_empty() {
        println!("Preview: {}", truncate(&text, 200));
    }

    Ok(())
}

fn print_text(path: &str, scope: &str) -> Result<(), String> {
    let blocks = convert_file(path, scope).map_err(|e| e.to_string())?;
    println!("{}", plain_text(&blocks));
    Ok(())
}

fn convert(input: &str, output: &str, scope: &str, pretty: bool, quiet: bool) -> Result<(), String> {
    let blocks = convert_file(input, scope).map_err(|e| e.to_string())?;

    let mut json = if pretty {
        serde_json::to_string_pretty(&blocks).map_err(|e| e.to_string())?
    } else {
        serde_json::to_string(&blocks).map_err(|e| e.to_string())?
    };
    json.push('\n');

    std::fs::write(output, json).map_err(|e| e.to_string())?;

    if !quiet {
        println!("Converted {} block(s) to {output}", blocks.len());
    }

    Ok(())
}
