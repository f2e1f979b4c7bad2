#![doc = include_str!("../README.md")]
//! PLCL CLI tool
//!
//! Disambiguation heuristic:
//!   If arg contains '.' or '/' → file mode
//!   If arg is '-' → stdin (file mode)
//!   Otherwise → subcommand mode
//!
//! Examples:
//!   plcl config.plcl              - file mode (has '.')
//!   plcl ./config                 - file mode (has '/')
//!   plcl -                        - stdin
//!   plcl tree config.plcl         - subcommand with file arg

use std::fmt::Write as _;
use std::io::{self, Read};

use facet::Facet;
use figue as args;
use plcl_format::{FormatOptions, format_with};
use plcl_parse::{
    ConfigElement, ConfigList, ConfigRoot, Document, ParseError, TemplateElement, TemplateList,
    TemplateOptions, TemplateRoot, TokenKind,
};

// ============================================================================
// Exit codes
// ============================================================================

const EXIT_SUCCESS: i32 = 0;
const EXIT_SYNTAX_ERROR: i32 = 1;
const EXIT_IO_ERROR: i32 = 3;

// ============================================================================
// CLI argument structures
// ============================================================================

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File mode arguments: `plcl <file> [options]`
#[derive(Facet, Debug, Default)]
struct FileArgs {
    /// Input file path (or "-" for stdin)
    #[facet(args::positional)]
    input: String,

    /// Output to file
    #[facet(args::named, args::short = 'o', default)]
    output: Option<String>,

    /// Modify input file in place
    #[facet(args::named, default)]
    in_place: bool,

    /// Spaces per nesting level (default: 4)
    #[facet(args::named, default)]
    indent: Option<usize>,

    /// Only check that the input parses
    #[facet(args::named, default)]
    check: bool,
}

/// Top-level CLI with optional subcommand
#[derive(Facet, Debug)]
struct Args {
    /// Show version
    #[facet(args::named, args::short = 'V', default)]
    version: bool,

    /// Subcommand to run
    #[facet(args::subcommand, default)]
    command: Option<Command>,
}

/// Available subcommands
#[derive(Facet, Debug)]
#[repr(u8)]
enum Command {
    /// Show the parsed tree
    Tree {
        /// Output format: outline or debug
        #[facet(args::named, default = "outline")]
        format: String,

        /// Input file
        #[facet(args::positional)]
        file: String,
    },

    /// Show the token stream
    Tokens {
        /// Input file
        #[facet(args::positional)]
        file: String,
    },
}

// ============================================================================
// Main entry point
// ============================================================================

/// Determines if an argument should be treated as a file path.
///
/// Returns true if the argument:
/// - Contains '.' (e.g., config.plcl)
/// - Contains '/' (e.g., ./config, ../path, /absolute/path)
/// - Is exactly '-' (stdin)
fn is_file_arg(arg: &str) -> bool {
    arg == "-" || arg.contains('.') || arg.contains('/')
}

fn main() {
    let raw_args: Vec<String> = std::env::args().skip(1).collect();

    if raw_args.is_empty() {
        print_help();
        std::process::exit(EXIT_SUCCESS);
    }

    if raw_args[0] == "--version" || raw_args[0] == "-V" {
        println!("plcl {VERSION}");
        std::process::exit(EXIT_SUCCESS);
    }

    if raw_args[0] == "--help" || raw_args[0] == "-h" {
        print_help();
        std::process::exit(EXIT_SUCCESS);
    }

    let result = if is_file_arg(&raw_args[0]) {
        run_file_mode(&raw_args)
    } else {
        run_subcommand_mode(&raw_args)
    };

    match result {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(e) => {
            match &e {
                CliError::ParseDiagnostic {
                    error,
                    source,
                    filename,
                } => error.write_report(filename, source, std::io::stderr()),
                _ => eprintln!("error: {e}"),
            }
            std::process::exit(e.exit_code());
        }
    }
}

fn print_help() {
    eprintln!("plcl {VERSION} - command-line tool for PLCL config and template files\n");
    eprintln!("USAGE:");
    eprintln!("    plcl <file> [options]           Format a PLCL file");
    eprintln!("    plcl <command> [args]           Run a subcommand\n");
    eprintln!("    Files are detected by '.' or '/' in the name, or '-' for stdin.");
    eprintln!("    Bare words (e.g., 'tree', 'tokens') are subcommands.\n");
    eprintln!("FILE MODE OPTIONS:");
    eprintln!("    -o, --output <FILE>             Output to file");
    eprintln!("        --in-place                  Modify input file in place");
    eprintln!("        --indent <N>                Spaces per nesting level (default: 4)");
    eprintln!("        --check                     Only check that the file parses\n");
    eprintln!("SUBCOMMANDS:");
    eprintln!("    tree <file> [--format <f>]      Show parsed tree (outline or debug)");
    eprintln!("    tokens <file>                   Show token stream\n");
    eprintln!("EXAMPLES:");
    eprintln!("    plcl config.plcl                Format and print to stdout");
    eprintln!("    plcl config.plcl --in-place     Format file in place");
    eprintln!("    plcl tree template.plcl         Show parse tree");
}

fn parse_file_args(args: &[String]) -> Result<FileArgs, CliError> {
    let args_strs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    figue::from_slice(&args_strs).map_err(|e| CliError::Usage(format!("{e:?}")))
}

fn run_file_mode(args: &[String]) -> Result<(), CliError> {
    let opts = parse_file_args(args)?;

    if opts.in_place && opts.input == "-" {
        return Err(CliError::Usage(
            "--in-place cannot be used with stdin".into(),
        ));
    }

    if opts.in_place && opts.output.is_some() {
        return Err(CliError::Usage(
            "--in-place and --output cannot be combined".into(),
        ));
    }

    if let Some(ref output) = opts.output
        && opts.input != "-"
        && output != "-"
        && is_same_file(&opts.input, output)
    {
        return Err(CliError::Usage(
            "input and output are the same file\nhint: use --in-place to modify in place".into(),
        ));
    }

    let format_opts = match opts.indent {
        Some(width) => FormatOptions::default().indent_width(width),
        None => FormatOptions::default(),
    };

    let source = read_input(Some(&opts.input))?;
    let filename = display_name(&opts.input);
    let document = parse(&source, filename)?;

    if opts.check {
        return Ok(());
    }

    let output = format_with(&document, &format_opts);
    if opts.in_place {
        std::fs::write(&opts.input, &output)?;
    } else if let Some(ref out_path) = opts.output {
        write_output(out_path, &output)?;
    } else {
        print!("{output}");
    }

    Ok(())
}

fn run_subcommand_mode(args: &[String]) -> Result<(), CliError> {
    let args_strs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let parsed: Args =
        figue::from_slice(&args_strs).map_err(|e| CliError::Usage(format!("{e:?}")))?;

    match parsed.command {
        Some(Command::Tree { format, file }) => run_tree(&format, &file),
        Some(Command::Tokens { file }) => run_tokens(&file),
        None if parsed.version => {
            println!("plcl {VERSION}");
            Ok(())
        }
        None => {
            print_help();
            Ok(())
        }
    }
}

// ============================================================================
// Error handling
// ============================================================================

#[derive(Debug)]
enum CliError {
    Io(io::Error),
    ParseDiagnostic {
        error: ParseError,
        source: String,
        filename: String,
    },
    Usage(String),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Io(_) => EXIT_IO_ERROR,
            CliError::ParseDiagnostic { .. } => EXIT_SYNTAX_ERROR,
            CliError::Usage(_) => EXIT_SYNTAX_ERROR,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "{e}"),
            CliError::ParseDiagnostic { error, .. } => write!(f, "{error}"),
            CliError::Usage(e) => write!(f, "{e}"),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

// ============================================================================
// Subcommand implementations
// ============================================================================

fn run_tree(format: &str, file: &str) -> Result<(), CliError> {
    let source = read_input(Some(file))?;
    let document = parse(&source, display_name(file))?;

    match format {
        "outline" => print!("{}", outline(&document)),
        "debug" => println!("{document:#?}"),
        _ => {
            return Err(CliError::Usage(format!(
                "unknown format '{}', expected 'outline' or 'debug'",
                format
            )));
        }
    }
    Ok(())
}

fn run_tokens(file: &str) -> Result<(), CliError> {
    let source = read_input(Some(file))?;
    print!("{}", token_listing(&source));
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

fn parse(source: &str, filename: &str) -> Result<Document, CliError> {
    plcl_parse::parse_document(source).map_err(|error| CliError::ParseDiagnostic {
        error,
        source: source.to_string(),
        filename: filename.to_string(),
    })
}

fn display_name(file: &str) -> &str {
    if file == "-" { "<stdin>" } else { file }
}

fn read_input(file: Option<&str>) -> Result<String, io::Error> {
    match file {
        Some("-") | None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path),
    }
}

fn write_output(path: &str, content: &str) -> Result<(), io::Error> {
    if path == "-" {
        print!("{content}");
        Ok(())
    } else {
        std::fs::write(path, content)
    }
}

fn is_same_file(a: &str, b: &str) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// One line per token: position, kind, and text where the kind carries any.
fn token_listing(source: &str) -> String {
    let mut out = String::new();
    for token in plcl_tokenizer::tokenize(source) {
        let _ = write!(out, "{}:{} {}", token.line, token.column, token.kind);
        match token.kind {
            TokenKind::StringLiteral => {
                let _ = write!(out, " \"{}\"", plcl_format::escape_quoted(&token.text));
            }
            _ if !token.text.is_empty() => {
                let _ = write!(out, " {}", token.text);
            }
            _ => {}
        }
        out.push('\n');
    }
    out
}

// ============================================================================
// Tree outline
// ============================================================================

const STEP: usize = 4;

fn outline(document: &Document) -> String {
    let mut out = String::new();
    match document {
        Document::Config(config) => outline_config(&mut out, config),
        Document::Template(template) => outline_template(&mut out, template),
    }
    out
}

fn line(out: &mut String, indent: usize, text: std::fmt::Arguments<'_>) {
    let _ = writeln!(out, "{:indent$}{text}", "");
}

fn outline_config(out: &mut String, config: &ConfigRoot) {
    line(out, 0, format_args!("Config Name: {}", config.name));
    for import in &config.imports {
        line(out, 0, format_args!("Import: {import}"));
    }
    for element in &config.elements {
        outline_config_element(out, element, 0);
    }
    for list in &config.lists {
        outline_config_list(out, list, 0);
    }
}

fn outline_config_list(out: &mut String, list: &ConfigList, indent: usize) {
    line(out, indent, format_args!("List {}", list.name));
    for entry in &list.elements {
        line(out, indent + STEP, format_args!("ListElement {}", entry.id));
        outline_config_element(out, &entry.element, indent + 2 * STEP);
    }
}

fn outline_config_element(out: &mut String, element: &ConfigElement, indent: usize) {
    line(out, indent, format_args!("Element {}", element.name));
    for attribute in &element.attributes {
        line(
            out,
            indent + STEP,
            format_args!("{} = {}", attribute.name, attribute.value),
        );
    }
    for list in &element.lists {
        outline_config_list(out, list, indent + STEP);
    }
}

fn outline_template(out: &mut String, template: &TemplateRoot) {
    line(out, 0, format_args!("Template Name: {}", template.name));
    for element in &template.elements {
        outline_template_element(out, element, 0);
    }
    for list in &template.lists {
        outline_template_list(out, list, 0);
    }
}

fn outline_options(out: &mut String, options: &TemplateOptions, indent: usize) {
    line(out, indent, format_args!("Options"));
    for option in &options.options {
        line(
            out,
            indent + STEP,
            format_args!("{} = {}", option.name, option.value),
        );
    }
}

fn outline_template_list(out: &mut String, list: &TemplateList, indent: usize) {
    line(out, indent, format_args!("List {}", list.name));
    if let Some(options) = &list.options {
        outline_options(out, options, indent + STEP);
    }
    for entry in &list.elements {
        line(out, indent + STEP, format_args!("ListElement {}", entry.id));
        outline_template_element(out, &entry.element, indent + 2 * STEP);
    }
}

fn outline_template_element(out: &mut String, element: &TemplateElement, indent: usize) {
    line(out, indent, format_args!("Element {}", element.name));
    if let Some(options) = &element.options {
        outline_options(out, options, indent + STEP);
    }
    for attribute in &element.attributes {
        let mut text = format!("Attribute {}: {}", attribute.name, attribute.ty);
        if attribute.required {
            text.push_str(" (required)");
        }
        if let Some(default) = &attribute.default_value {
            let _ = write!(text, " (default: {default})");
        }
        line(out, indent + STEP, format_args!("{text}"));
    }
    for list in &element.lists {
        outline_template_list(out, list, indent + STEP);
    }
}
