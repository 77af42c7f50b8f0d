use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use rexplain::{Component, ParsedPattern, SAMPLES, explain, tokenize};

/// Shown for any pattern that cannot be explained.
const INVALID_PATTERN_MESSAGE: &str = "Please enter a valid regular expression";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern to explain (read from stdin if omitted)
    #[arg(value_name = "PATTERN")]
    pattern: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// List each component on its own line
    #[arg(short = 'c', long)]
    components: bool,

    /// Print the pattern followed by its explanation
    #[arg(short = 's', long)]
    share: bool,

    /// Explain the built-in example patterns
    #[arg(short = 'e', long)]
    examples: bool,

    /// Print diagnostics to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn main() {
    let args = Args::parse();
    match run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` if the pattern could not be explained.
fn run(args: &Args) -> Result<bool> {
    if args.examples {
        return show_examples(args).map(|_| true);
    }

    let pattern = match &args.pattern {
        Some(pattern) => pattern.clone(),
        None => read_pattern_from_stdin()?,
    };

    if args.verbose {
        for token in tokenize(&pattern) {
            eprintln!("token {:>4}: {:<24} {:?}", token.offset, format!("{:?}", token.kind), token.text);
        }
    }

    let parsed = match explain(&pattern) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{}", INVALID_PATTERN_MESSAGE);
            eprintln!("{}: {}", err.kind(), err);
            return Ok(false);
        }
    };

    if args.verbose {
        warn_unterminated(&parsed.components);
    }

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&parsed)?),
        Format::Text => print_text(args, &pattern, &parsed),
    }
    Ok(true)
}

fn print_text(args: &Args, pattern: &str, parsed: &ParsedPattern) {
    if args.share {
        println!("{}\n\n{}", pattern, parsed.full_description);
    } else {
        println!("{}", parsed.full_description);
    }
    if args.components {
        println!();
        print_components(&parsed.components, 0);
    }
}

fn print_components(components: &[Component], depth: usize) {
    for component in components {
        println!(
            "{:indent$}{:<16} {:<12} {}",
            "",
            component.kind,
            component.raw_value,
            component.description,
            indent = depth * 2
        );
        print_components(&component.children, depth + 1);
    }
}

fn show_examples(args: &Args) -> Result<()> {
    let mut explained = Vec::new();
    for sample in SAMPLES {
        let parsed = explain(sample.pattern)
            .with_context(|| format!("Failed to explain example '{}'", sample.title))?;
        explained.push((sample, parsed));
    }

    match args.format {
        Format::Json => {
            let items = explained
                .iter()
                .map(|(sample, parsed)| {
                    serde_json::json!({
                        "title": sample.title,
                        "pattern": sample.pattern,
                        "summary": sample.summary,
                        "explanation": parsed,
                    })
                })
                .collect::<Vec<_>>();
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        Format::Text => {
            for (sample, parsed) in &explained {
                println!("{} ({})", sample.title, sample.summary);
                println!("  {}", sample.pattern);
                println!("  {}", parsed.full_description);
                if args.components {
                    print_components(&parsed.components, 2);
                }
                println!();
            }
        }
    }
    Ok(())
}

fn warn_unterminated(components: &[Component]) {
    for component in components {
        if component.unterminated {
            eprintln!("warning: group '{}' has no closing ')'", component.raw_value);
        }
        warn_unterminated(&component.children);
    }
}

fn read_pattern_from_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    let pattern = input
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(&input);
    Ok(pattern.to_string())
}
