use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use console::Style;
use stylemark::{parse_with_diagnostics, Renderer, StyleValue, TagTransform, Theme};
use stylemark_parser::{Token, Tokenizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Parsed elements as JSON
    Elements,
    /// Raw token stream as JSON
    Tokens,
    /// Text with all markup removed
    Plain,
    /// Normalized markup, one tag pair or delimiter pair per element
    Markup,
    /// Terminal styles from --style, or plain text when colors are off
    Styled,
}

#[derive(Parser)]
#[command(name = "stylemark")]
#[command(about = "Inspect tag and emphasis style markup")]
struct Args {
    /// Markup to process; read from stdin when omitted
    text: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Elements)]
    format: Format,

    /// Style for --format styled, as NAME=red.bold or NAME=@OTHER for an alias
    #[arg(long = "style", value_name = "NAME=STYLE", value_parser = parse_style)]
    styles: Vec<(String, StyleValue)>,

    /// Print recovered problems to stderr
    #[arg(long)]
    diagnostics: bool,
}

fn parse_style(arg: &str) -> Result<(String, StyleValue), String> {
    let (name, spec) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=STYLE, got '{}'", arg))?;
    if name.is_empty() {
        return Err(format!("missing style name in '{}'", arg));
    }
    let value = match spec.strip_prefix('@') {
        Some(target) => StyleValue::Alias(target.to_string()),
        None => StyleValue::Concrete(Style::from_dotted_str(spec)),
    };
    Ok((name.to_string(), value))
}

fn read_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read markup from stdin")?;
            Ok(input)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let input = read_input(args.text)?;

    let (output, diagnostics) = match args.format {
        Format::Elements => {
            let (elements, diagnostics) = parse_with_diagnostics(&input)?;
            (serde_json::to_string_pretty(&elements)?, diagnostics)
        }
        Format::Tokens => {
            let mut tokenizer = Tokenizer::new(&input);
            let tokens = tokenizer.by_ref().collect::<Result<Vec<Token>, _>>()?;
            (serde_json::to_string_pretty(&tokens)?, tokenizer.take_diagnostics())
        }
        Format::Plain => Renderer::plain().render_with_diagnostics(&input)?,
        Format::Markup => Renderer::plain()
            .with_transform(TagTransform::Keep)
            .render_with_diagnostics(&input)?,
        Format::Styled => {
            let transform = TagTransform::detect();
            let renderer = if transform.needs_theme() {
                let theme = args
                    .styles
                    .into_iter()
                    .fold(Theme::new(), |theme, (name, value)| theme.add(&name, value));
                Renderer::new(theme)?
            } else {
                Renderer::plain()
            };
            renderer
                .with_transform(transform)
                .render_with_diagnostics(&input)?
        }
    };

    println!("{}", output);
    if args.diagnostics {
        for diagnostic in &diagnostics {
            eprintln!("warning: {}", diagnostic);
        }
    }
    Ok(())
}
