use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use termlayout::{
    Align, DetectTerminal, OutputBuffer, Printer, Settings, WidthMetric, parse_single_char,
};

#[derive(Parser)]
#[command(
    name = "termlayout",
    version,
    about = "Aligned tables, bordered strings and headings for the terminal"
)]
struct Cli {
    /// Settings file (TOML); defaults to $TERMLAYOUT_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// How string length is counted: bytes or cells
    #[arg(long, global = true)]
    metric: Option<WidthMetric>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print property/value pairs as an aligned table
    Propvalue {
        /// Position of the table on the line: left, center or right
        #[arg(long)]
        body: Option<Align>,
        /// Justification inside the columns: left, center or right
        #[arg(long)]
        content: Option<Align>,
        /// Spaces around the separator
        #[arg(long)]
        padding: Option<usize>,
        /// Line width; defaults to the terminal width
        #[arg(long)]
        width: Option<usize>,
        /// Separator character
        #[arg(long)]
        separator: Option<String>,
        /// PROPERTY VALUE [PROPERTY VALUE ...]; a property of " " prints a blank row.
        /// Options go before the pairs; everything after the first pair is a value.
        #[arg(required = true, allow_hyphen_values = true)]
        pairs: Vec<String>,
    },
    /// Print text centered between border characters
    Border {
        /// Border character
        #[arg(long = "char")]
        border: Option<String>,
        /// Spaces between border and text
        #[arg(long)]
        padding: Option<usize>,
        #[arg(long)]
        width: Option<usize>,
        #[arg(default_value = "", allow_hyphen_values = true)]
        text: String,
    },
    /// Print a heading: heading1, heading2, heading3, warning or error
    Heading {
        /// Style, optionally with a spacing suffix (heading1-02)
        #[arg(allow_hyphen_values = true)]
        style: String,
        #[arg(allow_hyphen_values = true)]
        text: String,
        #[arg(long)]
        width: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
    if let Some(metric) = cli.metric {
        settings.metric = metric;
    }

    let mut printer =
        Printer::new(DetectTerminal, OutputBuffer::new()).with_metric(settings.metric);

    match cli.command {
        Command::Propvalue {
            body,
            content,
            padding,
            width,
            separator,
            pairs,
        } => {
            let mut request = settings.request()?;
            if let Some(body) = body {
                request.body_align = body;
            }
            if let Some(content) = content {
                request.content_align = content;
            }
            if let Some(padding) = padding {
                request.padding = padding;
            }
            if let Some(separator) = separator {
                request.separator = parse_single_char(&separator)?;
            }
            request.width = width.or(request.width);
            request.push_tokens(pairs)?;
            printer.print_propvalue(&request)?;
        }
        Command::Border {
            border,
            padding,
            width,
            text,
        } => {
            let border = match border {
                Some(border) => parse_single_char(&border)?,
                None => settings.border_char()?,
            };
            let padding = padding.unwrap_or(settings.border_padding);
            printer.print_borderstring(&text, border, padding, width.or(settings.width))?;
        }
        Command::Heading { style, text, width } => {
            printer.print_heading(&style, &text, width.or(settings.width))?;
        }
    }

    printer.sink_mut().flush_stdout()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(args).unwrap().command
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_numbers_are_values() {
        let Command::Propvalue { width, pairs, .. } =
            parse(&["termlayout", "propvalue", "--width", "40", "signal", "-42"])
        else {
            panic!("expected propvalue");
        };
        assert_eq!(width, Some(40));
        assert_eq!(pairs, vec!["signal", "-42"]);

        let Command::Border { text, .. } = parse(&["termlayout", "border", "-5 dB"]) else {
            panic!("expected border");
        };
        assert_eq!(text, "-5 dB");

        let Command::Heading { style, text, .. } =
            parse(&["termlayout", "heading", "--warning", "-1 offset"])
        else {
            panic!("expected heading");
        };
        assert_eq!(style, "--warning");
        assert_eq!(text, "-1 offset");
    }

    #[test]
    fn border_text_defaults_to_empty() {
        let Command::Border { border, text, .. } = parse(&["termlayout", "border", "--char", "="])
        else {
            panic!("expected border");
        };
        assert_eq!(border.as_deref(), Some("="));
        assert_eq!(text, "");
    }
}
