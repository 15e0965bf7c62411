mod debug_report;

use rslp::{Options, stem_sentence_with, stem_verbose_with};
use std::io::{self, BufRead, IsTerminal};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let options = Options { remove_diacritics: !config.keep_diacritics };

    match config.input.as_deref() {
        Some(input) => run_line(input, &options, &config),
        None => {
            if let Err(err) = run_stdin(&options, &config) {
                eprintln!("error: failed to read stdin: {err}");
                std::process::exit(1);
            }
        }
    }
}

struct CliConfig {
    input: Option<String>,
    keep_diacritics: bool,
    trace: bool,
    color: bool,
}

fn run_stdin(options: &Options, config: &CliConfig) -> io::Result<()> {
    for line in io::stdin().lock().lines() {
        run_line(&line?, options, config);
    }
    Ok(())
}

fn run_line(line: &str, options: &Options, config: &CliConfig) {
    if config.trace {
        let details: Vec<_> = line.split_whitespace().map(|word| stem_verbose_with(word, options)).collect();
        debug_report::print_run(line, &details, config.color);
    } else {
        println!("{}", stem_sentence_with(line, options));
    }
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut keep_diacritics = false;
    let mut trace = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("rslp {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-k" | "--keep-diacritics" => keep_diacritics = true,
            "-t" | "--trace" => trace = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'\n\n{}", help_text()));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    Ok(CliConfig { input, keep_diacritics, trace, color })
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "rslp {version}

Portuguese stemmer (RSLP suffix stripping).

Usage:
  rslp [OPTIONS] [--] <words...>
  rslp [OPTIONS] --input <text>
  rslp [OPTIONS] < file            Stem stdin line by line.

Options:
  -i, --input <text>         Text to stem. If omitted, reads remaining args
                             or stdin when no args are provided.
  -k, --keep-diacritics      Keep accented characters in the stems.
  -t, --trace                Print the step trace of every word.
  --color                    Force ANSI color output (with --trace).
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  RSLP_DEBUG_STEPS=1         Log every visited step to stderr.

Exit codes:
  0  Success.
  1  Failed to read stdin.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
