use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::Path;

use anyhow::{Result, anyhow};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "numeral-reader-rust",
    version,
    about = "Read numbers aloud in Japanese and Thai"
)]
struct Cli {
    /// Number to read (0 to 10^16). Read from stdin when omitted.
    number: Option<String>,

    /// Target language: ja, th or all (default from settings)
    #[arg(short = 'l', long = "lang")]
    lang: Option<String>,

    /// Output format: text or json (default from settings)
    #[arg(short = 'f', long = "format")]
    format: Option<String>,

    /// Synthesize speech for each reading
    #[arg(short = 's', long = "speak")]
    speak: bool,

    /// Where to write synthesized MP3 audio (implies --speak)
    #[arg(short = 'o', long = "audio-out")]
    audio_out: Option<String>,

    /// Show the preset number sections and exit
    #[arg(long = "show-presets")]
    show_presets: bool,

    /// Run the HTTP server, optionally on ADDR (default from settings)
    #[arg(long = "server", value_name = "ADDR", num_args = 0..=1, default_missing_value = "")]
    server: Option<String>,

    /// Read extra settings from a local TOML file
    #[arg(short = 'r', long = "read-settings")]
    read_settings: Option<String>,

    /// Enable verbose logging
    #[arg(long = "verbose")]
    verbose: bool,

    /// Interactive mode
    #[arg(short = 'i', long = "interactive")]
    interactive: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    numeral_reader_rust::logging::init(cli.verbose)?;

    if let Some(addr) = cli.server.as_deref() {
        let settings =
            numeral_reader_rust::settings::load_settings(cli.read_settings.as_deref().map(Path::new))?;
        let addr = Some(addr.trim().to_string()).filter(|value| !value.is_empty());
        return numeral_reader_rust::server::run_server(settings, addr).await;
    }
    if cli.interactive {
        return run_interactive(cli).await;
    }

    let input = if cli.show_presets {
        None
    } else if let Some(number) = cli.number.clone() {
        Some(number)
    } else if io::stdin().is_terminal() {
        return Err(anyhow!("no number given (pass it as an argument or on stdin)"));
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Some(buffer)
    };

    let output = numeral_reader_rust::run(config_from_cli(&cli), input).await?;
    println!("{}", output);
    Ok(())
}

fn config_from_cli(cli: &Cli) -> numeral_reader_rust::Config {
    numeral_reader_rust::Config {
        lang: cli.lang.clone(),
        format: cli.format.clone(),
        speak: cli.speak || cli.audio_out.is_some(),
        audio_out: cli.audio_out.clone(),
        settings_path: cli.read_settings.clone(),
        show_presets: cli.show_presets,
    }
}

async fn run_interactive(cli: Cli) -> Result<()> {
    let mut config = config_from_cli(&cli);
    config.show_presets = false;
    println!("Interactive mode. Enter a number, or /help for commands.");

    let mut line = String::new();
    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();
    loop {
        line.clear();
        print!("> ");
        io::stdout().flush()?;
        if stdin_lock.read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.starts_with('/') {
            if handle_interactive_command(input, &mut config).await? {
                break;
            }
            continue;
        }

        // A bad number should not end the session.
        match numeral_reader_rust::run(config.clone(), Some(input.to_string())).await {
            Ok(output) => println!("{}", output),
            Err(err) => eprintln!("{}", err),
        }
    }
    Ok(())
}

async fn handle_interactive_command(
    input: &str,
    config: &mut numeral_reader_rust::Config,
) -> Result<bool> {
    let trimmed = input.trim();
    if matches!(trimmed, "/quit" | "/exit") {
        return Ok(true);
    }
    if trimmed == "/help" {
        print_interactive_help();
        return Ok(false);
    }
    if trimmed == "/presets" {
        let mut presets = config.clone();
        presets.show_presets = true;
        println!("{}", numeral_reader_rust::run(presets, None).await?);
        return Ok(false);
    }
    if let Some(arg) = trimmed.strip_prefix("/lang") {
        let value = arg.trim();
        if value.is_empty() {
            println!("lang: {}", config.lang.as_deref().unwrap_or("(settings)"));
        } else {
            match numeral_reader_rust::Language::parse_selection(value) {
                Ok(_) => {
                    config.lang = Some(value.to_string());
                    println!("lang set to {}", value);
                }
                Err(err) => eprintln!("{}", err),
            }
        }
        return Ok(false);
    }
    if let Some(arg) = trimmed.strip_prefix("/format") {
        let value = arg.trim();
        if value.is_empty() {
            println!("format: {}", config.format.as_deref().unwrap_or("(settings)"));
        } else {
            match numeral_reader_rust::OutputFormat::parse(value) {
                Ok(_) => {
                    config.format = Some(value.to_string());
                    println!("format set to {}", value);
                }
                Err(err) => eprintln!("{}", err),
            }
        }
        return Ok(false);
    }
    if let Some(arg) = trimmed.strip_prefix("/speak") {
        match parse_toggle(arg, config.speak) {
            Ok(value) => {
                config.speak = value;
                println!("speak: {}", config.speak);
            }
            Err(err) => eprintln!("{}", err),
        }
        return Ok(false);
    }

    eprintln!("unknown command: {}", trimmed);
    Ok(false)
}

fn parse_toggle(arg: &str, current: bool) -> Result<bool> {
    let value = arg.trim();
    if value.is_empty() {
        return Ok(!current);
    }
    match value.to_lowercase().as_str() {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => Err(anyhow!("expected on/off/true/false/1/0")),
    }
}

fn print_interactive_help() {
    println!("Commands:");
    println!("  /quit, /exit           Exit interactive mode");
    println!("  /presets               Show preset number sections");
    println!("  /lang <ja|th|all>      Set language (or show current)");
    println!("  /format <text|json>    Set output format (or show current)");
    println!("  /speak [on|off]        Toggle speech synthesis");
}
