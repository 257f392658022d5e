use anyhow::{Context, Result};
use macro_markup_config::Config;
use macro_markup_engine::{MacroEvent, editor, persisted, scan_events};
use std::io::Read;
use std::{env, process};

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <scan|to-editor|to-persisted> [file]");
    eprintln!();
    eprintln!("  scan          print the text/macro event stream of the input");
    eprintln!("  to-editor     expand persisted macro tags into editor wrapper blocks");
    eprintln!("  to-persisted  collapse editor wrapper blocks back to persisted tags");
    eprintln!();
    eprintln!("Reads from [file] when given, otherwise from stdin.");
    eprintln!(
        "Wrapper attributes for to-editor come from {}",
        Config::config_path().display()
    );
    process::exit(1);
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn load_config() -> Config {
    match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        usage(&args[0]);
    }
    let input = read_input(args.get(2).map(String::as_str))?;

    match args[1].as_str() {
        "scan" => {
            let events = scan_events(&input)?;
            for event in events {
                match event {
                    MacroEvent::Text(t) => println!("text {} {t:?}", t.len()),
                    MacroEvent::Macro(m) => {
                        let attrs: Vec<String> = m
                            .attributes
                            .iter()
                            .map(|(n, v)| format!("{n}={v:?}"))
                            .collect();
                        println!("macro {} {}", m.alias, attrs.join(" "));
                    }
                }
            }
        }
        "to-editor" => {
            let config = load_config();
            let attrs = config.wrapper_attribute_pairs();
            print!("{}", persisted::to_editor_markup(&input, &attrs));
        }
        "to-persisted" => {
            print!("{}", editor::to_persisted(&input));
        }
        _ => usage(&args[0]),
    }

    Ok(())
}
