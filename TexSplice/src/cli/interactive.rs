//! Prompt-driven mode for users who double-click the binary
//!
//! Asks for the same inputs as the subcommands, with defaults from the
//! config when an answer is left blank.

use std::io;
use std::path::PathBuf;

use console::Term;

use super::commands;
use crate::config::TexSpliceConfig;
use crate::repack::default_output_path;

pub fn run(config: &TexSpliceConfig) -> anyhow::Result<()> {
    let term = Term::stdout();
    term.write_line("=== TexSplice: DDS extract / repack ===")?;

    let action = ask(&term, "Extract or repack? (e/r): ")?.to_lowercase();
    let batch = ask(&term, "Run in batch mode? (y/n): ")?.eq_ignore_ascii_case("y");

    match (action.as_str(), batch) {
        ("e", true) => {
            let dir = ask_path(&term, "Enter path to folder containing files: ")?;
            commands::batch::extract(&dir, config)
        }
        ("e", false) => {
            let source = ask_path(&term, "Enter full path to the input file: ")?;
            let destination = ask_or(
                &term,
                &format!(
                    "Enter output directory (press Enter for default '{}'): ",
                    config.output_dir_name
                ),
                &config.output_dir_name,
            )?;
            commands::extract::execute(&source, &PathBuf::from(destination), config, false)
        }
        ("r", true) => {
            let dir = ask_path(&term, "Enter path to folder containing *_extracted folders: ")?;
            let config = ask_index(&term, config)?;
            commands::batch::repack(&dir, &config)
        }
        ("r", false) => {
            let source = ask_path(&term, "Enter full path to the original file: ")?;
            let extracted =
                ask_path(&term, "Enter full path to the folder containing extracted DDS files: ")?;
            let config = ask_index(&term, config)?;
            let default_output = default_output_path(&source);
            let output = ask_or(
                &term,
                &format!(
                    "Enter output file (press Enter for default '{}'): ",
                    default_output.display()
                ),
                &default_output.to_string_lossy(),
            )?;
            commands::repack::execute(&source, &extracted, &PathBuf::from(output), &config, false)
        }
        _ => anyhow::bail!("Unknown choice '{action}', expected 'e' or 'r'"),
    }
}

fn ask(term: &Term, prompt: &str) -> io::Result<String> {
    term.write_str(prompt)?;
    Ok(clean_answer(&term.read_line()?))
}

fn ask_or(term: &Term, prompt: &str, default: &str) -> io::Result<String> {
    let answer = ask(term, prompt)?;
    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer
    })
}

fn ask_path(term: &Term, prompt: &str) -> anyhow::Result<PathBuf> {
    let answer = ask(term, prompt)?;
    if answer.is_empty() {
        anyhow::bail!("No path given");
    }
    Ok(PathBuf::from(answer))
}

fn ask_index(term: &Term, config: &TexSpliceConfig) -> io::Result<TexSpliceConfig> {
    let mut config = config.clone();
    config.index_file_name = ask_or(
        term,
        &format!(
            "Enter DDS index filename (press Enter for default '{}'): ",
            config.index_file_name
        ),
        &config.index_file_name,
    )?;
    Ok(config)
}

/// Trim whitespace and the quotes that file managers add when pasting paths.
fn clean_answer(input: &str) -> String {
    input.trim().trim_matches('"').trim().to_string()
}
