//! `rle` CLI — run-length encode and decode text from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Encode text (stdin → stdout)
//! echo 'aaabbc' | rle encode
//!
//! # Encode from file to file
//! rle encode -i notes.txt -o notes.rle
//!
//! # Decode back
//! echo '3a2b1c' | rle decode
//!
//! # Show byte statistics for an input
//! rle stats -i notes.txt
//!
//! # No subcommand: interactive session
//! rle
//! ```
//!
//! The codec is line-oriented text: one trailing newline (as left by shells
//! and text files) is stripped before encoding or decoding, so it is never
//! treated as payload.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};

#[derive(Parser)]
#[command(
    name = "rle",
    version,
    about = "Textual run-length codec (count-prefixed character runs)"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run-length encode text
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Decode run-length encoded text
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show byte statistics for encoding an input
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Encode { input, output }) => {
            let text = read_input(input.as_deref())?;
            let encoded = rle_core::encode(&text);
            write_output(output.as_deref(), &encoded)?;
        }
        Some(Commands::Decode { input, output }) => {
            let text = read_input(input.as_deref())?;
            let plain = rle_core::decode(&text).context("Failed to decode input")?;
            write_output(output.as_deref(), &plain)?;
        }
        Some(Commands::Stats { input }) => {
            let text = read_input(input.as_deref())?;
            let encoded = rle_core::encode(&text);
            let plain_bytes = text.len();
            let encoded_bytes = encoded.len();
            println!("Plain size:   {} bytes", plain_bytes);
            println!("Encoded size: {} bytes", encoded_bytes);
            println!(
                "Saved:        {} bytes",
                plain_bytes as i64 - encoded_bytes as i64
            );
        }
        None => run_interactive()?,
    }

    Ok(())
}

/// Interactive session: a menu loop that encodes or decodes one line at a
/// time and reports byte counts after each operation. Decode failures are
/// printed and the loop continues; EOF or any non-menu choice quits.
fn run_interactive() -> Result<()> {
    loop {
        let Some(choice) = prompt_line("\nselect: encode [e], decode [d], quit [q]: ")? else {
            break;
        };

        match choice.chars().next() {
            Some('e') | Some('E') => {
                let Some(text) = prompt_line("type the text to encode and press enter:\n")? else {
                    break;
                };
                let encoded = rle_core::encode(&text);
                println!("{encoded}");
                report_bytes(text.len(), encoded.len());
            }
            Some('d') | Some('D') => {
                let prompt = format!(
                    "type the text to decode and press enter (counts of 10 or more are fenced by '{}'):\n",
                    rle_core::SENTINEL
                );
                let Some(text) = prompt_line(&prompt)? else {
                    break;
                };
                match rle_core::decode(&text) {
                    Ok(plain) => {
                        println!("{plain}");
                        report_bytes(plain.len(), text.len());
                    }
                    Err(err) => println!("decode failed: {err}"),
                }
            }
            _ => break,
        }
    }

    Ok(())
}

/// Print the byte sizes of both forms and how many bytes encoding saves
/// (negative when the encoded form is larger, as with run-free text).
fn report_bytes(plain: usize, encoded: usize) {
    println!(
        "plain: {} byte(s); encoded: {} byte(s); saved: {} byte(s)",
        plain,
        encoded,
        plain as i64 - encoded as i64
    );
}

/// Print a prompt and read one line. Returns `None` at end of input.
fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(strip_line_ending(line)))
}

fn read_input(path: Option<&str>) -> Result<String> {
    let raw = match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    Ok(strip_line_ending(raw))
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

/// Strip one trailing `\n` or `\r\n`.
fn strip_line_ending(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}
