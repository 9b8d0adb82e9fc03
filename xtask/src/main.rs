//! xtask - Build tasks for tpulse
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, Command, CommandFactory, Parser, Subcommand};

use tpulse::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for tpulse")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            // Neither flag means both
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

/// Visible subcommands of `cmd`.
fn visible_subcommands(cmd: &Command) -> impl Iterator<Item = &Command> {
    cmd.get_subcommands().filter(|c| !c.is_hide_set())
}

fn render_man(cmd: &Command, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;
    fs::write(path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// Generate man pages using clap_mangen, one per (nested) subcommand.
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    render_man(&cmd, &man_dir.join("tpulse.1"))?;

    for sub in visible_subcommands(&cmd) {
        let name = sub.get_name();
        render_man(sub, &man_dir.join(format!("tpulse-{}.1", name)))?;
        for nested in visible_subcommands(sub) {
            let file = format!("tpulse-{}-{}.1", name, nested.get_name());
            render_man(nested, &man_dir.join(file))?;
        }
    }

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

fn is_builtin(arg: &Arg) -> bool {
    matches!(arg.get_id().as_str(), "help" | "version")
}

/// Markdown bullet list of a command's arguments and options.
fn args_markdown(cmd: &Command) -> String {
    let mut out = String::new();
    for arg in cmd.get_arguments().filter(|a| !is_builtin(a)) {
        let label = if arg.is_positional() {
            format!("<{}>", arg.get_id().as_str().to_uppercase())
        } else {
            match (arg.get_short(), arg.get_long()) {
                (Some(s), Some(l)) => format!("-{}, --{}", s, l),
                (None, Some(l)) => format!("--{}", l),
                (Some(s), None) => format!("-{}", s),
                (None, None) => continue,
            }
        };
        let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
        out.push_str(&format!("- `{}`: {}\n", label, help));
    }
    out
}

fn command_markdown(cmd: &Command, title: &str, heading: &str) -> String {
    let mut out = format!("{} {}\n\n", heading, title);
    if let Some(about) = cmd.get_about() {
        out.push_str(&format!("{}\n\n", about));
    }
    let args = args_markdown(cmd);
    if !args.is_empty() {
        out.push_str(&args);
        out.push('\n');
    }
    if let Some(long_about) = cmd.get_long_about() {
        out.push_str(&format!("```\n{}\n```\n\n", long_about));
    }
    out
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::from("# tpulse Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");

    markdown.push_str("## Table of Contents\n\n");
    for sub in visible_subcommands(&cmd) {
        let name = sub.get_name();
        markdown.push_str(&format!("- [{}](#tpulse-{})\n", name, name));
    }
    markdown.push_str("\n---\n\n");

    markdown.push_str(&command_markdown(&cmd, "tpulse", "##"));
    for sub in visible_subcommands(&cmd) {
        let title = format!("tpulse {}", sub.get_name());
        markdown.push_str(&command_markdown(sub, &title, "##"));
        for nested in visible_subcommands(sub) {
            let nested_title = format!("{} {}", title, nested.get_name());
            markdown.push_str(&command_markdown(nested, &nested_title, "####"));
        }
        markdown.push_str("---\n\n");
    }

    markdown.push_str("\n*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("COMMANDS.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());

    Ok(())
}
