use std::{iter, path::Path};

use anyhow::{bail, Result};
use clap::Parser;
use log::info;

use commandline::{Operation, Options};
use error::PositionalError;
use ext::PathExt;
use workspace::{Module, Package, Workspace};

mod commandline;
mod error;
mod ext;
mod lexer;
mod source_map;
mod span;
mod tester;
mod workspace;

fn main() -> Result<()> {
    let options = Options::parse();

    stderrlog::new()
        .module(module_path!())
        .verbosity(options.verbose)
        .init()?;

    match options.operation {
        Operation::Check { workspace } => check(&workspace),
        Operation::Lex { workspace } => print_lexemes(&workspace),
        Operation::Tree { workspace } => print_tree(&workspace),
        Operation::SelfTest => self_test(),
    }
}

fn load(directory: &Path) -> Result<Workspace> {
    if !directory.is_dir() {
        bail!("'{}' is not a directory", directory.display());
    }
    let workspace = workspace::load_workspace(directory);
    if workspace.is_empty() {
        bail!("No packages found in '{}'", directory.display());
    }
    Ok(workspace)
}

fn check(directory: &Path) -> Result<()> {
    let mut workspace = load(directory)?;

    let mut error_count = 0;
    for source in workspace.sources_mut() {
        for error in source.lex()? {
            println!("{}", error.clone().relative_to(directory));
            describe_error(&error, source.contents());
            error_count += 1;
        }
    }

    if error_count > 0 {
        bail!("Lexing failed with {} error(s)", error_count);
    }
    let lexeme_count: usize = workspace
        .sources()
        .iter()
        .map(|source| source.lexemes().map_or(0, <[_]>::len))
        .sum();
    info!(
        "Lexed {} sources into {} lexemes",
        workspace.count_sources(),
        lexeme_count
    );
    Ok(())
}

fn print_lexemes(directory: &Path) -> Result<()> {
    let mut workspace = load(directory)?;

    for source in workspace.sources_mut() {
        source.lex()?;
        println!("{}:", source.path().beyond(directory).display());
        for lexeme in source.lexemes().unwrap_or_default() {
            println!(
                "  {:>9} {:<28} '{}'",
                format!("{:?}", lexeme.section),
                lexeme.to_string(),
                source.section(lexeme)
            );
        }
    }
    Ok(())
}

fn print_tree(directory: &Path) -> Result<()> {
    let workspace = load(directory)?;

    for package in workspace.packages().values() {
        match package {
            Package::Module(module) => print_module(module, directory, 0),
            Package::Source(source) => {
                println!("{} ({})", source.name(), source.path().beyond(directory).display())
            }
        }
    }
    Ok(())
}

fn print_module(module: &Module, root: &Path, depth: usize) {
    let indent = pad_char(' ', depth * 2);
    println!("{}{}/", indent, module.name());
    for source in module.sources().values() {
        println!(
            "{}  {} ({})",
            indent,
            source.name(),
            source.path().beyond(root).display()
        );
    }
    for submodule in module.submodules().values() {
        print_module(submodule, root, depth + 1);
    }
}

fn self_test() -> Result<()> {
    let mut tester = tester::Tester::new();
    tester.run_all(&tester::all_probes());
    if !tester.report() {
        bail!("Self-test failed");
    }
    Ok(())
}

fn pad_char(ch: char, times: usize) -> String {
    iter::repeat(ch).take(times).collect()
}

/// Prints the line an error is on, underlining the erroneous section.
fn describe_error(err: &dyn PositionalError, content: &str) {
    let Some(line) = source_map::find_line(content, err.range().start()) else {
        return;
    };
    let padding = line.column_of(err.range().start());
    let width = err
        .range()
        .lookup(content)
        .chars()
        .count()
        .max(1);

    let gutter = format!("{}", line.line_no());

    println!("{}| {}", gutter, line.for_display());
    println!(
        "{}| {}{}--- {}",
        pad_char(' ', gutter.len()),
        pad_char(' ', padding),
        pad_char('^', width),
        err.describe()
    );
}
