// SPDX-License-Identifier: MIT OR Apache-2.0
//! difir CLI binary - structural diff of two JSON documents

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde_json::Value;

use difir::json::JsonAccess;
use difir::{ArrayMatch, Difference, MatchPolicy, PropertyMatch, SimpleDiffFormat};

#[derive(Parser)]
#[command(name = "difir")]
#[command(version, about, long_about = None)]
struct Args {
    /// Left JSON file
    left: PathBuf,

    /// Right JSON file
    right: PathBuf,

    /// How array elements are paired between the two documents
    #[arg(long, value_enum, default_value = "position")]
    arrays: ArrayStrategy,

    /// How object properties are paired between the two documents
    #[arg(long, value_enum, default_value = "name")]
    objects: ObjectStrategy,

    /// Match array elements by this field of each element (implies --arrays key)
    #[arg(long, value_name = "FIELD")]
    key_field: Option<String>,

    /// Emit one JSON record per difference instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ArrayStrategy {
    Position,
    Key,
}

#[derive(Clone, Copy, ValueEnum)]
enum ObjectStrategy {
    Name,
    Position,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(error) => {
            eprintln!("difir: {error:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> anyhow::Result<usize> {
    let left = read_document(&args.left)?;
    let right = read_document(&args.right)?;

    let arrays = match (args.key_field.as_ref(), args.arrays) {
        (Some(_), _) | (None, ArrayStrategy::Key) => ArrayMatch::Key,
        (None, ArrayStrategy::Position) => ArrayMatch::Position,
    };
    let properties = match args.objects {
        ObjectStrategy::Name => PropertyMatch::Name,
        ObjectStrategy::Position => PropertyMatch::Position,
    };
    let policy = MatchPolicy::new(arrays, properties);

    let access = args
        .key_field
        .clone()
        .map_or_else(JsonAccess::new, JsonAccess::keyed_by_field);

    let differences = difir::differences_with(Some(&left), Some(&right), &access, policy);

    let mut reported = 0;
    if args.json {
        for difference in differences {
            reported += 1;
            println!("{}", render_json(&difference)?);
        }
    } else {
        let format = SimpleDiffFormat::default();
        for line in difir::format_all(differences, &format) {
            reported += 1;
            println!("{line}");
        }
    }
    Ok(reported)
}

fn read_document(path: &Path) -> anyhow::Result<Value> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn render_json(difference: &Difference<'_, Value>) -> anyhow::Result<String> {
    serde_json::to_string(difference).context("serializing difference record")
}
