use std::{
    io::{self, BufRead},
    iter,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use commandline::Options;
use log::{debug, info};
use termtree::{parse, tokens::from_codes, validate, PositionalError, SyntaxError};

mod commandline;

fn main() -> Result<ExitCode> {
    let options = Options::parse();

    stderrlog::new()
        .module("termtree")
        .verbosity(options.verbose)
        .init()?;

    let mut failures = 0usize;
    for (line_idx, line) in io::stdin().lock().lines().enumerate() {
        let line = line.context("Failed to read standard input")?;
        let codes: Vec<&str> = line.split_whitespace().collect();

        match codes.first() {
            None => continue,
            Some(code) if code.starts_with('#') => continue,
            _ => {}
        }

        let tokens = match from_codes(&codes) {
            Ok(tokens) => tokens,
            Err(err) => {
                println!("error: {}", err);
                failures += 1;
                continue;
            }
        };

        match validate(&tokens).and_then(|()| parse(&tokens)) {
            Ok(tree) => {
                debug!("Line {}: {}", line_idx + 1, tree);
                print!("{}", tree.render(&codes));
            }
            Err(err) => {
                describe_error(line_idx + 1, &codes, &err);
                failures += 1;
            }
        }
    }

    info!("Finished with {} failures", failures);
    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn describe_error(line_no: usize, codes: &[&str], err: &SyntaxError) {
    fn pad_char(ch: char, times: usize) -> String {
        iter::repeat(ch).take(times).collect()
    }

    let index = err.position().index().min(codes.len() - 1);
    let padding: usize = codes[..index].iter().map(|code| code.len() + 1).sum();

    let gutter = format!("{}", line_no);

    println!("{}| {}", gutter, codes.join(" "));
    println!(
        "{}| {}{}--- {}",
        pad_char(' ', gutter.len()),
        pad_char(' ', padding),
        pad_char('^', codes[index].len()),
        err
    );
    println!("error: {}", err.describe());
}
