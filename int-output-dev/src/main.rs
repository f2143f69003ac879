//! Regenerates `int-output/src/tables.rs`.
//!
//! Run with `cargo run -p int-output-dev` from the workspace root; `rustfmt` must be on the path.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};
use tracing::{debug, info};

const HEADER: &str = "// This file is generated by int-output-dev. Do not edit by hand.\n";

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("int-output")
        .join("src")
        .join("tables.rs");

    let items = [
        (
            "The units digit of every value in `0..100`.",
            char_table("DIGITS", &decimal_digits(|i| i % 10)?),
        ),
        (
            "The tens digit of every value in `0..100`.",
            char_table("TENS_DIGITS", &decimal_digits(|i| i / 10)?),
        ),
        (
            "Upper-case hexadecimal digits.",
            char_table("HEX_DIGITS", &hex_digits(true)?),
        ),
        (
            "Lower-case hexadecimal digits.",
            char_table("HEX_DIGITS_LC", &hex_digits(false)?),
        ),
        (
            "The digits of the magnitude of `i32::MIN`.",
            digit_string("MIN_I32_DIGITS", &i32::MIN.unsigned_abs().to_string()),
        ),
        (
            "The digits of the magnitude of `i64::MIN`.",
            digit_string("MIN_I64_DIGITS", &i64::MIN.unsigned_abs().to_string()),
        ),
    ];

    let mut out = String::from(HEADER);
    for (comment, tokens) in &items {
        debug!(comment, "emitting table");
        out.push('\n');
        out.push_str(&format!("// {}\n", comment));
        out.push_str(&tokens.to_string());
        out.push('\n');
    }

    fs::write(&path, out).with_context(|| format!("failed to write {}", path.display()))?;
    rustfmt(&path)?;
    info!(path = %path.display(), tables = items.len(), "generated tables");
    Ok(())
}

fn decimal_digits(f: impl Fn(u32) -> u32) -> Result<Vec<char>> {
    (0..100)
        .map(|i| char::from_digit(f(i), 10).context("decimal digit out of range"))
        .collect()
}

fn hex_digits(upper: bool) -> Result<Vec<char>> {
    (0..16)
        .map(|i| {
            let ch = char::from_digit(i, 16).context("hex digit out of range")?;
            Ok(if upper { ch.to_ascii_uppercase() } else { ch })
        })
        .collect()
}

fn char_table(name: &str, chars: &[char]) -> TokenStream {
    let ident = format_ident!("{}", name);
    let len = Literal::usize_unsuffixed(chars.len());
    quote! {
        pub(crate) const #ident: [char; #len] = [#(#chars),*];
    }
}

fn digit_string(name: &str, digits: &str) -> TokenStream {
    let ident = format_ident!("{}", name);
    quote! {
        pub(crate) const #ident: &str = #digits;
    }
}

fn rustfmt(path: &Path) -> Result<()> {
    let status = Command::new("rustfmt")
        .arg("--edition")
        .arg("2021")
        .arg(path)
        .status()
        .context("failed to run rustfmt")?;
    if !status.success() {
        bail!("rustfmt exited with {}", status);
    }
    Ok(())
}
