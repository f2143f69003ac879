#![allow(dead_code)]

use std::convert::Infallible;

use int_output::{Case, CustomFormat, Grouping};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref POLICIES: [CustomFormat; 4] = [
        CustomFormat::default(),
        CustomFormat::builder().separator(' ').decimal(',').build(),
        CustomFormat::builder().separator('𠜱').decimal('·').build(),
        CustomFormat::builder()
            .grouping(Grouping::Posix)
            .case(Case::Lower)
            .build(),
    ];
}

/// Runs a writer against a fresh `String` and returns what it wrote.
pub fn capture<F>(f: F) -> String
where
    F: FnOnce(&mut String) -> Result<(), Infallible>,
{
    let mut s = String::new();
    f(&mut s).unwrap();
    s
}
