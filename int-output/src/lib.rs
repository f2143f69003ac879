/*!
[![Crates.io](https://img.shields.io/crates/v/int-output.svg)](https://crates.io/crates/int-output)
[![Documentation](https://docs.rs/int-output/badge.svg)](https://docs.rs/int-output/)

A Rust crate for writing integers as text one character at a time, left to right, with no
intermediate string.

# Introduction

Every writer in this crate takes a [`Sink`], a consumer of single characters, and emits the
representation of an integer into it, most significant digit first. Supported representations
are:

* plain decimal ([`decimal`]), for signed and unsigned 32- and 64-bit integers, plus fixed-width
  one-, two- and three-digit fields;
* decimal with the digits grouped in threes by a separator of your choice ([`grouped`]);
* hexadecimal, upper- or lower-case, minimal or as a fixed-width field of 1, 2, 4 or 8 digits
  ([`hex`]);
* decimal with an implied decimal point a given number of places from the right ([`scaled`]).

None of the writers can fail on their own account and none of them allocate; the only errors
are those of the sink itself, which are passed back unchanged.

# Sinks

[`Sink`] is implemented for [`String`], for [`arrayvec::ArrayString`], and for mutable
references to any sink. Adapters cover closures ([`sink::from_fn`]), [`core::fmt::Write`]
implementors ([`sink::FmtSink`]) and [`std::io::Write`] implementors ([`sink::IoSink`]).

# Examples

```rust
use int_output::{decimal, grouped, hex, scaled, Case};

let mut s = String::new();
decimal::write_i32(i32::MIN, &mut s).unwrap();
s.push(' ');
grouped::write_i64_grouped(1234567890, ',', &mut s).unwrap();
s.push(' ');
hex::write_hex_u32(0xDEADFEED, Case::Lower, &mut s).unwrap();
s.push(' ');
scaled::write_i32_scaled(123456, 6, '.', &mut s).unwrap();
assert_eq!(s, "-2147483648 1,234,567,890 deadfeed 0.123456");
```

Writing into a stack buffer, with the separator and decimal point taken from a
[`CustomFormat`]:

```rust
use int_output::{Buffer, CustomFormat};

let format = CustomFormat::builder().separator('.').decimal(',').build();
let mut buf = Buffer::new();
assert_eq!(buf.write_formatted(-1234567i32, &format).unwrap(), "-1.234.567");
assert_eq!(buf.write_scaled(-1234567i32, 3, &format).unwrap(), "-1234,567");
```

Writing to a [`core::fmt::Formatter`]:

```rust
use core::fmt;
use int_output::{grouped, sink::FmtSink};

struct Thousands(u64);

impl fmt::Display for Thousands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        grouped::write_u64_grouped(self.0, '\'', &mut FmtSink(f))
    }
}

assert_eq!(Thousands(u64::MAX).to_string(), "18'446'744'073'709'551'615");
```

# Extra features

| Available features | What to put in your `Cargo.toml`                                    |
| :----------------- | :------------------------------------------------------------------ |
| `no_std`           | `int-output = { version = "0.1", default-features = false }`        |
| `with-serde`       | `int-output = { version = "0.1", features = ["with-serde"] }`       |
| `tracing`          | `int-output = { version = "0.1", features = ["tracing"] }`          |
| `no-panic`         | `int-output = { version = "0.1", features = ["no-panic"] }`         |

`no-panic` checks at link time (release builds only) that the digit table lookups cannot
panic.
*/

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    dead_code,
    deprecated,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    unused
)]
#![doc(html_root_url = "https://docs.rs/int-output/0.1.0")]
#![allow(clippy::unnecessary_cast)]

mod buffer;
mod constants;
mod error;
mod error_kind;
mod format;
mod integer;
mod tables;
mod to_formatted_string;

pub mod decimal;
pub mod grouped;
pub mod hex;
pub mod scaled;
pub mod sink;

pub use crate::buffer::Buffer;
pub use crate::error::Error;
pub use crate::error_kind::ErrorKind;
pub use crate::format::{
    CustomFormat, CustomFormatBuilder, Format, Grouping, DEFAULT_DECIMAL, DEFAULT_SEPARATOR,
};
pub use crate::hex::Case;
pub use crate::integer::Integer;
pub use crate::sink::Sink;
#[cfg(feature = "std")]
pub use crate::to_formatted_string::ToFormattedString;

mod private {
    pub trait Sealed {}
}
