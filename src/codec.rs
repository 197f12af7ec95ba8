//! Catalog CSV codec
//!
//! Layout: `Serial No,UID,Name,Brand,Group,Cost Price,Selling Price,Stock,Modified`.
//!
//! A field is quoted if and only if it contains a comma, a double quote or a line feed, with
//! inner quotes doubled. The serial number is positional and is dropped again on decode.

use std::{
    io,
    iter::Peekable,
    mem,
    str::{Chars, FromStr},
    string::FromUtf8Error,
};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::{
    clock::Clock,
    products::models::{Product, ProductUid},
};

/// Column headers, in order.
pub const HEADER: [&str; 9] = [
    "Serial No",
    "UID",
    "Name",
    "Brand",
    "Group",
    "Cost Price",
    "Selling Price",
    "Stock",
    "Modified",
];

/// CSV encoding errors
#[derive(Debug, Error)]
pub enum CodecError {
    /// The CSV writer rejected a record
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV writer could not be flushed
    #[error("failed to flush CSV: {0}")]
    Io(#[from] io::Error),

    /// The output was not valid UTF-8
    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Encodes `products` as a CSV table, header first, one row per product in list order.
///
/// The final row carries no trailing line break.
///
/// # Errors
///
/// Returns an error if the CSV writer fails, which only happens on an I/O failure of its buffer.
pub fn encode_products(products: &[Product]) -> Result<String, CodecError> {
    // Fields arrive already escaped.
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;

    for (serial, product) in (1_usize..).zip(products) {
        writer.write_record([
            serial.to_string(),
            escape(product.uid.as_str()),
            escape(&product.name),
            escape(&product.brand),
            escape(&product.group),
            product.cost.to_string(),
            product.sell.to_string(),
            product.stock.to_string(),
            escape(&product.modified),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(csv::IntoInnerError::into_error)?;
    let mut text = String::from_utf8(bytes)?;

    if !products.is_empty() && text.ends_with('\n') {
        text.truncate(text.len() - 1);
    }

    Ok(text)
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Decodes a CSV table into products.
///
/// The first record is the header. Rows with fewer than nine fields are skipped. A blank uid is
/// left blank for the caller to assign; a blank modified stamp gets `clock`'s current time.
pub fn decode_products(text: &str, clock: &dyn Clock) -> Vec<Product> {
    let mut products = Vec::new();

    for (row, fields) in (1_usize..).zip(Records::new(text).skip(1)) {
        if fields.len() < HEADER.len() {
            debug!(row, fields = fields.len(), "skipping short CSV row");

            continue;
        }

        products.push(decode_row(&fields, clock));
    }

    products
}

/// Records of a CSV text, split field by field.
///
/// Inside quotes a doubled quote is one literal quote and any other quote leaves quoted mode.
/// Outside quotes a quote enters quoted mode wherever it appears in a field. Commas and line
/// breaks inside quotes are field text. Empty lines yield no record.
struct Records<'t> {
    chars: Peekable<Chars<'t>>,
}

impl<'t> Records<'t> {
    fn new(text: &'t str) -> Self {
        Self {
            chars: text.chars().peekable(),
        }
    }
}

impl Iterator for Records<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut quoted = false;
        let mut started = false;

        while let Some(c) = self.chars.next() {
            if quoted {
                match c {
                    '"' if self.chars.next_if_eq(&'"').is_some() => field.push('"'),
                    '"' => quoted = false,
                    _ => field.push(c),
                }

                continue;
            }

            match c {
                '\n' if started => {
                    fields.push(field);

                    return Some(fields);
                }
                '\n' => {}
                '\r' if self.chars.peek() == Some(&'\n') => {}
                ',' => {
                    fields.push(mem::take(&mut field));
                    started = true;
                }
                '"' => {
                    quoted = true;
                    started = true;
                }
                _ => {
                    field.push(c);
                    started = true;
                }
            }
        }

        started.then(|| {
            fields.push(field);
            fields
        })
    }
}

fn decode_row(fields: &[String], clock: &dyn Clock) -> Product {
    let field = |index: usize| fields.get(index).map_or("", String::as_str);

    let modified = match field(8) {
        "" => clock.now(),
        modified => modified.to_string(),
    };

    Product {
        uid: ProductUid::new(field(1)),
        name: field(2).to_string(),
        brand: field(3).to_string(),
        group: field(4).to_string(),
        cost: parse_price(field(5)),
        sell: parse_price(field(6)),
        stock: parse_stock(field(7)),
        modified,
    }
}

/// Parses a price, reading blank or unparsable text as zero.
fn parse_price(field: &str) -> Decimal {
    let field = field.trim();

    if field.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(field)
        .or_else(|_| Decimal::from_scientific(field))
        .unwrap_or_else(|error| {
            debug!(field, %error, "unparsable price, using zero");

            Decimal::ZERO
        })
}

/// Parses the leading integer of a stock field, like `parseInt`.
///
/// Blank, non-numeric and negative values read as zero.
fn parse_stock(field: &str) -> u64 {
    let field = field.trim_start();

    let (negative, unsigned) = match field.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, field.strip_prefix('+').unwrap_or(field)),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = unsigned.get(..end).unwrap_or_default();

    if negative || digits.is_empty() {
        return 0;
    }

    digits.parse().unwrap_or(u64::MAX)
}
