//! CLI command implementations.
//!
//! Commands are thin glue over `stockdb_core`: they validate scalar
//! ranges (positive identifiers, status codes), pass text fields through
//! at arbitrary length, and render results. The core truncates text and
//! never range-checks.

pub mod customer;
pub mod inspect;
pub mod notebook;
pub mod report;
pub mod sale;

use clap::builder::RangedI64ValueParser;

/// Parser for record identifiers: positive 32-bit integers.
pub(crate) fn id_parser() -> RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(1..)
}

/// Parser for status codes: 0 (sold) or 1 (in stock).
pub(crate) fn status_parser() -> RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(0..=1)
}

/// Parser for prices: non-negative real numbers.
pub(crate) fn parse_price(raw: &str) -> Result<f32, String> {
    let price: f32 = raw.parse().map_err(|_| format!("`{raw}` is not a number"))?;
    if price < 0.0 {
        return Err("price must not be negative".to_string());
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Args {
        #[arg(value_parser = id_parser())]
        id: u32,

        #[arg(value_parser = status_parser())]
        status: u32,
    }

    #[test]
    fn id_and_status_parsers_enforce_ranges() {
        let args = Args::try_parse_from(["args", "7", "1"]).unwrap();
        assert_eq!(args.id, 7);
        assert_eq!(args.status, 1);

        // Identifiers start at 1; status codes stop at 1.
        assert!(Args::try_parse_from(["args", "0", "1"]).is_err());
        assert!(Args::try_parse_from(["args", "7", "2"]).is_err());
    }

    #[test]
    fn price_parser_rejects_negatives_and_garbage() {
        assert_eq!(parse_price("499.5").unwrap(), 499.5);
        assert_eq!(parse_price("0").unwrap(), 0.0);
        assert!(parse_price("-1").is_err());
        assert!(parse_price("cheap").is_err());
    }
}
