use std::io::{self, BufRead, Write};

use shopfront_core::{Amount, CoreError, ProductId};

/// What the shopper typed in
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseInput {
    pub product: ProductId,
    pub total: Amount,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Product name must not be empty")]
    EmptyProduct,
    #[error("Invalid purchase total: {0}")]
    InvalidTotal(#[from] CoreError),
    #[error("Input ended before {0} was entered")]
    UnexpectedEof(&'static str),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Ask for one product name and one total.
pub fn prompt_purchase<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PurchaseInput, InputError> {
    writeln!(output, "Enter the product name:")?;
    output.flush()?;
    let product = read_line(input, "the product name")?;
    if product.is_empty() {
        return Err(InputError::EmptyProduct);
    }

    writeln!(output, "Enter the purchase total:")?;
    output.flush()?;
    let total = read_line(input, "the purchase total")?.parse::<Amount>()?;

    Ok(PurchaseInput {
        product: ProductId::new(product),
        total,
    })
}

fn read_line<R: BufRead>(input: &mut R, what: &'static str) -> Result<String, InputError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::UnexpectedEof(what));
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(typed: &str) -> (Result<PurchaseInput, InputError>, String) {
        let mut input = Cursor::new(typed.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = prompt_purchase(&mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_reads_product_and_total() {
        let (result, shown) = prompt("Desk lamp\n49.90\n");

        let purchase = result.unwrap();
        assert_eq!(purchase.product, ProductId::from("Desk lamp"));
        assert_eq!(purchase.total, Amount::from_minor(4990));
        assert_eq!(shown, "Enter the product name:\nEnter the purchase total:\n");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let (result, _) = prompt("  Desk lamp \r\n 49.90 \n");

        let purchase = result.unwrap();
        assert_eq!(purchase.product, ProductId::from("Desk lamp"));
        assert_eq!(purchase.total, Amount::from_minor(4990));
    }

    #[test]
    fn test_rejects_malformed_total() {
        let (result, _) = prompt("Desk lamp\nforty\n");
        assert!(matches!(result, Err(InputError::InvalidTotal(_))));
    }

    #[test]
    fn test_rejects_empty_product() {
        let (result, _) = prompt("   \n10\n");
        assert!(matches!(result, Err(InputError::EmptyProduct)));
    }

    #[test]
    fn test_reports_missing_total() {
        let (result, _) = prompt("Desk lamp\n");
        assert!(matches!(result, Err(InputError::UnexpectedEof("the purchase total"))));
    }
}
