use crate::errors::Error;

use multibase::Base;

/// Decimals of the payment token's atomic unit.
pub const ATOMIC_DECIMALS: u32 = 18;

/// Format atomic units as a decimal token amount, trailing zeros trimmed.
pub fn from_atomic(atomic: u128) -> String {
    let base = 10u128.pow(ATOMIC_DECIMALS);

    let whole = atomic / base;
    let frac = atomic % base;

    if frac == 0 {
        return whole.to_string();
    }

    let frac = format!("{:018}", frac);
    let frac = frac.trim_end_matches('0');

    format!("{}.{}", whole, frac)
}

/// Parse a decimal token amount into atomic units.
pub fn to_atomic(formatted: &str) -> Result<u128, Error> {
    let (whole, frac) = match formatted.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (formatted, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(Error::Amount("empty amount"));
    }

    // u128 parsing tolerates a leading +, signs are not amounts here.
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Amount("not a decimal number"));
    }

    if frac.len() > ATOMIC_DECIMALS as usize {
        return Err(Error::Amount("too many decimal places"));
    }

    let base = 10u128.pow(ATOMIC_DECIMALS);

    let whole = if whole.is_empty() {
        0
    } else {
        whole.parse::<u128>()?
    };

    let frac = if frac.is_empty() {
        0
    } else {
        frac.parse::<u128>()? * 10u128.pow(ATOMIC_DECIMALS - frac.len() as u32)
    };

    whole
        .checked_mul(base)
        .and_then(|atomic| atomic.checked_add(frac))
        .ok_or(Error::Amount("amount overflows atomic units"))
}

/// Build a base64 data URL from raw bytes.
pub fn data_url(mime_type: &str, data: &[u8]) -> String {
    let mut data_url = String::from("data:");

    data_url.push_str(mime_type);
    data_url.push_str(";base64,");
    data_url.push_str(&Base::Base64.encode(data));

    data_url
}

/// Read an image file and return it as a base64 data URL.
pub async fn image_data_url(path: &std::path::Path) -> Result<String, Error> {
    let mime_type = match mime_guess::from_path(path).first_raw() {
        Some(mime) if mime.starts_with("image/") => mime,
        _ => return Err(Error::Image),
    };

    let data = tokio::fs::read(path).await?;

    Ok(data_url(mime_type, &data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_formatting() {
        assert_eq!(from_atomic(0), "0");
        assert_eq!(from_atomic(1_000_000_000_000_000_000), "1");
        assert_eq!(from_atomic(10_000_000_000_000_000), "0.01");
        assert_eq!(from_atomic(1_500_000_000_000_000_000), "1.5");
        assert_eq!(from_atomic(1), "0.000000000000000001");
    }

    #[test]
    fn atomic_parsing() {
        assert_eq!(to_atomic("0").unwrap(), 0);
        assert_eq!(to_atomic("1").unwrap(), 1_000_000_000_000_000_000);
        assert_eq!(to_atomic("0.01").unwrap(), 10_000_000_000_000_000);
        assert_eq!(to_atomic("1.5").unwrap(), 1_500_000_000_000_000_000);
        assert_eq!(to_atomic(".5").unwrap(), 500_000_000_000_000_000);
    }

    #[test]
    fn atomic_roundtrip() {
        for atomic in [1u128, 42, 10_000_000_000_000_000, 1_500_000_000_000_000_000] {
            assert_eq!(to_atomic(&from_atomic(atomic)).unwrap(), atomic);
        }
    }

    #[test]
    fn atomic_rejects_bad_amounts() {
        assert!(matches!(
            to_atomic("0.0000000000000000001"),
            Err(Error::Amount(_))
        ));

        assert!(to_atomic("one").is_err());
        assert!(to_atomic("1.2.3").is_err());
    }

    #[test]
    fn atomic_rejects_signs() {
        assert!(matches!(to_atomic("0.+5"), Err(Error::Amount(_))));
        assert!(matches!(to_atomic("+1"), Err(Error::Amount(_))));
        assert!(matches!(to_atomic("-1"), Err(Error::Amount(_))));
        assert!(matches!(to_atomic("1.-5"), Err(Error::Amount(_))));
        assert!(matches!(to_atomic(""), Err(Error::Amount(_))));
        assert!(matches!(to_atomic("."), Err(Error::Amount(_))));
    }

    #[test]
    fn data_url_format() {
        let url = data_url("image/png", b"png bytes");

        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn image_data_url_rejects_non_images() {
        let result = image_data_url(std::path::Path::new("notes.md")).await;

        assert!(matches!(result, Err(Error::Image)));
    }
}
