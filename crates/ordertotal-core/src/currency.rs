//! # Currency Module
//!
//! ISO-4217 currencies known to the calculator.
//!
//! ## Lookup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Currency::from_code(" eur ")                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_currency_code ── not 3 ASCII letters? → InvalidFormat         │
//! │       │ "EUR"                                                           │
//! │       ▼                                                                 │
//! │  registry lookup ───────── not registered? ─────→ UnknownCurrency       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Currency { code: "EUR", minor_units: 2, symbol: "€" }                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Currency` can only come out of the registry, so holding one proves the
//! code was valid.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::ValidationError;
use crate::validation::validate_currency_code;

/// An ISO-4217 currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    code: &'static str,
    minor_units: u8,
    symbol: &'static str,
}

impl Currency {
    const fn new(code: &'static str, minor_units: u8, symbol: &'static str) -> Self {
        Currency {
            code,
            minor_units,
            symbol,
        }
    }

    /// Looks up a currency by its alphabetic code.
    ///
    /// Surrounding whitespace is ignored and the code is matched
    /// case-insensitively.
    ///
    /// ## Example
    /// ```rust
    /// use ordertotal_core::currency::Currency;
    ///
    /// let eur = Currency::from_code("eur").unwrap();
    /// assert_eq!(eur.code(), "EUR");
    /// assert_eq!(eur.minor_units(), 2);
    ///
    /// assert!(Currency::from_code("EU").is_err());  // malformed
    /// assert!(Currency::from_code("XYZ").is_err()); // not registered
    /// ```
    pub fn from_code(code: &str) -> Result<Self, ValidationError> {
        let normalized = validate_currency_code(code)?;

        CURRENCIES
            .binary_search_by(|c| c.code.cmp(normalized.as_str()))
            .map(|idx| CURRENCIES[idx])
            .map_err(|_| ValidationError::UnknownCurrency { code: normalized })
    }

    /// Returns the upper-case alphabetic code ("EUR").
    #[inline]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Number of fraction digits of the minor unit (2 for cents, 0 for JPY).
    #[inline]
    pub const fn minor_units(&self) -> u8 {
        self.minor_units
    }

    /// Display symbol ("€"). For humans only, never parsed.
    #[inline]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl std::str::FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s)
    }
}

// Serialized as the bare code; deserialization goes through the registry.
impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Currency::from_code(&code).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Registry
// =============================================================================

// Active ISO-4217 currencies (funds codes included, precious metals and
// test codes excluded). Must stay sorted by code: lookups use binary search.
static CURRENCIES: &[Currency] = &[
    Currency::new("AED", 2, "د.إ"),
    Currency::new("AFN", 2, "؋"),
    Currency::new("ALL", 2, "L"),
    Currency::new("AMD", 2, "֏"),
    Currency::new("ANG", 2, "ƒ"),
    Currency::new("AOA", 2, "Kz"),
    Currency::new("ARS", 2, "$"),
    Currency::new("AUD", 2, "$"),
    Currency::new("AWG", 2, "ƒ"),
    Currency::new("AZN", 2, "₼"),
    Currency::new("BAM", 2, "KM"),
    Currency::new("BBD", 2, "$"),
    Currency::new("BDT", 2, "৳"),
    Currency::new("BGN", 2, "лв"),
    Currency::new("BHD", 3, ".د.ب"),
    Currency::new("BIF", 0, "FBu"),
    Currency::new("BMD", 2, "$"),
    Currency::new("BND", 2, "$"),
    Currency::new("BOB", 2, "Bs"),
    Currency::new("BOV", 2, "BOV"),
    Currency::new("BRL", 2, "R$"),
    Currency::new("BSD", 2, "$"),
    Currency::new("BTN", 2, "Nu"),
    Currency::new("BWP", 2, "P"),
    Currency::new("BYN", 2, "Br"),
    Currency::new("BZD", 2, "$"),
    Currency::new("CAD", 2, "$"),
    Currency::new("CDF", 2, "FC"),
    Currency::new("CHE", 2, "CHE"),
    Currency::new("CHF", 2, "CHF"),
    Currency::new("CHW", 2, "CHW"),
    Currency::new("CLF", 4, "UF"),
    Currency::new("CLP", 0, "$"),
    Currency::new("CNY", 2, "¥"),
    Currency::new("COP", 2, "$"),
    Currency::new("COU", 2, "COU"),
    Currency::new("CRC", 2, "₡"),
    Currency::new("CUP", 2, "$"),
    Currency::new("CVE", 2, "$"),
    Currency::new("CZK", 2, "Kč"),
    Currency::new("DJF", 0, "Fdj"),
    Currency::new("DKK", 2, "kr"),
    Currency::new("DOP", 2, "$"),
    Currency::new("DZD", 2, "دج"),
    Currency::new("EGP", 2, "E£"),
    Currency::new("ERN", 2, "Nfk"),
    Currency::new("ETB", 2, "Br"),
    Currency::new("EUR", 2, "€"),
    Currency::new("FJD", 2, "$"),
    Currency::new("FKP", 2, "£"),
    Currency::new("GBP", 2, "£"),
    Currency::new("GEL", 2, "₾"),
    Currency::new("GHS", 2, "GH₵"),
    Currency::new("GIP", 2, "£"),
    Currency::new("GMD", 2, "D"),
    Currency::new("GNF", 0, "FG"),
    Currency::new("GTQ", 2, "Q"),
    Currency::new("GYD", 2, "$"),
    Currency::new("HKD", 2, "$"),
    Currency::new("HNL", 2, "L"),
    Currency::new("HTG", 2, "G"),
    Currency::new("HUF", 2, "Ft"),
    Currency::new("IDR", 2, "Rp"),
    Currency::new("ILS", 2, "₪"),
    Currency::new("INR", 2, "₹"),
    Currency::new("IQD", 3, "ع.د"),
    Currency::new("IRR", 2, "﷼"),
    Currency::new("ISK", 0, "kr"),
    Currency::new("JMD", 2, "$"),
    Currency::new("JOD", 3, "د.ا"),
    Currency::new("JPY", 0, "¥"),
    Currency::new("KES", 2, "KSh"),
    Currency::new("KGS", 2, "сом"),
    Currency::new("KHR", 2, "៛"),
    Currency::new("KMF", 0, "CF"),
    Currency::new("KPW", 2, "₩"),
    Currency::new("KRW", 0, "₩"),
    Currency::new("KWD", 3, "د.ك"),
    Currency::new("KYD", 2, "$"),
    Currency::new("KZT", 2, "₸"),
    Currency::new("LAK", 2, "₭"),
    Currency::new("LBP", 2, "ل.ل"),
    Currency::new("LKR", 2, "Rs"),
    Currency::new("LRD", 2, "$"),
    Currency::new("LSL", 2, "L"),
    Currency::new("LYD", 3, "ل.د"),
    Currency::new("MAD", 2, "د.م."),
    Currency::new("MDL", 2, "L"),
    Currency::new("MGA", 2, "Ar"),
    Currency::new("MKD", 2, "ден"),
    Currency::new("MMK", 2, "K"),
    Currency::new("MNT", 2, "₮"),
    Currency::new("MOP", 2, "P"),
    Currency::new("MRU", 2, "UM"),
    Currency::new("MUR", 2, "₨"),
    Currency::new("MVR", 2, "Rf"),
    Currency::new("MWK", 2, "MK"),
    Currency::new("MXN", 2, "$"),
    Currency::new("MXV", 2, "MXV"),
    Currency::new("MYR", 2, "RM"),
    Currency::new("MZN", 2, "MT"),
    Currency::new("NAD", 2, "$"),
    Currency::new("NGN", 2, "₦"),
    Currency::new("NIO", 2, "C$"),
    Currency::new("NOK", 2, "kr"),
    Currency::new("NPR", 2, "₨"),
    Currency::new("NZD", 2, "$"),
    Currency::new("OMR", 3, "ر.ع."),
    Currency::new("PAB", 2, "B/."),
    Currency::new("PEN", 2, "S/"),
    Currency::new("PGK", 2, "K"),
    Currency::new("PHP", 2, "₱"),
    Currency::new("PKR", 2, "₨"),
    Currency::new("PLN", 2, "zł"),
    Currency::new("PYG", 0, "₲"),
    Currency::new("QAR", 2, "ر.ق"),
    Currency::new("RON", 2, "lei"),
    Currency::new("RSD", 2, "дин"),
    Currency::new("RUB", 2, "₽"),
    Currency::new("RWF", 0, "FRw"),
    Currency::new("SAR", 2, "﷼"),
    Currency::new("SBD", 2, "$"),
    Currency::new("SCR", 2, "₨"),
    Currency::new("SDG", 2, "ج.س"),
    Currency::new("SEK", 2, "kr"),
    Currency::new("SGD", 2, "$"),
    Currency::new("SHP", 2, "£"),
    Currency::new("SLE", 2, "Le"),
    Currency::new("SOS", 2, "Sh"),
    Currency::new("SRD", 2, "$"),
    Currency::new("SSP", 2, "£"),
    Currency::new("STN", 2, "Db"),
    Currency::new("SVC", 2, "$"),
    Currency::new("SYP", 2, "£"),
    Currency::new("SZL", 2, "L"),
    Currency::new("THB", 2, "฿"),
    Currency::new("TJS", 2, "SM"),
    Currency::new("TMT", 2, "m"),
    Currency::new("TND", 3, "د.ت"),
    Currency::new("TOP", 2, "T$"),
    Currency::new("TRY", 2, "₺"),
    Currency::new("TTD", 2, "$"),
    Currency::new("TWD", 2, "NT$"),
    Currency::new("TZS", 2, "TSh"),
    Currency::new("UAH", 2, "₴"),
    Currency::new("UGX", 0, "USh"),
    Currency::new("USD", 2, "$"),
    Currency::new("USN", 2, "$"),
    Currency::new("UYI", 0, "UYI"),
    Currency::new("UYU", 2, "$"),
    Currency::new("UYW", 4, "UYW"),
    Currency::new("UZS", 2, "soʻm"),
    Currency::new("VED", 2, "Bs.D"),
    Currency::new("VES", 2, "Bs.S"),
    Currency::new("VND", 0, "₫"),
    Currency::new("VUV", 0, "VT"),
    Currency::new("WST", 2, "T"),
    Currency::new("XAF", 0, "FCFA"),
    Currency::new("XCD", 2, "$"),
    Currency::new("XCG", 2, "Cg"),
    Currency::new("XOF", 0, "CFA"),
    Currency::new("XPF", 0, "₣"),
    Currency::new("YER", 2, "﷼"),
    Currency::new("ZAR", 2, "R"),
    Currency::new("ZMW", 2, "ZK"),
    Currency::new("ZWG", 2, "ZiG"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_sorted_and_unique() {
        assert!(CURRENCIES.windows(2).all(|w| w[0].code < w[1].code));
    }

    #[test]
    fn test_from_code() {
        let usd = Currency::from_code("USD").unwrap();
        assert_eq!(usd.code(), "USD");
        assert_eq!(usd.minor_units(), 2);
        assert_eq!(usd.symbol(), "$");

        assert_eq!(Currency::from_code("JPY").unwrap().minor_units(), 0);
        assert_eq!(Currency::from_code("KWD").unwrap().minor_units(), 3);
    }

    #[test]
    fn test_from_code_accepts_non_major_codes() {
        let codes = [
            "PHP", "RUB", "EGP", "NGN", "ARS", "MYR", "COP", "KES", "UAH", "RON", "BGN", "PEN",
        ];
        for code in codes {
            let currency = Currency::from_code(code).unwrap();
            assert_eq!(currency.code(), code);
            assert_eq!(currency.minor_units(), 2);
        }

        assert_eq!(Currency::from_code("IQD").unwrap().minor_units(), 3);
        assert_eq!(Currency::from_code("UGX").unwrap().minor_units(), 0);
        assert_eq!(Currency::from_code("CLF").unwrap().minor_units(), 4);
    }

    #[test]
    fn test_from_code_normalizes() {
        let eur = Currency::from_code("  eur ").unwrap();
        assert_eq!(eur, Currency::from_code("EUR").unwrap());
        assert_eq!("Eur".parse::<Currency>().unwrap(), eur);
    }

    #[test]
    fn test_from_code_rejects_malformed() {
        assert!(matches!(
            Currency::from_code(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            Currency::from_code("EU"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            Currency::from_code("978"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_from_code_rejects_unregistered() {
        assert_eq!(
            Currency::from_code("xyz"),
            Err(ValidationError::UnknownCurrency {
                code: "XYZ".to_string()
            })
        );
    }

    #[test]
    fn test_serde_uses_code() {
        let eur = Currency::from_code("EUR").unwrap();
        assert_eq!(serde_json::to_string(&eur).unwrap(), "\"EUR\"");

        let parsed: Currency = serde_json::from_str("\"gbp\"").unwrap();
        assert_eq!(parsed.code(), "GBP");

        assert!(serde_json::from_str::<Currency>("\"ABC\"").is_err());
    }
}
