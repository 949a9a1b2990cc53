//! Static mapping from company display name to exchange ticker symbol.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use dalal_types::{DalalError, Symbol};

/// NIFTY 50 constituents in definition order.
const NIFTY_50: [(&str, &str); 50] = [
    ("Adani Enterprises", "ADANIENT.NS"),
    ("Adani Ports", "ADANIPORTS.NS"),
    ("Apollo Hospitals", "APOLLOHOSP.NS"),
    ("Asian Paints", "ASIANPAINT.NS"),
    ("Axis Bank", "AXISBANK.NS"),
    ("Bajaj Auto", "BAJAJ-AUTO.NS"),
    ("Bajaj Finance", "BAJFINANCE.NS"),
    ("Bajaj Finserv", "BAJAJFINSV.NS"),
    ("Bharat Electronics", "BEL.NS"),
    ("Bharti Airtel", "BHARTIARTL.NS"),
    ("Cipla", "CIPLA.NS"),
    ("Coal India", "COALINDIA.NS"),
    ("Dr. Reddy's Laboratories", "DRREDDY.NS"),
    ("Eicher Motors", "EICHERMOT.NS"),
    ("Ethernal", "ZOMATO.NS"),
    ("Grasim Industries", "GRASIM.NS"),
    ("HCL Technologies", "HCLTECH.NS"),
    ("HDFC Bank", "HDFCBANK.NS"),
    ("HDFC Life Insurance", "HDFCLIFE.NS"),
    ("Hero MotoCorp", "HEROMOTOCO.NS"),
    ("Hindalco Industries", "HINDALCO.NS"),
    ("Hindustan Unilever", "HINDUNILVR.NS"),
    ("ICICI Bank", "ICICIBANK.NS"),
    ("IndusInd Bank", "INDUSINDBK.NS"),
    ("Infosys", "INFY.NS"),
    ("ITC", "ITC.NS"),
    ("Jio Financial Services", "JIOFIN.NS"),
    ("JSW Steel", "JSWSTEEL.NS"),
    ("Kotak Mahindra Bank", "KOTAKBANK.NS"),
    ("Larsen & Toubro", "LT.NS"),
    ("Mahindra & Mahindra", "M&M.NS"),
    ("Maruti Suzuki", "MARUTI.NS"),
    ("Nestle India", "NESTLEIND.NS"),
    ("NTPC", "NTPC.NS"),
    ("Oil and Natural Gas Corporation", "ONGC.NS"),
    ("Power Grid Corporation", "POWERGRID.NS"),
    ("Reliance Industries", "RELIANCE.NS"),
    ("SBI Life Insurance", "SBILIFE.NS"),
    ("Shriram Finance", "SHRIRAMFIN.NS"),
    ("State Bank of India", "SBIN.NS"),
    ("Sun Pharmaceutical", "SUNPHARMA.NS"),
    ("Tata Consultancy Services", "TCS.NS"),
    ("Tata Consumer Products", "TATACONSUM.NS"),
    ("Tata Motors", "TATAMOTORS.NS"),
    ("Tata Steel", "TATASTEEL.NS"),
    ("Tech Mahindra", "TECHM.NS"),
    ("Titan Company", "TITAN.NS"),
    ("Trent", "TRENT.NS"),
    ("UltraTech Cement", "ULTRACEMCO.NS"),
    ("Wipro", "WIPRO.NS"),
];

/// One company in a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Human-readable company name, unique within a registry.
    pub display_name: String,
    /// Exchange-qualified symbol, unique within a registry.
    pub symbol: Symbol,
}

impl RegistryEntry {
    /// Pair a display name with a symbol.
    pub fn new(display_name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            display_name: display_name.into(),
            symbol,
        }
    }
}

/// Immutable, ordered table of covered companies.
///
/// A registry is a value handed to the orchestrator; tests substitute small
/// fixture registries via [`TickerRegistry::from_entries`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerRegistry {
    entries: Vec<RegistryEntry>,
}

impl TickerRegistry {
    /// The fifty NIFTY constituents in definition order.
    ///
    /// # Panics
    /// Never in practice: the built-in table is checked by unit tests.
    #[must_use]
    pub fn nifty50() -> Self {
        Self::from_pairs(NIFTY_50).expect("built-in NIFTY 50 table is well-formed")
    }

    /// Build a registry from `(display_name, symbol)` pairs.
    ///
    /// # Errors
    /// Same as [`TickerRegistry::from_entries`], plus `InvalidArg` for malformed symbols.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, DalalError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(name, sym)| Symbol::new(sym).map(|s| RegistryEntry::new(name, s)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_entries(entries)
    }

    /// Build a registry from entries, keeping their order.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a blank display name or a duplicated name or symbol.
    pub fn from_entries(entries: Vec<RegistryEntry>) -> Result<Self, DalalError> {
        let mut names = HashSet::new();
        let mut symbols = HashSet::new();
        for e in &entries {
            if e.display_name.trim().is_empty() {
                return Err(DalalError::InvalidArg(format!(
                    "registry entry for {} has an empty display name",
                    e.symbol
                )));
            }
            if !names.insert(e.display_name.as_str()) {
                return Err(DalalError::InvalidArg(format!(
                    "duplicate display name '{}'",
                    e.display_name
                )));
            }
            if !symbols.insert(&e.symbol) {
                return Err(DalalError::InvalidArg(format!(
                    "duplicate symbol '{}'",
                    e.symbol
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Symbol for an exact display name; a miss yields `None`.
    #[must_use]
    pub fn lookup(&self, display_name: &str) -> Option<&Symbol> {
        self.entries
            .iter()
            .find(|e| e.display_name == display_name)
            .map(|e| &e.symbol)
    }

    /// Symbol for a display name compared without regard to ASCII case.
    #[must_use]
    pub fn lookup_ignore_case(&self, display_name: &str) -> Option<&Symbol> {
        self.entries
            .iter()
            .find(|e| e.display_name.eq_ignore_ascii_case(display_name))
            .map(|e| &e.symbol)
    }

    /// All entries in definition order.
    #[must_use]
    pub fn all_entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Display names in definition order, for selection lists.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.display_name.as_str())
    }

    /// Whether any entry carries `symbol`.
    #[must_use]
    pub fn contains_symbol(&self, symbol: &Symbol) -> bool {
        self.entries.iter().any(|e| &e.symbol == symbol)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a TickerRegistry {
    type Item = &'a RegistryEntry;
    type IntoIter = std::slice::Iter<'a, RegistryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nifty50_has_fifty_unique_entries_in_order() {
        let r = TickerRegistry::nifty50();
        assert_eq!(r.len(), 50);
        assert_eq!(r.all_entries()[0].display_name, "Adani Enterprises");
        assert_eq!(r.all_entries()[49].display_name, "Wipro");
        assert_eq!(r.names().nth(24), Some("Infosys"));
    }

    #[test]
    fn lookup_is_exact() {
        let r = TickerRegistry::nifty50();
        assert_eq!(r.lookup("Infosys").map(Symbol::as_str), Some("INFY.NS"));
        assert_eq!(r.lookup("Ethernal").map(Symbol::as_str), Some("ZOMATO.NS"));
        assert_eq!(
            r.lookup("Mahindra & Mahindra").map(Symbol::as_str),
            Some("M&M.NS")
        );
        assert_eq!(r.lookup("infosys"), None);
        assert_eq!(r.lookup(""), None);
        assert_eq!(
            r.lookup_ignore_case("infosys").map(Symbol::as_str),
            Some("INFY.NS")
        );
    }

    #[test]
    fn from_entries_rejects_duplicates_and_blanks() {
        let infy = Symbol::new("INFY.NS").unwrap();
        let wipro = Symbol::new("WIPRO.NS").unwrap();

        let dup_name = vec![
            RegistryEntry::new("Infosys", infy.clone()),
            RegistryEntry::new("Infosys", wipro.clone()),
        ];
        assert!(matches!(
            TickerRegistry::from_entries(dup_name),
            Err(DalalError::InvalidArg(_))
        ));

        let dup_symbol = vec![
            RegistryEntry::new("Infosys", infy.clone()),
            RegistryEntry::new("Infosys Ltd", infy.clone()),
        ];
        assert!(matches!(
            TickerRegistry::from_entries(dup_symbol),
            Err(DalalError::InvalidArg(_))
        ));

        let blank = vec![RegistryEntry::new("  ", wipro)];
        assert!(matches!(
            TickerRegistry::from_entries(blank),
            Err(DalalError::InvalidArg(_))
        ));
    }

    #[test]
    fn fixture_registry_keeps_order() {
        let r = TickerRegistry::from_pairs([("Wipro", "WIPRO.NS"), ("Infosys", "INFY.NS")]).unwrap();
        let syms: Vec<_> = r.into_iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(syms, ["WIPRO.NS", "INFY.NS"]);
        assert!(r.contains_symbol(&Symbol::new("infy.ns").unwrap()));
        assert!(!r.is_empty());
    }
}
