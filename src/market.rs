//! Exchange trade pairs as a graph.
//!
//! An exchange-info document lists the symbols an exchange trades. Each
//! asset ticker becomes a node and each tradable symbol connects its base
//! asset to its quote asset.

use std::io::Read;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::graph::{Graph, Result};

/// Status of a symbol that can currently be traded.
pub const TRADING: &str = "TRADING";

/// The subset of an exchange-info document the graph needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeInfo {
    /// Every listed symbol.
    #[serde(default)]
    pub symbols: Vec<SymbolInfo>,
}

/// One listed trade pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    /// Exchange symbol, e.g. `ETHBTC`.
    pub symbol: String,
    /// Trading status, e.g. `TRADING` or `BREAK`.
    #[serde(default)]
    pub status: String,
    /// Asset being bought or sold.
    pub base_asset: String,
    /// Asset the price is quoted in.
    pub quote_asset: String,
}

impl SymbolInfo {
    /// Returns `true` if the symbol is open for trading.
    pub fn is_trading(&self) -> bool {
        self.status.eq_ignore_ascii_case(TRADING)
    }
}

impl ExchangeInfo {
    /// Parses a JSON exchange-info document.
    ///
    /// # Errors
    /// Returns the deserializer's error for malformed input.
    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }

    /// Symbols currently open for trading.
    pub fn trading(&self) -> impl Iterator<Item = &SymbolInfo> + '_ {
        self.symbols.iter().filter(|s| s.is_trading())
    }
}

/// Normalises a ticker the way labels are stored.
pub fn ticker(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Builds the trade graph of `info`.
///
/// Assets are added in first-seen order. A pair listed twice (or listed in
/// both orientations on an undirected graph) is connected once, and a symbol
/// whose base and quote coincide is skipped.
///
/// # Errors
/// Only internal inconsistencies can surface here; every precondition of
/// [`Graph::connect`] is checked before it is called.
pub fn trade_graph(info: &ExchangeInfo, directed: bool) -> Result<Graph> {
    let mut graph = Graph::new(directed);
    let mut skipped = 0usize;

    for symbol in info.trading() {
        let base = ticker(&symbol.base_asset);
        let quote = ticker(&symbol.quote_asset);
        if base.is_empty() || quote.is_empty() || base == quote {
            debug!(symbol = %symbol.symbol, "skipping malformed symbol");
            skipped += 1;
            continue;
        }

        for asset in [&base, &quote] {
            if !graph.has(asset) {
                graph.add(asset.as_str())?;
            }
        }
        if graph.are_neighbours(&base, &quote)? {
            skipped += 1;
            continue;
        }
        graph.connect(&base, &quote)?;
    }

    info!(
        assets = graph.node_count(),
        pairs = graph.connection_count(),
        skipped,
        "trade graph built"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(base: &str, quote: &str, status: &str) -> SymbolInfo {
        SymbolInfo {
            symbol: format!("{base}{quote}"),
            status: status.to_string(),
            base_asset: base.to_string(),
            quote_asset: quote.to_string(),
        }
    }

    #[test]
    fn parses_exchange_info() {
        let json = r#"{
            "timezone": "UTC",
            "symbols": [
                {"symbol": "ETHBTC", "status": "TRADING", "baseAsset": "ETH", "quoteAsset": "BTC", "filters": []}
            ]
        }"#;
        let info = ExchangeInfo::from_reader(json.as_bytes()).unwrap();
        assert_eq!(info.symbols, vec![symbol("ETH", "BTC", "TRADING")]);
        assert!(info.symbols[0].is_trading());
    }

    #[test]
    fn trade_graph_skips_halted_and_repeated_pairs() {
        let info = ExchangeInfo {
            symbols: vec![
                symbol("eth", "btc", "TRADING"),
                symbol("BTC", "ETH", "TRADING"),
                symbol("BNB", "BTC", "BREAK"),
                symbol("BNB", "BNB", "TRADING"),
                symbol("BNB", "ETH", "trading"),
            ],
        };

        let graph = trade_graph(&info, false).unwrap();
        assert_eq!(graph.labels().collect::<Vec<_>>(), vec!["ETH", "BTC", "BNB"]);
        assert_eq!(graph.connection_count(), 2);
        assert!(graph.are_neighbours("BTC", "ETH").unwrap());
        assert!(!graph.are_neighbours("BNB", "BTC").unwrap());

        let directed = trade_graph(&info, true).unwrap();
        assert_eq!(directed.connection_count(), 3);
        assert!(directed.are_neighbours("BTC", "ETH").unwrap());
        assert!(directed.are_neighbours("ETH", "BTC").unwrap());
    }

    #[test]
    fn trade_graph_of_empty_document() {
        let graph = trade_graph(&ExchangeInfo::default(), false).unwrap();
        assert_eq!(graph.node_count(), 0);
        assert!(graph.bfs().is_empty());
    }
}
