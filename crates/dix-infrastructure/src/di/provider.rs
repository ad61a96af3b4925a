//! Provider registry
//!
//! Named factories keyed by (symbol, namespace).

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use dix_domain::SharedProvider;

/// Thread-safe registry of providers
#[derive(Debug, Default)]
pub struct ProviderRegistry {
    providers: DashMap<String, HashMap<String, SharedProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `provider` under its symbol in each namespace, replacing
    /// existing registrations
    pub fn register(&self, provider: SharedProvider, namespaces: &[&str]) {
        let mut slots = self
            .providers
            .entry(provider.symbol().to_string())
            .or_default();
        for namespace in namespaces {
            slots.insert((*namespace).to_string(), Arc::clone(&provider));
        }
    }

    /// Provider registered for (`symbol`, `namespace`)
    pub fn lookup(&self, symbol: &str, namespace: &str) -> Option<SharedProvider> {
        self.providers.get(symbol)?.get(namespace).cloned()
    }

    pub fn contains(&self, symbol: &str, namespace: &str) -> bool {
        self.providers
            .get(symbol)
            .is_some_and(|slots| slots.contains_key(namespace))
    }

    /// Registered symbols, sorted
    pub fn symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.providers.iter().map(|e| e.key().clone()).collect();
        symbols.sort();
        symbols
    }

    /// Namespaces holding a provider for `symbol`, sorted
    pub fn namespaces_of(&self, symbol: &str) -> Vec<String> {
        let mut namespaces: Vec<String> = self
            .providers
            .get(symbol)
            .map(|slots| slots.keys().cloned().collect())
            .unwrap_or_default();
        namespaces.sort();
        namespaces
    }

    /// Total number of (symbol, namespace) registrations
    pub fn len(&self) -> usize {
        self.providers.iter().map(|slots| slots.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
