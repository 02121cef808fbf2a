// Adapters layer: concrete implementations for external systems (files, tabular formats).

pub mod storage;
pub mod tabular;
