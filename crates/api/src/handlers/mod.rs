//! HTTP handlers. Each handler maps 1:1 to a pass lifecycle operation.

pub mod passes;
