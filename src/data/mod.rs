/// Data layer: table parsing, statistics, plot specs and sample series.
///
/// Architecture:
/// ```text
///   uploaded .csv bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse bytes → ParsedTable  (or ParseError)
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ ParsedTable  │  columns, rows, preview, numeric columns
///   └─────────────┘
///      │        │
///      ▼        ▼
///  ┌───────┐ ┌─────────┐
///  │ stats │ │ scatter │  describe() / scatter() → PlotSpec (or SelectionError)
///  └───────┘ └─────────┘
/// ```
///
/// `series` is independent: it produces the dashboard's random walk.

pub mod error;
pub mod loader;
pub mod model;
pub mod scatter;
pub mod series;
pub mod stats;
