//! Chart domain: models, repository contract, and export.

pub mod export;
pub mod model;
pub mod repository;

pub use export::{ChartExport, export_file_name};
pub use model::{Chart, ChartDraft, NewChart, Position, PositionDraft};
pub use repository::ChartRepository;
