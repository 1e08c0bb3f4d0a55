//! Wire DTOs for the remote auth and data services.

pub mod chart;
pub mod session;

pub use chart::{ChartRowDto, InsertChartDto, PositionDto};
pub use session::{TokenResponseDto, UserDto};
