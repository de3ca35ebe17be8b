//! 단위 정의 및 변환 모듈 모음.

pub mod compressibility;
pub mod density;
pub mod length;
pub mod pressure;
pub mod temperature;

pub use compressibility::{convert_compressibility, CompressibilityUnit};
pub use density::{convert_density, DensityUnit};
pub use length::{convert_length, LengthUnit};
pub use pressure::{convert_pressure, convert_pressure_mode, PressureMode, PressureUnit, PSI_PER_BAR};
pub use temperature::{convert_temperature, TemperatureUnit};
