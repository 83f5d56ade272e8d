pub mod override_calculator;

pub use override_calculator::OverrideCalculator;
