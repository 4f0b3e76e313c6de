mod force_calculator;

pub use force_calculator::force_calculator_system;
