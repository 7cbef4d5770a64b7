pub mod friedman;

pub use friedman::FriedmanGenerator;
