mod friedman_generator;

pub use friedman_generator::FriedmanGenerator;
