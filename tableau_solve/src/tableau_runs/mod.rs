pub mod equation_parser;
pub mod random_system;
pub mod run_builder;
pub mod run_params;
