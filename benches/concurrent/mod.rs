
pub use register::register_benchmarks;
