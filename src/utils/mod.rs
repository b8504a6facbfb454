mod id_generator;
mod time;


pub use id_generator::UuidGenerator;
pub use time::current_time_millis;
