pub mod analyze;

pub mod util;
