pub mod detect;
pub mod stats;
pub mod sync;
