mod level;
mod sample_rate;

pub use level::Level;
pub use sample_rate::SampleRate;
