pub mod profiles;

pub use profiles::{lookup_gpu, GpuProfile, GPU_PROFILES};
