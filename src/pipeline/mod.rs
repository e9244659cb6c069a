pub mod dominant;
pub mod downsample;
pub mod load;
pub mod matcher;
