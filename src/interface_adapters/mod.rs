// Interface adapters: input mapping, frame rendering, level files and the RNG port.

pub mod input;
pub mod level_file;
pub mod protocol;
pub mod render;
pub mod utils;
