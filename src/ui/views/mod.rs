pub mod audio;
pub mod embed;
pub mod fs_patch;
pub mod ota;
pub mod prebuild;
pub mod stamp;
