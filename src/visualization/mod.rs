pub mod layout;
#[cfg(feature = "viewer")]
pub mod viewer2d;
