//! Pages module

pub mod home;
