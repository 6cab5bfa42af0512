pub mod autocomplete;
pub mod boundary;
pub mod hinting;
pub mod proposal;
pub mod session;
pub mod view_model;
