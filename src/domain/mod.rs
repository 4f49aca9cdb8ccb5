pub mod revenue;
pub mod squash;
