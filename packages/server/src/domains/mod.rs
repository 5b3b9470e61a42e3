// Domain modules

pub mod emails;
