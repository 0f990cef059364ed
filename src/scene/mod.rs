pub(crate) mod compose;
pub(crate) mod config;
pub(crate) mod model;
