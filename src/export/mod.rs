pub(crate) mod exporter;
pub(crate) mod session;
pub(crate) mod sink;
