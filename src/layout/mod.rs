pub(crate) mod emoji;
pub(crate) mod lines;
pub(crate) mod scatter;
