pub(crate) mod aggregate;
pub(crate) mod noise;
pub(crate) mod ops;
