pub(crate) mod hands;
pub(crate) mod index;
