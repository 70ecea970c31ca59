pub(crate) mod polar;
pub(crate) mod resample;
pub(crate) mod simplify;
pub(crate) mod subdivide;
