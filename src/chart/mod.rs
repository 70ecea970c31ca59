pub(crate) mod options;
pub(crate) mod radial;
pub(crate) mod shader;
pub(crate) mod texture;
