pub(crate) mod fan;
pub(crate) mod mesh;
pub(crate) mod ring;
pub(crate) mod uv;
