pub(crate) mod color;
pub(crate) mod effect;
pub(crate) mod frame;
pub(crate) mod selection;
pub(crate) mod shape;
