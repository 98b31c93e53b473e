pub mod emitters;
pub mod plugin;
pub mod style;

pub use emitters::attach_derived_methods;
pub use plugin::CommonsLangPlugin;
pub use style::{BuiltinStyle, StyleSelection};
