pub mod composite;
pub mod map;
pub mod source;
pub mod value;

pub use composite::CompositePropertySource;
pub use map::ConfigMap;
pub use source::{MapPropertySource, PropertySource};
pub use value::ConfigValue;
