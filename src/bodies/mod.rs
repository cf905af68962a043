mod body;
mod motion;
mod display;
mod params;

pub use self::body::{Body, Circle, Wall};
pub use self::motion::Motion;
pub use self::display::{DisplayAttrs, DisplayFlags};
pub use self::params::BodyParams;
