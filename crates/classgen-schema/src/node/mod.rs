mod class;
mod lifecycle;
mod member;
mod package;
mod request;

pub use self::class::*;
pub use self::lifecycle::*;
pub use self::member::*;
pub use self::package::*;
pub use self::request::*;
