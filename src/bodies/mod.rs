mod object;
mod surface;

pub use self::object::Object;
pub use self::surface::Surface;
