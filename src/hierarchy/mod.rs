mod level;
mod names;
mod path;
mod unit;

pub use level::AdminLevel;
pub use names::{format_name, normalize_id, slugify};
pub use path::LocationPath;
pub use unit::{AdminUnit, Origin};
