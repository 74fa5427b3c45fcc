pub mod constants;
pub mod emblem;
pub mod error;
pub mod particles;
pub mod schedule;
pub mod sections;
pub mod state;
pub mod theme;

pub use emblem::*;
pub use error::*;
pub use particles::*;
pub use schedule::*;
pub use sections::*;
pub use state::*;
pub use theme::*;
