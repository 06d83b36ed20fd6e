//! Rate series aggregate: query value objects, provider results and the
//! transport port used to fetch them.

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use value_objects::*;
