//! Database entities and API request/response types.

pub mod countdown;
pub mod eisenhower;
pub mod habit;
pub mod run;
pub mod settings;
pub mod todo;
pub mod workout;

pub use countdown::*;
pub use eisenhower::*;
pub use habit::*;
pub use run::*;
pub use settings::*;
pub use todo::*;
pub use workout::*;
