//! Fighter data layer: providers, the embedded roster, raw records and
//! measurement parsing. Everything here sits upstream of the simulation
//! core, which only consumes validated [`FighterProfile`](crate::models::FighterProfile)s.

pub mod embedded;
pub mod provider;
pub mod record;
pub mod units;

pub use embedded::{embedded_lookup, embedded_roster};
pub use provider::{resolve_fighter, ChainedProvider, FighterProvider, StaticTableProvider};
pub use record::RawFighterRecord;
