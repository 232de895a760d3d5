//! Wave scoring and role-call decoding for the Barbarian Assault minigame.
//!
//! The engine is split in two layers:
//!
//! - [`core`] - the abstract host interface ([`FieldSource`], [`FieldCoord`])
//!   and chat-line rendering primitives ([`LineBuilder`], [`Color`])
//! - [`tracker`] - the domain logic: the four-role catalog ([`Role`]) with its
//!   call vocabulary, and per-wave scoring ([`Wave`])
//!
//! Everything is synchronous and pure with respect to the host: the tracker
//! only observes game state through [`FieldSource`] reads, and a field that is
//! not currently rendered is a normal condition, never an error.
//!
//! # Example
//!
//! ```
//! use penance_engine::{Role, SnapshotSource, Wave, fields};
//!
//! let mut snapshot = SnapshotSource::new();
//! snapshot.set_int(fields::BASE_POINTS, 74);
//!
//! let mut wave = Wave::new(3, Some(Role::Collector), None);
//! wave.set_amounts(&snapshot);
//! wave.set_points(&snapshot);
//!
//! assert_eq!(wave.roles_points()[Role::Collector.index()], 74);
//! ```

pub use self::{core::*, tracker::*};

pub mod core;
pub mod tracker;
