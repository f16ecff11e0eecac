//! Holocron: a REST API over a catalogue of Star Wars people, planets and vehicles, with
//! bearer-token authentication and per-user favorites.

pub mod model;
pub mod server;
