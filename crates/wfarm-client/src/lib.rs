//! # wfarm-client
//!
//! Everything that talks to the outside world:
//!
//! - [`Http`] is the fetch wrapper. It has exactly one failure mode,
//!   "unavailable", represented as `None` - transport errors, bad status
//!   codes, and decode failures are all absorbed there and never propagate.
//! - [`PlaceApi`] is the backend surface the engine drives, with
//!   [`BackendClient`] as the real implementation. Engine tests mock the
//!   trait instead of the network.
//! - [`refresh_charges`] normalizes the server's charge report into the
//!   session state (flooring floats once, at this boundary).
//! - [`paint_once`] spends one charge on a randomly placed, randomly
//!   colored pixel inside the configured tile.

mod api;
mod auth;
mod charges;
mod http;
mod locale;
mod paint;

pub use api::{BackendClient, ChargesDto, MeResponse, PaintResponse, PlaceApi, TileOffset};
pub use auth::get_session_cookie;
pub use charges::refresh_charges;
pub use http::{Http, RequestOptions};
pub use locale::detect_language;
pub use paint::{paint_once, random_color, random_offset};
