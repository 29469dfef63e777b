//! # CLI Module
//!
//! Command bodies for the `spocli` binary. Each command asks the injected
//! [`SpotifyClient`] for one listing, shows a spinner while the request is in
//! flight and prints the result as a two-column table.
//!
//! ## Commands
//!
//! - [`search`] - Search albums, artists or tracks
//! - [`browse`] - Featured playlists, new releases, categories and category playlists
//! - [`artists`] - Albums or related artists of one artist
//!
//! ## Error handling
//!
//! Any error aborts the command through the `error!` macro, which exits with
//! status 1. A command that cannot obtain a token never reaches the resource
//! endpoint.
//!
//! ## Usage
//!
//! ```bash
//! spocli search --query "daft punk" --type artist
//! spocli artists --id 4tZwfgrHOc3mvqYlEYSvVi --endpoint related
//! spocli browse --endpoint new-releases
//! spocli browse --id party
//! ```

mod artists;
mod browse;
mod search;

pub use artists::artists;
pub use browse::browse;
pub use search::search;

use crate::{Res, error, success, types::Listing, utils, warning};

fn show(result: Res<Listing>, what: &str) {
    match result {
        Ok(listing) if listing.is_empty() => warning!("No {} found.", what),
        Ok(listing) => {
            println!("{}", utils::listing_table(&listing));
            success!("Listed {} {}.", listing.len(), what);
        }
        Err(e) => error!("Failed to fetch {}. Err: {}", what, e),
    }
}
