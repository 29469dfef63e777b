use crate::{spotify::SpotifyClient, types::ArtistsEndpoint, utils};

/// Dispatches `spocli artists`; albums are listed unless `related` is asked for.
pub async fn artists(client: &SpotifyClient, artist_id: &str, endpoint: Option<ArtistsEndpoint>) {
    let pb = utils::spinner("Fetching artist...");
    let (result, what) = match endpoint {
        Some(ArtistsEndpoint::Related) => {
            (client.related_artists(artist_id).await, "related artists")
        }
        Some(ArtistsEndpoint::Albums) | None => (client.artist_albums(artist_id).await, "albums"),
    };
    pb.finish_and_clear();

    super::show(result, what);
}
