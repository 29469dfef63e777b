use crate::{spotify::SpotifyClient, types::BrowseEndpoint, utils};

/// Dispatches `spocli browse`.
///
/// An explicit endpoint wins. Without one, `category_id` selects the playlists
/// of that category; with neither, the category list itself is shown.
pub async fn browse(
    client: &SpotifyClient,
    endpoint: Option<BrowseEndpoint>,
    category_id: Option<String>,
) {
    let pb = utils::spinner("Browsing...");
    let (result, what) = match (endpoint, category_id) {
        (Some(BrowseEndpoint::FeaturedPlaylists), _) => {
            (client.featured_playlists().await, "featured playlists")
        }
        (Some(BrowseEndpoint::NewReleases), _) => (client.new_releases().await, "new releases"),
        (_, Some(id)) => (client.category_playlists(&id).await, "category playlists"),
        (_, None) => (client.categories().await, "categories"),
    };
    pb.finish_and_clear();

    super::show(result, what);
}
