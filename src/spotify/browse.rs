use crate::{
    Res,
    spotify::SpotifyClient,
    types::{AlbumsResponse, CategoriesResponse, Listing, ListingValue, PlaylistsResponse},
};

const CATEGORY_LIMIT: u32 = 50;

impl SpotifyClient {
    pub async fn featured_playlists(&self) -> Res<Listing> {
        let res: PlaylistsResponse = self.get("/browse/featured-playlists", &[]).await?;
        Ok(Listing::from_items(res.playlists.into_items(), ListingValue::Uri))
    }

    pub async fn new_releases(&self) -> Res<Listing> {
        let res: AlbumsResponse = self.get("/browse/new-releases", &[]).await?;
        Ok(Listing::from_items(res.albums.into_items(), ListingValue::Uri))
    }

    pub async fn categories(&self) -> Res<Listing> {
        let params = [("limit", CATEGORY_LIMIT.to_string())];
        let res: CategoriesResponse = self.get("/browse/categories", &params).await?;
        Ok(Listing::from_categories(res.categories.into_items()))
    }

    /// Playlists filed under one browse category, e.g. `party`.
    pub async fn category_playlists(&self, category_id: &str) -> Res<Listing> {
        let path = format!("/browse/categories/{category_id}/playlists");
        let res: PlaylistsResponse = self.get(&path, &[]).await?;
        Ok(Listing::from_items(res.playlists.into_items(), ListingValue::Uri))
    }
}
