use crate::{
    Res,
    spotify::SpotifyClient,
    types::{Item, Listing, ListingValue, Paging, RelatedArtistsResponse},
};

impl SpotifyClient {
    /// Full-length albums of an artist available in the configured market.
    pub async fn artist_albums(&self, artist_id: &str) -> Res<Listing> {
        let path = format!("/artists/{artist_id}/albums");
        let params = [
            ("album_type", "album".to_string()),
            ("market", self.country().to_string()),
        ];
        let res: Paging<Item> = self.get(&path, &params).await?;
        Ok(Listing::from_items(res.into_items(), ListingValue::Id))
    }

    pub async fn related_artists(&self, artist_id: &str) -> Res<Listing> {
        let path = format!("/artists/{artist_id}/related-artists");
        let res: RelatedArtistsResponse = self.get(&path, &[]).await?;
        let artists = res.artists.into_iter().flatten().collect();
        Ok(Listing::from_items(artists, ListingValue::Id))
    }
}
