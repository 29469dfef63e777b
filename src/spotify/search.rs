use crate::{
    Res,
    spotify::SpotifyClient,
    types::{Listing, ListingValue, SearchKind, SearchResponse},
};

const SEARCH_LIMIT: u32 = 5;

impl SpotifyClient {
    /// Searches the catalogue for up to five albums, artists or tracks.
    ///
    /// Artists are listed with their id (handy for `spocli artists --id`),
    /// albums and tracks with their URI.
    pub async fn search(&self, query: &str, kind: SearchKind) -> Res<Listing> {
        let params = [
            ("q", query.to_string()),
            ("type", kind.as_str().to_string()),
            ("limit", SEARCH_LIMIT.to_string()),
        ];
        let res: SearchResponse = self.get("/search", &params).await?;

        let (page, value) = match kind {
            SearchKind::Artist => (res.artists, ListingValue::Id),
            SearchKind::Album => (res.albums, ListingValue::Uri),
            SearchKind::Track => (res.tracks, ListingValue::Uri),
        };
        let items = page.map(|p| p.into_items()).unwrap_or_default();

        Ok(Listing::from_items(items, value))
    }
}
