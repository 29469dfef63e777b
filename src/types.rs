use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

/// One access grant obtained through the client-credentials exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    /// Client wall-clock seconds at the moment the grant was received.
    pub issued_at: u64,
    pub ttl_seconds: u64,
}

impl Token {
    pub fn expires_at(&self) -> u64 {
        self.issued_at.saturating_add(self.ttl_seconds)
    }

    /// A token is expired once `now + margin` passes its expiry second.
    pub fn is_expired(&self, now: u64, margin: u64) -> bool {
        now.saturating_add(margin) > self.expires_at()
    }

    pub fn authorization_header(&self) -> AuthorizationHeader {
        AuthorizationHeader(format!("{} {}", self.token_type, self.access_token))
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("issued_at", &self.issued_at)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

/// Value for the `Authorization` header of an authenticated request.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthorizationHeader(String);

impl AuthorizationHeader {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorizationHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for AuthorizationHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthorizationHeader(<redacted>)")
    }
}

/// Body of a successful token exchange. `expires_in` is not read.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchKind {
    Album,
    Artist,
    Track,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Album => "album",
            SearchKind::Artist => "artist",
            SearchKind::Track => "track",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BrowseEndpoint {
    FeaturedPlaylists,
    NewReleases,
    Categories,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ArtistsEndpoint {
    Related,
    Albums,
}

/// Any catalogue object carrying a name, an id and a URI.
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// A page of results. Spotify occasionally returns `null` entries.
#[derive(Debug, Clone, Deserialize)]
pub struct Paging<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<Option<T>>,
}

impl<T> Paging<T> {
    pub fn into_items(self) -> Vec<T> {
        self.items.into_iter().flatten().collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub albums: Option<Paging<Item>>,
    pub artists: Option<Paging<Item>>,
    pub tracks: Option<Paging<Item>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistsResponse {
    pub playlists: Paging<Item>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumsResponse {
    pub albums: Paging<Item>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Paging<Category>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelatedArtistsResponse {
    #[serde(default)]
    pub artists: Vec<Option<Item>>,
}

/// Which identifier a listing prints next to each name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingValue {
    Id,
    Uri,
}

impl ListingValue {
    pub fn label(&self) -> &'static str {
        match self {
            ListingValue::Id => "id",
            ListingValue::Uri => "uri",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub name: String,
    pub value: String,
}

/// Two-column result of a catalogue query.
#[derive(Debug, Clone)]
pub struct Listing {
    pub value: ListingValue,
    pub rows: Vec<ListingRow>,
}

impl Listing {
    pub fn from_items(items: Vec<Item>, value: ListingValue) -> Self {
        let rows = items
            .into_iter()
            .map(|item| ListingRow {
                value: match value {
                    ListingValue::Id => item.id,
                    ListingValue::Uri => item.uri,
                },
                name: item.name,
            })
            .collect();

        Self { value, rows }
    }

    pub fn from_categories(categories: Vec<Category>) -> Self {
        let rows = categories
            .into_iter()
            .map(|c| ListingRow {
                name: c.name,
                value: c.id,
            })
            .collect();

        Self {
            value: ListingValue::Id,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
