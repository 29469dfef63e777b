use crate::{info, spotify::SpotifyClient, types::SearchKind, utils};

pub async fn search(client: &SpotifyClient, query: &str, kind: SearchKind) {
    info!("Searching {}s for \"{}\"", kind.as_str(), query);

    let pb = utils::spinner("Searching...");
    let result = client.search(query, kind).await;
    pb.finish_and_clear();

    super::show(result, &format!("{}s", kind.as_str()));
}
