use url::Url;

use crate::{FailureKind, FetchError};

/// Backend addresses: the JSON API and the host serving page images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRoutes {
    api_base: Url,
    image_base: Url,
}

impl ApiRoutes {
    /// Both bases are treated as directories, a missing trailing slash is added.
    pub fn new(api_base: Url, image_base: Url) -> Self {
        Self {
            api_base: as_directory(api_base),
            image_base: as_directory(image_base),
        }
    }

    /// Images served from the API host itself.
    pub fn single_host(api_base: Url) -> Self {
        Self::new(api_base.clone(), api_base)
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// `{api_base}/manga/{slug}/episodes`
    pub fn episode_list_url(&self, slug: &str) -> Result<Url, FetchError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::new(FailureKind::InvalidUrl, "api base cannot be a base"))?
            .pop_if_empty()
            .extend(["manga", slug, "episodes"]);
        Ok(url)
    }

    /// Resolves a relative page image path against the image host.
    pub fn page_image_url(&self, image_path: &str) -> Result<Url, FetchError> {
        self.image_base
            .join(image_path.trim_start_matches('/'))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

fn as_directory(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_episode_list_url_with_encoded_slug() {
        let routes = ApiRoutes::single_host(Url::parse("https://api.example.com/v1").unwrap());
        assert_eq!(
            routes.episode_list_url("blue harbor").unwrap().as_str(),
            "https://api.example.com/v1/manga/blue%20harbor/episodes"
        );
    }

    #[test]
    fn resolves_image_paths_under_image_base() {
        let routes = ApiRoutes::new(
            Url::parse("https://api.example.com/").unwrap(),
            Url::parse("https://img.example.com/static").unwrap(),
        );
        assert_eq!(
            routes
                .page_image_url("manga/blue-harbor/1/a.jpg")
                .unwrap()
                .as_str(),
            "https://img.example.com/static/manga/blue-harbor/1/a.jpg"
        );
    }
}
