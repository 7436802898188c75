use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use super::thumbnail::{self, Thumbnail};
use super::{CocktailSource, FetchError};
use crate::state::data::{Cocktail, RawDrink};

/// Response envelope shared by every drink endpoint
///
/// `drinks` is an array on success and `null` when nothing matched.
#[derive(Debug, Deserialize)]
struct DrinksEnvelope {
    #[serde(default)]
    drinks: Value,
}

/// Pull the raw drinks out of a response body
pub fn decode_drinks(body: &str) -> Result<Vec<RawDrink>, FetchError> {
    let envelope: DrinksEnvelope = serde_json::from_str(body)?;

    match envelope.drinks {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(FetchError::from))
            .collect(),
        // null, or the "no data found" strings some endpoints return
        _ => Ok(Vec::new()),
    }
}

/// First drink of a response, mapped
fn first_cocktail(drinks: Vec<RawDrink>) -> Result<Cocktail, FetchError> {
    drinks
        .first()
        .map(Cocktail::from_raw)
        .ok_or(FetchError::NotFound)
}

/// HTTP client for TheCocktailDB
#[derive(Debug, Clone)]
pub struct CocktailDbClient {
    client: Client,
    base_url: String,
}

impl CocktailDbClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }

    /// GET an endpoint, check the status and decode the drinks envelope
    async fn get_drinks(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<RawDrink>, FetchError> {
        let url = self.endpoint(endpoint);
        debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        decode_drinks(&body)
    }

    /// Download raw bytes from any URL, checking the status
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl CocktailSource for CocktailDbClient {
    async fn random(&self) -> Result<Cocktail, FetchError> {
        let cocktail = first_cocktail(self.get_drinks("random.php", &[]).await?)?;
        info!("🍸 Random cocktail: {} ({})", cocktail.name, cocktail.id);
        Ok(cocktail)
    }

    async fn search(&self, query: &str) -> Result<Vec<Cocktail>, FetchError> {
        let drinks = self.get_drinks("search.php", &[("s", query)]).await?;
        info!("🔍 Search '{}' matched {} cocktails", query, drinks.len());
        Ok(drinks.iter().map(Cocktail::from_raw).collect())
    }

    async fn lookup(&self, id: &str) -> Result<Cocktail, FetchError> {
        first_cocktail(self.get_drinks("lookup.php", &[("i", id)]).await?)
    }

    async fn thumbnail(&self, url: &str, size: u32) -> Result<Thumbnail, FetchError> {
        let bytes = self.get_bytes(url).await?;
        thumbnail::shrink(bytes, size).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer every connection on a local port with a fixed raw response
    async fn serve(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let mut buf = [0u8; 2048];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{}", addr)
    }

    fn local_client(base_url: &str) -> CocktailDbClient {
        CocktailDbClient {
            client: Client::builder().no_proxy().build().unwrap(),
            base_url: base_url.to_string(),
        }
    }

    const SERVER_ERROR: &str = "HTTP/1.1 500 Internal Server Error\r\n\
        Content-Type: text/html\r\nContent-Length: 6\r\nConnection: close\r\n\r\n<html>";

    const MARGARITA_OK: &str = "HTTP/1.1 200 OK\r\n\
        Content-Type: application/json\r\nContent-Length: 47\r\nConnection: close\r\n\r\n\
        {\"drinks\":[{\"idDrink\":\"11007\",\"strDrink\":\"M\"}]}";

    #[test]
    fn test_decode_lookup_body() {
        let body = r#"{"drinks":[{"idDrink":"11007","strDrink":"Margarita",
            "strIngredient1":"Tequila","strMeasure1":"1 1/2 oz",
            "strIngredient2":null,"strMeasure2":null}]}"#;

        let cocktail = first_cocktail(decode_drinks(body).unwrap()).unwrap();
        assert_eq!(cocktail.id, "11007");
        assert_eq!(cocktail.name, "Margarita");
        assert_eq!(cocktail.ingredients.len(), 1);
    }

    #[test]
    fn test_null_drinks_is_empty() {
        assert!(decode_drinks(r#"{"drinks":null}"#).unwrap().is_empty());
        assert!(decode_drinks(r#"{"drinks":"no data found"}"#).unwrap().is_empty());
        assert!(decode_drinks(r#"{}"#).unwrap().is_empty());
    }

    #[test]
    fn test_no_match_is_not_found() {
        let drinks = decode_drinks(r#"{"drinks":null}"#).unwrap();
        assert!(matches!(first_cocktail(drinks), Err(FetchError::NotFound)));
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        assert!(matches!(decode_drinks("<html>"), Err(FetchError::Decode(_))));
        assert!(matches!(
            decode_drinks(r#"{"drinks":[42]}"#),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn test_search_results_keep_order() {
        let body = r#"{"drinks":[{"idDrink":"1","strDrink":"Gin Fizz"},
            {"idDrink":"2","strDrink":"Gin Sour"}]}"#;
        let names: Vec<String> = decode_drinks(body)
            .unwrap()
            .iter()
            .map(|d| Cocktail::from_raw(d).name)
            .collect();
        assert_eq!(names, vec!["Gin Fizz", "Gin Sour"]);
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = CocktailDbClient::new("https://example.test/api/");
        assert_eq!(client.endpoint("random.php"), "https://example.test/api/random.php");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let client = local_client("http://127.0.0.1:9");
        let result = client.random().await;
        assert!(matches!(result, Err(FetchError::Http(_))));
    }

    #[tokio::test]
    async fn test_server_error_is_status_error_on_every_endpoint() {
        let client = local_client(&serve(SERVER_ERROR).await);

        assert!(matches!(client.random().await, Err(FetchError::Status(s)) if s.as_u16() == 500));
        assert!(matches!(client.search("x").await, Err(FetchError::Status(_))));
        assert!(matches!(client.lookup("1").await, Err(FetchError::Status(_))));
    }

    #[tokio::test]
    async fn test_thumbnail_server_error_is_status_error() {
        let base = serve(SERVER_ERROR).await;
        let client = local_client(&base);

        let result = client.thumbnail(&format!("{}/m.jpg", base), 64).await;
        assert!(matches!(result, Err(FetchError::Status(_))));
    }

    #[tokio::test]
    async fn test_success_status_decodes_drinks() {
        let client = local_client(&serve(MARGARITA_OK).await);

        let cocktail = client.lookup("11007").await.unwrap();
        assert_eq!(cocktail.id, "11007");
        assert_eq!(cocktail.name, "M");
    }
}
