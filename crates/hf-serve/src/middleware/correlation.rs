use axum::body::Body;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use ulid::Ulid;

#[derive(Clone, Debug)]
pub struct CorrelationId(pub String);

pub const HEADER_NAME: &str = "x-correlation-id";

/// GitHub's per-delivery GUID; used as the correlation id when the caller did
/// not send one, so logs line up with the delivery log on the GitHub side.
pub const DELIVERY_HEADER: &str = "x-github-delivery";

pub async fn correlation_middleware(mut request: Request<Body>, next: Next) -> Response {
    let id = resolve(request.headers());

    request.extensions_mut().insert(CorrelationId(id.clone()));
    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(HEADER_NAME), value);
    }
    response
}

fn resolve(headers: &HeaderMap) -> String {
    [HEADER_NAME, DELIVERY_HEADER]
        .into_iter()
        .find_map(|name| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
                .filter(|value| !value.is_empty())
        })
        .map_or_else(|| format!("corr_{}", Ulid::new()), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn explicit_id_wins_over_delivery() {
        let map = headers(&[(HEADER_NAME, "corr_given"), (DELIVERY_HEADER, "d-1")]);
        assert_eq!(resolve(&map), "corr_given");
    }

    #[test]
    fn delivery_guid_is_the_fallback() {
        let map = headers(&[(HEADER_NAME, "  "), (DELIVERY_HEADER, "72d3162e-cc78")]);
        assert_eq!(resolve(&map), "72d3162e-cc78");
    }

    #[test]
    fn generated_when_nothing_usable() {
        assert!(resolve(&HeaderMap::new()).starts_with("corr_"));
    }
}
