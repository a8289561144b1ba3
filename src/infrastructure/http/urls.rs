//! Pure URL builders for the backend API and the page navigation targets.

/// Percent-encode a single query/path component (RFC 3986 unreserved set).
pub fn encode_component(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

pub fn suggestions_url(base_url: &str, query: &str) -> String {
    format!("{}/search/api/suggestions?q={}", base_url, encode_component(query))
}

pub fn quote_url(base_url: &str, symbol: &str) -> String {
    format!("{}/search/api/quote/{}", base_url, encode_component(symbol))
}

pub fn refresh_url(base_url: &str, symbol: &str) -> String {
    format!("{}/stock/api/{}/refresh", base_url, encode_component(symbol))
}

pub fn watchlist_add_url(base_url: &str) -> String {
    format!("{}/watchlist/api/add", base_url)
}

pub fn watchlist_remove_url(base_url: &str) -> String {
    format!("{}/watchlist/api/remove", base_url)
}

pub fn watchlist_list_url(base_url: &str) -> String {
    format!("{}/watchlist/api/list", base_url)
}

/// Full-page navigation target for a symbol's detail view.
pub fn detail_page_url(symbol: &str) -> String {
    format!("/stock/{}", encode_component(symbol))
}

/// Full-page navigation target for the search results page.
pub fn results_page_url(query: &str) -> String {
    format!("/search/results?q={}", encode_component(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_url() {
        assert_eq!(suggestions_url("", "apple inc"), "/search/api/suggestions?q=apple%20inc");
    }

    #[test]
    fn test_quote_url_with_base() {
        assert_eq!(quote_url("http://localhost:5000", "AAPL"), "http://localhost:5000/search/api/quote/AAPL");
    }

    #[test]
    fn test_encode_component_keeps_unreserved() {
        assert_eq!(encode_component("AB-1_c.~"), "AB-1_c.~");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn test_page_urls() {
        assert_eq!(detail_page_url("BRK.B"), "/stock/BRK.B");
        assert_eq!(results_page_url("micro soft"), "/search/results?q=micro%20soft");
    }
}
